//! Init command - create a starter manifest file

use std::{fs, path::Path};

use color_eyre::eyre::{Result, WrapErr, bail};

const STARTER_MANIFEST: &str = r#"# Sidebar navigation manifest.
#
# Each [[sidebar."<root>"]] block adds one entry to the navigation tree for
# that root path, in display order.

[[sidebar."/"]]
text = "Introduction"
link = "/docs/introduction"

[[sidebar."/"]]
text = "Getting Started"
link = "/docs/getting-started"
"#;

/// Run the init command.
///
/// Creates a starter manifest file with example entries.
pub fn run(path: &Path, force: bool) -> Result<()> {
    tracing::info!(?path, force, "Creating starter manifest");

    if path.exists() && !force {
        bail!(
            "{} already exists (use --force to overwrite)",
            path.display()
        );
    }

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).wrap_err("Failed to create directories")?;
    }

    fs::write(path, STARTER_MANIFEST).wrap_err("Failed to write manifest")?;

    tracing::info!(?path, "Created starter manifest");
    println!("Created: {}", path.display());

    Ok(())
}

#[cfg(test)]
mod tests {
    use navrail_core::SidebarManifest;

    use super::*;

    #[test]
    fn test_starter_manifest_is_loadable() {
        let manifest = SidebarManifest::from_toml_str(STARTER_MANIFEST).expect("parse starter");
        let entries = manifest.resolve("/").expect("resolve root");
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].text, "Introduction");
    }

    #[test]
    fn test_init_refuses_overwrite() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join("sidebar.toml");
        fs::write(&path, "existing").expect("write");

        let result = run(&path, false);
        assert!(result.is_err());
        assert_eq!(fs::read_to_string(&path).expect("read"), "existing");
    }

    #[test]
    fn test_init_force_overwrites() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join("sidebar.toml");
        fs::write(&path, "existing").expect("write");

        run(&path, true).expect("init");

        let manifest = SidebarManifest::load(&path).expect("load created manifest");
        assert!(manifest.get("/").is_some());
    }
}
