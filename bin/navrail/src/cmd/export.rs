//! Export command - emit the manifest as JSON for the site generator

use std::{fs, path::Path};

use color_eyre::eyre::{Result, WrapErr};
use navrail_core::SidebarManifest;

/// Run the export command.
///
/// Writes the bare root-to-entries mapping as JSON, to stdout or a file.
/// This is the form the external site generator consumes.
pub fn run(manifest_path: &Path, output: Option<&Path>, pretty: bool) -> Result<()> {
    tracing::info!(?manifest_path, ?output, pretty, "Exporting manifest");

    let manifest = SidebarManifest::load(manifest_path).wrap_err("Failed to load manifest")?;

    let json = if pretty {
        manifest.export_json_pretty()
    } else {
        manifest.export_json()
    }
    .wrap_err("Failed to serialize manifest")?;

    match output {
        Some(path) => {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent).wrap_err("Failed to create output directory")?;
            }
            fs::write(path, &json).wrap_err("Failed to write output file")?;

            tracing::info!(?path, "Exported manifest");
            println!("Exported: {}", path.display());
        }
        None => println!("{json}"),
    }

    Ok(())
}
