//! Resolve command - look up the navigation entries for a root path

use std::path::Path;

use color_eyre::eyre::{Result, WrapErr};
use navrail_core::SidebarManifest;

/// Run the resolve command.
///
/// Prints the ordered entries for a root path. A lookup miss is a failure
/// exit; the manifest never substitutes a partial or default result.
pub fn run(manifest_path: &Path, root: &str, json: bool) -> Result<()> {
    tracing::info!(?manifest_path, root, "Resolving navigation entries");

    let manifest = SidebarManifest::load(manifest_path).wrap_err("Failed to load manifest")?;
    let entries = manifest
        .resolve(root)
        .wrap_err_with(|| format!("No sidebar for root path {root:?}"))?;

    if json {
        println!("{}", serde_json::to_string_pretty(entries)?);
        return Ok(());
    }

    println!("{} entries under {root:?}:", entries.len());
    println!();
    for entry in entries {
        println!("  {}  →  {}", entry.text, entry.link);
    }

    Ok(())
}
