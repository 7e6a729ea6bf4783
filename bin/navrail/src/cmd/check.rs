//! Check command - validate the sidebar manifest

use std::{
    collections::{BTreeSet, HashSet},
    path::Path,
};

use color_eyre::eyre::{Result, bail};
use navrail_core::SidebarManifest;

/// Validation result.
#[derive(Debug, Default)]
struct ValidationResult {
    errors: Vec<String>,
    warnings: Vec<String>,
}

impl ValidationResult {
    fn add_error(&mut self, msg: impl Into<String>) {
        self.errors.push(msg.into());
    }

    fn add_warning(&mut self, msg: impl Into<String>) {
        self.warnings.push(msg.into());
    }

    fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }
}

/// Run the check command.
///
/// Validates the manifest and, when a documents directory is given,
/// cross-checks entry links against it.
pub fn run(manifest_path: &Path, strict: bool, docs_dir: Option<&Path>) -> Result<()> {
    tracing::info!(?manifest_path, strict, ?docs_dir, "Checking sidebar manifest");

    let mut result = ValidationResult::default();

    // Validate the manifest file
    println!("Checking manifest...");
    let manifest = match SidebarManifest::load(manifest_path) {
        Ok(m) => {
            println!("  ✓ Manifest valid");
            Some(m)
        }
        Err(e) => {
            result.add_error(format!("Manifest error: {e}"));
            println!("  ✗ Manifest invalid: {e}");
            None
        }
    };

    if let Some(ref manifest) = manifest {
        println!();
        println!("Checking navigation entries...");
        check_entries(manifest, &mut result);

        // Cross-check links against documents on disk
        if let Some(docs_dir) = docs_dir {
            println!();
            println!("Checking document links...");
            check_links(manifest, docs_dir, &mut result);

            println!();
            println!("Checking for unreferenced documents...");
            check_orphans(manifest, docs_dir, &mut result);
        }
    }

    // Print summary
    println!();
    println!("Summary:");
    println!("  Errors:   {}", result.errors.len());
    println!("  Warnings: {}", result.warnings.len());

    if result.has_errors() {
        println!();
        println!("Errors:");
        for err in &result.errors {
            println!("  ✗ {err}");
        }
    }

    if result.has_warnings() {
        println!();
        println!("Warnings:");
        for warn in &result.warnings {
            println!("  ⚠ {warn}");
        }
    }

    // Determine exit status
    if result.has_errors() {
        bail!("Validation failed with {} error(s)", result.errors.len());
    }

    if strict && result.has_warnings() {
        bail!(
            "Validation failed with {} warning(s) (strict mode)",
            result.warnings.len()
        );
    }

    println!();
    println!("✓ All checks passed");

    Ok(())
}

/// Check navigation entries for per-root issues.
fn check_entries(manifest: &SidebarManifest, result: &mut ValidationResult) {
    for (root, entries) in manifest.iter() {
        println!("  ✓ {root}: {} entries", entries.len());

        for link in duplicate_links(entries.iter().map(|e| e.link.as_str())) {
            result.add_warning(format!("{root}: duplicate link {link:?}"));
        }
    }
}

/// Collect links that appear more than once, in first-seen order.
fn duplicate_links<'a>(links: impl Iterator<Item = &'a str>) -> Vec<&'a str> {
    let mut seen = HashSet::new();
    let mut duplicates = Vec::new();

    for link in links {
        if !seen.insert(link) && !duplicates.contains(&link) {
            duplicates.push(link);
        }
    }

    duplicates
}

/// Warn for entries whose link has no matching document file.
fn check_links(manifest: &SidebarManifest, docs_dir: &Path, result: &mut ValidationResult) {
    if !docs_dir.exists() {
        result.add_warning(format!(
            "Documents directory does not exist: {}",
            docs_dir.display()
        ));
        return;
    }

    let mut checked = 0;
    let mut missing = 0;

    for (root, entries) in manifest.iter() {
        for entry in entries {
            checked += 1;
            if !link_has_document(docs_dir, &entry.link) {
                result.add_warning(format!("{root}: no document found for link {:?}", entry.link));
                missing += 1;
            }
        }
    }

    if missing == 0 {
        println!("  ✓ All {checked} links have documents");
    } else {
        println!("  ⚠ {missing}/{checked} links have no document");
    }
}

/// Whether a site-relative link maps to a document file under `docs_dir`.
///
/// Links carry no extension, so probe the exact path, the `.md`/`.html`
/// forms, and the directory-index form.
fn link_has_document(docs_dir: &Path, link: &str) -> bool {
    let rel = link.trim_start_matches('/');
    if rel.is_empty() {
        return docs_dir.join("index.md").exists() || docs_dir.join("index.html").exists();
    }

    docs_dir.join(rel).is_file()
        || docs_dir.join(format!("{rel}.md")).exists()
        || docs_dir.join(format!("{rel}.html")).exists()
        || docs_dir.join(rel).join("index.md").exists()
}

/// Warn for documents on disk that no sidebar entry links to.
fn check_orphans(manifest: &SidebarManifest, docs_dir: &Path, result: &mut ValidationResult) {
    if !docs_dir.exists() {
        return;
    }

    let linked: BTreeSet<String> = manifest
        .iter()
        .flat_map(|(_, entries)| entries.iter())
        .map(|entry| entry.link.trim_start_matches('/').to_string())
        .collect();

    let mut scanned = 0;
    let mut orphans = 0;

    for entry in walkdir::WalkDir::new(docs_dir)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
    {
        let path = entry.path();
        let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");
        if !matches!(ext, "md" | "html") {
            continue;
        }

        scanned += 1;

        let rel = path.strip_prefix(docs_dir).unwrap_or(path);
        let rel = rel.to_string_lossy();
        let stem = rel
            .strip_suffix(".md")
            .or_else(|| rel.strip_suffix(".html"))
            .unwrap_or(&rel);

        // index documents are addressed by their directory
        let as_index = stem.strip_suffix("index").map(|s| s.trim_end_matches('/'));

        let referenced = linked.contains(stem)
            || linked.contains(rel.as_ref())
            || as_index.is_some_and(|dir| linked.contains(dir));

        if !referenced {
            result.add_warning(format!("Document not referenced in sidebar: {rel}"));
            orphans += 1;
        }
    }

    if orphans == 0 {
        println!("  ✓ All {scanned} documents are referenced");
    } else {
        println!("  ⚠ {orphans}/{scanned} documents are not referenced");
    }
}
