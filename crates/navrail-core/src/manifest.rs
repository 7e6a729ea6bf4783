//! Sidebar manifest types and loading.

use std::{collections::BTreeMap, fmt, path::Path};

use serde::{
    Deserialize, Deserializer, Serialize,
    de::{MapAccess, Visitor},
};

use crate::error::{ManifestError, Result};

/// Course manifest shipped with the repository.
const BUNDLED_MANIFEST: &str = include_str!("../../../manifest/sidebar.toml");

/// On-disk manifest formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ManifestFormat {
    /// TOML manifest (.toml files).
    Toml,
    /// YAML manifest (.yaml / .yml files).
    Yaml,
    /// JSON manifest (.json files).
    Json,
}

impl ManifestFormat {
    /// Determine manifest format from file extension.
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_lowercase().as_str() {
            "toml" => Some(Self::Toml),
            "yaml" | "yml" => Some(Self::Yaml),
            "json" => Some(Self::Json),
            _ => None,
        }
    }

    /// Determine manifest format from a file path.
    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension()
            .and_then(|e| e.to_str())
            .and_then(Self::from_extension)
    }

    /// Get the canonical file extension for this format.
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Toml => "toml",
            Self::Yaml => "yaml",
            Self::Json => "json",
        }
    }
}

/// A single sidebar line item: a display label paired with a document link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavEntry {
    /// Display label shown in the sidebar.
    pub text: String,

    /// Site-relative path of the target document.
    pub link: String,
}

impl NavEntry {
    /// Create a new navigation entry.
    pub fn new(text: impl Into<String>, link: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            link: link.into(),
        }
    }
}

/// Sidebar navigation manifest: root paths mapped to ordered entry lists.
///
/// The manifest is constructed once at site-build time and read-only
/// thereafter. Entry order within a root is display order and is preserved
/// exactly through load and serialize.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SidebarManifest {
    /// Navigation trees keyed by root path.
    #[serde(deserialize_with = "deserialize_unique_roots")]
    sidebar: BTreeMap<String, Vec<NavEntry>>,
}

impl SidebarManifest {
    /// Load a manifest from a file, dispatching on the file extension.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(ManifestError::manifest(format!(
                "Manifest file not found: {}",
                path.display()
            )));
        }

        let content = std::fs::read_to_string(path)?;
        let manifest: Self = match ManifestFormat::from_path(path) {
            Some(ManifestFormat::Toml) => toml::from_str(&content).map_err(|e| {
                ManifestError::manifest_with_source(
                    format!("Failed to parse manifest file: {}", path.display()),
                    e,
                )
            })?,
            Some(ManifestFormat::Yaml) => serde_yaml::from_str(&content).map_err(|e| {
                ManifestError::manifest_with_source(
                    format!("Failed to parse manifest file: {}", path.display()),
                    e,
                )
            })?,
            Some(ManifestFormat::Json) => serde_json::from_str(&content).map_err(|e| {
                ManifestError::manifest_with_source(
                    format!("Failed to parse manifest file: {}", path.display()),
                    e,
                )
            })?,
            None => {
                return Err(ManifestError::manifest(format!(
                    "Unsupported manifest format: {}",
                    path.display()
                )));
            }
        };

        manifest.validate()?;
        Ok(manifest)
    }

    /// Parse a manifest from a TOML string.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let manifest: Self = toml::from_str(content)?;
        manifest.validate()?;
        Ok(manifest)
    }

    /// Parse a manifest from a YAML string.
    pub fn from_yaml_str(content: &str) -> Result<Self> {
        let manifest: Self = serde_yaml::from_str(content)?;
        manifest.validate()?;
        Ok(manifest)
    }

    /// Parse a manifest from a JSON string.
    pub fn from_json_str(content: &str) -> Result<Self> {
        let manifest: Self = serde_json::from_str(content)?;
        manifest.validate()?;
        Ok(manifest)
    }

    /// Build a manifest from `(root, entries)` pairs.
    ///
    /// Duplicate root paths are rejected, matching the loader's policy.
    pub fn from_entries<I>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = (String, Vec<NavEntry>)>,
    {
        let mut sidebar = BTreeMap::new();
        for (root, list) in entries {
            if sidebar.insert(root.clone(), list).is_some() {
                return Err(ManifestError::manifest(format!(
                    "duplicate root path: {root:?}"
                )));
            }
        }

        let manifest = Self { sidebar };
        manifest.validate()?;
        Ok(manifest)
    }

    /// The course manifest embedded at compile time from `manifest/sidebar.toml`.
    pub fn bundled() -> Result<Self> {
        Self::from_toml_str(BUNDLED_MANIFEST)
    }

    /// Look up the navigation entries for a root path, if configured.
    ///
    /// The match is exact: no prefix or fuzzy matching.
    pub fn get(&self, root: &str) -> Option<&[NavEntry]> {
        self.sidebar.get(root).map(Vec::as_slice)
    }

    /// Resolve the ordered navigation entries for a root path.
    ///
    /// Returns [`ManifestError::UnknownRoot`] when no navigation is
    /// configured for the path. The caller decides how to degrade.
    pub fn resolve(&self, root: &str) -> Result<&[NavEntry]> {
        self.get(root)
            .ok_or_else(|| ManifestError::unknown_root(root))
    }

    /// Iterate over the configured root paths.
    pub fn roots(&self) -> impl Iterator<Item = &str> {
        self.sidebar.keys().map(String::as_str)
    }

    /// Iterate over `(root, entries)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[NavEntry])> {
        self.sidebar.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }

    /// Number of configured root paths.
    pub fn len(&self) -> usize {
        self.sidebar.len()
    }

    /// Whether the manifest has no root paths.
    pub fn is_empty(&self) -> bool {
        self.sidebar.is_empty()
    }

    /// Serialize to the persisted TOML form.
    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Serialize to the persisted JSON form (reloadable by [`Self::from_json_str`]).
    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Serialize the bare root-to-entries mapping for the site generator.
    ///
    /// This matches the shape the generator consumes and is not wrapped in a
    /// `sidebar` table, so it is not reloadable as a manifest file.
    pub fn export_json(&self) -> Result<String> {
        Ok(serde_json::to_string(&self.sidebar)?)
    }

    /// Pretty-printed variant of [`Self::export_json`].
    pub fn export_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.sidebar)?)
    }

    /// Validate the manifest.
    fn validate(&self) -> Result<()> {
        if self.sidebar.is_empty() {
            return Err(ManifestError::manifest("manifest defines no root paths"));
        }

        for (root, entries) in &self.sidebar {
            if root.is_empty() {
                return Err(ManifestError::manifest("root path cannot be empty"));
            }
            if !root.starts_with('/') {
                tracing::warn!(root = %root, "root path should start with '/'");
            }

            for (idx, entry) in entries.iter().enumerate() {
                if entry.text.is_empty() {
                    return Err(ManifestError::manifest(format!(
                        "entry {idx} under root {root:?} has an empty text label"
                    )));
                }
                if entry.link.is_empty() {
                    return Err(ManifestError::manifest(format!(
                        "entry {idx} ({:?}) under root {root:?} has an empty link",
                        entry.text
                    )));
                }
                if !entry.link.starts_with('/') {
                    tracing::warn!(root = %root, link = %entry.link, "link should be site-relative");
                }
            }
        }

        Ok(())
    }
}

/// Deserialize the root map, rejecting duplicate root paths.
///
/// Map formats that can express duplicate keys (YAML, JSON) would otherwise
/// silently keep the last occurrence.
fn deserialize_unique_roots<'de, D>(
    deserializer: D,
) -> std::result::Result<BTreeMap<String, Vec<NavEntry>>, D::Error>
where
    D: Deserializer<'de>,
{
    struct UniqueRoots;

    impl<'de> Visitor<'de> for UniqueRoots {
        type Value = BTreeMap<String, Vec<NavEntry>>;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("a map of root paths to navigation entry lists")
        }

        fn visit_map<A>(self, mut access: A) -> std::result::Result<Self::Value, A::Error>
        where
            A: MapAccess<'de>,
        {
            let mut map = BTreeMap::new();
            while let Some((root, entries)) = access.next_entry::<String, Vec<NavEntry>>()? {
                if map.insert(root.clone(), entries).is_some() {
                    return Err(serde::de::Error::custom(format!(
                        "duplicate root path: {root:?}"
                    )));
                }
            }
            Ok(map)
        }
    }

    deserializer.deserialize_map(UniqueRoots)
}
