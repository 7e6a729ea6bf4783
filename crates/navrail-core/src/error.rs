//! Error types for the navrail core library.

use thiserror::Error;

/// Result type alias using `ManifestError`.
pub type Result<T> = std::result::Result<T, ManifestError>;

/// Core error types for navrail.
#[derive(Error, Debug)]
pub enum ManifestError {
    /// Manifest loading or validation error.
    #[error("Manifest error: {message}")]
    Manifest {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// No navigation is configured for the requested root path.
    #[error("no navigation configured for root path {root:?}")]
    UnknownRoot { root: String },

    /// File system I/O error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    /// TOML serialization error.
    #[error("TOML serialize error: {0}")]
    TomlSer(#[from] toml::ser::Error),

    /// YAML parsing or serialization error.
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// JSON parsing or serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ManifestError {
    /// Create a new manifest error with a message.
    pub fn manifest(message: impl Into<String>) -> Self {
        Self::Manifest {
            message: message.into(),
            source: None,
        }
    }

    /// Create a new manifest error with source.
    pub fn manifest_with_source(
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Manifest {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a new unknown-root error.
    pub fn unknown_root(root: impl Into<String>) -> Self {
        Self::UnknownRoot { root: root.into() }
    }
}
