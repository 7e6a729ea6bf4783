//! Navrail CLI Library
//!
//! This library provides the core functionality for the navrail sidebar
//! manifest CLI. It is designed to be used by the binary entry point while
//! also exposing public APIs for documentation and integration purposes.
//!
//! # Modules
//!
//! - [`cmd`] - Command implementations (check, resolve, export, init)
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//!
//! use navrail::cmd;
//!
//! // Export the manifest as JSON for the site generator
//! cmd::export::run(Path::new("manifest/sidebar.toml"), None, true).unwrap();
//! ```

pub mod cmd;

// Re-export core types for convenience
pub use navrail_core::{ManifestError, NavEntry, SidebarManifest};

/// Initialize tracing with the specified verbosity level.
///
/// # Arguments
///
/// * `verbose` - Verbosity level (0 = WARN, 1 = INFO, 2 = DEBUG, 3+ = TRACE)
///
/// # Example
///
/// ```no_run
/// navrail::init_tracing(2); // Enable DEBUG level logging
/// ```
pub fn init_tracing(verbose: u8) {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    let level = match verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        2 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()))
        .init();
}
