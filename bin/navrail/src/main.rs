//! Navrail CLI
//!
//! Sidebar navigation manifest toolkit for static documentation sites.
//!
//! This is the binary entry point. The library functionality is in `lib.rs`.

use clap::Parser;
use color_eyre::eyre::Result;

/// Command-line interface for navrail.
#[derive(Parser)]
#[command(
    name = "navrail",
    version,
    about = "Sidebar navigation manifest toolkit"
)]
struct Cli {
    /// Path to the manifest file
    #[arg(short, long, default_value = "manifest/sidebar.toml")]
    manifest: std::path::PathBuf,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

/// Available CLI commands.
#[derive(clap::Subcommand)]
enum Commands {
    /// Validate the manifest
    Check {
        /// Treat warnings as errors
        #[arg(long)]
        strict: bool,
        /// Cross-check entry links against a documents directory
        #[arg(long)]
        docs_dir: Option<std::path::PathBuf>,
    },
    /// Print the navigation entries for a root path
    Resolve {
        /// Root path to look up (e.g. "/")
        root: String,
        /// Print the entries as JSON
        #[arg(long)]
        json: bool,
    },
    /// Export the manifest as JSON for the site generator
    Export {
        /// Output file (stdout if omitted)
        #[arg(short, long)]
        output: Option<std::path::PathBuf>,
        /// Pretty-print the JSON output
        #[arg(long)]
        pretty: bool,
    },
    /// Create a starter manifest file
    Init {
        /// Path for the new manifest (defaults to --manifest)
        path: Option<std::path::PathBuf>,
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();
    navrail::init_tracing(cli.verbose);

    match cli.command {
        Commands::Check { strict, docs_dir } => {
            navrail::cmd::check::run(&cli.manifest, strict, docs_dir.as_deref())?;
        }
        Commands::Resolve { root, json } => {
            navrail::cmd::resolve::run(&cli.manifest, &root, json)?;
        }
        Commands::Export { output, pretty } => {
            navrail::cmd::export::run(&cli.manifest, output.as_deref(), pretty)?;
        }
        Commands::Init { path, force } => {
            navrail::cmd::init::run(path.as_deref().unwrap_or(&cli.manifest), force)?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;

    #[test]
    fn test_cli_check_command_parsing() {
        let args = ["navrail", "check", "--strict"];
        let cli = Cli::parse_from(args);

        assert_eq!(
            cli.manifest,
            std::path::PathBuf::from("manifest/sidebar.toml")
        );
        assert_eq!(cli.verbose, 0);

        match cli.command {
            Commands::Check { strict, docs_dir } => {
                assert!(strict);
                assert!(docs_dir.is_none());
            }
            _ => panic!("Expected Check command"),
        }
    }

    #[test]
    fn test_cli_check_with_docs_dir() {
        let args = ["navrail", "check", "--docs-dir", "docs"];
        let cli = Cli::parse_from(args);

        match cli.command {
            Commands::Check { strict, docs_dir } => {
                assert!(!strict);
                assert_eq!(docs_dir, Some(std::path::PathBuf::from("docs")));
            }
            _ => panic!("Expected Check command"),
        }
    }

    #[test]
    fn test_cli_resolve_command_parsing() {
        let args = ["navrail", "resolve", "/", "--json"];
        let cli = Cli::parse_from(args);

        match cli.command {
            Commands::Resolve { root, json } => {
                assert_eq!(root, "/");
                assert!(json);
            }
            _ => panic!("Expected Resolve command"),
        }
    }

    #[test]
    fn test_cli_export_command_parsing() {
        let args = ["navrail", "export", "--output", "sidebar.json", "--pretty"];
        let cli = Cli::parse_from(args);

        match cli.command {
            Commands::Export { output, pretty } => {
                assert_eq!(output, Some(std::path::PathBuf::from("sidebar.json")));
                assert!(pretty);
            }
            _ => panic!("Expected Export command"),
        }
    }

    #[test]
    fn test_cli_init_command_parsing() {
        let args = ["navrail", "init", "manifest/new.toml", "--force"];
        let cli = Cli::parse_from(args);

        match cli.command {
            Commands::Init { path, force } => {
                assert_eq!(path, Some(std::path::PathBuf::from("manifest/new.toml")));
                assert!(force);
            }
            _ => panic!("Expected Init command"),
        }
    }

    #[test]
    fn test_cli_verbosity_flags() {
        let args = ["navrail", "-vvv", "check"];
        let cli = Cli::parse_from(args);
        assert_eq!(cli.verbose, 3);
    }

    #[test]
    fn test_cli_custom_manifest_path() {
        let args = ["navrail", "--manifest", "nav.yaml", "export"];
        let cli = Cli::parse_from(args);
        assert_eq!(cli.manifest, std::path::PathBuf::from("nav.yaml"));
    }
}
