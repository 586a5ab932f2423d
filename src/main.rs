//! outcome CLI - validate and inspect error catalogs.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use outcome::{Config, ErrorCatalog};
use std::path::{Path, PathBuf};
use tracing::{Level, info};
use tracing_subscriber::FmtSubscriber;

#[derive(Parser)]
#[command(name = "outcome")]
#[command(version)]
#[command(about = "Validate and inspect error catalogs")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to the error catalog file
    #[arg(short, long, global = true, default_value = "errors.toml")]
    config: PathBuf,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate the error catalog
    Validate,

    /// Show a single catalog error
    Show {
        /// Entry name (or code, with --by-code)
        name: String,

        /// Look the entry up by its code instead of its name
        #[arg(long)]
        by_code: bool,

        /// Print as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show example catalog
    Example,
}

fn setup_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_thread_ids(false)
        .compact()
        .finish();
    tracing::subscriber::set_global_default(subscriber).expect("Failed to set subscriber");
}

fn print_example_config() {
    let example = r#"# outcome error catalog

[catalog]
# Status for entries that do not set one
default_status = 400

[errors.user_not_found]
code = "User.NotFound"
message = "The user does not exist"
status = 404

[errors.invalid_email]
code = "User.InvalidEmail"
message = "The email address is malformed"

[errors.session_expired]
code = "Auth.SessionExpired"
message = "Sign in again to continue"
status = 401
"#;
    println!("{example}");
}

fn load_catalog(path: &Path) -> Result<ErrorCatalog> {
    let config = Config::from_file(path)
        .with_context(|| format!("Failed to load catalog from {path:?}"))?;
    ErrorCatalog::from_config(&config).context("Invalid error catalog")
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_logging(cli.verbose);

    match cli.command {
        Commands::Example => {
            print_example_config();
        }

        Commands::Validate => {
            let catalog = load_catalog(&cli.config)?;

            info!("Catalog is valid");
            info!("  Entries: {}", catalog.len());
            for name in catalog.names() {
                info!("  - {name}");
            }
        }

        Commands::Show {
            name,
            by_code,
            json,
        } => {
            let catalog = load_catalog(&cli.config)?;
            let found = if by_code {
                catalog.by_code(&name)
            } else {
                catalog.get(&name)
            };
            let error = found
                .require()
                .with_context(|| format!("No catalog error matches '{name}'"))?;

            if json {
                let view = serde_json::json!({
                    "code": error.code(),
                    "message": error.message(),
                    "status": error.status(),
                });
                println!("{}", serde_json::to_string_pretty(&view)?);
            } else {
                println!("Code:     {}", error.code());
                println!("Message:  {}", error.message());
                println!("Status:   {}", error.status());
            }
        }
    }

    Ok(())
}
