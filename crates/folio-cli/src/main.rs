use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use folio_core::AppConfig;

mod commands;

#[derive(Parser)]
#[command(name = "folio")]
#[command(author, version, about = "A portfolio landing page that lives in your terminal")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Page file to display (shorthand for `run`)
    page: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Display a page (the built-in sample when no file is given)
    Run {
        /// Page file to display
        page: Option<PathBuf>,
    },
    /// Write the sample page to a file to start from
    Init {
        /// Destination path
        path: PathBuf,
    },
    /// Validate a page file and report its contents
    Check {
        /// Page file to validate
        page: PathBuf,
    },
}

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "warn".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    let cli = Cli::parse();

    // Load configuration
    let config = Arc::new(AppConfig::load()?);

    match cli.command {
        Some(Commands::Run { page }) => commands::run::run(config, page),
        None => commands::run::run(config, cli.page),
        Some(Commands::Init { path }) => commands::init::run(&path),
        Some(Commands::Check { page }) => commands::check::run(&page),
    }
}
