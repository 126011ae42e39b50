//! Specforge CLI - Command-line interface for the specification pipeline.

use clap::Parser;
use specforge_cli::commands;
use specforge_cli::{Cli, Command, Config, Formatter};
use specforge_store::SqliteStore;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    // Log to stderr so table and JSON output stay clean on stdout
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Load or create config
    let mut config = Config::load().unwrap_or_else(|_| {
        let cfg = Config::default();
        cfg.save().ok();
        cfg
    });

    // Override database path if specified
    if let Some(database) = cli.database {
        config.database_path = database;
    }

    // Determine output format
    let format = cli
        .format
        .map(Into::into)
        .unwrap_or(config.settings.format);

    // Determine color setting
    let color_enabled = !cli.no_color && config.settings.color;

    // Create formatter
    let formatter = Formatter::new(format, color_enabled);

    // Open the store
    if let Some(parent) = config.database_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    let mut store = SqliteStore::new(&config.database_path)?;

    // Handle commands
    match cli.command {
        Command::Ingest(args) => {
            commands::execute_ingest(args, &mut store, &formatter).await?;
        }
        Command::Structure(args) => {
            commands::execute_structure(args, &config, &mut store, &formatter).await?;
        }
        Command::Consolidate => {
            commands::execute_consolidate(&mut store, &formatter).await?;
        }
        Command::FixProcessors => {
            commands::execute_fix_processors(&mut store, &formatter).await?;
        }
        Command::Validate => {
            commands::execute_validate(&store, &formatter).await?;
        }
        Command::Preview(args) => {
            commands::execute_preview(args, &store, &formatter).await?;
        }
    }

    Ok(())
}
