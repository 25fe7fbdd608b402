use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use folio_core::AppConfig;

mod commands;

#[derive(Parser)]
#[command(name = "folio")]
#[command(author, version, about = "A terminal achievements gallery")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Config file (defaults to ~/.config/folio/config.toml)
    #[arg(short = 'c', long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Open the gallery viewer
    Run {
        /// Achievements JSON file (overrides general.content_path)
        #[arg(long)]
        content: Option<PathBuf>,
    },
    /// Print the gallery items
    List {
        /// Achievements JSON file (overrides general.content_path)
        #[arg(long)]
        content: Option<PathBuf>,
    },
    /// Show the detected device capabilities and gallery mode
    Probe {
        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },
    /// Write a default config file
    InitConfig {
        /// Overwrite an existing config
        #[arg(long)]
        force: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config_path = cli.config.unwrap_or_else(AppConfig::config_path);

    match cli.command.unwrap_or(Commands::Run { content: None }) {
        Commands::Run { content } => {
            let config = load_config(&config_path, true)?;
            let content = content.unwrap_or_else(|| config.content_path());
            commands::run::run(&config, &content).await
        }
        Commands::List { content } => {
            let config = load_config(&config_path, false)?;
            let content = content.unwrap_or_else(|| config.content_path());
            commands::list::run(&content).await
        }
        Commands::Probe { json } => {
            let config = load_config(&config_path, false)?;
            commands::probe::run(&config, json)
        }
        // Skips loading; the existing file may not parse
        Commands::InitConfig { force } => {
            init_logging(&AppConfig::default(), false)?;
            commands::init_config::run(&config_path, force)
        }
    }
}

fn load_config(path: &Path, full_screen: bool) -> Result<AppConfig> {
    let config = AppConfig::load_from(path)?;
    init_logging(&config, full_screen)?;
    Ok(config)
}

/// RUST_LOG wins over `general.log_level`. The viewer owns the terminal,
/// so it logs to a file; every other command logs to stderr.
fn init_logging(config: &AppConfig, full_screen: bool) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.general.log_level));

    if full_screen {
        let path = AppConfig::log_path();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)?;
        tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(false)
                    .with_ansi(false)
                    .with_writer(Mutex::new(file)),
            )
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(false)
                    .with_writer(std::io::stderr),
            )
            .init();
    }

    Ok(())
}
