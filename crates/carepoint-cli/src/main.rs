use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use carepoint_core::AppConfig;

mod commands;

#[derive(Parser)]
#[command(name = "carepoint")]
#[command(author, version, about = "Book hospital appointments from the terminal")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Config file to use instead of ~/.config/carepoint/config.toml
    #[arg(short = 'c', long = "config", global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the TUI
    Run {
        /// Start with the bottom tab bar unmounted
        #[arg(long)]
        no_tab_bar: bool,
    },
    /// List hospitals
    Hospitals {
        /// Only hospitals whose name or location contains this text
        #[arg(long, short)]
        search: Option<String>,
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// List doctors
    Doctors {
        /// Only doctors at this hospital id
        #[arg(long)]
        hospital: Option<String>,
        /// Only doctors with this specialty
        #[arg(long)]
        specialty: Option<String>,
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Inspect or create the config file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Print the config file path
    Path,
    /// Write a default config file if none exists
    Init,
}

/// `RUST_LOG` wins over the configured level
fn env_filter(config: &AppConfig) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.general.log_level))
}

/// Log to `<data_dir>/logs/carepoint.log` while the TUI owns the terminal
fn init_file_logging(config: &AppConfig) -> Result<WorkerGuard> {
    let log_dir = config.log_dir();
    std::fs::create_dir_all(&log_dir)?;
    let file_appender = tracing_appender::rolling::never(&log_dir, "carepoint.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::registry()
        .with(env_filter(config))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(non_blocking)
                .with_ansi(false)
                .with_target(false),
        )
        .init();
    Ok(guard)
}

fn init_stderr_logging(config: &AppConfig) {
    tracing_subscriber::registry()
        .with(env_filter(config))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config_path = cli.config.unwrap_or_else(AppConfig::config_path);
    let config = AppConfig::load_from(&config_path)?;

    match cli.command {
        Some(Commands::Run { no_tab_bar }) => {
            let _guard = init_file_logging(&config)?;
            commands::run::run(config, config_path, no_tab_bar).await
        }
        None => {
            let _guard = init_file_logging(&config)?;
            commands::run::run(config, config_path, false).await
        }
        Some(Commands::Hospitals { search, json }) => {
            init_stderr_logging(&config);
            commands::hospitals::run(&config, search.as_deref(), json).await
        }
        Some(Commands::Doctors {
            hospital,
            specialty,
            json,
        }) => {
            init_stderr_logging(&config);
            commands::doctors::run(&config, hospital.as_deref(), specialty.as_deref(), json).await
        }
        Some(Commands::Config { action }) => {
            init_stderr_logging(&config);
            match action {
                ConfigAction::Path => commands::config::path(&config_path),
                ConfigAction::Init => commands::config::init(&config_path),
            }
        }
    }
}
