use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::sync::Arc;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use camq_core::Answerer;
use camq_http::HttpAnswerer;

mod config;
mod oneshot;
mod readline;
mod setup;
mod tui;

use config::Config;

/// Log level for tracing output
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    /// Most verbose
    Trace,
    /// Request/response details
    Debug,
    /// High-level flow
    Info,
    /// Quiet: only warnings and errors
    Warn,
    /// Minimal: only errors
    Error,
}

impl LogLevel {
    fn as_filter(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

#[derive(Parser)]
#[command(name = "camq")]
#[command(author, version, about = "camq: ask the CAM question-answering service", long_about = None)]
pub struct Cli {
    /// Question to ask (prints the answer and exits)
    #[arg(short, long)]
    pub query: Option<String>,

    /// Endpoint URL (overrides config and CAMQ_ENDPOINT)
    #[arg(short, long)]
    pub endpoint: Option<String>,

    /// Use the line-oriented interface instead of the TUI
    #[arg(long)]
    pub no_tui: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, value_enum, default_value = "warn")]
    pub log_level: LogLevel,

    /// Enable debug logging (shorthand for --log-level debug)
    #[arg(short, long)]
    pub debug: bool,

    /// Write logs to file (JSON-lines format)
    #[arg(long)]
    pub log_file: Option<std::path::PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the effective configuration
    Config,
    /// Write a configuration template to ~/.config/camq
    Setup,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let will_use_tui = cli.command.is_none()
        && cli.query.is_none()
        && !cli.no_tui
        && atty::is(atty::Stream::Stdout);

    init_logging(&cli, will_use_tui)?;

    // Handle setup before config is loaded
    if matches!(&cli.command, Some(Commands::Setup)) {
        return setup::run();
    }

    let config = Config::load()?.with_endpoint_override(cli.endpoint.as_deref());
    tracing::debug!(endpoint = %config.endpoint, "Configuration loaded");

    match &cli.command {
        Some(Commands::Config) => show_config(&config),
        Some(Commands::Setup) => unreachable!(),
        None => {
            let answerer: Arc<dyn Answerer> =
                Arc::new(HttpAnswerer::new().with_endpoint(config.endpoint.as_str()));

            if let Some(query) = &cli.query {
                let mut stdout = std::io::stdout();
                let answered = oneshot::run(answerer.as_ref(), query, &mut stdout).await?;
                if !answered {
                    std::process::exit(1);
                }
                Ok(())
            } else if will_use_tui {
                tui::run_tui(&config, answerer).await
            } else {
                readline::run_readline(answerer.as_ref(), &config.title).await
            }
        }
    }
}

fn init_logging(cli: &Cli, will_use_tui: bool) -> Result<()> {
    let log_level = if cli.debug {
        LogLevel::Debug
    } else {
        cli.log_level
    };
    let filter = EnvFilter::new(log_level.as_filter());

    if let Some(log_path) = &cli.log_file {
        let file = std::fs::File::create(log_path)
            .with_context(|| format!("Failed to create log file: {:?}", log_path))?;
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().json().with_writer(std::sync::Mutex::new(file)))
            .init();
    } else if will_use_tui {
        // Anything written to the terminal would corrupt the screen
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::sink)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
    }

    Ok(())
}

fn show_config(config: &Config) -> Result<()> {
    let path = Config::config_path()?;
    let status = if path.exists() { "" } else { " (not found, using defaults)" };
    println!("# {}{}", path.display(), status);
    print!("{}", toml::to_string_pretty(config)?);
    Ok(())
}
