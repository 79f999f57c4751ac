//! CLI binary for jarvis.

use anyhow::Context;
use clap::{Parser, Subcommand};
use jarvis::AssistantConfig;
use jarvis::audio::capture::CpalCapture;
use jarvis::config::ListenBackend;
use std::path::PathBuf;
use tokio_util::sync::CancellationToken;
use tracing::info;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

const DEFAULT_LOG_FILTER: &str = "jarvis=info,jarvis_knowledge=info,hf_hub=warn,ort=warn";

/// Jarvis: a voice-driven command dispatcher.
#[derive(Parser)]
#[command(name = "jarvis", version, about)]
struct Cli {
    /// Path to TOML configuration file.
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Write logs to this file instead of stderr.
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    /// Subcommand to run.
    #[command(subcommand)]
    command: Option<Command>,
}

/// Available commands.
#[derive(Subcommand)]
enum Command {
    /// Greet and listen for commands (default).
    Run {
        /// Read typed lines instead of using the microphone.
        #[arg(long)]
        typed: bool,
    },

    /// List available audio input devices.
    Devices,

    /// Write the default configuration file.
    InitConfig {
        /// Overwrite an existing file.
        #[arg(long)]
        force: bool,
    },

    /// Download the speech-to-text model.
    Models,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let log_guard = init_tracing(cli.log_file.as_deref())?;

    match cli.command.unwrap_or(Command::Run { typed: false }) {
        Command::Run { typed } => {
            let mut config = AssistantConfig::load(cli.config.as_deref())?;
            if typed {
                config.listen.backend = ListenBackend::Console;
            }
            run(config).await?;
            drop(log_guard);
            // The stdin reader thread can stay blocked on a read forever;
            // exit without waiting for it.
            std::process::exit(0);
        }
        Command::Devices => list_devices(),
        Command::InitConfig { force } => init_config(cli.config, force),
        Command::Models => {
            let config = AssistantConfig::load(cli.config.as_deref())?;
            let dir = tokio::task::spawn_blocking(move || jarvis::startup::download_models(&config))
                .await??;
            println!("\nModels ready in {}", dir.display());
            Ok(())
        }
    }
}

/// Install the tracing subscriber. Logs go to stderr unless a file is given.
fn init_tracing(log_file: Option<&std::path::Path>) -> anyhow::Result<Option<WorkerGuard>> {
    // Users can override with RUST_LOG=debug to see everything.
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    match log_file {
        Some(path) => {
            let file = std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("cannot open log file {}", path.display()))?;
            let (writer, guard) = tracing_appender::non_blocking(file);
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_ansi(false)
                .with_writer(writer)
                .init();
            Ok(Some(guard))
        }
        None => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .init();
            Ok(None)
        }
    }
}

async fn run(config: AssistantConfig) -> anyhow::Result<()> {
    println!("Jarvis v{}", env!("CARGO_PKG_VERSION"));

    let adapters = jarvis::startup::build_adapters(&config)
        .await
        .context("failed to start the assistant")?;

    let cancel = CancellationToken::new();
    let cancel_clone = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            info!("received Ctrl+C, shutting down...");
            cancel_clone.cancel();
        }
    });

    match config.listen.backend {
        ListenBackend::Microphone => {
            println!("\nReady! Speak into your microphone. Press Ctrl+C to stop.\n");
        }
        ListenBackend::Console => println!("\nReady! Type a command. Press Ctrl+C to stop.\n"),
    }

    let state = jarvis::startup::run_session(&config, adapters, cancel).await?;
    info!(assistant = %state.assistant_name, "goodbye");
    Ok(())
}

fn list_devices() -> anyhow::Result<()> {
    println!("Input devices:");
    for name in CpalCapture::list_input_devices()? {
        println!("  - {name}");
    }
    Ok(())
}

fn init_config(path: Option<PathBuf>, force: bool) -> anyhow::Result<()> {
    let path = path.unwrap_or_else(AssistantConfig::default_config_path);
    if path.exists() && !force {
        anyhow::bail!(
            "{} already exists (use --force to overwrite)",
            path.display()
        );
    }
    AssistantConfig::default().save_to_file(&path)?;
    println!("Wrote default configuration to {}", path.display());
    Ok(())
}
