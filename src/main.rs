use std::fs::File;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::Mutex;

use clap::{Parser, Subcommand};
use pte_practice::{load_content, serve_web, Config, Practice, PracticeError};
use tracing_subscriber::EnvFilter;

/// PTE practice: speaking, writing, listening and reading drills
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Configuration file (default: pte-practice.json in the current directory)
    #[arg(short, long, value_name = "FILE", global = true)]
    config: Option<PathBuf>,

    /// JSON file replacing the built-in practice content
    #[arg(long, value_name = "FILE", global = true)]
    content: Option<PathBuf>,

    /// Enable verbose output (sets log level to debug)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Serve the practice pages over HTTP
    Web {
        /// Address to bind to
        #[arg(long)]
        host: Option<String>,

        /// Port to listen on
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Practice interactively in the terminal
    Tui {
        /// Write logs to this file (the terminal itself stays log-free)
        #[arg(long, value_name = "FILE")]
        log_file: Option<PathBuf>,
    },
}

fn main() -> ExitCode {
    let args = Args::parse();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::from(1)
        }
    }
}

fn run(args: Args) -> Result<(), PracticeError> {
    let mut config = match &args.config {
        Some(path) => Config::load_from_file(path)?,
        None => Config::load_from_dir(&std::env::current_dir()?)?,
    };
    if args.content.is_some() {
        config.content = args.content.clone();
    }

    match args.command {
        Command::Web { host, port } => {
            if let Some(host) = host {
                config.host = host;
            }
            if let Some(port) = port {
                config.port = port;
            }
            config.validate()?;
            init_logging(&config, args.verbose, None)?;

            let content = load_content(&config)?;
            tokio::runtime::Runtime::new()?.block_on(serve_web(&config, content))
        }
        Command::Tui { log_file } => {
            if let Some(path) = &log_file {
                init_logging(&config, args.verbose, Some(path))?;
            }

            let content = load_content(&config)?;
            Practice::new(content).run()
        }
    }
}

/// Installs the tracing subscriber.
///
/// Priority: RUST_LOG env var > --verbose flag > configured level.
fn init_logging(
    config: &Config,
    verbose: bool,
    log_file: Option<&Path>,
) -> Result<(), PracticeError> {
    let level = if verbose { "debug" } else { config.log_level.as_str() };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false);

    match log_file {
        Some(path) => {
            let file = File::create(path)?;
            builder
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .init();
        }
        None => builder.compact().init(),
    }

    tracing::debug!(?config, "Configuration loaded");
    Ok(())
}
