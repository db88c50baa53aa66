mod commands;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing::error;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use commands::{ConvertFailure, RecoveryCommand};

#[derive(Parser)]
#[command(name = "serzkit", version)]
#[command(about = "Convert Train Simulator files between XML and binary with serz.exe", long_about = None)]
struct Cli {
    /// Configuration file
    #[arg(long, global = true, env = "SERZKIT_CONFIG", default_value = "serzkit.toml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Convert a file to its XML or binary sibling
    Convert {
        /// File to convert
        file: PathBuf,
        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },
    /// List the file extensions serz can convert
    Formats {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
    /// Inspect remembered special binary extensions
    Recovery {
        #[command(subcommand)]
        command: RecoveryCommand,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let result = match cli.command {
        Command::Convert { file, json } => commands::convert(&cli.config, &file, json).await,
        Command::Formats { json } => commands::formats(json),
        Command::Recovery { command } => commands::recovery(&cli.config, command),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => match e.downcast_ref::<ConvertFailure>() {
            // Already reported to the user
            Some(failure) => ExitCode::from(failure.exit_code()),
            None => {
                error!("{:#}", e);
                ExitCode::FAILURE
            }
        },
    }
}
