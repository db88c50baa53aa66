//! Subcommand implementations.

use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Subcommand;
use serde::Serialize;
use tracing::info;

use serzkit_core::formats::{is_binary_file, sibling_path};
use serzkit_core::{
    load_config_or_default, validate_config, Config, ErrorKind, FileSettings, ProcessRunner,
    RecoveryMap, Serz, SerzError, SqliteStateStore, ALL_EXTENSIONS, BINARY_EXTENSIONS,
    TEXT_EXTENSIONS,
};

#[derive(Subcommand)]
pub enum RecoveryCommand {
    /// List converted files and the extension they will be restored to
    List {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
}

/// A conversion error that has already been reported to the user.
#[derive(Debug)]
pub struct ConvertFailure {
    pub kind: ErrorKind,
}

impl ConvertFailure {
    pub fn exit_code(&self) -> u8 {
        match self.kind {
            ErrorKind::Unexpected => 1,
            ErrorKind::SerzPathInvalid => 2,
            ErrorKind::ConversionFailed => 3,
            ErrorKind::InvalidInput => 4,
        }
    }
}

impl std::fmt::Display for ConvertFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "conversion did not complete ({:?})", self.kind)
    }
}

impl std::error::Error for ConvertFailure {}

fn load(config_path: &Path) -> Result<Config> {
    let config = load_config_or_default(config_path)
        .with_context(|| format!("Failed to load config from {:?}", config_path))?;
    validate_config(&config).context("Configuration validation failed")?;
    Ok(config)
}

fn open_recovery(config_path: &Path, config: &Config) -> Result<RecoveryMap> {
    let state_path = config.state_path(config_path);
    let store = SqliteStateStore::new(&state_path)
        .with_context(|| format!("Failed to open state store at {:?}", state_path))?;
    Ok(RecoveryMap::new(Arc::new(store)))
}

/// What a successful conversion produced.
#[derive(Debug, Serialize)]
pub struct ConversionReport {
    pub source: PathBuf,
    pub output: PathBuf,
    /// Binary output is not meant to be opened as text.
    pub binary: bool,
}

pub async fn convert(config_path: &Path, file: &Path, json: bool) -> Result<()> {
    convert_with(
        config_path,
        file,
        json,
        &mut io::stdout(),
        &mut io::stderr(),
    )
    .await
}

/// [`convert`] with explicit output streams: the result goes to `out`,
/// user-facing messages to `err_out`.
pub async fn convert_with(
    config_path: &Path,
    file: &Path,
    json: bool,
    out: &mut impl Write,
    err_out: &mut impl Write,
) -> Result<()> {
    let config = load(config_path)?;
    let recovery = open_recovery(config_path, &config)?;

    let runner = match config.serz.timeout_secs {
        Some(secs) => ProcessRunner::new().with_timeout(secs),
        None => ProcessRunner::new(),
    };
    let serz = Serz::new(runner, Arc::new(FileSettings::new(config_path)), recovery);

    // Recovery entries are keyed by absolute path
    let file = std::path::absolute(file)
        .with_context(|| format!("Failed to resolve {:?}", file))?;

    info!("Converting \"{}\"...", file.display());
    match serz.convert(&file).await {
        Ok(converted) => {
            let done = ConversionReport {
                binary: is_binary_file(&converted),
                source: file,
                output: converted,
            };
            writeln!(err_out, "Conversion complete")?;
            if json {
                writeln!(out, "{}", serde_json::to_string(&done)?)?;
            } else {
                let kind = if done.binary { "binary" } else { "text" };
                writeln!(out, "{}\t{}", done.output.display(), kind)?;
            }
            Ok(())
        }
        Err(e) => {
            report(err_out, &file, &e)?;
            Err(ConvertFailure { kind: e.kind() }.into())
        }
    }
}

/// Writes a conversion error the way a user should read it.
fn report(w: &mut impl Write, file: &Path, err: &SerzError) -> io::Result<()> {
    match err.kind() {
        ErrorKind::SerzPathInvalid => {
            writeln!(w, "Invalid serz executable path: {}", err.message())?;
            writeln!(
                w,
                "Set serz.exe_path in the configuration file or SERZKIT_SERZ__EXE_PATH."
            )
        }
        ErrorKind::ConversionFailed => {
            writeln!(w, "Failed to convert {}: {}", file.display(), err.message())
        }
        ErrorKind::InvalidInput => {
            writeln!(w, "Unsupported file: {}", err)?;
            writeln!(w, "Supported extensions: {}", ALL_EXTENSIONS.join(", "))
        }
        ErrorKind::Unexpected => writeln!(w, "An error occurred: {}", error_chain(err)),
    }
}

fn error_chain(err: &dyn std::error::Error) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}

#[derive(Serialize)]
struct FormatsListing {
    text: &'static [&'static str],
    binary: &'static [&'static str],
    all: &'static [&'static str],
}

pub fn formats(json: bool) -> Result<()> {
    let listing = FormatsListing {
        text: &TEXT_EXTENSIONS,
        binary: &BINARY_EXTENSIONS,
        all: &ALL_EXTENSIONS,
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&listing)?);
    } else {
        println!("XML files: {}", listing.text.join(", "));
        println!("BIN files: {}", listing.binary.join(", "));
        println!("Compatible files: {}", listing.all.join(", "));
    }
    Ok(())
}

pub fn recovery(config_path: &Path, command: RecoveryCommand) -> Result<()> {
    match command {
        RecoveryCommand::List { json } => {
            let config = load(config_path)?;
            let entries = open_recovery(config_path, &config)?
                .entries()
                .context("Failed to read recovery map")?;

            if json {
                println!("{}", serde_json::to_string_pretty(&entries)?);
            } else {
                for (path, ext) in &entries {
                    let restored = sibling_path(Path::new(path), "xml", ext)
                        .unwrap_or_else(|| PathBuf::from(path));
                    println!("{} -> {}", path, restored.display());
                }
            }
            Ok(())
        }
    }
}
