//! keel binary entry point.
//!
//! Parses the CLI, installs the tracing subscriber, loads configuration from
//! an explicit `--config` path or the standard search paths, and dispatches
//! to the subcommand handlers.

use anyhow::{Context, Result, bail};
use clap::Parser;
use keel::cli::{Cli, Command, ConfigAction};
use keel::config::{APP_NAME, Config, SearchPaths};
use keel::logging::{LogLevel, LogLevelFilter, Logger};
use keel::service::{EchoService, Service};
use keel::version::VersionInfo;
use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{Level, warn};
use tracing_subscriber::FmtSubscriber;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing output based on --log option
    let level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    match cli.log.as_str() {
        "0" | "off" => {
            // No logging
        }
        "1" | "stdout" => {
            let subscriber = FmtSubscriber::builder()
                .with_max_level(level)
                .with_writer(std::io::stdout)
                .finish();
            tracing::subscriber::set_global_default(subscriber)?;
        }
        "2" | "stderr" => {
            let subscriber = FmtSubscriber::builder()
                .with_max_level(level)
                .with_writer(std::io::stderr)
                .finish();
            tracing::subscriber::set_global_default(subscriber)?;
        }
        filename => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(filename)
                .with_context(|| format!("failed to open log file {filename}"))?;
            let subscriber = FmtSubscriber::builder()
                .with_max_level(level)
                .with_writer(file)
                .with_ansi(false)
                .finish();
            tracing::subscriber::set_global_default(subscriber)?;
        }
    }

    // An explicit --config path skips the search; its failures are always
    // fatal. Without it, the first existing candidate wins, and a corrupt
    // candidate is an error rather than a fallback to defaults.
    let paths = SearchPaths::discover();
    let config = match &cli.config {
        Some(path) => Config::load(path)?,
        None => Config::load_or_default_from(&paths)?,
    };

    let min_level = if cli.verbose || config.debug {
        LogLevel::Debug
    } else {
        config.log_level.parse().unwrap_or_else(|err| {
            warn!("{err}, using info");
            LogLevel::Info
        })
    };
    let logger = Logger::new()
        .with_name(APP_NAME)
        .with_filter(Arc::new(LogLevelFilter::new(min_level)));

    match cli.command {
        Command::Hello { name } => {
            println!("Hello, {}!", name.as_deref().unwrap_or("World"));
        }
        Command::Process { input } => {
            let service = EchoService::new(logger);
            let output = service.process(&input)?;
            println!("{output}");
        }
        Command::Version => {
            println!("{}", VersionInfo::current());
        }
        Command::Config { action } => {
            run_config(action, config, cli.config.as_deref(), &paths)?;
        }
    }

    Ok(())
}

/// Handle the `config` subcommands.
fn run_config(
    action: ConfigAction,
    mut config: Config,
    explicit_path: Option<&Path>,
    paths: &SearchPaths,
) -> Result<()> {
    match action {
        ConfigAction::Show => {
            print!("{}", serde_yaml::to_string(&config)?);
        }
        ConfigAction::Get { key } => match config.get(&key) {
            Some(value) => print!("{}", serde_yaml::to_string(value)?),
            None => bail!("no such setting: {key}"),
        },
        ConfigAction::Set { key, value } => {
            // Parse the value as YAML so numeric and boolean literals keep
            // their type through the save/load round trip.
            let value: serde_yaml::Value =
                serde_yaml::from_str(&value).with_context(|| format!("invalid value: {value}"))?;
            config.set(key, value);

            let target = save_target(explicit_path, paths)?;
            config.save(&target)?;
            println!("Saved {}", target.display());
        }
        ConfigAction::Path => {
            for candidate in &paths.candidates {
                if candidate.exists() {
                    println!("{} (found)", candidate.display());
                } else {
                    println!("{}", candidate.display());
                }
            }
        }
    }
    Ok(())
}

/// Where `config set` writes: the explicit --config path, else the candidate
/// the config was loaded from, else the first candidate in the search order.
fn save_target(explicit_path: Option<&Path>, paths: &SearchPaths) -> Result<PathBuf> {
    if let Some(path) = explicit_path {
        return Ok(path.to_path_buf());
    }
    if let Some(path) = paths.first_existing() {
        return Ok(path.clone());
    }
    match paths.default_write_target() {
        Some(path) => Ok(path.clone()),
        None => bail!("no candidate config path available"),
    }
}
