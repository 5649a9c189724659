//! CLI command definitions.
//!
//! The CLI structure is defined with clap's derive macros. The binary in
//! `main.rs` parses `Cli` and dispatches on `Command`.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Starter scaffold for command-line tools
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file (skips the standard search paths)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Logging output: 0/off, 1/stdout, 2/stderr (default), or filename
    #[arg(short, long, default_value = "2", global = true)]
    pub log: String,

    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Say hello
    Hello {
        /// Name to greet (defaults to "World")
        name: Option<String>,
    },

    /// Run the demonstration service on an input string
    Process {
        /// Input to process
        input: String,
    },

    /// Show version information
    Version,

    /// Inspect and edit the configuration file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Config subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Print the effective configuration as YAML
    Show,

    /// Print a single setting value
    Get {
        /// Setting key
        key: String,
    },

    /// Set a setting value and save the config file
    Set {
        /// Setting key
        key: String,
        /// Value, parsed as YAML (numbers and booleans keep their type)
        value: String,
    },

    /// List the candidate config file paths in search order
    Path,
}
