//! Command-line interface: inspect, validate and exercise a logging document.

pub mod commands;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Log level for CLI arguments.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum LogLevel {
    Debug,
    Info,
    Warning,
    Error,
    Critical,
}

impl From<LogLevel> for crate::level::Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Debug => Self::Debug,
            LogLevel::Info => Self::Info,
            LogLevel::Warning => Self::Warning,
            LogLevel::Error => Self::Error,
            LogLevel::Critical => Self::Critical,
        }
    }
}

/// logroute - Declarative logging configuration.
#[derive(Parser)]
#[command(
    name = "logroute",
    version,
    about = "Validate and exercise a logging configuration document"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Load and validate a document, then summarize it.
    Check {
        /// Document path (default lookup when omitted)
        path: Option<PathBuf>,
    },
    /// Print the built-in document.
    Show,
    /// List the handlers a record would reach.
    Route {
        /// Document path (default lookup when omitted)
        #[arg(short, long)]
        config: Option<PathBuf>,
        /// Logger name (`root` for the root logger)
        logger: String,
        /// Record level
        #[arg(value_enum)]
        level: LogLevel,
    },
    /// Configure logging and emit one record.
    Emit {
        /// Document path (default lookup when omitted)
        #[arg(short, long)]
        config: Option<PathBuf>,
        /// Logger name (`root` for the root logger)
        logger: String,
        /// Record level
        #[arg(value_enum)]
        level: LogLevel,
        /// Message
        message: Vec<String>,
    },
}

pub use commands::{cmd_check, cmd_emit, cmd_route, cmd_show, summarize};
