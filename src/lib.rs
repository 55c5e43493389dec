#![forbid(unsafe_code)]

//! `logroute` - Declarative logging configuration.
//!
//! One document declares formatters, handlers and loggers; this crate parses it, checks
//! that every reference resolves, and routes records through the result:
//! - `%`-style line layouts (`%(asctime)s - %(name)s - %(levelname)s - %(message)s`)
//! - console and size-rotating file handlers, each with its own severity threshold
//! - a dotted logger hierarchy with per-logger propagation
//!
//! # Example
//!
//! ```no_run
//! logroute::setup_logging(None)?;
//!
//! let log = logroute::get_logger("__main__");
//! log.debug("only in debug.log and on the console");
//! log.warning("in every file");
//! # Ok::<(), logroute::Error>(())
//! ```
//!
//! # Features
//!
//! - `cli` (default): the `logroute` command-line tool

pub mod config;
mod error;
pub mod fmt;
pub mod handler;
pub mod internal;
pub mod level;
pub mod logger;

#[cfg(feature = "cli")]
pub mod cli;

pub use config::LoggingConfig;
pub use error::Error;
pub use fmt::{FormatTemplate, Formatter};
pub use handler::{Handler, LogRecord, NullHandler, RotatingFileHandler, StreamHandler};
pub use level::Level;
pub use logger::{Logger, Manager, dict_config, get_logger, global, setup_logging, shutdown};
