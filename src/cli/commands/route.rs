//! `logroute route`: shows where a record would go. Only the files the document opens
//! eagerly are touched.

use crate::config::LoggingConfig;
use crate::level::Level;
use crate::logger::Manager;
use std::path::Path;
use std::process::ExitCode;

#[must_use]
pub fn cmd_route(path: Option<&Path>, logger: &str, level: Level) -> ExitCode {
    let manager = Manager::new();
    let result = LoggingConfig::load(path).and_then(|config| manager.configure(&config));
    if let Err(e) = result {
        eprintln!("invalid logging config: {e}");
        return ExitCode::FAILURE;
    }

    let handlers = manager.route(logger, level);
    if handlers.is_empty() {
        println!("{logger} {level}: dropped");
    } else {
        println!("{logger} {level}: {}", handlers.join(", "));
    }
    manager.shutdown();
    ExitCode::SUCCESS
}
