//! `logroute emit`: one record through the real configuration, handy for checking file
//! permissions and layouts from a shell.

use crate::level::Level;
use crate::logger;
use std::path::Path;
use std::process::ExitCode;

#[must_use]
pub fn cmd_emit(path: Option<&Path>, name: &str, level: Level, message: &[String]) -> ExitCode {
    if let Err(e) = logger::setup_logging(path) {
        eprintln!("invalid logging config: {e}");
        return ExitCode::FAILURE;
    }

    logger::get_logger(name).log(level, &message.join(" "));
    logger::shutdown();
    ExitCode::SUCCESS
}
