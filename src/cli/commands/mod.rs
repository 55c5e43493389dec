//! One function per subcommand, each returning the process exit code.

mod check;
mod emit;
mod route;

pub use check::{cmd_check, summarize};
pub use emit::cmd_emit;
pub use route::cmd_route;

use crate::config::BUILTIN_DOCUMENT;
use std::process::ExitCode;

/// Prints the shipped document verbatim.
#[must_use]
pub fn cmd_show() -> ExitCode {
    print!("{BUILTIN_DOCUMENT}");
    ExitCode::SUCCESS
}
