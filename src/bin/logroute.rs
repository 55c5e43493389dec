//! `logroute` binary.
//!
//! Usage:
//!   logroute check [PATH]                             Validate and summarize a document
//!   logroute show                                     Print the built-in document
//!   logroute route [-c PATH] <logger> <level>         Handlers a record would reach
//!   logroute emit [-c PATH] <logger> <level> <msg>    Log one record

use clap::Parser;
use logroute::cli::{Cli, Command, cmd_check, cmd_emit, cmd_route, cmd_show};
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();

    match cli.command {
        Command::Check { path } => cmd_check(path.as_deref()),
        Command::Show => cmd_show(),
        Command::Route {
            config,
            logger,
            level,
        } => cmd_route(config.as_deref(), &logger, level.into()),
        Command::Emit {
            config,
            logger,
            level,
            message,
        } => cmd_emit(config.as_deref(), &logger, level.into(), &message),
    }
}
