//! `logroute check`: the quickest way to find a dangling handler reference before deploying.

use crate::config::LoggingConfig;
use std::fmt::Write;
use std::path::Path;
use std::process::ExitCode;

#[must_use]
pub fn cmd_check(path: Option<&Path>) -> ExitCode {
    match LoggingConfig::load(path) {
        Ok(config) => {
            print!("{}", summarize(&config));
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("invalid logging config: {e}");
            ExitCode::FAILURE
        }
    }
}

/// Human-readable overview of a validated document.
#[must_use]
pub fn summarize(config: &LoggingConfig) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "version: {}", config.version);
    let _ = writeln!(
        out,
        "disable_existing_loggers: {}",
        config.disable_existing_loggers
    );

    let _ = writeln!(out, "formatters:");
    for (name, f) in &config.formatters {
        let _ = writeln!(out, "  {name}: {}", f.format);
    }

    let _ = writeln!(out, "handlers:");
    for (name, h) in &config.handlers {
        let level = h.level.map_or("-", |l| l.as_str());
        let target = h.filename.as_deref().or(h.stream.as_deref()).unwrap_or("-");
        let _ = write!(out, "  {name}: {} level={level} -> {target}", h.class);
        if h.max_bytes > 0 {
            let _ = write!(out, " (max {} bytes, {} backups)", h.max_bytes, h.backup_count);
        }
        out.push('\n');
    }

    let _ = writeln!(out, "loggers:");
    let named = config.loggers.iter().map(|(n, l)| (n.as_str(), l));
    for (name, l) in named.chain(config.root.iter().map(|r| ("root", r))) {
        let level = l.level.map_or("-", |lv| lv.as_str());
        let _ = writeln!(
            out,
            "  {name}: level={level} handlers=[{}] propagate={}",
            l.handlers.join(", "),
            l.propagate
        );
    }
    out
}
