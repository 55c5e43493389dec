//! Turns a record into one line of text using a template and an optional date format.

use super::format::{Field, FormatTemplate, FormatValues};
use crate::config::FormatterConfig;
use crate::handler::LogRecord;
use crate::internal;
use chrono::format::{Item, StrftimeItems};
use std::fmt::Write;

/// `2003-07-08 16:49:45,896`
pub const DEFAULT_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S,%3f";

/// Named formatter as declared in the `formatters` section.
#[derive(Debug, Clone, Default)]
pub struct Formatter {
    template: FormatTemplate,
    datefmt: Option<String>,
}

impl Formatter {
    /// An unusable `datefmt` falls back to the default timestamp layout.
    #[must_use]
    pub fn new(format: &str, datefmt: Option<&str>) -> Self {
        let datefmt = datefmt.and_then(|f| {
            if StrftimeItems::new(f).any(|item| matches!(item, Item::Error)) {
                internal::warn("FORMAT", &format!("Invalid datefmt '{f}', using default"));
                None
            } else {
                Some(f.to_string())
            }
        });
        Self {
            template: FormatTemplate::parse(format),
            datefmt,
        }
    }

    #[must_use]
    pub fn from_config(config: &FormatterConfig) -> Self {
        Self::new(&config.format, config.datefmt.as_deref())
    }

    #[must_use]
    pub const fn template(&self) -> &FormatTemplate {
        &self.template
    }

    /// Renders the record without a trailing newline.
    #[must_use]
    pub fn format(&self, record: &LogRecord) -> String {
        let mut values = FormatValues::new()
            .name(&record.name)
            .levelname(record.level.as_str())
            .message(&record.message);
        values.levelno = record.level.value().to_string();
        values.process = record.process.to_string();
        values.thread.clone_from(&record.thread);

        if self.template.uses(Field::Asctime) {
            values.asctime = self.format_time(record);
        }
        if self.template.uses(Field::Created) {
            let micros = record.created.timestamp_micros();
            #[allow(clippy::cast_precision_loss)]
            let secs = micros as f64 / 1_000_000.0;
            values.created = format!("{secs:.6}");
        }
        if self.template.uses(Field::Msecs) {
            values.msecs = record.created.timestamp_subsec_millis().to_string();
        }

        self.template.render(&values)
    }

    fn format_time(&self, record: &LogRecord) -> String {
        let pattern = self.datefmt.as_deref().unwrap_or(DEFAULT_TIME_FORMAT);
        let mut out = String::new();
        if write!(out, "{}", record.created.format(pattern)).is_err() {
            out.clear();
            let _ = write!(out, "{}", record.created.format(DEFAULT_TIME_FORMAT));
        }
        out
    }
}
