//! Record rendering: the `%`-style template parser and the `Formatter` that feeds it.

mod format;
mod formatter;

pub use format::{Field, FormatSegment, FormatTemplate, FormatValues};
pub use formatter::{DEFAULT_TIME_FORMAT, Formatter};
