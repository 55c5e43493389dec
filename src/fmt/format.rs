//! `%`-style line templates such as `%(asctime)s - %(name)s - %(levelname)s - %(message)s`.
//!
//! Templates are parsed once into segments so that rendering a record is a single pass with
//! no pattern matching.

use regex::Regex;
use std::sync::LazyLock;

/// `%(key)` followed by optional flags, width, precision and a conversion char; or `%%`.
static TOKEN_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"%\((?P<key>[A-Za-z_]+)\)(?P<flags>[-0]*)(?P<width>\d+)?(?:\.\d+)?[sdfr]|%%")
        .expect("Invalid format token regex")
});

/// Closed set of record attributes a template can reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Asctime,
    Created,
    Msecs,
    Name,
    Levelname,
    Levelno,
    Message,
    Process,
    Thread,
}

impl Field {
    /// Matches the attribute name inside `%(...)`.
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "asctime" => Some(Self::Asctime),
            "created" => Some(Self::Created),
            "msecs" => Some(Self::Msecs),
            "name" => Some(Self::Name),
            "levelname" => Some(Self::Levelname),
            "levelno" => Some(Self::Levelno),
            "message" => Some(Self::Message),
            "process" => Some(Self::Process),
            "thread" | "threadName" => Some(Self::Thread),
            _ => None,
        }
    }
}

/// Parsing into segments once avoids re-scanning the template on every record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormatSegment {
    /// Separators, `%%` and unknown `%(names)s` pass through untouched.
    Literal(String),
    /// Substituted with the record's value at render time.
    Field {
        field: Field,
        left_align: bool,
        zero_pad: bool,
        width: usize,
    },
}

/// Pre-parsed template. Parse once, render many.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatTemplate {
    segments: Vec<FormatSegment>,
}

impl FormatTemplate {
    /// Turns `"%(name)s: %(message)s"` into a segment list. Never fails: anything that is not a
    /// known token stays literal text.
    #[must_use]
    pub fn parse(template: &str) -> Self {
        let mut segments = Vec::new();
        let mut literal = String::new();
        let mut last = 0;

        for caps in TOKEN_REGEX.captures_iter(template) {
            let Some(whole) = caps.get(0) else { continue };
            literal.push_str(&template[last..whole.start()]);
            last = whole.end();

            let Some(key) = caps.name("key") else {
                // `%%`
                literal.push('%');
                continue;
            };

            match Field::from_key(key.as_str()) {
                Some(field) => {
                    if !literal.is_empty() {
                        segments.push(FormatSegment::Literal(std::mem::take(&mut literal)));
                    }
                    let flags = caps.name("flags").map_or("", |m| m.as_str());
                    let width = caps
                        .name("width")
                        .and_then(|m| m.as_str().parse().ok())
                        .unwrap_or(0);
                    segments.push(FormatSegment::Field {
                        field,
                        left_align: flags.contains('-'),
                        zero_pad: flags.contains('0'),
                        width,
                    });
                }
                None => literal.push_str(whole.as_str()),
            }
        }

        literal.push_str(&template[last..]);
        if !literal.is_empty() {
            segments.push(FormatSegment::Literal(literal));
        }

        Self { segments }
    }

    /// Tests and downstream code need direct access to verify parse results.
    #[must_use]
    pub fn segments(&self) -> &[FormatSegment] {
        &self.segments
    }

    /// Timestamps are only rendered when a template asks for them.
    #[must_use]
    pub fn uses(&self, wanted: Field) -> bool {
        self.segments
            .iter()
            .any(|s| matches!(s, FormatSegment::Field { field, .. } if *field == wanted))
    }

    /// Substitutes values into the pre-parsed segments.
    #[must_use]
    pub fn render(&self, values: &FormatValues) -> String {
        let mut result = String::new();

        for segment in &self.segments {
            match segment {
                FormatSegment::Literal(s) => result.push_str(s),
                FormatSegment::Field {
                    field,
                    left_align,
                    zero_pad,
                    width,
                } => {
                    let value = values.get(*field);
                    let pad = width.saturating_sub(value.chars().count());
                    if pad == 0 {
                        result.push_str(value);
                    } else if *left_align {
                        result.push_str(value);
                        result.extend(std::iter::repeat_n(' ', pad));
                    } else {
                        let fill = if *zero_pad { '0' } else { ' ' };
                        result.extend(std::iter::repeat_n(fill, pad));
                        result.push_str(value);
                    }
                }
            }
        }

        result
    }
}

impl Default for FormatTemplate {
    fn default() -> Self {
        Self::parse("%(message)s")
    }
}

/// Typed value bag ensures every field has a corresponding value.
#[derive(Debug, Clone, Default)]
pub struct FormatValues {
    pub asctime: String,
    pub created: String,
    pub msecs: String,
    pub name: String,
    pub levelname: String,
    pub levelno: String,
    pub message: String,
    pub process: String,
    pub thread: String,
}

impl FormatValues {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn asctime(mut self, asctime: impl Into<String>) -> Self {
        self.asctime = asctime.into();
        self
    }

    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    #[must_use]
    pub fn levelname(mut self, levelname: impl Into<String>) -> Self {
        self.levelname = levelname.into();
        self
    }

    #[must_use]
    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    const fn get(&self, field: Field) -> &String {
        match field {
            Field::Asctime => &self.asctime,
            Field::Created => &self.created,
            Field::Msecs => &self.msecs,
            Field::Name => &self.name,
            Field::Levelname => &self.levelname,
            Field::Levelno => &self.levelno,
            Field::Message => &self.message,
            Field::Process => &self.process,
            Field::Thread => &self.thread,
        }
    }
}
