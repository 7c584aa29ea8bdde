pub mod basic;
pub mod dated;
pub mod iso8601;
pub mod null;

use std::fmt;
use std::sync::{PoisonError, RwLock};

use crate::buffer;
use crate::event::LoggingEvent;

/// The closed set of formatting variants.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LayoutKind {
    /// `priority category - message`, no timestamp.
    Basic,
    /// `YYYYmmdd HH:MM:SS.mmm priority category- message`, local time.
    Dated,
    /// ISO 8601 local timestamp with a wide category column.
    Iso8601,
    /// Pass-through of the raw message.
    Null,
}

impl LayoutKind {
    /// Case-insensitive name lookup; `None` for unknown variants.
    #[must_use]
    pub fn from_name(name: &str) -> Option<LayoutKind> {
        match name.to_ascii_lowercase().as_str() {
            "basic" => Some(LayoutKind::Basic),
            "dated" => Some(LayoutKind::Dated),
            "iso8601" => Some(LayoutKind::Iso8601),
            "null" => Some(LayoutKind::Null),
            _ => None,
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            LayoutKind::Basic => "basic",
            LayoutKind::Dated => "dated",
            LayoutKind::Iso8601 => "ISO8601",
            LayoutKind::Null => "null",
        }
    }

    /// Renders an event into a line. Deterministic for identical inputs,
    /// always terminated with `\n`, and never longer than `bufsize` bytes
    /// when `bufsize` is non-zero (truncation ellipsizes within the
    /// available space).
    #[must_use]
    pub fn format(self, event: &LoggingEvent, bufsize: usize) -> String {
        let mut line = match self {
            LayoutKind::Basic => basic::format(event),
            LayoutKind::Dated => dated::format(event),
            LayoutKind::Iso8601 => iso8601::format(event),
            LayoutKind::Null => null::format(event),
        };
        if bufsize > 0 {
            buffer::ellipsize(&mut line, bufsize);
        } else if !line.ends_with(buffer::LINE_TERM) {
            line.push(buffer::LINE_TERM);
        }
        line
    }
}

/// A named, configurable layout instance. Stateless beyond its registry
/// entry: the only mutable piece is which variant it is bound to.
pub struct Layout {
    name: String,
    kind: RwLock<LayoutKind>,
}

impl Layout {
    /// New instances default to the basic variant, which is also what an
    /// appender without any layout reference renders through.
    #[must_use]
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            kind: RwLock::new(LayoutKind::Basic),
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn kind(&self) -> LayoutKind {
        *self.kind.read().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn set_kind(&self, kind: LayoutKind) {
        *self.kind.write().unwrap_or_else(PoisonError::into_inner) = kind;
    }

    #[must_use]
    pub fn format(&self, event: &LoggingEvent, bufsize: usize) -> String {
        self.kind().format(event, bufsize)
    }
}

impl fmt::Display for Layout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{ name:'{}' type:'{}' }}", self.name, self.kind().name())
    }
}
