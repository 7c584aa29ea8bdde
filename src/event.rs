use std::time::SystemTime;

use crate::priority::Priority;

/// Call site of a logging statement, captured by the logging macros.
#[derive(Clone, Copy, Debug)]
pub struct SourceLocation {
    pub file: &'static str,
    pub line: u32,
}

/// A single logging event.
///
/// Created per log call, dispatched synchronously through the category
/// chain, and discarded when the call returns. `rendered` is filled in by
/// each appender's layout just before the backend write.
#[derive(Debug)]
pub struct LoggingEvent {
    /// Name of the category the event was emitted on.
    pub category: String,
    /// Severity of the event.
    pub priority: Priority,
    /// Raw message, already formatted with call-site arguments.
    pub msg: String,
    /// Post-layout line, valid only during an appender append.
    pub rendered: String,
    /// Wall-clock time at emission.
    pub timestamp: SystemTime,
    /// Optional call-site information.
    pub location: Option<SourceLocation>,
}

impl LoggingEvent {
    #[must_use]
    pub fn new(
        category: impl Into<String>,
        priority: Priority,
        msg: impl Into<String>,
        location: Option<SourceLocation>,
    ) -> Self {
        Self {
            category: category.into(),
            priority,
            msg: msg.into(),
            rendered: String::new(),
            timestamp: SystemTime::now(),
            location,
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used)]
    use super::*;

    #[test]
    fn event_carries_call_data() {
        let ev = LoggingEvent::new("svc.sub", Priority::Warn, "low disk", None);
        assert_eq!(ev.category, "svc.sub");
        assert_eq!(ev.priority, Priority::Warn);
        assert_eq!(ev.msg, "low disk");
        assert!(ev.rendered.is_empty());
    }
}
