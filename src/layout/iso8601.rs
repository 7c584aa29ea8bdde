use chrono::{DateTime, Local};

use crate::event::LoggingEvent;

/// ISO 8601 variant: local timestamp, wide fixed category column. An empty
/// message renders as a bare line terminator.
#[must_use]
pub fn format(event: &LoggingEvent) -> String {
    if event.msg.is_empty() {
        return "\n".to_string();
    }
    let ts: DateTime<Local> = event.timestamp.into();
    format!(
        "{} {:<8} {:<60}:   {}\n",
        ts.format("%Y-%m-%dT%H:%M:%S%.3f"),
        event.priority.as_str(),
        event.category,
        event.msg
    )
}
