use chrono::{DateTime, Local};

use crate::event::LoggingEvent;

/// Dated variant: local time at millisecond resolution in front of the
/// basic fields.
#[must_use]
pub fn format(event: &LoggingEvent) -> String {
    let ts: DateTime<Local> = event.timestamp.into();
    format!(
        "{} {:<8} {}- {}\n",
        ts.format("%Y%m%d %H:%M:%S%.3f"),
        event.priority.as_str(),
        event.category,
        event.msg
    )
}
