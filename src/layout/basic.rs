use crate::event::LoggingEvent;

/// Minimal variant: severity, category and message, no timestamp.
#[must_use]
pub fn format(event: &LoggingEvent) -> String {
    format!(
        "{:<8} {} - {}\n",
        event.priority.as_str(),
        event.category,
        event.msg
    )
}
