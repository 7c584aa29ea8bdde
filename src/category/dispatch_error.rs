use core::fmt;

use crate::appender::AppenderError;

/// Aggregate of per-appender failures from one chain walk.
///
/// Dispatch is best effort per appender: every appender along the eligible
/// chain is invoked even if an earlier one fails, and the failures are
/// collected here instead of short-circuiting the walk.
#[derive(Debug)]
pub struct DispatchError {
    failures: Vec<(String, AppenderError)>,
}

impl DispatchError {
    #[must_use]
    pub(crate) fn new(failures: Vec<(String, AppenderError)>) -> Self {
        Self { failures }
    }

    /// The appenders that failed, with their errors.
    #[must_use]
    pub fn failures(&self) -> &[(String, AppenderError)] {
        &self.failures
    }
}

impl fmt::Display for DispatchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} appender(s) failed during dispatch:", self.failures.len())?;
        for (name, err) in &self.failures {
            write!(f, " [{name}: {err}]")?;
        }
        Ok(())
    }
}

impl std::error::Error for DispatchError {}
