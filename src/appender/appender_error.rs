use core::fmt;
use std::io;

/// Resource and lifecycle errors raised by appender backends.
#[derive(Debug)]
pub enum AppenderError {
    /// Underlying OS operation failed (open, write, send, close).
    Io(io::Error),
    /// `append` was called before `open` or after `close`.
    NotOpen,
    /// The per-type concurrency guard could not be acquired. Fatal in debug
    /// builds; in release the operation is skipped and this is returned.
    Guard,
}

impl AppenderError {
    /// Negative status code for callers that want the numeric contract:
    /// OS-errno-derived where available, `-1` otherwise. Zero is success and
    /// never produced here.
    #[must_use]
    pub fn status_code(&self) -> i32 {
        match self {
            AppenderError::Io(e) => e.raw_os_error().map_or(-1, |code| -code),
            AppenderError::NotOpen | AppenderError::Guard => -1,
        }
    }
}

impl fmt::Display for AppenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppenderError::Io(e) => write!(f, "I/O error: {e}"),
            AppenderError::NotOpen => write!(f, "appender is not open"),
            AppenderError::Guard => write!(f, "appender type guard unavailable"),
        }
    }
}

impl From<io::Error> for AppenderError {
    fn from(e: io::Error) -> Self {
        AppenderError::Io(e)
    }
}

impl std::error::Error for AppenderError {}
