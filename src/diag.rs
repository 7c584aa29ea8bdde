//! Self-diagnostics for the library itself.
//!
//! The logging runtime cannot log through its own categories while it is
//! being configured, so configuration and I/O problems are reported on
//! stderr instead, gated by a runtime level. The `log-*` cargo features
//! additionally compile the debug channel out entirely.

use std::sync::atomic::{AtomicU32, Ordering};

static DEBUG_LEVEL: AtomicU32 = AtomicU32::new(0);

/// Sets the runtime diagnostic level. 0 silences the debug channel;
/// errors are always reported.
pub fn set_debug_level(level: u32) {
    DEBUG_LEVEL.store(level, Ordering::Relaxed);
}

#[must_use]
pub fn debug_level() -> u32 {
    DEBUG_LEVEL.load(Ordering::Relaxed)
}

#[doc(hidden)]
pub fn emit_debug(args: std::fmt::Arguments<'_>) {
    if debug_level() > 0 {
        eprintln!("rustylog: {args}");
    }
}

#[doc(hidden)]
pub fn emit_error(args: std::fmt::Arguments<'_>) {
    eprintln!("rustylog: error: {args}");
}

/// Internal debug trace, active only with the `log-debug` feature and a
/// non-zero runtime level.
#[cfg(feature = "log-debug")]
#[macro_export]
macro_rules! diag_debug {
    ($($arg:tt)*) => {{
        $crate::diag::emit_debug(format_args!($($arg)*));
    }};
}

#[cfg(not(feature = "log-debug"))]
#[macro_export]
macro_rules! diag_debug {
    ($($arg:tt)*) => {
        ()
    };
}

/// Internal error report. Compiled out only when even `log-error` is off.
#[cfg(feature = "log-error")]
#[macro_export]
macro_rules! diag_error {
    ($($arg:tt)*) => {{
        $crate::diag::emit_error(format_args!($($arg)*));
    }};
}

#[cfg(not(feature = "log-error"))]
#[macro_export]
macro_rules! diag_error {
    ($($arg:tt)*) => {
        ()
    };
}
