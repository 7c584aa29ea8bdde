//! User-facing logging macros.
//!
//! The priority check happens here, before any argument formatting, so a
//! below-threshold call costs one hierarchy walk and never constructs an
//! event. The per-level shorthands additionally compile out entirely when
//! their `log-*` feature is off.

/// Call-site capture for the event's source location.
#[macro_export]
macro_rules! source_location {
    () => {
        $crate::event::SourceLocation {
            file: file!(),
            line: line!(),
        }
    };
}

/// Logs a formatted message on a category of a context.
///
/// Dispatch failures have already been reported on the diagnostic channel
/// by the chain walk, so they are discarded here; a logging statement never
/// propagates an error into the caller.
#[macro_export]
macro_rules! rlog {
    ($ctx:expr, $cat:expr, $prio:expr, $($arg:tt)+) => {{
        let ctx = &$ctx;
        let cat = $cat;
        let prio = $prio;
        if ctx.is_priority_enabled(cat, prio) {
            let _ = ctx.log(cat, prio, format_args!($($arg)+), Some($crate::source_location!()));
        }
    }};
}

#[cfg(feature = "log-error")]
#[macro_export]
macro_rules! rlog_error {
    ($ctx:expr, $cat:expr, $($arg:tt)+) => {
        $crate::rlog!($ctx, $cat, $crate::priority::Priority::Error, $($arg)+)
    };
}

#[cfg(not(feature = "log-error"))]
#[macro_export]
macro_rules! rlog_error {
    ($($arg:tt)*) => {
        ()
    };
}

#[cfg(feature = "log-warn")]
#[macro_export]
macro_rules! rlog_warn {
    ($ctx:expr, $cat:expr, $($arg:tt)+) => {
        $crate::rlog!($ctx, $cat, $crate::priority::Priority::Warn, $($arg)+)
    };
}

#[cfg(not(feature = "log-warn"))]
#[macro_export]
macro_rules! rlog_warn {
    ($($arg:tt)*) => {
        ()
    };
}

#[cfg(feature = "log-info")]
#[macro_export]
macro_rules! rlog_info {
    ($ctx:expr, $cat:expr, $($arg:tt)+) => {
        $crate::rlog!($ctx, $cat, $crate::priority::Priority::Info, $($arg)+)
    };
}

#[cfg(not(feature = "log-info"))]
#[macro_export]
macro_rules! rlog_info {
    ($($arg:tt)*) => {
        ()
    };
}

#[cfg(feature = "log-debug")]
#[macro_export]
macro_rules! rlog_debug {
    ($ctx:expr, $cat:expr, $($arg:tt)+) => {
        $crate::rlog!($ctx, $cat, $crate::priority::Priority::Debug, $($arg)+)
    };
}

#[cfg(not(feature = "log-debug"))]
#[macro_export]
macro_rules! rlog_debug {
    ($($arg:tt)*) => {
        ()
    };
}

#[cfg(feature = "log-trace")]
#[macro_export]
macro_rules! rlog_trace {
    ($ctx:expr, $cat:expr, $($arg:tt)+) => {
        $crate::rlog!($ctx, $cat, $crate::priority::Priority::Trace, $($arg)+)
    };
}

#[cfg(not(feature = "log-trace"))]
#[macro_export]
macro_rules! rlog_trace {
    ($($arg:tt)*) => {
        ()
    };
}
