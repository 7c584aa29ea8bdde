use std::fmt;

/// Severity ladder for logging events.
///
/// Lower numeric value means more severe. `NotSet` is the "inherit from
/// parent" sentinel on a category; `Unknown` means no priority was resolved
/// anywhere along the parent chain.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Priority {
    Fatal,
    Alert,
    Crit,
    Error,
    Warn,
    Notice,
    Info,
    Debug,
    Trace,
    NotSet,
    Unknown,
}

const NAMES: [(&str, Priority); 11] = [
    ("fatal", Priority::Fatal),
    ("alert", Priority::Alert),
    ("crit", Priority::Crit),
    ("error", Priority::Error),
    ("warn", Priority::Warn),
    ("notice", Priority::Notice),
    ("info", Priority::Info),
    ("debug", Priority::Debug),
    ("trace", Priority::Trace),
    ("notset", Priority::NotSet),
    ("unknown", Priority::Unknown),
];

impl Priority {
    /// Numeric severity value (lower is more severe).
    #[must_use]
    pub const fn value(self) -> i32 {
        (self as i32) * 100
    }

    /// Symbolic name used in configuration files and layout output.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Priority::Fatal => "fatal",
            Priority::Alert => "alert",
            Priority::Crit => "crit",
            Priority::Error => "error",
            Priority::Warn => "warn",
            Priority::Notice => "notice",
            Priority::Info => "info",
            Priority::Debug => "debug",
            Priority::Trace => "trace",
            Priority::NotSet => "notset",
            Priority::Unknown => "unknown",
        }
    }

    /// Case-insensitive name lookup. Unrecognized names map to `Unknown`
    /// rather than failing; a bad priority in a config file must not abort
    /// the load.
    #[must_use]
    pub fn from_name(name: &str) -> Priority {
        let lower = name.to_ascii_lowercase();
        NAMES
            .iter()
            .find(|(n, _)| *n == lower)
            .map_or(Priority::Unknown, |(_, p)| *p)
    }

    /// Whether an event at `self` passes a threshold of `threshold`.
    ///
    /// `NotSet`/`Unknown` thresholds sit above every real severity, so an
    /// unconfigured chain lets everything through.
    #[must_use]
    pub const fn is_enabled_at(self, threshold: Priority) -> bool {
        self.value() <= threshold.value()
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
