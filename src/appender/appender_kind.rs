use core::fmt;

/// The closed set of appender backend variants. This is the static "type
/// registry": each variant carries the full init/open/append/close
/// capability set, and each owns one process-wide concurrency guard.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AppenderKind {
    Stream,
    File,
    Socket,
    AnsiColor,
    RollingFile,
}

impl AppenderKind {
    pub const COUNT: usize = 5;

    pub const ALL: [AppenderKind; Self::COUNT] = [
        AppenderKind::Stream,
        AppenderKind::File,
        AppenderKind::Socket,
        AppenderKind::AnsiColor,
        AppenderKind::RollingFile,
    ];

    /// Case-insensitive name lookup; `None` for unknown types.
    #[must_use]
    pub fn from_name(name: &str) -> Option<AppenderKind> {
        match name.to_ascii_lowercase().as_str() {
            "stream" => Some(AppenderKind::Stream),
            "file" => Some(AppenderKind::File),
            "socket" => Some(AppenderKind::Socket),
            "ansicolor" => Some(AppenderKind::AnsiColor),
            "rollingfile" => Some(AppenderKind::RollingFile),
            _ => None,
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            AppenderKind::Stream => "stream",
            AppenderKind::File => "file",
            AppenderKind::Socket => "socket",
            AppenderKind::AnsiColor => "ansicolor",
            AppenderKind::RollingFile => "rollingfile",
        }
    }

    /// Stable index into the per-type guard table.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for AppenderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_round_trip() {
        for kind in AppenderKind::ALL {
            assert_eq!(AppenderKind::from_name(kind.name()), Some(kind));
        }
        assert_eq!(AppenderKind::from_name("carrier-pigeon"), None);
    }

    #[test]
    fn indices_are_unique_and_in_range() {
        for (i, kind) in AppenderKind::ALL.iter().enumerate() {
            assert_eq!(kind.index(), i);
        }
    }
}
