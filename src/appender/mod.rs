pub mod ansicolor;
pub mod appender;
pub mod appender_error;
pub mod appender_kind;
pub mod backend;
pub mod file;
pub mod rollingfile;
pub mod socket;
pub mod stream;
pub mod type_guards;

pub use appender::Appender;
pub use appender_error::AppenderError;
pub use appender_kind::AppenderKind;
pub use backend::Backend;
pub use type_guards::TypeGuards;

use std::path::PathBuf;

/// Expands a leading tilde to the user's home directory.
pub(crate) fn expand_path(path_str: &str) -> PathBuf {
    if path_str.starts_with('~') {
        let home = std::env::var("HOME")
            .or_else(|_| std::env::var("USERPROFILE"))
            .ok()
            .map(PathBuf::from);

        if let Some(mut home_path) = home {
            if path_str == "~" {
                return home_path;
            }
            if path_str.starts_with("~/") || path_str.starts_with("~\\") {
                home_path.push(&path_str[2..]);
                return home_path;
            }
        }
    }
    PathBuf::from(path_str)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used)]
    use super::*;

    #[test]
    fn plain_paths_pass_through() {
        assert_eq!(expand_path("/var/log/x"), PathBuf::from("/var/log/x"));
    }

    #[test]
    fn tilde_expands_to_home() {
        if let Ok(home) = std::env::var("HOME") {
            let expanded = expand_path("~/logs");
            assert_eq!(expanded, PathBuf::from(home).join("logs"));
        }
    }
}
