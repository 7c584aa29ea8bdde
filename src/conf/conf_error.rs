use core::fmt;
use std::io;

/// Configuration errors. An element-level error skips that element and the
/// load continues; a file-level error (unreadable file, bad section header)
/// fails the whole load.
#[derive(Debug)]
pub enum ConfError {
    Io(io::Error),
    Syntax { line: usize, text: String },
    MissingAttr { tag: &'static str, attr: &'static str },
    BadValue { attr: &'static str, value: String },
    UnknownType { what: &'static str, name: String },
}

impl fmt::Display for ConfError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfError::Syntax { line, text } => {
                write!(f, "config syntax error at line {line}: {text}")
            }
            ConfError::MissingAttr { tag, attr } => {
                write!(f, "{tag} element is missing required attribute \"{attr}\"")
            }
            ConfError::BadValue { attr, value } => {
                write!(f, "invalid value '{value}' for attribute \"{attr}\"")
            }
            ConfError::UnknownType { what, name } => {
                write!(f, "unknown {what} type '{name}'")
            }
        }
    }
}

impl From<io::Error> for ConfError {
    fn from(e: io::Error) -> Self {
        ConfError::Io(e)
    }
}

impl std::error::Error for ConfError {}
