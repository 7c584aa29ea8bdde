use std::io::{self, Write};

use crate::appender::AppenderError;
use crate::conf::{ConfError, ConfNode};

/// Console stream selector shared by the stream and ansicolor backends.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum StreamTarget {
    Stdout,
    Stderr,
}

impl StreamTarget {
    /// Resolves the `stream` attribute. Absent or empty selects stderr;
    /// anything other than `stdout`/`stderr` is a configuration error.
    pub(crate) fn from_node(node: &ConfNode) -> Result<StreamTarget, ConfError> {
        match node.attr_non_empty("stream") {
            None => Ok(StreamTarget::Stderr),
            Some(v) if v.eq_ignore_ascii_case("stdout") => Ok(StreamTarget::Stdout),
            Some(v) if v.eq_ignore_ascii_case("stderr") => Ok(StreamTarget::Stderr),
            Some(v) => Err(ConfError::BadValue {
                attr: "stream",
                value: v.to_string(),
            }),
        }
    }

    /// Stream named after an appender, for appenders that were referenced
    /// but never configured.
    pub(crate) fn from_appender_name(name: &str) -> StreamTarget {
        if name.eq_ignore_ascii_case("stdout") {
            StreamTarget::Stdout
        } else {
            StreamTarget::Stderr
        }
    }

    pub(crate) fn write_all(self, bytes: &[u8]) -> io::Result<()> {
        match self {
            StreamTarget::Stdout => {
                let mut out = io::stdout().lock();
                out.write_all(bytes)?;
                out.flush()
            }
            StreamTarget::Stderr => {
                let mut out = io::stderr().lock();
                out.write_all(bytes)?;
                out.flush()
            }
        }
    }

    pub(crate) const fn name(self) -> &'static str {
        match self {
            StreamTarget::Stdout => "stdout",
            StreamTarget::Stderr => "stderr",
        }
    }
}

/// Console sink. Holds no OS resource of its own; open/close only track the
/// lifecycle state so the contract is identical to every other backend.
#[derive(Debug)]
pub struct StreamBackend {
    target: StreamTarget,
    open: bool,
}

impl StreamBackend {
    pub(crate) fn from_node(node: &ConfNode) -> Result<Self, ConfError> {
        Ok(Self {
            target: StreamTarget::from_node(node)?,
            open: false,
        })
    }

    pub(crate) fn for_appender_name(name: &str) -> Self {
        Self {
            target: StreamTarget::from_appender_name(name),
            open: false,
        }
    }

    pub(crate) fn open(&mut self) -> Result<(), AppenderError> {
        self.open = true;
        Ok(())
    }

    pub(crate) fn append(&mut self, line: &str) -> Result<(), AppenderError> {
        if !self.open {
            return Err(AppenderError::NotOpen);
        }
        self.target.write_all(line.as_bytes())?;
        Ok(())
    }

    pub(crate) fn close(&mut self) -> Result<(), AppenderError> {
        self.open = false;
        Ok(())
    }

    pub(crate) const fn is_open(&self) -> bool {
        self.open
    }

    pub(crate) const fn target_name(&self) -> &'static str {
        self.target.name()
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used)]
    use super::*;
    use crate::conf::parse_str;

    fn node(text: &str) -> ConfNode {
        parse_str(text).unwrap().remove(0)
    }

    #[test]
    fn stream_attribute_selects_target() {
        let b = StreamBackend::from_node(&node("[appender a]\nstream = stdout\n")).unwrap();
        assert_eq!(b.target, StreamTarget::Stdout);
        let b = StreamBackend::from_node(&node("[appender a]\nstream = STDERR\n")).unwrap();
        assert_eq!(b.target, StreamTarget::Stderr);
    }

    #[test]
    fn missing_stream_defaults_to_stderr() {
        let b = StreamBackend::from_node(&node("[appender a]\n")).unwrap();
        assert_eq!(b.target, StreamTarget::Stderr);
    }

    #[test]
    fn bad_stream_name_is_a_config_error() {
        let err = StreamBackend::from_node(&node("[appender a]\nstream = tty7\n")).unwrap_err();
        assert!(matches!(err, ConfError::BadValue { attr: "stream", .. }));
    }

    #[test]
    fn unconfigured_appender_streams_by_name() {
        assert_eq!(
            StreamBackend::for_appender_name("stdout").target,
            StreamTarget::Stdout
        );
        assert_eq!(
            StreamBackend::for_appender_name("anything").target,
            StreamTarget::Stderr
        );
    }

    #[test]
    fn append_requires_open() {
        let mut b = StreamBackend::for_appender_name("stdout");
        assert!(matches!(b.append("x\n"), Err(AppenderError::NotOpen)));
        b.open().unwrap();
        b.close().unwrap();
        assert!(matches!(b.append("x\n"), Err(AppenderError::NotOpen)));
    }
}
