use crate::appender::ansicolor::AnsiColorBackend;
use crate::appender::file::FileBackend;
use crate::appender::rollingfile::RollingFileBackend;
use crate::appender::socket::SocketBackend;
use crate::appender::stream::StreamBackend;
use crate::appender::{AppenderError, AppenderKind};
use crate::conf::{ConfError, ConfNode};
use crate::event::LoggingEvent;
use crate::rollingpolicy::SizeWin;

/// Backend state of an appender: one variant per appender type, each
/// carrying its own strongly-typed state. Statically dispatched; the engine
/// never inspects a backend beyond this lifecycle interface.
#[derive(Debug)]
pub enum Backend {
    Stream(StreamBackend),
    File(FileBackend),
    Socket(SocketBackend),
    AnsiColor(AnsiColorBackend),
    RollingFile(RollingFileBackend),
}

impl Backend {
    /// Builds the backend for `kind` from its own attributes in `node`
    /// (the init step of the lifecycle). The engine passes the raw node
    /// through; only the backend knows its attribute names.
    pub fn from_node(kind: AppenderKind, node: &ConfNode) -> Result<Backend, ConfError> {
        Ok(match kind {
            AppenderKind::Stream => Backend::Stream(StreamBackend::from_node(node)?),
            AppenderKind::File => Backend::File(FileBackend::from_node(node)?),
            AppenderKind::Socket => Backend::Socket(SocketBackend::from_node(node)?),
            AppenderKind::AnsiColor => Backend::AnsiColor(AnsiColorBackend::from_node(node)?),
            AppenderKind::RollingFile => {
                Backend::RollingFile(RollingFileBackend::from_node(node)?)
            }
        })
    }

    /// Backend for an appender that was referenced by name but never
    /// configured: a console stream named after the appender.
    #[must_use]
    pub fn default_for(appender_name: &str) -> Backend {
        Backend::Stream(StreamBackend::for_appender_name(appender_name))
    }

    #[must_use]
    pub const fn kind(&self) -> AppenderKind {
        match self {
            Backend::Stream(_) => AppenderKind::Stream,
            Backend::File(_) => AppenderKind::File,
            Backend::Socket(_) => AppenderKind::Socket,
            Backend::AnsiColor(_) => AppenderKind::AnsiColor,
            Backend::RollingFile(_) => AppenderKind::RollingFile,
        }
    }

    pub fn open(&mut self) -> Result<(), AppenderError> {
        match self {
            Backend::Stream(b) => b.open(),
            Backend::File(b) => b.open(),
            Backend::Socket(b) => b.open(),
            Backend::AnsiColor(b) => b.open(),
            Backend::RollingFile(b) => b.open(),
        }
    }

    /// Valid only in the open state. `event.rendered` must already hold the
    /// laid-out line. `roll` carries the rotation window for the
    /// rolling-file variant; other variants ignore it.
    pub fn append(&mut self, event: &LoggingEvent, roll: SizeWin) -> Result<(), AppenderError> {
        match self {
            Backend::Stream(b) => b.append(&event.rendered),
            Backend::File(b) => b.append(&event.rendered),
            Backend::Socket(b) => b.append(&event.rendered),
            Backend::AnsiColor(b) => b.append(&event.category, &event.rendered),
            Backend::RollingFile(b) => b.append(&event.rendered, roll),
        }
    }

    pub fn close(&mut self) -> Result<(), AppenderError> {
        match self {
            Backend::Stream(b) => b.close(),
            Backend::File(b) => b.close(),
            Backend::Socket(b) => b.close(),
            Backend::AnsiColor(b) => b.close(),
            Backend::RollingFile(b) => b.close(),
        }
    }

    #[must_use]
    pub const fn is_open(&self) -> bool {
        match self {
            Backend::Stream(b) => b.is_open(),
            Backend::File(b) => b.is_open(),
            Backend::Socket(b) => b.is_open(),
            Backend::AnsiColor(b) => b.is_open(),
            Backend::RollingFile(b) => b.is_open(),
        }
    }

    /// Rolling policy reference, for variants that have one.
    #[must_use]
    pub fn rolling_policy_name(&self) -> Option<&str> {
        match self {
            Backend::RollingFile(b) => b.policy_name(),
            _ => None,
        }
    }

    /// Short description for diagnostics dumps.
    #[must_use]
    pub fn describe(&self) -> String {
        match self {
            Backend::Stream(b) => format!("stream:{}", b.target_name()),
            Backend::File(b) => format!("file:{}", b.path().display()),
            Backend::Socket(b) => {
                let (dest, port) = b.dest();
                format!("socket:{dest}:{port}")
            }
            Backend::AnsiColor(b) => format!("ansicolor:{}", b.target_name()),
            Backend::RollingFile(_) => "rollingfile".to_string(),
        }
    }
}
