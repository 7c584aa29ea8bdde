//! rustylog is a hierarchical logging runtime: named categories arranged by
//! dot-separated names, each resolving its effective priority through its
//! ancestors and dispatching events along the appender chain.
//!
//! All state is owned by a [`context::LoggingContext`]: registries of
//! categories, appenders, layouts and rolling policies, the global settings
//! and the configuration reread monitor. Configuration comes from an
//! INI-like file wired in by the `rc` module, and the `rlog!` macro family
//! is the call-site entry point.

/// Appender types, their backends and the per-type concurrency guards.
pub mod appender;
/// Shared buffer policy: line termination, clipping and ellipsis.
pub mod buffer;
/// The category hierarchy: names, inheritance and chained dispatch.
pub mod category;
/// Parser for the INI-like configuration text format.
pub mod conf;
/// The owned runtime context tying every subsystem together.
pub mod context;
/// Self-diagnostics channel for the library itself.
pub mod diag;
/// Logging events and their call-site metadata.
pub mod event;
/// Output formats applied to events before the backend write.
pub mod layout;
/// The user-facing logging macros.
pub mod macros;
/// Severity levels and threshold resolution.
pub mod priority;
/// Configuration wiring from parsed elements to live instances.
pub mod rc;
/// Generic named instance registry.
pub mod registry;
/// Modification-time monitoring of configuration sources.
pub mod reread;
/// Rotation parameters for the rolling-file appender.
pub mod rollingpolicy;

pub use appender::{Appender, AppenderError, AppenderKind};
pub use category::{Category, CategorySet, DispatchError};
pub use conf::ConfError;
pub use context::LoggingContext;
pub use event::{LoggingEvent, SourceLocation};
pub use layout::{Layout, LayoutKind};
pub use priority::Priority;
