//! The owned runtime: one `LoggingContext` holds every registry, the
//! per-type appender guards, the global settings and the reread monitor.
//!
//! Nothing in the crate is process-global except the diagnostic level;
//! applications create as many independent contexts as they want and all
//! state dies with the context.

use std::fmt;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError, RwLock, RwLockWriteGuard};
use std::time::Instant;

use crate::appender::{Appender, TypeGuards};
use crate::category::{CategorySet, DispatchError, ROOT_CATEGORY};
use crate::conf::ConfError;
use crate::diag;
use crate::diag_debug;
use crate::diag_error;
use crate::event::{LoggingEvent, SourceLocation};
use crate::layout::Layout;
use crate::priority::Priority;
use crate::buffer;
use crate::rc::{self, RcConfig};
use crate::registry::NamedRegistry;
use crate::reread::RereadMonitor;
use crate::rollingpolicy::RollingPolicy;

/// Environment variable naming the configuration file. When set, the file
/// must exist.
pub const ENV_RC: &str = "RUSTYLOG_RC";
/// Environment override for the root category priority.
pub const ENV_PRIORITY: &str = "RUSTYLOG_PRIORITY";
/// Environment override for the root category appender.
pub const ENV_APPENDER: &str = "RUSTYLOG_APPENDER";
/// Environment override for the diagnostic level.
pub const ENV_DEBUG: &str = "RUSTYLOG_DEBUG";

/// Configuration file loaded from the working directory when `RUSTYLOG_RC`
/// is not set. Missing is fine.
pub const DEFAULT_RC_FILE: &str = "rustylogrc";

struct MonitorState {
    monitor: RereadMonitor,
    last_check: Option<Instant>,
}

pub struct LoggingContext {
    categories: CategorySet,
    appenders: NamedRegistry<Appender>,
    layouts: NamedRegistry<Layout>,
    rolling_policies: NamedRegistry<RollingPolicy>,
    guards: TypeGuards,
    rc: RwLock<RcConfig>,
    monitor: Mutex<MonitorState>,
    finalized: Mutex<bool>,
}

impl Default for LoggingContext {
    fn default() -> Self {
        Self::new()
    }
}

impl LoggingContext {
    /// An empty context: no configuration loaded, nothing monitored.
    #[must_use]
    pub fn new() -> Self {
        Self {
            categories: CategorySet::new(),
            appenders: NamedRegistry::new("appender"),
            layouts: NamedRegistry::new("layout"),
            rolling_policies: NamedRegistry::new("rollingpolicy"),
            guards: TypeGuards::new(),
            rc: RwLock::new(RcConfig::default()),
            monitor: Mutex::new(MonitorState {
                monitor: RereadMonitor::new(),
                last_check: None,
            }),
            finalized: Mutex::new(false),
        }
    }

    /// Creates a context and loads its configuration.
    ///
    /// `RUSTYLOG_RC` names the file and must then exist; without it
    /// `./rustylogrc` is tried and silently skipped when absent. After the
    /// file the environment hooks are applied: `RUSTYLOG_PRIORITY` and
    /// `RUSTYLOG_APPENDER` rewire the root category, `RUSTYLOG_DEBUG`
    /// raises the diagnostic level.
    pub fn init() -> Result<Self, ConfError> {
        let ctx = Self::new();

        if let Ok(level) = std::env::var(ENV_DEBUG) {
            if let Ok(level) = level.parse::<u32>() {
                diag::set_debug_level(level);
                ctx.rc_mut().debug = level;
            }
        }

        if let Ok(path) = std::env::var(ENV_RC) {
            ctx.load_source(Path::new(&path), true)?;
        } else {
            ctx.load_source(Path::new(DEFAULT_RC_FILE), false)?;
        }

        if let Some(root) = ctx.categories.get(ROOT_CATEGORY) {
            if let Ok(name) = std::env::var(ENV_PRIORITY) {
                root.set_priority(Priority::from_name(&name));
            }
            if let Ok(name) = std::env::var(ENV_APPENDER) {
                ctx.appenders.get_or_create(&name, Appender::new);
                root.set_appender(Some(name));
            }
        }

        Ok(ctx)
    }

    /// Loads a configuration file into an existing context and starts
    /// monitoring it for changes. The file must exist.
    pub fn load_file(&self, path: &Path) -> Result<(), ConfError> {
        self.load_source(path, true)
    }

    /// Loads one configuration file and starts monitoring it. A missing
    /// file is an error only when `required`.
    fn load_source(&self, path: &Path, required: bool) -> Result<(), ConfError> {
        if !path.exists() {
            if required {
                return Err(ConfError::Io(std::io::Error::new(
                    std::io::ErrorKind::NotFound,
                    format!("configuration file '{}' not found", path.display()),
                )));
            }
            diag_debug!("no configuration file '{}', using defaults", path.display());
            return Ok(());
        }

        rc::load(self, path)?;
        let mut state = self.lock_monitor();
        state.monitor.track(path);
        diag_debug!("loaded configuration from '{}'", path.display());
        Ok(())
    }

    #[must_use]
    pub fn categories(&self) -> &CategorySet {
        &self.categories
    }

    #[must_use]
    pub fn appenders(&self) -> &NamedRegistry<Appender> {
        &self.appenders
    }

    #[must_use]
    pub fn layouts(&self) -> &NamedRegistry<Layout> {
        &self.layouts
    }

    #[must_use]
    pub fn rolling_policies(&self) -> &NamedRegistry<RollingPolicy> {
        &self.rolling_policies
    }

    #[must_use]
    pub(crate) fn guards(&self) -> &TypeGuards {
        &self.guards
    }

    /// Snapshot of the global settings.
    #[must_use]
    pub fn rc(&self) -> RcConfig {
        *self.rc.read().unwrap_or_else(PoisonError::into_inner)
    }

    pub(crate) fn rc_mut(&self) -> RwLockWriteGuard<'_, RcConfig> {
        self.rc.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Configured buffer cap in bytes; 0 means unbounded.
    #[must_use]
    pub fn bufsize(&self) -> usize {
        self.rc().bufsize
    }

    /// Whether an event of `priority` on `category` would be dispatched.
    /// The macros call this before formatting anything.
    #[must_use]
    pub fn is_priority_enabled(&self, category: &str, priority: Priority) -> bool {
        match self.categories.get(category) {
            Some(cat) => priority.is_enabled_at(self.categories.effective_priority(&cat)),
            None => false,
        }
    }

    /// Emits one event: builds it under the buffer policy and runs chain
    /// dispatch from `category` upward.
    ///
    /// No threshold check happens here; callers that want one use
    /// `is_priority_enabled` (the macros do). Formatting is unconditional.
    pub fn log(
        &self,
        category: &str,
        priority: Priority,
        args: fmt::Arguments<'_>,
        location: Option<SourceLocation>,
    ) -> Result<(), DispatchError> {
        let Some(cat) = self.categories.get(category) else {
            return Ok(());
        };

        let mut msg = args.to_string();
        let bufsize = self.bufsize();
        if bufsize > 0 {
            buffer::clip_message(&mut msg, bufsize);
        }

        let mut event = LoggingEvent::new(category, priority, msg, location);
        self.categories.log(self, &cat, &mut event)
    }

    /// Checks the monitored configuration sources and reloads each changed
    /// one through the normal wiring path. Returns the number of sources
    /// reloaded.
    ///
    /// Rate-limited: calls within `reread_interval` seconds of the previous
    /// check are no-ops, so this is cheap to call from a logging hot path.
    pub fn reread(&self) -> usize {
        let rc = self.rc();
        if !rc.reread {
            return 0;
        }

        let changed: Vec<PathBuf> = {
            let mut state = self.lock_monitor();
            let now = Instant::now();
            if let Some(last) = state.last_check {
                if now.duration_since(last).as_secs() < rc.reread_interval {
                    return 0;
                }
            }
            state.last_check = Some(now);
            state.monitor.changed()
        };

        let mut reloaded = 0;
        for path in changed {
            diag_debug!("rereading configuration '{}'", path.display());
            match rc::load(self, &path) {
                Ok(()) => reloaded += 1,
                Err(e) => {
                    diag_error!("reread of '{}' failed: {e}", path.display());
                }
            }
        }
        reloaded
    }

    /// Writes every registered instance of all four kinds to `w`, sorted by
    /// name within each kind.
    pub fn dump_instances(&self, w: &mut dyn Write) -> std::io::Result<()> {
        for (name, cat) in self.categories.registry().enumerate() {
            writeln!(w, "category '{name}': {cat}")?;
        }
        for (name, app) in self.appenders.enumerate() {
            writeln!(w, "appender '{name}': {app}")?;
        }
        for (name, layout) in self.layouts.enumerate() {
            writeln!(w, "layout '{name}': {layout}")?;
        }
        for (name, policy) in self.rolling_policies.enumerate() {
            writeln!(w, "rollingpolicy '{name}': {policy}")?;
        }
        Ok(())
    }

    /// Shuts the context down: closes every appender and empties every
    /// registry. With `nocleanup` set this is a no-op and open resources
    /// are left to the process exit. Idempotent.
    pub fn fini(&self) {
        {
            let mut done = self
                .finalized
                .lock()
                .unwrap_or_else(PoisonError::into_inner);
            if *done {
                return;
            }
            *done = true;
        }

        if self.rc().nocleanup {
            diag_debug!("nocleanup set, skipping shutdown cleanup");
            return;
        }

        for (name, appender) in self.appenders.enumerate() {
            if let Err(e) = appender.close(self) {
                diag_error!("closing appender '{name}' failed: {e}");
            }
        }

        self.categories.registry().destroy_all();
        self.appenders.destroy_all();
        self.layouts.destroy_all();
        self.rolling_policies.destroy_all();
    }

    fn lock_monitor(&self) -> std::sync::MutexGuard<'_, MonitorState> {
        self.monitor.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Drop for LoggingContext {
    fn drop(&mut self) {
        self.fini();
    }
}
