use std::fmt;
use std::sync::{Mutex, PoisonError, RwLock};

use crate::appender::{AppenderError, AppenderKind, Backend};
use crate::conf::{ConfError, ConfNode};
use crate::context::LoggingContext;
use crate::event::LoggingEvent;
use crate::layout::LayoutKind;
use crate::rollingpolicy::SizeWin;

/// A named sink instance, bound to one of the statically registered
/// appender types.
///
/// The backend state is exclusively owned by the appender and reached only
/// through the per-type guard plus the instance's own state cell, so a
/// configuration-driven reopen or close never races an in-flight append
/// from another thread.
pub struct Appender {
    name: String,
    kind: RwLock<AppenderKind>,
    layout: RwLock<Option<String>>,
    state: Mutex<Backend>,
}

impl Appender {
    /// New appenders default to a console stream named after themselves, so
    /// a name referenced before (or without) configuration still produces
    /// output.
    #[must_use]
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            kind: RwLock::new(AppenderKind::Stream),
            layout: RwLock::new(None),
            state: Mutex::new(Backend::default_for(name)),
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn kind(&self) -> AppenderKind {
        *self.kind.read().unwrap_or_else(PoisonError::into_inner)
    }

    /// Name of the bound layout, if any.
    #[must_use]
    pub fn layout_name(&self) -> Option<String> {
        self.layout
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Replaces the layout reference, returning the previous one.
    pub fn set_layout(&self, layout: Option<String>) -> Option<String> {
        let mut slot = self.layout.write().unwrap_or_else(PoisonError::into_inner);
        std::mem::replace(&mut *slot, layout)
    }

    /// The init step: binds the appender to `kind` and builds fresh backend
    /// state from the backend-specific attributes of `node`. Any previous
    /// backend (and its resource) is released. Serializes through the type
    /// guard of `kind` like the other lifecycle operations.
    pub fn configure(
        &self,
        ctx: &LoggingContext,
        kind: AppenderKind,
        node: &ConfNode,
    ) -> Result<(), ConfError> {
        let backend = Backend::from_node(kind, node)?;
        let _guard = ctx
            .guards()
            .acquire(kind)
            .map_err(|e| ConfError::Io(std::io::Error::other(e.to_string())))?;
        let mut state = self.lock_state();
        *state = backend;
        *self.kind.write().unwrap_or_else(PoisonError::into_inner) = kind;
        Ok(())
    }

    /// Acquires the OS resource. Already-open is a no-op that leaves the
    /// live resource untouched.
    pub fn open(&self, ctx: &LoggingContext) -> Result<(), AppenderError> {
        let kind = self.kind();
        let _guard = ctx.guards().acquire(kind)?;
        self.lock_state().open()
    }

    /// Appends one event. Valid only when open; renders through the bound
    /// layout first. Strict lifecycle: no implicit open here.
    pub fn append(&self, ctx: &LoggingContext, event: &mut LoggingEvent) -> Result<(), AppenderError> {
        let kind = self.kind();
        let _guard = ctx.guards().acquire(kind)?;
        self.render(ctx, event);
        let mut state = self.lock_state();
        let roll = self.resolve_roll(ctx, &state);
        state.append(event, roll)
    }

    /// Chain-dispatch entry: opens lazily on first use, then renders and
    /// appends. Failures are reported to the caller, never retried.
    pub fn dispatch(&self, ctx: &LoggingContext, event: &mut LoggingEvent) -> Result<(), AppenderError> {
        let kind = self.kind();
        let _guard = ctx.guards().acquire(kind)?;
        self.render(ctx, event);
        let mut state = self.lock_state();
        if !state.is_open() {
            state.open()?;
        }
        let roll = self.resolve_roll(ctx, &state);
        state.append(event, roll)
    }

    /// Releases the OS resource. Never-opened close is a no-op.
    pub fn close(&self, ctx: &LoggingContext) -> Result<(), AppenderError> {
        let kind = self.kind();
        let _guard = ctx.guards().acquire(kind)?;
        self.lock_state().close()
    }

    /// Fills `event.rendered` through the bound layout. An unresolved
    /// layout name contributes nothing and the basic variant is used.
    fn render(&self, ctx: &LoggingContext, event: &mut LoggingEvent) {
        let bufsize = ctx.bufsize();
        event.rendered = match self
            .layout_name()
            .and_then(|name| ctx.layouts().lookup(&name))
        {
            Some(layout) => layout.format(event, bufsize),
            None => LayoutKind::Basic.format(event, bufsize),
        };
    }

    fn resolve_roll(&self, ctx: &LoggingContext, state: &Backend) -> SizeWin {
        state
            .rolling_policy_name()
            .and_then(|name| ctx.rolling_policies().lookup(name))
            .map_or_else(SizeWin::default, |policy| policy.params())
    }

    fn lock_state(&self) -> std::sync::MutexGuard<'_, Backend> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl fmt::Display for Appender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.lock_state();
        write!(
            f,
            "{{ name:'{}' type:'{}' backend:'{}' layout:'{}' open:{} }}",
            self.name,
            self.kind(),
            state.describe(),
            self.layout_name().as_deref().unwrap_or("-"),
            state.is_open(),
        )
    }
}
