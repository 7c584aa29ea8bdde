use std::sync::Arc;

use crate::category::{Category, DispatchError, parent_name};
use crate::context::LoggingContext;
use crate::diag_error;
use crate::event::LoggingEvent;
use crate::priority::Priority;
use crate::registry::NamedRegistry;

/// The category hierarchy engine: a `NamedRegistry` specialized for
/// dot-separated names, plus inheritance resolution and chained dispatch.
pub struct CategorySet {
    registry: NamedRegistry<Category>,
}

impl Default for CategorySet {
    fn default() -> Self {
        Self::new()
    }
}

impl CategorySet {
    #[must_use]
    pub fn new() -> Self {
        Self {
            registry: NamedRegistry::new("category"),
        }
    }

    /// Returns the category named `name`, materializing every missing
    /// dot-prefix ancestor first (root-first, so the invariant "every prefix
    /// of a registered name is itself registered" holds at all times).
    /// Idempotent: repeated calls return the identical shared instance.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<Arc<Category>> {
        if name.is_empty() {
            return None;
        }

        let mut ancestors = Vec::new();
        let mut current = name;
        while let Some(parent) = parent_name(current) {
            ancestors.push(parent);
            current = parent;
        }
        for ancestor in ancestors.into_iter().rev() {
            self.registry.get_or_create(ancestor, Category::new);
        }
        self.registry.get_or_create(name, Category::new)
    }

    /// Reference-only lookup; does not materialize anything.
    #[must_use]
    pub fn lookup(&self, name: &str) -> Option<Arc<Category>> {
        self.registry.lookup(name)
    }

    /// Walks upward through parent links while the priority is `NotSet` and
    /// returns the first set priority, or `Unknown` when the walk exhausts
    /// the chain without finding one.
    #[must_use]
    pub fn effective_priority(&self, cat: &Arc<Category>) -> Priority {
        let mut current = Arc::clone(cat);
        loop {
            let priority = current.priority();
            if priority != Priority::NotSet {
                return priority;
            }
            match current
                .parent_name()
                .and_then(|name| self.registry.lookup(name))
            {
                Some(parent) => current = parent,
                None => return Priority::Unknown,
            }
        }
    }

    /// Chain dispatch: starting at `cat`, invoke the bound appender (if any
    /// resolves), then repeat at the parent if and only if the category is
    /// additive, until a non-additive category or the root is exhausted.
    ///
    /// No priority filtering happens here; the caller has already decided
    /// the event should be emitted. Appender failures are collected, never
    /// used to short-circuit the walk, and no category lock is held across
    /// the call into an appender.
    pub fn log(
        &self,
        ctx: &LoggingContext,
        cat: &Arc<Category>,
        event: &mut LoggingEvent,
    ) -> Result<(), DispatchError> {
        let mut failures = Vec::new();
        let mut current = Some(Arc::clone(cat));

        while let Some(c) = current {
            if let Some(appender_name) = c.appender() {
                // An unresolved appender name contributes nothing at this
                // link of the chain.
                if let Some(appender) = ctx.appenders().lookup(&appender_name) {
                    if let Err(err) = appender.dispatch(ctx, event) {
                        diag_error!(
                            "appender '{}' failed for category '{}': {}",
                            appender_name,
                            c.name(),
                            err
                        );
                        failures.push((appender_name, err));
                    }
                }
            }

            current = if c.additivity() {
                c.parent_name().and_then(|name| self.registry.lookup(name))
            } else {
                None
            };
        }

        if failures.is_empty() {
            Ok(())
        } else {
            Err(DispatchError::new(failures))
        }
    }

    pub(crate) fn registry(&self) -> &NamedRegistry<Category> {
        &self.registry
    }
}
