use std::fmt;
use std::sync::{PoisonError, RwLock};

use crate::category::parent_name;
use crate::priority::Priority;

#[derive(Debug)]
struct CategoryState {
    priority: Priority,
    additive: bool,
    appender: Option<String>,
}

/// Named node in the dot-hierarchical logging namespace.
///
/// The parent link is a name into the owning registry, never a pointer, so a
/// category can outlive nothing it refers to. Priority, additivity and the
/// (single) bound appender are mutable under an `RwLock`: logging threads
/// read them while a configuration reread mutates them, and readers must
/// never observe a torn value.
#[derive(Debug)]
pub struct Category {
    name: String,
    parent: Option<String>,
    state: RwLock<CategoryState>,
}

impl Category {
    #[must_use]
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            parent: parent_name(name).map(String::from),
            state: RwLock::new(CategoryState {
                priority: Priority::NotSet,
                additive: true,
                appender: None,
            }),
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn parent_name(&self) -> Option<&str> {
        self.parent.as_deref()
    }

    /// Local priority only; `NotSet` means "inherit".
    #[must_use]
    pub fn priority(&self) -> Priority {
        self.read().priority
    }

    /// Sets the local priority and returns the previous value.
    pub fn set_priority(&self, priority: Priority) -> Priority {
        let mut state = self.write();
        std::mem::replace(&mut state.priority, priority)
    }

    #[must_use]
    pub fn additivity(&self) -> bool {
        self.read().additive
    }

    /// Sets the additivity flag and returns the previous value.
    pub fn set_additivity(&self, additive: bool) -> bool {
        let mut state = self.write();
        std::mem::replace(&mut state.additive, additive)
    }

    /// Name of the single bound appender, if any.
    #[must_use]
    pub fn appender(&self) -> Option<String> {
        self.read().appender.clone()
    }

    /// Replaces the bound appender, returning the previous binding (swap
    /// semantics). Only one appender per category.
    pub fn set_appender(&self, appender: Option<String>) -> Option<String> {
        let mut state = self.write();
        std::mem::replace(&mut state.appender, appender)
    }

    fn read(&self) -> std::sync::RwLockReadGuard<'_, CategoryState> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> std::sync::RwLockWriteGuard<'_, CategoryState> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.read();
        write!(
            f,
            "{{ name:'{}' priority:{} additive:{} appender:'{}' parent:'{}' }}",
            self.name,
            state.priority,
            state.additive,
            state.appender.as_deref().unwrap_or("-"),
            self.parent.as_deref().unwrap_or("-"),
        )
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used)]
    use super::*;

    #[test]
    fn defaults() {
        let cat = Category::new("a.b");
        assert_eq!(cat.priority(), Priority::NotSet);
        assert!(cat.additivity());
        assert!(cat.appender().is_none());
        assert_eq!(cat.parent_name(), Some("a"));
    }

    #[test]
    fn setters_return_previous_value() {
        let cat = Category::new("a");
        assert_eq!(cat.set_priority(Priority::Warn), Priority::NotSet);
        assert_eq!(cat.set_priority(Priority::Error), Priority::Warn);

        assert!(cat.set_additivity(false));
        assert!(!cat.set_additivity(true));

        assert_eq!(cat.set_appender(Some("A".into())), None);
        assert_eq!(cat.set_appender(Some("B".into())), Some("A".into()));
        assert_eq!(cat.appender(), Some("B".into()));
    }
}
