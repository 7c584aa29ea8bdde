use std::collections::HashMap;
use std::sync::{Arc, RwLock};

/// Generic keyed get-or-create cache backing every configurable object kind
/// (categories, appenders, layouts, rolling policies).
///
/// Identity management only: one shared instance per name, no knowledge of
/// hierarchy. Instances are created lazily (configuration wiring and logging
/// call sites may race to create the same name) and the registry guarantees
/// that at most one instance per name is ever observable, never a partially
/// constructed one: construction happens under the write lock behind a
/// double-check.
///
/// Factories must not call back into the same registry; recursive needs
/// (ancestor materialization) are handled by the caller, outermost first.
pub struct NamedRegistry<T> {
    kind: &'static str,
    inner: RwLock<HashMap<String, Arc<T>>>,
}

impl<T> NamedRegistry<T> {
    #[must_use]
    pub fn new(kind: &'static str) -> Self {
        Self {
            kind,
            inner: RwLock::new(HashMap::new()),
        }
    }

    /// Label for diagnostics dumps ("category", "appender", ...).
    #[must_use]
    pub fn kind(&self) -> &'static str {
        self.kind
    }

    /// Returns the instance registered under `name`, creating it through
    /// `factory` if absent. Empty names are invalid and yield `None`.
    pub fn get_or_create<F>(&self, name: &str, factory: F) -> Option<Arc<T>>
    where
        F: FnOnce(&str) -> T,
    {
        if name.is_empty() {
            return None;
        }

        if let Ok(map) = self.inner.read() {
            if let Some(existing) = map.get(name) {
                return Some(Arc::clone(existing));
            }
        }

        let mut map = self.inner.write().ok()?;
        // Double check: another thread may have won the race between the
        // read unlock and the write lock.
        if let Some(existing) = map.get(name) {
            return Some(Arc::clone(existing));
        }
        let instance = Arc::new(factory(name));
        map.insert(name.to_string(), Arc::clone(&instance));
        Some(instance)
    }

    /// Reference-only lookup. Absence is a valid, silent outcome: a category
    /// naming an appender that was never configured simply resolves to
    /// nothing.
    #[must_use]
    pub fn lookup(&self, name: &str) -> Option<Arc<T>> {
        if name.is_empty() {
            return None;
        }
        self.inner
            .read()
            .ok()
            .and_then(|map| map.get(name).map(Arc::clone))
    }

    /// Snapshot of every registered instance, sorted by name so diagnostic
    /// dumps are stable.
    #[must_use]
    pub fn enumerate(&self) -> Vec<(String, Arc<T>)> {
        let mut items: Vec<(String, Arc<T>)> = match self.inner.read() {
            Ok(map) => map
                .iter()
                .map(|(k, v)| (k.clone(), Arc::clone(v)))
                .collect(),
            Err(_) => Vec::new(),
        };
        items.sort_by(|a, b| a.0.cmp(&b.0));
        items
    }

    /// Releases every instance and resets the registry to empty. Subsequent
    /// `get_or_create` calls start fresh.
    pub fn destroy_all(&self) {
        if let Ok(mut map) = self.inner.write() {
            map.clear();
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.read().map(|m| m.len()).unwrap_or(0)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used)]
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::thread;

    #[test]
    fn get_or_create_is_idempotent() {
        let reg: NamedRegistry<String> = NamedRegistry::new("test");
        let a = reg.get_or_create("x", |n| n.to_uppercase()).unwrap();
        let b = reg.get_or_create("x", |_| panic!("factory re-run")).unwrap();
        assert!(Arc::ptr_eq(&a, &b));
        assert_eq!(*a, "X");
    }

    #[test]
    fn empty_name_is_rejected() {
        let reg: NamedRegistry<u32> = NamedRegistry::new("test");
        assert!(reg.get_or_create("", |_| 1).is_none());
        assert!(reg.lookup("").is_none());
    }

    #[test]
    fn lookup_miss_is_silent() {
        let reg: NamedRegistry<u32> = NamedRegistry::new("test");
        assert!(reg.lookup("nope").is_none());
    }

    #[test]
    fn destroy_all_resets() {
        let reg: NamedRegistry<u32> = NamedRegistry::new("test");
        reg.get_or_create("a", |_| 1).unwrap();
        reg.get_or_create("b", |_| 2).unwrap();
        assert_eq!(reg.len(), 2);
        reg.destroy_all();
        assert!(reg.is_empty());
        let fresh = reg.get_or_create("a", |_| 9).unwrap();
        assert_eq!(*fresh, 9);
    }

    #[test]
    fn enumerate_is_a_sorted_snapshot() {
        let reg: NamedRegistry<u32> = NamedRegistry::new("test");
        reg.get_or_create("b", |_| 2).unwrap();
        reg.get_or_create("a", |_| 1).unwrap();
        let names: Vec<String> = reg.enumerate().into_iter().map(|(n, _)| n).collect();
        assert_eq!(names, vec!["a".to_string(), "b".to_string()]);
    }

    #[test]
    fn concurrent_get_or_create_yields_one_instance() {
        let reg = Arc::new(NamedRegistry::<u32>::new("test"));
        let factory_runs = Arc::new(AtomicUsize::new(0));

        let handles: Vec<_> = (0..16)
            .map(|_| {
                let reg = Arc::clone(&reg);
                let runs = Arc::clone(&factory_runs);
                thread::spawn(move || {
                    reg.get_or_create("x", |_| {
                        runs.fetch_add(1, Ordering::SeqCst);
                        7
                    })
                    .unwrap()
                })
            })
            .collect();

        let instances: Vec<Arc<u32>> =
            handles.into_iter().map(|h| h.join().unwrap()).collect();
        assert_eq!(factory_runs.load(Ordering::SeqCst), 1);
        assert_eq!(reg.len(), 1);
        for inst in &instances {
            assert!(Arc::ptr_eq(inst, &instances[0]));
        }
    }
}
