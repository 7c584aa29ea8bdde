use std::path::{Path, PathBuf};
use std::time::SystemTime;

/// A configuration source under change monitoring.
#[derive(Debug)]
struct TrackedSource {
    path: PathBuf,
    mtime: SystemTime,
}

/// Watches the configuration sources loaded at startup and reports the ones
/// whose modification time has moved since the last check.
///
/// Only files that existed at load time are tracked; a source that was
/// absent then stays untracked for the life of the context, so it can never
/// trigger a reload by appearing later.
#[derive(Debug, Default)]
pub struct RereadMonitor {
    sources: Vec<TrackedSource>,
}

impl RereadMonitor {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts monitoring `path` if it exists right now. Missing files are
    /// silently ignored. A path already under monitoring is not duplicated;
    /// its stored mtime is refreshed instead, so one change to one file is
    /// only ever reported once.
    pub fn track(&mut self, path: &Path) {
        if let Ok(meta) = std::fs::metadata(path) {
            if let Ok(mtime) = meta.modified() {
                if let Some(existing) = self.sources.iter_mut().find(|s| s.path == path) {
                    existing.mtime = mtime;
                    return;
                }
                self.sources.push(TrackedSource {
                    path: path.to_path_buf(),
                    mtime,
                });
            }
        }
    }

    #[must_use]
    pub fn tracked(&self) -> usize {
        self.sources.len()
    }

    /// Returns the sources modified since the previous check and records
    /// their new modification times, so each change is reported exactly
    /// once. A tracked file that has disappeared is left alone; it will be
    /// reported when it comes back with a newer mtime.
    pub fn changed(&mut self) -> Vec<PathBuf> {
        let mut out = Vec::new();
        for source in &mut self.sources {
            let Ok(meta) = std::fs::metadata(&source.path) else {
                continue;
            };
            let Ok(mtime) = meta.modified() else {
                continue;
            };
            if mtime != source.mtime {
                source.mtime = mtime;
                out.push(source.path.clone());
            }
        }
        out
    }
}
