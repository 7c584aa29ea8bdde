use std::sync::{Mutex, MutexGuard};

use crate::appender::{AppenderError, AppenderKind};
use crate::diag_error;

/// One mutual-exclusion guard per appender *type* (not per instance).
///
/// `open`, `append`, `close` and `configure` for every instance of a type
/// serialize through that type's guard, so a configuration-driven
/// reconfigure or reopen never races an in-flight append from another
/// thread, without per-instance lock proliferation. The guard is held for
/// the duration of one lifecycle operation, including the layout render and
/// policy lookup on the append path; it is never held across a call into
/// another appender or back into the category walk.
pub struct TypeGuards {
    guards: [Mutex<()>; AppenderKind::COUNT],
}

impl Default for TypeGuards {
    fn default() -> Self {
        Self::new()
    }
}

impl TypeGuards {
    #[must_use]
    pub fn new() -> Self {
        Self {
            guards: [const { Mutex::new(()) }; AppenderKind::COUNT],
        }
    }

    /// Acquires the guard for `kind`. A poisoned guard asserts in debug
    /// builds; in release the failure is reported and the operation is
    /// skipped by the caller.
    pub fn acquire(&self, kind: AppenderKind) -> Result<MutexGuard<'_, ()>, AppenderError> {
        match self.guards[kind.index()].lock() {
            Ok(guard) => Ok(guard),
            Err(_) => {
                debug_assert!(false, "'{kind}' appender type guard poisoned");
                diag_error!("unable to acquire '{kind}' appender type guard");
                Err(AppenderError::Guard)
            }
        }
    }
}
