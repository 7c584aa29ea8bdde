use std::fmt;
use std::sync::{PoisonError, RwLock};

/// Size-window rotation parameters: roll when the current file would exceed
/// `maxsize`, keep at most `maxnum` files.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SizeWin {
    pub maxsize: u64,
    pub maxnum: u32,
}

impl Default for SizeWin {
    fn default() -> Self {
        Self {
            maxsize: 1024 * 1024,
            maxnum: 5,
        }
    }
}

/// A named rolling policy instance. `sizewin` is the only variant; the
/// parameters can be updated in place by a configuration reread and are
/// re-resolved by the rolling-file backend on every append.
pub struct RollingPolicy {
    name: String,
    params: RwLock<SizeWin>,
}

impl RollingPolicy {
    #[must_use]
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            params: RwLock::new(SizeWin::default()),
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn params(&self) -> SizeWin {
        *self.params.read().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn set_maxsize(&self, maxsize: u64) {
        self.params
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .maxsize = maxsize;
    }

    pub fn set_maxnum(&self, maxnum: u32) {
        self.params
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .maxnum = maxnum;
    }
}

impl fmt::Display for RollingPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let p = self.params();
        write!(
            f,
            "{{ name:'{}' type:'sizewin' maxsize:{} maxnum:{} }}",
            self.name, p.maxsize, p.maxnum
        )
    }
}
