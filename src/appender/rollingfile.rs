use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::PathBuf;

use crate::appender::{AppenderError, expand_path};
use crate::conf::{ConfError, ConfNode};
use crate::diag_debug;
use crate::rollingpolicy::SizeWin;

/// Size-rotated file sink.
///
/// The live file is `<logdir>/<prefix>.0`; on rotation every existing file
/// shifts one index up (`prefix.0 -> prefix.1`, ...) and the oldest beyond
/// the policy's window is dropped. Rotation parameters come from the named
/// rolling policy, re-resolved on every append so a configuration reread
/// takes effect immediately.
#[derive(Debug)]
pub struct RollingFileBackend {
    logdir: PathBuf,
    prefix: String,
    policy: Option<String>,
    file: Option<File>,
    cur_size: u64,
}

impl RollingFileBackend {
    pub(crate) fn from_node(node: &ConfNode) -> Result<Self, ConfError> {
        let logdir = node
            .attr_non_empty("logdir")
            .ok_or(ConfError::MissingAttr {
                tag: "appender",
                attr: "logdir",
            })?;
        let prefix = node
            .attr_non_empty("prefix")
            .ok_or(ConfError::MissingAttr {
                tag: "appender",
                attr: "prefix",
            })?;
        Ok(Self {
            logdir: expand_path(logdir),
            prefix: prefix.to_string(),
            policy: node.attr_non_empty("rollingpolicy").map(String::from),
            file: None,
            cur_size: 0,
        })
    }

    /// Name of the rolling policy this appender was configured with, if any.
    pub(crate) fn policy_name(&self) -> Option<&str> {
        self.policy.as_deref()
    }

    fn slot_path(&self, index: u32) -> PathBuf {
        self.logdir.join(format!("{}.{}", self.prefix, index))
    }

    pub(crate) fn open(&mut self) -> Result<(), AppenderError> {
        if self.file.is_some() {
            return Ok(());
        }
        fs::create_dir_all(&self.logdir)?;
        let path = self.slot_path(0);
        let file = OpenOptions::new().create(true).append(true).open(&path)?;
        self.cur_size = file.metadata()?.len();
        self.file = Some(file);
        Ok(())
    }

    pub(crate) fn append(&mut self, line: &str, params: SizeWin) -> Result<(), AppenderError> {
        if self.file.is_none() {
            return Err(AppenderError::NotOpen);
        }
        if self.cur_size + line.len() as u64 > params.maxsize && self.cur_size > 0 {
            self.rotate(params)?;
        }
        // rotate() replaces the handle; re-borrow after it.
        let file = self.file.as_mut().ok_or(AppenderError::NotOpen)?;
        file.write_all(line.as_bytes())?;
        file.flush()?;
        self.cur_size += line.len() as u64;
        Ok(())
    }

    fn rotate(&mut self, params: SizeWin) -> Result<(), AppenderError> {
        diag_debug!(
            "rotating '{}' at {} bytes (maxsize {})",
            self.slot_path(0).display(),
            self.cur_size,
            params.maxsize
        );
        self.file = None;

        let last = params.maxnum.saturating_sub(1);
        let oldest = self.slot_path(last);
        if oldest.exists() {
            fs::remove_file(&oldest)?;
        }
        for index in (0..last).rev() {
            let from = self.slot_path(index);
            if from.exists() {
                fs::rename(&from, self.slot_path(index + 1))?;
            }
        }

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(self.slot_path(0))?;
        self.cur_size = 0;
        self.file = Some(file);
        Ok(())
    }

    pub(crate) fn close(&mut self) -> Result<(), AppenderError> {
        if let Some(file) = self.file.take() {
            file.sync_all()?;
        }
        self.cur_size = 0;
        Ok(())
    }

    pub(crate) const fn is_open(&self) -> bool {
        self.file.is_some()
    }
}
