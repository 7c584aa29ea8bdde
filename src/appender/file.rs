use std::fs::File;
use std::io::Write;
use std::path::PathBuf;

use crate::appender::{AppenderError, expand_path};
use crate::conf::{ConfError, ConfNode};

/// Longest accepted `path` attribute, matching the usual OS path limit.
const PATH_MAX: usize = 4096;

/// Plain file sink. The file is truncated on open and every line is flushed
/// immediately so a crash loses nothing.
#[derive(Debug)]
pub struct FileBackend {
    path: PathBuf,
    file: Option<File>,
}

impl FileBackend {
    pub(crate) fn from_node(node: &ConfNode) -> Result<Self, ConfError> {
        let path = node.attr_non_empty("path").ok_or(ConfError::MissingAttr {
            tag: "appender",
            attr: "path",
        })?;
        if path.len() >= PATH_MAX {
            return Err(ConfError::BadValue {
                attr: "path",
                value: format!("{} bytes long", path.len()),
            });
        }
        Ok(Self {
            path: expand_path(path),
            file: None,
        })
    }

    /// Opening when already open leaves the live handle untouched.
    pub(crate) fn open(&mut self) -> Result<(), AppenderError> {
        if self.file.is_none() {
            self.file = Some(File::create(&self.path)?);
        }
        Ok(())
    }

    pub(crate) fn append(&mut self, line: &str) -> Result<(), AppenderError> {
        let file = self.file.as_mut().ok_or(AppenderError::NotOpen)?;
        file.write_all(line.as_bytes())?;
        file.flush()?;
        Ok(())
    }

    pub(crate) fn close(&mut self) -> Result<(), AppenderError> {
        if let Some(file) = self.file.take() {
            file.sync_all()?;
        }
        Ok(())
    }

    pub(crate) const fn is_open(&self) -> bool {
        self.file.is_some()
    }

    pub(crate) fn path(&self) -> &std::path::Path {
        &self.path
    }
}
