//! ANSI color console sink.
//!
//! Colors logging output per category. Colors are handed out in the order
//! categories are first seen; once the palette of well-readable colors is
//! exhausted, further categories stay uncolored. The `root` and `global`
//! category names are pinned to the default (no-color) escape.

use std::collections::HashMap;

use crate::appender::AppenderError;
use crate::appender::stream::StreamTarget;
use crate::conf::{ConfError, ConfNode};

/// The "good" colors of the average ANSI terminal, in hand-out order.
const GOOD_COLORS: [&str; 11] = [
    "\x1b[1;33m", // yellow
    "\x1b[1;36m", // light cyan
    "\x1b[1;31m", // light red
    "\x1b[1;35m", // light purple
    "\x1b[1;32m", // light green
    "\x1b[1;34m", // light blue
    "\x1b[0;32m", // green
    "\x1b[0;36m", // cyan
    "\x1b[0;31m", // red
    "\x1b[0;35m", // purple
    "\x1b[0;33m", // brown
];

/// Default escape: no color. Also doubles as the reset sequence.
const DEFAULT_COLOR: &str = "\x1b[0m";

/// Open-state color bookkeeping; created by `open`, dropped by `close`.
#[derive(Debug)]
struct ColorState {
    assigned: HashMap<String, &'static str>,
    next: usize,
}

impl ColorState {
    fn new() -> Self {
        let mut assigned = HashMap::new();
        assigned.insert("root".to_string(), DEFAULT_COLOR);
        assigned.insert("global".to_string(), DEFAULT_COLOR);
        Self { assigned, next: 0 }
    }

    fn color_for(&mut self, category: &str) -> &'static str {
        if let Some(color) = self.assigned.get(category) {
            return color;
        }
        let color = if self.next < GOOD_COLORS.len() {
            let c = GOOD_COLORS[self.next];
            self.next += 1;
            c
        } else {
            DEFAULT_COLOR
        };
        self.assigned.insert(category.to_string(), color);
        color
    }
}

#[derive(Debug)]
pub struct AnsiColorBackend {
    target: StreamTarget,
    colors: Option<ColorState>,
}

impl AnsiColorBackend {
    pub(crate) fn from_node(node: &ConfNode) -> Result<Self, ConfError> {
        Ok(Self {
            target: StreamTarget::from_node(node)?,
            colors: None,
        })
    }

    pub(crate) fn open(&mut self) -> Result<(), AppenderError> {
        if self.colors.is_none() {
            self.colors = Some(ColorState::new());
        }
        Ok(())
    }

    /// Writes color + line-without-terminator + reset + `\n` in a single
    /// call, so output interleaved from other writers on the same stream is
    /// never left colorized.
    pub(crate) fn append(&mut self, category: &str, line: &str) -> Result<(), AppenderError> {
        let colors = self.colors.as_mut().ok_or(AppenderError::NotOpen)?;
        let color = colors.color_for(category);
        let body = line.strip_suffix('\n').unwrap_or(line);
        let out = format!("{color}{body}{DEFAULT_COLOR}\n");
        self.target.write_all(out.as_bytes())?;
        Ok(())
    }

    pub(crate) fn close(&mut self) -> Result<(), AppenderError> {
        self.colors = None;
        Ok(())
    }

    pub(crate) const fn is_open(&self) -> bool {
        self.colors.is_some()
    }

    pub(crate) const fn target_name(&self) -> &'static str {
        self.target.name()
    }
}
