//! Configuration wiring: turns parsed configuration elements into live
//! registry instances.
//!
//! Loading is additive. Elements are applied in file order, each one
//! get-or-creates its named instance and overwrites only the attributes it
//! carries, so a reread merges onto the existing state instead of resetting
//! it. A malformed element is reported on the diagnostic channel and
//! skipped; the rest of the file still loads.

use std::path::Path;

use crate::appender::{Appender, AppenderKind};
use crate::conf::{parse_file, ConfError, ConfNode};
use crate::context::LoggingContext;
use crate::diag;
use crate::diag_error;
use crate::layout::{Layout, LayoutKind};
use crate::priority::Priority;
use crate::rollingpolicy::RollingPolicy;

/// Global runtime settings from the `[config]` element.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RcConfig {
    /// Skip appender close and registry teardown at shutdown.
    pub nocleanup: bool,
    /// Message and layout buffer cap in bytes; 0 means unbounded.
    pub bufsize: usize,
    /// Diagnostic channel level.
    pub debug: u32,
    /// Whether the configuration sources are monitored for changes.
    pub reread: bool,
    /// Minimum seconds between change checks.
    pub reread_interval: u64,
}

impl Default for RcConfig {
    fn default() -> Self {
        Self {
            nocleanup: false,
            bufsize: 0,
            debug: 0,
            reread: true,
            reread_interval: 0,
        }
    }
}

/// Parses a byte-size literal: a bare number of bytes, or a number with a
/// `KB`, `MB` or `GB` suffix (case-insensitive, optional space).
#[must_use]
pub fn parse_byte_size(value: &str) -> Option<u64> {
    let v = value.trim();
    let upper = v.to_ascii_uppercase();
    let (digits, mult) = if let Some(n) = upper.strip_suffix("KB") {
        (n, 1024)
    } else if let Some(n) = upper.strip_suffix("MB") {
        (n, 1024 * 1024)
    } else if let Some(n) = upper.strip_suffix("GB") {
        (n, 1024 * 1024 * 1024)
    } else {
        (upper.as_str(), 1)
    };
    let base: u64 = digits.trim().parse().ok()?;
    base.checked_mul(mult)
}

/// Loads a configuration file into the context.
///
/// Returns an error only for file-level problems (unreadable file, syntax
/// error); element-level problems are reported and skipped.
pub fn load(ctx: &LoggingContext, path: &Path) -> Result<(), ConfError> {
    let nodes = parse_file(path)?;
    load_nodes(ctx, &nodes);
    Ok(())
}

/// Applies parsed elements to the context, one at a time, in order.
pub fn load_nodes(ctx: &LoggingContext, nodes: &[ConfNode]) {
    for node in nodes {
        let applied = match node.tag.as_str() {
            "config" => config_load(ctx, node),
            "category" => category_load(ctx, node),
            "appender" => appender_load(ctx, node),
            "layout" => layout_load(ctx, node),
            "rollingpolicy" => rollingpolicy_load(ctx, node),
            other => {
                diag_error!("ignoring unknown configuration element [{other}]");
                continue;
            }
        };
        if let Err(e) = applied {
            diag_error!(
                "skipping [{} {}]: {e}",
                node.tag,
                node.name.as_deref().unwrap_or("?")
            );
        }
    }
}

fn element_name(node: &ConfNode, tag: &'static str) -> Result<String, ConfError> {
    node.name
        .as_deref()
        .filter(|n| !n.is_empty())
        .map(String::from)
        .ok_or(ConfError::MissingAttr { tag, attr: "name" })
}

fn parse_bool(attr: &'static str, value: &str) -> Result<bool, ConfError> {
    match value {
        "true" | "1" => Ok(true),
        "false" | "0" => Ok(false),
        other => Err(ConfError::BadValue {
            attr,
            value: other.to_string(),
        }),
    }
}

fn config_load(ctx: &LoggingContext, node: &ConfNode) -> Result<(), ConfError> {
    let mut rc = ctx.rc_mut();
    if let Some(v) = node.attr("nocleanup") {
        rc.nocleanup = parse_bool("nocleanup", v)?;
    }
    if let Some(v) = node.attr("bufsize") {
        // Unparseable falls back to 0, which selects dynamic buffers.
        rc.bufsize = usize::try_from(parse_byte_size(v).unwrap_or(0)).unwrap_or(0);
    }
    if let Some(v) = node.attr("debug") {
        let level: u32 = v.parse().map_err(|_| ConfError::BadValue {
            attr: "debug",
            value: v.to_string(),
        })?;
        rc.debug = level;
        diag::set_debug_level(level);
    }
    if let Some(v) = node.attr("reread") {
        rc.reread = parse_bool("reread", v)?;
    }
    if let Some(v) = node.attr("reread_interval") {
        rc.reread_interval = v.parse().map_err(|_| ConfError::BadValue {
            attr: "reread_interval",
            value: v.to_string(),
        })?;
    }
    Ok(())
}

fn category_load(ctx: &LoggingContext, node: &ConfNode) -> Result<(), ConfError> {
    let name = element_name(node, "category")?;
    let Some(cat) = ctx.categories().get(&name) else {
        return Err(ConfError::MissingAttr {
            tag: "category",
            attr: "name",
        });
    };
    if let Some(v) = node.attr("priority") {
        cat.set_priority(Priority::from_name(v));
    }
    if let Some(v) = node.attr("additivity") {
        cat.set_additivity(parse_bool("additivity", v)?);
    }
    if let Some(v) = node.attr_non_empty("appender") {
        // A dangling appender name is fine; lookup at dispatch time.
        cat.set_appender(Some(v.to_string()));
    }
    Ok(())
}

fn appender_load(ctx: &LoggingContext, node: &ConfNode) -> Result<(), ConfError> {
    let name = element_name(node, "appender")?;
    let Some(app) = ctx
        .appenders()
        .get_or_create(&name, |n| Appender::new(n))
    else {
        return Err(ConfError::MissingAttr {
            tag: "appender",
            attr: "name",
        });
    };
    if let Some(v) = node.attr("type") {
        let kind = AppenderKind::from_name(v).ok_or_else(|| ConfError::UnknownType {
            what: "appender",
            name: v.to_string(),
        })?;
        app.configure(ctx, kind, node)?;
    }
    if let Some(v) = node.attr_non_empty("layout") {
        app.set_layout(Some(v.to_string()));
    }
    Ok(())
}

fn layout_load(ctx: &LoggingContext, node: &ConfNode) -> Result<(), ConfError> {
    let name = element_name(node, "layout")?;
    let Some(layout) = ctx.layouts().get_or_create(&name, |n| Layout::new(n)) else {
        return Err(ConfError::MissingAttr {
            tag: "layout",
            attr: "name",
        });
    };
    if let Some(v) = node.attr("type") {
        let kind = LayoutKind::from_name(v).ok_or_else(|| ConfError::UnknownType {
            what: "layout",
            name: v.to_string(),
        })?;
        layout.set_kind(kind);
    }
    Ok(())
}

fn rollingpolicy_load(ctx: &LoggingContext, node: &ConfNode) -> Result<(), ConfError> {
    let name = element_name(node, "rollingpolicy")?;
    if let Some(v) = node.attr("type") {
        if v != "sizewin" {
            return Err(ConfError::UnknownType {
                what: "rollingpolicy",
                name: v.to_string(),
            });
        }
    }
    let Some(policy) = ctx
        .rolling_policies()
        .get_or_create(&name, |n| RollingPolicy::new(n))
    else {
        return Err(ConfError::MissingAttr {
            tag: "rollingpolicy",
            attr: "name",
        });
    };
    if let Some(v) = node.attr("maxsize") {
        let size = parse_byte_size(v).ok_or_else(|| ConfError::BadValue {
            attr: "maxsize",
            value: v.to_string(),
        })?;
        policy.set_maxsize(size);
    }
    if let Some(v) = node.attr("maxnum") {
        let num: u32 = v.parse().map_err(|_| ConfError::BadValue {
            attr: "maxnum",
            value: v.to_string(),
        })?;
        policy.set_maxnum(num);
    }
    Ok(())
}
