//! Line parser for the INI-style configuration dialect.
//!
//! ```text
//! # comment
//! [config]
//! bufsize = 2KB
//!
//! [category svc.sub]
//! priority = warn
//! appender = "logfile"
//!
//! [appender logfile]
//! type = file
//! path = /tmp/svc.log
//! layout = dated
//! ```
//!
//! Section headers open an element (`[tag]` or `[tag name]`), `key = value`
//! lines attach attributes to the current element. Values may be quoted;
//! quotes are stripped. Lines without `=` outside a header are ignored.

use std::fs;
use std::path::Path;

use crate::conf::{ConfError, ConfNode};

/// Parses a configuration file into an ordered element list.
pub fn parse_file(path: &Path) -> Result<Vec<ConfNode>, ConfError> {
    let content = fs::read_to_string(path)?;
    parse_str(&content)
}

/// Parses configuration text into an ordered element list.
pub fn parse_str(content: &str) -> Result<Vec<ConfNode>, ConfError> {
    let mut nodes: Vec<ConfNode> = Vec::new();

    for (idx, raw) in content.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        if line.starts_with('[') {
            if !line.ends_with(']') {
                return Err(ConfError::Syntax {
                    line: idx + 1,
                    text: raw.to_string(),
                });
            }
            let header = line[1..line.len() - 1].trim();
            if header.is_empty() {
                return Err(ConfError::Syntax {
                    line: idx + 1,
                    text: raw.to_string(),
                });
            }
            let (tag, name) = match header.split_once(char::is_whitespace) {
                Some((tag, rest)) => (tag, Some(rest.trim().to_string())),
                None => (header, None),
            };
            nodes.push(ConfNode::new(tag, name));
            continue;
        }

        if let Some(pos) = line.find('=') {
            let key = line[..pos].trim().to_string();
            let value = line[pos + 1..].trim().trim_matches('"').to_string();
            if let Some(node) = nodes.last_mut() {
                node.attrs.insert(key, value);
            } else {
                return Err(ConfError::Syntax {
                    line: idx + 1,
                    text: raw.to_string(),
                });
            }
        }
    }

    Ok(nodes)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used)]
    use super::*;

    #[test]
    fn parses_sections_with_and_without_names() {
        let nodes = parse_str(
            "# header comment\n\
             [config]\n\
             bufsize = 1KB\n\
             \n\
             [category svc.sub]\n\
             priority = warn\n\
             appender = \"logfile\"\n",
        )
        .unwrap();

        assert_eq!(nodes.len(), 2);
        assert_eq!(nodes[0].tag, "config");
        assert!(nodes[0].name.is_none());
        assert_eq!(nodes[0].attr("bufsize"), Some("1KB"));

        assert_eq!(nodes[1].tag, "category");
        assert_eq!(nodes[1].name.as_deref(), Some("svc.sub"));
        assert_eq!(nodes[1].attr("priority"), Some("warn"));
        // Quotes stripped.
        assert_eq!(nodes[1].attr("appender"), Some("logfile"));
    }

    #[test]
    fn element_order_is_preserved() {
        let nodes = parse_str("[layout l1]\n[appender a1]\n[layout l2]\n").unwrap();
        let tags: Vec<&str> = nodes.iter().map(|n| n.tag.as_str()).collect();
        assert_eq!(tags, vec!["layout", "appender", "layout"]);
    }

    #[test]
    fn unterminated_header_is_a_syntax_error() {
        let err = parse_str("[appender a1\n").unwrap_err();
        assert!(matches!(err, ConfError::Syntax { line: 1, .. }));
    }

    #[test]
    fn attribute_before_any_section_is_a_syntax_error() {
        let err = parse_str("key = value\n").unwrap_err();
        assert!(matches!(err, ConfError::Syntax { .. }));
    }

    #[test]
    fn junk_lines_inside_a_section_are_ignored() {
        let nodes = parse_str("[config]\nthis is not an attribute\n").unwrap();
        assert!(nodes[0].attrs.is_empty());
    }
}
