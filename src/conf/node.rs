use std::collections::HashMap;

/// One configuration element: a tag (`config`, `category`, `appender`,
/// `layout`, `rollingpolicy`), an optional instance name, and its
/// attributes.
///
/// The wiring layer only reads the attributes it knows about; everything
/// else is backend-specific and handed opaquely to that backend's
/// configuration step, so the core never needs per-backend attribute
/// knowledge.
#[derive(Debug, Clone)]
pub struct ConfNode {
    pub tag: String,
    pub name: Option<String>,
    pub attrs: HashMap<String, String>,
}

impl ConfNode {
    #[must_use]
    pub fn new(tag: impl Into<String>, name: Option<String>) -> Self {
        Self {
            tag: tag.into(),
            name,
            attrs: HashMap::new(),
        }
    }

    #[must_use]
    pub fn attr(&self, key: &str) -> Option<&str> {
        self.attrs.get(key).map(String::as_str)
    }

    #[must_use]
    pub fn attr_non_empty(&self, key: &str) -> Option<&str> {
        self.attr(key).filter(|v| !v.is_empty())
    }
}
