//! URL-rewrite configuration for declared entities.
//!
//! Every setting is optional and absent until explicitly set; the host
//! platform fills in its own defaults for anything missing.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// URL-rewrite settings embedded into a content-type or taxonomy record.
///
/// ```
/// use sagoma_sdk::Rewrite;
///
/// let rewrite = Rewrite::new().slug("books").with_front(false);
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Rewrite {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub with_front: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub feeds: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pages: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ep_mask: Option<String>,
}

impl Rewrite {
    /// Create an empty rewrite configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Base path used in rewritten URLs.
    pub fn slug(mut self, slug: impl Into<String>) -> Self {
        self.slug = Some(slug.into());
        self
    }

    /// Whether URLs are prepended with the front base.
    pub fn with_front(mut self, with_front: bool) -> Self {
        self.with_front = Some(with_front);
        self
    }

    /// Whether feed URLs are generated.
    pub fn feeds(mut self, feeds: bool) -> Self {
        self.feeds = Some(feeds);
        self
    }

    /// Whether paginated URLs are generated.
    pub fn pages(mut self, pages: bool) -> Self {
        self.pages = Some(pages);
        self
    }

    /// Endpoint mask applied to the rewritten routes.
    pub fn ep_mask(mut self, ep_mask: impl Into<String>) -> Self {
        self.ep_mask = Some(ep_mask.into());
        self
    }

    /// The accumulated mapping; only explicitly set keys are present.
    pub fn to_value(&self) -> Value {
        let mut map = serde_json::Map::new();
        if let Some(slug) = &self.slug {
            map.insert("slug".to_string(), slug.clone().into());
        }
        if let Some(with_front) = self.with_front {
            map.insert("with_front".to_string(), with_front.into());
        }
        if let Some(feeds) = self.feeds {
            map.insert("feeds".to_string(), feeds.into());
        }
        if let Some(pages) = self.pages {
            map.insert("pages".to_string(), pages.into());
        }
        if let Some(ep_mask) = &self.ep_mask {
            map.insert("ep_mask".to_string(), ep_mask.clone().into());
        }
        Value::Object(map)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn empty_by_default() {
        let value = Rewrite::new().to_value();
        assert_eq!(value.as_object().unwrap().len(), 0);
    }

    #[test]
    fn only_set_keys_are_present() {
        let value = Rewrite::new().slug("books").with_front(false).to_value();
        let map = value.as_object().unwrap();
        assert_eq!(map.len(), 2);
        assert_eq!(map["slug"], "books");
        assert_eq!(map["with_front"], false);
        assert!(!map.contains_key("feeds"));
        assert!(!map.contains_key("pages"));
        assert!(!map.contains_key("ep_mask"));
    }

    #[test]
    fn repeated_set_keeps_last_value() {
        let rewrite = Rewrite::new().feeds(true).feeds(false);
        assert_eq!(rewrite.feeds, Some(false));
    }
}
