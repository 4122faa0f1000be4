//! Content-type declaration builder.
//!
//! Validates the slug at construction, accumulates option settings into a
//! typed record, and hands the finished record to the host platform
//! through [`Registrar::register_content_type`].

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::{BuilderError, EntityKind};
use crate::labels::Labels;
use crate::registrar::Registrar;
use crate::reserved;
use crate::rewrite::Rewrite;

/// Admin-menu placement: a plain on/off toggle, or nested under an
/// existing top-level menu path.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ShowInMenu {
    Toggle(bool),
    Parent(String),
}

impl From<bool> for ShowInMenu {
    fn from(toggle: bool) -> Self {
        ShowInMenu::Toggle(toggle)
    }
}

impl From<&str> for ShowInMenu {
    fn from(parent: &str) -> Self {
        ShowInMenu::Parent(parent.to_string())
    }
}

/// The configuration record handed to the host on registration.
///
/// Fields with documented defaults are always present; the rest are
/// absent from the serialized record until explicitly set.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentTypeArgs {
    pub label: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub labels: Option<Labels>,
    pub supports: Vec<String>,
    pub taxonomies: Vec<String>,
    pub hierarchical: bool,
    pub public: bool,
    pub show_ui: bool,
    pub show_in_menu: ShowInMenu,
    pub menu_position: i32,
    pub show_in_admin_bar: bool,
    pub show_in_nav_menus: bool,
    pub can_export: bool,
    pub has_archive: bool,
    pub exclude_from_search: bool,
    pub publicly_queryable: bool,
    pub query_var: bool,
    pub capability_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub menu_icon: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub capabilities: Option<HashMap<String, String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub map_meta_cap: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub show_in_rest: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rest_base: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rest_controller_class: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rewrite: Option<Rewrite>,
}

impl Default for ContentTypeArgs {
    fn default() -> Self {
        Self {
            label: String::new(),
            description: String::new(),
            labels: None,
            supports: vec!["title".to_string(), "editor".to_string()],
            taxonomies: Vec::new(),
            hierarchical: false,
            public: true,
            show_ui: true,
            show_in_menu: ShowInMenu::Toggle(true),
            menu_position: 5,
            show_in_admin_bar: true,
            show_in_nav_menus: true,
            can_export: true,
            has_archive: true,
            exclude_from_search: false,
            publicly_queryable: true,
            query_var: true,
            capability_type: "page".to_string(),
            menu_icon: None,
            capabilities: None,
            map_meta_cap: None,
            show_in_rest: None,
            rest_base: None,
            rest_controller_class: None,
            rewrite: None,
        }
    }
}

/// Fluent builder for a content-type declaration.
///
/// The slug is validated once, at construction, and is immutable
/// afterwards; only the configuration record mutates.
///
/// ```
/// use sagoma_sdk::{ContentType, Labels};
///
/// let labels = Labels::new().name("Book").description("Books catalog");
/// let book = ContentType::new("book", &labels)?
///     .hierarchical(false)
///     .has_archive(true);
/// # Ok::<(), sagoma_sdk::BuilderError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ContentType {
    slug: String,
    args: ContentTypeArgs,
}

impl ContentType {
    /// Create a builder for `slug`.
    ///
    /// Rejects slugs in [`reserved::RESERVED_CONTENT_TYPES`], then slugs
    /// longer than 20 bytes. The record's `label` and `description` are
    /// taken from `labels`; the labels mapping itself is not embedded
    /// until [`labels`](Self::labels) is called.
    pub fn new(slug: impl Into<String>, labels: &Labels) -> Result<Self, BuilderError> {
        let slug = slug.into();
        if reserved::is_reserved_content_type(&slug) {
            return Err(BuilderError::ReservedIdentifier {
                kind: EntityKind::ContentType,
                slug,
            });
        }
        let max = EntityKind::ContentType.max_slug_len();
        if slug.len() > max {
            return Err(BuilderError::IdentifierTooLong {
                kind: EntityKind::ContentType,
                slug,
                max,
            });
        }

        let args = ContentTypeArgs {
            label: labels.get_name().to_string(),
            description: labels.get_description(),
            ..ContentTypeArgs::default()
        };
        Ok(Self { slug, args })
    }

    /// The validated slug.
    pub fn slug(&self) -> &str {
        &self.slug
    }

    /// The accumulated record.
    pub fn args(&self) -> &ContentTypeArgs {
        &self.args
    }

    /// Embed the full labels mapping, replacing any previous one.
    ///
    /// The labels are copied out at this point; mutating the caller's
    /// value afterwards does not affect the embedded copy.
    pub fn labels(mut self, labels: &Labels) -> Self {
        self.args.labels = Some(labels.clone());
        self
    }

    /// Editing features the content type supports.
    pub fn supports(mut self, supports: &[&str]) -> Self {
        self.args.supports = supports.iter().map(|s| s.to_string()).collect();
        self
    }

    /// Taxonomies attached to this content type at registration.
    pub fn taxonomies(mut self, taxonomies: &[&str]) -> Self {
        self.args.taxonomies = taxonomies.iter().map(|s| s.to_string()).collect();
        self
    }

    pub fn hierarchical(mut self, hierarchical: bool) -> Self {
        self.args.hierarchical = hierarchical;
        self
    }

    pub fn public(mut self, public: bool) -> Self {
        self.args.public = public;
        self
    }

    pub fn show_ui(mut self, show_ui: bool) -> Self {
        self.args.show_ui = show_ui;
        self
    }

    /// Admin-menu placement; accepts a bool or a parent menu path.
    pub fn show_in_menu(mut self, show_in_menu: impl Into<ShowInMenu>) -> Self {
        self.args.show_in_menu = show_in_menu.into();
        self
    }

    pub fn menu_position(mut self, menu_position: i32) -> Self {
        self.args.menu_position = menu_position;
        self
    }

    pub fn menu_icon(mut self, menu_icon: impl Into<String>) -> Self {
        self.args.menu_icon = Some(menu_icon.into());
        self
    }

    pub fn query_var(mut self, query_var: bool) -> Self {
        self.args.query_var = query_var;
        self
    }

    pub fn show_in_admin_bar(mut self, show_in_admin_bar: bool) -> Self {
        self.args.show_in_admin_bar = show_in_admin_bar;
        self
    }

    pub fn show_in_nav_menus(mut self, show_in_nav_menus: bool) -> Self {
        self.args.show_in_nav_menus = show_in_nav_menus;
        self
    }

    pub fn can_export(mut self, can_export: bool) -> Self {
        self.args.can_export = can_export;
        self
    }

    pub fn has_archive(mut self, has_archive: bool) -> Self {
        self.args.has_archive = has_archive;
        self
    }

    pub fn exclude_from_search(mut self, exclude_from_search: bool) -> Self {
        self.args.exclude_from_search = exclude_from_search;
        self
    }

    pub fn publicly_queryable(mut self, publicly_queryable: bool) -> Self {
        self.args.publicly_queryable = publicly_queryable;
        self
    }

    /// Base capability name the host derives permissions from.
    pub fn capability_type(mut self, capability_type: impl Into<String>) -> Self {
        self.args.capability_type = capability_type.into();
        self
    }

    /// Explicit capability map, overriding the derived capabilities.
    pub fn capabilities(mut self, capabilities: &[(&str, &str)]) -> Self {
        self.args.capabilities = Some(
            capabilities
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        );
        self
    }

    /// Whether the host maps meta capabilities onto primitive ones.
    pub fn map_meta_cap(mut self, map_meta_cap: bool) -> Self {
        self.args.map_meta_cap = Some(map_meta_cap);
        self
    }

    pub fn show_in_rest(mut self, show_in_rest: bool) -> Self {
        self.args.show_in_rest = Some(show_in_rest);
        self
    }

    pub fn rest_base(mut self, rest_base: impl Into<String>) -> Self {
        self.args.rest_base = Some(rest_base.into());
        self
    }

    pub fn rest_controller_class(mut self, rest_controller_class: impl Into<String>) -> Self {
        self.args.rest_controller_class = Some(rest_controller_class.into());
        self
    }

    /// Embed a rewrite configuration (copied, not referenced).
    pub fn rewrite(mut self, rewrite: &Rewrite) -> Self {
        self.args.rewrite = Some(rewrite.clone());
        self
    }

    /// Hand the slug and the accumulated record to the host platform.
    ///
    /// Calls the registrar exactly once; a host failure propagates
    /// unchanged.
    pub fn register(&self, registrar: &mut dyn Registrar) -> anyhow::Result<()> {
        let args = serde_json::to_value(&self.args)?;
        registrar.register_content_type(&self.slug, args)?;
        info!(slug = %self.slug, "registered content type");
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use crate::reserved::RESERVED_CONTENT_TYPES;

    fn labels() -> Labels {
        Labels::new().name("Book").description("Books catalog")
    }

    #[test]
    fn every_reserved_slug_is_rejected() {
        for slug in RESERVED_CONTENT_TYPES {
            let err = ContentType::new(*slug, &labels()).unwrap_err();
            assert!(
                matches!(err, BuilderError::ReservedIdentifier { .. }),
                "expected '{slug}' to be rejected as reserved"
            );
        }
    }

    #[test]
    fn slug_length_boundary() {
        let ok = "a".repeat(20);
        assert!(ContentType::new(ok, &labels()).is_ok());

        let too_long = "a".repeat(21);
        let err = ContentType::new(too_long, &labels()).unwrap_err();
        assert!(matches!(
            err,
            BuilderError::IdentifierTooLong { max: 20, .. }
        ));
    }

    #[test]
    fn construction_seeds_documented_defaults() {
        let ct = ContentType::new("book", &labels()).unwrap();
        let args = ct.args();
        assert_eq!(ct.slug(), "book");
        assert_eq!(args.label, "Book");
        assert_eq!(args.description, "Books catalog");
        assert_eq!(args.supports, vec!["title", "editor"]);
        assert!(args.taxonomies.is_empty());
        assert!(!args.hierarchical);
        assert!(args.public);
        assert!(args.show_ui);
        assert_eq!(args.show_in_menu, ShowInMenu::Toggle(true));
        assert_eq!(args.menu_position, 5);
        assert!(args.show_in_admin_bar);
        assert!(args.show_in_nav_menus);
        assert!(args.can_export);
        assert!(args.has_archive);
        assert!(!args.exclude_from_search);
        assert!(args.publicly_queryable);
        assert!(args.query_var);
        assert_eq!(args.capability_type, "page");
        assert!(args.labels.is_none());
        assert!(args.rewrite.is_none());
    }

    #[test]
    fn description_defaults_to_empty_when_unset() {
        let ct = ContentType::new("book", &Labels::new().name("Book")).unwrap();
        assert_eq!(ct.args().description, "");
    }

    #[test]
    fn setter_order_does_not_matter_for_distinct_keys() {
        let a = ContentType::new("book", &labels())
            .unwrap()
            .public(true)
            .hierarchical(true);
        let b = ContentType::new("book", &labels())
            .unwrap()
            .hierarchical(true)
            .public(true);
        assert_eq!(
            serde_json::to_value(a.args()).unwrap(),
            serde_json::to_value(b.args()).unwrap()
        );
    }

    #[test]
    fn repeated_setter_keeps_last_value() {
        let ct = ContentType::new("book", &labels())
            .unwrap()
            .public(true)
            .public(false);
        assert!(!ct.args().public);
    }

    #[test]
    fn labels_are_copied_on_embed() {
        let original = labels().add_new("Add Book");
        let ct = ContentType::new("book", &labels()).unwrap().labels(&original);

        // Mutating the caller's value must not reach the embedded copy.
        let _mutated = original.add_new("Changed");
        let embedded = ct.args().labels.as_ref().unwrap();
        assert_eq!(embedded.add_new, "Add Book");
    }

    #[test]
    fn embedding_labels_again_fully_overwrites() {
        let first = labels().add_new("Add Book");
        let second = labels().add_new("New Book");
        let ct = ContentType::new("book", &labels())
            .unwrap()
            .labels(&first)
            .labels(&second);
        assert_eq!(ct.args().labels.as_ref().unwrap().add_new, "New Book");
    }

    #[test]
    fn rewrite_is_copied_on_embed() {
        let rewrite = Rewrite::new().slug("books");
        let ct = ContentType::new("book", &labels()).unwrap().rewrite(&rewrite);
        let serialized = serde_json::to_value(ct.args()).unwrap();
        assert_eq!(serialized["rewrite"]["slug"], "books");
        assert!(serialized["rewrite"].get("with_front").is_none());
    }

    #[test]
    fn show_in_menu_accepts_bool_or_parent_path() {
        let ct = ContentType::new("book", &labels())
            .unwrap()
            .show_in_menu("tools.php");
        let serialized = serde_json::to_value(ct.args()).unwrap();
        assert_eq!(serialized["show_in_menu"], "tools.php");

        let ct = ContentType::new("book", &labels())
            .unwrap()
            .show_in_menu(false);
        let serialized = serde_json::to_value(ct.args()).unwrap();
        assert_eq!(serialized["show_in_menu"], false);
    }

    #[test]
    fn optional_keys_absent_until_set() {
        let ct = ContentType::new("book", &labels()).unwrap();
        let serialized = serde_json::to_value(ct.args()).unwrap();
        for key in [
            "labels",
            "menu_icon",
            "capabilities",
            "map_meta_cap",
            "show_in_rest",
            "rest_base",
            "rest_controller_class",
            "rewrite",
        ] {
            assert!(
                serialized.get(key).is_none(),
                "expected '{key}' to be absent until set"
            );
        }
    }
}
