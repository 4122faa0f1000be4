//! Taxonomy declaration builder.
//!
//! Mirrors the content-type builder: slug validation at construction, a
//! typed record accumulated through fluent setters, and a single
//! [`Registrar::register_taxonomy`] call — with the taxonomy additionally
//! bound to one or more content-type slugs.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::content_type::ShowInMenu;
use crate::error::{BuilderError, EntityKind};
use crate::labels::Labels;
use crate::registrar::Registrar;
use crate::reserved;
use crate::rewrite::Rewrite;

/// A callback-valued taxonomy option: the name of a host-side callback,
/// or `false` to disable the behavior outright.
///
/// Callables cannot cross the serialized host boundary, so the host is
/// handed the callback's registered name instead.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum HostCallback {
    Named(String),
    Toggle(bool),
}

impl From<&str> for HostCallback {
    fn from(name: &str) -> Self {
        HostCallback::Named(name.to_string())
    }
}

impl From<bool> for HostCallback {
    fn from(toggle: bool) -> Self {
        HostCallback::Toggle(toggle)
    }
}

/// Term pre-created for the taxonomy at registration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DefaultTerm {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl DefaultTerm {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            slug: None,
            description: None,
        }
    }

    pub fn slug(mut self, slug: impl Into<String>) -> Self {
        self.slug = Some(slug.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// The configuration record handed to the host on registration.
///
/// Only taxonomy-meaningful defaults are seeded; content-type-only keys
/// such as `menu_position` or `supports` do not exist on this record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaxonomyArgs {
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub labels: Option<Labels>,
    pub hierarchical: bool,
    pub public: bool,
    pub show_ui: bool,
    pub show_in_menu: ShowInMenu,
    pub show_in_nav_menus: bool,
    pub publicly_queryable: bool,
    pub query_var: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub show_in_rest: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rest_base: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rest_controller_class: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub show_tagcloud: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub show_in_quick_edit: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub show_admin_column: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta_box_cb: Option<HostCallback>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta_box_sanitize_cb: Option<HostCallback>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub capabilities: Option<HashMap<String, String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rewrite: Option<Rewrite>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub update_count_callback: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_term: Option<DefaultTerm>,
}

impl Default for TaxonomyArgs {
    fn default() -> Self {
        Self {
            description: String::new(),
            labels: None,
            hierarchical: false,
            public: true,
            show_ui: true,
            show_in_menu: ShowInMenu::Toggle(true),
            show_in_nav_menus: true,
            publicly_queryable: true,
            query_var: true,
            show_in_rest: None,
            rest_base: None,
            rest_controller_class: None,
            show_tagcloud: None,
            show_in_quick_edit: None,
            show_admin_column: None,
            meta_box_cb: None,
            meta_box_sanitize_cb: None,
            capabilities: None,
            rewrite: None,
            update_count_callback: None,
            default_term: None,
        }
    }
}

/// Fluent builder for a taxonomy declaration.
///
/// The slug and the content-type association are fixed at construction;
/// only the configuration record mutates.
///
/// ```
/// use sagoma_sdk::{Labels, Taxonomy};
///
/// let labels = Labels::new().name("Genres").description("Genres");
/// let genre = Taxonomy::new("genre", &["book"], &labels)?.hierarchical(true);
/// # Ok::<(), sagoma_sdk::BuilderError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Taxonomy {
    slug: String,
    object_types: Vec<String>,
    args: TaxonomyArgs,
}

impl Taxonomy {
    /// Create a builder for `slug`, attached to `object_types`.
    ///
    /// Rejects slugs in [`reserved::RESERVED_TAXONOMIES`], then slugs
    /// longer than 32 bytes. The labels mapping is embedded immediately
    /// and `description` is taken from it.
    pub fn new(
        slug: impl Into<String>,
        object_types: &[&str],
        labels: &Labels,
    ) -> Result<Self, BuilderError> {
        let slug = slug.into();
        if reserved::is_reserved_taxonomy(&slug) {
            return Err(BuilderError::ReservedIdentifier {
                kind: EntityKind::Taxonomy,
                slug,
            });
        }
        let max = EntityKind::Taxonomy.max_slug_len();
        if slug.len() > max {
            return Err(BuilderError::IdentifierTooLong {
                kind: EntityKind::Taxonomy,
                slug,
                max,
            });
        }

        let args = TaxonomyArgs {
            description: labels.get_description(),
            labels: Some(labels.clone()),
            ..TaxonomyArgs::default()
        };
        Ok(Self {
            slug,
            object_types: object_types.iter().map(|s| s.to_string()).collect(),
            args,
        })
    }

    /// The validated slug.
    pub fn slug(&self) -> &str {
        &self.slug
    }

    /// Content-type slugs this taxonomy is attached to.
    pub fn object_types(&self) -> &[String] {
        &self.object_types
    }

    /// The accumulated record.
    pub fn args(&self) -> &TaxonomyArgs {
        &self.args
    }

    /// Replace the embedded labels mapping.
    pub fn labels(mut self, labels: &Labels) -> Self {
        self.args.labels = Some(labels.clone());
        self
    }

    pub fn public(mut self, public: bool) -> Self {
        self.args.public = public;
        self
    }

    pub fn publicly_queryable(mut self, publicly_queryable: bool) -> Self {
        self.args.publicly_queryable = publicly_queryable;
        self
    }

    pub fn hierarchical(mut self, hierarchical: bool) -> Self {
        self.args.hierarchical = hierarchical;
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

    pub fn show_in_nav_menus(mut self, show_in_nav_menus: bool) -> Self {
        self.args.show_in_nav_menus = show_in_nav_menus;
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

    pub fn show_tagcloud(mut self, show_tagcloud: bool) -> Self {
        self.args.show_tagcloud = Some(show_tagcloud);
        self
    }

    pub fn show_in_quick_edit(mut self, show_in_quick_edit: bool) -> Self {
        self.args.show_in_quick_edit = Some(show_in_quick_edit);
        self
    }

    pub fn show_admin_column(mut self, show_admin_column: bool) -> Self {
        self.args.show_admin_column = Some(show_admin_column);
        self
    }

    /// Meta-box display callback; `false` disables the meta box.
    pub fn meta_box_cb(mut self, meta_box_cb: impl Into<HostCallback>) -> Self {
        self.args.meta_box_cb = Some(meta_box_cb.into());
        self
    }

    /// Sanitization callback for data saved from the meta box.
    pub fn meta_box_sanitize_cb(mut self, meta_box_sanitize_cb: impl Into<HostCallback>) -> Self {
        self.args.meta_box_sanitize_cb = Some(meta_box_sanitize_cb.into());
        self
    }

    /// Explicit capability map for managing terms.
    pub fn capabilities(mut self, capabilities: &[(&str, &str)]) -> Self {
        self.args.capabilities = Some(
            capabilities
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        );
        self
    }

    /// Embed a rewrite configuration (copied, not referenced).
    pub fn rewrite(mut self, rewrite: &Rewrite) -> Self {
        self.args.rewrite = Some(rewrite.clone());
        self
    }

    pub fn query_var(mut self, query_var: bool) -> Self {
        self.args.query_var = query_var;
        self
    }

    /// Host-side callback invoked when the term count updates.
    pub fn update_count_callback(mut self, update_count_callback: impl Into<String>) -> Self {
        self.args.update_count_callback = Some(update_count_callback.into());
        self
    }

    /// Term pre-created for the taxonomy at registration.
    pub fn default_term(mut self, default_term: DefaultTerm) -> Self {
        self.args.default_term = Some(default_term);
        self
    }

    /// Hand the slug, the content-type association, and the accumulated
    /// record to the host platform.
    ///
    /// Calls the registrar exactly once; a host failure propagates
    /// unchanged.
    pub fn register(&self, registrar: &mut dyn Registrar) -> anyhow::Result<()> {
        let args = serde_json::to_value(&self.args)?;
        registrar.register_taxonomy(&self.slug, &self.object_types, args)?;
        info!(slug = %self.slug, object_types = ?self.object_types, "registered taxonomy");
        Ok(())
    }
}
