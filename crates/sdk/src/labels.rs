//! Label configuration for content-type and taxonomy declarations.
//!
//! The host platform shows these strings throughout its admin interface.
//! All thirteen label fields are seeded with placeholder defaults at
//! construction; `description` is separate, has no default, and is the one
//! field (besides `name`) the owning builder reads back directly.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::locale::{Passthrough, TEXT_DOMAIN, Translator};

/// Admin-interface labels for a declared content type or taxonomy.
///
/// Fluent setters consume and return the value, so a full set of labels
/// chains from the constructor:
///
/// ```
/// use sagoma_sdk::Labels;
///
/// let labels = Labels::new()
///     .name("Books")
///     .singular_name("Book")
///     .add_new("Add Book")
///     .description("Books catalog");
/// ```
///
/// Builders copy the labels out when they embed them; mutating the
/// original afterwards never affects an already-embedded copy.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Labels {
    pub name: String,
    pub singular_name: String,
    pub menu_name: String,
    pub parent_item_colon: String,
    pub all_items: String,
    pub view_item: String,
    pub add_new_item: String,
    pub add_new: String,
    pub edit_item: String,
    pub update_item: String,
    pub search_items: String,
    pub not_found: String,
    pub not_found_in_trash: String,
    /// Not one of the thirteen label keys; no default.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Default for Labels {
    fn default() -> Self {
        Self::new()
    }
}

impl Labels {
    /// Create labels with untranslated placeholder defaults.
    pub fn new() -> Self {
        Self::with_translator(&Passthrough)
    }

    /// Create labels with placeholder defaults run through a translator.
    pub fn with_translator(translator: &dyn Translator) -> Self {
        let t = |text: &str, context: Option<&str>| translator.translate(text, context, TEXT_DOMAIN);
        Self {
            name: t("Post Type Name", Some("Post Type General Name")),
            singular_name: t("Post Type Name", Some("Post Type Singular Name")),
            menu_name: t("Post Type Name", None),
            parent_item_colon: t("Parent Item:", None),
            all_items: t("All Items", None),
            view_item: t("View Item", None),
            add_new_item: t("Add New Item", None),
            add_new: t("Add New", None),
            edit_item: t("Edit Item", None),
            update_item: t("Update Item", None),
            search_items: t("Search Item", None),
            not_found: t("Not found", None),
            not_found_in_trash: t("Not found in Trash", None),
            description: None,
        }
    }

    /// General (plural) display name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Singular display name.
    pub fn singular_name(mut self, singular_name: impl Into<String>) -> Self {
        self.singular_name = singular_name.into();
        self
    }

    /// Name shown in the admin menu.
    pub fn menu_name(mut self, menu_name: impl Into<String>) -> Self {
        self.menu_name = menu_name.into();
        self
    }

    /// Prefix shown before a parent item in hierarchical listings.
    pub fn parent_item_colon(mut self, parent_item_colon: impl Into<String>) -> Self {
        self.parent_item_colon = parent_item_colon.into();
        self
    }

    pub fn all_items(mut self, all_items: impl Into<String>) -> Self {
        self.all_items = all_items.into();
        self
    }

    pub fn view_item(mut self, view_item: impl Into<String>) -> Self {
        self.view_item = view_item.into();
        self
    }

    pub fn add_new_item(mut self, add_new_item: impl Into<String>) -> Self {
        self.add_new_item = add_new_item.into();
        self
    }

    pub fn add_new(mut self, add_new: impl Into<String>) -> Self {
        self.add_new = add_new.into();
        self
    }

    pub fn edit_item(mut self, edit_item: impl Into<String>) -> Self {
        self.edit_item = edit_item.into();
        self
    }

    pub fn update_item(mut self, update_item: impl Into<String>) -> Self {
        self.update_item = update_item.into();
        self
    }

    pub fn search_items(mut self, search_items: impl Into<String>) -> Self {
        self.search_items = search_items.into();
        self
    }

    pub fn not_found(mut self, not_found: impl Into<String>) -> Self {
        self.not_found = not_found.into();
        self
    }

    pub fn not_found_in_trash(mut self, not_found_in_trash: impl Into<String>) -> Self {
        self.not_found_in_trash = not_found_in_trash.into();
        self
    }

    /// Short descriptive summary of what the declared entity is for.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// The display name the owning builder uses for the record's label.
    pub fn get_name(&self) -> &str {
        &self.name
    }

    /// The description the owning builder assembles into its record.
    ///
    /// Empty when no description was set.
    pub fn get_description(&self) -> String {
        self.description.clone().unwrap_or_default()
    }

    /// The full label mapping, with `description` present only when set.
    pub fn to_value(&self) -> Value {
        let mut map = serde_json::Map::new();
        map.insert("name".to_string(), self.name.clone().into());
        map.insert("singular_name".to_string(), self.singular_name.clone().into());
        map.insert("menu_name".to_string(), self.menu_name.clone().into());
        map.insert(
            "parent_item_colon".to_string(),
            self.parent_item_colon.clone().into(),
        );
        map.insert("all_items".to_string(), self.all_items.clone().into());
        map.insert("view_item".to_string(), self.view_item.clone().into());
        map.insert("add_new_item".to_string(), self.add_new_item.clone().into());
        map.insert("add_new".to_string(), self.add_new.clone().into());
        map.insert("edit_item".to_string(), self.edit_item.clone().into());
        map.insert("update_item".to_string(), self.update_item.clone().into());
        map.insert("search_items".to_string(), self.search_items.clone().into());
        map.insert("not_found".to_string(), self.not_found.clone().into());
        map.insert(
            "not_found_in_trash".to_string(),
            self.not_found_in_trash.clone().into(),
        );
        if let Some(description) = &self.description {
            map.insert("description".to_string(), description.clone().into());
        }
        Value::Object(map)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn defaults_populate_all_thirteen_keys() {
        let labels = Labels::new();
        let value = labels.to_value();
        let map = value.as_object().unwrap();
        assert_eq!(map.len(), 13);
        assert_eq!(map["name"], "Post Type Name");
        assert_eq!(map["search_items"], "Search Item");
        assert_eq!(map["not_found_in_trash"], "Not found in Trash");
        assert!(!map.contains_key("description"));
    }

    #[test]
    fn setters_chain_and_overwrite() {
        let labels = Labels::new()
            .name("Books")
            .singular_name("Book")
            .menu_name("Books")
            .add_new("Add Book")
            .not_found("No books found");
        assert_eq!(labels.get_name(), "Books");
        assert_eq!(labels.to_value()["add_new"], "Add Book");
        assert_eq!(labels.to_value()["not_found"], "No books found");
    }

    #[test]
    fn description_absent_until_set() {
        let labels = Labels::new();
        assert_eq!(labels.get_description(), "");

        let labels = labels.description("Books catalog");
        assert_eq!(labels.get_description(), "Books catalog");
        assert_eq!(labels.to_value()["description"], "Books catalog");
    }

    #[test]
    fn defaults_run_through_the_translator() {
        struct Upper;
        impl Translator for Upper {
            fn translate(&self, text: &str, _context: Option<&str>, domain: &str) -> String {
                assert_eq!(domain, TEXT_DOMAIN);
                text.to_uppercase()
            }
        }

        let labels = Labels::with_translator(&Upper);
        assert_eq!(labels.get_name(), "POST TYPE NAME");
        assert_eq!(labels.to_value()["add_new"], "ADD NEW");
    }
}
