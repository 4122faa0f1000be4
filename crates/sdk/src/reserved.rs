//! Reserved-name registries.
//!
//! Slugs the host platform claims for its own internals and query layer.
//! Both lists are process-wide constant data; callers wanting to pre-check
//! a slug before constructing a builder can read them directly.

/// Content-type slugs reserved by the host platform.
pub const RESERVED_CONTENT_TYPES: &[&str] = &[
    "post",
    "page",
    "attachment",
    "revision",
    "nav_menu_item",
    "custom_css",
    "customize_changeset",
    "oembed_cache",
    "user_request",
    "wp_block",
];

/// Taxonomy slugs reserved by the host platform.
///
/// Most of these collide with the host's public query variables, so a
/// taxonomy registered under one of them would shadow core query handling.
pub const RESERVED_TAXONOMIES: &[&str] = &[
    "attachment",
    "attachment_id",
    "author",
    "author_name",
    "calendar",
    "cat",
    "category",
    "category__and",
    "category__in",
    "category__not_in",
    "category_name",
    "comments_per_page",
    "comments_popup",
    "custom",
    "customize_messenger_channel",
    "customized",
    "cpage",
    "day",
    "debug",
    "embed",
    "error",
    "exact",
    "feed",
    "fields",
    "hour",
    "link_category",
    "m",
    "minute",
    "monthnum",
    "more",
    "name",
    "nav_menu",
    "nonce",
    "nopaging",
    "offset",
    "order",
    "orderby",
    "p",
    "page",
    "page_id",
    "paged",
    "pagename",
    "pb",
    "perm",
    "post",
    "post__in",
    "post__not_in",
    "post_format",
    "post_mime_type",
    "post_status",
    "post_tag",
    "post_type",
    "posts",
    "posts_per_archive_page",
    "posts_per_page",
    "preview",
    "robots",
    "s",
    "search",
    "second",
    "sentence",
    "showposts",
    "static",
    "status",
    "subpost",
    "subpost_id",
    "tag",
    "tag__and",
    "tag__in",
    "tag__not_in",
    "tag_id",
    "tag_slug__and",
    "tag_slug__in",
    "taxonomy",
    "tb",
    "term",
    "terms",
    "theme",
    "title",
    "type",
    "types",
    "w",
    "withcomments",
    "withoutcomments",
    "year",
];

/// Check whether a slug is a reserved content-type name.
pub fn is_reserved_content_type(slug: &str) -> bool {
    RESERVED_CONTENT_TYPES.contains(&slug)
}

/// Check whether a slug is a reserved taxonomy name.
pub fn is_reserved_taxonomy(slug: &str) -> bool {
    RESERVED_TAXONOMIES.contains(&slug)
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn content_type_list_has_ten_entries() {
        assert_eq!(RESERVED_CONTENT_TYPES.len(), 10);
    }

    #[test]
    fn taxonomy_list_has_eighty_five_entries() {
        assert_eq!(RESERVED_TAXONOMIES.len(), 85);
    }

    #[test]
    fn membership_checks() {
        assert!(is_reserved_content_type("page"));
        assert!(is_reserved_content_type("wp_block"));
        assert!(!is_reserved_content_type("book"));

        assert!(is_reserved_taxonomy("category"));
        assert!(is_reserved_taxonomy("s"));
        assert!(!is_reserved_taxonomy("genre"));
    }

    #[test]
    fn no_duplicates_in_either_list() {
        for list in [RESERVED_CONTENT_TYPES, RESERVED_TAXONOMIES] {
            let mut sorted: Vec<&str> = list.to_vec();
            sorted.sort_unstable();
            sorted.dedup();
            assert_eq!(sorted.len(), list.len());
        }
    }
}
