//! Page category constants for tab pages.
//!
//! Every page rendered inside a tab declares an HTML `id` in the format
//! `{entity}--{category}` (e.g. `"a002_client--list"`) and a
//! `data-page-category` with one of the constants below.

/// List of records: table with filters/pagination.
pub const PAGE_CAT_LIST: &str = "list";

/// Editor of a single record or of its children.
pub const PAGE_CAT_DETAIL: &str = "detail";

/// System administration page (users, permissions).
pub const PAGE_CAT_SYSTEM: &str = "system";

/// Validate that a page id matches the `{entity}--{category}` format.
pub fn is_valid_page_id(id: &str) -> bool {
    matches!(id.split_once("--"), Some((entity, category)) if !entity.is_empty() && !category.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_id_format() {
        assert!(is_valid_page_id("a002_client--list"));
        assert!(!is_valid_page_id("a002_client"));
        assert!(!is_valid_page_id("--list"));
    }
}
