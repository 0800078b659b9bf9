//! Page categories for tab pages.
//!
//! Every page rendered inside a tab declares an HTML `id` of the form
//! `{entity}--{category}` (e.g. `"a003_payout--list"`) and a
//! `data-page-category` taken from the constants below, so a page found in
//! the DOM inspector leads straight to its `domain/` or `usecases/` module.

/// Table with filters and pagination.
pub const PAGE_CAT_LIST: &str = "list";

/// Detail or edit form for a single record.
pub const PAGE_CAT_DETAIL: &str = "detail";

/// Use-case page (template scanning and similar tools).
pub const PAGE_CAT_USECASE: &str = "usecase";

/// Account and system pages.
pub const PAGE_CAT_SYSTEM: &str = "system";

pub const ALL_CATEGORIES: &[&str] = &[
    PAGE_CAT_LIST,
    PAGE_CAT_DETAIL,
    PAGE_CAT_USECASE,
    PAGE_CAT_SYSTEM,
];

/// `{entity}--{category}` with both halves non-empty and a known category.
pub fn is_valid_page_id(id: &str) -> bool {
    match id.split_once("--") {
        Some((entity, category)) => !entity.is_empty() && ALL_CATEGORIES.contains(&category),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_id_format() {
        assert!(is_valid_page_id("a003_payout--list"));
        assert!(is_valid_page_id("sys_profile--system"));
        assert!(!is_valid_page_id("a003_payout"));
        assert!(!is_valid_page_id("--list"));
        assert!(!is_valid_page_id("a003_payout--chart"));
    }
}
