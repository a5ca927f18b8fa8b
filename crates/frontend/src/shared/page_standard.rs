//! Page category constants.
//!
//! Every page rendered by the registry declares:
//!   - HTML `id` in the format `{page tag}--{category}` (e.g. `"customerDetail--detail"`)
//!   - `data-page-category` with one of the constants below

/// List of records.
pub const PAGE_CAT_LIST: &str = "list";

/// Read-only view of a single record.
pub const PAGE_CAT_DETAIL: &str = "detail";

/// Create / edit form for a single record.
pub const PAGE_CAT_FORM: &str = "form";

/// Overview and report pages.
pub const PAGE_CAT_DASHBOARD: &str = "dashboard";

/// Settings, roadmap and other application pages.
pub const PAGE_CAT_SYSTEM: &str = "system";

/// Pages reachable without a session (landing, login, signup).
pub const PAGE_CAT_PUBLIC: &str = "public";

/// All known category values.
pub const ALL_CATEGORIES: &[&str] = &[
    PAGE_CAT_LIST,
    PAGE_CAT_DETAIL,
    PAGE_CAT_FORM,
    PAGE_CAT_DASHBOARD,
    PAGE_CAT_SYSTEM,
    PAGE_CAT_PUBLIC,
];

/// Validate that a page id matches the `{page}--{category}` format.
pub fn is_valid_page_id(id: &str) -> bool {
    match id.split_once("--") {
        Some((page, category)) => !page.is_empty() && is_known_category(category),
        None => false,
    }
}

/// Return true if the category value is recognised.
pub fn is_known_category(cat: &str) -> bool {
    ALL_CATEGORIES.contains(&cat)
}
