//! PageFrame — standard root wrapper for every page rendered by the registry.
//!
//! Guarantees two metadata attributes on the root DOM element:
//!   - `id`                  — `"{page}--{category}"`, e.g. `"customerDetail--detail"`
//!   - `data-page-category`  — one of the PAGE_CAT_* constants

use super::page_standard::*;
use leptos::prelude::*;

/// Root wrapper that sets standard metadata on every page.
///
/// Adds the BEM modifier class based on category:
/// - `detail`, `form` → `page page--detail`
/// - `dashboard`      → `page page--dashboard`
/// - `public`         → `page page--public`
/// - otherwise        → `page`
#[component]
pub fn PageFrame(
    /// HTML id in format `{page}--{category}`.
    #[prop(into)]
    page_id: String,
    /// One of the PAGE_CAT_* constants from `page_standard`.
    category: &'static str,
    children: Children,
) -> impl IntoView {
    let class = match category {
        PAGE_CAT_DETAIL | PAGE_CAT_FORM => "page page--detail",
        PAGE_CAT_DASHBOARD => "page page--dashboard",
        PAGE_CAT_PUBLIC => "page page--public",
        _ => "page",
    };

    view! {
        <div
            id=page_id
            class=class
            data-page-category=category
        >
            {children()}
        </div>
    }
}
