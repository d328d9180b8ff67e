//! PageFrame: standard root wrapper for every page rendered inside a tab.

use super::page_standard::*;
use leptos::prelude::*;

/// Root wrapper that sets `id` and `data-page-category` on a tab page.
#[component]
pub fn PageFrame(
    /// HTML id in format `{entity}--{category}`, e.g. `"a002_client--list"`.
    #[prop(into)]
    page_id: String,
    /// One of the PAGE_CAT_* constants from `page_standard`.
    category: &'static str,
    children: Children,
) -> impl IntoView {
    debug_assert!(is_valid_page_id(&page_id), "bad page id: {page_id}");

    let class = match category {
        PAGE_CAT_DETAIL => "page page--detail",
        _ => "page",
    };

    view! {
        <div id=page_id class=class data-page-category=category>
            {children()}
        </div>
    }
}
