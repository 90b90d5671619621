//! PageFrame: standard root wrapper for every routed page.
//!
//! Puts two metadata attributes on the root DOM element:
//!   - `id`                  : `"{entity}--{category}"`, e.g. `"a001_cafe--list"`
//!   - `data-page-category`  : one of the PAGE_CAT_* constants
//!
//! The entity part matches the `domain/` directory, so an id copied from the
//! DOM inspector leads straight to the module.

use leptos::prelude::*;

/// List of records: table with filter/pagination.
pub const PAGE_CAT_LIST: &str = "list";

/// Create / edit form for a single record.
pub const PAGE_CAT_DETAIL: &str = "detail";

/// Root wrapper that sets standard metadata on every page.
///
/// - `list`   → `page`
/// - `detail` → `page page--detail`
#[component]
pub fn PageFrame(
    /// HTML id in format `{entity}--{category}`, e.g. `"a002_employee--detail"`.
    page_id: &'static str,
    /// One of the PAGE_CAT_* constants.
    category: &'static str,
    children: Children,
) -> impl IntoView {
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
