use crate::shared::icons::icon;
use crate::shared::list_state::{DEFAULT_PAGE_SIZE, PAGE_SIZE_OPTIONS};
use leptos::prelude::*;

/// 1-based first/last row shown on `page`, `None` for an empty list
pub fn row_range(page: usize, page_size: usize, total_count: usize) -> Option<(usize, usize)> {
    if total_count == 0 || page_size == 0 {
        return None;
    }
    let first = (page * page_size).min(total_count.saturating_sub(1)) + 1;
    let last = (first + page_size - 1).min(total_count);
    Some((first, last))
}

/// Page navigation and page size choice under a list table
#[component]
pub fn PaginationControls(
    /// 0-based
    #[prop(into)]
    current_page: Signal<usize>,
    #[prop(into)] total_pages: Signal<usize>,
    /// Rows after filtering
    #[prop(into)]
    total_count: Signal<usize>,
    #[prop(into)] page_size: Signal<usize>,
    on_page_change: Callback<usize>,
    on_page_size_change: Callback<usize>,
) -> impl IntoView {
    let last_page = move || total_pages.get().max(1) - 1;
    let at_start = move || current_page.get() == 0;
    let at_end = move || current_page.get() >= last_page();

    let nav_button = move |title: &'static str,
                           icon_name: &'static str,
                           target: fn(usize, usize) -> usize,
                           disabled: Signal<bool>| {
        view! {
            <button
                class="pagination-btn"
                title=title
                disabled=move || disabled.get()
                on:click=move |_| {
                    if !disabled.get_untracked() {
                        on_page_change.run(target(current_page.get_untracked(), last_page()));
                    }
                }
            >
                {icon(icon_name)}
            </button>
        }
    };

    let summary = move || match row_range(current_page.get(), page_size.get(), total_count.get()) {
        Some((first, last)) => format!("{}-{} of {}", first, last, total_count.get()),
        None => "No records".to_string(),
    };

    view! {
        <div class="pagination-controls">
            {nav_button("First page", "chevrons-left", |_, _| 0, Signal::derive(at_start))}
            {nav_button("Previous page", "chevron-left", |page, _| page.saturating_sub(1), Signal::derive(at_start))}
            <span class="pagination-info">{summary}</span>
            {nav_button("Next page", "chevron-right", |page, last| (page + 1).min(last), Signal::derive(at_end))}
            {nav_button("Last page", "chevrons-right", |_, last| last, Signal::derive(at_end))}
            <label class="page-size-label">
                "Rows per page"
                <select
                    class="page-size-select"
                    on:change=move |ev| {
                        let size = event_target_value(&ev).parse().unwrap_or(DEFAULT_PAGE_SIZE);
                        on_page_size_change.run(size);
                    }
                    prop:value=move || page_size.get().to_string()
                >
                    {PAGE_SIZE_OPTIONS
                        .iter()
                        .map(|&size| view! {
                            <option value=size.to_string() selected=move || page_size.get() == size>
                                {size}
                            </option>
                        })
                        .collect_view()}
                </select>
            </label>
        </div>
    }
}
