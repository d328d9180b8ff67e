use crate::shared::icons::icon;
use leptos::prelude::*;

pub const PAGE_SIZE_OPTIONS: [usize; 4] = [20, 50, 100, 200];

/// Page navigation for server-paginated lists.
///
/// `current_page` is 0-indexed, the label shows it 1-indexed.
#[component]
pub fn PaginationControls(
    #[prop(into)] current_page: Signal<usize>,
    #[prop(into)] total_pages: Signal<usize>,
    #[prop(into)] total_count: Signal<u64>,
    #[prop(into)] page_size: Signal<usize>,
    on_page_change: Callback<usize>,
    on_page_size_change: Callback<usize>,
) -> impl IntoView {
    let is_first = move || current_page.get() == 0;
    let is_last = move || current_page.get() + 1 >= total_pages.get();

    view! {
        <div class="pagination-controls">
            <button
                class="pagination-btn"
                on:click=move |_| on_page_change.run(0)
                disabled=is_first
                title="Первая страница"
            >
                {icon("chevrons-left")}
            </button>
            <button
                class="pagination-btn"
                on:click=move |_| {
                    let page = current_page.get();
                    if page > 0 {
                        on_page_change.run(page - 1);
                    }
                }
                disabled=is_first
                title="Предыдущая страница"
            >
                {icon("chevron-left")}
            </button>
            <span class="pagination-info">
                {move || {
                    format!(
                        "{} / {} ({})",
                        current_page.get() + 1,
                        total_pages.get().max(1),
                        total_count.get()
                    )
                }}
            </span>
            <button
                class="pagination-btn"
                on:click=move |_| {
                    let page = current_page.get();
                    if page + 1 < total_pages.get() {
                        on_page_change.run(page + 1);
                    }
                }
                disabled=is_last
                title="Следующая страница"
            >
                {icon("chevron-right")}
            </button>
            <button
                class="pagination-btn"
                on:click=move |_| {
                    let total = total_pages.get();
                    if total > 0 {
                        on_page_change.run(total - 1);
                    }
                }
                disabled=is_last
                title="Последняя страница"
            >
                {icon("chevrons-right")}
            </button>
            <select
                class="page-size-select"
                on:change=move |ev| {
                    if let Ok(size) = event_target_value(&ev).parse() {
                        on_page_size_change.run(size);
                    }
                }
                prop:value=move || page_size.get().to_string()
            >
                {PAGE_SIZE_OPTIONS
                    .iter()
                    .map(|&size| {
                        view! {
                            <option value=size.to_string() selected=move || page_size.get() == size>
                                {size.to_string()}
                            </option>
                        }
                    })
                    .collect_view()}
            </select>
        </div>
    }
}
