//! Clickable table header that shows the sort indicator (▲▼).

use crate::shared::list_utils::{get_sort_class, get_sort_indicator};
use contracts::shared::list_query::SortDirection;
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn SortableHeaderCell(
    #[prop(into)] label: String,
    /// Key sent as `sort`; `None` renders a plain header.
    #[prop(into)]
    sort_field: Option<String>,
    #[prop(into)] current_sort_field: Signal<String>,
    #[prop(into)] direction: Signal<SortDirection>,
    on_sort: Callback<String>,
    #[prop(optional, default = 100.0)] min_width: f64,
) -> impl IntoView {
    let Some(field) = sort_field else {
        return view! {
            <TableHeaderCell resizable=false min_width=min_width>
                {label}
            </TableHeaderCell>
        }
        .into_any();
    };

    let click_field = field.clone();
    let class_field = field.clone();

    view! {
        <TableHeaderCell resizable=false min_width=min_width>
            <div
                class="table__sortable-header"
                style="cursor: pointer;"
                on:click=move |_| on_sort.run(click_field.clone())
            >
                {label}
                <span class=move || get_sort_class(&current_sort_field.get(), &class_field)>
                    {move || get_sort_indicator(&current_sort_field.get(), &field, direction.get())}
                </span>
            </div>
        </TableHeaderCell>
    }
    .into_any()
}
