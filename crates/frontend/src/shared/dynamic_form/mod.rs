//! Widgets rendered from a client type's field schema: the create/edit form,
//! the filter panel body and the client table.

mod filters;
mod form;
mod pattern;
mod table;

pub use filters::{filter_tags, DynamicFilters};
pub use form::DynamicForm;
pub use pattern::JsPatternMatcher;
pub use table::{DynamicTable, TableRowData};

use wasm_bindgen::JsCast;
use web_sys::{HtmlOptionElement, HtmlSelectElement};

/// Values of every selected `<option>` of a `<select multiple>`.
pub(crate) fn selected_values(ev: &leptos::ev::Event) -> Vec<String> {
    let Some(select) = ev
        .target()
        .and_then(|t| t.dyn_into::<HtmlSelectElement>().ok())
    else {
        return Vec::new();
    };

    let options = select.selected_options();
    (0..options.length())
        .filter_map(|i| options.item(i))
        .filter_map(|el| el.dyn_into::<HtmlOptionElement>().ok())
        .map(|opt| opt.value())
        .collect()
}
