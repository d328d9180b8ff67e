use super::Modal;
use leptos::prelude::*;

/// Read-only card: one label/value line per row.
#[component]
pub fn DetailsModal(
    #[prop(into)] title: String,
    rows: Vec<(String, String)>,
    on_close: Callback<()>,
    /// Rendered under the label/value lines, e.g. an items table.
    #[prop(optional)]
    children: Option<Children>,
) -> impl IntoView {
    view! {
        <Modal title=title on_close=on_close>
            <div class="details">
                {rows
                    .into_iter()
                    .map(|(label, value)| view! {
                        <div class="details__row">
                            <span class="details__label">{label}</span>
                            <span class="details__value">{value}</span>
                        </div>
                    })
                    .collect_view()}
            </div>
            {children.map(|children| children())}
        </Modal>
    }
}
