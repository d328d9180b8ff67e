mod details;

pub use details::DetailsModal;

use crate::shared::icons::icon;
use leptos::ev;
use leptos::prelude::*;

/// Overlay dialog. Escape, the close button and a click on the overlay all
/// call `on_close`.
#[component]
pub fn Modal(
    #[prop(into)] title: Signal<String>,
    on_close: Callback<()>,
    /// Buttons shown in the header next to the close button.
    #[prop(optional)]
    action_buttons: Option<ChildrenFn>,
    /// Extra class on the dialog, e.g. `"modal--wide"`.
    #[prop(optional, into)]
    class: String,
    children: Children,
) -> impl IntoView {
    let handle = window_event_listener(ev::keydown, move |event| {
        if event.key() == "Escape" {
            on_close.run(());
        }
    });
    on_cleanup(move || handle.remove());

    let dialog_class = if class.is_empty() {
        "modal".to_string()
    } else {
        format!("modal {}", class)
    };

    view! {
        <div class="modal-overlay" on:click=move |_| on_close.run(())>
            <div class=dialog_class on:click=|ev: ev::MouseEvent| ev.stop_propagation()>
                <div class="modal-header">
                    <h2 class="modal-title">{move || title.get()}</h2>
                    <div class="modal-header-actions">
                        {action_buttons.as_ref().map(|buttons| buttons())}
                        <button class="button button--icon modal__close" on:click=move |_| on_close.run(())>
                            {icon("x")}
                        </button>
                    </div>
                </div>
                <div class="modal-body">{children()}</div>
            </div>
        </div>
    }
}
