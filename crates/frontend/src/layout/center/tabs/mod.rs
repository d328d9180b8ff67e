pub mod tab;

use crate::layout::global_context::{AppGlobalContext, Tab as TabData};
use leptos::prelude::*;
use tab::Tab;

/// Strip of open tabs above the page area.
#[component]
pub fn TabStrip() -> impl IntoView {
    let tabs_store =
        use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");

    view! {
        <div class="tabs-strip">
            <For
                each=move || tabs_store.opened.get()
                key=|tab| (tab.key.clone(), tab.title.clone())
                children=move |tab: TabData| view! { <Tab tab=tab /> }
            />
        </div>
    }
}
