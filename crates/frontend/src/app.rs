use crate::layout::global_context::{AppGlobalContext, Tab as TabData};
use crate::layout::left::Sidebar;
use crate::layout::tabs::TabPage;
use crate::layout::Shell;
use crate::shared::toast::ToastService;
use crate::system::session::provide_session;
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn App() -> impl IntoView {
    view! {
        <ConfigProvider>
            <ToasterProvider position=ToastPosition::TopEnd>
                <Console />
            </ToasterProvider>
        </ConfigProvider>
    }
}

/// Console contexts live under the toaster so every page can raise toasts.
#[component]
fn Console() -> impl IntoView {
    provide_context(AppGlobalContext::new());
    provide_context(ToastService::new());
    provide_session();

    view! { <MainLayout /> }
}

/// Sidebar plus one mounted `TabPage` per open tab.
///
/// The active tab is synced with `?active=` in the URL.
#[component]
fn MainLayout() -> impl IntoView {
    let tabs_store = use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");
    tabs_store.init_router_integration();

    view! {
        <Shell
            left=|| view! { <Sidebar /> }.into_any()
            center=move || {
                view! {
                    <For
                        each=move || tabs_store.opened.get()
                        key=|tab| tab.key.clone()
                        children=move |tab: TabData| view! { <TabPage tab=tab tabs_store=tabs_store /> }
                    />
                }
                .into_any()
            }
        />
    }
}
