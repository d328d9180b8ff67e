//! Top bar: sidebar toggle, application title and the signed-in user.

use crate::layout::global_context::AppGlobalContext;
use crate::shared::icons::icon;
use crate::system::session::use_session;
use leptos::prelude::*;

#[component]
pub fn TopHeader() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let session = use_session();
    let is_sidebar_visible = move || ctx.left_open.get();

    view! {
        <div class="top-header">
            <div class="top-header__brand">
                <button
                    class="top-header__icon-btn"
                    on:click=move |_| ctx.toggle_left()
                    title=move || if is_sidebar_visible() { "Скрыть навигацию" } else { "Показать навигацию" }
                >
                    {icon("panel-left")}
                </button>
                <span class="top-header__title">"ERP Console"</span>
            </div>

            <div class="top-header__actions">
                <div class="top-header__user">
                    {icon("user")}
                    <span>{session.display_name().to_string()}</span>
                </div>
            </div>
        </div>
    }
}
