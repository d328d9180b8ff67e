use crate::shared::icons::icon;
use leptos::prelude::*;

/// Collapsible filter panel. The header carries the active filter badge and
/// the pagination slot, the body carries the filter form and its tags.
#[component]
pub fn FilterPanel(
    is_expanded: RwSignal<bool>,
    #[prop(into)] active_filters_count: Signal<usize>,
    #[prop(into)] pagination_controls: ChildrenFn,
    #[prop(into)] filter_content: ChildrenFn,
    #[prop(optional, into)] filter_tags: Option<ChildrenFn>,
) -> impl IntoView {
    view! {
        <div class="filter-panel">
            <div class="filter-panel-header">
                <div
                    class="filter-panel-header__left"
                    on:click=move |_| is_expanded.update(|e| *e = !*e)
                >
                    <span class=move || {
                        if is_expanded.get() {
                            "filter-panel__chevron filter-panel__chevron--expanded"
                        } else {
                            "filter-panel__chevron"
                        }
                    }>
                        {icon("chevron-right")}
                    </span>
                    {icon("filter")}
                    <span class="filter-panel__title">"Фильтры"</span>
                    <Show when=move || active_filters_count.get() != 0>
                        <span class="badge badge--primary">{move || active_filters_count.get()}</span>
                    </Show>
                </div>
                <div class="filter-panel-header__center">{pagination_controls()}</div>
            </div>

            <div class=move || {
                if is_expanded.get() {
                    "filter-panel__collapsible filter-panel__collapsible--expanded"
                } else {
                    "filter-panel__collapsible filter-panel__collapsible--collapsed"
                }
            }>
                <div class="filter-panel-content">
                    {filter_content()}
                    {filter_tags.as_ref().map(|tags| view! { <div class="filter-tags">{tags()}</div> })}
                </div>
            </div>
        </div>
    }
}

/// Chip for one active filter.
#[component]
pub fn FilterTag(#[prop(into)] label: String, on_remove: Callback<()>) -> impl IntoView {
    view! {
        <div class="filter-tag">
            <span>{label}</span>
            <span
                class="filter-tag__remove"
                title="Убрать фильтр"
                on:click=move |e| {
                    e.stop_propagation();
                    on_remove.run(());
                }
            >
                {icon("x")}
            </span>
        </div>
    }
}
