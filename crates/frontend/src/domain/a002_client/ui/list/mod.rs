//! Clients of one client type: the table, filters and create form are all
//! built from that type's field schema.

use crate::domain::a001_client_type::api as client_type_api;
use crate::domain::a002_client::api;
use crate::domain::a002_client::state::{normalize_for, provide_client_list_store};
use crate::domain::a002_client::ui::details::ClientDetails;
use crate::domain::a002_client::ui::form::ClientForm;
use crate::domain::lookups::load_all;
use crate::shared::components::{FilterPanel, PaginationControls};
use crate::shared::dynamic_form::{filter_tags, DynamicFilters, DynamicTable, TableRowData};
use crate::shared::icons::icon;
use crate::shared::list_utils::SearchInput;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use crate::shared::toast::use_toast;
use contracts::domain::a001_client_type::aggregate::ClientType;
use contracts::domain::a002_client::aggregate::Client;
use contracts::domain::a003_source::aggregate::Source;
use contracts::domain::common::{name_lookup, NameLookup};
use contracts::shared::dynamic_form::{
    build_filter_controls, build_table_columns, static_filter_controls, ClientTypeField,
    FilterControl, ListValue, TableColumn,
};
use contracts::shared::filters::SelectedFilters;
use contracts::shared::request_sequence::RequestSequence;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

pub fn client_rows(
    clients: &[Client],
    columns: &[TableColumn],
    fields: &[ClientTypeField],
    sources: &NameLookup,
) -> Vec<TableRowData> {
    clients
        .iter()
        .map(|client| TableRowData {
            id: client.id,
            cells: columns
                .iter()
                .map(|column| client.cell_text(column, fields, sources))
                .collect(),
        })
        .collect()
}

/// Keep the stored type when it still exists, otherwise the first active one.
fn pick_client_type(types: &[ClientType], stored: Option<i64>) -> Option<i64> {
    stored
        .filter(|id| types.iter().any(|t| t.id == *id))
        .or_else(|| types.iter().find(|t| t.active).map(|t| t.id))
        .or_else(|| types.first().map(|t| t.id))
}

#[component]
pub fn ClientList() -> impl IntoView {
    let toast = use_toast();
    let store = provide_client_list_store();
    let state = store.state;
    let sources: RwSignal<Vec<Source>> = RwSignal::new(Vec::new());
    let filters_expanded = RwSignal::new(false);
    let (loading, set_loading) = signal(false);
    let opened: RwSignal<Option<Client>> = RwSignal::new(None);
    let creating = RwSignal::new(false);

    let load_data = move || {
        if state.with_untracked(|s| s.client_type_id.is_none()) {
            return;
        }
        let query = state.with_untracked(|s| store.filters.with_untracked(|f| s.query(f)));
        let client_type_id = state.with_untracked(|s| s.client_type_id);
        let searching = query.q.is_some();
        let ticket = store.loads.with_value(RequestSequence::next);
        set_loading.set(true);
        spawn_local(async move {
            let result = if searching {
                api::search(&query).await
            } else {
                api::load_page(&query).await.map(Some)
            };
            if !ticket.is_current() {
                log::debug!("client page #{} superseded, result dropped", ticket.id());
                return;
            }
            match result {
                Ok(Some(page)) => {
                    state.update(|s| {
                        s.apply_page_for(client_type_id, page);
                    });
                }
                // A newer search owns the loading flag now.
                Ok(None) => return,
                Err(e) => toast.api_error("Не удалось загрузить клиентов", &e),
            }
            set_loading.set(false);
        });
    };

    let load_schema = move |client_type_id: i64| {
        spawn_local(async move {
            match client_type_api::load_fields(client_type_id).await {
                Ok(fields) => {
                    store.filters.update(|f| *f = normalize_for(f, &fields));
                    store.persist_filters();
                    store.fields.set(fields);
                }
                Err(e) => {
                    store.fields.set(Vec::new());
                    toast.api_error("Не удалось загрузить поля типа клиента", &e);
                }
            }
            load_data();
        });
    };

    Effect::new(move |_| {
        spawn_local(async move {
            match load_all::<Source>().await {
                Ok(list) => sources.set(list),
                Err(e) => toast.api_error("Не удалось загрузить источники", &e),
            }
        });
        spawn_local(async move {
            match client_type_api::load_client_types().await {
                Ok(types) => {
                    let stored = state.with_untracked(|s| s.client_type_id);
                    let chosen = pick_client_type(&types, stored);
                    store.client_types.set(types);
                    state.update(|s| s.client_type_id = chosen);
                    store.persist_client_type();
                    if let Some(id) = chosen {
                        load_schema(id);
                    }
                }
                Err(e) => toast.api_error("Не удалось загрузить типы клиентов", &e),
            }
        });
    });

    // Filter edits: persist and reload from the first page.
    Effect::new(move |previous: Option<SelectedFilters>| {
        let current = store.filters.get();
        if previous.is_some_and(|p| p != current) {
            store.persist_filters();
            state.update(|s| s.page = 0);
            load_data();
        }
        current
    });

    let on_type_change = move |value: String| {
        let Ok(id) = value.parse::<i64>() else {
            return;
        };
        log::debug!("client type switched to {}", id);
        state.update(|s| {
            s.client_type_id = Some(id);
            s.page = 0;
            s.items.clear();
        });
        store.persist_client_type();
        store.loads.with_value(RequestSequence::invalidate);
        store.filters.update(SelectedFilters::retain_static);
        store.fields.set(Vec::new());
        load_schema(id);
    };

    let on_search = Callback::new(move |query: String| {
        if query.trim().is_empty() {
            api::cancel_search();
        }
        state.update(|s| {
            s.search = query;
            s.page = 0;
        });
        store.persist_search();
        load_data();
    });

    let on_sort = Callback::new(move |field: String| {
        state.update(|s| s.toggle_sort(field));
        load_data();
    });

    let on_row_click = Callback::new(move |id: i64| {
        opened.set(state.with_untracked(|s| s.items.iter().find(|c| c.id == id).cloned()));
    });

    let filter_controls = Signal::derive(move || {
        let source_values: Vec<ListValue> = sources.with(|list| {
            list.iter().map(|s| ListValue::new(s.id, s.name.clone())).collect()
        });
        let mut controls: Vec<FilterControl> = static_filter_controls(&source_values);
        controls.extend(store.fields.with(|f| build_filter_controls(f)));
        controls
    });

    let columns = Signal::derive(move || {
        let label = store
            .current_type()
            .map(|t| t.company_label().to_string())
            .unwrap_or_default();
        store.fields.with(|f| build_table_columns(&label, f))
    });

    let rows = Signal::derive(move || {
        let lookup = sources.with(|s| name_lookup(s));
        let columns = columns.get();
        state.with(|s| store.fields.with(|f| client_rows(&s.items, &columns, f, &lookup)))
    });

    let initial_search = state.with_untracked(|s| s.search.clone());

    view! {
        <PageFrame page_id="a002_client--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Клиенты"</h1>
                    <Badge>{move || state.with(|s| s.total_count).to_string()}</Badge>
                    <select
                        class="form__select page__type-select"
                        on:change=move |ev| on_type_change(event_target_value(&ev))
                    >
                        {move || {
                            let selected = state.with(|s| s.client_type_id);
                            store
                                .client_types
                                .get()
                                .into_iter()
                                .map(|t| {
                                    let id = t.id;
                                    view! {
                                        <option value=id.to_string() selected=selected == Some(id)>
                                            {t.name}
                                        </option>
                                    }
                                })
                                .collect_view()
                        }}
                    </select>
                </div>
                <div class="page__header-right">
                    <SearchInput
                        initial=initial_search
                        on_change=on_search
                        placeholder="Компания, телефон..."
                    />
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| creating.set(true)
                        disabled=Signal::derive(move || state.with(|s| s.client_type_id.is_none()))
                    >
                        {icon("plus")}
                        " Новый"
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| load_data()
                        disabled=Signal::derive(move || loading.get())
                    >
                        {icon("refresh")}
                        {move || if loading.get() { " Загрузка..." } else { " Обновить" }}
                    </Button>
                </div>
            </div>

            <div class="page__content">
                <FilterPanel
                    is_expanded=filters_expanded
                    active_filters_count=Signal::derive(move || store.filters.with(SelectedFilters::active_count))
                    pagination_controls=ChildrenFn::to_children(move || view! {
                        <PaginationControls
                            current_page=Signal::derive(move || state.with(|s| s.page))
                            total_pages=Signal::derive(move || state.with(|s| s.total_pages))
                            total_count=Signal::derive(move || state.with(|s| s.total_count))
                            page_size=Signal::derive(move || state.with(|s| s.page_size))
                            on_page_change=Callback::new(move |page| {
                                state.update(|s| s.page = page);
                                load_data();
                            })
                            on_page_size_change=Callback::new(move |size| {
                                state.update(|s| {
                                    s.page_size = size;
                                    s.page = 0;
                                });
                                load_data();
                            })
                        />
                    })
                    filter_content=ChildrenFn::to_children(move || view! {
                        <DynamicFilters controls=filter_controls filters=store.filters />
                    })
                    filter_tags=ChildrenFn::to_children(move || filter_tags(filter_controls, store.filters))
                />

                <DynamicTable
                    columns=columns
                    rows=rows
                    sort_field=Signal::derive(move || state.with(|s| s.sort_field.clone()))
                    direction=Signal::derive(move || state.with(|s| s.direction))
                    on_sort=on_sort
                    on_row_click=on_row_click
                />

                {move || opened.get().map(|client| view! {
                    <ClientDetails
                        client=client
                        sources=sources
                        on_close=Callback::new(move |_| opened.set(None))
                        on_changed=Callback::new(move |_| load_data())
                    />
                })}

                <Show when=move || creating.get()>
                    <ClientForm
                        client=None
                        sources=sources
                        on_close=Callback::new(move |_| creating.set(false))
                        on_saved=Callback::new(move |_| {
                            creating.set(false);
                            load_data();
                        })
                    />
                </Show>
            </div>
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::shared::dynamic_form::FieldType;

    fn client_type(id: i64, active: bool) -> ClientType {
        ClientType {
            id,
            name: format!("Тип {}", id),
            name_field_label: None,
            active,
            fields: Vec::new(),
        }
    }

    #[test]
    fn stored_type_kept_only_when_present() {
        let types = vec![client_type(1, false), client_type(2, true)];
        assert_eq!(pick_client_type(&types, Some(1)), Some(1));
        assert_eq!(pick_client_type(&types, Some(9)), Some(2));
        assert_eq!(pick_client_type(&types, None), Some(2));
        assert_eq!(pick_client_type(&[], Some(1)), None);
    }

    #[test]
    fn rows_follow_columns() {
        let region = ClientTypeField::new(12, "region", "Регион", FieldType::List)
            .with_list_values(vec![ListValue::new(3, "Киев")]);
        let columns = build_table_columns("", std::slice::from_ref(&region));
        let client: Client = serde_json::from_value(serde_json::json!({
            "id": 7,
            "clientTypeId": 5,
            "company": "Acme",
            "sourceId": 2,
            "fieldValues": [{"fieldId": 12, "valueListId": 3}]
        }))
        .unwrap();
        let mut sources = NameLookup::new();
        sources.insert(2, "Выставка".to_string());

        let rows = client_rows(&[client], &columns, &[region], &sources);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].id, 7);
        assert_eq!(rows[0].cells, vec!["7", "Acme", "Выставка", "", "Киев"]);
    }
}
