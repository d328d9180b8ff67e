use super::api;
use crate::shared::dynamic_form::{DynamicForm, JsPatternMatcher};
use crate::shared::icons::icon;
use crate::shared::list_utils::SearchInput;
use crate::shared::modal::Modal;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use crate::shared::toast::use_toast;
use contracts::domain::common::{entry_cell, DirectoryKind};
use contracts::shared::dynamic_form::{
    build_create_controls, collect_object, inputs_from_object, sorted_fields, FormInputs,
};
use leptos::prelude::*;
use leptos::task::spawn_local;
use serde_json::Value;
use thaw::*;

fn matches_query(kind: DirectoryKind, entry: &Value, query: &str) -> bool {
    query.is_empty() || kind.entry_title(entry).to_lowercase().contains(query)
}

/// Cell texts of an entry, one per schema field in display order.
fn entry_cells(kind: DirectoryKind, entry: &Value) -> Vec<String> {
    let fields = kind.fields();
    sorted_fields(&fields)
        .into_iter()
        .map(|f| entry_cell(entry, &f.field_name))
        .collect()
}

#[component]
pub fn DirectoryPage(kind: DirectoryKind) -> impl IntoView {
    let toast = use_toast();
    let entries: RwSignal<Vec<Value>> = RwSignal::new(Vec::new());
    let query = RwSignal::new(String::new());
    let (loading, set_loading) = signal(false);
    // None: closed; Some(None): create; Some(Some(entry)): edit.
    let form_entry: RwSignal<Option<Option<Value>>> = RwSignal::new(None);

    let load = move || {
        set_loading.set(true);
        spawn_local(async move {
            match api::fetch_entries(kind).await {
                Ok(list) => entries.set(list),
                Err(e) => toast.api_error(&format!("Не удалось загрузить: {}", kind.list_name()), &e),
            }
            set_loading.set(false);
        });
    };

    Effect::new(move |_| load());

    let delete = move |entry: Value| {
        let Some(id) = kind.entry_id(&entry) else {
            return;
        };
        let title = kind.entry_title(&entry);
        spawn_local(async move {
            match api::delete_entry(kind, id).await {
                Ok(()) => {
                    toast.success(format!("{} «{}» удалён", kind.element_name(), title));
                    load();
                }
                Err(e) => toast.api_error("Не удалось удалить запись", &e),
            }
        });
    };

    let visible = move || {
        let q = query.get().to_lowercase();
        entries
            .get()
            .into_iter()
            .filter(|e| matches_query(kind, e, &q))
            .collect::<Vec<_>>()
    };

    let headers = sorted_fields(&kind.fields())
        .into_iter()
        .map(|f| {
            let label = f.field_label.clone();
            view! { <TableHeaderCell resizable=false min_width=f.column_width_px() as f64>{label}</TableHeaderCell> }
        })
        .collect_view();

    view! {
        <PageFrame page_id=format!("{}--list", kind.tab_key()) category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">{kind.list_name()}</h1>
                    <Badge>{move || entries.with(Vec::len).to_string()}</Badge>
                </div>
                <div class="page__header-right">
                    <SearchInput initial=String::new() on_change=Callback::new(move |q| query.set(q)) />
                    <Button appearance=ButtonAppearance::Primary on_click=move |_| form_entry.set(Some(None))>
                        {icon("plus")}
                        " Новый"
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| load()
                        disabled=Signal::derive(move || loading.get())
                    >
                        {icon("refresh")}
                        {move || if loading.get() { " Загрузка..." } else { " Обновить" }}
                    </Button>
                </div>
            </div>

            <div class="page__content">
                <div class="table-wrapper">
                    <Table attr:style="width: 100%;">
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell resizable=false min_width=60.0>"ID"</TableHeaderCell>
                                {headers}
                                <TableHeaderCell resizable=false min_width=90.0></TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            {move || {
                                visible()
                                    .into_iter()
                                    .map(|entry| {
                                        let id = kind.entry_id(&entry).map(|id| id.to_string()).unwrap_or_default();
                                        let cells = entry_cells(kind, &entry)
                                            .into_iter()
                                            .map(|text| view! {
                                                <TableCell>
                                                    <TableCellLayout truncate=true>{text}</TableCellLayout>
                                                </TableCell>
                                            })
                                            .collect_view();
                                        let for_edit = entry.clone();
                                        let for_delete = entry;
                                        view! {
                                            <TableRow>
                                                <TableCell>
                                                    <TableCellLayout>{id}</TableCellLayout>
                                                </TableCell>
                                                {cells}
                                                <TableCell>
                                                    <Button
                                                        appearance=ButtonAppearance::Subtle
                                                        on_click=move |_| form_entry.set(Some(Some(for_edit.clone())))
                                                        attr:title="Редактировать"
                                                    >
                                                        {icon("edit")}
                                                    </Button>
                                                    <Button
                                                        appearance=ButtonAppearance::Subtle
                                                        on_click=move |_| delete(for_delete.clone())
                                                        attr:title="Удалить"
                                                    >
                                                        {icon("trash")}
                                                    </Button>
                                                </TableCell>
                                            </TableRow>
                                        }
                                    })
                                    .collect_view()
                            }}
                        </TableBody>
                    </Table>
                </div>

                {move || form_entry.get().map(|entry| view! {
                    <DirectoryForm
                        kind=kind
                        entry=entry
                        on_close=Callback::new(move |_| form_entry.set(None))
                        on_saved=Callback::new(move |_| {
                            form_entry.set(None);
                            load();
                        })
                    />
                })}
            </div>
        </PageFrame>
    }
}

#[component]
fn DirectoryForm(
    kind: DirectoryKind,
    entry: Option<Value>,
    on_close: Callback<()>,
    on_saved: Callback<()>,
) -> impl IntoView {
    let toast = use_toast();
    let fields = kind.fields();
    let editing_id = entry.as_ref().and_then(|e| kind.entry_id(e));
    let title = match &entry {
        Some(e) => format!("{}: {}", kind.element_name(), kind.entry_title(e)),
        None => format!("{}: новая запись", kind.element_name()),
    };
    let inputs: RwSignal<FormInputs> = RwSignal::new(
        entry
            .as_ref()
            .map(|e| inputs_from_object(&fields, e))
            .unwrap_or_default(),
    );
    let controls = build_create_controls(&fields);
    let fields = StoredValue::new(fields);
    let (error, set_error) = signal::<Option<String>>(None);
    let (saving, set_saving) = signal(false);

    let on_save = move |_| {
        let body = match fields.with_value(|f| collect_object(f, &inputs.get_untracked(), &JsPatternMatcher)) {
            Ok(body) => body,
            Err(e) => {
                set_error.set(Some(e.to_string()));
                return;
            }
        };
        set_error.set(None);
        set_saving.set(true);
        spawn_local(async move {
            let response = match editing_id {
                Some(id) => api::update_entry(kind, id, &body).await,
                None => api::create_entry(kind, &body).await,
            };
            set_saving.set(false);
            match response {
                Ok(()) => {
                    toast.success(format!("{}: сохранено", kind.element_name()));
                    on_saved.run(());
                }
                Err(e) => set_error.set(Some(e.to_string())),
            }
        });
    };

    view! {
        <Modal title=title on_close=on_close>
            {move || error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

            <DynamicForm controls=controls inputs=inputs />

            <div class="modal-footer">
                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click=move |_| on_close.run(())
                    disabled=Signal::derive(move || saving.get())
                >
                    "Отмена"
                </Button>
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=on_save
                    disabled=Signal::derive(move || saving.get())
                >
                    {move || if saving.get() { "Сохранение..." } else { "Сохранить" }}
                </Button>
            </div>
        </Modal>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn cells_follow_schema_order() {
        let entry = json!({"id": 3, "name": "Пшеница", "usage": "SALE"});
        assert_eq!(entry_cells(DirectoryKind::Product, &entry), vec!["Пшеница", "SALE"]);
    }

    #[test]
    fn search_matches_title_case_insensitively() {
        let entry = json!({"id": 1, "companyName": "Nova Poshta"});
        assert!(matches_query(DirectoryKind::Carrier, &entry, "nova"));
        assert!(!matches_query(DirectoryKind::Carrier, &entry, "meest"));
        assert!(matches_query(DirectoryKind::Carrier, &entry, ""));
    }
}
