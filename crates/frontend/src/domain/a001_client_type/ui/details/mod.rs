//! Field editor of one client type: the schema that drives the client
//! table, create form and filters.

mod field_form;

use crate::domain::a001_client_type::api;
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DETAIL;
use crate::shared::toast::use_toast;
use contracts::domain::a001_client_type::aggregate::ClientType;
use contracts::shared::dynamic_form::{sorted_fields, ClientTypeField};
use field_form::FieldForm;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

/// `fields` with the entry at `index` swapped with its neighbour.
/// `None` when the move would leave the list.
fn moved(fields: &[ClientTypeField], index: usize, up: bool) -> Option<Vec<ClientTypeField>> {
    let target = if up {
        index.checked_sub(1)?
    } else {
        index + 1
    };
    if target >= fields.len() || index >= fields.len() {
        return None;
    }
    let mut out = fields.to_vec();
    out.swap(index, target);
    Some(out)
}

fn flags_summary(field: &ClientTypeField) -> String {
    let mut flags = Vec::new();
    if field.is_required {
        flags.push("обяз.");
    }
    if field.is_searchable {
        flags.push("поиск");
    }
    if field.is_filterable {
        flags.push("фильтр");
    }
    if field.is_visible_in_table {
        flags.push("таблица");
    }
    if field.is_visible_in_create {
        flags.push("создание");
    }
    if field.is_multi_value() {
        flags.push("несколько");
    }
    flags.join(", ")
}

#[component]
pub fn ClientTypeDetails(id: i64, on_close: Callback<()>) -> impl IntoView {
    let toast = use_toast();
    let client_type: RwSignal<Option<ClientType>> = RwSignal::new(None);
    let fields: RwSignal<Vec<ClientTypeField>> = RwSignal::new(Vec::new());
    let (loading, set_loading) = signal(false);
    let (reordering, set_reordering) = signal(false);
    // None: closed; Some(None): new field; Some(Some(f)): edit.
    let form_field: RwSignal<Option<Option<ClientTypeField>>> = RwSignal::new(None);

    let load = move || {
        set_loading.set(true);
        spawn_local(async move {
            match api::load_fields(id).await {
                Ok(list) => fields.set(sorted_fields(&list).into_iter().cloned().collect()),
                Err(e) => toast.api_error("Не удалось загрузить поля", &e),
            }
            set_loading.set(false);
        });
    };

    Effect::new(move |_| {
        load();
        spawn_local(async move {
            match api::load_client_types().await {
                Ok(list) => client_type.set(list.into_iter().find(|t| t.id == id)),
                Err(e) => toast.api_error("Не удалось загрузить тип клиента", &e),
            }
        });
    });

    let move_field = move |index: usize, up: bool| {
        let Some(reordered) = fields.with_untracked(|f| moved(f, index, up)) else {
            return;
        };
        fields.set(reordered.clone());
        set_reordering.set(true);
        spawn_local(async move {
            let outcome = api::save_field_order(reordered).await;
            set_reordering.set(false);
            if !outcome.all_ok() {
                log::warn!("field order of client type {} saved partially: {}", id, outcome.summary());
                toast.error(outcome.summary());
            }
            load();
        });
    };

    let delete_field = move |field: ClientTypeField| {
        spawn_local(async move {
            match api::delete_field(field.id).await {
                Ok(()) => {
                    toast.success(format!("Поле «{}» удалено", field.field_label));
                    load();
                }
                Err(e) => toast.api_error("Не удалось удалить поле", &e),
            }
        });
    };

    let title = move || {
        client_type
            .get()
            .map(|t| format!("Поля типа «{}»", t.name))
            .unwrap_or_else(|| format!("Поля типа #{}", id))
    };

    view! {
        <PageFrame page_id="a001_client_type--detail" category=PAGE_CAT_DETAIL>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">{title}</h1>
                    <Badge>{move || fields.with(Vec::len).to_string()}</Badge>
                </div>
                <div class="page__header-right">
                    <Button appearance=ButtonAppearance::Primary on_click=move |_| form_field.set(Some(None))>
                        {icon("plus")}
                        " Поле"
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| load()
                        disabled=Signal::derive(move || loading.get())
                    >
                        {icon("refresh")}
                        " Обновить"
                    </Button>
                    <Button appearance=ButtonAppearance::Secondary on_click=move |_| on_close.run(())>
                        {icon("x")}
                        " Закрыть"
                    </Button>
                </div>
            </div>

            <div class="page__content">
                <div class="table-wrapper">
                    <Table attr:style="width: 100%;">
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell resizable=false min_width=80.0>"Порядок"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=180.0>"Подпись"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=140.0>"Имя"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=100.0>"Тип"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=220.0>"Свойства"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=160.0>"Значения"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=90.0></TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            {move || {
                                let list = fields.get();
                                let last = list.len().saturating_sub(1);
                                list.into_iter()
                                    .enumerate()
                                    .map(|(index, field)| {
                                        let for_edit = field.clone();
                                        let for_delete = field.clone();
                                        let values = field
                                            .list_values
                                            .iter()
                                            .map(|v| v.value.as_str())
                                            .collect::<Vec<_>>()
                                            .join(", ");
                                        let flags = flags_summary(&field);
                                        view! {
                                            <TableRow>
                                                <TableCell>
                                                    <Button
                                                        appearance=ButtonAppearance::Subtle
                                                        on_click=move |_| move_field(index, true)
                                                        disabled=Signal::derive(move || index == 0 || reordering.get())
                                                        attr:title="Выше"
                                                    >
                                                        {icon("arrow-up")}
                                                    </Button>
                                                    <Button
                                                        appearance=ButtonAppearance::Subtle
                                                        on_click=move |_| move_field(index, false)
                                                        disabled=Signal::derive(move || index == last || reordering.get())
                                                        attr:title="Ниже"
                                                    >
                                                        {icon("arrow-down")}
                                                    </Button>
                                                </TableCell>
                                                <TableCell>
                                                    <TableCellLayout truncate=true>{field.field_label.clone()}</TableCellLayout>
                                                </TableCell>
                                                <TableCell>
                                                    <TableCellLayout truncate=true>
                                                        <code>{field.field_name.clone()}</code>
                                                    </TableCellLayout>
                                                </TableCell>
                                                <TableCell>
                                                    <TableCellLayout>{field.field_type.display_name()}</TableCellLayout>
                                                </TableCell>
                                                <TableCell>
                                                    <TableCellLayout truncate=true>{flags}</TableCellLayout>
                                                </TableCell>
                                                <TableCell>
                                                    <TableCellLayout truncate=true>{values}</TableCellLayout>
                                                </TableCell>
                                                <TableCell>
                                                    <Button
                                                        appearance=ButtonAppearance::Subtle
                                                        on_click=move |_| form_field.set(Some(Some(for_edit.clone())))
                                                        attr:title="Редактировать"
                                                    >
                                                        {icon("edit")}
                                                    </Button>
                                                    <Button
                                                        appearance=ButtonAppearance::Subtle
                                                        on_click=move |_| delete_field(for_delete.clone())
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

                {move || form_field.get().map(|field| view! {
                    <FieldForm
                        client_type_id=id
                        field=field
                        next_order=fields.with_untracked(|f| f.len() as i32)
                        on_close=Callback::new(move |_| form_field.set(None))
                        on_saved=Callback::new(move |_| {
                            form_field.set(None);
                            load();
                        })
                    />
                })}
            </div>
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::shared::dynamic_form::FieldType;

    fn names(fields: &[ClientTypeField]) -> Vec<&str> {
        fields.iter().map(|f| f.field_name.as_str()).collect()
    }

    #[test]
    fn moves_within_bounds_only() {
        let fields = vec![
            ClientTypeField::new(1, "a", "A", FieldType::Text),
            ClientTypeField::new(2, "b", "B", FieldType::Text),
            ClientTypeField::new(3, "c", "C", FieldType::Text),
        ];
        assert_eq!(names(&moved(&fields, 1, true).unwrap()), vec!["b", "a", "c"]);
        assert_eq!(names(&moved(&fields, 1, false).unwrap()), vec!["a", "c", "b"]);
        assert!(moved(&fields, 0, true).is_none());
        assert!(moved(&fields, 2, false).is_none());
    }
}
