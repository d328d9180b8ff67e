use crate::domain::a001_client_type::api;
use crate::shared::modal::Modal;
use crate::shared::toast::use_toast;
use contracts::domain::a001_client_type::aggregate::ClientTypeFieldDto;
use contracts::shared::dynamic_form::{ClientTypeField, FieldType};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

/// One option per non-empty line.
fn parse_list_values(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .map(str::to_string)
        .collect()
}

#[derive(Clone, Copy)]
enum Flag {
    Required,
    Searchable,
    Filterable,
    VisibleInTable,
    VisibleInCreate,
    AllowMultiple,
}

impl Flag {
    fn label(self) -> &'static str {
        match self {
            Flag::Required => "Обязательное",
            Flag::Searchable => "Участвует в поиске",
            Flag::Filterable => "Фильтр",
            Flag::VisibleInTable => "В таблице",
            Flag::VisibleInCreate => "В форме создания",
            Flag::AllowMultiple => "Несколько значений",
        }
    }

    fn get(self, dto: &ClientTypeFieldDto) -> bool {
        match self {
            Flag::Required => dto.is_required,
            Flag::Searchable => dto.is_searchable,
            Flag::Filterable => dto.is_filterable,
            Flag::VisibleInTable => dto.is_visible_in_table,
            Flag::VisibleInCreate => dto.is_visible_in_create,
            Flag::AllowMultiple => dto.allow_multiple,
        }
    }

    fn set(self, dto: &mut ClientTypeFieldDto, value: bool) {
        match self {
            Flag::Required => dto.is_required = value,
            Flag::Searchable => dto.is_searchable = value,
            Flag::Filterable => dto.is_filterable = value,
            Flag::VisibleInTable => dto.is_visible_in_table = value,
            Flag::VisibleInCreate => dto.is_visible_in_create = value,
            Flag::AllowMultiple => dto.allow_multiple = value,
        }
    }
}

/// Create (`field` is `None`) or edit one field of a client type.
#[component]
pub fn FieldForm(
    client_type_id: i64,
    field: Option<ClientTypeField>,
    /// Display order given to a new field.
    next_order: i32,
    on_close: Callback<()>,
    on_saved: Callback<()>,
) -> impl IntoView {
    let toast = use_toast();
    let editing_id = field.as_ref().map(|f| f.id);
    let title = match &field {
        Some(f) => format!("Поле: {}", f.field_label),
        None => "Новое поле".to_string(),
    };
    let initial = field
        .as_ref()
        .map(ClientTypeFieldDto::from_field)
        .unwrap_or(ClientTypeFieldDto {
            display_order: next_order,
            ..Default::default()
        });

    let draft = RwSignal::new(initial.clone());
    let field_name = RwSignal::new(initial.field_name.clone());
    let field_label = RwSignal::new(initial.field_label.clone());
    let column_width = RwSignal::new(
        initial
            .column_width
            .map(|w| w.to_string())
            .unwrap_or_default(),
    );
    let pattern = RwSignal::new(initial.validation_pattern.clone().unwrap_or_default());
    let list_text = RwSignal::new(initial.list_values.join("\n"));
    let (error, set_error) = signal::<Option<String>>(None);
    let (saving, set_saving) = signal(false);

    let field_type = Signal::derive(move || draft.with(|d| d.field_type));

    let on_save = move |_| {
        let mut dto = draft.get_untracked();
        dto.field_name = field_name.get_untracked();
        dto.field_label = field_label.get_untracked();
        dto.column_width = column_width.get_untracked().trim().parse().ok();
        dto.validation_pattern = Some(pattern.get_untracked());
        dto.list_values = parse_list_values(&list_text.get_untracked());
        let dto = dto.normalized();
        if let Err(message) = dto.validate() {
            set_error.set(Some(message));
            return;
        }
        set_error.set(None);
        set_saving.set(true);
        spawn_local(async move {
            let response = match editing_id {
                Some(id) => api::update_field(id, &dto).await,
                None => api::create_field(client_type_id, &dto).await,
            };
            set_saving.set(false);
            match response {
                Ok(()) => {
                    toast.success(format!("Поле «{}» сохранено", dto.field_label));
                    on_saved.run(());
                }
                Err(e) => set_error.set(Some(e.to_string())),
            }
        });
    };

    let flag_checkbox = move |flag: Flag| {
        view! {
            <label class="form__checkbox">
                <input
                    type="checkbox"
                    prop:checked=move || draft.with(|d| flag.get(d))
                    on:change=move |ev| {
                        let checked = event_target_checked(&ev);
                        draft.update(|d| flag.set(d, checked));
                    }
                />
                " "
                {flag.label()}
            </label>
        }
    };

    view! {
        <Modal title=title on_close=on_close class="modal--wide">
            {move || error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

            <div class="form__row">
                <div class="form__group">
                    <Label>"Имя (латиницей)"</Label>
                    <Input
                        value=field_name
                        placeholder="region"
                        disabled=Signal::derive(move || editing_id.is_some() || saving.get())
                    />
                </div>
                <div class="form__group">
                    <Label>"Подпись"</Label>
                    <Input value=field_label disabled=Signal::derive(move || saving.get()) />
                </div>
            </div>

            <div class="form__row">
                <div class="form__group">
                    <label class="form__label">"Тип"</label>
                    <select
                        class="form__select"
                        disabled=editing_id.is_some()
                        on:change=move |ev| {
                            if let Some(kind) = FieldType::parse(&event_target_value(&ev)) {
                                draft.update(|d| d.field_type = kind);
                            }
                        }
                    >
                        {FieldType::all()
                            .into_iter()
                            .map(|kind| {
                                view! {
                                    <option value=kind.as_str() selected=move || field_type.get() == kind>
                                        {kind.display_name()}
                                    </option>
                                }
                            })
                            .collect_view()}
                    </select>
                </div>
                <div class="form__group">
                    <Label>"Ширина колонки, px"</Label>
                    <Input value=column_width input_type=InputType::Number placeholder="200" />
                </div>
            </div>

            <div class="form__group">
                <Label>"Шаблон проверки (RegExp)"</Label>
                <Input value=pattern placeholder="[A-Z]{2}\\d{6}" />
            </div>

            <div class="form__checkbox-grid">
                {flag_checkbox(Flag::Required)}
                {flag_checkbox(Flag::Searchable)}
                {flag_checkbox(Flag::Filterable)}
                {flag_checkbox(Flag::VisibleInTable)}
                {flag_checkbox(Flag::VisibleInCreate)}
                <Show when=move || field_type.get().supports_multiple()>
                    {flag_checkbox(Flag::AllowMultiple)}
                </Show>
            </div>

            <Show when=move || field_type.get() == FieldType::List>
                <div class="form__group">
                    <label class="form__label">"Значения списка (по одному в строке)"</label>
                    <textarea
                        class="form__textarea"
                        rows="6"
                        prop:value=move || list_text.get()
                        on:input=move |ev| list_text.set(event_target_value(&ev))
                    ></textarea>
                </div>
            </Show>

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

    #[test]
    fn list_values_one_per_line() {
        assert_eq!(
            parse_list_values("Киев\n\n  Львов \r\nОдесса"),
            vec!["Киев", "Львов", "Одесса"]
        );
    }
}
