use crate::domain::a001_client_type::api;
use crate::shared::modal::Modal;
use crate::shared::toast::use_toast;
use contracts::domain::a001_client_type::aggregate::{ClientType, ClientTypeDto};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

/// Create (`client_type` is `None`) or rename a client type.
#[component]
pub fn ClientTypeForm(
    client_type: Option<ClientType>,
    on_close: Callback<()>,
    on_saved: Callback<()>,
) -> impl IntoView {
    let toast = use_toast();
    let editing_id = client_type.as_ref().map(|t| t.id);
    let initial = client_type
        .as_ref()
        .map(ClientTypeDto::from_client_type)
        .unwrap_or(ClientTypeDto {
            active: true,
            ..Default::default()
        });
    let title = match &client_type {
        Some(t) => format!("Тип клиента: {}", t.name),
        None => "Новый тип клиента".to_string(),
    };

    let name = RwSignal::new(initial.name.clone());
    let name_field_label = RwSignal::new(initial.name_field_label.clone().unwrap_or_default());
    let active = RwSignal::new(initial.active);
    let (error, set_error) = signal::<Option<String>>(None);
    let (saving, set_saving) = signal(false);

    let on_save = move |_| {
        let label = name_field_label.get_untracked().trim().to_string();
        let dto = ClientTypeDto {
            name: name.get_untracked().trim().to_string(),
            name_field_label: (!label.is_empty()).then_some(label),
            active: active.get_untracked(),
        };
        if let Err(message) = dto.validate() {
            set_error.set(Some(message));
            return;
        }
        set_error.set(None);
        set_saving.set(true);
        spawn_local(async move {
            let response = match editing_id {
                Some(id) => api::update_client_type(id, &dto).await,
                None => api::create_client_type(&dto).await,
            };
            set_saving.set(false);
            match response {
                Ok(()) => {
                    toast.success(format!("Тип клиента «{}» сохранён", dto.name));
                    on_saved.run(());
                }
                Err(e) => set_error.set(Some(e.to_string())),
            }
        });
    };

    view! {
        <Modal title=title on_close=on_close>
            {move || error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

            <div class="form__group">
                <Label>"Название"</Label>
                <Input value=name disabled=Signal::derive(move || saving.get()) />
            </div>

            <div class="form__group">
                <Label>"Подпись поля «Компания»"</Label>
                <Input
                    value=name_field_label
                    placeholder="Компания"
                    disabled=Signal::derive(move || saving.get())
                />
            </div>

            <div class="form__group form__group--inline">
                <label class="form__checkbox">
                    <input
                        type="checkbox"
                        prop:checked=move || active.get()
                        on:change=move |ev| active.set(event_target_checked(&ev))
                    />
                    " Активен"
                </label>
            </div>

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
