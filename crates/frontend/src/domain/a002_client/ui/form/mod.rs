//! Create/edit modal of a client: company, source and the dynamic fields of
//! the selected client type.

use crate::domain::a002_client::api;
use crate::domain::a002_client::state::use_client_list_store;
use crate::shared::dynamic_form::{DynamicForm, JsPatternMatcher};
use crate::shared::modal::Modal;
use crate::shared::toast::use_toast;
use contracts::domain::a002_client::aggregate::{Client, CreateClient, UpdateClient};
use contracts::domain::a003_source::aggregate::Source;
use contracts::shared::dynamic_form::{build_create_controls, FormInputs};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

enum SaveRequest {
    Create(CreateClient),
    Update(i64, UpdateClient),
}

#[component]
pub fn ClientForm(
    /// `None` creates a client of the selected type.
    client: Option<Client>,
    #[prop(into)] sources: Signal<Vec<Source>>,
    on_close: Callback<()>,
    on_saved: Callback<()>,
) -> impl IntoView {
    let toast = use_toast();
    let store = use_client_list_store();
    let client_type = store.current_type();
    let fields = store.fields.get_untracked();
    let controls = build_create_controls(&fields);

    let editing_id = client.as_ref().map(|c| c.id);
    let type_id = client
        .as_ref()
        .map(|c| c.client_type_id)
        .or_else(|| client_type.as_ref().map(|t| t.id));
    let company_label = client_type
        .as_ref()
        .map(|t| t.company_label().to_string())
        .unwrap_or_else(|| "Компания".to_string());
    let title = match &client {
        Some(c) => format!("Редактирование: {}", c.company),
        None => match &client_type {
            Some(t) => format!("Новый клиент: {}", t.name),
            None => "Новый клиент".to_string(),
        },
    };

    let company = RwSignal::new(client.as_ref().map(|c| c.company.clone()).unwrap_or_default());
    let source_id = RwSignal::new(client.as_ref().and_then(|c| c.source_id));
    let is_active = RwSignal::new(client.as_ref().map(|c| c.is_active).unwrap_or(true));
    let inputs: RwSignal<FormInputs> = RwSignal::new(
        client
            .as_ref()
            .map(Client::to_form_inputs)
            .unwrap_or_default(),
    );
    let (error, set_error) = signal::<Option<String>>(None);
    let (saving, set_saving) = signal(false);
    let fields = StoredValue::new(fields);
    let company_label = StoredValue::new(company_label);

    let on_save = move |_| {
        let Some(type_id) = type_id else {
            set_error.set(Some("Не выбран тип клиента".to_string()));
            return;
        };
        let body = fields.with_value(|fields| {
            CreateClient::from_form(
                type_id,
                &company_label.get_value(),
                &company.get_untracked(),
                source_id.get_untracked(),
                fields,
                &inputs.get_untracked(),
                &JsPatternMatcher,
            )
        });
        let body = match body {
            Ok(body) => body,
            Err(e) => {
                set_error.set(Some(e.to_string()));
                return;
            }
        };
        let request = match editing_id {
            Some(id) => SaveRequest::Update(
                id,
                UpdateClient {
                    body,
                    is_active: is_active.get_untracked(),
                },
            ),
            None => SaveRequest::Create(body),
        };

        set_error.set(None);
        set_saving.set(true);
        spawn_local(async move {
            let response = match &request {
                SaveRequest::Create(body) => api::create_client(body).await,
                SaveRequest::Update(id, body) => api::update_client(*id, body).await,
            };
            set_saving.set(false);
            match response {
                Ok(()) => {
                    toast.success("Клиент сохранён");
                    on_saved.run(());
                }
                Err(e) => set_error.set(Some(e.to_string())),
            }
        });
    };

    view! {
        <Modal title=title on_close=on_close class="modal--wide">
            {move || error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

            <div class="form__row">
                <div class="form__group">
                    <Label>{format!("{} *", company_label.get_value())}</Label>
                    <Input value=company disabled=Signal::derive(move || saving.get()) />
                </div>
                <div class="form__group">
                    <label class="form__label">"Источник"</label>
                    <select
                        class="form__select"
                        on:change=move |ev| source_id.set(event_target_value(&ev).parse().ok())
                    >
                        <option value="" selected=move || source_id.get().is_none()>"—"</option>
                        {move || {
                            sources
                                .get()
                                .into_iter()
                                .map(|s| {
                                    let id = s.id;
                                    view! {
                                        <option value=id.to_string() selected=move || source_id.get() == Some(id)>
                                            {s.name}
                                        </option>
                                    }
                                })
                                .collect_view()
                        }}
                    </select>
                </div>
            </div>

            <DynamicForm controls=controls inputs=inputs />

            <Show when=move || editing_id.is_some()>
                <label class="form__checkbox">
                    <input
                        type="checkbox"
                        prop:checked=move || is_active.get()
                        on:change=move |ev| is_active.set(event_target_checked(&ev))
                    />
                    " Активен"
                </label>
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
