use contracts::domain::common::NameLookup;
use contracts::system::users::{CreateUserDto, UpdateUserDto, User, ROLES, STATUSES};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::shared::form_utils::non_empty;
use crate::shared::modal::Modal;
use crate::shared::toast::use_toast;
use crate::system::users::api;

enum SaveRequest {
    Create(CreateUserDto),
    Update(i64, UpdateUserDto),
}

/// Create (`user` is `None`) or edit a user.
#[component]
pub fn UserForm(
    user: Option<User>,
    branches: RwSignal<NameLookup>,
    on_close: Callback<()>,
    on_saved: Callback<()>,
) -> impl IntoView {
    let toast = use_toast();
    let editing_id = user.as_ref().map(|u| u.id);
    let title = match &user {
        Some(u) => format!("Редактирование: {}", u.login),
        None => "Новый пользователь".to_string(),
    };

    let login = RwSignal::new(user.as_ref().map(|u| u.login.clone()).unwrap_or_default());
    let full_name = RwSignal::new(
        user.as_ref()
            .and_then(|u| u.full_name.clone())
            .unwrap_or_default(),
    );
    let password = RwSignal::new(String::new());
    let role = RwSignal::new(
        user.as_ref()
            .map(|u| u.role.clone())
            .unwrap_or_else(|| ROLES[1].0.to_string()),
    );
    let status = RwSignal::new(
        user.as_ref()
            .map(|u| u.status.clone())
            .unwrap_or_else(|| STATUSES[0].0.to_string()),
    );
    let branch_id = RwSignal::new(user.as_ref().and_then(|u| u.branch_id));
    let (error, set_error) = signal::<Option<String>>(None);
    let (saving, set_saving) = signal(false);

    let on_save = move |_| {
        set_error.set(None);
        let branch = branch_id.get_untracked();

        let request = match editing_id {
            None => {
                let dto = CreateUserDto {
                    login: login.get_untracked().trim().to_string(),
                    password: password.get_untracked(),
                    full_name: non_empty(full_name.get_untracked()),
                    role: role.get_untracked(),
                    branch_id: branch,
                };
                if let Err(message) = dto.validate() {
                    set_error.set(Some(message));
                    return;
                }
                SaveRequest::Create(dto)
            }
            Some(id) => SaveRequest::Update(
                id,
                UpdateUserDto {
                    full_name: non_empty(full_name.get_untracked()),
                    role: role.get_untracked(),
                    status: status.get_untracked(),
                    branch_id: branch,
                    password: non_empty(password.get_untracked()),
                },
            ),
        };

        set_saving.set(true);
        spawn_local(async move {
            let response = match &request {
                SaveRequest::Create(dto) => api::create_user(dto).await,
                SaveRequest::Update(id, dto) => api::update_user(*id, dto).await,
            };
            set_saving.set(false);
            match response {
                Ok(()) => {
                    toast.success("Пользователь сохранён");
                    on_saved.run(());
                }
                Err(e) => set_error.set(Some(e.to_string())),
            }
        });
    };

    let branch_options = move || {
        let mut options: Vec<(i64, String)> = branches.get().into_iter().collect();
        options.sort_by(|a, b| a.1.cmp(&b.1));
        options
    };

    view! {
        <Modal title=title on_close=on_close>
            {move || error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

            <div class="form__group">
                <Label>"Логин"</Label>
                <Input value=login disabled=Signal::derive(move || editing_id.is_some() || saving.get()) />
            </div>

            <div class="form__group">
                <Label>"ФИО"</Label>
                <Input value=full_name disabled=Signal::derive(move || saving.get()) />
            </div>

            <div class="form__group">
                <Label>{if editing_id.is_some() { "Новый пароль" } else { "Пароль" }}</Label>
                <Input
                    value=password
                    input_type=InputType::Password
                    placeholder=if editing_id.is_some() { "Оставьте пустым, чтобы не менять" } else { "" }
                    disabled=Signal::derive(move || saving.get())
                />
            </div>

            <div class="form__group">
                <label class="form__label">"Роль"</label>
                <select class="form__select" on:change=move |ev| role.set(event_target_value(&ev))>
                    {ROLES
                        .iter()
                        .map(|&(code, label)| {
                            view! { <option value=code selected=move || role.get() == code>{label}</option> }
                        })
                        .collect_view()}
                </select>
            </div>

            <Show when=move || editing_id.is_some()>
                <div class="form__group">
                    <label class="form__label">"Статус"</label>
                    <select class="form__select" on:change=move |ev| status.set(event_target_value(&ev))>
                        {STATUSES
                            .iter()
                            .map(|&(code, label)| {
                                view! { <option value=code selected=move || status.get() == code>{label}</option> }
                            })
                            .collect_view()}
                    </select>
                </div>
            </Show>

            <div class="form__group">
                <label class="form__label">"Филиал"</label>
                <select
                    class="form__select"
                    on:change=move |ev| branch_id.set(event_target_value(&ev).parse().ok())
                >
                    <option value="" selected=move || branch_id.get().is_none()>"—"</option>
                    {move || {
                        branch_options()
                            .into_iter()
                            .map(|(id, name)| {
                                view! {
                                    <option value=id.to_string() selected=move || branch_id.get() == Some(id)>
                                        {name}
                                    </option>
                                }
                            })
                            .collect_view()
                    }}
                </select>
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
