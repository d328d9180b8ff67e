//! Client-type rights grid: one row per client type for the selected user,
//! four rights per row.

use crate::domain::a001_client_type::api;
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_SYSTEM;
use crate::shared::toast::use_toast;
use crate::system::users::api::fetch_users;
use contracts::domain::a001_client_type::aggregate::{ClientType, ClientTypePermission};
use contracts::domain::common::{name_lookup, NameLookup};
use contracts::system::permissions::{diff_grid, grid_for_selection};
use contracts::system::users::User;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

#[derive(Clone, Copy)]
enum Right {
    View,
    Create,
    Edit,
    Delete,
}

impl Right {
    const ALL: [Right; 4] = [Right::View, Right::Create, Right::Edit, Right::Delete];

    fn label(self) -> &'static str {
        match self {
            Right::View => "Просмотр",
            Right::Create => "Создание",
            Right::Edit => "Изменение",
            Right::Delete => "Удаление",
        }
    }

    fn get(self, row: &ClientTypePermission) -> bool {
        match self {
            Right::View => row.can_view,
            Right::Create => row.can_create,
            Right::Edit => row.can_edit,
            Right::Delete => row.can_delete,
        }
    }

    fn set(self, row: &mut ClientTypePermission, value: bool) {
        match self {
            Right::View => row.can_view = value,
            Right::Create => row.can_create = value,
            Right::Edit => row.can_edit = value,
            Right::Delete => row.can_delete = value,
        }
    }
}

#[component]
pub fn ClientTypePermissions() -> impl IntoView {
    let toast = use_toast();
    let users: RwSignal<Vec<User>> = RwSignal::new(Vec::new());
    let client_types: RwSignal<Vec<ClientType>> = RwSignal::new(Vec::new());
    let selected_user: RwSignal<Option<i64>> = RwSignal::new(None);
    let original: RwSignal<Vec<ClientTypePermission>> = RwSignal::new(Vec::new());
    let grid: RwSignal<Vec<ClientTypePermission>> = RwSignal::new(Vec::new());
    let (saving, set_saving) = signal(false);

    Effect::new(move |_| {
        spawn_local(async move {
            match fetch_users().await {
                Ok(list) => users.set(list),
                Err(e) => toast.api_error("Не удалось загрузить пользователей", &e),
            }
        });
        spawn_local(async move {
            match api::load_client_types().await {
                Ok(list) => client_types.set(list),
                Err(e) => toast.api_error("Не удалось загрузить типы клиентов", &e),
            }
        });
    });

    let load_grid = move |user_id: i64| {
        spawn_local(async move {
            match api::fetch_permissions(user_id).await {
                Ok(stored) => {
                    let ids: Vec<i64> =
                        client_types.with_untracked(|t| t.iter().map(|x| x.id).collect());
                    let selected = selected_user.get_untracked();
                    let Some(rows) = grid_for_selection(selected, user_id, &ids, &stored) else {
                        log::debug!("permissions for user {} arrived after selection changed", user_id);
                        return;
                    };
                    original.set(rows.clone());
                    grid.set(rows);
                }
                Err(e) => toast.api_error("Не удалось загрузить права", &e),
            }
        });
    };

    Effect::new(move |_| {
        let count = client_types.with(Vec::len);
        if let (Some(user_id), true) = (selected_user.get(), count > 0) {
            load_grid(user_id);
        }
    });

    let set_right = move |index: usize, right: Right, value: bool| {
        grid.update(|rows| {
            if let Some(row) = rows.get_mut(index) {
                right.set(row, value);
            }
        });
    };

    // Granting any right implies view; revoking view revokes everything.
    let toggle = move |index: usize, right: Right, value: bool| {
        set_right(index, right, value);
        match (right, value) {
            (Right::View, false) => {
                for other in Right::ALL {
                    set_right(index, other, false);
                }
            }
            (_, true) => set_right(index, Right::View, true),
            _ => {}
        }
    };

    let save = move |_| {
        let Some(user_id) = selected_user.get_untracked() else {
            return;
        };
        let changes = diff_grid(&original.get_untracked(), &grid.get_untracked(), |p| p.id);
        if changes.is_empty() {
            toast.info("Изменений нет");
            return;
        }
        let lookup: NameLookup = client_types.with_untracked(|t| name_lookup(t));
        set_saving.set(true);
        spawn_local(async move {
            let outcome = api::save_permissions(changes, &lookup).await;
            set_saving.set(false);
            if outcome.all_ok() {
                toast.success(outcome.summary());
            } else {
                log::warn!("client type permissions saved partially: {}", outcome.summary());
                toast.error(outcome.summary());
            }
            load_grid(user_id);
        });
    };

    let type_name = move |client_type_id: i64| {
        client_types.with(|list| {
            list.iter()
                .find(|t| t.id == client_type_id)
                .map(|t| t.name.clone())
                .unwrap_or_else(|| format!("#{}", client_type_id))
        })
    };

    view! {
        <PageFrame page_id="a001_client_type_permissions--list" category=PAGE_CAT_SYSTEM>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Права на типы клиентов"</h1>
                </div>
                <div class="page__header-right">
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=save
                        disabled=Signal::derive(move || saving.get() || selected_user.get().is_none())
                    >
                        {icon("save")}
                        {move || if saving.get() { " Сохранение..." } else { " Сохранить" }}
                    </Button>
                </div>
            </div>

            <div class="page__content">
                <div class="form__group" style="max-width: 320px;">
                    <label class="form__label">"Пользователь"</label>
                    <select
                        class="form__select"
                        on:change=move |ev| selected_user.set(event_target_value(&ev).parse().ok())
                    >
                        <option value="" selected=move || selected_user.get().is_none()>"Выберите пользователя"</option>
                        {move || {
                            users
                                .get()
                                .into_iter()
                                .map(|u| {
                                    let id = u.id;
                                    view! {
                                        <option value=id.to_string() selected=move || selected_user.get() == Some(id)>
                                            {u.display_name()}
                                        </option>
                                    }
                                })
                                .collect_view()
                        }}
                    </select>
                </div>

                <Show when=move || selected_user.get().is_some()>
                    <div class="table-wrapper">
                        <Table attr:style="width: 100%;">
                            <TableHeader>
                                <TableRow>
                                    <TableHeaderCell resizable=false min_width=220.0>"Тип клиента"</TableHeaderCell>
                                    {Right::ALL
                                        .into_iter()
                                        .map(|right| view! {
                                            <TableHeaderCell resizable=false min_width=100.0>{right.label()}</TableHeaderCell>
                                        })
                                        .collect_view()}
                                </TableRow>
                            </TableHeader>
                            <TableBody>
                                {move || {
                                    grid.get()
                                        .into_iter()
                                        .enumerate()
                                        .map(|(index, row)| {
                                            let cells = Right::ALL
                                                .into_iter()
                                                .map(|right| {
                                                    let checked = right.get(&row);
                                                    view! {
                                                        <TableCell>
                                                            <input
                                                                type="checkbox"
                                                                prop:checked=checked
                                                                on:change=move |ev| toggle(index, right, event_target_checked(&ev))
                                                            />
                                                        </TableCell>
                                                    }
                                                })
                                                .collect_view();
                                            view! {
                                                <TableRow>
                                                    <TableCell>
                                                        <TableCellLayout truncate=true>{type_name(row.client_type_id)}</TableCellLayout>
                                                    </TableCell>
                                                    {cells}
                                                </TableRow>
                                            }
                                        })
                                        .collect_view()
                                }}
                            </TableBody>
                        </Table>
                    </div>
                </Show>
            </div>
        </PageFrame>
    }
}
