//! Branch access grid: one row per branch for the selected user.

use super::api;
use crate::domain::lookups::load_all;
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_SYSTEM;
use crate::shared::toast::use_toast;
use crate::system::users::api::fetch_users;
use contracts::domain::a008_branch::aggregate::Branch;
use contracts::domain::common::{name_lookup, NameLookup, Resource};
use contracts::system::permissions::{diff_grid, grid_for_selection, BranchPermission};
use contracts::system::users::User;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

#[component]
pub fn BranchPermissionsPage() -> impl IntoView {
    let toast = use_toast();
    let users: RwSignal<Vec<User>> = RwSignal::new(Vec::new());
    let branches: RwSignal<Vec<Branch>> = RwSignal::new(Vec::new());
    let selected_user: RwSignal<Option<i64>> = RwSignal::new(None);
    let original: RwSignal<Vec<BranchPermission>> = RwSignal::new(Vec::new());
    let grid: RwSignal<Vec<BranchPermission>> = RwSignal::new(Vec::new());
    let (saving, set_saving) = signal(false);

    Effect::new(move |_| {
        spawn_local(async move {
            match fetch_users().await {
                Ok(list) => users.set(list),
                Err(e) => toast.api_error("Не удалось загрузить пользователей", &e),
            }
        });
        spawn_local(async move {
            match load_all::<Branch>().await {
                Ok(list) => branches.set(list),
                Err(e) => toast.api_error("Не удалось загрузить филиалы", &e),
            }
        });
    });

    let load_grid = move |user_id: i64| {
        spawn_local(async move {
            match api::fetch_for_user(user_id).await {
                Ok(stored) => {
                    let ids: Vec<i64> = branches.with_untracked(|b| b.iter().map(|x| x.id()).collect());
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

    // Rebuild once branches arrive or the user changes.
    Effect::new(move |_| {
        let count = branches.with(Vec::len);
        if let (Some(user_id), true) = (selected_user.get(), count > 0) {
            load_grid(user_id);
        }
    });

    let set_flag = move |index: usize, operate: bool, value: bool| {
        grid.update(|rows| {
            if let Some(row) = rows.get_mut(index) {
                if operate {
                    row.can_operate = value;
                } else {
                    row.can_view = value;
                }
            }
        });
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
        let lookup: NameLookup = branches.with_untracked(|b| name_lookup(b));
        set_saving.set(true);
        spawn_local(async move {
            let outcome = api::save_changes(changes, &lookup).await;
            set_saving.set(false);
            if outcome.all_ok() {
                toast.success(outcome.summary());
            } else {
                log::warn!("branch permissions saved partially: {}", outcome.summary());
                toast.error(outcome.summary());
            }
            load_grid(user_id);
        });
    };

    let branch_name = move |branch_id: i64| {
        branches.with(|list| {
            list.iter()
                .find(|b| b.id() == branch_id)
                .map(|b| b.title())
                .unwrap_or_else(|| format!("#{}", branch_id))
        })
    };

    view! {
        <PageFrame page_id="sys_branch_permissions--list" category=PAGE_CAT_SYSTEM>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Доступ к филиалам"</h1>
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
                                    <TableHeaderCell resizable=false min_width=220.0>"Филиал"</TableHeaderCell>
                                    <TableHeaderCell resizable=false min_width=100.0>"Просмотр"</TableHeaderCell>
                                    <TableHeaderCell resizable=false min_width=100.0>"Операции"</TableHeaderCell>
                                </TableRow>
                            </TableHeader>
                            <TableBody>
                                {move || {
                                    grid.get()
                                        .into_iter()
                                        .enumerate()
                                        .map(|(index, row)| {
                                            view! {
                                                <TableRow>
                                                    <TableCell>
                                                        <TableCellLayout truncate=true>{branch_name(row.branch_id)}</TableCellLayout>
                                                    </TableCell>
                                                    <TableCell>
                                                        <input
                                                            type="checkbox"
                                                            prop:checked=row.can_view
                                                            on:change=move |ev| set_flag(index, false, event_target_checked(&ev))
                                                        />
                                                    </TableCell>
                                                    <TableCell>
                                                        <input
                                                            type="checkbox"
                                                            prop:checked=row.can_operate
                                                            on:change=move |ev| set_flag(index, true, event_target_checked(&ev))
                                                        />
                                                    </TableCell>
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
