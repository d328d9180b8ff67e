mod state;

use contracts::shared::list_query::SortDirection;
use contracts::system::users::User;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use super::details::UserForm;
use crate::domain::lookups::load_lookup;
use crate::shared::components::{PaginationControls, SortableHeaderCell};
use crate::shared::icons::icon;
use crate::shared::list_utils::{compare_text, sort_list, SearchInput, Sortable};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_SYSTEM;
use crate::shared::toast::use_toast;
use crate::system::users::api;
use contracts::domain::a008_branch::aggregate::Branch;
use contracts::domain::common::{lookup_name, NameLookup};
use state::create_state;

impl Sortable for User {
    fn compare_by_field(&self, other: &Self, field: &str) -> std::cmp::Ordering {
        match field {
            "full_name" => compare_text(self.full_name.as_deref(), other.full_name.as_deref()),
            "role" => self.role_label().cmp(&other.role_label()),
            "status" => self.status.cmp(&other.status),
            _ => compare_text(Some(&self.login), Some(&other.login)),
        }
    }
}

fn matches_query(user: &User, query: &str) -> bool {
    query.is_empty()
        || user.login.to_lowercase().contains(query)
        || user
            .full_name
            .as_deref()
            .unwrap_or_default()
            .to_lowercase()
            .contains(query)
}

#[component]
pub fn UsersListPage() -> impl IntoView {
    let toast = use_toast();
    let state = create_state();
    let all_users: RwSignal<Vec<User>> = RwSignal::new(Vec::new());
    let branches: RwSignal<NameLookup> = RwSignal::new(NameLookup::new());
    let (loading, set_loading) = signal(false);
    // None: form closed; Some(None): create; Some(Some(user)): edit.
    let form_user: RwSignal<Option<Option<User>>> = RwSignal::new(None);

    let refresh_view = move || {
        let query = state.with_untracked(|s| s.search_query.to_lowercase());
        let mut data: Vec<User> = all_users
            .get_untracked()
            .into_iter()
            .filter(|u| matches_query(u, &query))
            .collect();
        state.update(|s| {
            sort_list(&mut data, &s.sort_field, s.sort_ascending);
            s.total_count = data.len();
            s.recalc_pagination();
            let start = s.page * s.page_size;
            let end = (start + s.page_size).min(data.len());
            s.items = data.get(start..end).unwrap_or(&[]).to_vec();
        });
    };

    let load_data = move || {
        set_loading.set(true);
        spawn_local(async move {
            match api::fetch_users().await {
                Ok(data) => {
                    all_users.set(data);
                    state.update(|s| s.is_loaded = true);
                    refresh_view();
                }
                Err(e) => toast.api_error("Не удалось загрузить пользователей", &e),
            }
            set_loading.set(false);
        });
    };

    Effect::new(move |_| {
        if !state.with_untracked(|s| s.is_loaded) {
            load_data();
            spawn_local(async move {
                match load_lookup::<Branch>().await {
                    Ok(lookup) => branches.set(lookup),
                    Err(e) => toast.api_error("Не удалось загрузить филиалы", &e),
                }
            });
        }
    });

    let on_search = Callback::new(move |query: String| {
        state.update(|s| {
            s.search_query = query;
            s.page = 0;
        });
        refresh_view();
    });

    let on_sort = Callback::new(move |field: String| {
        state.update(|s| {
            if s.sort_field == field {
                s.sort_ascending = !s.sort_ascending;
            } else {
                s.sort_field = field;
                s.sort_ascending = true;
            }
        });
        refresh_view();
    });

    let delete_user = move |user: User| {
        spawn_local(async move {
            match api::delete_user(user.id).await {
                Ok(()) => {
                    toast.success(format!("Пользователь {} удалён", user.login));
                    load_data();
                }
                Err(e) => toast.api_error("Не удалось удалить пользователя", &e),
            }
        });
    };

    let sort_field = Signal::derive(move || state.with(|s| s.sort_field.clone()));
    let direction = Signal::derive(move || {
        if state.with(|s| s.sort_ascending) {
            SortDirection::Asc
        } else {
            SortDirection::Desc
        }
    });

    view! {
        <PageFrame page_id="sys_users--list" category=PAGE_CAT_SYSTEM>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Пользователи"</h1>
                    <Badge>{move || state.with(|s| s.total_count).to_string()}</Badge>
                </div>
                <div class="page__header-right">
                    <Button appearance=ButtonAppearance::Primary on_click=move |_| form_user.set(Some(None))>
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
                <div class="filter-panel">
                    <div class="filter-panel-header">
                        <div class="filter-panel-header__left">
                            <SearchInput
                                initial=String::new()
                                on_change=on_search
                                placeholder="Логин или ФИО..."
                            />
                        </div>
                        <div class="filter-panel-header__center">
                            <PaginationControls
                                current_page=Signal::derive(move || state.with(|s| s.page))
                                total_pages=Signal::derive(move || state.with(|s| s.total_pages))
                                total_count=Signal::derive(move || state.with(|s| s.total_count as u64))
                                page_size=Signal::derive(move || state.with(|s| s.page_size))
                                on_page_change=Callback::new(move |page| {
                                    state.update(|s| s.page = page);
                                    refresh_view();
                                })
                                on_page_size_change=Callback::new(move |size| {
                                    state.update(|s| {
                                        s.page_size = size;
                                        s.page = 0;
                                    });
                                    refresh_view();
                                })
                            />
                        </div>
                    </div>
                </div>

                <div class="table-wrapper">
                    <Table attr:style="width: 100%;">
                        <TableHeader>
                            <TableRow>
                                <SortableHeaderCell label="Логин" sort_field=Some("login".to_string()) current_sort_field=sort_field direction=direction on_sort=on_sort min_width=140.0 />
                                <SortableHeaderCell label="ФИО" sort_field=Some("full_name".to_string()) current_sort_field=sort_field direction=direction on_sort=on_sort min_width=180.0 />
                                <SortableHeaderCell label="Роль" sort_field=Some("role".to_string()) current_sort_field=sort_field direction=direction on_sort=on_sort min_width=120.0 />
                                <SortableHeaderCell label="Статус" sort_field=Some("status".to_string()) current_sort_field=sort_field direction=direction on_sort=on_sort min_width=110.0 />
                                <TableHeaderCell resizable=false min_width=140.0>"Филиал"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=90.0></TableHeaderCell>
                            </TableRow>
                        </TableHeader>

                        <TableBody>
                            <For
                                each=move || state.with(|s| s.items.clone())
                                key=|u| (u.id, u.login.clone(), u.full_name.clone(), u.role.clone(), u.status.clone(), u.branch_id)
                                children=move |user| {
                                    let user_for_edit = user.clone();
                                    let user_for_delete = user.clone();
                                    let branch_id = user.branch_id;
                                    let status_class = if user.is_active() { "badge badge--success" } else { "badge badge--error" };
                                    let role_label = user.role_label();
                                    let status_label = user.status_label();
                                    view! {
                                        <TableRow>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    <span style="font-weight: 500;">{user.login.clone()}</span>
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>{user.full_name.clone().unwrap_or_default()}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{role_label}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>
                                                    <span class=status_class>{status_label}</span>
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    {move || branches.with(|b| lookup_name(b, branch_id))}
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <Button
                                                    appearance=ButtonAppearance::Subtle
                                                    on_click=move |_| form_user.set(Some(Some(user_for_edit.clone())))
                                                    attr:title="Редактировать"
                                                >
                                                    {icon("edit")}
                                                </Button>
                                                <Button
                                                    appearance=ButtonAppearance::Subtle
                                                    on_click=move |_| delete_user(user_for_delete.clone())
                                                    attr:title="Удалить"
                                                >
                                                    {icon("trash")}
                                                </Button>
                                            </TableCell>
                                        </TableRow>
                                    }
                                }
                            />
                        </TableBody>
                    </Table>
                </div>

                {move || form_user.get().map(|user| view! {
                    <UserForm
                        user=user
                        branches=branches
                        on_close=Callback::new(move |_| form_user.set(None))
                        on_saved=Callback::new(move |_| {
                            form_user.set(None);
                            load_data();
                        })
                    />
                })}
            </div>
        </PageFrame>
    }
}
