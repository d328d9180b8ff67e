//! Sidebar with collapsible menu groups. Items the session has no right to
//! see are left out.

use crate::layout::global_context::AppGlobalContext;
use crate::layout::tabs::tab_label_for_key;
use crate::shared::icons::icon;
use crate::system::session::use_session;
use contracts::domain::common::DirectoryKind;
use contracts::system::session::{Session, ADMINISTRATION};
use leptos::prelude::*;

#[derive(Clone, Debug, PartialEq)]
struct MenuItem {
    key: String,
    label: String,
    icon: &'static str,
    authority: &'static str,
}

impl MenuItem {
    fn new(key: &str, icon: &'static str, authority: &'static str) -> Self {
        Self {
            key: key.to_string(),
            label: tab_label_for_key(key),
            icon,
            authority,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
struct MenuGroup {
    id: &'static str,
    label: &'static str,
    icon: &'static str,
    items: Vec<MenuItem>,
}

fn directory_items(kinds: &[DirectoryKind]) -> Vec<MenuItem> {
    kinds
        .iter()
        .map(|k| MenuItem::new(&k.tab_key(), "list", k.view_authority()))
        .collect()
}

fn menu_groups() -> Vec<MenuGroup> {
    vec![
        MenuGroup {
            id: "clients",
            label: "Клиенты",
            icon: "clients",
            items: vec![
                MenuItem::new("a002_client", "clients", "CLIENT_VIEW"),
                MenuItem::new("a001_client_type", "list", "CLIENT_VIEW"),
                MenuItem::new("a001_client_type_permissions", "shield", ADMINISTRATION),
            ],
        },
        MenuGroup {
            id: "warehouse",
            label: "Склад",
            icon: "warehouse",
            items: vec![
                MenuItem::new("p900_stock_balance", "warehouse", "WAREHOUSE_VIEW"),
                MenuItem::new("a011_withdrawal", "list", "WAREHOUSE_VIEW"),
                MenuItem::new("a012_receipt", "list", "WAREHOUSE_VIEW"),
                MenuItem::new("a013_transfer", "list", "WAREHOUSE_VIEW"),
            ],
        },
        MenuGroup {
            id: "vehicles",
            label: "Транспорт",
            icon: "truck",
            items: vec![MenuItem::new("a010_vehicle", "truck", "VEHICLE_VIEW")],
        },
        MenuGroup {
            id: "references",
            label: "Справочники",
            icon: "database",
            items: directory_items(&DirectoryKind::all()),
        },
        MenuGroup {
            id: "settings",
            label: "Администрирование",
            icon: "settings",
            items: vec![
                MenuItem::new("sys_users", "user", ADMINISTRATION),
                MenuItem::new("sys_branch_permissions", "shield", ADMINISTRATION),
            ],
        },
    ]
}

/// Groups with only the items the session may see; empty groups are dropped.
fn visible_groups(session: &Session) -> Vec<MenuGroup> {
    menu_groups()
        .into_iter()
        .filter_map(|mut group| {
            group.items.retain(|item| session.can(item.authority));
            (!group.items.is_empty()).then_some(group)
        })
        .collect()
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let session = use_session();

    let expanded_groups = RwSignal::new(vec!["clients".to_string()]);

    view! {
        <div class="app-sidebar__content">
            {visible_groups(&session)
                .into_iter()
                .map(|group| {
                    let group_id = group.id.to_string();
                    let gid_click = group_id.clone();
                    let gid_chevron = group_id.clone();
                    let items = StoredValue::new(group.items);

                    view! {
                        <div>
                            <div
                                class="app-sidebar__item"
                                style:padding-left="12px"
                                on:click=move |_| {
                                    let gid = gid_click.clone();
                                    expanded_groups.update(move |items| {
                                        if let Some(pos) = items.iter().position(|x| x == &gid) {
                                            items.remove(pos);
                                        } else {
                                            items.push(gid);
                                        }
                                    });
                                }
                            >
                                <div class="app-sidebar__item-content">
                                    {icon(group.icon)}
                                    <span>{group.label}</span>
                                </div>
                                <div
                                    class="app-sidebar__chevron"
                                    class:app-sidebar__chevron--expanded=move || {
                                        expanded_groups.get().contains(&gid_chevron)
                                    }
                                >
                                    {icon("chevron-right")}
                                </div>
                            </div>

                            <Show when=move || expanded_groups.get().contains(&group_id)>
                                <div class="app-sidebar__children">
                                    {items
                                        .get_value()
                                        .into_iter()
                                        .map(|item| {
                                            let item = StoredValue::new(item);
                                            view! {
                                                <div
                                                    class="app-sidebar__item"
                                                    class:app-sidebar__item--active=move || {
                                                        ctx.active.get().as_deref()
                                                            == Some(item.with_value(|i| i.key.clone()).as_str())
                                                    }
                                                    style:padding-left="10px"
                                                    on:click=move |_| {
                                                        item.with_value(|i| ctx.open_tab(&i.key, &i.label))
                                                    }
                                                >
                                                    <div class="app-sidebar__item-content">
                                                        {icon(item.with_value(|i| i.icon))}
                                                        <span>{item.with_value(|i| i.label.clone())}</span>
                                                    </div>
                                                </div>
                                            }
                                        })
                                        .collect_view()}
                                </div>
                            </Show>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session(authorities: &[&str]) -> Session {
        Session {
            authorities: Some(authorities.iter().map(|a| a.to_string()).collect()),
            ..Session::default()
        }
    }

    #[test]
    fn hides_items_without_authority() {
        let groups = visible_groups(&session(&["WAREHOUSE_VIEW"]));
        let ids: Vec<&str> = groups.iter().map(|g| g.id).collect();
        assert_eq!(ids, vec!["warehouse", "references"]);

        let references = &groups[1];
        assert!(references
            .items
            .iter()
            .all(|i| i.authority == "WAREHOUSE_VIEW"));
    }

    #[test]
    fn administration_and_missing_authorities_show_everything() {
        let all = menu_groups().len();
        assert_eq!(visible_groups(&session(&[ADMINISTRATION])).len(), all);
        assert_eq!(visible_groups(&Session::default()).len(), all);
    }
}
