//! tab.key → View. Every tab key is resolved here.

use super::tab_labels::CLIENT_TYPE_DETAILS_PREFIX;
use crate::domain::a001_client_type::ui::details::ClientTypeDetails;
use crate::domain::a001_client_type::ui::list::ClientTypeList;
use crate::domain::a001_client_type::ui::permissions::ClientTypePermissions;
use crate::domain::a002_client::ui::list::ClientList;
use crate::domain::a010_vehicle::ui::list::VehicleList;
use crate::domain::a011_withdrawal::ui::list::WithdrawalList;
use crate::domain::a012_receipt::ui::list::ReceiptList;
use crate::domain::a013_transfer::ui::list::TransferList;
use crate::domain::directories::ui::DirectoryPage;
use crate::layout::global_context::AppGlobalContext;
use crate::projections::p900_stock_balance::ui::list::StockBalanceList;
use crate::system::branch_permissions::ui::BranchPermissionsPage;
use crate::system::users::ui::list::UsersListPage;
use contracts::domain::common::DirectoryKind;
use leptos::prelude::*;

/// Content of the tab with the given key, or a placeholder for unknown keys.
pub fn render_tab_content(key: &str, tabs_store: AppGlobalContext) -> AnyView {
    if let Some(kind) = DirectoryKind::from_tab_key(key) {
        return view! { <DirectoryPage kind=kind /> }.into_any();
    }

    if let Some(id) = key
        .strip_prefix(CLIENT_TYPE_DETAILS_PREFIX)
        .and_then(|id| id.parse::<i64>().ok())
    {
        let key_for_close = key.to_string();
        return view! {
            <ClientTypeDetails
                id=id
                on_close=Callback::new(move |_| tabs_store.close_tab(&key_for_close))
            />
        }
        .into_any();
    }

    match key {
        "a001_client_type" => view! { <ClientTypeList /> }.into_any(),
        "a001_client_type_permissions" => view! { <ClientTypePermissions /> }.into_any(),
        "a002_client" => view! { <ClientList /> }.into_any(),
        "a010_vehicle" => view! { <VehicleList /> }.into_any(),
        "a011_withdrawal" => view! { <WithdrawalList /> }.into_any(),
        "a012_receipt" => view! { <ReceiptList /> }.into_any(),
        "a013_transfer" => view! { <TransferList /> }.into_any(),
        "p900_stock_balance" => view! { <StockBalanceList /> }.into_any(),
        "sys_users" => view! { <UsersListPage /> }.into_any(),
        "sys_branch_permissions" => view! { <BranchPermissionsPage /> }.into_any(),
        other => {
            log::warn!("unknown tab key '{}'", other);
            view! { <div class="page">{format!("Неизвестная вкладка: {}", other)}</div> }.into_any()
        }
    }
}
