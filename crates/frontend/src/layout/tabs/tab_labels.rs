//! Tab titles, one place for every tab key.

use contracts::domain::common::DirectoryKind;

pub const CLIENT_TYPE_DETAILS_PREFIX: &str = "a001_client_type_details_";

/// Key of a per-record detail tab, e.g. `a001_client_type_details_5`.
pub fn detail_tab_key(prefix: &str, id: i64) -> String {
    format!("{}{}", prefix, id)
}

/// Readable title for a tab key. Falls back to the key itself.
pub fn tab_label_for_key(key: &str) -> String {
    if let Some(kind) = DirectoryKind::from_tab_key(key) {
        return kind.list_name().to_string();
    }
    if let Some(id) = key.strip_prefix(CLIENT_TYPE_DETAILS_PREFIX) {
        return format!("Тип клиента #{}", id);
    }

    match key {
        "a001_client_type" => "Типы клиентов",
        "a001_client_type_permissions" => "Доступ к типам клиентов",
        "a002_client" => "Клиенты",
        "a010_vehicle" => "Машины",
        "a011_withdrawal" => "Списания",
        "a012_receipt" => "Поступления",
        "a013_transfer" => "Переводы",
        "p900_stock_balance" => "Остатки на складах",
        "sys_users" => "Пользователи",
        "sys_branch_permissions" => "Доступ к филиалам",
        other => other,
    }
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_for_static_directory_and_detail_keys() {
        assert_eq!(tab_label_for_key("a002_client"), "Клиенты");
        assert_eq!(tab_label_for_key("directory_storage"), "Склады");
        assert_eq!(
            tab_label_for_key(&detail_tab_key(CLIENT_TYPE_DETAILS_PREFIX, 5)),
            "Тип клиента #5"
        );
        assert_eq!(tab_label_for_key("unknown"), "unknown");
    }
}
