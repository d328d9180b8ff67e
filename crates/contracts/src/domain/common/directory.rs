//! Reference directories edited through the generic directory page.
//!
//! Each directory declares a static field schema; the dynamic form builder
//! renders its table and create/edit form from it and collects the request
//! body as a JSON object keyed by field name.

use super::EntityId;
use crate::shared::dynamic_form::{ClientTypeField, FieldType, ListValue};
use serde_json::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DirectoryKind {
    Source,
    Product,
    Container,
    Storage,
    WithdrawalReason,
    Carrier,
    Branch,
    Account,
    TransactionCategory,
    Counterparty,
}

fn options(codes: &[&str]) -> Vec<ListValue> {
    codes
        .iter()
        .enumerate()
        .map(|(i, code)| ListValue::new(i as i64 + 1, *code))
        .collect()
}

fn text(id: i64, name: &str, label: &str) -> ClientTypeField {
    ClientTypeField::new(id, name, label, FieldType::Text)
}

fn name_field() -> ClientTypeField {
    text(1, "name", "Название").required()
}

fn description_field() -> ClientTypeField {
    text(2, "description", "Описание")
}

impl DirectoryKind {
    pub fn all() -> [DirectoryKind; 10] {
        [
            Self::Source,
            Self::Product,
            Self::Container,
            Self::Storage,
            Self::WithdrawalReason,
            Self::Carrier,
            Self::Branch,
            Self::Account,
            Self::TransactionCategory,
            Self::Counterparty,
        ]
    }

    /// Endpoint path under `/api/v1`.
    pub fn endpoint(&self) -> &'static str {
        match self {
            Self::Source => "source",
            Self::Product => "product",
            Self::Container => "container",
            Self::Storage => "storage",
            Self::WithdrawalReason => "withdrawal-reason",
            Self::Carrier => "carrier",
            Self::Branch => "branch",
            Self::Account => "account",
            Self::TransactionCategory => "transaction-category",
            Self::Counterparty => "counterparty",
        }
    }

    pub fn list_name(&self) -> &'static str {
        match self {
            Self::Source => "Источники",
            Self::Product => "Товары",
            Self::Container => "Тара",
            Self::Storage => "Склады",
            Self::WithdrawalReason => "Причины списания",
            Self::Carrier => "Перевозчики",
            Self::Branch => "Филиалы",
            Self::Account => "Счета",
            Self::TransactionCategory => "Категории операций",
            Self::Counterparty => "Контрагенты",
        }
    }

    pub fn element_name(&self) -> &'static str {
        match self {
            Self::Source => "Источник",
            Self::Product => "Товар",
            Self::Container => "Тара",
            Self::Storage => "Склад",
            Self::WithdrawalReason => "Причина списания",
            Self::Carrier => "Перевозчик",
            Self::Branch => "Филиал",
            Self::Account => "Счёт",
            Self::TransactionCategory => "Категория операции",
            Self::Counterparty => "Контрагент",
        }
    }

    /// Tab key of the directory page.
    pub fn tab_key(&self) -> String {
        format!("directory_{}", self.endpoint())
    }

    pub fn from_tab_key(key: &str) -> Option<Self> {
        let endpoint = key.strip_prefix("directory_")?;
        Self::all().into_iter().find(|k| k.endpoint() == endpoint)
    }

    /// Field naming a record in lookups and titles.
    pub fn title_field(&self) -> &'static str {
        match self {
            Self::Carrier => "companyName",
            _ => "name",
        }
    }

    /// Authority required to see the directory in the menu.
    pub fn view_authority(&self) -> &'static str {
        match self {
            Self::Source | Self::Carrier | Self::Counterparty => "DIRECTORY_VIEW",
            Self::Product | Self::Container | Self::Storage | Self::WithdrawalReason => {
                "WAREHOUSE_VIEW"
            }
            Self::Branch | Self::Account | Self::TransactionCategory => "FINANCE_VIEW",
        }
    }

    pub fn fields(&self) -> Vec<ClientTypeField> {
        match self {
            Self::Source | Self::Container => vec![name_field()],
            Self::Product => vec![
                name_field(),
                ClientTypeField::new(2, "usage", "Использование", FieldType::List)
                    .required()
                    .with_list_values(options(&["PURCHASE", "SALE", "BOTH"])),
            ],
            Self::Storage | Self::Branch => vec![name_field(), description_field()],
            Self::WithdrawalReason => vec![
                name_field(),
                ClientTypeField::new(2, "purpose", "Назначение", FieldType::List)
                    .required()
                    .with_list_values(options(&["REMOVING", "ADDING", "BOTH"])),
            ],
            Self::Carrier => vec![
                text(1, "companyName", "Компания").required(),
                text(2, "registrationAddress", "Адрес регистрации"),
                ClientTypeField::new(3, "phoneNumbers", "Телефоны", FieldType::Phone).multiple(),
                text(4, "code", "Код"),
                text(5, "account", "Счёт"),
            ],
            Self::Account => vec![
                name_field(),
                ClientTypeField::new(2, "branchId", "ID филиала", FieldType::Number),
                ClientTypeField::new(3, "userId", "ID пользователя", FieldType::Number),
                ClientTypeField::new(4, "currencies", "Валюты", FieldType::List)
                    .multiple()
                    .with_list_values(options(&["UAH", "USD", "EUR"])),
            ],
            Self::TransactionCategory => vec![
                name_field(),
                ClientTypeField::new(2, "type", "Тип", FieldType::List)
                    .required()
                    .with_list_values(options(&["INCOME", "EXPENSE", "TRANSFER"])),
            ],
            Self::Counterparty => vec![
                name_field(),
                ClientTypeField::new(2, "type", "Тип", FieldType::List)
                    .required()
                    .with_list_values(options(&["CLIENT", "SUPPLIER", "OTHER"])),
            ],
        }
    }

    pub fn entry_id(&self, entry: &Value) -> Option<EntityId> {
        entry.get("id").and_then(Value::as_i64)
    }

    pub fn entry_title(&self, entry: &Value) -> String {
        entry
            .get(self.title_field())
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string()
    }
}

/// Cell text of a directory entry: arrays joined, booleans as Да/Нет.
pub fn entry_cell(entry: &Value, field_name: &str) -> String {
    fn scalar(value: &Value) -> String {
        match value {
            Value::String(s) => s.clone(),
            Value::Number(n) => n.to_string(),
            Value::Bool(true) => "Да".to_string(),
            Value::Bool(false) => "Нет".to_string(),
            Value::Null => String::new(),
            other => other.to_string(),
        }
    }

    match entry.get(field_name) {
        Some(Value::Array(items)) => items.iter().map(scalar).collect::<Vec<_>>().join(", "),
        Some(value) => scalar(value),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn tab_keys_round_trip() {
        for kind in DirectoryKind::all() {
            assert_eq!(DirectoryKind::from_tab_key(&kind.tab_key()), Some(kind));
            assert!(!kind.fields().is_empty());
        }
        assert_eq!(DirectoryKind::from_tab_key("directory_unknown"), None);
    }

    #[test]
    fn carrier_is_titled_by_company() {
        let entry = json!({"id": 4, "companyName": "Nova", "phoneNumbers": ["380501234567", "380671234567"]});
        let kind = DirectoryKind::Carrier;
        assert_eq!(kind.entry_id(&entry), Some(4));
        assert_eq!(kind.entry_title(&entry), "Nova");
        assert_eq!(
            entry_cell(&entry, "phoneNumbers"),
            "380501234567, 380671234567"
        );
        assert_eq!(entry_cell(&entry, "code"), "");
    }
}
