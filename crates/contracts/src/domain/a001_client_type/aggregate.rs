use crate::domain::common::{EntityId, Resource};
use crate::shared::dynamic_form::{ClientTypeField, FieldType};
use serde::{Deserialize, Serialize};

// ============================================================================
// Aggregate
// ============================================================================

/// Client type: the dynamic fields that drive the table, create form and
/// filters of its clients.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientType {
    pub id: EntityId,
    pub name: String,
    #[serde(default)]
    pub name_field_label: Option<String>,
    #[serde(default = "default_active")]
    pub active: bool,
    #[serde(default)]
    pub fields: Vec<ClientTypeField>,
}

fn default_active() -> bool {
    true
}

impl ClientType {
    /// Label of the `company` column and input.
    pub fn company_label(&self) -> &str {
        self.name_field_label
            .as_deref()
            .filter(|l| !l.trim().is_empty())
            .unwrap_or("Компания")
    }
}

impl Resource for ClientType {
    fn resource_index() -> &'static str {
        "a001"
    }

    fn endpoint() -> &'static str {
        "client-type"
    }

    fn element_name() -> &'static str {
        "Тип клиента"
    }

    fn list_name() -> &'static str {
        "Типы клиентов"
    }

    fn id(&self) -> EntityId {
        self.id
    }

    fn title(&self) -> String {
        self.name.clone()
    }
}

// ============================================================================
// Forms / DTOs
// ============================================================================

/// Body of POST/PUT `/client-type`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientTypeDto {
    pub name: String,
    pub name_field_label: Option<String>,
    pub active: bool,
}

impl ClientTypeDto {
    pub fn from_client_type(client_type: &ClientType) -> Self {
        Self {
            name: client_type.name.clone(),
            name_field_label: client_type.name_field_label.clone(),
            active: client_type.active,
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("Название типа клиента не может быть пустым".into());
        }
        Ok(())
    }
}

/// Body of POST `/client-type/{id}/field` and PUT `/client-type/field/{id}`.
///
/// List values are sent as plain strings; the backend assigns their ids.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientTypeFieldDto {
    pub field_name: String,
    pub field_label: String,
    pub field_type: FieldType,
    pub is_required: bool,
    pub is_searchable: bool,
    pub is_filterable: bool,
    pub is_visible_in_table: bool,
    pub is_visible_in_create: bool,
    pub display_order: i32,
    pub column_width: Option<u32>,
    pub validation_pattern: Option<String>,
    pub allow_multiple: bool,
    pub list_values: Vec<String>,
}

impl Default for ClientTypeFieldDto {
    fn default() -> Self {
        Self {
            field_name: String::new(),
            field_label: String::new(),
            field_type: FieldType::Text,
            is_required: false,
            is_searchable: false,
            is_filterable: false,
            is_visible_in_table: true,
            is_visible_in_create: true,
            display_order: 0,
            column_width: None,
            validation_pattern: None,
            allow_multiple: false,
            list_values: Vec::new(),
        }
    }
}

impl ClientTypeFieldDto {
    pub fn from_field(field: &ClientTypeField) -> Self {
        Self {
            field_name: field.field_name.clone(),
            field_label: field.field_label.clone(),
            field_type: field.field_type,
            is_required: field.is_required,
            is_searchable: field.is_searchable,
            is_filterable: field.is_filterable,
            is_visible_in_table: field.is_visible_in_table,
            is_visible_in_create: field.is_visible_in_create,
            display_order: field.display_order,
            column_width: field.column_width,
            validation_pattern: field.validation_pattern.clone(),
            allow_multiple: field.allow_multiple,
            list_values: field.list_values.iter().map(|v| v.value.clone()).collect(),
        }
    }

    /// Drop options that make no sense for the chosen type before sending.
    pub fn normalized(mut self) -> Self {
        self.field_name = self.field_name.trim().to_string();
        self.field_label = self.field_label.trim().to_string();
        if self.field_type != FieldType::List {
            self.list_values.clear();
        }
        if !self.field_type.supports_multiple() {
            self.allow_multiple = false;
        }
        self.list_values = self
            .list_values
            .into_iter()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .collect();
        self.validation_pattern = self.validation_pattern.filter(|p| !p.trim().is_empty());
        self
    }

    pub fn validate(&self) -> Result<(), String> {
        let name = self.field_name.trim();
        if name.is_empty() {
            return Err("Имя поля не может быть пустым".into());
        }
        let mut chars = name.chars();
        let starts_with_letter = chars.next().is_some_and(|c| c.is_ascii_alphabetic());
        if !starts_with_letter || !chars.all(|c| c.is_ascii_alphanumeric() || c == '_') {
            return Err("Имя поля: латинские буквы, цифры и _, начиная с буквы".into());
        }
        if self.field_label.trim().is_empty() {
            return Err("Подпись поля не может быть пустой".into());
        }
        if self.field_type == FieldType::List
            && self.list_values.iter().all(|v| v.trim().is_empty())
        {
            return Err("Для поля типа «Список» нужно хотя бы одно значение".into());
        }
        Ok(())
    }
}

/// Grant of client-type rights to a user (`/client-type/permission`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientTypePermission {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<EntityId>,
    pub user_id: EntityId,
    pub client_type_id: EntityId,
    #[serde(default)]
    pub can_view: bool,
    #[serde(default)]
    pub can_create: bool,
    #[serde(default)]
    pub can_edit: bool,
    #[serde(default)]
    pub can_delete: bool,
}

impl ClientTypePermission {
    pub fn empty(user_id: EntityId, client_type_id: EntityId) -> Self {
        Self {
            id: None,
            user_id,
            client_type_id,
            can_view: false,
            can_create: false,
            can_edit: false,
            can_delete: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::dynamic_form::ListValue;

    #[test]
    fn field_dto_normalization_and_validation() {
        let dto = ClientTypeFieldDto {
            field_name: " region ".into(),
            field_label: "Регион".into(),
            field_type: FieldType::Text,
            allow_multiple: true,
            list_values: vec!["Киев".into()],
            validation_pattern: Some("  ".into()),
            ..Default::default()
        }
        .normalized();
        assert_eq!(dto.field_name, "region");
        assert!(!dto.allow_multiple);
        assert!(dto.list_values.is_empty());
        assert_eq!(dto.validation_pattern, None);
        assert!(dto.validate().is_ok());

        let list = ClientTypeFieldDto {
            field_name: "region".into(),
            field_label: "Регион".into(),
            field_type: FieldType::List,
            ..Default::default()
        };
        assert!(list.validate().is_err());

        let bad_name = ClientTypeFieldDto {
            field_name: "1st".into(),
            field_label: "X".into(),
            ..Default::default()
        };
        assert!(bad_name.validate().is_err());
    }

    #[test]
    fn field_dto_from_schema_keeps_list_texts() {
        let field = ClientTypeField::new(12, "region", "Регион", FieldType::List)
            .multiple()
            .with_list_values(vec![ListValue::new(3, "Киев"), ListValue::new(4, "Львов")]);
        let dto = ClientTypeFieldDto::from_field(&field);
        assert_eq!(dto.list_values, vec!["Киев".to_string(), "Львов".to_string()]);
        assert!(dto.allow_multiple);
    }

    #[test]
    fn company_label_fallback() {
        let mut client_type: ClientType =
            serde_json::from_str(r#"{"id":5,"name":"Фермеры"}"#).unwrap();
        assert!(client_type.active);
        assert_eq!(client_type.company_label(), "Компания");
        client_type.name_field_label = Some("Хозяйство".into());
        assert_eq!(client_type.company_label(), "Хозяйство");
    }
}
