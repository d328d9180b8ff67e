//! Field schema of a client type, as served by `/client-type/{id}/field`.
//!
//! The same schema type describes the static forms of reference directories,
//! so one builder renders both.

use super::field_type::FieldType;
use serde::{Deserialize, Serialize};

pub const DEFAULT_COLUMN_WIDTH: u32 = 200;

/// Option of a LIST field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListValue {
    pub id: i64,
    pub value: String,
}

impl ListValue {
    pub fn new(id: i64, value: impl Into<String>) -> Self {
        Self {
            id,
            value: value.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientTypeField {
    pub id: i64,
    pub field_name: String,
    pub field_label: String,
    pub field_type: FieldType,
    #[serde(default)]
    pub is_required: bool,
    #[serde(default)]
    pub is_searchable: bool,
    #[serde(default)]
    pub is_filterable: bool,
    #[serde(default)]
    pub is_visible_in_table: bool,
    #[serde(default)]
    pub is_visible_in_create: bool,
    #[serde(default)]
    pub display_order: i32,
    #[serde(default)]
    pub column_width: Option<u32>,
    #[serde(default)]
    pub validation_pattern: Option<String>,
    #[serde(default)]
    pub allow_multiple: bool,
    #[serde(default)]
    pub list_values: Vec<ListValue>,
}

impl ClientTypeField {
    /// Field visible in table and create form, not filterable.
    pub fn new(
        id: i64,
        field_name: impl Into<String>,
        field_label: impl Into<String>,
        field_type: FieldType,
    ) -> Self {
        Self {
            id,
            field_name: field_name.into(),
            field_label: field_label.into(),
            field_type,
            is_required: false,
            is_searchable: false,
            is_filterable: false,
            is_visible_in_table: true,
            is_visible_in_create: true,
            display_order: id as i32,
            column_width: None,
            validation_pattern: None,
            allow_multiple: false,
            list_values: Vec::new(),
        }
    }

    pub fn required(mut self) -> Self {
        self.is_required = true;
        self
    }

    pub fn filterable(mut self) -> Self {
        self.is_filterable = true;
        self
    }

    pub fn multiple(mut self) -> Self {
        self.allow_multiple = true;
        self
    }

    pub fn with_list_values(mut self, values: Vec<ListValue>) -> Self {
        self.list_values = values;
        self
    }

    pub fn column_width_px(&self) -> u32 {
        self.column_width
            .filter(|w| *w > 0)
            .unwrap_or(DEFAULT_COLUMN_WIDTH)
    }

    /// Multiple values only apply to LIST and PHONE.
    pub fn is_multi_value(&self) -> bool {
        self.allow_multiple && self.field_type.supports_multiple()
    }

    pub fn list_value(&self, id: i64) -> Option<&ListValue> {
        self.list_values.iter().find(|v| v.id == id)
    }

    pub fn list_value_by_text(&self, text: &str) -> Option<&ListValue> {
        self.list_values.iter().find(|v| v.value == text)
    }
}

/// Fields ordered by `displayOrder`, ties broken by id.
pub fn sorted_fields<'a, I>(fields: I) -> Vec<&'a ClientTypeField>
where
    I: IntoIterator<Item = &'a ClientTypeField>,
{
    let mut out: Vec<&ClientTypeField> = fields.into_iter().collect();
    out.sort_by_key(|f| (f.display_order, f.id));
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_backend_shape() {
        let json = r#"{
            "id": 12,
            "fieldName": "region",
            "fieldLabel": "Регион",
            "fieldType": "LIST",
            "isRequired": true,
            "isSearchable": false,
            "isFilterable": true,
            "isVisibleInTable": true,
            "isVisibleInCreate": true,
            "displayOrder": 3,
            "columnWidth": 150,
            "validationPattern": null,
            "allowMultiple": false,
            "listValues": [{"id": 3, "value": "Киев"}, {"id": 4, "value": "Львов"}]
        }"#;
        let field: ClientTypeField = serde_json::from_str(json).unwrap();
        assert_eq!(field.field_type, FieldType::List);
        assert_eq!(field.column_width_px(), 150);
        assert_eq!(field.list_value(4).map(|v| v.value.as_str()), Some("Львов"));
    }

    #[test]
    fn missing_flags_default_to_false() {
        let json = r#"{"id":1,"fieldName":"note","fieldLabel":"Заметка","fieldType":"TEXT"}"#;
        let field: ClientTypeField = serde_json::from_str(json).unwrap();
        assert!(!field.is_visible_in_table);
        assert_eq!(field.column_width_px(), DEFAULT_COLUMN_WIDTH);
    }

    #[test]
    fn sorts_by_display_order_then_id() {
        let mut a = ClientTypeField::new(5, "a", "A", FieldType::Text);
        a.display_order = 2;
        let mut b = ClientTypeField::new(3, "b", "B", FieldType::Text);
        b.display_order = 1;
        let mut c = ClientTypeField::new(1, "c", "C", FieldType::Text);
        c.display_order = 2;
        let fields = vec![a, b, c];

        let names: Vec<&str> = sorted_fields(&fields)
            .into_iter()
            .map(|f| f.field_name.as_str())
            .collect();
        assert_eq!(names, vec!["b", "c", "a"]);
    }

    #[test]
    fn multiple_only_for_list_and_phone() {
        let text = ClientTypeField::new(1, "t", "T", FieldType::Text).multiple();
        let phone = ClientTypeField::new(2, "p", "P", FieldType::Phone).multiple();
        assert!(!text.is_multi_value());
        assert!(phone.is_multi_value());
    }
}
