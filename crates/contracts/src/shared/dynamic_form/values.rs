use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Value of one dynamic field as submitted on client create/update.
///
/// Exactly one `value*` key is present, matching the field type.
/// `displayOrder` orders repeated values of multi-value fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    #[serde(rename_all = "camelCase")]
    Text {
        field_id: i64,
        value_text: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        display_order: Option<u32>,
    },
    #[serde(rename_all = "camelCase")]
    Number {
        field_id: i64,
        value_number: f64,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        display_order: Option<u32>,
    },
    #[serde(rename_all = "camelCase")]
    Date {
        field_id: i64,
        value_date: NaiveDate,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        display_order: Option<u32>,
    },
    #[serde(rename_all = "camelCase")]
    Boolean {
        field_id: i64,
        value_boolean: bool,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        display_order: Option<u32>,
    },
    #[serde(rename_all = "camelCase")]
    List {
        field_id: i64,
        value_list_id: i64,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        display_order: Option<u32>,
    },
}

impl FieldValue {
    pub fn field_id(&self) -> i64 {
        match self {
            FieldValue::Text { field_id, .. }
            | FieldValue::Number { field_id, .. }
            | FieldValue::Date { field_id, .. }
            | FieldValue::Boolean { field_id, .. }
            | FieldValue::List { field_id, .. } => *field_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn serializes_only_the_matching_value_key() {
        let value = FieldValue::List {
            field_id: 12,
            value_list_id: 3,
            display_order: Some(0),
        };
        assert_eq!(
            serde_json::to_value(&value).unwrap(),
            json!({"fieldId": 12, "valueListId": 3, "displayOrder": 0})
        );

        let value = FieldValue::Date {
            field_id: 4,
            value_date: NaiveDate::from_ymd_opt(2024, 3, 15).unwrap(),
            display_order: None,
        };
        assert_eq!(
            serde_json::to_value(&value).unwrap(),
            json!({"fieldId": 4, "valueDate": "2024-03-15"})
        );
    }

    #[test]
    fn deserializes_by_present_key() {
        let value: FieldValue =
            serde_json::from_value(json!({"fieldId": 7, "valueBoolean": true})).unwrap();
        assert_eq!(
            value,
            FieldValue::Boolean {
                field_id: 7,
                value_boolean: true,
                display_order: None
            }
        );
        assert_eq!(value.field_id(), 7);
    }
}
