//! Create/edit form model and value collection.
//!
//! The frontend keeps raw form state as `FormInputs` (field id → entered
//! strings) and renders one widget per `FormControl`. On submit the raw
//! strings are turned into typed `FieldValue`s (client forms) or into a JSON
//! object keyed by field name (directory forms).

use super::field_type::FieldType;
use super::schema::{sorted_fields, ClientTypeField};
use super::values::FieldValue;
use crate::shared::phone::{normalize_phone, split_phone_input};
use crate::shared::validation::{FieldError, PatternMatcher};
use chrono::NaiveDate;
use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// Raw form state: field id → entered strings.
///
/// LIST inputs hold list value ids; BOOLEAN inputs hold `"true"`/`"false"`.
pub type FormInputs = BTreeMap<i64, Vec<String>>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ControlKind {
    Text,
    Number,
    Date,
    Checkbox,
    Select {
        options: Vec<SelectOption>,
        multiple: bool,
    },
    /// Several numbers may be typed comma-separated when `multiple`.
    Phone { multiple: bool },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormControl {
    pub field_id: i64,
    pub name: String,
    pub label: String,
    pub required: bool,
    pub pattern: Option<String>,
    pub kind: ControlKind,
}

pub fn list_options(field: &ClientTypeField) -> Vec<SelectOption> {
    field
        .list_values
        .iter()
        .map(|v| SelectOption {
            value: v.id.to_string(),
            label: v.value.clone(),
        })
        .collect()
}

fn control_kind(field: &ClientTypeField) -> ControlKind {
    match field.field_type {
        FieldType::Text => ControlKind::Text,
        FieldType::Number => ControlKind::Number,
        FieldType::Date => ControlKind::Date,
        FieldType::Boolean => ControlKind::Checkbox,
        FieldType::List => ControlKind::Select {
            options: list_options(field),
            multiple: field.allow_multiple,
        },
        FieldType::Phone => ControlKind::Phone {
            multiple: field.allow_multiple,
        },
    }
}

/// One control per field with `isVisibleInCreate`, in display order.
pub fn build_create_controls(fields: &[ClientTypeField]) -> Vec<FormControl> {
    sorted_fields(fields.iter().filter(|f| f.is_visible_in_create))
        .into_iter()
        .map(|f| FormControl {
            field_id: f.id,
            name: f.field_name.clone(),
            label: f.field_label.clone(),
            required: f.is_required,
            pattern: f.validation_pattern.clone().filter(|p| !p.is_empty()),
            kind: control_kind(f),
        })
        .collect()
}

// ============================================================================
// Raw input → typed values
// ============================================================================

/// Non-empty trimmed inputs of a field; multi-value phones are split on commas.
fn raw_values(field: &ClientTypeField, inputs: &FormInputs) -> Vec<String> {
    let entered = inputs.get(&field.id).cloned().unwrap_or_default();
    let mut values: Vec<String> = if field.field_type == FieldType::Phone && field.allow_multiple {
        entered.iter().flat_map(|v| split_phone_input(v)).collect()
    } else {
        entered
            .into_iter()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .collect()
    };

    if !field.is_multi_value() {
        values.truncate(1);
    }
    values
}

fn check_pattern(
    field: &ClientTypeField,
    value: &str,
    matcher: &dyn PatternMatcher,
) -> Result<(), FieldError> {
    match field.validation_pattern.as_deref() {
        Some(pattern) if !pattern.is_empty() && !matcher.is_match(pattern, value) => {
            Err(FieldError::PatternMismatch {
                label: field.field_label.clone(),
            })
        }
        _ => Ok(()),
    }
}

fn parse_number(field: &ClientTypeField, raw: &str) -> Result<f64, FieldError> {
    raw.replace(',', ".")
        .parse::<f64>()
        .ok()
        .filter(|n| n.is_finite())
        .ok_or_else(|| FieldError::InvalidNumber {
            label: field.field_label.clone(),
            value: raw.to_string(),
        })
}

fn parse_date(field: &ClientTypeField, raw: &str) -> Result<NaiveDate, FieldError> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").map_err(|_| FieldError::InvalidDate {
        label: field.field_label.clone(),
        value: raw.to_string(),
    })
}

fn parse_bool(raw: &str) -> bool {
    matches!(raw, "true" | "on" | "1")
}

fn parse_list_id(field: &ClientTypeField, raw: &str) -> Result<i64, FieldError> {
    raw.parse::<i64>()
        .ok()
        .filter(|id| field.list_value(*id).is_some())
        .ok_or_else(|| FieldError::UnknownListValue {
            label: field.field_label.clone(),
            value: raw.to_string(),
        })
}

fn parse_phone(
    field: &ClientTypeField,
    raw: &str,
    matcher: &dyn PatternMatcher,
) -> Result<String, FieldError> {
    let phone = normalize_phone(raw).ok_or_else(|| FieldError::InvalidPhone {
        label: field.field_label.clone(),
        value: raw.to_string(),
    })?;
    check_pattern(field, &phone, matcher)?;
    Ok(phone)
}

fn to_field_value(
    field: &ClientTypeField,
    raw: &str,
    order: u32,
    matcher: &dyn PatternMatcher,
) -> Result<FieldValue, FieldError> {
    let display_order = Some(order);
    let value = match field.field_type {
        FieldType::Text => {
            check_pattern(field, raw, matcher)?;
            FieldValue::Text {
                field_id: field.id,
                value_text: raw.to_string(),
                display_order,
            }
        }
        FieldType::Number => FieldValue::Number {
            field_id: field.id,
            value_number: parse_number(field, raw)?,
            display_order,
        },
        FieldType::Date => FieldValue::Date {
            field_id: field.id,
            value_date: parse_date(field, raw)?,
            display_order,
        },
        FieldType::Boolean => FieldValue::Boolean {
            field_id: field.id,
            value_boolean: parse_bool(raw),
            display_order,
        },
        FieldType::List => FieldValue::List {
            field_id: field.id,
            value_list_id: parse_list_id(field, raw)?,
            display_order,
        },
        FieldType::Phone => FieldValue::Text {
            field_id: field.id,
            value_text: parse_phone(field, raw, matcher)?,
            display_order,
        },
    };
    Ok(value)
}

/// Collect typed values for every field visible in the create form.
///
/// Fails on the first invalid field. Empty optional fields are skipped.
pub fn collect_field_values(
    fields: &[ClientTypeField],
    inputs: &FormInputs,
    matcher: &dyn PatternMatcher,
) -> Result<Vec<FieldValue>, FieldError> {
    let mut out = Vec::new();

    for field in sorted_fields(fields.iter().filter(|f| f.is_visible_in_create)) {
        let values = raw_values(field, inputs);
        if values.is_empty() {
            if field.is_required && field.field_type != FieldType::Boolean {
                return Err(FieldError::Required {
                    label: field.field_label.clone(),
                });
            }
            continue;
        }

        for (order, raw) in values.iter().enumerate() {
            out.push(to_field_value(field, raw, order as u32, matcher)?);
        }
    }

    Ok(out)
}

fn to_json_value(
    field: &ClientTypeField,
    raw: &str,
    matcher: &dyn PatternMatcher,
) -> Result<Value, FieldError> {
    let value = match field.field_type {
        FieldType::Text => {
            check_pattern(field, raw, matcher)?;
            Value::String(raw.to_string())
        }
        FieldType::Number => number_to_json(parse_number(field, raw)?),
        FieldType::Date => Value::String(parse_date(field, raw)?.format("%Y-%m-%d").to_string()),
        FieldType::Boolean => Value::Bool(parse_bool(raw)),
        FieldType::List => {
            let id = parse_list_id(field, raw)?;
            let text = field
                .list_value(id)
                .map(|v| v.value.clone())
                .unwrap_or_default();
            Value::String(text)
        }
        FieldType::Phone => Value::String(parse_phone(field, raw, matcher)?),
    };
    Ok(value)
}

/// Whole numbers are sent as integers so id-like fields deserialize as longs.
fn number_to_json(n: f64) -> Value {
    if n.fract() == 0.0 && n.abs() < 9.0e15 {
        Value::from(n as i64)
    } else {
        serde_json::Number::from_f64(n)
            .map(Value::Number)
            .unwrap_or(Value::Null)
    }
}

/// Collect a JSON object keyed by `fieldName`, used as a directory request body.
///
/// LIST values are sent as their text; multi-value fields become arrays;
/// empty optional fields become `null`.
pub fn collect_object(
    fields: &[ClientTypeField],
    inputs: &FormInputs,
    matcher: &dyn PatternMatcher,
) -> Result<Map<String, Value>, FieldError> {
    let mut out = Map::new();

    for field in sorted_fields(fields.iter().filter(|f| f.is_visible_in_create)) {
        let values = raw_values(field, inputs);
        if values.is_empty() && field.is_required && field.field_type != FieldType::Boolean {
            return Err(FieldError::Required {
                label: field.field_label.clone(),
            });
        }

        let json = if field.is_multi_value() {
            Value::Array(
                values
                    .iter()
                    .map(|raw| to_json_value(field, raw, matcher))
                    .collect::<Result<Vec<_>, _>>()?,
            )
        } else if let Some(raw) = values.first() {
            to_json_value(field, raw, matcher)?
        } else if field.field_type == FieldType::Boolean {
            Value::Bool(false)
        } else {
            Value::Null
        };

        out.insert(field.field_name.clone(), json);
    }

    Ok(out)
}

/// Prefill form inputs from an existing JSON object (directory edit).
pub fn inputs_from_object(fields: &[ClientTypeField], object: &Value) -> FormInputs {
    let mut inputs = FormInputs::new();

    for field in fields {
        let Some(value) = object.get(&field.field_name) else {
            continue;
        };
        let items: Vec<&Value> = match value {
            Value::Array(items) => items.iter().collect(),
            Value::Null => Vec::new(),
            other => vec![other],
        };

        let raw: Vec<String> = items
            .into_iter()
            .filter_map(|v| match (field.field_type, v) {
                (FieldType::List, Value::String(s)) => {
                    field.list_value_by_text(s).map(|lv| lv.id.to_string())
                }
                (_, Value::String(s)) => Some(s.clone()),
                (_, Value::Number(n)) => Some(n.to_string()),
                (_, Value::Bool(b)) => Some(b.to_string()),
                _ => None,
            })
            .collect();

        if !raw.is_empty() {
            inputs.insert(field.id, raw);
        }
    }

    inputs
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::dynamic_form::schema::ListValue;
    use crate::shared::validation::AcceptAll;
    use serde_json::json;

    struct DigitsOnly;

    impl PatternMatcher for DigitsOnly {
        fn is_match(&self, _pattern: &str, value: &str) -> bool {
            value.chars().all(|c| c.is_ascii_digit())
        }
    }

    fn phone_field() -> ClientTypeField {
        ClientTypeField::new(20, "phones", "Телефоны", FieldType::Phone).multiple()
    }

    fn region_field() -> ClientTypeField {
        ClientTypeField::new(12, "region", "Регион", FieldType::List)
            .with_list_values(vec![ListValue::new(3, "Киев"), ListValue::new(4, "Львов")])
    }

    #[test]
    fn multi_value_phone_produces_ordered_values() {
        let fields = vec![phone_field()];
        let mut inputs = FormInputs::new();
        inputs.insert(20, vec!["380501234567, 380671234567".to_string()]);

        let values = collect_field_values(&fields, &inputs, &AcceptAll).unwrap();
        assert_eq!(
            values,
            vec![
                FieldValue::Text {
                    field_id: 20,
                    value_text: "380501234567".into(),
                    display_order: Some(0)
                },
                FieldValue::Text {
                    field_id: 20,
                    value_text: "380671234567".into(),
                    display_order: Some(1)
                },
            ]
        );
    }

    #[test]
    fn phones_are_normalized_and_validated() {
        let fields = vec![phone_field()];
        let mut inputs = FormInputs::new();
        inputs.insert(20, vec!["+38 (050) 123-45-67".to_string()]);
        let values = collect_field_values(&fields, &inputs, &AcceptAll).unwrap();
        assert_eq!(
            values[0],
            FieldValue::Text {
                field_id: 20,
                value_text: "380501234567".into(),
                display_order: Some(0)
            }
        );

        inputs.insert(20, vec!["380501234567, 12ab".to_string()]);
        let err = collect_field_values(&fields, &inputs, &AcceptAll).unwrap_err();
        assert_eq!(
            err,
            FieldError::InvalidPhone {
                label: "Телефоны".into(),
                value: "12ab".into()
            }
        );
    }

    #[test]
    fn single_value_fields_keep_first_input_only() {
        let fields = vec![ClientTypeField::new(1, "note", "Заметка", FieldType::Text)];
        let mut inputs = FormInputs::new();
        inputs.insert(1, vec![" first ".into(), "second".into()]);
        let values = collect_field_values(&fields, &inputs, &AcceptAll).unwrap();
        assert_eq!(values.len(), 1);
        assert_eq!(
            values[0],
            FieldValue::Text {
                field_id: 1,
                value_text: "first".into(),
                display_order: Some(0)
            }
        );
    }

    #[test]
    fn required_and_typed_fields_are_checked() {
        let fields = vec![
            ClientTypeField::new(1, "inn", "ИНН", FieldType::Text).required(),
            ClientTypeField::new(2, "volume", "Объём", FieldType::Number),
            ClientTypeField::new(3, "since", "С даты", FieldType::Date),
        ];
        let mut inputs = FormInputs::new();
        assert_eq!(
            collect_field_values(&fields, &inputs, &AcceptAll).unwrap_err(),
            FieldError::Required { label: "ИНН".into() }
        );

        inputs.insert(1, vec!["12345".into()]);
        inputs.insert(2, vec!["12,5".into()]);
        inputs.insert(3, vec!["2024-02-30".into()]);
        assert_eq!(
            collect_field_values(&fields, &inputs, &AcceptAll).unwrap_err(),
            FieldError::InvalidDate {
                label: "С даты".into(),
                value: "2024-02-30".into()
            }
        );

        inputs.insert(3, vec!["2024-02-29".into()]);
        let values = collect_field_values(&fields, &inputs, &AcceptAll).unwrap();
        assert_eq!(
            values[1],
            FieldValue::Number {
                field_id: 2,
                value_number: 12.5,
                display_order: Some(0)
            }
        );
    }

    #[test]
    fn validation_pattern_is_applied() {
        let mut field = ClientTypeField::new(1, "edrpou", "ЕДРПОУ", FieldType::Text);
        field.validation_pattern = Some("^\\d+$".into());
        let fields = vec![field];
        let mut inputs = FormInputs::new();
        inputs.insert(1, vec!["12a".into()]);

        assert_eq!(
            collect_field_values(&fields, &inputs, &DigitsOnly).unwrap_err(),
            FieldError::PatternMismatch {
                label: "ЕДРПОУ".into()
            }
        );
        inputs.insert(1, vec!["123".into()]);
        assert!(collect_field_values(&fields, &inputs, &DigitsOnly).is_ok());
    }

    #[test]
    fn list_values_must_belong_to_field() {
        let fields = vec![region_field()];
        let mut inputs = FormInputs::new();
        inputs.insert(12, vec!["99".into()]);
        assert!(matches!(
            collect_field_values(&fields, &inputs, &AcceptAll),
            Err(FieldError::UnknownListValue { .. })
        ));
    }

    #[test]
    fn hidden_fields_are_not_collected() {
        let mut hidden = ClientTypeField::new(1, "internal", "Служебное", FieldType::Text).required();
        hidden.is_visible_in_create = false;
        let values = collect_field_values(&[hidden], &FormInputs::new(), &AcceptAll).unwrap();
        assert!(values.is_empty());
    }

    #[test]
    fn object_collection_and_prefill() {
        let fields = vec![
            ClientTypeField::new(1, "name", "Название", FieldType::Text).required(),
            ClientTypeField::new(2, "purpose", "Назначение", FieldType::List).with_list_values(vec![
                ListValue::new(1, "REMOVING"),
                ListValue::new(2, "ADDING"),
            ]),
            ClientTypeField::new(3, "active", "Активен", FieldType::Boolean),
            ClientTypeField::new(4, "comment", "Комментарий", FieldType::Text),
        ];
        let mut inputs = FormInputs::new();
        inputs.insert(1, vec!["Брак".into()]);
        inputs.insert(2, vec!["1".into()]);

        let object = collect_object(&fields, &inputs, &AcceptAll).unwrap();
        assert_eq!(
            Value::Object(object.clone()),
            json!({"name": "Брак", "purpose": "REMOVING", "active": false, "comment": null})
        );

        let prefilled = inputs_from_object(&fields, &Value::Object(object));
        assert_eq!(prefilled.get(&1), Some(&vec!["Брак".to_string()]));
        assert_eq!(prefilled.get(&2), Some(&vec!["1".to_string()]));
        assert_eq!(prefilled.get(&3), Some(&vec!["false".to_string()]));
        assert_eq!(prefilled.get(&4), None);
    }
}
