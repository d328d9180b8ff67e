//! Filter panel model: one control per filterable field plus the static
//! client filters.

use super::create_form::{list_options, SelectOption};
use super::field_type::FieldType;
use super::schema::{sorted_fields, ClientTypeField, ListValue};
use crate::shared::filters::{range_keys, StaticFilter};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangeInput {
    Number,
    Date,
}

impl RangeInput {
    /// HTML input type of both range ends.
    pub fn input_type(&self) -> &'static str {
        match self {
            RangeInput::Number => "number",
            RangeInput::Date => "date",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterKind {
    /// Two inputs stored under `from_key` and `to_key`.
    Range {
        from_key: String,
        to_key: String,
        input: RangeInput,
    },
    MultiSelect { options: Vec<SelectOption> },
    /// Any / yes / no. "Any" removes the key.
    TriState,
    Text,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterControl {
    /// Base key; range controls store values under the derived keys instead.
    pub key: String,
    pub label: String,
    pub kind: FilterKind,
}

impl FilterControl {
    /// Every key this control may write into the selected filters.
    pub fn keys(&self) -> Vec<String> {
        match &self.kind {
            FilterKind::Range {
                from_key, to_key, ..
            } => vec![from_key.clone(), to_key.clone()],
            _ => vec![self.key.clone()],
        }
    }
}

pub const TRI_STATE_OPTIONS: [(&str, &str); 3] = [("", "Все"), ("true", "Да"), ("false", "Нет")];

fn range(key: &str, input: RangeInput) -> FilterKind {
    let (from_key, to_key) = range_keys(key);
    FilterKind::Range {
        from_key,
        to_key,
        input,
    }
}

fn filter_kind(field: &ClientTypeField) -> FilterKind {
    match field.field_type {
        FieldType::Number => range(&field.field_name, RangeInput::Number),
        FieldType::Date => range(&field.field_name, RangeInput::Date),
        FieldType::List => FilterKind::MultiSelect {
            options: list_options(field),
        },
        FieldType::Boolean => FilterKind::TriState,
        FieldType::Text | FieldType::Phone => FilterKind::Text,
    }
}

/// One control per field with `isFilterable`, in display order.
pub fn build_filter_controls(fields: &[ClientTypeField]) -> Vec<FilterControl> {
    sorted_fields(fields.iter().filter(|f| f.is_filterable))
        .into_iter()
        .map(|f| FilterControl {
            key: f.field_name.clone(),
            label: f.field_label.clone(),
            kind: filter_kind(f),
        })
        .collect()
}

/// Filters shared by all client types: created/updated ranges, source, active.
pub fn static_filter_controls(sources: &[ListValue]) -> Vec<FilterControl> {
    let source_options = sources
        .iter()
        .map(|s| SelectOption {
            value: s.id.to_string(),
            label: s.value.clone(),
        })
        .collect();

    vec![
        FilterControl {
            key: StaticFilter::CREATED_AT.to_string(),
            label: "Создан".to_string(),
            kind: range(StaticFilter::CREATED_AT, RangeInput::Date),
        },
        FilterControl {
            key: StaticFilter::UPDATED_AT.to_string(),
            label: "Изменён".to_string(),
            kind: range(StaticFilter::UPDATED_AT, RangeInput::Date),
        },
        FilterControl {
            key: StaticFilter::SOURCE.to_string(),
            label: "Источник".to_string(),
            kind: FilterKind::MultiSelect {
                options: source_options,
            },
        },
        FilterControl {
            key: StaticFilter::ACTIVE.to_string(),
            label: "Активен".to_string(),
            kind: FilterKind::TriState,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::dynamic_form::create_form::{build_create_controls, ControlKind};
    use crate::shared::dynamic_form::table::build_table_columns;
    use crate::shared::filters::STATIC_FILTER_KEYS;

    fn one_of_each() -> Vec<ClientTypeField> {
        vec![
            ClientTypeField::new(1, "note", "Заметка", FieldType::Text).filterable(),
            ClientTypeField::new(2, "volume", "Объём", FieldType::Number).filterable(),
            ClientTypeField::new(3, "since", "С даты", FieldType::Date).filterable(),
            ClientTypeField::new(4, "vip", "VIP", FieldType::Boolean).filterable(),
            ClientTypeField::new(5, "region", "Регион", FieldType::List)
                .filterable()
                .multiple()
                .with_list_values(vec![ListValue::new(3, "Киев"), ListValue::new(4, "Львов")]),
            ClientTypeField::new(6, "phone", "Телефон", FieldType::Phone)
                .filterable()
                .multiple(),
        ]
    }

    #[test]
    fn builds_columns_controls_and_filters_for_every_type() {
        let fields = one_of_each();

        let columns = build_table_columns("Компания", &fields);
        assert_eq!(columns.len(), 4 + 6);

        let kinds: Vec<ControlKind> = build_create_controls(&fields)
            .into_iter()
            .map(|c| c.kind)
            .collect();
        let region_options = vec![
            SelectOption {
                value: "3".into(),
                label: "Киев".into(),
            },
            SelectOption {
                value: "4".into(),
                label: "Львов".into(),
            },
        ];
        assert_eq!(
            kinds,
            vec![
                ControlKind::Text,
                ControlKind::Number,
                ControlKind::Date,
                ControlKind::Checkbox,
                ControlKind::Select {
                    options: region_options.clone(),
                    multiple: true
                },
                ControlKind::Phone { multiple: true },
            ]
        );

        let filters = build_filter_controls(&fields);
        assert_eq!(filters.len(), 6);
        assert_eq!(filters[0].kind, FilterKind::Text);
        assert_eq!(
            filters[1].kind,
            FilterKind::Range {
                from_key: "volumeFrom".into(),
                to_key: "volumeTo".into(),
                input: RangeInput::Number
            }
        );
        assert_eq!(
            filters[2].keys(),
            vec!["sinceFrom".to_string(), "sinceTo".to_string()]
        );
        assert_eq!(filters[3].kind, FilterKind::TriState);
        assert_eq!(
            filters[4].kind,
            FilterKind::MultiSelect {
                options: region_options
            }
        );
        assert_eq!(filters[5].kind, FilterKind::Text);
    }

    #[test]
    fn non_filterable_fields_are_skipped() {
        let fields = vec![ClientTypeField::new(1, "note", "Заметка", FieldType::Text)];
        assert!(build_filter_controls(&fields).is_empty());
    }

    #[test]
    fn static_controls_only_write_static_keys() {
        let controls = static_filter_controls(&[ListValue::new(1, "Сайт")]);
        let keys: Vec<String> = controls.iter().flat_map(|c| c.keys()).collect();
        assert_eq!(keys.len(), STATIC_FILTER_KEYS.len());
        for key in keys {
            assert!(STATIC_FILTER_KEYS.contains(&key.as_str()), "{key}");
        }
    }
}
