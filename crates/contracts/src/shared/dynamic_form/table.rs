//! Column model of the dynamic clients table.

use super::field_type::FieldType;
use super::schema::{sorted_fields, ClientTypeField};

/// Columns every client type shows before its own fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StaticColumn {
    Id,
    Company,
    Source,
    CreatedAt,
}

impl StaticColumn {
    pub fn all() -> [StaticColumn; 4] {
        [Self::Id, Self::Company, Self::Source, Self::CreatedAt]
    }

    /// Sort key understood by the backend.
    pub fn sort_key(&self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::Company => "company",
            Self::Source => "source",
            Self::CreatedAt => "createdAt",
        }
    }

    fn width(&self) -> u32 {
        match self {
            Self::Id => 80,
            Self::Company => 240,
            Self::Source => 160,
            Self::CreatedAt => 160,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnKind {
    Static(StaticColumn),
    Field { field_id: i64, field_type: FieldType },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableColumn {
    pub key: String,
    pub label: String,
    pub width: u32,
    pub kind: ColumnKind,
}

impl TableColumn {
    pub fn sort_key(&self) -> &str {
        match &self.kind {
            ColumnKind::Static(column) => column.sort_key(),
            ColumnKind::Field { .. } => &self.key,
        }
    }
}

/// Static columns followed by every field visible in the table.
///
/// `company_label` is the client type's `nameFieldLabel`; an empty label falls
/// back to "Компания".
pub fn build_table_columns(company_label: &str, fields: &[ClientTypeField]) -> Vec<TableColumn> {
    let company_label = if company_label.trim().is_empty() {
        "Компания"
    } else {
        company_label
    };

    let statics = StaticColumn::all().into_iter().map(|column| TableColumn {
        key: column.sort_key().to_string(),
        label: match column {
            StaticColumn::Id => "ID".to_string(),
            StaticColumn::Company => company_label.to_string(),
            StaticColumn::Source => "Источник".to_string(),
            StaticColumn::CreatedAt => "Создан".to_string(),
        },
        width: column.width(),
        kind: ColumnKind::Static(column),
    });

    let dynamic = sorted_fields(fields.iter().filter(|f| f.is_visible_in_table))
        .into_iter()
        .map(|f| TableColumn {
            key: f.field_name.clone(),
            label: f.field_label.clone(),
            width: f.column_width_px(),
            kind: ColumnKind::Field {
                field_id: f.id,
                field_type: f.field_type,
            },
        });

    statics.chain(dynamic).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::dynamic_form::schema::DEFAULT_COLUMN_WIDTH;

    #[test]
    fn static_columns_come_first_then_visible_fields_in_order() {
        let mut region = ClientTypeField::new(12, "region", "Регион", FieldType::List);
        region.display_order = 2;
        region.column_width = Some(150);
        let mut phone = ClientTypeField::new(20, "phone", "Телефон", FieldType::Phone);
        phone.display_order = 1;
        let mut hidden = ClientTypeField::new(30, "secret", "Скрыто", FieldType::Text);
        hidden.is_visible_in_table = false;

        let columns = build_table_columns("Ферма", &[region, phone, hidden]);
        let keys: Vec<&str> = columns.iter().map(|c| c.key.as_str()).collect();
        assert_eq!(keys, vec!["id", "company", "source", "createdAt", "phone", "region"]);
        assert_eq!(columns[1].label, "Ферма");
        assert_eq!(columns[4].width, DEFAULT_COLUMN_WIDTH);
        assert_eq!(columns[5].width, 150);
        assert_eq!(
            columns[5].kind,
            ColumnKind::Field {
                field_id: 12,
                field_type: FieldType::List
            }
        );
    }

    #[test]
    fn empty_company_label_falls_back() {
        let columns = build_table_columns("  ", &[]);
        assert_eq!(columns.len(), 4);
        assert_eq!(columns[1].label, "Компания");
        assert_eq!(columns[3].sort_key(), "createdAt");
    }
}
