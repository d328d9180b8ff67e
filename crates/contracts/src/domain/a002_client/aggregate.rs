use crate::domain::common::{lookup_name, EntityId, NameLookup, Resource};
use crate::shared::display::{format_datetime, format_number, yes_no};
use crate::shared::dynamic_form::{
    collect_field_values, ClientTypeField, ColumnKind, FieldType, FieldValue, FormInputs,
    StaticColumn, TableColumn,
};
use crate::shared::validation::{FieldError, PatternMatcher};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// ============================================================================
// Read model
// ============================================================================

/// Stored value of a dynamic field, as returned with a client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientFieldValue {
    pub field_id: EntityId,
    #[serde(default)]
    pub field_name: Option<String>,
    #[serde(default)]
    pub field_type: Option<FieldType>,
    #[serde(default)]
    pub value_text: Option<String>,
    #[serde(default)]
    pub value_number: Option<f64>,
    #[serde(default)]
    pub value_date: Option<NaiveDate>,
    #[serde(default)]
    pub value_boolean: Option<bool>,
    #[serde(default)]
    pub value_list_id: Option<EntityId>,
    #[serde(default)]
    pub value_list_value: Option<String>,
    #[serde(default)]
    pub display_order: Option<u32>,
}

impl ClientFieldValue {
    /// Display text. LIST values fall back to the schema when the backend
    /// did not resolve `valueListValue`.
    pub fn display(&self, field: Option<&ClientTypeField>) -> String {
        if let Some(list_id) = self.value_list_id {
            return self
                .value_list_value
                .clone()
                .or_else(|| field.and_then(|f| f.list_value(list_id)).map(|v| v.value.clone()))
                .unwrap_or_else(|| format!("#{}", list_id));
        }
        if let Some(text) = &self.value_text {
            return text.clone();
        }
        if let Some(number) = self.value_number {
            return format_number(number);
        }
        if let Some(date) = self.value_date {
            return date.format("%d.%m.%Y").to_string();
        }
        if let Some(flag) = self.value_boolean {
            return yes_no(flag).to_string();
        }
        String::new()
    }

    /// Raw form input that reproduces this value.
    pub fn to_input(&self) -> Option<String> {
        if let Some(list_id) = self.value_list_id {
            return Some(list_id.to_string());
        }
        if let Some(text) = &self.value_text {
            return Some(text.clone());
        }
        if let Some(number) = self.value_number {
            return Some(number.to_string());
        }
        if let Some(date) = self.value_date {
            return Some(date.format("%Y-%m-%d").to_string());
        }
        self.value_boolean.map(|b| b.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Client {
    pub id: EntityId,
    pub client_type_id: EntityId,
    pub company: String,
    #[serde(default)]
    pub source_id: Option<EntityId>,
    #[serde(default = "default_active")]
    pub is_active: bool,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
    #[serde(default)]
    pub field_values: Vec<ClientFieldValue>,
}

fn default_active() -> bool {
    true
}

impl Client {
    /// Values of one field ordered by `displayOrder`.
    pub fn values_of(&self, field_id: EntityId) -> Vec<&ClientFieldValue> {
        let mut values: Vec<&ClientFieldValue> = self
            .field_values
            .iter()
            .filter(|v| v.field_id == field_id)
            .collect();
        values.sort_by_key(|v| v.display_order.unwrap_or(0));
        values
    }

    /// All values of a field joined with `, `.
    pub fn field_text(&self, field_id: EntityId, field: Option<&ClientTypeField>) -> String {
        self.values_of(field_id)
            .into_iter()
            .map(|v| v.display(field))
            .filter(|s| !s.is_empty())
            .collect::<Vec<_>>()
            .join(", ")
    }

    pub fn cell_text(
        &self,
        column: &TableColumn,
        fields: &[ClientTypeField],
        sources: &NameLookup,
    ) -> String {
        match column.kind {
            ColumnKind::Static(StaticColumn::Id) => self.id.to_string(),
            ColumnKind::Static(StaticColumn::Company) => self.company.clone(),
            ColumnKind::Static(StaticColumn::Source) => lookup_name(sources, self.source_id),
            ColumnKind::Static(StaticColumn::CreatedAt) => self
                .created_at
                .as_deref()
                .map(format_datetime)
                .unwrap_or_default(),
            ColumnKind::Field { field_id, .. } => {
                let field = fields.iter().find(|f| f.id == field_id);
                self.field_text(field_id, field)
            }
        }
    }

    /// Prefill the edit form with the stored values.
    pub fn to_form_inputs(&self) -> FormInputs {
        let mut inputs = FormInputs::new();
        let mut values: Vec<&ClientFieldValue> = self.field_values.iter().collect();
        values.sort_by_key(|v| (v.field_id, v.display_order.unwrap_or(0)));
        for value in values {
            if let Some(raw) = value.to_input() {
                inputs.entry(value.field_id).or_default().push(raw);
            }
        }
        inputs
    }
}

impl Resource for Client {
    fn resource_index() -> &'static str {
        "a002"
    }

    fn endpoint() -> &'static str {
        "client"
    }

    fn element_name() -> &'static str {
        "Клиент"
    }

    fn list_name() -> &'static str {
        "Клиенты"
    }

    fn id(&self) -> EntityId {
        self.id
    }

    fn title(&self) -> String {
        self.company.clone()
    }
}

// ============================================================================
// Forms / DTOs
// ============================================================================

/// Body of POST `/client`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateClient {
    pub client_type_id: EntityId,
    pub company: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_id: Option<EntityId>,
    pub field_values: Vec<FieldValue>,
}

impl CreateClient {
    /// Validate the form and build the request body.
    pub fn from_form(
        client_type_id: EntityId,
        company_label: &str,
        company: &str,
        source_id: Option<EntityId>,
        fields: &[ClientTypeField],
        inputs: &FormInputs,
        matcher: &dyn PatternMatcher,
    ) -> Result<Self, FieldError> {
        let company = company.trim();
        if company.is_empty() {
            return Err(FieldError::Required {
                label: company_label.to_string(),
            });
        }

        Ok(Self {
            client_type_id,
            company: company.to_string(),
            source_id,
            field_values: collect_field_values(fields, inputs, matcher)?,
        })
    }
}

/// Body of PUT `/client/{id}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateClient {
    #[serde(flatten)]
    pub body: CreateClient,
    pub is_active: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::dynamic_form::{build_table_columns, ListValue};
    use crate::shared::validation::AcceptAll;
    use serde_json::json;

    fn region() -> ClientTypeField {
        ClientTypeField::new(12, "region", "Регион", FieldType::List)
            .with_list_values(vec![ListValue::new(3, "Киев"), ListValue::new(4, "Львов")])
    }

    #[test]
    fn create_body_matches_backend_contract() {
        let mut inputs = FormInputs::new();
        inputs.insert(12, vec!["3".into()]);

        let body = CreateClient::from_form(5, "Компания", "Acme", None, &[region()], &inputs, &AcceptAll)
            .unwrap();
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            json!({
                "clientTypeId": 5,
                "company": "Acme",
                "fieldValues": [{"fieldId": 12, "valueListId": 3, "displayOrder": 0}]
            })
        );
    }

    #[test]
    fn empty_company_is_rejected() {
        let err = CreateClient::from_form(5, "Хозяйство", "  ", None, &[], &FormInputs::new(), &AcceptAll)
            .unwrap_err();
        assert_eq!(err, FieldError::Required { label: "Хозяйство".into() });
    }

    #[test]
    fn update_body_is_flat() {
        let body = UpdateClient {
            body: CreateClient {
                client_type_id: 5,
                company: "Acme".into(),
                source_id: Some(2),
                field_values: vec![],
            },
            is_active: false,
        };
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            json!({"clientTypeId": 5, "company": "Acme", "sourceId": 2, "fieldValues": [], "isActive": false})
        );
    }

    #[test]
    fn cells_and_prefill() {
        let phone = ClientTypeField::new(20, "phone", "Телефон", FieldType::Phone).multiple();
        let fields = vec![region(), phone];
        let client: Client = serde_json::from_value(json!({
            "id": 7,
            "clientTypeId": 5,
            "company": "Acme",
            "sourceId": 1,
            "createdAt": "2024-03-15T14:02:26",
            "fieldValues": [
                {"fieldId": 20, "valueText": "380671234567", "displayOrder": 1},
                {"fieldId": 20, "valueText": "380501234567", "displayOrder": 0},
                {"fieldId": 12, "valueListId": 4}
            ]
        }))
        .unwrap();

        let mut sources = NameLookup::new();
        sources.insert(1, "Сайт".to_string());
        let columns = build_table_columns("Компания", &fields);
        let cells: Vec<String> = columns
            .iter()
            .map(|c| client.cell_text(c, &fields, &sources))
            .collect();
        assert_eq!(
            cells,
            vec![
                "7",
                "Acme",
                "Сайт",
                "15.03.2024 14:02",
                "Львов",
                "380501234567, 380671234567"
            ]
        );

        let inputs = client.to_form_inputs();
        assert_eq!(inputs.get(&12), Some(&vec!["4".to_string()]));
        assert_eq!(
            inputs.get(&20),
            Some(&vec!["380501234567".to_string(), "380671234567".to_string()])
        );
    }

    #[test]
    fn edit_prefill_keeps_full_number_precision() {
        let weight = ClientTypeField::new(30, "weight", "Вес", FieldType::Number);
        let client: Client = serde_json::from_value(json!({
            "id": 8,
            "clientTypeId": 5,
            "company": "Acme",
            "fieldValues": [{"fieldId": 30, "valueNumber": 0.123456}]
        }))
        .unwrap();

        let inputs = client.to_form_inputs();
        assert_eq!(inputs.get(&30), Some(&vec!["0.123456".to_string()]));

        let body = CreateClient::from_form(5, "Компания", "Acme", None, &[weight], &inputs, &AcceptAll)
            .unwrap();
        assert_eq!(
            body.field_values,
            vec![FieldValue::Number {
                field_id: 30,
                value_number: 0.123456,
                display_order: Some(0)
            }]
        );
    }
}
