use crate::domain::common::{EntityId, Resource};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Write-off of goods from a warehouse.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Withdrawal {
    pub id: EntityId,
    pub warehouse_id: EntityId,
    pub product_id: EntityId,
    #[serde(default)]
    pub user_id: Option<EntityId>,
    #[serde(default)]
    pub withdrawal_reason_id: Option<EntityId>,
    pub quantity: f64,
    #[serde(default)]
    pub withdrawal_date: Option<NaiveDate>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

impl Resource for Withdrawal {
    fn resource_index() -> &'static str {
        "a011"
    }

    fn endpoint() -> &'static str {
        "warehouse/withdrawal"
    }

    fn element_name() -> &'static str {
        "Списание"
    }

    fn list_name() -> &'static str {
        "Списания"
    }

    fn id(&self) -> EntityId {
        self.id
    }

    fn title(&self) -> String {
        format!("Списание №{}", self.id)
    }
}

/// Body of POST `/warehouse/withdrawal`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateWithdrawal {
    pub warehouse_id: EntityId,
    pub product_id: EntityId,
    pub withdrawal_reason_id: EntityId,
    pub quantity: f64,
    pub withdrawal_date: NaiveDate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl CreateWithdrawal {
    pub fn validate(&self) -> Result<(), String> {
        if !(self.quantity > 0.0) {
            return Err("Количество должно быть больше нуля".into());
        }
        Ok(())
    }
}
