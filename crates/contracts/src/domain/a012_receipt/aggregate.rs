use crate::domain::common::{EntityId, Resource};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Goods received into a warehouse. Created by the backend from purchases.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Receipt {
    pub id: EntityId,
    pub warehouse_id: EntityId,
    pub product_id: EntityId,
    #[serde(default)]
    pub user_id: Option<EntityId>,
    pub quantity: f64,
    #[serde(default)]
    pub entry_date: Option<NaiveDate>,
    #[serde(default)]
    pub total_cost_eur: Option<f64>,
    #[serde(default)]
    pub purchase_id: Option<EntityId>,
    #[serde(default)]
    pub created_at: Option<String>,
}

impl Resource for Receipt {
    fn resource_index() -> &'static str {
        "a012"
    }

    fn endpoint() -> &'static str {
        "warehouse/receipt"
    }

    fn element_name() -> &'static str {
        "Поступление"
    }

    fn list_name() -> &'static str {
        "Поступления"
    }

    fn id(&self) -> EntityId {
        self.id
    }

    fn title(&self) -> String {
        format!("Поступление №{}", self.id)
    }
}
