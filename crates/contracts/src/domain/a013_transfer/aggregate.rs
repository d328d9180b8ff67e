use crate::domain::common::{EntityId, Resource};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Moves stock from one product to another within a warehouse.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transfer {
    pub id: EntityId,
    pub warehouse_id: EntityId,
    pub from_product_id: EntityId,
    pub to_product_id: EntityId,
    #[serde(default)]
    pub user_id: Option<EntityId>,
    pub quantity: f64,
    #[serde(default)]
    pub reason_id: Option<EntityId>,
    #[serde(default)]
    pub transfer_date: Option<NaiveDate>,
    #[serde(default)]
    pub description: Option<String>,
}

impl Resource for Transfer {
    fn resource_index() -> &'static str {
        "a013"
    }

    fn endpoint() -> &'static str {
        "warehouse/transfer"
    }

    fn element_name() -> &'static str {
        "Перевод"
    }

    fn list_name() -> &'static str {
        "Переводы"
    }

    fn id(&self) -> EntityId {
        self.id
    }

    fn title(&self) -> String {
        format!("Перевод №{}", self.id)
    }
}

/// Body of POST `/warehouse/transfer`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTransfer {
    pub warehouse_id: EntityId,
    pub from_product_id: EntityId,
    pub to_product_id: EntityId,
    pub quantity: f64,
    pub reason_id: EntityId,
    pub transfer_date: NaiveDate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl CreateTransfer {
    pub fn validate(&self) -> Result<(), String> {
        if self.from_product_id == self.to_product_id {
            return Err("Товары «откуда» и «куда» должны различаться".into());
        }
        if !(self.quantity > 0.0) {
            return Err("Количество должно быть больше нуля".into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn same_product_transfer_is_rejected() {
        let mut dto = CreateTransfer {
            warehouse_id: 1,
            from_product_id: 2,
            to_product_id: 2,
            quantity: 5.0,
            reason_id: 1,
            transfer_date: NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
            description: None,
        };
        assert!(dto.validate().is_err());
        dto.to_product_id = 3;
        assert!(dto.validate().is_ok());
        assert_eq!(
            serde_json::to_value(&dto).unwrap(),
            json!({
                "warehouseId": 1,
                "fromProductId": 2,
                "toProductId": 3,
                "quantity": 5.0,
                "reasonId": 1,
                "transferDate": "2024-05-01"
            })
        );
    }
}
