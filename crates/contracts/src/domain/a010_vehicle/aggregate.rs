use crate::domain::common::{EntityId, Resource};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// ============================================================================
// Aggregate
// ============================================================================

/// Outbound vehicle: a header with customs data plus item lines.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Vehicle {
    pub id: EntityId,
    #[serde(default)]
    pub shipment_date: Option<NaiveDate>,
    #[serde(default)]
    pub vehicle_number: Option<String>,
    #[serde(default)]
    pub invoice_ua: Option<String>,
    #[serde(default)]
    pub invoice_eu: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub is_our_vehicle: bool,
    #[serde(default)]
    pub sender_id: Option<EntityId>,
    #[serde(default)]
    pub receiver_id: Option<EntityId>,
    #[serde(default)]
    pub destination_country: Option<String>,
    #[serde(default)]
    pub destination_place: Option<String>,
    #[serde(default)]
    pub carrier_id: Option<EntityId>,
    #[serde(default)]
    pub declaration_number: Option<String>,
    #[serde(default)]
    pub total_cost_eur: Option<f64>,
    #[serde(default)]
    pub items: Vec<VehicleItem>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VehicleItem {
    pub id: EntityId,
    pub product_id: EntityId,
    pub warehouse_id: EntityId,
    pub quantity: f64,
    #[serde(default)]
    pub unit_price_eur: Option<f64>,
    #[serde(default)]
    pub total_cost_eur: Option<f64>,
}

impl Vehicle {
    /// Server total, or the sum of item totals for older records.
    pub fn total_cost(&self) -> f64 {
        self.total_cost_eur
            .unwrap_or_else(|| self.items.iter().filter_map(|i| i.total_cost_eur).sum())
    }

    pub fn total_quantity(&self) -> f64 {
        self.items.iter().map(|i| i.quantity).sum()
    }

    pub fn destination(&self) -> String {
        [&self.destination_country, &self.destination_place]
            .into_iter()
            .flatten()
            .filter(|s| !s.trim().is_empty())
            .cloned()
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl Resource for Vehicle {
    fn resource_index() -> &'static str {
        "a010"
    }

    fn endpoint() -> &'static str {
        "vehicle"
    }

    fn element_name() -> &'static str {
        "Машина"
    }

    fn list_name() -> &'static str {
        "Машины"
    }

    fn id(&self) -> EntityId {
        self.id
    }

    fn title(&self) -> String {
        self.vehicle_number
            .clone()
            .unwrap_or_else(|| format!("#{}", self.id))
    }
}

// ============================================================================
// Forms / DTOs
// ============================================================================

/// Body of POST `/vehicle`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateVehicle {
    pub shipment_date: Option<NaiveDate>,
    pub vehicle_number: Option<String>,
    pub invoice_ua: Option<String>,
    pub invoice_eu: Option<String>,
    pub description: Option<String>,
    pub is_our_vehicle: bool,
    pub sender_id: Option<EntityId>,
    pub receiver_id: Option<EntityId>,
    pub destination_country: Option<String>,
    pub destination_place: Option<String>,
    pub carrier_id: Option<EntityId>,
    pub declaration_number: Option<String>,
}

impl CreateVehicle {
    pub fn validate(&self) -> Result<(), String> {
        if self.shipment_date.is_none() {
            return Err("Укажите дату отгрузки".into());
        }
        if self
            .vehicle_number
            .as_deref()
            .map_or(true, |n| n.trim().is_empty())
        {
            return Err("Укажите номер машины".into());
        }
        Ok(())
    }
}

/// Body of POST `/vehicle/{id}/item`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateVehicleItem {
    pub product_id: EntityId,
    pub warehouse_id: EntityId,
    pub quantity: f64,
}

impl CreateVehicleItem {
    pub fn validate(&self) -> Result<(), String> {
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
    fn totals_and_destination() {
        let vehicle: Vehicle = serde_json::from_value(json!({
            "id": 3,
            "vehicleNumber": "AA1234BB",
            "destinationCountry": "PL",
            "destinationPlace": "",
            "items": [
                {"id": 1, "productId": 1, "warehouseId": 1, "quantity": 10.0, "totalCostEur": 25.5},
                {"id": 2, "productId": 2, "warehouseId": 1, "quantity": 5.0, "totalCostEur": 4.5}
            ]
        }))
        .unwrap();
        assert_eq!(vehicle.total_cost(), 30.0);
        assert_eq!(vehicle.total_quantity(), 15.0);
        assert_eq!(vehicle.destination(), "PL");
        assert_eq!(vehicle.title(), "AA1234BB");
    }

    #[test]
    fn create_validation() {
        let mut dto = CreateVehicle::default();
        assert!(dto.validate().is_err());
        dto.shipment_date = NaiveDate::from_ymd_opt(2024, 5, 1);
        dto.vehicle_number = Some("AA1234BB".into());
        assert!(dto.validate().is_ok());

        let item = CreateVehicleItem {
            product_id: 1,
            warehouse_id: 1,
            quantity: 0.0,
        };
        assert!(item.validate().is_err());
    }
}
