//! `/vehicle` endpoints. Items are managed through `/vehicle/{id}/item`.

use crate::shared::http;
use contracts::domain::a010_vehicle::aggregate::{CreateVehicle, CreateVehicleItem, Vehicle};
use contracts::domain::common::Resource;
use contracts::shared::api_error::ApiError;
use contracts::shared::page::ListResponse;

/// List path with the optional shipment date bounds.
fn list_path(date_from: &str, date_to: &str) -> String {
    let params: Vec<String> = [("dateFrom", date_from), ("dateTo", date_to)]
        .into_iter()
        .filter(|(_, value)| !value.trim().is_empty())
        .map(|(key, value)| format!("{}={}", key, value.trim()))
        .collect();
    if params.is_empty() {
        Vehicle::endpoint().to_string()
    } else {
        format!("{}?{}", Vehicle::endpoint(), params.join("&"))
    }
}

fn items_path(vehicle_id: i64) -> String {
    format!("{}/{}/item", Vehicle::endpoint(), vehicle_id)
}

pub async fn fetch_vehicles(date_from: &str, date_to: &str) -> Result<Vec<Vehicle>, ApiError> {
    let path = list_path(date_from, date_to);
    log::debug!("loading {}", path);
    let response: ListResponse<Vehicle> = http::get_json(&path).await?;
    Ok(response.into_items())
}

pub async fn fetch_vehicle(id: i64) -> Result<Vehicle, ApiError> {
    http::get_json(&format!("{}/{}", Vehicle::endpoint(), id)).await
}

pub async fn create_vehicle(dto: &CreateVehicle) -> Result<(), ApiError> {
    http::post_json(Vehicle::endpoint(), dto).await
}

pub async fn add_item(vehicle_id: i64, dto: &CreateVehicleItem) -> Result<(), ApiError> {
    http::post_json(&items_path(vehicle_id), dto).await
}

pub async fn remove_item(vehicle_id: i64, item_id: i64) -> Result<(), ApiError> {
    http::delete(&format!("{}/{}", items_path(vehicle_id), item_id)).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn date_bounds_are_optional() {
        assert_eq!(list_path("", " "), "vehicle");
        assert_eq!(list_path("2024-05-01", ""), "vehicle?dateFrom=2024-05-01");
        assert_eq!(
            list_path("2024-05-01", "2024-05-31"),
            "vehicle?dateFrom=2024-05-01&dateTo=2024-05-31"
        );
        assert_eq!(items_path(7), "vehicle/7/item");
    }
}
