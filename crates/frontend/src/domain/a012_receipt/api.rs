use crate::shared::http;
use contracts::domain::a012_receipt::aggregate::Receipt;
use contracts::domain::common::Resource;
use contracts::shared::api_error::ApiError;
use contracts::shared::page::ListResponse;

/// Receipts are written by the backend from purchases; the console only reads them.
pub async fn fetch_receipts() -> Result<Vec<Receipt>, ApiError> {
    let response: ListResponse<Receipt> = http::get_json(Receipt::endpoint()).await?;
    Ok(response.into_items())
}
