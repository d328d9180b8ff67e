use crate::shared::http;
use contracts::domain::a013_transfer::aggregate::{CreateTransfer, Transfer};
use contracts::domain::common::Resource;
use contracts::shared::api_error::ApiError;
use contracts::shared::page::ListResponse;

pub async fn fetch_transfers() -> Result<Vec<Transfer>, ApiError> {
    let response: ListResponse<Transfer> = http::get_json(Transfer::endpoint()).await?;
    Ok(response.into_items())
}

pub async fn create_transfer(dto: &CreateTransfer) -> Result<(), ApiError> {
    http::post_json(Transfer::endpoint(), dto).await
}
