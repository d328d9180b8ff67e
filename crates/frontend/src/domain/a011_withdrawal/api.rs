use crate::shared::http;
use contracts::domain::a011_withdrawal::aggregate::{CreateWithdrawal, Withdrawal};
use contracts::domain::common::Resource;
use contracts::shared::api_error::ApiError;
use contracts::shared::page::ListResponse;

pub async fn fetch_withdrawals() -> Result<Vec<Withdrawal>, ApiError> {
    let response: ListResponse<Withdrawal> = http::get_json(Withdrawal::endpoint()).await?;
    Ok(response.into_items())
}

pub async fn create_withdrawal(dto: &CreateWithdrawal) -> Result<(), ApiError> {
    http::post_json(Withdrawal::endpoint(), dto).await
}
