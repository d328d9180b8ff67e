use crate::shared::http;
use contracts::projections::p900_stock_balance::dto::StockBalance;
use contracts::shared::api_error::ApiError;
use contracts::shared::page::ListResponse;

const BALANCE_PATH: &str = "warehouse/balance";

pub async fn fetch_balances() -> Result<Vec<StockBalance>, ApiError> {
    let response: ListResponse<StockBalance> = http::get_json(BALANCE_PATH).await?;
    Ok(response.into_items())
}
