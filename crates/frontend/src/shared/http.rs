//! Thin JSON helpers over `gloo-net`.
//!
//! Every call checks `response.ok()` and turns a failure body into
//! `ApiError::Http` with the backend message preserved.

use contracts::shared::api_error::ApiError;
use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use web_sys::AbortSignal;

use super::api_utils::api_url;

fn network(err: gloo_net::Error) -> ApiError {
    ApiError::Network(err.to_string())
}

async fn ensure_ok(response: Response) -> Result<Response, ApiError> {
    if response.ok() {
        return Ok(response);
    }
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    Err(ApiError::from_response(status, &body))
}

async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    let response = ensure_ok(response).await?;
    response
        .json::<T>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

async fn send_json<B: Serialize>(builder: RequestBuilder, body: &B) -> Result<(), ApiError> {
    let response = builder.json(body).map_err(network)?.send().await.map_err(network)?;
    ensure_ok(response).await.map(|_| ())
}

pub async fn get_json<T: DeserializeOwned>(path: &str) -> Result<T, ApiError> {
    let response = Request::get(&api_url(path)).send().await.map_err(network)?;
    read_json(response).await
}

/// GET that is cancelled when `signal` fires. A cancelled call fails with an
/// error for which `ApiError::is_aborted` holds.
pub async fn get_json_abortable<T: DeserializeOwned>(
    path: &str,
    signal: &AbortSignal,
) -> Result<T, ApiError> {
    let response = Request::get(&api_url(path))
        .abort_signal(Some(signal))
        .send()
        .await
        .map_err(network)?;
    read_json(response).await
}

pub async fn post_json<B: Serialize>(path: &str, body: &B) -> Result<(), ApiError> {
    send_json(Request::post(&api_url(path)), body).await
}

pub async fn put_json<B: Serialize>(path: &str, body: &B) -> Result<(), ApiError> {
    send_json(Request::put(&api_url(path)), body).await
}

pub async fn delete(path: &str) -> Result<(), ApiError> {
    let response = Request::delete(&api_url(path))
        .send()
        .await
        .map_err(network)?;
    ensure_ok(response).await.map(|_| ())
}
