use crate::domain::lookups::load_values;
use crate::shared::http;
use contracts::domain::common::{DirectoryKind, EntityId};
use contracts::shared::api_error::ApiError;
use serde_json::{Map, Value};

/// Entries of a directory as raw JSON objects.
pub async fn fetch_entries(kind: DirectoryKind) -> Result<Vec<Value>, ApiError> {
    load_values(kind.endpoint()).await
}

pub async fn create_entry(kind: DirectoryKind, body: &Map<String, Value>) -> Result<(), ApiError> {
    http::post_json(kind.endpoint(), body).await
}

pub async fn update_entry(
    kind: DirectoryKind,
    id: EntityId,
    body: &Map<String, Value>,
) -> Result<(), ApiError> {
    http::put_json(&format!("{}/{}", kind.endpoint(), id), body).await
}

pub async fn delete_entry(kind: DirectoryKind, id: EntityId) -> Result<(), ApiError> {
    http::delete(&format!("{}/{}", kind.endpoint(), id)).await
}
