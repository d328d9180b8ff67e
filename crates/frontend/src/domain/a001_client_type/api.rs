use crate::domain::lookups::load_all;
use crate::shared::http;
use contracts::domain::a001_client_type::aggregate::{
    ClientType, ClientTypeDto, ClientTypeFieldDto, ClientTypePermission,
};
use contracts::domain::common::{lookup_name, NameLookup, Resource};
use contracts::shared::api_error::ApiError;
use contracts::shared::batch::{run_batch, BatchOutcome};
use contracts::shared::dynamic_form::ClientTypeField;
use contracts::shared::inflight::InflightCache;
use contracts::system::permissions::GridChange;

thread_local! {
    static FIELDS_PENDING: InflightCache<i64, Result<Vec<ClientTypeField>, ApiError>> = InflightCache::new();
}

fn base() -> &'static str {
    ClientType::endpoint()
}

// ============================================================================
// Client types
// ============================================================================

pub async fn load_client_types() -> Result<Vec<ClientType>, ApiError> {
    load_all::<ClientType>().await
}

pub async fn create_client_type(dto: &ClientTypeDto) -> Result<(), ApiError> {
    http::post_json(base(), dto).await
}

pub async fn update_client_type(id: i64, dto: &ClientTypeDto) -> Result<(), ApiError> {
    http::put_json(&format!("{}/{}", base(), id), dto).await
}

pub async fn delete_client_type(id: i64) -> Result<(), ApiError> {
    http::delete(&format!("{}/{}", base(), id)).await
}

// ============================================================================
// Fields
// ============================================================================

/// Field schema of a client type. Concurrent calls for one type share a request.
pub async fn load_fields(client_type_id: i64) -> Result<Vec<ClientTypeField>, ApiError> {
    let load = FIELDS_PENDING.with(|cache| {
        cache.run(client_type_id, move || async move {
            log::debug!("loading fields of client type {}", client_type_id);
            http::get_json(&format!("{}/{}/field", base(), client_type_id)).await
        })
    });
    load.await
}

pub async fn create_field(client_type_id: i64, dto: &ClientTypeFieldDto) -> Result<(), ApiError> {
    http::post_json(&format!("{}/{}/field", base(), client_type_id), dto).await
}

pub async fn update_field(field_id: i64, dto: &ClientTypeFieldDto) -> Result<(), ApiError> {
    http::put_json(&format!("{}/field/{}", base(), field_id), dto).await
}

pub async fn delete_field(field_id: i64) -> Result<(), ApiError> {
    http::delete(&format!("{}/field/{}", base(), field_id)).await
}

/// Persist the given order: each field gets its index as display order.
pub async fn save_field_order(fields: Vec<ClientTypeField>) -> BatchOutcome<usize> {
    let items = fields
        .iter()
        .enumerate()
        .map(|(i, f)| (i, f.field_label.clone()))
        .collect();
    let fields = &fields;
    run_batch(items, move |i| async move {
        let field = &fields[i];
        let dto = ClientTypeFieldDto {
            display_order: i as i32,
            ..ClientTypeFieldDto::from_field(field)
        };
        update_field(field.id, &dto).await
    })
    .await
}

// ============================================================================
// Permissions
// ============================================================================

const PERMISSION_PATH: &str = "client-type/permission";

pub async fn fetch_permissions(user_id: i64) -> Result<Vec<ClientTypePermission>, ApiError> {
    http::get_json(&format!("{}?userId={}", PERMISSION_PATH, user_id)).await
}

async fn apply(change: &GridChange<ClientTypePermission>) -> Result<(), ApiError> {
    match change {
        GridChange::Create(p) => http::post_json(PERMISSION_PATH, p).await,
        GridChange::Update(p) => match p.id {
            Some(id) => http::put_json(&format!("{}/{}", PERMISSION_PATH, id), p).await,
            None => http::post_json(PERMISSION_PATH, p).await,
        },
        GridChange::Delete(p) => match p.id {
            Some(id) => http::delete(&format!("{}/{}", PERMISSION_PATH, id)).await,
            None => Ok(()),
        },
    }
}

/// One request per changed row; every row reports its own outcome.
pub async fn save_permissions(
    changes: Vec<GridChange<ClientTypePermission>>,
    client_types: &NameLookup,
) -> BatchOutcome<usize> {
    let items = changes
        .iter()
        .enumerate()
        .map(|(i, c)| (i, lookup_name(client_types, Some(c.row().client_type_id))))
        .collect();
    let changes = &changes;
    run_batch(items, move |i| apply(&changes[i])).await
}
