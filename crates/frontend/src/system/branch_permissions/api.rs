use crate::shared::http;
use contracts::domain::common::{lookup_name, NameLookup};
use contracts::shared::api_error::ApiError;
use contracts::shared::batch::{run_batch, BatchOutcome};
use contracts::system::permissions::{BranchPermission, GridChange};

const ENDPOINT: &str = "branch/permission";

pub async fn fetch_for_user(user_id: i64) -> Result<Vec<BranchPermission>, ApiError> {
    http::get_json(&format!("{}?userId={}", ENDPOINT, user_id)).await
}

pub async fn create(permission: &BranchPermission) -> Result<(), ApiError> {
    http::post_json(ENDPOINT, permission).await
}

pub async fn update(id: i64, permission: &BranchPermission) -> Result<(), ApiError> {
    http::put_json(&format!("{}/{}", ENDPOINT, id), permission).await
}

pub async fn delete(id: i64) -> Result<(), ApiError> {
    http::delete(&format!("{}/{}", ENDPOINT, id)).await
}

async fn apply(change: &GridChange<BranchPermission>) -> Result<(), ApiError> {
    match change {
        GridChange::Create(p) => create(p).await,
        GridChange::Update(p) => match p.id {
            Some(id) => update(id, p).await,
            None => create(p).await,
        },
        GridChange::Delete(p) => match p.id {
            Some(id) => delete(id).await,
            None => Ok(()),
        },
    }
}

/// One request per changed row; every row reports its own outcome.
pub async fn save_changes(
    changes: Vec<GridChange<BranchPermission>>,
    branches: &NameLookup,
) -> BatchOutcome<usize> {
    let items = changes
        .iter()
        .enumerate()
        .map(|(i, c)| (i, lookup_name(branches, Some(c.row().branch_id))))
        .collect();
    let changes = &changes;
    run_batch(items, move |i| apply(&changes[i])).await
}
