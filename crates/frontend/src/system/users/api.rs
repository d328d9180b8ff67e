use crate::shared::http;
use contracts::domain::common::Resource;
use contracts::shared::api_error::ApiError;
use contracts::system::users::{CreateUserDto, UpdateUserDto, User};

pub async fn fetch_users() -> Result<Vec<User>, ApiError> {
    http::get_json(User::endpoint()).await
}

pub async fn create_user(dto: &CreateUserDto) -> Result<(), ApiError> {
    http::post_json(User::endpoint(), dto).await
}

pub async fn update_user(id: i64, dto: &UpdateUserDto) -> Result<(), ApiError> {
    http::put_json(&format!("{}/{}", User::endpoint(), id), dto).await
}

pub async fn delete_user(id: i64) -> Result<(), ApiError> {
    http::delete(&format!("{}/{}", User::endpoint(), id)).await
}
