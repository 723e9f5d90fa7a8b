//! 用户处理器

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};

use super::model::{CreateUserRequest, DeleteUserResponse, UpdateUserRequest, User};
use crate::app::AppState;
use crate::core::{error::CoreError, extract::JsonBody};

pub async fn list_users(State(state): State<AppState>) -> Json<Vec<User>> {
    Json(state.user_service.list_users())
}

pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<User>, CoreError> {
    let user = state.user_service.get_user(&id)?;
    Ok(Json(user))
}

pub async fn create_user(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<CreateUserRequest>,
) -> Result<(StatusCode, Json<User>), CoreError> {
    let user = state.user_service.create_user(payload)?;
    Ok((StatusCode::CREATED, Json(user)))
}

/// 先确认用户存在再解析请求体：未知 ID 的 404 优先于请求体错误的 400
pub async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<JsonBody<UpdateUserRequest>, CoreError>,
) -> Result<Json<User>, CoreError> {
    state.user_service.get_user(&id)?;
    let JsonBody(changes) = payload?;

    let user = state.user_service.update_user(&id, changes)?;
    Ok(Json(user))
}

pub async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<DeleteUserResponse>, CoreError> {
    let user = state.user_service.delete_user(&id)?;
    Ok(Json(DeleteUserResponse::new(user)))
}
