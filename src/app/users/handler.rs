//! 用户处理器

use axum::{
    extract::State,
    http::StatusCode,
    response::Json,
};

use super::{
    model::{CreateUserRequest, UpdateUserRequest, User},
    service::UserService,
};
use crate::core::{
    error::CoreError,
    extract::{JsonBody, UserId},
};

#[derive(Clone)]
pub struct AppState {
    pub user_service: UserService,
}

/// GET /api/users
pub async fn list_users(State(state): State<AppState>) -> Result<Json<Vec<User>>, CoreError> {
    let users = state.user_service.list_users()?;
    Ok(Json(users))
}

/// GET /api/users/:user_id
pub async fn get_user(
    State(state): State<AppState>,
    UserId(user_id): UserId,
) -> Result<Json<User>, CoreError> {
    let user = state.user_service.get_user(&user_id)?;
    Ok(Json(user))
}

/// POST /api/users
pub async fn create_user(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<CreateUserRequest>,
) -> Result<(StatusCode, Json<User>), CoreError> {
    let user = state.user_service.create_user(payload)?;
    Ok((StatusCode::CREATED, Json(user)))
}

/// PUT /api/users/:user_id
pub async fn update_user(
    State(state): State<AppState>,
    UserId(user_id): UserId,
    JsonBody(payload): JsonBody<UpdateUserRequest>,
) -> Result<Json<User>, CoreError> {
    let user = state.user_service.update_user(&user_id, payload)?;
    Ok(Json(user))
}

/// DELETE /api/users/:user_id
pub async fn delete_user(
    State(state): State<AppState>,
    UserId(user_id): UserId,
) -> Result<StatusCode, CoreError> {
    state.user_service.delete_user(&user_id)?;
    Ok(StatusCode::NO_CONTENT)
}

/// 未匹配任何路由（包括路径存在但方法不支持）
pub async fn route_not_found() -> CoreError {
    CoreError::RouteNotFound
}
