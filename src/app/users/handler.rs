//! 用户处理器

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Json},
};

use super::{
    model::{User, UserFields},
    service::{parse_user_id, UserService},
};
use crate::core::error::CoreError;

#[derive(Clone)]
pub struct AppState {
    pub user_service: UserService,
}

pub async fn list_users(State(state): State<AppState>) -> Json<Vec<User>> {
    Json(state.user_service.list_users())
}

pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<User>, CoreError> {
    let id = parse_user_id(&id)?;
    let user = state.user_service.get_user(&id)?;
    Ok(Json(user))
}

pub async fn create_user(
    State(state): State<AppState>,
    payload: Result<Json<UserFields>, JsonRejection>,
) -> Result<impl IntoResponse, CoreError> {
    let Json(fields) = payload?;
    let user = state.user_service.create_user(fields)?;
    let location = format!("/users/{}", user.id);
    Ok((StatusCode::CREATED, [(header::LOCATION, location)], Json(user)))
}

/// 先确认用户存在，再解析请求体，最后校验
pub async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<UserFields>, JsonRejection>,
) -> Result<StatusCode, CoreError> {
    let id = parse_user_id(&id)?;
    state.user_service.get_user(&id)?;

    let Json(fields) = payload?;
    state.user_service.update_user(&id, fields)?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, CoreError> {
    let id = parse_user_id(&id)?;
    state.user_service.delete_user(&id)?;
    Ok(StatusCode::NO_CONTENT)
}
