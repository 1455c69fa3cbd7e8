//! 健康检查

use axum::{extract::State, response::Json};
use serde::Serialize;

use super::users::handler::AppState;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub users_count: usize,
    pub timestamp: String,
}

pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        users_count: state.user_service.user_count(),
        timestamp: chrono::Utc::now().to_rfc3339(),
    })
}
