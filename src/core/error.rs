//! 核心错误处理模块

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use tracing::error;

use crate::app::users::validation::ValidationError;

/// 核心错误类型
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("{0}")]
    BadRequest(String),
    #[error("not found")]
    NotFound,
    #[error("{0}")]
    PayloadTooLarge(String),
    #[error("internal server error: {0}")]
    InternalServerError(String),
}

/// 错误响应结构
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
        }
    }
}

impl From<ValidationError> for CoreError {
    fn from(err: ValidationError) -> Self {
        CoreError::BadRequest(err.to_string())
    }
}

impl IntoResponse for CoreError {
    fn into_response(self) -> Response {
        match self {
            CoreError::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, Json(ErrorResponse::new(msg))).into_response()
            }
            CoreError::NotFound => StatusCode::NOT_FOUND.into_response(),
            CoreError::PayloadTooLarge(msg) => {
                (StatusCode::PAYLOAD_TOO_LARGE, Json(ErrorResponse::new(msg))).into_response()
            }
            CoreError::InternalServerError(msg) => {
                // 细节只写日志，不返回给客户端
                error!("内部错误: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorResponse::new("internal server error")),
                )
                    .into_response()
            }
        }
    }
}
