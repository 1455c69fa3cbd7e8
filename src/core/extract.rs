//! JSON 请求体解析失败时的错误映射

use axum::{extract::rejection::JsonRejection, http::StatusCode};

use super::error::CoreError;

pub const CONTENT_TYPE_MESSAGE: &str = "Request Content-Type must be application/json";
pub const MALFORMED_BODY_MESSAGE: &str = "Request body must be a JSON object with string fields";
pub const BODY_TOO_LARGE_MESSAGE: &str = "Request body too large";

impl From<JsonRejection> for CoreError {
    fn from(rejection: JsonRejection) -> Self {
        match rejection {
            JsonRejection::MissingJsonContentType(_) => {
                CoreError::BadRequest(CONTENT_TYPE_MESSAGE.to_string())
            }
            JsonRejection::JsonDataError(_) | JsonRejection::JsonSyntaxError(_) => {
                CoreError::BadRequest(MALFORMED_BODY_MESSAGE.to_string())
            }
            // 不把 axum 的内部错误文本返回给客户端
            other if other.status() == StatusCode::PAYLOAD_TOO_LARGE => {
                CoreError::PayloadTooLarge(BODY_TOO_LARGE_MESSAGE.to_string())
            }
            _ => CoreError::BadRequest(MALFORMED_BODY_MESSAGE.to_string()),
        }
    }
}
