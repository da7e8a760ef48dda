//! 核心错误处理模块

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use tracing::error;

use super::response::MessageResponse;

/// 核心错误类型
///
/// 每个变体对应一个固定的状态码和对外消息，内部细节只写日志。
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Invalid userId")]
    InvalidIdentifier,
    #[error("Missing required fields")]
    MissingFields,
    #[error("Invalid JSON body")]
    MalformedBody(String),
    #[error("Request entity too large")]
    PayloadTooLarge,
    #[error("User not found")]
    NotFound,
    #[error("Endpoint not found")]
    RouteNotFound,
    #[error("Internal server error")]
    Internal(String),
}

impl CoreError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            CoreError::InvalidIdentifier
            | CoreError::MissingFields
            | CoreError::MalformedBody(_) => StatusCode::BAD_REQUEST,
            CoreError::PayloadTooLarge => StatusCode::PAYLOAD_TOO_LARGE,
            CoreError::NotFound | CoreError::RouteNotFound => StatusCode::NOT_FOUND,
            CoreError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for CoreError {
    fn into_response(self) -> Response {
        match &self {
            CoreError::Internal(detail) => error!("请求处理失败: {}", detail),
            CoreError::MalformedBody(detail) => tracing::debug!("请求体解析失败: {}", detail),
            _ => {}
        }

        let status = self.status_code();
        (status, Json(MessageResponse::new(self.to_string()))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(CoreError::InvalidIdentifier.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(CoreError::MissingFields.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(
            CoreError::MalformedBody("eof".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            CoreError::PayloadTooLarge.status_code(),
            StatusCode::PAYLOAD_TOO_LARGE
        );
        assert_eq!(CoreError::NotFound.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(CoreError::RouteNotFound.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(
            CoreError::Internal("boom".into()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_internal_detail_is_hidden() {
        let err = CoreError::Internal("store lock poisoned".into());
        assert_eq!(err.to_string(), "Internal server error");

        let err = CoreError::MalformedBody("expected value at line 1".into());
        assert_eq!(err.to_string(), "Invalid JSON body");
    }
}
