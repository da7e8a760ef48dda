//! 核心响应处理模块

use axum::{
    body::Body,
    http::{header, Response, StatusCode},
};
use serde::{Deserialize, Serialize};

/// 错误与提示响应结构 `{"message": "..."}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// 固定的 500 响应，供 panic 兜底层使用，不依赖任何可能失败的路径
pub fn internal_error_response() -> Response<Body> {
    let body = serde_json::to_string(&MessageResponse::new("Internal server error"))
        .unwrap_or_else(|_| r#"{"message":"Internal server error"}"#.to_string());

    let mut response = Response::new(Body::from(body));
    *response.status_mut() = StatusCode::INTERNAL_SERVER_ERROR;
    response.headers_mut().insert(
        header::CONTENT_TYPE,
        header::HeaderValue::from_static("application/json"),
    );
    response
}
