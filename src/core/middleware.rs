//! 核心中间件模块

use std::any::Any;
use std::time::Instant;

use axum::{
    body::Body,
    extract::Request,
    http::{uri::PathAndQuery, Response, Uri},
    middleware::Next,
};
use tracing::{error, info};

use super::response::internal_error_response;

/// 路由前缀，大小写不敏感匹配
pub const API_PREFIX: &str = "/api/users";

/// 请求日志中间件
pub async fn request_logging_middleware(req: Request, next: Next) -> axum::response::Response {
    let start = Instant::now();
    let method = req.method().clone();
    let uri = req.uri().clone();

    let response = next.run(req).await;
    let status = response.status();
    let duration = start.elapsed();

    info!(
        "{} {} - {} - {}ms",
        method,
        uri,
        status,
        duration.as_millis()
    );

    response
}

/// 把任意大小写的 `/api/users` 前缀改写为小写，路径参数保持原样。
/// 必须在路由之前执行。
pub fn fold_route_case(mut req: Request) -> Request {
    let Some(folded) = fold_prefix(req.uri().path()) else {
        return req;
    };

    let path_and_query = match req.uri().query() {
        Some(query) => format!("{folded}?{query}"),
        None => folded,
    };
    let mut parts = req.uri().clone().into_parts();
    if let Ok(pq) = PathAndQuery::try_from(path_and_query) {
        parts.path_and_query = Some(pq);
        if let Ok(uri) = Uri::from_parts(parts) {
            *req.uri_mut() = uri;
        }
    }
    req
}

fn fold_prefix(path: &str) -> Option<String> {
    let head = path.get(..API_PREFIX.len())?;
    if head == API_PREFIX || !head.eq_ignore_ascii_case(API_PREFIX) {
        return None;
    }

    let rest = &path[API_PREFIX.len()..];
    if !rest.is_empty() && !rest.starts_with('/') {
        return None;
    }
    Some(format!("{API_PREFIX}{rest}"))
}

/// handler panic 时记录日志并返回统一的 500 响应
pub fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response<Body> {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic payload".to_string()
    };

    error!("处理请求时发生 panic: {}", detail);
    internal_error_response()
}
