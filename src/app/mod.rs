//! 应用层：路由装配

pub mod users;

use std::sync::Arc;

use axum::{
    extract::{DefaultBodyLimit, Request},
    middleware,
    routing::get,
    Router,
};
use tower::util::MapRequest;
use tower_http::{catch_panic::CatchPanicLayer, normalize_path::NormalizePath, trace::TraceLayer};

use crate::core::middleware::{fold_route_case, handle_panic, request_logging_middleware};
use crate::infrastructure::store::UserStore;
use users::{handler, AppState, UserService};

/// 请求体上限，与常见 JSON 解析中间件的默认值一致
pub const BODY_LIMIT: usize = 100 * 1024;

/// 完整的应用服务：先规范化路径（去掉结尾斜杠、前缀大小写），再进入路由
pub type App = NormalizePath<MapRequest<Router, fn(Request) -> Request>>;

/// 用户资源的路由表，路径存在但方法不支持时同样返回 "Endpoint not found"
pub fn routes() -> Router<AppState> {
    Router::new()
        .route(
            "/api/users",
            get(handler::list_users)
                .post(handler::create_user)
                .fallback(handler::route_not_found),
        )
        .route(
            "/api/users/:user_id",
            get(handler::get_user)
                .put(handler::update_user)
                .delete(handler::delete_user)
                .fallback(handler::route_not_found),
        )
        .fallback(handler::route_not_found)
}

/// 通用中间件：请求日志、tracing span、panic 兜底、请求体上限，
/// 外层再包一层路径规范化
pub fn with_layers(router: Router) -> App {
    let router = router
        .layer(DefaultBodyLimit::max(BODY_LIMIT))
        .layer(middleware::from_fn(request_logging_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(CatchPanicLayer::custom(handle_panic));

    let fold: fn(Request) -> Request = fold_route_case;
    NormalizePath::trim_trailing_slash(MapRequest::new(router, fold))
}

/// 以给定的存储构建完整应用
pub fn router(store: Arc<UserStore>) -> App {
    let state = AppState {
        user_service: UserService::new(store),
    };
    with_layers(routes().with_state(state))
}
