//! API 路由模块
//!
//! # 结构
//!
//! - [`home`] - 首页静态页面
//! - [`health`] - 健康检查
//! - [`cafes`] - 咖啡馆资源接口 (列表/随机/搜索/新增/改价/删除)

pub mod cafes;
pub mod health;
pub mod home;

use axum::{Router, middleware};
use tower_http::compression::CompressionLayer;
use tower_http::cors::CorsLayer;

use crate::core::ServerState;

/// HTTP 请求日志中间件
async fn log_request(
    request: http::Request<axum::body::Body>,
    next: middleware::Next,
) -> http::Response<axum::body::Body> {
    let method = request.method().clone();
    let uri = request.uri().clone();

    let response = next.run(request).await;

    let status = response.status();

    tracing::info!(target: "http_access", "{} {} {}", method, uri, status);

    response
}

/// Build the Axum router (without state)
pub fn build_app() -> Router<ServerState> {
    Router::<ServerState>::new()
        .merge(home::router())
        .merge(health::router())
        .merge(cafes::router())
}

/// Build the full application with state and middleware
pub fn build_app_with_state(state: ServerState) -> Router {
    build_app()
        .with_state(state)
        // Tower HTTP 中间件
        .layer(CorsLayer::permissive())
        .layer(CompressionLayer::new())
        // HTTP 请求日志中间件
        .layer(middleware::from_fn(log_request))
}
