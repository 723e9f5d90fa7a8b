//! 应用层：路由组装与共享状态

pub mod home;
pub mod users;

use axum::{middleware, routing::get, Router};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::core::{error::CoreError, middleware::request_logging_middleware};
use users::UserService;

/// 处理器共享状态
#[derive(Clone, Default)]
pub struct AppState {
    pub user_service: UserService,
}

impl AppState {
    pub fn new(user_service: UserService) -> Self {
        Self { user_service }
    }
}

/// 组装完整路由
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(home::home))
        .nest("/usermanagement", users::routes())
        .fallback(not_found)
        .layer(middleware::from_fn(request_logging_middleware))
        .layer(CorsLayer::new().allow_origin(Any).allow_methods(Any).allow_headers(Any))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn not_found() -> CoreError {
    CoreError::NotFound("Resource not found.".to_string())
}
