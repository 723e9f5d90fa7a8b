//! 用户管理：`/usermanagement/users`

pub mod handler;
pub mod id;
pub mod model;
pub mod service;
pub mod store;

use axum::{routing::get, Router};

use super::AppState;

pub use model::{CreateUserRequest, DeleteUserResponse, UpdateUserRequest, User};
pub use service::UserService;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/users", get(handler::list_users).post(handler::create_user))
        .route(
            "/users/:id",
            get(handler::get_user)
                .put(handler::update_user)
                .delete(handler::delete_user),
        )
}
