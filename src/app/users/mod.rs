//! 用户管理应用

pub mod handler;
pub mod model;
pub mod service;
pub mod store;
pub mod validation;

use axum::{routing::get, Router};

use handler::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/users", get(handler::list_users).post(handler::create_user))
        .route(
            "/users/:id",
            get(handler::get_user)
                .patch(handler::update_user)
                .delete(handler::delete_user),
        )
}
