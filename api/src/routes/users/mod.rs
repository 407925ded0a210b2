use axum::{Router, routing::get};
use get::list_users;
use util::state::AppState;

pub mod get;

/// - `GET /users` → `list_users`
pub fn users_routes() -> Router<AppState> {
    Router::new().route("/", get(list_users))
}
