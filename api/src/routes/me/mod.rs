//! `/me`: the user named by `X-User-Id`.

use axum::{Router, routing::get};
use get::get_me;
use util::state::AppState;

pub mod get;

/// - `GET /me` → `get_me`
pub fn me_routes() -> Router<AppState> {
    Router::new().route("/", get(get_me))
}
