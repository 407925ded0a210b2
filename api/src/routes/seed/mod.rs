use axum::{Router, routing::post};
use post::seed;
use util::state::AppState;

pub mod post;

/// - `POST /seed` → `seed` (development and test only)
pub fn seed_routes() -> Router<AppState> {
    Router::new().route("/", post(seed))
}
