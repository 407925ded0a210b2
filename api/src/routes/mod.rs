//! HTTP route entry point for `/api/...`.
//!
//! - `/health` → Health check endpoint (public)
//! - `/me` → The requesting user (identified)
//! - `/users` → User listing (public)
//! - `/courses` → Course listing and detail (public)
//! - `/analytics` → Course, assignment and student statistics (identified, access-checked)
//! - `/seed` → Demo data generator (public, never mounted in production)

use crate::auth::guards::allow_authenticated;
use crate::routes::{
    analytics::analytics_routes, courses::courses_routes, health::health_routes, me::me_routes,
    seed::seed_routes, users::users_routes,
};
use axum::{Router, middleware::from_fn_with_state};
use util::{config, state::AppState};

pub mod analytics;
pub mod common;
pub mod courses;
pub mod health;
pub mod me;
pub mod seed;
pub mod users;

/// Builds the complete application router for all HTTP endpoints.
///
/// The `/seed` group is mounted here rather than in `main` so the test
/// harness gets exactly the router the server runs.
pub fn routes(app_state: AppState) -> Router {
    let mut router: Router<AppState> = Router::new()
        .nest("/health", health_routes())
        .nest(
            "/me",
            me_routes().route_layer(from_fn_with_state(app_state.clone(), allow_authenticated)),
        )
        .nest("/users", users_routes())
        .nest("/courses", courses_routes())
        .nest(
            "/analytics",
            analytics_routes()
                .route_layer(from_fn_with_state(app_state.clone(), allow_authenticated)),
        );

    if config::is_production() {
        tracing::info!("[prod] Skipping /seed routes");
    } else {
        router = router.nest("/seed", seed_routes());
        tracing::info!("[dev/test] Mounted /seed routes (env = {})", config::env());
    }

    router.with_state(app_state)
}
