use std::sync::Arc;

use axum::routing::{get, post, put};
use axum::{middleware as mw, Router};

use crate::server::endpoints::{rooms, schedule, sections, status};
use crate::server::middleware::*;
use crate::types::RoomState;

mod endpoints;
mod middleware;
mod types;

/// Creates a router that can be used by `axum`.
///
/// # Parameters
/// - `app_state`: The app server state.
///
/// # Returns
/// The router.
pub fn create_router(app_state: Arc<RoomState>) -> Router {
    // Routes scoped to a single existing room
    let room_router = Router::new()
        .route("/", get(rooms::get_room).delete(rooms::delete_room))
        .route("/sections", put(rooms::put_sections))
        .route("/sections/sample", post(rooms::post_sample_sections))
        .route("/schedule", get(schedule::get_room_schedule))
        .route("/conflicts", get(schedule::get_room_conflicts))
        .layer(mw::from_fn_with_state(
            app_state.clone(),
            room_validator::validate_room,
        ));

    // Stateless section tooling
    let sections_router = Router::new()
        .route("/sections/default", get(sections::get_default_sections))
        .route("/sections/sample", get(sections::get_sample_sections))
        .route("/sections/validate", post(sections::post_validate_sections));

    Router::new()
        .route("/health", get(status::get_health))
        .route("/catalog", get(status::get_catalog))
        .route("/rooms", get(rooms::get_rooms).post(rooms::post_room))
        .nest("/rooms/:room_id", room_router)
        .merge(sections_router)
        .with_state(app_state)
}
