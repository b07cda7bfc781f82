//! # courses Routes Module
//!
//! This module defines and wires up routes for the `/api/courses`
//! endpoint group.
//!
//! ## Structure
//! - `get.rs` — GET handlers (discoverable catalogue, caller's courses)
//! - `post.rs` — POST handlers (course creation with uploads)
//! - `delete.rs` — DELETE handlers (owner-checked deletion)

pub mod delete;
pub mod get;
pub mod post;

use crate::auth::guards::allow_teacher;
use axum::{
    Router,
    middleware::from_fn_with_state,
    routing::{delete, get, post},
};
use util::state::AppState;

use delete::delete_course;
use get::list_courses;
use post::create_course;

/// Builds the `/courses` route group, mapping HTTP methods to handlers.
///
/// - `GET /courses` → `list_courses` (any session)
/// - `POST /courses` → `create_course` (teachers)
/// - `DELETE /courses/{course_id}` → `delete_course` (owning teacher)
///
/// The teacher guard covers only role; ownership on delete is checked in
/// the handler as a second authorization layer.
pub fn courses_routes(app_state: AppState) -> Router<AppState> {
    Router::new()
        .route("/", get(list_courses))
        .route(
            "/",
            post(create_course).route_layer(from_fn_with_state(app_state.clone(), allow_teacher)),
        )
        .route(
            "/{course_id}",
            delete(delete_course).route_layer(from_fn_with_state(app_state, allow_teacher)),
        )
}
