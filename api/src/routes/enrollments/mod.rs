//! # enrollments Routes Module
//!
//! Student follow/unfollow actions, mounted flat under `/api` to match
//! the public surface (`/api/follow-course`, `/api/unfollow-course`).

pub mod post;

use crate::auth::guards::allow_student;
use axum::{Router, middleware::from_fn_with_state, routing::post};
use util::state::AppState;

use post::{follow_course, unfollow_course};

/// Builds the enrollment routes, all student-only.
///
/// - `POST /follow-course` → `follow_course`
/// - `POST /unfollow-course` → `unfollow_course`
pub fn enrollments_routes(app_state: AppState) -> Router<AppState> {
    Router::new()
        .route("/follow-course", post(follow_course))
        .route("/unfollow-course", post(unfollow_course))
        .route_layer(from_fn_with_state(app_state, allow_student))
}
