//! HTTP route entry point for `/api/...`.
//!
//! This module defines all HTTP entry points under the `/api` namespace.
//! Routes are organized by domain (courses, enrollments, health), each
//! protected via appropriate access control middleware.
//!
//! Route groups include:
//! - `/health` → Health check endpoint (public)
//! - `/me` → Identity of the calling session
//! - `/my-courses` → Courses owned (teacher) or followed (student) by the caller
//! - `/courses` → Course catalogue, creation, and deletion
//! - `/follow-course`, `/unfollow-course` → Student enrollment actions
//!
//! The root-level `/login` and `/logout` routes live in `routes::auth`
//! and are mounted directly on the application router, outside `/api`.

use crate::auth::guards::allow_authenticated;
use crate::routes::auth::get::get_me;
use crate::routes::courses::get::get_my_courses;
use crate::routes::{
    courses::courses_routes, enrollments::enrollments_routes, health::health_routes,
};
use axum::{Router, middleware::from_fn_with_state, routing::get};
use util::state::AppState;

pub mod auth;
pub mod courses;
pub mod enrollments;
pub mod health;
pub mod uploads;

/// Builds the `/api` router.
///
/// Everything except `/health` sits behind the `allow_authenticated`
/// guard; role-restricted routes carry their own `allow_teacher` /
/// `allow_student` layers on top.
pub fn routes(app_state: AppState) -> Router<AppState> {
    let protected = Router::new()
        .route("/me", get(get_me))
        .route("/my-courses", get(get_my_courses))
        .nest("/courses", courses_routes(app_state.clone()))
        .merge(enrollments_routes(app_state.clone()))
        .route_layer(from_fn_with_state(app_state.clone(), allow_authenticated));

    Router::new()
        .nest("/health", health_routes())
        .merge(protected)
}
