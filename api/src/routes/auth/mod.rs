//! # auth Routes Module
//!
//! This module defines and wires up the session lifecycle routes.
//!
//! ## Structure
//! - `post.rs` — POST handlers (login)
//! - `get.rs` — GET handlers (logout, current session info)
//!
//! ## Usage
//! `auth_routes()` returns the root-level `/login` and `/logout` routes;
//! `GET /api/me` is wired separately in `routes::routes` because it sits
//! behind the authenticated layer.

pub mod get;
pub mod post;

use axum::{
    Router,
    routing::{get, post},
};
use util::state::AppState;

use get::logout;
use post::login;

/// Builds the root-level auth routes.
///
/// - `POST /login` → `login`
/// - `GET /logout` → `logout`
pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/login", post(login))
        .route("/logout", get(logout))
}
