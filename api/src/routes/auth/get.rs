use axum::{
    Extension, Json,
    extract::State,
    response::{IntoResponse, Redirect},
};
use axum_extra::extract::TypedHeader;
use headers::{Authorization, authorization::Bearer};
use serde::Serialize;
use util::state::AppState;

use crate::auth::AuthSession;
use crate::response::ApiResponse;

/// GET /logout
///
/// Destroys the presented session, if any, and redirects to `/`. Lookups
/// with the same token afterwards are rejected. A missing or unknown
/// token still redirects; there is nothing useful to report to a client
/// that is already signed out.
pub async fn logout(
    State(app_state): State<AppState>,
    bearer: Option<TypedHeader<Authorization<Bearer>>>,
) -> Redirect {
    if let Some(TypedHeader(Authorization(bearer))) = bearer {
        app_state.sessions().destroy(bearer.token()).await;
    }

    Redirect::to("/")
}

#[derive(Debug, Serialize, Default)]
pub struct MeResponse {
    pub user_id: i64,
    pub username: String,
    pub role: String,
}

/// GET /api/me
///
/// Returns the identity bound to the calling session. The frontend uses
/// this to decide which view (teacher or student) to render.
///
/// ### Responses
///
/// - `200 OK`
/// ```json
/// {
///   "success": true,
///   "data": {
///     "user_id": 1,
///     "username": "teacher@example.com",
///     "role": "teacher"
///   },
///   "message": "Session retrieved successfully"
/// }
/// ```
pub async fn get_me(Extension(AuthSession(session)): Extension<AuthSession>) -> impl IntoResponse {
    Json(ApiResponse::success(
        MeResponse {
            user_id: session.user_id,
            username: session.username,
            role: session.role.to_string(),
        },
        "Session retrieved successfully",
    ))
}
