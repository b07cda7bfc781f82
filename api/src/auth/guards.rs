use crate::auth::session::AuthSession;
use crate::response::ApiResponse;
use axum::{
    Json,
    body::Body,
    extract::{FromRequestParts, State},
    http::{Request, StatusCode},
    middleware::Next,
    response::Response,
};
use util::{roles::Role, state::AppState};

// --- Role Based Access Guards ---

#[derive(serde::Serialize, Default)]
pub struct Empty;

/// Helper to extract and validate the session from request headers and
/// insert it back into the request extensions for the handler.
async fn extract_and_insert_session(
    app_state: &AppState,
    mut req: Request<Body>,
) -> Result<(Request<Body>, AuthSession), (StatusCode, Json<ApiResponse<Empty>>)> {
    let (mut parts, body) = req.into_parts();
    let session = AuthSession::from_request_parts(&mut parts, app_state)
        .await
        .map_err(|_| {
            (
                StatusCode::UNAUTHORIZED,
                Json(ApiResponse::error("Authentication required")),
            )
        })?;

    req = Request::from_parts(parts, body);
    req.extensions_mut().insert(session.clone());
    Ok((req, session))
}

/// Basic guard to ensure the request carries a live session.
pub async fn allow_authenticated(
    State(app_state): State<AppState>,
    req: Request<Body>,
    next: Next,
) -> Result<Response, (StatusCode, Json<ApiResponse<Empty>>)> {
    let (req, _session) = extract_and_insert_session(&app_state, req).await?;

    Ok(next.run(req).await)
}

/// Base role guard that the per-role guards build upon.
///
/// An absent session and a session with the wrong role are both denials;
/// only the status and message text differ. No data is read or written
/// before this check passes.
async fn allow_role_base(
    app_state: AppState,
    req: Request<Body>,
    next: Next,
    required_role: Role,
    failure_msg: &str,
) -> Result<Response, (StatusCode, Json<ApiResponse<Empty>>)> {
    let (req, AuthSession(session)) = extract_and_insert_session(&app_state, req).await?;

    if session.role != required_role {
        return Err((StatusCode::FORBIDDEN, Json(ApiResponse::error(failure_msg))));
    }

    Ok(next.run(req).await)
}

/// Guard for teacher-only routes (course creation and deletion).
pub async fn allow_teacher(
    State(app_state): State<AppState>,
    req: Request<Body>,
    next: Next,
) -> Result<Response, (StatusCode, Json<ApiResponse<Empty>>)> {
    allow_role_base(app_state, req, next, Role::Teacher, "Teacher access required").await
}

/// Guard for student-only routes (follow / unfollow).
pub async fn allow_student(
    State(app_state): State<AppState>,
    req: Request<Body>,
    next: Next,
) -> Result<Response, (StatusCode, Json<ApiResponse<Empty>>)> {
    allow_role_base(app_state, req, next, Role::Student, "Student access required").await
}
