use axum::{
    body::Body,
    extract::{ConnectInfo, FromRequestParts, State},
    http::{Method, Request, StatusCode},
    middleware::Next,
    response::Response,
};
use axum_extra::extract::TypedHeader;
use headers::{Origin, UserAgent};
use std::net::SocketAddr;
use tracing::info;
use util::state::AppState;

use crate::auth::session::AuthSession;

/// Logs method, path, IP address, user ID (if authenticated), origin, and
/// user-agent for each incoming HTTP request. Automatically skips CORS
/// preflight `OPTIONS` requests.
///
/// ### Usage:
/// Apply this middleware globally using:
///
/// ```ignore
/// use axum::Router;
/// use axum::middleware::from_fn_with_state;
/// use api::auth::middleware::log_request;
///
/// let app = Router::new().layer(from_fn_with_state(app_state, log_request));
/// ```
pub async fn log_request(
    State(app_state): State<AppState>,
    ConnectInfo(addr): ConnectInfo<SocketAddr>,
    req: Request<Body>,
    next: Next,
) -> Result<Response, StatusCode> {
    let (mut parts, body) = req.into_parts();

    // Skip logging for preflight requests
    if parts.method == Method::OPTIONS {
        let req = Request::from_parts(parts, body);
        return Ok(next.run(req).await);
    }

    // Try resolving the caller's session for the user id
    let user_id = AuthSession::from_request_parts(&mut parts, &app_state)
        .await
        .ok()
        .map(|AuthSession(session)| session.user_id);

    // Try extracting Origin and User-Agent headers
    let origin = TypedHeader::<Origin>::from_request_parts(&mut parts, &app_state)
        .await
        .ok()
        .map(|TypedHeader(o)| o.to_string());

    let user_agent = TypedHeader::<UserAgent>::from_request_parts(&mut parts, &app_state)
        .await
        .ok()
        .map(|TypedHeader(ua)| ua.to_string());

    // Log relevant request metadata
    info!(
        method = ?parts.method,
        path = %parts.uri.path(),
        ip = %addr.ip(),
        user = user_id.unwrap_or(0),
        origin = origin.unwrap_or_else(|| "unknown".into()),
        user_agent = user_agent.unwrap_or_else(|| "unknown".into()),
        "Incoming request"
    );

    let req = Request::from_parts(parts, body);
    Ok(next.run(req).await)
}
