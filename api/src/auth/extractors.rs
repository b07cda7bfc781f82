use axum::{
    extract::{FromRef, FromRequestParts},
    http::{StatusCode, request::Parts},
};
use axum_extra::extract::TypedHeader;
use headers::{Authorization, authorization::Bearer};
use util::state::AppState;

use crate::auth::session::AuthSession;

/// Implements extraction of `AuthSession` from request headers.
///
/// Reads the opaque token from the `Authorization: Bearer` header and
/// resolves it against the in-memory session store. There is nothing to
/// cryptographically verify; a token is valid exactly while the store
/// holds it.
///
/// # Errors
/// - Returns `401 Unauthorized` if the header is missing or malformed,
///   or the token does not resolve to a live session.
///
/// # Example
/// ```ignore
/// async fn protected_route(Extension(AuthSession(session)): Extension<AuthSession>) -> impl IntoResponse {
///     // Session is now available
/// }
/// ```
impl<S> FromRequestParts<S> for AuthSession
where
    AppState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = (StatusCode, &'static str);

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let TypedHeader(Authorization(bearer)) =
            TypedHeader::<Authorization<Bearer>>::from_request_parts(parts, state)
                .await
                .map_err(|_| {
                    (
                        StatusCode::UNAUTHORIZED,
                        "Missing or invalid Authorization header",
                    )
                })?;

        let app_state = AppState::from_ref(state);
        let session = app_state
            .sessions()
            .lookup(bearer.token())
            .await
            .ok_or((StatusCode::UNAUTHORIZED, "Invalid or expired session token"))?;

        Ok(AuthSession(session))
    }
}
