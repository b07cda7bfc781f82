use util::session::Session;

/// Request-scoped wrapper around the caller's resolved session.
///
/// Inserted into request extensions by the auth guards so handlers can
/// take it with `Extension<AuthSession>` instead of re-resolving the
/// bearer token themselves.
#[derive(Debug, Clone)]
pub struct AuthSession(pub Session);
