//! In-memory session store keyed by opaque bearer tokens.
//!
//! Sessions are created at login, destroyed at logout, and read by every
//! protected route. All state lives in this process; nothing is persisted.

use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::roles::Role;

/// A server-held session record associating a token with an authenticated
/// identity and role. `username` holds the user's email, which doubles as
/// the display identity for the frontend.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub user_id: i64,
    pub role: Role,
    pub username: String,
}

/// Cloneable handle over the process-wide session map.
///
/// Access is by key only, so a single `RwLock` over the map suffices; no
/// cross-key coordination is ever needed.
#[derive(Clone, Default)]
pub struct SessionStore {
    inner: Arc<RwLock<HashMap<String, Session>>>,
}

impl SessionStore {
    /// Creates a new, empty `SessionStore`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a session for the given identity and returns its token.
    ///
    /// Tokens are random UUIDs. Existing sessions, including other
    /// sessions of the same user, are left untouched.
    pub async fn create(&self, user_id: i64, role: Role, username: impl Into<String>) -> String {
        let token = Uuid::new_v4().to_string();
        let session = Session {
            user_id,
            role,
            username: username.into(),
        };
        self.inner.write().await.insert(token.clone(), session);
        token
    }

    /// Resolves a token to its session, if one exists.
    pub async fn lookup(&self, token: &str) -> Option<Session> {
        self.inner.read().await.get(token).cloned()
    }

    /// Removes the session for `token`. Unknown tokens are a no-op;
    /// subsequent lookups with the same token return `None`.
    pub async fn destroy(&self, token: &str) {
        self.inner.write().await.remove(token);
    }
}
