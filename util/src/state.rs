//! Application state container shared across Axum route handlers.
//!
//! Holds the database connection and the in-memory session store. Cloned
//! into route handlers via Axum's `State<T>` extractor.

use crate::session::SessionStore;
use sea_orm::DatabaseConnection;

/// Central application state shared across the server.
///
/// This includes:
/// - A cloned, thread-safe database connection for use with SeaORM.
/// - The process-wide `SessionStore` read by the auth guards.
#[derive(Clone)]
pub struct AppState {
    db: DatabaseConnection,
    sessions: SessionStore,
}

impl AppState {
    /// Creates a new `AppState` with the given database connection and
    /// session store.
    pub fn new(db: DatabaseConnection, sessions: SessionStore) -> Self {
        Self { db, sessions }
    }

    /// Returns a shared reference to the internal `DatabaseConnection`.
    pub fn db(&self) -> &DatabaseConnection {
        &self.db
    }

    /// Returns a shared reference to the session store.
    pub fn sessions(&self) -> &SessionStore {
        &self.sessions
    }

    /// Returns a cloned copy of the database connection.
    ///
    /// Useful for spawned tasks that require ownership.
    pub fn db_clone(&self) -> DatabaseConnection {
        self.db.clone()
    }

    /// Returns a cloned handle to the session store.
    pub fn sessions_clone(&self) -> SessionStore {
        self.sessions.clone()
    }
}
