//! # uploads Routes Module
//!
//! Serves stored course uploads back under the public `/uploads/` prefix.
//! Wired directly on the application router, outside `/api`, because the
//! recorded `image_url` / `document_url` values point here.

pub mod get;
