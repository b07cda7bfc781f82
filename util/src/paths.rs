//! Filesystem layout helpers for uploaded course files.
//!
//! Uploaded images and documents live flat under the configured storage
//! root and are served back under the public `/uploads/` prefix.

use std::path::PathBuf;

use rand::Rng;

use crate::config;

/// Root directory for stored uploads, from `UPLOAD_STORAGE_ROOT`.
pub fn upload_storage_root() -> PathBuf {
    PathBuf::from(config::upload_storage_root())
}

/// Absolute on-disk path for a stored upload filename.
pub fn upload_path(filename: &str) -> PathBuf {
    upload_storage_root().join(filename)
}

/// Creates the upload storage root if it does not exist yet.
pub fn ensure_upload_storage() -> std::io::Result<()> {
    std::fs::create_dir_all(upload_storage_root())
}

/// Builds a randomized storage filename for an uploaded file:
/// `<unix-millis>-<random>` plus the original file's extension.
///
/// The original name is discarded entirely; only its extension survives.
pub fn generate_upload_filename(original: &str) -> String {
    let ext = std::path::Path::new(original)
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| format!(".{e}"))
        .unwrap_or_default();

    let millis = chrono::Utc::now().timestamp_millis();
    let nonce: u32 = rand::thread_rng().gen_range(0..1_000_000_000);

    format!("{millis}-{nonce}{ext}")
}

/// Public URL under which a stored filename is served.
pub fn public_upload_url(filename: &str) -> String {
    format!("/uploads/{filename}")
}
