//! Object storage for event images.
//!
//! Uploads go to an S3-compatible bucket behind the [`ObjectStore`] trait;
//! tests use the in-memory implementation.

pub mod memory;
pub mod s3;

pub use memory::MemoryStore;
pub use s3::S3Store;

use async_trait::async_trait;

/// Errors produced by an object store backend.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("Object upload failed: {0}")]
    Upload(String),

    #[error("Object delete failed: {0}")]
    Delete(String),
}

/// Backend-agnostic object store for event images.
#[async_trait]
pub trait ObjectStore: Send + Sync {
    /// Upload `bytes` under `key` with the given content type.
    async fn upload(&self, key: &str, bytes: Vec<u8>, content_type: &str)
        -> Result<(), StorageError>;

    /// Remove the object stored under `key`.
    async fn delete(&self, key: &str) -> Result<(), StorageError>;

    /// Publicly reachable URL for the object stored under `key`.
    fn public_url(&self, key: &str) -> String;
}

/// Build the storage key for an event image.
///
/// Keys are namespaced under `events/` and made unique per submitter and
/// upload instant, keeping the original file extension (or `bin` when the
/// filename has none).
pub fn image_key(user_id: i64, uploaded_at_unix: i64, filename: &str) -> String {
    let ext = filename
        .rsplit_once('.')
        .map(|(_, ext)| ext)
        .filter(|ext| !ext.is_empty())
        .unwrap_or("bin");
    format!("events/{user_id}-{uploaded_at_unix}.{ext}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn image_key_keeps_extension() {
        assert_eq!(image_key(7, 1700000000, "poster.png"), "events/7-1700000000.png");
        assert_eq!(image_key(7, 1700000000, "a.b.jpeg"), "events/7-1700000000.jpeg");
    }

    #[test]
    fn image_key_defaults_missing_extension() {
        assert_eq!(image_key(3, 42, "poster"), "events/3-42.bin");
        assert_eq!(image_key(3, 42, "poster."), "events/3-42.bin");
    }
}
