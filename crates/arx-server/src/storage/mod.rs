//! Object-store gateway
//!
//! The ingestion pipeline talks to durable storage through the
//! [`ObjectStore`] trait; [`s3::S3ObjectStore`] is the production
//! implementation. The trait is object-safe and shared as
//! `Arc<dyn ObjectStore>` so tests can substitute in-memory doubles.

use async_trait::async_trait;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};
use thiserror::Error;

pub mod config;
pub mod s3;

pub use config::StorageConfig;
pub use s3::S3ObjectStore;

/// Outcome of a successful binary upload.
#[derive(Debug, Clone)]
pub struct StoredObject {
    /// Publicly dereferenceable location; becomes the resource's fileURI.
    pub uri: String,
    pub key: String,
    pub checksum: String,
    pub size: i64,
}

/// Upload failure reported by the object store.
///
/// Carries the upstream error text so the failure log names the real cause;
/// the HTTP surface never exposes it.
#[derive(Debug, Error)]
#[error("object store upload failed: {message}")]
pub struct UploadError {
    message: String,
}

impl UploadError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Binary upload contract consumed by the ingestion pipeline.
///
/// Implementations own their network retry and timeout behavior; callers
/// treat any error as terminal for the request.
#[async_trait]
pub trait ObjectStore: Send + Sync {
    /// Store `data` under `key` and return its public location.
    async fn put(
        &self,
        key: &str,
        data: Vec<u8>,
        content_type: Option<String>,
    ) -> Result<StoredObject, UploadError>;
}

static KEY_SEQUENCE: AtomicU64 = AtomicU64::new(0);

/// Build a collision-resistant storage key for an uploaded file.
///
/// Epoch-millis timestamp plus a process-local sequence number, so two
/// uploads in the same millisecond still get distinct keys, followed by the
/// sanitized original filename.
pub fn object_key(original_name: Option<&str>) -> String {
    let millis = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis())
        .unwrap_or_default();
    let seq = KEY_SEQUENCE.fetch_add(1, Ordering::Relaxed);

    format!(
        "{}-{}_{}",
        millis,
        seq,
        sanitize_file_name(original_name.unwrap_or(""))
    )
}

/// Reduce a client-supplied filename to a safe key segment.
///
/// Strips any path components, replaces characters outside
/// `[A-Za-z0-9._-]`, and falls back to `file` for empty names.
fn sanitize_file_name(name: &str) -> String {
    let base = name
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or("");

    let cleaned: String = base
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-') {
                c
            } else {
                '_'
            }
        })
        .collect();

    if cleaned.is_empty() {
        "file".to_string()
    } else {
        cleaned
    }
}

pub(crate) fn calculate_sha256(data: &[u8]) -> String {
    use sha2::{Digest, Sha256};
    let mut hasher = Sha256::new();
    hasher.update(data);
    format!("{:x}", hasher.finalize())
}
