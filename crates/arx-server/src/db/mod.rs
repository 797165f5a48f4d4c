//! Postgres-backed record stores.
//!
//! Each store implements its feature-level trait
//! ([`crate::features::resources::ResourceStore`],
//! [`crate::features::profiles::ProfileStore`]) so handlers never depend on
//! sqlx directly.

use thiserror::Error;

pub mod profiles;
pub mod resources;

pub use profiles::PgProfileStore;
pub use resources::PgResourceStore;

/// Record-store failure.
///
/// Carries the underlying error text for logs; callers treat any persist
/// failure the same way, so there is no variant to branch on.
#[derive(Debug, Error)]
#[error("record store operation failed: {message}")]
pub struct PersistError {
    message: String,
}

impl PersistError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl From<sqlx::Error> for PersistError {
    fn from(err: sqlx::Error) -> Self {
        Self::new(err.to_string())
    }
}
