use async_trait::async_trait;

use super::types::{NewResource, Resource};
use crate::db::PersistError;

/// Resource record persistence, behind a trait so handlers can be exercised
/// against in-memory stores.
#[async_trait]
pub trait ResourceStore: Send + Sync {
    /// Persist a new resource record and return the stored row.
    async fn create(&self, new: NewResource) -> Result<Resource, PersistError>;

    /// Every stored resource record, oldest first.
    async fn list_all(&self) -> Result<Vec<Resource>, PersistError>;
}
