use std::sync::Arc;

use tracing::debug;

use crate::db::PersistError;
use crate::features::resources::store::ResourceStore;
use crate::features::resources::types::Resource;

#[derive(Debug, thiserror::Error)]
pub enum ListResourcesError {
    #[error(transparent)]
    Store(#[from] PersistError),
}

/// Return every catalogued resource.
#[tracing::instrument(skip(records))]
pub async fn handle(records: Arc<dyn ResourceStore>) -> Result<Vec<Resource>, ListResourcesError> {
    let resources = records.list_all().await?;
    debug!("Listed {} resources", resources.len());
    Ok(resources)
}
