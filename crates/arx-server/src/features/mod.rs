//! Feature modules implementing the Arx API
//!
//! Each feature is organized as a vertical slice with its own commands,
//! queries, and routes:
//!
//! - **resources**: file ingestion and catalog listing for study resources
//! - **profiles**: student profile storage
//!
//! Handlers receive their stores through [`FeatureState`] as trait objects,
//! so route-level tests run against in-memory stores instead of Postgres
//! and S3.

pub mod profiles;
pub mod resources;

use std::sync::Arc;

use axum::Router;

use crate::features::profiles::ProfileStore;
use crate::features::resources::ResourceStore;
use crate::storage::ObjectStore;

/// Shared state for all feature routes
#[derive(Clone)]
pub struct FeatureState {
    /// Durable file storage for uploaded resources
    pub storage: Arc<dyn ObjectStore>,
    /// Resource record persistence
    pub resources: Arc<dyn ResourceStore>,
    /// Student profile persistence
    pub profiles: Arc<dyn ProfileStore>,
}

/// Creates the API router with all feature routes mounted at the root:
///
/// - `POST /upload`, `GET /resources` - resource ingestion and listing
/// - `POST /user-profile` - profile storage
pub fn router(state: FeatureState) -> Router<()> {
    Router::new()
        .merge(resources::resource_routes())
        .merge(profiles::profile_routes())
        .with_state(state)
}
