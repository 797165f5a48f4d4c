//! Arx Server Library
//!
//! HTTP service for a catalog of student study resources (notes, exams and
//! similar documents) with their descriptive metadata.
//!
//! # Overview
//!
//! - **Ingestion**: multipart uploads are validated, stored in S3-compatible
//!   object storage, then recorded in PostgreSQL
//! - **Catalog**: stored resource records can be listed with their file
//!   locations
//! - **Profiles**: student profiles are saved keyed on their user id
//!
//! # Architecture
//!
//! Features are vertical slices under [`features`], each with its own
//! commands, queries and routes. Handlers depend on the [`storage::ObjectStore`],
//! [`features::resources::ResourceStore`] and [`features::profiles::ProfileStore`]
//! traits rather than concrete backends, so the HTTP surface can be tested
//! end to end against in-memory stores.
//!
//! Ingestion spans two systems that fail independently. The service stores
//! the file first and only then writes the catalog record; a record failure
//! after a successful store is reported to the client as an error while the
//! stored object stays behind. Cleaning up such orphans is left to offline
//! reconciliation against the catalog.
//!
//! # Example
//!
//! ```no_run
//! use arx_server::config::Config;
//! use arx_server::db::{PgProfileStore, PgResourceStore};
//! use arx_server::features::FeatureState;
//! use arx_server::storage::{S3ObjectStore, StorageConfig};
//! use sqlx::postgres::PgPoolOptions;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::load()?;
//!     let pool = PgPoolOptions::new().connect(&config.database.url).await?;
//!     let storage = S3ObjectStore::new(StorageConfig::from_env()?).await?;
//!
//!     let state = FeatureState {
//!         storage: Arc::new(storage),
//!         resources: Arc::new(PgResourceStore::new(pool.clone())),
//!         profiles: Arc::new(PgProfileStore::new(pool)),
//!     };
//!
//!     let app = arx_server::api::create_router(state, &config.cors);
//!     let listener = tokio::net::TcpListener::bind("127.0.0.1:5000").await?;
//!     axum::serve(listener, app).await?;
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod config;
pub mod db;
pub mod features;
pub mod middleware;
pub mod storage;
