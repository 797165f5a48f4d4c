pub mod commands;
pub mod queries;
pub mod routes;
pub mod store;
pub mod types;
pub mod validation;

pub use commands::{IngestResourceCommand, IngestResourceError};

pub use queries::ListResourcesError;

pub use routes::resource_routes;

pub use store::ResourceStore;

pub use types::{NewResource, Resource, ResourceMetadata};
