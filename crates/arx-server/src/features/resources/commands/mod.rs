pub mod ingest;

pub use ingest::{IngestResourceCommand, IngestResourceError};
