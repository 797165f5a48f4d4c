//! Arx Common Library
#![deny(clippy::unwrap_used, clippy::expect_used)]
//!
//! Shared infrastructure for the Arx workspace.
//!
//! # Overview
//!
//! This crate provides functionality used across all Arx workspace members:
//!
//! - **Error Handling**: the common [`ArxError`] type and `Result` alias
//! - **Logging**: tracing subscriber configuration and initialization
//!
//! # Example
//!
//! ```no_run
//! use arx_common::logging::{init_logging, LogConfig};
//!
//! fn main() -> arx_common::Result<()> {
//!     let config = LogConfig::from_env()?;
//!     init_logging(&config)?;
//!     tracing::info!("ready");
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod logging;

// Re-export commonly used types
pub use error::{ArxError, Result};
