use serde::{Deserialize, Serialize};
use std::env;

/// Object-store connection settings.
///
/// Loaded separately from the main [`crate::config::Config`] so tests and
/// tooling can point at a MinIO instance without touching server settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    pub endpoint: Option<String>,
    pub region: String,
    pub bucket: String,
    pub access_key: String,
    pub secret_key: String,
    pub path_style: bool,
}

impl StorageConfig {
    /// Read settings from `S3_*` variables, falling back to the AWS names
    /// (`AWS_S3_BUCKET`, `AWS_REGION`, `AWS_ACCESS_KEY_ID`,
    /// `AWS_SECRET_ACCESS_KEY`).
    pub fn from_env() -> anyhow::Result<Self> {
        let endpoint = env::var("S3_ENDPOINT").ok();
        // Custom endpoints are path-style deployments (MinIO) unless told
        // otherwise.
        let path_style = env::var("S3_PATH_STYLE")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(endpoint.is_some());

        Ok(Self {
            endpoint,
            region: env::var("S3_REGION")
                .or_else(|_| env::var("AWS_REGION"))
                .unwrap_or_else(|_| "us-east-1".to_string()),
            bucket: env::var("S3_BUCKET")
                .or_else(|_| env::var("AWS_S3_BUCKET"))
                .unwrap_or_else(|_| "arx-resources".to_string()),
            access_key: env::var("S3_ACCESS_KEY")
                .or_else(|_| env::var("AWS_ACCESS_KEY_ID"))
                .unwrap_or_else(|_| "minioadmin".to_string()),
            secret_key: env::var("S3_SECRET_KEY")
                .or_else(|_| env::var("AWS_SECRET_ACCESS_KEY"))
                .unwrap_or_else(|_| "minioadmin".to_string()),
            path_style,
        })
    }

    pub fn for_minio(endpoint: impl Into<String>, bucket: impl Into<String>) -> Self {
        Self {
            endpoint: Some(endpoint.into()),
            region: "us-east-1".to_string(),
            bucket: bucket.into(),
            access_key: "minioadmin".to_string(),
            secret_key: "minioadmin".to_string(),
            path_style: true,
        }
    }
}
