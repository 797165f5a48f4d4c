use anyhow::Result;
use async_trait::async_trait;
use aws_sdk_s3::{
    config::{Credentials, Region},
    primitives::ByteStream,
    Client,
};
use tracing::{debug, info, instrument};

use super::{calculate_sha256, ObjectStore, StorageConfig, StoredObject, UploadError};

/// S3-compatible [`ObjectStore`] backed by the AWS SDK.
///
/// Works against AWS proper and against path-style deployments such as
/// MinIO, depending on [`StorageConfig`].
#[derive(Clone)]
pub struct S3ObjectStore {
    client: Client,
    bucket: String,
    public_base: String,
}

impl S3ObjectStore {
    pub async fn new(config: StorageConfig) -> Result<Self> {
        debug!(
            endpoint = ?config.endpoint,
            region = %config.region,
            bucket = %config.bucket,
            path_style = config.path_style,
            "Initializing object store"
        );

        let credentials = Credentials::new(
            &config.access_key,
            &config.secret_key,
            None,
            None,
            "arx-storage",
        );

        let mut s3_config_builder = aws_sdk_s3::Config::builder()
            .credentials_provider(credentials)
            .region(Region::new(config.region.clone()))
            .force_path_style(config.path_style);

        if let Some(endpoint) = &config.endpoint {
            s3_config_builder = s3_config_builder.endpoint_url(endpoint);
        }

        let client = Client::from_conf(s3_config_builder.build());

        let public_base = match &config.endpoint {
            Some(endpoint) => format!("{}/{}", endpoint.trim_end_matches('/'), config.bucket),
            None => format!(
                "https://{}.s3.{}.amazonaws.com",
                config.bucket, config.region
            ),
        };

        info!(
            "Object store client initialized for bucket: {}",
            config.bucket
        );

        Ok(Self {
            client,
            bucket: config.bucket,
            public_base,
        })
    }

    /// Public location of an object under this store's bucket.
    ///
    /// This is what gets persisted as a resource's fileURI.
    fn object_url(&self, key: &str) -> String {
        format!("{}/{}", self.public_base, key)
    }
}

#[async_trait]
impl ObjectStore for S3ObjectStore {
    #[instrument(skip(self, data))]
    async fn put(
        &self,
        key: &str,
        data: Vec<u8>,
        content_type: Option<String>,
    ) -> Result<StoredObject, UploadError> {
        let checksum = calculate_sha256(&data);
        let size = data.len() as i64;

        debug!("Uploading {} bytes to s3://{}/{}", size, self.bucket, key);

        let mut request = self
            .client
            .put_object()
            .bucket(&self.bucket)
            .key(key)
            .body(ByteStream::from(data));

        if let Some(ct) = content_type {
            request = request.content_type(ct);
        }

        request.send().await.map_err(|e| {
            UploadError::new(format!(
                "failed to upload to s3://{}/{}: {}",
                self.bucket, key, e
            ))
        })?;

        info!("Successfully uploaded to s3://{}/{}", self.bucket, key);

        Ok(StoredObject {
            uri: self.object_url(key),
            key: key.to_string(),
            checksum,
            size,
        })
    }
}
