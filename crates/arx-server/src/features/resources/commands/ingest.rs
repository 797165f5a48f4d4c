use std::sync::Arc;

use tracing::{debug, error, info};

use crate::db::PersistError;
use crate::features::resources::store::ResourceStore;
use crate::features::resources::types::{NewResource, Resource};
use crate::features::resources::validation::{parse_resource_metadata, MetadataError};
use crate::storage::{object_key, ObjectStore, UploadError};

/// One upload request: the file's bytes plus the raw `resourceData` JSON.
#[derive(Debug, Clone)]
pub struct IngestResourceCommand {
    pub file_name: Option<String>,
    pub content_type: Option<String>,
    pub content: Vec<u8>,
    pub resource_data: Option<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum IngestResourceError {
    #[error("no file was attached to the upload")]
    MissingFile,
    #[error(transparent)]
    Metadata(#[from] MetadataError),
    #[error(transparent)]
    Upload(#[from] UploadError),
    #[error("resource record was not persisted, object at {file_uri} is orphaned: {source}")]
    Persist {
        file_uri: String,
        source: PersistError,
    },
}

/// Run the two-phase ingestion: store the file, then persist its record.
///
/// Validation failures happen before any side effect. A record-store failure
/// after a successful upload leaves the stored object in place; the error
/// carries its location so the log names what was orphaned. Reconciling
/// orphans is an offline concern.
#[tracing::instrument(
    skip(storage, records, command),
    fields(file_name = ?command.file_name, bytes = command.content.len())
)]
pub async fn handle(
    storage: Arc<dyn ObjectStore>,
    records: Arc<dyn ResourceStore>,
    command: IngestResourceCommand,
) -> Result<Resource, IngestResourceError> {
    if command.content.is_empty() {
        return Err(IngestResourceError::MissingFile);
    }

    let metadata = parse_resource_metadata(command.resource_data.as_deref().unwrap_or(""))?;

    let key = object_key(command.file_name.as_deref());
    let stored = storage
        .put(&key, command.content, command.content_type)
        .await?;

    debug!("Upload stored at {}", stored.uri);

    match records
        .create(NewResource {
            file_uri: stored.uri.clone(),
            metadata,
        })
        .await
    {
        Ok(resource) => {
            info!(resource_id = %resource.id, file_uri = %resource.file_uri, "Resource ingested");
            Ok(resource)
        }
        Err(source) => {
            error!(
                file_uri = %stored.uri,
                error = %source,
                "Resource record failed to persist; stored object is orphaned"
            );
            Err(IngestResourceError::Persist {
                file_uri: stored.uri,
                source,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::StoredObject;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use uuid::Uuid;

    struct FakeObjectStore {
        puts: AtomicUsize,
        fail: bool,
    }

    impl FakeObjectStore {
        fn new(fail: bool) -> Arc<Self> {
            Arc::new(Self {
                puts: AtomicUsize::new(0),
                fail,
            })
        }
    }

    #[async_trait]
    impl ObjectStore for FakeObjectStore {
        async fn put(
            &self,
            key: &str,
            data: Vec<u8>,
            _content_type: Option<String>,
        ) -> Result<StoredObject, UploadError> {
            self.puts.fetch_add(1, Ordering::SeqCst);
            if self.fail {
                return Err(UploadError::new("injected upload failure"));
            }
            Ok(StoredObject {
                uri: format!("http://objects.test/{}", key),
                key: key.to_string(),
                checksum: "0".repeat(64),
                size: data.len() as i64,
            })
        }
    }

    struct FakeResourceStore {
        creates: AtomicUsize,
        fail: bool,
    }

    impl FakeResourceStore {
        fn new(fail: bool) -> Arc<Self> {
            Arc::new(Self {
                creates: AtomicUsize::new(0),
                fail,
            })
        }
    }

    #[async_trait]
    impl ResourceStore for FakeResourceStore {
        async fn create(&self, new: NewResource) -> Result<Resource, PersistError> {
            self.creates.fetch_add(1, Ordering::SeqCst);
            if self.fail {
                return Err(PersistError::new("injected persist failure"));
            }
            Ok(Resource {
                id: Uuid::new_v4(),
                file_uri: new.file_uri,
                metadata: new.metadata,
            })
        }

        async fn list_all(&self) -> Result<Vec<Resource>, PersistError> {
            Ok(Vec::new())
        }
    }

    fn valid_command() -> IngestResourceCommand {
        IngestResourceCommand {
            file_name: Some("notes.pdf".to_string()),
            content_type: Some("application/pdf".to_string()),
            content: b"dummy pdf bytes".to_vec(),
            resource_data: Some(
                r#"{"programCode": "SEB101", "unitCode": "SIT102", "unitName": "Intro"}"#
                    .to_string(),
            ),
        }
    }

    #[tokio::test]
    async fn test_successful_ingestion() {
        let storage = FakeObjectStore::new(false);
        let records = FakeResourceStore::new(false);

        let resource = handle(storage.clone(), records.clone(), valid_command())
            .await
            .unwrap();

        assert!(resource.file_uri.starts_with("http://objects.test/"));
        assert!(resource.file_uri.ends_with("_notes.pdf"));
        assert_eq!(resource.metadata.program_code, "SEB101");
        assert_eq!(storage.puts.load(Ordering::SeqCst), 1);
        assert_eq!(records.creates.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_empty_file_rejected_before_anything_else() {
        let storage = FakeObjectStore::new(false);
        let records = FakeResourceStore::new(false);

        // Metadata is also invalid; the missing file must win.
        let command = IngestResourceCommand {
            file_name: None,
            content_type: None,
            content: Vec::new(),
            resource_data: Some("not json".to_string()),
        };

        let err = handle(storage.clone(), records.clone(), command)
            .await
            .unwrap_err();

        assert!(matches!(err, IngestResourceError::MissingFile));
        assert_eq!(storage.puts.load(Ordering::SeqCst), 0);
        assert_eq!(records.creates.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_missing_fields_rejected_without_side_effects() {
        let storage = FakeObjectStore::new(false);
        let records = FakeResourceStore::new(false);

        let mut command = valid_command();
        command.resource_data = Some(r#"{"programCode": "SEB101"}"#.to_string());

        let err = handle(storage.clone(), records.clone(), command)
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            IngestResourceError::Metadata(MetadataError::MissingFields { .. })
        ));
        assert_eq!(storage.puts.load(Ordering::SeqCst), 0);
        assert_eq!(records.creates.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_absent_resource_data_is_malformed() {
        let storage = FakeObjectStore::new(false);
        let records = FakeResourceStore::new(false);

        let mut command = valid_command();
        command.resource_data = None;

        let err = handle(storage.clone(), records.clone(), command)
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            IngestResourceError::Metadata(MetadataError::Malformed(_))
        ));
        assert_eq!(storage.puts.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_upload_failure_skips_record_store() {
        let storage = FakeObjectStore::new(true);
        let records = FakeResourceStore::new(false);

        let err = handle(storage.clone(), records.clone(), valid_command())
            .await
            .unwrap_err();

        assert!(matches!(err, IngestResourceError::Upload(_)));
        assert_eq!(storage.puts.load(Ordering::SeqCst), 1);
        assert_eq!(records.creates.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_persist_failure_reports_the_orphaned_object() {
        let storage = FakeObjectStore::new(false);
        let records = FakeResourceStore::new(true);

        let err = handle(storage.clone(), records.clone(), valid_command())
            .await
            .unwrap_err();

        match err {
            IngestResourceError::Persist { file_uri, .. } => {
                assert!(file_uri.starts_with("http://objects.test/"));
            }
            other => panic!("expected Persist error, got {:?}", other),
        }
        assert_eq!(storage.puts.load(Ordering::SeqCst), 1);
        assert_eq!(records.creates.load(Ordering::SeqCst), 1);
    }
}
