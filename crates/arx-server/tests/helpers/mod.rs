//! Test helpers for Arx server integration tests
//!
//! These build the full application router against in-memory stores, so the
//! HTTP surface and the ingestion pipeline can be exercised end to end
//! without Postgres or S3. The mock stores count their calls and can be told
//! to fail, which is how the fault-path tests assert which side effects
//! happened before an error.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{header, Request};
use axum::response::Response;
use axum::Router;
use uuid::Uuid;

use arx_server::api;
use arx_server::config::CorsConfig;
use arx_server::db::PersistError;
use arx_server::features::profiles::{ProfileStore, UserProfile};
use arx_server::features::resources::{NewResource, Resource, ResourceStore};
use arx_server::features::FeatureState;
use arx_server::storage::{ObjectStore, StoredObject, UploadError};

/// In-memory object store that records every put.
pub struct MockObjectStore {
    puts: AtomicUsize,
    fail: bool,
    objects: Mutex<HashMap<String, Vec<u8>>>,
}

impl MockObjectStore {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            puts: AtomicUsize::new(0),
            fail: false,
            objects: Mutex::new(HashMap::new()),
        })
    }

    pub fn failing() -> Arc<Self> {
        Arc::new(Self {
            puts: AtomicUsize::new(0),
            fail: true,
            objects: Mutex::new(HashMap::new()),
        })
    }

    pub fn put_count(&self) -> usize {
        self.puts.load(Ordering::SeqCst)
    }

    /// Number of objects actually held, successes only.
    pub fn object_count(&self) -> usize {
        self.objects.lock().unwrap().len()
    }
}

#[async_trait]
impl ObjectStore for MockObjectStore {
    async fn put(
        &self,
        key: &str,
        data: Vec<u8>,
        _content_type: Option<String>,
    ) -> Result<StoredObject, UploadError> {
        self.puts.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            return Err(UploadError::new("injected object store outage"));
        }
        let size = data.len() as i64;
        self.objects.lock().unwrap().insert(key.to_string(), data);
        Ok(StoredObject {
            uri: format!("http://objects.test/{}", key),
            key: key.to_string(),
            checksum: "0".repeat(64),
            size,
        })
    }
}

/// In-memory resource record store.
pub struct MockResourceStore {
    creates: AtomicUsize,
    fail_create: bool,
    fail_list: bool,
    records: Mutex<Vec<Resource>>,
}

impl MockResourceStore {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            creates: AtomicUsize::new(0),
            fail_create: false,
            fail_list: false,
            records: Mutex::new(Vec::new()),
        })
    }

    pub fn failing_create() -> Arc<Self> {
        Arc::new(Self {
            creates: AtomicUsize::new(0),
            fail_create: true,
            fail_list: false,
            records: Mutex::new(Vec::new()),
        })
    }

    pub fn failing_list() -> Arc<Self> {
        Arc::new(Self {
            creates: AtomicUsize::new(0),
            fail_create: false,
            fail_list: true,
            records: Mutex::new(Vec::new()),
        })
    }

    pub fn create_count(&self) -> usize {
        self.creates.load(Ordering::SeqCst)
    }

    pub fn stored(&self) -> Vec<Resource> {
        self.records.lock().unwrap().clone()
    }
}

#[async_trait]
impl ResourceStore for MockResourceStore {
    async fn create(&self, new: NewResource) -> Result<Resource, PersistError> {
        self.creates.fetch_add(1, Ordering::SeqCst);
        if self.fail_create {
            return Err(PersistError::new("injected record store outage"));
        }
        let resource = Resource {
            id: Uuid::new_v4(),
            file_uri: new.file_uri,
            metadata: new.metadata,
        };
        self.records.lock().unwrap().push(resource.clone());
        Ok(resource)
    }

    async fn list_all(&self) -> Result<Vec<Resource>, PersistError> {
        if self.fail_list {
            return Err(PersistError::new("injected record store outage"));
        }
        Ok(self.records.lock().unwrap().clone())
    }
}

/// In-memory profile store.
pub struct MockProfileStore {
    saves: AtomicUsize,
    fail: bool,
    profiles: Mutex<Vec<UserProfile>>,
}

impl MockProfileStore {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            saves: AtomicUsize::new(0),
            fail: false,
            profiles: Mutex::new(Vec::new()),
        })
    }

    pub fn failing() -> Arc<Self> {
        Arc::new(Self {
            saves: AtomicUsize::new(0),
            fail: true,
            profiles: Mutex::new(Vec::new()),
        })
    }

    pub fn save_count(&self) -> usize {
        self.saves.load(Ordering::SeqCst)
    }

    pub fn saved(&self) -> Vec<UserProfile> {
        self.profiles.lock().unwrap().clone()
    }
}

#[async_trait]
impl ProfileStore for MockProfileStore {
    async fn save(&self, profile: UserProfile) -> Result<(), PersistError> {
        self.saves.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            return Err(PersistError::new("injected record store outage"));
        }
        self.profiles.lock().unwrap().push(profile);
        Ok(())
    }
}

/// The three mock stores behind one application instance.
pub struct TestStores {
    pub storage: Arc<MockObjectStore>,
    pub resources: Arc<MockResourceStore>,
    pub profiles: Arc<MockProfileStore>,
}

impl TestStores {
    pub fn new() -> Self {
        Self {
            storage: MockObjectStore::new(),
            resources: MockResourceStore::new(),
            profiles: MockProfileStore::new(),
        }
    }
}

/// Build the full application router over the given stores.
pub fn test_app(stores: &TestStores) -> Router {
    let state = FeatureState {
        storage: stores.storage.clone(),
        resources: stores.resources.clone(),
        profiles: stores.profiles.clone(),
    };

    let cors = CorsConfig {
        allowed_origins: vec!["*".to_string()],
        allow_credentials: false,
    };

    api::create_router(state, &cors)
}

pub const TEST_BOUNDARY: &str = "arx-test-boundary";

/// Build a `multipart/form-data` body with optional file and resourceData
/// parts, returning the content-type header value and the body bytes.
pub fn multipart_body(
    file: Option<(&str, &[u8])>,
    resource_data: Option<&str>,
) -> (String, Vec<u8>) {
    let mut body = Vec::new();

    if let Some((filename, bytes)) = file {
        body.extend_from_slice(format!("--{}\r\n", TEST_BOUNDARY).as_bytes());
        body.extend_from_slice(
            format!(
                "Content-Disposition: form-data; name=\"file\"; filename=\"{}\"\r\n",
                filename
            )
            .as_bytes(),
        );
        body.extend_from_slice(b"Content-Type: application/pdf\r\n\r\n");
        body.extend_from_slice(bytes);
        body.extend_from_slice(b"\r\n");
    }

    if let Some(data) = resource_data {
        body.extend_from_slice(format!("--{}\r\n", TEST_BOUNDARY).as_bytes());
        body.extend_from_slice(b"Content-Disposition: form-data; name=\"resourceData\"\r\n\r\n");
        body.extend_from_slice(data.as_bytes());
        body.extend_from_slice(b"\r\n");
    }

    body.extend_from_slice(format!("--{}--\r\n", TEST_BOUNDARY).as_bytes());

    (
        format!("multipart/form-data; boundary={}", TEST_BOUNDARY),
        body,
    )
}

/// A well-formed upload request for the happy path.
pub fn upload_request(file: Option<(&str, &[u8])>, resource_data: Option<&str>) -> Request<Body> {
    let (content_type, body) = multipart_body(file, resource_data);
    Request::builder()
        .method("POST")
        .uri("/upload")
        .header(header::CONTENT_TYPE, content_type)
        .body(Body::from(body))
        .unwrap()
}

pub fn valid_resource_data() -> &'static str {
    r#"{"programCode": "SEB101", "unitCode": "SIT102", "unitName": "Introduction to Programming", "isNotes": true, "year": 2024}"#
}

/// Read a JSON response body to a value.
pub async fn read_json(response: Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}
