use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Descriptive fields attached to an uploaded resource.
///
/// `program_code`, `unit_code` and `unit_name` are required; everything else
/// is optional and omitted from responses when absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct ResourceMetadata {
    pub program_code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_common_unit: Option<bool>,
    pub unit_code: String,
    pub unit_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub semester: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_date: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_professor_endorsed: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_exam: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_notes: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit_professor: Option<String>,
}

/// A catalogued resource: the stored file's public location plus metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Resource {
    pub id: Uuid,
    #[serde(rename = "fileURI")]
    pub file_uri: String,
    #[serde(flatten)]
    #[sqlx(flatten)]
    pub metadata: ResourceMetadata,
}

/// Record-store input for a newly ingested resource.
#[derive(Debug, Clone)]
pub struct NewResource {
    pub file_uri: String,
    pub metadata: ResourceMetadata,
}
