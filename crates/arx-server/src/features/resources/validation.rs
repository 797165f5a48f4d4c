use serde::Deserialize;
use thiserror::Error;

use super::types::ResourceMetadata;

/// Raw metadata payload before required-field checks.
///
/// Everything is optional here; [`parse_resource_metadata`] decides what is
/// actually required.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct MetadataDraft {
    program_code: Option<String>,
    is_common_unit: Option<bool>,
    unit_code: Option<String>,
    unit_name: Option<String>,
    semester: Option<i32>,
    year: Option<i32>,
    resource_date: Option<chrono::DateTime<chrono::Utc>>,
    is_professor_endorsed: Option<bool>,
    is_exam: Option<bool>,
    is_notes: Option<bool>,
    unit_professor: Option<String>,
}

#[derive(Debug, Error)]
pub enum MetadataError {
    #[error("metadata payload is not valid JSON: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("missing required fields: {}", .fields.join(", "))]
    MissingFields { fields: Vec<&'static str> },
}

/// Parse and validate the `resourceData` JSON document.
///
/// Required fields are missing when absent, null, or the empty string;
/// whitespace-only values pass. All missing fields are reported together.
pub fn parse_resource_metadata(raw: &str) -> Result<ResourceMetadata, MetadataError> {
    let draft: MetadataDraft = serde_json::from_str(raw)?;

    let mut missing = Vec::new();
    if is_blank(&draft.program_code) {
        missing.push("programCode");
    }
    if is_blank(&draft.unit_code) {
        missing.push("unitCode");
    }
    if is_blank(&draft.unit_name) {
        missing.push("unitName");
    }
    if !missing.is_empty() {
        return Err(MetadataError::MissingFields { fields: missing });
    }

    Ok(ResourceMetadata {
        program_code: draft.program_code.unwrap_or_default(),
        is_common_unit: draft.is_common_unit,
        unit_code: draft.unit_code.unwrap_or_default(),
        unit_name: draft.unit_name.unwrap_or_default(),
        semester: draft.semester,
        year: draft.year,
        resource_date: draft.resource_date,
        is_professor_endorsed: draft.is_professor_endorsed,
        is_exam: draft.is_exam,
        is_notes: draft.is_notes,
        unit_professor: draft.unit_professor,
    })
}

fn is_blank(value: &Option<String>) -> bool {
    value.as_deref().map_or(true, str::is_empty)
}
