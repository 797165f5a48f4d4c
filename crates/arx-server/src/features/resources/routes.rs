use axum::{
    extract::{Multipart, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};

use crate::api::response::ErrorBody;
use crate::features::resources::validation::MetadataError;
use crate::features::FeatureState;

use super::{
    commands::{IngestResourceCommand, IngestResourceError},
    queries::ListResourcesError,
};

pub fn resource_routes() -> Router<FeatureState> {
    Router::new()
        .route("/upload", post(upload_resource))
        .route("/resources", get(list_resources))
}

#[tracing::instrument(skip(state, multipart))]
async fn upload_resource(
    State(state): State<FeatureState>,
    mut multipart: Multipart,
) -> Result<Response, ResourceApiError> {
    let mut file_name: Option<String> = None;
    let mut content_type: Option<String> = None;
    let mut content: Option<Vec<u8>> = None;
    let mut resource_data: Option<String> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ResourceApiError::BadMultipart(e.to_string()))?
    {
        let field_name = field.name().unwrap_or("").to_string();

        match field_name.as_str() {
            "file" => {
                file_name = field.file_name().map(|s| s.to_string());
                content_type = field.content_type().map(|s| s.to_string());
                let data = field
                    .bytes()
                    .await
                    .map_err(|e| ResourceApiError::BadMultipart(e.to_string()))?;
                content = Some(data.to_vec());
            }
            "resourceData" => {
                let text = field
                    .text()
                    .await
                    .map_err(|e| ResourceApiError::BadMultipart(e.to_string()))?;
                resource_data = Some(text);
            }
            _ => {}
        }
    }

    let command = IngestResourceCommand {
        file_name,
        content_type,
        // An absent file field behaves the same as an empty one.
        content: content.unwrap_or_default(),
        resource_data,
    };

    let resource =
        super::commands::ingest::handle(state.storage.clone(), state.resources.clone(), command)
            .await?;

    tracing::info!(
        resource_id = %resource.id,
        file_uri = %resource.file_uri,
        "Resource uploaded via API"
    );

    Ok((StatusCode::OK, Json(resource)).into_response())
}

#[tracing::instrument(skip(state))]
async fn list_resources(State(state): State<FeatureState>) -> Result<Response, ResourceApiError> {
    let resources = super::queries::list::handle(state.resources.clone()).await?;

    tracing::debug!(count = resources.len(), "Resources listed via API");

    Ok((StatusCode::OK, Json(resources)).into_response())
}

#[derive(Debug)]
enum ResourceApiError {
    Ingest(IngestResourceError),
    List(ListResourcesError),
    BadMultipart(String),
}

impl From<IngestResourceError> for ResourceApiError {
    fn from(err: IngestResourceError) -> Self {
        Self::Ingest(err)
    }
}

impl From<ListResourcesError> for ResourceApiError {
    fn from(err: ListResourcesError) -> Self {
        Self::List(err)
    }
}

impl IntoResponse for ResourceApiError {
    fn into_response(self) -> Response {
        match self {
            ResourceApiError::Ingest(IngestResourceError::MissingFile) => {
                let error = ErrorBody::new("No file uploaded");
                (StatusCode::BAD_REQUEST, Json(error)).into_response()
            }
            ResourceApiError::Ingest(IngestResourceError::Metadata(
                MetadataError::MissingFields { .. },
            )) => {
                let error = ErrorBody::new("Program code, unit code, and unit name are required");
                (StatusCode::BAD_REQUEST, Json(error)).into_response()
            }
            ResourceApiError::Ingest(IngestResourceError::Metadata(MetadataError::Malformed(
                _,
            ))) => {
                let error = ErrorBody::new("Invalid resource metadata");
                (StatusCode::BAD_REQUEST, Json(error)).into_response()
            }
            ResourceApiError::Ingest(
                IngestResourceError::Upload(_) | IngestResourceError::Persist { .. },
            ) => {
                tracing::error!("Ingestion error during resource upload: {}", self);
                let error = ErrorBody::new("An error occurred while processing your request");
                (StatusCode::INTERNAL_SERVER_ERROR, Json(error)).into_response()
            }
            ResourceApiError::List(ListResourcesError::Store(_)) => {
                tracing::error!("Record store error during resource listing: {}", self);
                let error = ErrorBody::new("Failed to retrieve resources");
                (StatusCode::INTERNAL_SERVER_ERROR, Json(error)).into_response()
            }
            ResourceApiError::BadMultipart(_) => {
                let error = ErrorBody::new("Invalid upload request");
                (StatusCode::BAD_REQUEST, Json(error)).into_response()
            }
        }
    }
}

impl std::fmt::Display for ResourceApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Ingest(e) => write!(f, "{}", e),
            Self::List(e) => write!(f, "{}", e),
            Self::BadMultipart(e) => write!(f, "invalid multipart request: {}", e),
        }
    }
}
