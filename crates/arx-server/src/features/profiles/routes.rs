use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};

use crate::api::response::{ErrorBody, MessageBody};
use crate::features::FeatureState;

use super::{commands::SaveProfileError, types::UserProfile};

pub fn profile_routes() -> Router<FeatureState> {
    Router::new().route("/user-profile", post(save_profile))
}

#[tracing::instrument(skip(state, profile), fields(user_id = %profile.user_id))]
async fn save_profile(
    State(state): State<FeatureState>,
    Json(profile): Json<UserProfile>,
) -> Result<Response, ProfileApiError> {
    super::commands::save::handle(state.profiles.clone(), profile).await?;

    Ok((
        StatusCode::CREATED,
        Json(MessageBody::new("Profile saved successfully")),
    )
        .into_response())
}

#[derive(Debug)]
enum ProfileApiError {
    Save(SaveProfileError),
}

impl From<SaveProfileError> for ProfileApiError {
    fn from(err: SaveProfileError) -> Self {
        Self::Save(err)
    }
}

impl IntoResponse for ProfileApiError {
    fn into_response(self) -> Response {
        match self {
            ProfileApiError::Save(SaveProfileError::Store(_)) => {
                tracing::error!("Record store error during profile save: {}", self);
                let error = ErrorBody::new("Failed to save profile");
                (StatusCode::INTERNAL_SERVER_ERROR, Json(error)).into_response()
            }
        }
    }
}

impl std::fmt::Display for ProfileApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Save(e) => write!(f, "{}", e),
        }
    }
}
