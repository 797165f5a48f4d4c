use std::sync::Arc;

use tracing::info;

use crate::db::PersistError;
use crate::features::profiles::store::ProfileStore;
use crate::features::profiles::types::UserProfile;

#[derive(Debug, thiserror::Error)]
pub enum SaveProfileError {
    #[error(transparent)]
    Store(#[from] PersistError),
}

#[tracing::instrument(skip(profiles, profile), fields(user_id = %profile.user_id))]
pub async fn handle(
    profiles: Arc<dyn ProfileStore>,
    profile: UserProfile,
) -> Result<(), SaveProfileError> {
    profiles.save(profile).await?;
    info!("Profile saved");
    Ok(())
}
