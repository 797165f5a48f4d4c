use async_trait::async_trait;

use super::types::UserProfile;
use crate::db::PersistError;

/// Profile persistence, trait-shaped for the same reason as
/// [`crate::features::resources::ResourceStore`].
#[async_trait]
pub trait ProfileStore: Send + Sync {
    /// Insert or replace the profile stored for `profile.user_id`.
    async fn save(&self, profile: UserProfile) -> Result<(), PersistError>;
}
