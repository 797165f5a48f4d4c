use async_trait::async_trait;
use sqlx::PgPool;
use tracing::{debug, instrument};
use uuid::Uuid;

use super::PersistError;
use crate::features::profiles::{ProfileStore, UserProfile};

/// Postgres-backed [`ProfileStore`].
#[derive(Clone)]
pub struct PgProfileStore {
    pool: PgPool,
}

impl PgProfileStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProfileStore for PgProfileStore {
    #[instrument(skip(self, profile), fields(user_id = %profile.user_id))]
    async fn save(&self, profile: UserProfile) -> Result<(), PersistError> {
        sqlx::query(
            r#"
            INSERT INTO user_profiles (
                id, user_id, email, first_name, last_name, img_url, program_code,
                year_of_study, semester, is_premium, premium_date, premium_plan
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
            ON CONFLICT (user_id) DO UPDATE SET
                email = EXCLUDED.email,
                first_name = EXCLUDED.first_name,
                last_name = EXCLUDED.last_name,
                img_url = EXCLUDED.img_url,
                program_code = EXCLUDED.program_code,
                year_of_study = EXCLUDED.year_of_study,
                semester = EXCLUDED.semester,
                is_premium = EXCLUDED.is_premium,
                premium_date = EXCLUDED.premium_date,
                premium_plan = EXCLUDED.premium_plan,
                updated_at = NOW()
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(&profile.user_id)
        .bind(&profile.email)
        .bind(&profile.first_name)
        .bind(&profile.last_name)
        .bind(&profile.img_url)
        .bind(&profile.program_code)
        .bind(profile.year_of_study)
        .bind(profile.semester)
        .bind(profile.is_premium)
        .bind(profile.premium_date)
        .bind(profile.premium_plan)
        .execute(&self.pool)
        .await?;

        debug!("Profile record upserted");

        Ok(())
    }
}
