use async_trait::async_trait;
use sqlx::PgPool;
use tracing::{debug, instrument};
use uuid::Uuid;

use super::PersistError;
use crate::features::resources::{NewResource, Resource, ResourceStore};

/// Postgres-backed [`ResourceStore`].
#[derive(Clone)]
pub struct PgResourceStore {
    pool: PgPool,
}

impl PgResourceStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ResourceStore for PgResourceStore {
    #[instrument(skip(self, new))]
    async fn create(&self, new: NewResource) -> Result<Resource, PersistError> {
        let id = Uuid::new_v4();
        let m = &new.metadata;

        let resource = sqlx::query_as::<_, Resource>(
            r#"
            INSERT INTO resources (
                id, file_uri, program_code, is_common_unit, unit_code, unit_name,
                semester, year, resource_date, is_professor_endorsed, is_exam,
                is_notes, unit_professor
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13)
            RETURNING id, file_uri, program_code, is_common_unit, unit_code, unit_name,
                      semester, year, resource_date, is_professor_endorsed, is_exam,
                      is_notes, unit_professor
            "#,
        )
        .bind(id)
        .bind(&new.file_uri)
        .bind(&m.program_code)
        .bind(m.is_common_unit)
        .bind(&m.unit_code)
        .bind(&m.unit_name)
        .bind(m.semester)
        .bind(m.year)
        .bind(m.resource_date)
        .bind(m.is_professor_endorsed)
        .bind(m.is_exam)
        .bind(m.is_notes)
        .bind(&m.unit_professor)
        .fetch_one(&self.pool)
        .await?;

        debug!(resource_id = %resource.id, "Resource record created");

        Ok(resource)
    }

    #[instrument(skip(self))]
    async fn list_all(&self) -> Result<Vec<Resource>, PersistError> {
        let resources = sqlx::query_as::<_, Resource>(
            r#"
            SELECT id, file_uri, program_code, is_common_unit, unit_code, unit_name,
                   semester, year, resource_date, is_professor_endorsed, is_exam,
                   is_notes, unit_professor
            FROM resources
            ORDER BY created_at
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        debug!(count = resources.len(), "Resource records listed");

        Ok(resources)
    }
}
