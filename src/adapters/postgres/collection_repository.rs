//! PostgreSQL implementation of CollectionRepository.

use async_trait::async_trait;
use sqlx::PgPool;

use crate::domain::collection::Collection;
use crate::domain::foundation::{CollectionId, DomainError};
use crate::ports::CollectionRepository;

use super::rows::row_to_collection;

/// PostgreSQL implementation of CollectionRepository.
#[derive(Clone)]
pub struct PostgresCollectionRepository {
    pool: PgPool,
}

impl PostgresCollectionRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CollectionRepository for PostgresCollectionRepository {
    async fn save(&self, collection: &Collection) -> Result<(), DomainError> {
        sqlx::query(
            r#"
            INSERT INTO collections (
                id, name, score_is_calculated, final_score_is_calculated, created_at, updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(collection.id().as_uuid())
        .bind(collection.name())
        .bind(collection.score_is_calculated())
        .bind(collection.final_score_is_calculated())
        .bind(collection.created_at().as_datetime())
        .bind(collection.updated_at().as_datetime())
        .execute(&self.pool)
        .await
        .map_err(|e| DomainError::database("insert collection", e))?;

        Ok(())
    }

    async fn find_by_id(&self, id: &CollectionId) -> Result<Option<Collection>, DomainError> {
        let row = sqlx::query(
            r#"
            SELECT id, name, score_is_calculated, final_score_is_calculated,
                   created_at, updated_at
            FROM collections
            WHERE id = $1
            "#,
        )
        .bind(id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::database("fetch collection", e))?;

        row.as_ref().map(row_to_collection).transpose()
    }

    async fn exists(&self, id: &CollectionId) -> Result<bool, DomainError> {
        let result: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM collections WHERE id = $1")
            .bind(id.as_uuid())
            .fetch_one(&self.pool)
            .await
            .map_err(|e| DomainError::database("check collection existence", e))?;

        Ok(result.0 > 0)
    }
}
