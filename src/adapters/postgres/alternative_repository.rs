//! PostgreSQL implementation of AlternativeRepository.

use async_trait::async_trait;
use sqlx::PgPool;

use crate::domain::collection::Alternative;
use crate::domain::foundation::{AlternativeId, CollectionId, DomainError, ErrorCode};
use crate::ports::AlternativeRepository;

use super::rows::{row_to_alternative, ALTERNATIVE_COLUMNS};

/// PostgreSQL implementation of AlternativeRepository.
#[derive(Clone)]
pub struct PostgresAlternativeRepository {
    pool: PgPool,
}

impl PostgresAlternativeRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn alternative_not_found(id: &AlternativeId) -> DomainError {
    DomainError::new(
        ErrorCode::AlternativeNotFound,
        format!("Alternative not found: {}", id),
    )
}

#[async_trait]
impl AlternativeRepository for PostgresAlternativeRepository {
    async fn save(&self, alternative: &Alternative) -> Result<(), DomainError> {
        let selection = alternative.selection();
        sqlx::query(
            r#"
            INSERT INTO alternatives (
                id, collection_id, name, waste_volume, disposal_site_distance,
                settlement_distance, river_distance, community_participation,
                household_coverage, accessibility, created_at, updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
            "#,
        )
        .bind(alternative.id().as_uuid())
        .bind(alternative.collection_id().as_uuid())
        .bind(alternative.name())
        .bind(&selection.waste_volume)
        .bind(&selection.disposal_site_distance)
        .bind(&selection.settlement_distance)
        .bind(&selection.river_distance)
        .bind(&selection.community_participation)
        .bind(&selection.household_coverage)
        .bind(&selection.accessibility)
        .bind(alternative.created_at().as_datetime())
        .bind(alternative.updated_at().as_datetime())
        .execute(&self.pool)
        .await
        .map_err(|e| match &e {
            sqlx::Error::Database(db) if db.is_foreign_key_violation() => DomainError::new(
                ErrorCode::CollectionNotFound,
                format!("Collection not found: {}", alternative.collection_id()),
            ),
            _ => DomainError::database("insert alternative", &e),
        })?;

        Ok(())
    }

    async fn update(&self, alternative: &Alternative) -> Result<(), DomainError> {
        let selection = alternative.selection();
        let result = sqlx::query(
            r#"
            UPDATE alternatives SET
                name = $2,
                waste_volume = $3,
                disposal_site_distance = $4,
                settlement_distance = $5,
                river_distance = $6,
                community_participation = $7,
                household_coverage = $8,
                accessibility = $9,
                updated_at = $10
            WHERE id = $1
            "#,
        )
        .bind(alternative.id().as_uuid())
        .bind(alternative.name())
        .bind(&selection.waste_volume)
        .bind(&selection.disposal_site_distance)
        .bind(&selection.settlement_distance)
        .bind(&selection.river_distance)
        .bind(&selection.community_participation)
        .bind(&selection.household_coverage)
        .bind(&selection.accessibility)
        .bind(alternative.updated_at().as_datetime())
        .execute(&self.pool)
        .await
        .map_err(|e| DomainError::database("update alternative", e))?;

        if result.rows_affected() == 0 {
            return Err(alternative_not_found(alternative.id()));
        }

        Ok(())
    }

    async fn delete(&self, id: &AlternativeId) -> Result<(), DomainError> {
        // scores and final_scores cascade
        let result = sqlx::query("DELETE FROM alternatives WHERE id = $1")
            .bind(id.as_uuid())
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::database("delete alternative", e))?;

        if result.rows_affected() == 0 {
            return Err(alternative_not_found(id));
        }

        Ok(())
    }

    async fn find_by_id(&self, id: &AlternativeId) -> Result<Option<Alternative>, DomainError> {
        let row = sqlx::query(&format!(
            "SELECT {} FROM alternatives WHERE id = $1",
            ALTERNATIVE_COLUMNS
        ))
        .bind(id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::database("fetch alternative", e))?;

        row.as_ref().map(row_to_alternative).transpose()
    }

    async fn find_all(&self) -> Result<Vec<Alternative>, DomainError> {
        let rows = sqlx::query(&format!(
            "SELECT {} FROM alternatives ORDER BY created_at, id",
            ALTERNATIVE_COLUMNS
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::database("fetch alternatives", e))?;

        rows.iter().map(row_to_alternative).collect()
    }

    async fn find_by_collection(
        &self,
        collection_id: &CollectionId,
    ) -> Result<Vec<Alternative>, DomainError> {
        let rows = sqlx::query(&format!(
            "SELECT {} FROM alternatives WHERE collection_id = $1 ORDER BY created_at, id",
            ALTERNATIVE_COLUMNS
        ))
        .bind(collection_id.as_uuid())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::database("fetch alternatives", e))?;

        rows.iter().map(row_to_alternative).collect()
    }
}
