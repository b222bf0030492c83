//! PostgreSQL implementation of AhpRepository.
//!
//! A [`PostgresCollectionTransaction`] wraps one database transaction that
//! starts by locking the collection row with `SELECT ... FOR UPDATE`.
//! Concurrent recomputes of the same collection therefore queue on the row
//! lock; recomputes of different collections do not interfere.

use async_trait::async_trait;
use sqlx::{PgPool, Postgres, Transaction};

use crate::domain::ahp::{FinalScore, Score};
use crate::domain::collection::{Alternative, CollectionFlags};
use crate::domain::foundation::{CollectionId, DomainError, ErrorCode};
use crate::ports::{AhpRepository, CollectionTransaction};

use super::rows::{
    row_to_alternative, row_to_final_score, row_to_score, ALTERNATIVE_COLUMNS,
    FINAL_SCORE_COLUMNS, SCORE_COLUMNS,
};

/// Selects a collection's rows from a per-alternative table, ordered like
/// the alternatives themselves (`created_at, id`). Rows from one recompute
/// share a timestamp, so their own `created_at` cannot order them.
fn per_alternative_query(table: &str, columns: &str) -> String {
    format!(
        "SELECT {} FROM {} t WHERE t.collection_id = $1 ORDER BY \
         (SELECT a.created_at FROM alternatives a WHERE a.id = t.alternative_id), \
         t.alternative_id",
        columns, table
    )
}

/// PostgreSQL implementation of AhpRepository.
#[derive(Clone)]
pub struct PostgresAhpRepository {
    pool: PgPool,
}

impl PostgresAhpRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AhpRepository for PostgresAhpRepository {
    async fn find_alternatives_by_collection(
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

    async fn find_scores_by_collection(
        &self,
        collection_id: &CollectionId,
    ) -> Result<Vec<Score>, DomainError> {
        let rows = sqlx::query(&per_alternative_query("scores", SCORE_COLUMNS))
        .bind(collection_id.as_uuid())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::database("fetch scores", e))?;

        rows.iter().map(row_to_score).collect()
    }

    async fn find_final_scores_by_collection(
        &self,
        collection_id: &CollectionId,
    ) -> Result<Vec<FinalScore>, DomainError> {
        let rows = sqlx::query(&per_alternative_query("final_scores", FINAL_SCORE_COLUMNS))
        .bind(collection_id.as_uuid())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::database("fetch final scores", e))?;

        rows.iter().map(row_to_final_score).collect()
    }

    async fn begin(
        &self,
        collection_id: &CollectionId,
    ) -> Result<Box<dyn CollectionTransaction>, DomainError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| DomainError::database("begin transaction", e))?;

        let locked: Option<(uuid::Uuid,)> =
            sqlx::query_as("SELECT id FROM collections WHERE id = $1 FOR UPDATE")
                .bind(collection_id.as_uuid())
                .fetch_optional(&mut *tx)
                .await
                .map_err(|e| DomainError::database("lock collection", e))?;

        if locked.is_none() {
            return Err(DomainError::new(
                ErrorCode::CollectionNotFound,
                format!("Collection not found: {}", collection_id),
            ));
        }

        Ok(Box::new(PostgresCollectionTransaction {
            collection_id: *collection_id,
            tx: Some(tx),
        }))
    }
}

/// Open transaction holding the row lock of one collection.
///
/// Dropping it without `commit` rolls back.
pub struct PostgresCollectionTransaction {
    collection_id: CollectionId,
    tx: Option<Transaction<'static, Postgres>>,
}

impl PostgresCollectionTransaction {
    fn tx(&mut self) -> Result<&mut Transaction<'static, Postgres>, DomainError> {
        self.tx.as_mut().ok_or_else(|| {
            DomainError::new(ErrorCode::InternalError, "Transaction already finished")
        })
    }
}

#[async_trait]
impl CollectionTransaction for PostgresCollectionTransaction {
    fn collection_id(&self) -> &CollectionId {
        &self.collection_id
    }

    async fn find_alternatives(&mut self) -> Result<Vec<Alternative>, DomainError> {
        let collection_id = self.collection_id;
        let tx = self.tx()?;
        let rows = sqlx::query(&format!(
            "SELECT {} FROM alternatives WHERE collection_id = $1 ORDER BY created_at, id",
            ALTERNATIVE_COLUMNS
        ))
        .bind(collection_id.as_uuid())
        .fetch_all(&mut **tx)
        .await
        .map_err(|e| DomainError::database("fetch alternatives", e))?;

        rows.iter().map(row_to_alternative).collect()
    }

    async fn delete_scores(&mut self) -> Result<u64, DomainError> {
        let collection_id = self.collection_id;
        let tx = self.tx()?;
        let result = sqlx::query("DELETE FROM scores WHERE collection_id = $1")
            .bind(collection_id.as_uuid())
            .execute(&mut **tx)
            .await
            .map_err(|e| DomainError::database("delete scores", e))?;

        Ok(result.rows_affected())
    }

    async fn create_scores(&mut self, scores: &[Score]) -> Result<(), DomainError> {
        let tx = self.tx()?;
        for score in scores {
            sqlx::query(
                r#"
                INSERT INTO scores (
                    id, alternative_id, collection_id, waste_volume, disposal_site_distance,
                    settlement_distance, river_distance, community_participation,
                    household_coverage, accessibility, created_at
                ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
                "#,
            )
            .bind(score.id.as_uuid())
            .bind(score.alternative_id.as_uuid())
            .bind(score.collection_id.as_uuid())
            .bind(score.values.waste_volume)
            .bind(score.values.disposal_site_distance)
            .bind(score.values.settlement_distance)
            .bind(score.values.river_distance)
            .bind(score.values.community_participation)
            .bind(score.values.household_coverage)
            .bind(score.values.accessibility)
            .bind(score.created_at.as_datetime())
            .execute(&mut **tx)
            .await
            .map_err(|e| DomainError::database("insert score", e))?;
        }

        Ok(())
    }

    async fn delete_final_scores(&mut self) -> Result<u64, DomainError> {
        let collection_id = self.collection_id;
        let tx = self.tx()?;
        let result = sqlx::query("DELETE FROM final_scores WHERE collection_id = $1")
            .bind(collection_id.as_uuid())
            .execute(&mut **tx)
            .await
            .map_err(|e| DomainError::database("delete final scores", e))?;

        Ok(result.rows_affected())
    }

    async fn create_final_scores(
        &mut self,
        final_scores: &[FinalScore],
    ) -> Result<(), DomainError> {
        let tx = self.tx()?;
        for final_score in final_scores {
            sqlx::query(
                r#"
                INSERT INTO final_scores (
                    id, alternative_id, collection_id, final_score, rank, created_at
                ) VALUES ($1, $2, $3, $4, $5, $6)
                "#,
            )
            .bind(final_score.id.as_uuid())
            .bind(final_score.alternative_id.as_uuid())
            .bind(final_score.collection_id.as_uuid())
            .bind(final_score.final_score)
            .bind(final_score.rank as i32)
            .bind(final_score.created_at.as_datetime())
            .execute(&mut **tx)
            .await
            .map_err(|e| DomainError::database("insert final score", e))?;
        }

        Ok(())
    }

    async fn update_collection_flags(&mut self, flags: CollectionFlags) -> Result<(), DomainError> {
        let collection_id = self.collection_id;
        let tx = self.tx()?;
        sqlx::query(
            r#"
            UPDATE collections SET
                score_is_calculated = COALESCE($2, score_is_calculated),
                final_score_is_calculated = COALESCE($3, final_score_is_calculated),
                updated_at = NOW()
            WHERE id = $1
            "#,
        )
        .bind(collection_id.as_uuid())
        .bind(flags.score_calculated)
        .bind(flags.final_score_calculated)
        .execute(&mut **tx)
        .await
        .map_err(|e| DomainError::database("update collection flags", e))?;

        Ok(())
    }

    async fn commit(&mut self) -> Result<(), DomainError> {
        let tx = self.tx.take().ok_or_else(|| {
            DomainError::new(ErrorCode::InternalError, "Transaction already finished")
        })?;
        tx.commit()
            .await
            .map_err(|e| DomainError::database("commit transaction", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn score_rows_follow_alternative_creation_order() {
        let sql = per_alternative_query("scores", SCORE_COLUMNS);

        assert!(sql.starts_with("SELECT id, alternative_id, collection_id"));
        assert!(sql.contains("FROM scores t WHERE t.collection_id = $1"));
        assert!(sql.ends_with(
            "ORDER BY (SELECT a.created_at FROM alternatives a WHERE a.id = t.alternative_id), \
             t.alternative_id"
        ));
    }

    #[test]
    fn final_score_rows_use_same_ordering() {
        let sql = per_alternative_query("final_scores", FINAL_SCORE_COLUMNS);

        assert!(sql.contains("FROM final_scores t"));
        assert!(!sql.contains("ORDER BY created_at"));
    }
}
