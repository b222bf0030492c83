//! CollectionRecomputeOrchestrator - Idempotent recomputation of stored results.
//!
//! Every recompute replaces the collection's rows of a kind wholesale and
//! then sets the kind's flag, all inside one collection-scoped transaction.
//! If any step fails the transaction is dropped, so previous rows and flags
//! stay exactly as they were.
//!
//! Final scores are always derived from freshly recomputed scores: the two
//! replacements run back to back in the same transaction.

use std::sync::Arc;
use tracing::{error, info};

use crate::domain::ahp::{
    AhpError, AlternativeScorer, AlternativeToPointMatrixBuilder, CriteriaWeights, FinalScore,
    FinalScoreAggregator, Score, SubcriteriaPointMapper,
};
use crate::domain::collection::CollectionFlags;
use crate::domain::foundation::{CollectionId, DomainError};
use crate::ports::{AhpRepository, CollectionTransaction, PairwiseMatrixStore};

use super::get_criteria_weights::load_criteria_analysis;

/// Command to recompute the scores of a collection.
#[derive(Debug, Clone)]
pub struct RecalculateScoresCommand {
    pub collection_id: CollectionId,
}

/// Command to recompute scores and then final scores of a collection.
#[derive(Debug, Clone)]
pub struct RecalculateFinalScoresCommand {
    pub collection_id: CollectionId,
}

pub struct CollectionRecomputeOrchestrator {
    repository: Arc<dyn AhpRepository>,
    matrix_store: Arc<dyn PairwiseMatrixStore>,
    mapper: Arc<SubcriteriaPointMapper>,
}

impl CollectionRecomputeOrchestrator {
    pub fn new(
        repository: Arc<dyn AhpRepository>,
        matrix_store: Arc<dyn PairwiseMatrixStore>,
        mapper: Arc<SubcriteriaPointMapper>,
    ) -> Self {
        Self {
            repository,
            matrix_store,
            mapper,
        }
    }

    /// Replaces the scores of a collection and marks it scored.
    ///
    /// # Errors
    ///
    /// - `NotFound` if the collection or its alternatives don't exist
    /// - `InvalidInput` for an unusable matrix or an unknown subcriteria code
    /// - `Internal` on persistence failure; nothing is written in that case
    pub async fn recalculate_scores(
        &self,
        cmd: RecalculateScoresCommand,
    ) -> Result<Vec<Score>, AhpError> {
        let collection_id = cmd.collection_id;
        let weights = load_criteria_analysis(self.matrix_store.as_ref())
            .await?
            .weights;

        let mut tx = self.repository.begin(&collection_id).await?;
        let scores = self.replace_scores(tx.as_mut(), &weights).await?;
        finish(tx.as_mut(), CollectionFlags::scores()).await?;

        info!(
            collection_id = %collection_id,
            count = scores.len(),
            "Scores recalculated"
        );
        Ok(scores)
    }

    /// Replaces scores, then final scores, and marks both kinds computed.
    ///
    /// # Errors
    ///
    /// Same as [`Self::recalculate_scores`].
    pub async fn recalculate_final_scores(
        &self,
        cmd: RecalculateFinalScoresCommand,
    ) -> Result<Vec<FinalScore>, AhpError> {
        let collection_id = cmd.collection_id;
        let weights = load_criteria_analysis(self.matrix_store.as_ref())
            .await?
            .weights;

        let mut tx = self.repository.begin(&collection_id).await?;
        let scores = self.replace_scores(tx.as_mut(), &weights).await?;
        let final_scores = self.replace_final_scores(tx.as_mut(), &scores).await?;
        finish(tx.as_mut(), CollectionFlags::both()).await?;

        info!(
            collection_id = %collection_id,
            count = final_scores.len(),
            "Final scores recalculated"
        );
        Ok(final_scores)
    }

    async fn replace_scores(
        &self,
        tx: &mut dyn CollectionTransaction,
        weights: &CriteriaWeights,
    ) -> Result<Vec<Score>, AhpError> {
        let collection_id = *tx.collection_id();
        let alternatives = tx.find_alternatives().await.map_err(log_failure)?;
        let matrix = AlternativeToPointMatrixBuilder::new(&self.mapper)
            .build(&collection_id, &alternatives)?;
        let scores = AlternativeScorer::score(&matrix, weights)?;

        tx.delete_scores().await.map_err(log_failure)?;
        tx.create_scores(&scores).await.map_err(log_failure)?;

        Ok(scores)
    }

    async fn replace_final_scores(
        &self,
        tx: &mut dyn CollectionTransaction,
        scores: &[Score],
    ) -> Result<Vec<FinalScore>, AhpError> {
        let final_scores = FinalScoreAggregator::aggregate(scores);

        tx.delete_final_scores().await.map_err(log_failure)?;
        tx.create_final_scores(&final_scores)
            .await
            .map_err(log_failure)?;

        Ok(final_scores)
    }
}

fn log_failure(err: DomainError) -> AhpError {
    error!(error = %err, "Recompute write failed, rolling back");
    err.into()
}

/// Flag update plus commit, the last two steps of every recompute.
async fn finish(
    tx: &mut dyn CollectionTransaction,
    flags: CollectionFlags,
) -> Result<(), AhpError> {
    tx.update_collection_flags(flags)
        .await
        .map_err(log_failure)?;
    tx.commit().await.map_err(log_failure)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::{FailPoint, InMemoryAhpStore};
    use crate::application::handlers::test_support::{empty_collection, fixture, Fixture};
    use crate::domain::ahp::{PairwiseMatrix, CRITERIA_COUNT};
    use crate::domain::collection::{ScoreKind, ScoringState};
    use crate::ports::{AlternativeRepository, CollectionRepository};

    fn orchestrator(fx: &Fixture) -> CollectionRecomputeOrchestrator {
        CollectionRecomputeOrchestrator::new(
            Arc::new(fx.store.clone()),
            fx.matrix_store.clone(),
            fx.mapper.clone(),
        )
    }

    fn scores_cmd(collection_id: CollectionId) -> RecalculateScoresCommand {
        RecalculateScoresCommand { collection_id }
    }

    fn final_cmd(collection_id: CollectionId) -> RecalculateFinalScoresCommand {
        RecalculateFinalScoresCommand { collection_id }
    }

    async fn state(store: &InMemoryAhpStore, id: &CollectionId, kind: ScoreKind) -> ScoringState {
        CollectionRepository::find_by_id(store, id)
            .await
            .unwrap()
            .unwrap()
            .scoring_state(kind)
    }

    #[tokio::test]
    async fn recalculate_scores_persists_and_flags() {
        let fx = fixture().await;
        let scores = orchestrator(&fx)
            .recalculate_scores(scores_cmd(fx.collection_id))
            .await
            .unwrap();

        assert_eq!(scores.len(), 2);
        // uniform matrix: every weight is 1/7; 0.637 / 7 = 0.091
        assert_eq!(scores[0].values.waste_volume, 0.091);
        assert_eq!(
            fx.store.find_scores_by_collection(&fx.collection_id).await.unwrap(),
            scores
        );
        assert_eq!(
            state(&fx.store, &fx.collection_id, ScoreKind::Score).await,
            ScoringState::Scored
        );
        assert_eq!(
            state(&fx.store, &fx.collection_id, ScoreKind::FinalScore).await,
            ScoringState::Unscored
        );
    }

    #[tokio::test]
    async fn recalculating_twice_gives_identical_values() {
        let fx = fixture().await;
        let orchestrator = orchestrator(&fx);

        let first = orchestrator
            .recalculate_scores(scores_cmd(fx.collection_id))
            .await
            .unwrap();
        let second = orchestrator
            .recalculate_scores(scores_cmd(fx.collection_id))
            .await
            .unwrap();

        let values = |scores: &[Score]| scores.iter().map(|s| s.values).collect::<Vec<_>>();
        assert_eq!(values(&first), values(&second));
        assert_eq!(
            fx.store
                .find_scores_by_collection(&fx.collection_id)
                .await
                .unwrap()
                .len(),
            2
        );
    }

    #[tokio::test]
    async fn replace_leaves_one_row_per_current_alternative() {
        let fx = fixture().await;
        let orchestrator = orchestrator(&fx);
        orchestrator
            .recalculate_scores(scores_cmd(fx.collection_id))
            .await
            .unwrap();

        AlternativeRepository::delete(&fx.store, fx.alternatives[1].id())
            .await
            .unwrap();
        orchestrator
            .recalculate_scores(scores_cmd(fx.collection_id))
            .await
            .unwrap();

        let stored = fx
            .store
            .find_scores_by_collection(&fx.collection_id)
            .await
            .unwrap();
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0].alternative_id, *fx.alternatives[0].id());
    }

    #[tokio::test]
    async fn final_scores_recompute_scores_first() {
        let fx = fixture().await;

        let final_scores = orchestrator(&fx)
            .recalculate_final_scores(final_cmd(fx.collection_id))
            .await
            .unwrap();

        let scores = fx
            .store
            .find_scores_by_collection(&fx.collection_id)
            .await
            .unwrap();
        assert_eq!(scores.len(), 2);
        assert_eq!(final_scores.len(), 2);
        for (score, final_score) in scores.iter().zip(&final_scores) {
            assert_eq!(score.alternative_id, final_score.alternative_id);
            assert!((final_score.final_score - score.values.sum() * 100.0).abs() < 1e-9);
            assert_eq!(final_score.rank, 0);
        }
        assert_eq!(
            state(&fx.store, &fx.collection_id, ScoreKind::Score).await,
            ScoringState::Scored
        );
        assert_eq!(
            state(&fx.store, &fx.collection_id, ScoreKind::FinalScore).await,
            ScoringState::Scored
        );
    }

    #[tokio::test]
    async fn unknown_collection_is_not_found() {
        let fx = fixture().await;
        let result = orchestrator(&fx)
            .recalculate_scores(scores_cmd(CollectionId::new()))
            .await;
        assert!(matches!(result, Err(AhpError::NotFound(_))));
    }

    #[tokio::test]
    async fn collection_without_alternatives_is_not_found_and_unflagged() {
        let fx = fixture().await;
        let collection_id = empty_collection(&fx.store).await;

        let result = orchestrator(&fx)
            .recalculate_final_scores(final_cmd(collection_id))
            .await;

        assert!(matches!(result, Err(AhpError::NotFound(_))));
        assert_eq!(
            state(&fx.store, &collection_id, ScoreKind::Score).await,
            ScoringState::Unscored
        );
    }

    #[tokio::test]
    async fn wrong_size_matrix_is_invalid_input() {
        let fx = fixture().await;
        fx.matrix_store
            .save(&PairwiseMatrix::uniform(CRITERIA_COUNT - 1))
            .await
            .unwrap();

        let result = orchestrator(&fx)
            .recalculate_scores(scores_cmd(fx.collection_id))
            .await;

        assert!(matches!(result, Err(AhpError::InvalidInput { .. })));
    }

    #[tokio::test]
    async fn failing_write_keeps_previous_rows_and_flags() {
        for point in [
            FailPoint::CreateScores,
            FailPoint::CreateFinalScores,
            FailPoint::UpdateFlags,
            FailPoint::Commit,
        ] {
            let healthy = fixture().await;
            let previous = orchestrator(&healthy)
                .recalculate_scores(scores_cmd(healthy.collection_id))
                .await
                .unwrap();

            let failing_orchestrator = CollectionRecomputeOrchestrator::new(
                Arc::new(healthy.store.clone().with_failure(point)),
                healthy.matrix_store.clone(),
                healthy.mapper.clone(),
            );

            let result = failing_orchestrator
                .recalculate_final_scores(final_cmd(healthy.collection_id))
                .await;

            assert!(
                matches!(result, Err(AhpError::Internal(_))),
                "fail point {:?}",
                point
            );
            assert_eq!(
                healthy
                    .store
                    .find_scores_by_collection(&healthy.collection_id)
                    .await
                    .unwrap(),
                previous
            );
            assert!(healthy
                .store
                .find_final_scores_by_collection(&healthy.collection_id)
                .await
                .unwrap()
                .is_empty());
            assert_eq!(
                state(&healthy.store, &healthy.collection_id, ScoreKind::FinalScore).await,
                ScoringState::Unscored
            );
        }
    }
}
