//! GetCriteriaWeightsHandler - Query handler for the current criteria weights.

use std::sync::Arc;
use tracing::debug;

use crate::domain::ahp::{AhpError, CriteriaAnalysis, CriteriaWeightCalculator};
use crate::ports::PairwiseMatrixStore;

/// Query for the weights derived from the stored pairwise matrix.
#[derive(Debug, Clone, Default)]
pub struct GetCriteriaWeightsQuery;

/// Handler for computing criteria weights.
pub struct GetCriteriaWeightsHandler {
    matrix_store: Arc<dyn PairwiseMatrixStore>,
}

impl GetCriteriaWeightsHandler {
    pub fn new(matrix_store: Arc<dyn PairwiseMatrixStore>) -> Self {
        Self { matrix_store }
    }

    pub async fn handle(
        &self,
        _query: GetCriteriaWeightsQuery,
    ) -> Result<CriteriaAnalysis, AhpError> {
        load_criteria_analysis(self.matrix_store.as_ref()).await
    }
}

/// Loads the current matrix and derives weights from that snapshot.
pub(crate) async fn load_criteria_analysis(
    matrix_store: &dyn PairwiseMatrixStore,
) -> Result<CriteriaAnalysis, AhpError> {
    let matrix = matrix_store.load().await?;
    let analysis = CriteriaWeightCalculator::calculate(&matrix)?;
    debug!(weights = ?analysis.weights.as_slice(), "Computed criteria weights");
    Ok(analysis)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::storage::InMemoryPairwiseMatrixStore;
    use crate::domain::ahp::PairwiseMatrix;

    #[tokio::test]
    async fn returns_weights_with_both_matrices() {
        let matrix = PairwiseMatrix::new(vec![vec![1.0, 2.0], vec![0.5, 1.0]]).unwrap();
        let handler = GetCriteriaWeightsHandler::new(Arc::new(
            InMemoryPairwiseMatrixStore::with_matrix(matrix.clone()),
        ));

        let analysis = handler.handle(GetCriteriaWeightsQuery).await.unwrap();

        assert_eq!(analysis.pairwise, matrix);
        assert_eq!(analysis.normalized.len(), 2);
        assert!((analysis.weights.as_slice()[0] - 0.667).abs() < 1e-3);
        assert!((analysis.weights.as_slice()[1] - 0.333).abs() < 1e-3);
    }

    #[tokio::test]
    async fn missing_matrix_is_not_found() {
        let handler = GetCriteriaWeightsHandler::new(Arc::new(InMemoryPairwiseMatrixStore::new()));

        let result = handler.handle(GetCriteriaWeightsQuery).await;

        assert!(matches!(result, Err(AhpError::NotFound(_))));
    }

    #[tokio::test]
    async fn ragged_matrix_file_is_invalid_input() {
        use crate::adapters::storage::FilePairwiseMatrixStore;

        let temp_dir = tempfile::TempDir::new().unwrap();
        let path = temp_dir.path().join("pairwise.json");
        std::fs::write(&path, r#"{"pairwise": [[1.0, 2.0, 3.0], [0.5, 1.0]]}"#).unwrap();
        let handler = GetCriteriaWeightsHandler::new(Arc::new(FilePairwiseMatrixStore::new(&path)));

        let result = handler.handle(GetCriteriaWeightsQuery).await;

        match result {
            Err(AhpError::InvalidInput { field, .. }) => assert_eq!(field, "pairwise[0]"),
            other => panic!("Expected InvalidInput, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn zero_column_is_invalid_input() {
        let matrix = PairwiseMatrix::new(vec![vec![0.0, 1.0], vec![0.0, 1.0]]).unwrap();
        let handler = GetCriteriaWeightsHandler::new(Arc::new(
            InMemoryPairwiseMatrixStore::with_matrix(matrix),
        ));

        let result = handler.handle(GetCriteriaWeightsQuery).await;

        assert!(matches!(result, Err(AhpError::InvalidInput { .. })));
    }
}
