//! UpdatePairwiseMatrixHandler - Command handler for replacing the pairwise matrix.

use std::sync::Arc;
use tracing::{info, warn};

use crate::domain::ahp::{AhpError, PairwiseMatrix};
use crate::ports::PairwiseMatrixStore;

/// Command to overwrite the stored pairwise matrix.
#[derive(Debug, Clone)]
pub struct UpdatePairwiseMatrixCommand {
    pub pairwise: Vec<Vec<f64>>,
}

/// Handler for updating the pairwise matrix.
pub struct UpdatePairwiseMatrixHandler {
    matrix_store: Arc<dyn PairwiseMatrixStore>,
}

impl UpdatePairwiseMatrixHandler {
    pub fn new(matrix_store: Arc<dyn PairwiseMatrixStore>) -> Self {
        Self { matrix_store }
    }

    /// Validates and stores the matrix; the last write wins.
    ///
    /// Existing scores are not recomputed.
    pub async fn handle(
        &self,
        cmd: UpdatePairwiseMatrixCommand,
    ) -> Result<PairwiseMatrix, AhpError> {
        let matrix = PairwiseMatrix::new(cmd.pairwise)
            .and_then(|matrix| matrix.ensure_criteria_matrix().map(|_| matrix))
            .map_err(|e| {
                warn!(error = %e, "Rejected pairwise matrix update");
                e
            })?;

        self.matrix_store.save(&matrix).await?;
        info!(size = matrix.size(), "Pairwise matrix updated");

        Ok(matrix)
    }
}
