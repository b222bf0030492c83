//! In-Memory Pairwise Matrix Store
//!
//! Holds the matrix in memory. Useful for testing and development.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::ahp::PairwiseMatrix;
use crate::ports::{PairwiseMatrixStore, PairwiseStoreError};

/// In-memory storage for the pairwise matrix
#[derive(Debug, Clone, Default)]
pub struct InMemoryPairwiseMatrixStore {
    matrix: Arc<RwLock<Option<PairwiseMatrix>>>,
}

impl InMemoryPairwiseMatrixStore {
    /// Create an empty store; `load` fails until something is saved
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store already holding `matrix`
    pub fn with_matrix(matrix: PairwiseMatrix) -> Self {
        Self {
            matrix: Arc::new(RwLock::new(Some(matrix))),
        }
    }
}

#[async_trait]
impl PairwiseMatrixStore for InMemoryPairwiseMatrixStore {
    async fn load(&self) -> Result<PairwiseMatrix, PairwiseStoreError> {
        self.matrix
            .read()
            .await
            .clone()
            .ok_or_else(|| PairwiseStoreError::NotFound("in-memory store is empty".to_string()))
    }

    async fn save(&self, matrix: &PairwiseMatrix) -> Result<(), PairwiseStoreError> {
        *self.matrix.write().await = Some(matrix.clone());
        Ok(())
    }
}
