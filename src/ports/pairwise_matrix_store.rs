//! Pairwise matrix store port.
//!
//! The pairwise comparison matrix is process-wide configuration. It is loaded
//! before every weight calculation and overwritten whole on update; the last
//! write wins.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::ahp::{AhpError, PairwiseMatrix};
use crate::domain::foundation::{DomainError, ErrorCode};

/// Errors raised by pairwise matrix storage.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PairwiseStoreError {
    #[error("Pairwise matrix not found: {0}")]
    NotFound(String),

    #[error("Failed to serialize pairwise matrix: {0}")]
    Serialization(String),

    #[error("Failed to parse pairwise matrix: {0}")]
    Deserialization(String),

    #[error("Stored pairwise matrix is invalid at '{field}': {message}")]
    InvalidMatrix { field: String, message: String },

    #[error("IO error: {0}")]
    Io(String),
}

impl From<PairwiseStoreError> for DomainError {
    fn from(err: PairwiseStoreError) -> Self {
        let code = match &err {
            PairwiseStoreError::NotFound(_) => ErrorCode::PairwiseMatrixNotFound,
            PairwiseStoreError::InvalidMatrix { .. } => ErrorCode::ValidationFailed,
            _ => ErrorCode::StorageError,
        };
        DomainError::new(code, err.to_string())
    }
}

impl From<PairwiseStoreError> for AhpError {
    fn from(err: PairwiseStoreError) -> Self {
        match err {
            PairwiseStoreError::NotFound(_) => AhpError::NotFound(err.to_string()),
            PairwiseStoreError::InvalidMatrix { field, message } => {
                AhpError::InvalidInput { field, message }
            }
            other => AhpError::Internal(other.to_string()),
        }
    }
}

/// Storage for the single pairwise comparison matrix.
///
/// Implementations serialize writes against reads so a load never observes a
/// partially written matrix.
#[async_trait]
pub trait PairwiseMatrixStore: Send + Sync {
    /// Load the current matrix.
    ///
    /// # Errors
    ///
    /// - `NotFound` if no matrix has been stored yet
    /// - `Deserialization` if the stored document is not valid JSON
    /// - `InvalidMatrix` if the stored rows are empty, ragged, or non-finite
    async fn load(&self) -> Result<PairwiseMatrix, PairwiseStoreError>;

    /// Replace the stored matrix.
    async fn save(&self, matrix: &PairwiseMatrix) -> Result<(), PairwiseStoreError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pairwise_matrix_store_is_object_safe() {
        fn _accepts_dyn(_store: &dyn PairwiseMatrixStore) {}
    }

    #[test]
    fn not_found_maps_to_not_found_everywhere() {
        let err = PairwiseStoreError::NotFound("asset/pairwise.json".to_string());
        assert_eq!(
            DomainError::from(err.clone()).code,
            ErrorCode::PairwiseMatrixNotFound
        );
        assert!(matches!(AhpError::from(err), AhpError::NotFound(_)));
    }

    #[test]
    fn invalid_matrix_maps_to_invalid_input() {
        let err = PairwiseStoreError::InvalidMatrix {
            field: "pairwise[0]".to_string(),
            message: "matrix must be square".to_string(),
        };
        assert_eq!(DomainError::from(err.clone()).code, ErrorCode::ValidationFailed);
        match AhpError::from(err) {
            AhpError::InvalidInput { field, .. } => assert_eq!(field, "pairwise[0]"),
            other => panic!("Expected InvalidInput, got {:?}", other),
        }
    }

    #[test]
    fn io_failure_maps_to_internal() {
        let err = PairwiseStoreError::Io("disk full".to_string());
        assert_eq!(DomainError::from(err.clone()).code, ErrorCode::StorageError);
        assert!(matches!(AhpError::from(err), AhpError::Internal(_)));
    }
}
