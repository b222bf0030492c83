//! RecalculatePointMatrixHandler - Query handler that maps alternatives to points.
//!
//! Nothing is persisted; the matrix is rebuilt from the current alternatives
//! on every call.

use std::sync::Arc;

use crate::domain::ahp::{
    AhpError, AlternativeToPointMatrixBuilder, PointMatrix, SubcriteriaPointMapper,
};
use crate::domain::foundation::CollectionId;
use crate::ports::AhpRepository;

/// Query for the point matrix of a collection.
#[derive(Debug, Clone)]
pub struct RecalculatePointMatrixQuery {
    pub collection_id: CollectionId,
}

pub struct RecalculatePointMatrixHandler {
    repository: Arc<dyn AhpRepository>,
    mapper: Arc<SubcriteriaPointMapper>,
}

impl RecalculatePointMatrixHandler {
    pub fn new(repository: Arc<dyn AhpRepository>, mapper: Arc<SubcriteriaPointMapper>) -> Self {
        Self { repository, mapper }
    }

    /// # Errors
    ///
    /// - `NotFound` if the collection has no alternatives
    /// - `InvalidInput` if an alternative uses an unknown code
    pub async fn handle(
        &self,
        query: RecalculatePointMatrixQuery,
    ) -> Result<PointMatrix, AhpError> {
        let alternatives = self
            .repository
            .find_alternatives_by_collection(&query.collection_id)
            .await?;

        AlternativeToPointMatrixBuilder::new(&self.mapper)
            .build(&query.collection_id, &alternatives)
    }
}
