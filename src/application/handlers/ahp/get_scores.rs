//! GetScoresHandler and GetFinalScoresHandler - Query handlers for stored results.

use std::sync::Arc;

use crate::domain::ahp::{AhpError, FinalScore, Score};
use crate::domain::foundation::CollectionId;
use crate::ports::{AhpRepository, CollectionRepository};

/// Query for the current scores of a collection.
#[derive(Debug, Clone)]
pub struct GetScoresQuery {
    pub collection_id: CollectionId,
}

/// Query for the current final scores of a collection.
#[derive(Debug, Clone)]
pub struct GetFinalScoresQuery {
    pub collection_id: CollectionId,
}

async fn ensure_collection_exists(
    collections: &dyn CollectionRepository,
    collection_id: &CollectionId,
) -> Result<(), AhpError> {
    if !collections.exists(collection_id).await? {
        return Err(AhpError::not_found("Collection", collection_id));
    }
    Ok(())
}

/// Handler returning stored scores. Empty if the collection was never scored.
pub struct GetScoresHandler {
    collections: Arc<dyn CollectionRepository>,
    repository: Arc<dyn AhpRepository>,
}

impl GetScoresHandler {
    pub fn new(
        collections: Arc<dyn CollectionRepository>,
        repository: Arc<dyn AhpRepository>,
    ) -> Self {
        Self {
            collections,
            repository,
        }
    }

    pub async fn handle(&self, query: GetScoresQuery) -> Result<Vec<Score>, AhpError> {
        ensure_collection_exists(self.collections.as_ref(), &query.collection_id).await?;
        Ok(self
            .repository
            .find_scores_by_collection(&query.collection_id)
            .await?)
    }
}

/// Handler returning stored final scores. Empty if never computed.
pub struct GetFinalScoresHandler {
    collections: Arc<dyn CollectionRepository>,
    repository: Arc<dyn AhpRepository>,
}

impl GetFinalScoresHandler {
    pub fn new(
        collections: Arc<dyn CollectionRepository>,
        repository: Arc<dyn AhpRepository>,
    ) -> Self {
        Self {
            collections,
            repository,
        }
    }

    pub async fn handle(&self, query: GetFinalScoresQuery) -> Result<Vec<FinalScore>, AhpError> {
        ensure_collection_exists(self.collections.as_ref(), &query.collection_id).await?;
        Ok(self
            .repository
            .find_final_scores_by_collection(&query.collection_id)
            .await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::test_support::fixture;

    #[tokio::test]
    async fn unknown_collection_is_not_found() {
        let fx = fixture().await;
        let store = Arc::new(fx.store);
        let handler = GetScoresHandler::new(store.clone(), store.clone());

        let result = handler
            .handle(GetScoresQuery {
                collection_id: CollectionId::new(),
            })
            .await;

        assert!(matches!(result, Err(AhpError::NotFound(_))));

        let handler = GetFinalScoresHandler::new(store.clone(), store);
        let result = handler
            .handle(GetFinalScoresQuery {
                collection_id: CollectionId::new(),
            })
            .await;
        assert!(matches!(result, Err(AhpError::NotFound(_))));
    }

    #[tokio::test]
    async fn never_scored_collection_is_empty() {
        let fx = fixture().await;
        let store = Arc::new(fx.store);

        let scores = GetScoresHandler::new(store.clone(), store.clone())
            .handle(GetScoresQuery {
                collection_id: fx.collection_id,
            })
            .await
            .unwrap();
        let final_scores = GetFinalScoresHandler::new(store.clone(), store)
            .handle(GetFinalScoresQuery {
                collection_id: fx.collection_id,
            })
            .await
            .unwrap();

        assert!(scores.is_empty());
        assert!(final_scores.is_empty());
    }
}
