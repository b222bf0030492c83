//! GetCollectionHandler - Query handler for a collection and its flags.

use std::sync::Arc;

use crate::domain::ahp::AhpError;
use crate::domain::collection::Collection;
use crate::domain::foundation::CollectionId;
use crate::ports::CollectionRepository;

#[derive(Debug, Clone)]
pub struct GetCollectionQuery {
    pub collection_id: CollectionId,
}

pub struct GetCollectionHandler {
    collections: Arc<dyn CollectionRepository>,
}

impl GetCollectionHandler {
    pub fn new(collections: Arc<dyn CollectionRepository>) -> Self {
        Self { collections }
    }

    pub async fn handle(&self, query: GetCollectionQuery) -> Result<Collection, AhpError> {
        self.collections
            .find_by_id(&query.collection_id)
            .await?
            .ok_or_else(|| AhpError::not_found("Collection", query.collection_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::test_support::fixture;

    #[tokio::test]
    async fn returns_existing_collection() {
        let fx = fixture().await;
        let handler = GetCollectionHandler::new(Arc::new(fx.store));

        let collection = handler
            .handle(GetCollectionQuery {
                collection_id: fx.collection_id,
            })
            .await
            .unwrap();

        assert_eq!(collection.id(), &fx.collection_id);
        assert_eq!(collection.name(), "Test Collection");
    }

    #[tokio::test]
    async fn missing_collection_is_not_found() {
        let fx = fixture().await;
        let handler = GetCollectionHandler::new(Arc::new(fx.store));

        let result = handler
            .handle(GetCollectionQuery {
                collection_id: CollectionId::new(),
            })
            .await;

        assert!(matches!(result, Err(AhpError::NotFound(_))));
    }
}
