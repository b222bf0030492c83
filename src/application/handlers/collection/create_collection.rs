//! CreateCollectionHandler - Command handler for creating collections.

use std::sync::Arc;
use tracing::info;

use crate::domain::ahp::AhpError;
use crate::domain::collection::Collection;
use crate::domain::foundation::CollectionId;
use crate::ports::CollectionRepository;

/// Command to create a new, unscored collection.
#[derive(Debug, Clone)]
pub struct CreateCollectionCommand {
    pub name: String,
}

pub struct CreateCollectionHandler {
    collections: Arc<dyn CollectionRepository>,
}

impl CreateCollectionHandler {
    pub fn new(collections: Arc<dyn CollectionRepository>) -> Self {
        Self { collections }
    }

    pub async fn handle(&self, cmd: CreateCollectionCommand) -> Result<Collection, AhpError> {
        let collection = Collection::new(CollectionId::new(), cmd.name)?;
        self.collections.save(&collection).await?;

        info!(collection_id = %collection.id(), "Collection created");
        Ok(collection)
    }
}
