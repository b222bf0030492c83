//! CreateAlternativeHandler - Command handler for adding a candidate site.

use std::sync::Arc;
use tracing::{info, warn};

use crate::domain::ahp::{AhpError, SubcriteriaPointMapper, SubcriteriaSelection};
use crate::domain::collection::Alternative;
use crate::domain::foundation::{AlternativeId, CollectionId};
use crate::ports::{AlternativeRepository, CollectionRepository};

/// Command to create an alternative in a collection.
#[derive(Debug, Clone)]
pub struct CreateAlternativeCommand {
    pub collection_id: CollectionId,
    pub name: String,
    pub selection: SubcriteriaSelection,
}

/// Handler for creating alternatives.
pub struct CreateAlternativeHandler {
    collections: Arc<dyn CollectionRepository>,
    alternatives: Arc<dyn AlternativeRepository>,
    mapper: Arc<SubcriteriaPointMapper>,
}

impl CreateAlternativeHandler {
    pub fn new(
        collections: Arc<dyn CollectionRepository>,
        alternatives: Arc<dyn AlternativeRepository>,
        mapper: Arc<SubcriteriaPointMapper>,
    ) -> Self {
        Self {
            collections,
            alternatives,
            mapper,
        }
    }

    /// # Errors
    ///
    /// - `NotFound` if the collection doesn't exist
    /// - `InvalidInput` if the name is blank or a code is unknown
    pub async fn handle(&self, cmd: CreateAlternativeCommand) -> Result<Alternative, AhpError> {
        // 1. Collection must exist
        if !self.collections.exists(&cmd.collection_id).await? {
            return Err(AhpError::not_found("Collection", cmd.collection_id));
        }

        // 2. Build and validate the alternative
        let alternative = Alternative::new(
            AlternativeId::new(),
            cmd.collection_id,
            cmd.name,
            cmd.selection,
        )?;
        self.mapper
            .validate_selection(alternative.selection())
            .map_err(|e| {
                warn!(error = %e, "Rejected alternative with unknown subcriteria code");
                e
            })?;

        // 3. Persist
        self.alternatives.save(&alternative).await?;

        info!(
            alternative_id = %alternative.id(),
            collection_id = %alternative.collection_id(),
            "Alternative created"
        );
        Ok(alternative)
    }
}
