//! HTTP DTOs for collection endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::collection::Collection;

/// Request to create a collection.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateCollectionRequest {
    pub name: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct CollectionResponse {
    pub id: String,
    pub name: String,
    pub score_is_calculated: bool,
    pub final_score_is_calculated: bool,
    pub created_at: String,
    pub updated_at: String,
}

impl From<Collection> for CollectionResponse {
    fn from(collection: Collection) -> Self {
        Self {
            id: collection.id().to_string(),
            name: collection.name().to_string(),
            score_is_calculated: collection.score_is_calculated(),
            final_score_is_calculated: collection.final_score_is_calculated(),
            created_at: collection.created_at().to_rfc3339(),
            updated_at: collection.updated_at().to_rfc3339(),
        }
    }
}
