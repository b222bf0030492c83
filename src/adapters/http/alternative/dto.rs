//! HTTP DTOs for alternative endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::ahp::SubcriteriaSelection;
use crate::domain::collection::Alternative;

// ════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Request to create an alternative inside a collection.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateAlternativeRequest {
    pub collection_id: String,
    pub name: String,
    pub selection: SubcriteriaSelection,
}

/// Request to update an alternative. Omitted fields are left unchanged.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateAlternativeRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub selection: Option<SubcriteriaSelection>,
}

// ════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Serialize)]
pub struct AlternativeResponse {
    pub id: String,
    pub collection_id: String,
    pub name: String,
    pub selection: SubcriteriaSelection,
    pub created_at: String,
    pub updated_at: String,
}

impl From<Alternative> for AlternativeResponse {
    fn from(alternative: Alternative) -> Self {
        Self {
            id: alternative.id().to_string(),
            collection_id: alternative.collection_id().to_string(),
            name: alternative.name().to_string(),
            selection: alternative.selection().clone(),
            created_at: alternative.created_at().to_rfc3339(),
            updated_at: alternative.updated_at().to_rfc3339(),
        }
    }
}

/// Response for alternative command operations without a body of their own.
#[derive(Debug, Clone, Serialize)]
pub struct AlternativeCommandResponse {
    pub alternative_id: String,
    pub message: String,
}
