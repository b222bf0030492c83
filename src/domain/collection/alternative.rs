//! Alternative entity - one candidate site inside a collection.

use crate::domain::ahp::SubcriteriaSelection;
use crate::domain::foundation::{AlternativeId, CollectionId, DomainError, Timestamp};
use serde::{Deserialize, Serialize};

/// Maximum length for an alternative name.
pub const MAX_NAME_LENGTH: usize = 255;

/// Candidate site evaluated against every criterion.
///
/// # Invariants
///
/// - belongs to exactly one collection, fixed at creation
/// - `name` is 1-255 characters after trimming
/// - every subcriteria code is non-blank (known-ness is checked by the mapper)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Alternative {
    id: AlternativeId,
    collection_id: CollectionId,
    name: String,
    selection: SubcriteriaSelection,
    created_at: Timestamp,
    updated_at: Timestamp,
}

impl Alternative {
    /// Create a new alternative.
    ///
    /// # Errors
    ///
    /// - `ValidationFailed` if name is blank or too long
    /// - `EmptyField` if any subcriteria code is blank
    pub fn new(
        id: AlternativeId,
        collection_id: CollectionId,
        name: String,
        selection: SubcriteriaSelection,
    ) -> Result<Self, DomainError> {
        let name = Self::validate_name(name)?;
        selection.ensure_complete()?;

        let now = Timestamp::now();
        Ok(Self {
            id,
            collection_id,
            name,
            selection,
            created_at: now,
            updated_at: now,
        })
    }

    /// Reconstitute an alternative from persistence (no validation).
    pub fn reconstitute(
        id: AlternativeId,
        collection_id: CollectionId,
        name: String,
        selection: SubcriteriaSelection,
        created_at: Timestamp,
        updated_at: Timestamp,
    ) -> Self {
        Self {
            id,
            collection_id,
            name,
            selection,
            created_at,
            updated_at,
        }
    }

    pub fn id(&self) -> &AlternativeId {
        &self.id
    }

    pub fn collection_id(&self) -> &CollectionId {
        &self.collection_id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn selection(&self) -> &SubcriteriaSelection {
        &self.selection
    }

    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }

    pub fn updated_at(&self) -> &Timestamp {
        &self.updated_at
    }

    /// Replace name and/or selection.
    ///
    /// Existing scores are not touched; they go stale until the next recompute.
    pub fn update(
        &mut self,
        name: Option<String>,
        selection: Option<SubcriteriaSelection>,
    ) -> Result<(), DomainError> {
        let name = name.map(Self::validate_name).transpose()?;
        if let Some(selection) = &selection {
            selection.ensure_complete()?;
        }

        if let Some(name) = name {
            self.name = name;
        }
        if let Some(selection) = selection {
            self.selection = selection;
        }
        self.updated_at = Timestamp::now();
        Ok(())
    }

    fn validate_name(name: String) -> Result<String, DomainError> {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(DomainError::validation("name", "Alternative name cannot be empty"));
        }
        if trimmed.chars().count() > MAX_NAME_LENGTH {
            return Err(DomainError::validation(
                "name",
                format!("Alternative name cannot exceed {} characters", MAX_NAME_LENGTH),
            ));
        }
        Ok(trimmed.to_string())
    }
}
