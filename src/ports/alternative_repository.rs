//! Alternative repository port.

use async_trait::async_trait;

use crate::domain::collection::Alternative;
use crate::domain::foundation::{AlternativeId, CollectionId, DomainError};

/// Repository port for Alternative persistence.
#[async_trait]
pub trait AlternativeRepository: Send + Sync {
    /// Save a new alternative.
    ///
    /// # Errors
    ///
    /// - `CollectionNotFound` if the owning collection doesn't exist
    /// - `DatabaseError` on persistence failure
    async fn save(&self, alternative: &Alternative) -> Result<(), DomainError>;

    /// Update name and selection of an existing alternative.
    ///
    /// # Errors
    ///
    /// - `AlternativeNotFound` if the alternative doesn't exist
    async fn update(&self, alternative: &Alternative) -> Result<(), DomainError>;

    /// Delete an alternative together with its scores and final score.
    ///
    /// # Errors
    ///
    /// - `AlternativeNotFound` if the alternative doesn't exist
    async fn delete(&self, id: &AlternativeId) -> Result<(), DomainError>;

    /// Returns `None` if not found.
    async fn find_by_id(&self, id: &AlternativeId) -> Result<Option<Alternative>, DomainError>;

    /// Every alternative across all collections, in creation order.
    async fn find_all(&self) -> Result<Vec<Alternative>, DomainError>;

    /// Alternatives of a collection in creation order.
    async fn find_by_collection(
        &self,
        collection_id: &CollectionId,
    ) -> Result<Vec<Alternative>, DomainError>;
}
