//! AHP repository port.
//!
//! Reads of computed results, plus the collection-scoped transaction used to
//! replace them.
//!
//! # Design
//!
//! - **Collection-scoped**: every write happens inside a
//!   [`CollectionTransaction`] that holds an exclusive lock on one collection
//! - **Replace, never patch**: recomputes delete all rows of a kind and
//!   insert the new set
//! - **All or nothing**: dropping a transaction without `commit` discards
//!   every staged write, including flag updates

use async_trait::async_trait;

use crate::domain::ahp::{FinalScore, Score};
use crate::domain::collection::{Alternative, CollectionFlags};
use crate::domain::foundation::{CollectionId, DomainError};

/// Repository port for AHP result persistence.
#[async_trait]
pub trait AhpRepository: Send + Sync {
    /// Alternatives of a collection in creation order.
    async fn find_alternatives_by_collection(
        &self,
        collection_id: &CollectionId,
    ) -> Result<Vec<Alternative>, DomainError>;

    /// Current scores of a collection. Empty if never scored.
    async fn find_scores_by_collection(
        &self,
        collection_id: &CollectionId,
    ) -> Result<Vec<Score>, DomainError>;

    /// Current final scores of a collection. Empty if never scored.
    async fn find_final_scores_by_collection(
        &self,
        collection_id: &CollectionId,
    ) -> Result<Vec<FinalScore>, DomainError>;

    /// Open a transaction holding the collection's lock.
    ///
    /// Blocks while another transaction holds the same collection.
    ///
    /// # Errors
    ///
    /// - `CollectionNotFound` if the collection doesn't exist
    /// - `DatabaseError` on persistence failure
    async fn begin(
        &self,
        collection_id: &CollectionId,
    ) -> Result<Box<dyn CollectionTransaction>, DomainError>;
}

/// Unit of work scoped to one locked collection.
///
/// Reads observe the transaction's own staged writes.
#[async_trait]
pub trait CollectionTransaction: Send {
    /// The locked collection.
    fn collection_id(&self) -> &CollectionId;

    async fn find_alternatives(&mut self) -> Result<Vec<Alternative>, DomainError>;

    /// Delete every score of the collection, returning the number removed.
    async fn delete_scores(&mut self) -> Result<u64, DomainError>;

    async fn create_scores(&mut self, scores: &[Score]) -> Result<(), DomainError>;

    /// Delete every final score of the collection, returning the number removed.
    async fn delete_final_scores(&mut self) -> Result<u64, DomainError>;

    async fn create_final_scores(
        &mut self,
        final_scores: &[FinalScore],
    ) -> Result<(), DomainError>;

    async fn update_collection_flags(&mut self, flags: CollectionFlags) -> Result<(), DomainError>;

    /// Make every staged write visible and release the lock.
    ///
    /// A transaction is finished after `commit`, successful or not.
    async fn commit(&mut self) -> Result<(), DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ahp_repository_is_object_safe() {
        fn _accepts_dyn(_repo: &dyn AhpRepository) {}
    }

    #[test]
    fn collection_transaction_is_object_safe() {
        fn _accepts_dyn(_tx: &dyn CollectionTransaction) {}
    }
}
