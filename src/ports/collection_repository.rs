//! Collection repository port.

use async_trait::async_trait;

use crate::domain::collection::Collection;
use crate::domain::foundation::{CollectionId, DomainError};

/// Repository port for Collection persistence.
///
/// Flag updates go through [`super::CollectionTransaction`], never through
/// this port.
#[async_trait]
pub trait CollectionRepository: Send + Sync {
    /// Save a new collection.
    async fn save(&self, collection: &Collection) -> Result<(), DomainError>;

    /// Returns `None` if not found.
    async fn find_by_id(&self, id: &CollectionId) -> Result<Option<Collection>, DomainError>;

    async fn exists(&self, id: &CollectionId) -> Result<bool, DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collection_repository_is_object_safe() {
        fn _accepts_dyn(_repo: &dyn CollectionRepository) {}
    }
}
