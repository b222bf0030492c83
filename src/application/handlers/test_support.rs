//! Fixtures shared by handler tests.

use std::sync::Arc;

use crate::adapters::memory::InMemoryAhpStore;
use crate::adapters::storage::InMemoryPairwiseMatrixStore;
use crate::domain::ahp::selection::fixtures::{best_selection, middle_selection};
use crate::domain::ahp::{PairwiseMatrix, SubcriteriaPointMapper, CRITERIA_COUNT};
use crate::domain::collection::{Alternative, Collection};
use crate::domain::foundation::{AlternativeId, CollectionId};
use crate::ports::{AlternativeRepository, CollectionRepository};

pub struct Fixture {
    pub store: InMemoryAhpStore,
    pub matrix_store: Arc<InMemoryPairwiseMatrixStore>,
    pub mapper: Arc<SubcriteriaPointMapper>,
    pub collection_id: CollectionId,
    pub alternatives: Vec<Alternative>,
}

/// Store with one collection holding two alternatives and a uniform matrix.
pub async fn fixture() -> Fixture {
    fixture_with(InMemoryAhpStore::new()).await
}

pub async fn fixture_with(store: InMemoryAhpStore) -> Fixture {
    let collection = Collection::new(CollectionId::new(), "Test Collection".to_string()).unwrap();
    CollectionRepository::save(&store, &collection).await.unwrap();

    let mut alternatives = Vec::new();
    for (name, selection) in [("Site A", best_selection()), ("Site B", middle_selection())] {
        let alternative = Alternative::new(
            AlternativeId::new(),
            *collection.id(),
            name.to_string(),
            selection,
        )
        .unwrap();
        AlternativeRepository::save(&store, &alternative).await.unwrap();
        alternatives.push(alternative);
    }

    Fixture {
        store,
        matrix_store: Arc::new(InMemoryPairwiseMatrixStore::with_matrix(
            PairwiseMatrix::uniform(CRITERIA_COUNT),
        )),
        mapper: Arc::new(SubcriteriaPointMapper::reference()),
        collection_id: *collection.id(),
        alternatives,
    }
}

/// Collection with no alternatives.
pub async fn empty_collection(store: &InMemoryAhpStore) -> CollectionId {
    let collection = Collection::new(CollectionId::new(), "Empty".to_string()).unwrap();
    CollectionRepository::save(store, &collection).await.unwrap();
    *collection.id()
}
