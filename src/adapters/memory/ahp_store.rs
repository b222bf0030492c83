//! In-memory implementation of the repository ports.
//!
//! Collection transactions hold a per-collection async mutex for their whole
//! lifetime and stage writes locally; nothing is visible to other readers
//! until `commit`.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::{Mutex, OwnedMutexGuard, RwLock};

use crate::domain::ahp::{FinalScore, Score};
use crate::domain::collection::{Alternative, Collection, CollectionFlags};
use crate::domain::foundation::{AlternativeId, CollectionId, DomainError, ErrorCode};
use crate::ports::{
    AhpRepository, AlternativeRepository, CollectionRepository, CollectionTransaction,
};

/// Transaction step that can be forced to fail, for rollback tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailPoint {
    CreateScores,
    CreateFinalScores,
    UpdateFlags,
    Commit,
}

#[derive(Debug, Default)]
struct StoreState {
    collections: HashMap<CollectionId, Collection>,
    /// Kept in creation order.
    alternatives: Vec<Alternative>,
    scores: HashMap<CollectionId, Vec<Score>>,
    final_scores: HashMap<CollectionId, Vec<FinalScore>>,
}

impl StoreState {
    fn alternatives_of(&self, collection_id: &CollectionId) -> Vec<Alternative> {
        self.alternatives
            .iter()
            .filter(|a| a.collection_id() == collection_id)
            .cloned()
            .collect()
    }
}

/// In-memory store for collections, alternatives, and computed scores.
#[derive(Debug, Clone, Default)]
pub struct InMemoryAhpStore {
    state: Arc<RwLock<StoreState>>,
    /// Per-collection locks held by open or waiting transactions.
    locks: Arc<Mutex<HashMap<CollectionId, Arc<Mutex<()>>>>>,
    fail_point: Option<FailPoint>,
}

impl InMemoryAhpStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every transaction fail at `point`.
    pub fn with_failure(mut self, point: FailPoint) -> Self {
        self.fail_point = Some(point);
        self
    }

    async fn collection_lock(&self, collection_id: &CollectionId) -> Arc<Mutex<()>> {
        let mut locks = self.locks.lock().await;
        // A count of one means only the map holds it: no holder and no waiter.
        locks.retain(|_, lock| Arc::strong_count(lock) > 1);
        locks
            .entry(*collection_id)
            .or_insert_with(|| Arc::new(Mutex::new(())))
            .clone()
    }

    fn collection_not_found(id: &CollectionId) -> DomainError {
        DomainError::new(
            ErrorCode::CollectionNotFound,
            format!("Collection not found: {}", id),
        )
    }

    fn alternative_not_found(id: &AlternativeId) -> DomainError {
        DomainError::new(
            ErrorCode::AlternativeNotFound,
            format!("Alternative not found: {}", id),
        )
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// AhpRepository
// ════════════════════════════════════════════════════════════════════════════════

#[async_trait]
impl AhpRepository for InMemoryAhpStore {
    async fn find_alternatives_by_collection(
        &self,
        collection_id: &CollectionId,
    ) -> Result<Vec<Alternative>, DomainError> {
        Ok(self.state.read().await.alternatives_of(collection_id))
    }

    async fn find_scores_by_collection(
        &self,
        collection_id: &CollectionId,
    ) -> Result<Vec<Score>, DomainError> {
        let state = self.state.read().await;
        Ok(state.scores.get(collection_id).cloned().unwrap_or_default())
    }

    async fn find_final_scores_by_collection(
        &self,
        collection_id: &CollectionId,
    ) -> Result<Vec<FinalScore>, DomainError> {
        let state = self.state.read().await;
        Ok(state
            .final_scores
            .get(collection_id)
            .cloned()
            .unwrap_or_default())
    }

    async fn begin(
        &self,
        collection_id: &CollectionId,
    ) -> Result<Box<dyn CollectionTransaction>, DomainError> {
        if !self.state.read().await.collections.contains_key(collection_id) {
            return Err(Self::collection_not_found(collection_id));
        }

        let guard = self.collection_lock(collection_id).await.lock_owned().await;

        Ok(Box::new(InMemoryCollectionTransaction {
            collection_id: *collection_id,
            state: Arc::clone(&self.state),
            fail_point: self.fail_point,
            staged_scores: None,
            staged_final_scores: None,
            staged_flags: CollectionFlags::default(),
            finished: false,
            _guard: guard,
        }))
    }
}

struct InMemoryCollectionTransaction {
    collection_id: CollectionId,
    state: Arc<RwLock<StoreState>>,
    fail_point: Option<FailPoint>,
    staged_scores: Option<Vec<Score>>,
    staged_final_scores: Option<Vec<FinalScore>>,
    staged_flags: CollectionFlags,
    finished: bool,
    _guard: OwnedMutexGuard<()>,
}

impl InMemoryCollectionTransaction {
    fn check_fail(&self, point: FailPoint, action: &str) -> Result<(), DomainError> {
        if self.fail_point == Some(point) {
            return Err(DomainError::database(action, "injected failure"));
        }
        Ok(())
    }

    fn ensure_open(&self) -> Result<(), DomainError> {
        if self.finished {
            return Err(DomainError::new(
                ErrorCode::InternalError,
                "Transaction already finished",
            ));
        }
        Ok(())
    }

    async fn visible_scores(&self) -> Vec<Score> {
        match &self.staged_scores {
            Some(scores) => scores.clone(),
            None => self
                .state
                .read()
                .await
                .scores
                .get(&self.collection_id)
                .cloned()
                .unwrap_or_default(),
        }
    }

    async fn visible_final_scores(&self) -> Vec<FinalScore> {
        match &self.staged_final_scores {
            Some(final_scores) => final_scores.clone(),
            None => self
                .state
                .read()
                .await
                .final_scores
                .get(&self.collection_id)
                .cloned()
                .unwrap_or_default(),
        }
    }
}

#[async_trait]
impl CollectionTransaction for InMemoryCollectionTransaction {
    fn collection_id(&self) -> &CollectionId {
        &self.collection_id
    }

    async fn find_alternatives(&mut self) -> Result<Vec<Alternative>, DomainError> {
        self.ensure_open()?;
        Ok(self.state.read().await.alternatives_of(&self.collection_id))
    }

    async fn delete_scores(&mut self) -> Result<u64, DomainError> {
        self.ensure_open()?;
        let removed = self.visible_scores().await.len() as u64;
        self.staged_scores = Some(Vec::new());
        Ok(removed)
    }

    async fn create_scores(&mut self, scores: &[Score]) -> Result<(), DomainError> {
        self.ensure_open()?;
        self.check_fail(FailPoint::CreateScores, "create scores")?;
        let mut current = self.visible_scores().await;
        current.extend_from_slice(scores);
        self.staged_scores = Some(current);
        Ok(())
    }

    async fn delete_final_scores(&mut self) -> Result<u64, DomainError> {
        self.ensure_open()?;
        let removed = self.visible_final_scores().await.len() as u64;
        self.staged_final_scores = Some(Vec::new());
        Ok(removed)
    }

    async fn create_final_scores(
        &mut self,
        final_scores: &[FinalScore],
    ) -> Result<(), DomainError> {
        self.ensure_open()?;
        self.check_fail(FailPoint::CreateFinalScores, "create final scores")?;
        let mut current = self.visible_final_scores().await;
        current.extend_from_slice(final_scores);
        self.staged_final_scores = Some(current);
        Ok(())
    }

    async fn update_collection_flags(&mut self, flags: CollectionFlags) -> Result<(), DomainError> {
        self.ensure_open()?;
        self.check_fail(FailPoint::UpdateFlags, "update collection flags")?;
        if flags.score_calculated.is_some() {
            self.staged_flags.score_calculated = flags.score_calculated;
        }
        if flags.final_score_calculated.is_some() {
            self.staged_flags.final_score_calculated = flags.final_score_calculated;
        }
        Ok(())
    }

    async fn commit(&mut self) -> Result<(), DomainError> {
        self.ensure_open()?;
        self.finished = true;
        self.check_fail(FailPoint::Commit, "commit transaction")?;

        let mut state = self.state.write().await;
        if let Some(scores) = self.staged_scores.take() {
            state.scores.insert(self.collection_id, scores);
        }
        if let Some(final_scores) = self.staged_final_scores.take() {
            state.final_scores.insert(self.collection_id, final_scores);
        }
        if self.staged_flags != CollectionFlags::default() {
            if let Some(collection) = state.collections.get_mut(&self.collection_id) {
                collection.apply_flags(self.staged_flags);
            }
        }
        Ok(())
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// AlternativeRepository
// ════════════════════════════════════════════════════════════════════════════════

#[async_trait]
impl AlternativeRepository for InMemoryAhpStore {
    async fn save(&self, alternative: &Alternative) -> Result<(), DomainError> {
        let mut state = self.state.write().await;
        if !state.collections.contains_key(alternative.collection_id()) {
            return Err(Self::collection_not_found(alternative.collection_id()));
        }
        state.alternatives.push(alternative.clone());
        Ok(())
    }

    async fn update(&self, alternative: &Alternative) -> Result<(), DomainError> {
        let mut state = self.state.write().await;
        let existing = state
            .alternatives
            .iter_mut()
            .find(|a| a.id() == alternative.id())
            .ok_or_else(|| Self::alternative_not_found(alternative.id()))?;
        *existing = alternative.clone();
        Ok(())
    }

    async fn delete(&self, id: &AlternativeId) -> Result<(), DomainError> {
        let mut state = self.state.write().await;
        let before = state.alternatives.len();
        state.alternatives.retain(|a| a.id() != id);
        if state.alternatives.len() == before {
            return Err(Self::alternative_not_found(id));
        }

        for scores in state.scores.values_mut() {
            scores.retain(|s| &s.alternative_id != id);
        }
        for final_scores in state.final_scores.values_mut() {
            final_scores.retain(|s| &s.alternative_id != id);
        }
        Ok(())
    }

    async fn find_by_id(&self, id: &AlternativeId) -> Result<Option<Alternative>, DomainError> {
        let state = self.state.read().await;
        Ok(state.alternatives.iter().find(|a| a.id() == id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<Alternative>, DomainError> {
        Ok(self.state.read().await.alternatives.clone())
    }

    async fn find_by_collection(
        &self,
        collection_id: &CollectionId,
    ) -> Result<Vec<Alternative>, DomainError> {
        Ok(self.state.read().await.alternatives_of(collection_id))
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// CollectionRepository
// ════════════════════════════════════════════════════════════════════════════════

#[async_trait]
impl CollectionRepository for InMemoryAhpStore {
    async fn save(&self, collection: &Collection) -> Result<(), DomainError> {
        let mut state = self.state.write().await;
        state
            .collections
            .insert(*collection.id(), collection.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: &CollectionId) -> Result<Option<Collection>, DomainError> {
        Ok(self.state.read().await.collections.get(id).cloned())
    }

    async fn exists(&self, id: &CollectionId) -> Result<bool, DomainError> {
        Ok(self.state.read().await.collections.contains_key(id))
    }
}
