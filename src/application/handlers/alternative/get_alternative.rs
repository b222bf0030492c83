//! GetAlternativeHandler, ListAlternativesHandler and ListAllAlternativesHandler -
//! Alternative queries.

use std::sync::Arc;

use crate::domain::ahp::AhpError;
use crate::domain::collection::Alternative;
use crate::domain::foundation::{AlternativeId, CollectionId};
use crate::ports::{AlternativeRepository, CollectionRepository};

/// Query to get an alternative by ID.
#[derive(Debug, Clone)]
pub struct GetAlternativeQuery {
    pub alternative_id: AlternativeId,
}

pub struct GetAlternativeHandler {
    alternatives: Arc<dyn AlternativeRepository>,
}

impl GetAlternativeHandler {
    pub fn new(alternatives: Arc<dyn AlternativeRepository>) -> Self {
        Self { alternatives }
    }

    pub async fn handle(&self, query: GetAlternativeQuery) -> Result<Alternative, AhpError> {
        self.alternatives
            .find_by_id(&query.alternative_id)
            .await?
            .ok_or_else(|| AhpError::not_found("Alternative", query.alternative_id))
    }
}

/// Query for every alternative of a collection.
#[derive(Debug, Clone)]
pub struct ListAlternativesQuery {
    pub collection_id: CollectionId,
}

pub struct ListAlternativesHandler {
    collections: Arc<dyn CollectionRepository>,
    alternatives: Arc<dyn AlternativeRepository>,
}

impl ListAlternativesHandler {
    pub fn new(
        collections: Arc<dyn CollectionRepository>,
        alternatives: Arc<dyn AlternativeRepository>,
    ) -> Self {
        Self {
            collections,
            alternatives,
        }
    }

    /// Returns alternatives in creation order; empty for an empty collection.
    pub async fn handle(&self, query: ListAlternativesQuery) -> Result<Vec<Alternative>, AhpError> {
        if !self.collections.exists(&query.collection_id).await? {
            return Err(AhpError::not_found("Collection", query.collection_id));
        }
        Ok(self
            .alternatives
            .find_by_collection(&query.collection_id)
            .await?)
    }
}

/// Query for every alternative regardless of collection.
#[derive(Debug, Clone, Default)]
pub struct ListAllAlternativesQuery;

pub struct ListAllAlternativesHandler {
    alternatives: Arc<dyn AlternativeRepository>,
}

impl ListAllAlternativesHandler {
    pub fn new(alternatives: Arc<dyn AlternativeRepository>) -> Self {
        Self { alternatives }
    }

    pub async fn handle(
        &self,
        _query: ListAllAlternativesQuery,
    ) -> Result<Vec<Alternative>, AhpError> {
        Ok(self.alternatives.find_all().await?)
    }
}
