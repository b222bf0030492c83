//! Score records produced by a recompute.

use serde::{Deserialize, Serialize};

use super::criterion::CriterionValues;
use crate::domain::foundation::{AlternativeId, CollectionId, FinalScoreId, ScoreId, Timestamp};

/// Weighted, rounded per-criterion values for one alternative.
///
/// Replaced wholesale on every recompute of its collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Score {
    pub id: ScoreId,
    pub alternative_id: AlternativeId,
    pub collection_id: CollectionId,
    #[serde(flatten)]
    pub values: CriterionValues,
    pub created_at: Timestamp,
}

impl Score {
    pub fn new(
        alternative_id: AlternativeId,
        collection_id: CollectionId,
        values: CriterionValues,
    ) -> Self {
        Self {
            id: ScoreId::new(),
            alternative_id,
            collection_id,
            values,
            created_at: Timestamp::now(),
        }
    }
}

/// Aggregate score of one alternative, scaled to 0-100.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinalScore {
    pub id: FinalScoreId,
    pub alternative_id: AlternativeId,
    pub collection_id: CollectionId,
    pub final_score: f64,
    /// Always [`FinalScore::UNRANKED`]; no ranking is computed.
    pub rank: u32,
    pub created_at: Timestamp,
}

impl FinalScore {
    pub const UNRANKED: u32 = 0;

    pub fn new(
        alternative_id: AlternativeId,
        collection_id: CollectionId,
        final_score: f64,
    ) -> Self {
        Self {
            id: FinalScoreId::new(),
            alternative_id,
            collection_id,
            final_score,
            rank: Self::UNRANKED,
            created_at: Timestamp::now(),
        }
    }
}
