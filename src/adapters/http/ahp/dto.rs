//! HTTP DTOs for AHP endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::ahp::{
    CriteriaAnalysis, Criterion, CriterionValues, FinalScore, PairwiseMatrix, PointMatrix, Score,
};

// ════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Request to replace the pairwise comparison matrix.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdatePairwiseMatrixRequest {
    pub pairwise: Vec<Vec<f64>>,
}

// ════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Criteria weights with the matrices they were derived from.
#[derive(Debug, Clone, Serialize)]
pub struct CriteriaResponse {
    pub criteria: Vec<&'static str>,
    pub pairwise: Vec<Vec<f64>>,
    pub normalized: Vec<Vec<f64>>,
    pub weights: Vec<f64>,
}

impl From<CriteriaAnalysis> for CriteriaResponse {
    fn from(analysis: CriteriaAnalysis) -> Self {
        Self {
            criteria: Criterion::keys().to_vec(),
            pairwise: analysis.pairwise.rows().to_vec(),
            normalized: analysis.normalized,
            weights: analysis.weights.as_slice().to_vec(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct PairwiseMatrixResponse {
    pub pairwise: Vec<Vec<f64>>,
}

impl From<PairwiseMatrix> for PairwiseMatrixResponse {
    fn from(matrix: PairwiseMatrix) -> Self {
        Self {
            pairwise: matrix.rows().to_vec(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ScoreResponse {
    pub id: String,
    pub alternative_id: String,
    pub collection_id: String,
    #[serde(flatten)]
    pub values: CriterionValues,
    pub created_at: String,
}

impl From<Score> for ScoreResponse {
    fn from(score: Score) -> Self {
        Self {
            id: score.id.to_string(),
            alternative_id: score.alternative_id.to_string(),
            collection_id: score.collection_id.to_string(),
            values: score.values,
            created_at: score.created_at.to_rfc3339(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct FinalScoreResponse {
    pub id: String,
    pub alternative_id: String,
    pub collection_id: String,
    pub final_score: f64,
    pub rank: u32,
    pub created_at: String,
}

impl From<FinalScore> for FinalScoreResponse {
    fn from(score: FinalScore) -> Self {
        Self {
            id: score.id.to_string(),
            alternative_id: score.alternative_id.to_string(),
            collection_id: score.collection_id.to_string(),
            final_score: score.final_score,
            rank: score.rank,
            created_at: score.created_at.to_rfc3339(),
        }
    }
}

/// M×N point matrix; `alternative_ids[i]` owns `matrix[i]`.
#[derive(Debug, Clone, Serialize)]
pub struct PointMatrixResponse {
    pub collection_id: String,
    pub criteria: Vec<&'static str>,
    pub alternative_ids: Vec<String>,
    pub matrix: Vec<Vec<f64>>,
}

impl PointMatrixResponse {
    pub fn new(collection_id: String, matrix: PointMatrix) -> Self {
        Self {
            collection_id,
            criteria: Criterion::keys().to_vec(),
            alternative_ids: matrix
                .rows()
                .iter()
                .map(|row| row.alternative_id.to_string())
                .collect(),
            matrix: matrix.to_matrix(),
        }
    }
}
