//! HTTP adapter for AHP endpoints.
//!
//! - `GET /api/ahp/criteria` - criteria weights
//! - `PATCH /api/ahp/criteria` - replace the pairwise matrix
//! - `GET /api/ahp/scores/:collection_id` - stored scores
//! - `GET /api/ahp/final_scores/:collection_id` - stored final scores
//! - `GET /api/ahp/point/calculate/:collection_id` - point matrix
//! - `GET /api/ahp/scores/calculate/:collection_id` - recompute scores
//! - `GET /api/ahp/final_scores/calculate/:collection_id` - recompute final scores

mod dto;
mod handlers;
mod routes;

pub use dto::{
    CriteriaResponse, FinalScoreResponse, PairwiseMatrixResponse, PointMatrixResponse,
    ScoreResponse, UpdatePairwiseMatrixRequest,
};
pub use handlers::AhpHandlers;
pub use routes::ahp_routes;
