//! AHP command and query handlers.

mod get_criteria_weights;
mod get_scores;
mod recalculate_point_matrix;
mod recompute;
mod update_pairwise_matrix;

pub use get_criteria_weights::{GetCriteriaWeightsHandler, GetCriteriaWeightsQuery};
pub use get_scores::{GetFinalScoresHandler, GetFinalScoresQuery, GetScoresHandler, GetScoresQuery};
pub use recalculate_point_matrix::{RecalculatePointMatrixHandler, RecalculatePointMatrixQuery};
pub use recompute::{
    CollectionRecomputeOrchestrator, RecalculateFinalScoresCommand, RecalculateScoresCommand,
};
pub use update_pairwise_matrix::{UpdatePairwiseMatrixCommand, UpdatePairwiseMatrixHandler};
