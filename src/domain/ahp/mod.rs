//! AHP module - Analytic Hierarchy Process scoring pipeline.
//!
//! Pure computation, leaf-first:
//!
//! - `SubcriteriaPointMapper` - categorical code to point value
//! - `CriteriaWeightCalculator` - weight vector from a pairwise matrix
//! - `AlternativeToPointMatrixBuilder` - alternatives to an M×N point matrix
//! - `AlternativeScorer` - point matrix × weights to rounded scores
//! - `FinalScoreAggregator` - scores to final scores (×100)
//!
//! Persistence and transactional recompute live in the application layer.

mod criterion;
mod errors;
mod final_score;
mod pairwise;
mod point_matrix;
mod score;
mod scorer;
pub(crate) mod selection;
mod subcriteria;
mod weight_calculator;

pub use criterion::{Criterion, CriterionValues, CRITERIA_COUNT};
pub use errors::AhpError;
pub use final_score::{FinalScoreAggregator, FINAL_SCORE_SCALE};
pub use pairwise::PairwiseMatrix;
pub use point_matrix::{AlternativeToPointMatrixBuilder, PointMatrix, PointRow};
pub use score::{FinalScore, Score};
pub use scorer::{round_to, AlternativeScorer, SCORE_DECIMALS};
pub use selection::SubcriteriaSelection;
pub use subcriteria::SubcriteriaPointMapper;
pub use weight_calculator::{CriteriaAnalysis, CriteriaWeightCalculator, CriteriaWeights};
