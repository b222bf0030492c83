//! Final Score Aggregator.

use super::score::{FinalScore, Score};

/// Factor applied to the sum of weighted values.
pub const FINAL_SCORE_SCALE: f64 = 100.0;

pub struct FinalScoreAggregator;

impl FinalScoreAggregator {
    /// `(Σ weighted values) × 100` per score, rank left at 0.
    pub fn aggregate(scores: &[Score]) -> Vec<FinalScore> {
        scores
            .iter()
            .map(|score| {
                FinalScore::new(
                    score.alternative_id,
                    score.collection_id,
                    score.values.sum() * FINAL_SCORE_SCALE,
                )
            })
            .collect()
    }
}
