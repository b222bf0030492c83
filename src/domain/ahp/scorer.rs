//! Alternative Scorer - weights a point matrix into per-criterion scores.

use super::criterion::{Criterion, CriterionValues, CRITERIA_COUNT};
use super::errors::AhpError;
use super::point_matrix::PointMatrix;
use super::score::Score;
use super::weight_calculator::CriteriaWeights;

/// Decimal places kept on every weighted value.
pub const SCORE_DECIMALS: i32 = 3;

/// Rounds half away from zero to `decimals` places.
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

pub struct AlternativeScorer;

impl AlternativeScorer {
    /// `point * weight` per criterion, rounded to [`SCORE_DECIMALS`].
    pub fn weigh(
        points: &CriterionValues,
        weights: &CriteriaWeights,
    ) -> Result<CriterionValues, AhpError> {
        Self::ensure_weight_count(weights)?;
        let weights = weights.as_slice();
        Ok(points.map(|criterion: Criterion, point| {
            round_to(point * weights[criterion.index()], SCORE_DECIMALS)
        }))
    }

    /// One [`Score`] per matrix row, linked to the row's alternative and
    /// collection.
    ///
    /// # Errors
    /// - `InvalidInput` if the weight count differs from the criteria count
    pub fn score(matrix: &PointMatrix, weights: &CriteriaWeights) -> Result<Vec<Score>, AhpError> {
        Self::ensure_weight_count(weights)?;
        matrix
            .rows()
            .iter()
            .map(|row| {
                Ok(Score::new(
                    row.alternative_id,
                    row.collection_id,
                    Self::weigh(&row.points, weights)?,
                ))
            })
            .collect()
    }

    fn ensure_weight_count(weights: &CriteriaWeights) -> Result<(), AhpError> {
        if weights.len() != CRITERIA_COUNT {
            return Err(AhpError::invalid_input(
                "weights",
                format!(
                    "expected {} weights, got {}",
                    CRITERIA_COUNT,
                    weights.len()
                ),
            ));
        }
        Ok(())
    }
}
