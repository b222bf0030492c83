//! Criteria Weight Calculator - AHP priority vector from a pairwise matrix.

use serde::{Deserialize, Serialize};

use super::criterion::Criterion;
use super::errors::AhpError;
use super::pairwise::PairwiseMatrix;

/// One weight per criterion, in matrix order.
///
/// Weights produced by [`CriteriaWeightCalculator`] sum to 1 within floating
/// point tolerance; the type itself does not re-validate that.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CriteriaWeights(Vec<f64>);

impl CriteriaWeights {
    pub fn new(weights: Vec<f64>) -> Self {
        Self(weights)
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<f64> {
        self.0.get(index).copied()
    }

    /// Weight of a criterion from the fixed criteria set.
    pub fn for_criterion(&self, criterion: Criterion) -> Option<f64> {
        self.get(criterion.index())
    }

    pub fn sum(&self) -> f64 {
        self.0.iter().sum()
    }
}

/// Result of a weight calculation, keeping both matrix forms for display.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CriteriaAnalysis {
    /// The matrix as stored.
    pub pairwise: PairwiseMatrix,
    /// Column-normalized matrix: every column sums to 1.
    pub normalized: Vec<Vec<f64>>,
    /// Row means of the normalized matrix.
    pub weights: CriteriaWeights,
}

/// Derives criteria weights from a pairwise comparison matrix.
pub struct CriteriaWeightCalculator;

impl CriteriaWeightCalculator {
    /// Sums every column of the matrix.
    pub fn column_sums(matrix: &PairwiseMatrix) -> Vec<f64> {
        let n = matrix.size();
        (0..n)
            .map(|j| matrix.rows().iter().map(|row| row[j]).sum())
            .collect()
    }

    /// Computes the AHP priority vector.
    ///
    /// # Algorithm
    /// 1. `col_sum[j] = Σ_i m[i][j]`
    /// 2. `normalized[i][j] = m[i][j] / col_sum[j]`
    /// 3. `weight[i] = Σ_j normalized[i][j] / N`
    ///
    /// # Errors
    /// - `InvalidInput` if any column sums to zero
    pub fn calculate(matrix: &PairwiseMatrix) -> Result<CriteriaAnalysis, AhpError> {
        let n = matrix.size();
        let col_sums = Self::column_sums(matrix);

        if let Some(j) = col_sums.iter().position(|sum| *sum == 0.0) {
            return Err(AhpError::invalid_input(
                format!("pairwise column {}", j),
                "column sums to zero; cannot normalize",
            ));
        }

        let normalized: Vec<Vec<f64>> = matrix
            .rows()
            .iter()
            .map(|row| {
                row.iter()
                    .zip(&col_sums)
                    .map(|(value, col_sum)| value / col_sum)
                    .collect()
            })
            .collect();

        let weights = normalized
            .iter()
            .map(|row| row.iter().sum::<f64>() / n as f64)
            .collect();

        Ok(CriteriaAnalysis {
            pairwise: matrix.clone(),
            normalized,
            weights: CriteriaWeights::new(weights),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ahp::CRITERIA_COUNT;
    use proptest::prelude::*;

    fn matrix(rows: Vec<Vec<f64>>) -> PairwiseMatrix {
        PairwiseMatrix::new(rows).unwrap()
    }

    fn assert_close(actual: f64, expected: f64, tolerance: f64) {
        assert!(
            (actual - expected).abs() < tolerance,
            "expected {} to be within {} of {}",
            actual,
            tolerance,
            expected
        );
    }

    #[test]
    fn two_by_two_matrix_matches_worked_example() {
        let analysis =
            CriteriaWeightCalculator::calculate(&matrix(vec![vec![1.0, 2.0], vec![0.5, 1.0]]))
                .unwrap();

        assert_eq!(
            CriteriaWeightCalculator::column_sums(&analysis.pairwise),
            vec![1.5, 3.0]
        );
        assert_close(analysis.normalized[0][0], 0.667, 1e-3);
        assert_close(analysis.normalized[0][1], 0.667, 1e-3);
        assert_close(analysis.normalized[1][0], 0.333, 1e-3);
        assert_close(analysis.normalized[1][1], 0.333, 1e-3);
        assert_close(analysis.weights.as_slice()[0], 2.0 / 3.0, 1e-12);
        assert_close(analysis.weights.as_slice()[1], 1.0 / 3.0, 1e-12);
        assert_close(analysis.weights.sum(), 1.0, 1e-12);
    }

    #[test]
    fn single_criterion_gets_full_weight() {
        let analysis = CriteriaWeightCalculator::calculate(&matrix(vec![vec![1.0]])).unwrap();
        assert_eq!(analysis.weights.as_slice(), &[1.0]);
    }

    #[test]
    fn uniform_matrix_gives_equal_weights() {
        let analysis =
            CriteriaWeightCalculator::calculate(&PairwiseMatrix::uniform(CRITERIA_COUNT)).unwrap();
        for weight in analysis.weights.as_slice() {
            assert_close(*weight, 1.0 / CRITERIA_COUNT as f64, 1e-12);
        }
    }

    #[test]
    fn keeps_original_matrix_untouched() {
        let original = matrix(vec![vec![1.0, 4.0], vec![0.25, 1.0]]);
        let analysis = CriteriaWeightCalculator::calculate(&original).unwrap();
        assert_eq!(analysis.pairwise, original);
        assert_ne!(analysis.normalized, original.rows().to_vec());
    }

    #[test]
    fn zero_column_sum_is_rejected() {
        let result = CriteriaWeightCalculator::calculate(&matrix(vec![
            vec![0.0, 1.0],
            vec![0.0, 1.0],
        ]));
        match result {
            Err(AhpError::InvalidInput { field, .. }) => assert_eq!(field, "pairwise column 0"),
            other => panic!("Expected InvalidInput, got {:?}", other),
        }
    }

    #[test]
    fn more_important_criterion_gets_larger_weight() {
        let analysis = CriteriaWeightCalculator::calculate(&matrix(vec![
            vec![1.0, 3.0, 5.0],
            vec![1.0 / 3.0, 1.0, 3.0],
            vec![0.2, 1.0 / 3.0, 1.0],
        ]))
        .unwrap();
        let w = analysis.weights.as_slice();
        assert!(w[0] > w[1] && w[1] > w[2]);
        assert_close(w[0], 0.633, 1e-3);
    }

    #[test]
    fn weight_lookup_by_criterion() {
        let analysis =
            CriteriaWeightCalculator::calculate(&PairwiseMatrix::uniform(CRITERIA_COUNT)).unwrap();
        assert!(analysis.weights.for_criterion(Criterion::Accessibility).is_some());
    }

    fn positive_matrix() -> impl Strategy<Value = Vec<Vec<f64>>> {
        (1usize..=8).prop_flat_map(|n| {
            prop::collection::vec(prop::collection::vec(0.1f64..9.0, n), n)
        })
    }

    proptest! {
        #[test]
        fn weights_sum_to_one(rows in positive_matrix()) {
            let analysis = CriteriaWeightCalculator::calculate(&matrix(rows)).unwrap();
            prop_assert!((analysis.weights.sum() - 1.0).abs() < 1e-6);
        }

        #[test]
        fn normalized_columns_sum_to_one(rows in positive_matrix()) {
            let analysis = CriteriaWeightCalculator::calculate(&matrix(rows)).unwrap();
            let n = analysis.normalized.len();
            for j in 0..n {
                let col: f64 = analysis.normalized.iter().map(|row| row[j]).sum();
                prop_assert!((col - 1.0).abs() < 1e-9);
            }
        }

        #[test]
        fn column_scaling_leaves_weights_unchanged(
            (rows, factors) in positive_matrix().prop_flat_map(|rows| {
                let n = rows.len();
                (Just(rows), prop::collection::vec(0.01f64..100.0, n))
            })
        ) {
            let scaled: Vec<Vec<f64>> = rows
                .iter()
                .map(|row| row.iter().zip(&factors).map(|(v, c)| v * c).collect())
                .collect();

            let base = CriteriaWeightCalculator::calculate(&matrix(rows)).unwrap();
            let after = CriteriaWeightCalculator::calculate(&matrix(scaled)).unwrap();

            for (a, b) in base.weights.as_slice().iter().zip(after.weights.as_slice()) {
                prop_assert!((a - b).abs() < 1e-9);
            }
        }
    }
}
