//! Pairwise comparison matrix value object.

use serde::{Deserialize, Serialize};

use super::criterion::CRITERIA_COUNT;
use super::errors::AhpError;

/// Square matrix where entry `[i][j]` is the importance of criterion `i`
/// relative to criterion `j`.
///
/// Construction guarantees a non-empty, square matrix of finite numbers.
/// Reciprocity (`[j][i] == 1 / [i][j]`) and a unit diagonal are expected from
/// callers but not enforced here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<f64>>", into = "Vec<Vec<f64>>")]
pub struct PairwiseMatrix {
    rows: Vec<Vec<f64>>,
}

impl PairwiseMatrix {
    /// Creates a matrix, rejecting empty, ragged, non-square, or non-finite input.
    pub fn new(rows: Vec<Vec<f64>>) -> Result<Self, AhpError> {
        let n = rows.len();
        if n == 0 {
            return Err(AhpError::invalid_input(
                "pairwise",
                "matrix must have at least one row",
            ));
        }

        for (i, row) in rows.iter().enumerate() {
            if row.len() != n {
                return Err(AhpError::invalid_input(
                    format!("pairwise[{}]", i),
                    format!("matrix must be square: expected {} columns, got {}", n, row.len()),
                ));
            }
            if let Some(j) = row.iter().position(|v| !v.is_finite()) {
                return Err(AhpError::invalid_input(
                    format!("pairwise[{}][{}]", i, j),
                    "entry must be a finite number",
                ));
            }
        }

        Ok(Self { rows })
    }

    /// N×N matrix of ones: every criterion equally important.
    pub fn uniform(n: usize) -> Self {
        Self {
            rows: vec![vec![1.0; n]; n],
        }
    }

    /// Number of criteria compared (N).
    pub fn size(&self) -> usize {
        self.rows.len()
    }

    /// Rows in criterion order.
    pub fn rows(&self) -> &[Vec<f64>] {
        &self.rows
    }

    /// Entry `[i][j]`.
    pub fn get(&self, i: usize, j: usize) -> Option<f64> {
        self.rows.get(i).and_then(|row| row.get(j)).copied()
    }

    /// Checks that the matrix can drive scoring of the fixed criteria set:
    /// exactly one row per criterion and strictly positive entries.
    pub fn ensure_criteria_matrix(&self) -> Result<(), AhpError> {
        if self.size() != CRITERIA_COUNT {
            return Err(AhpError::invalid_input(
                "pairwise",
                format!(
                    "expected a {}x{} matrix, got {}x{}",
                    CRITERIA_COUNT,
                    CRITERIA_COUNT,
                    self.size(),
                    self.size()
                ),
            ));
        }

        for (i, row) in self.rows.iter().enumerate() {
            if let Some(j) = row.iter().position(|v| *v <= 0.0) {
                return Err(AhpError::invalid_input(
                    format!("pairwise[{}][{}]", i, j),
                    "entry must be greater than zero",
                ));
            }
        }

        Ok(())
    }
}

impl TryFrom<Vec<Vec<f64>>> for PairwiseMatrix {
    type Error = AhpError;

    fn try_from(rows: Vec<Vec<f64>>) -> Result<Self, Self::Error> {
        Self::new(rows)
    }
}

impl From<PairwiseMatrix> for Vec<Vec<f64>> {
    fn from(matrix: PairwiseMatrix) -> Self {
        matrix.rows
    }
}
