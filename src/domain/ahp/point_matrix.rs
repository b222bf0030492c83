//! Alternative To Point Matrix Builder.

use serde::Serialize;

use super::criterion::CriterionValues;
use super::errors::AhpError;
use super::subcriteria::SubcriteriaPointMapper;
use crate::domain::collection::Alternative;
use crate::domain::foundation::{AlternativeId, CollectionId};

/// Mapped points of one alternative.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PointRow {
    pub alternative_id: AlternativeId,
    pub collection_id: CollectionId,
    #[serde(flatten)]
    pub points: CriterionValues,
}

/// M×N point matrix: one row per alternative, columns in criterion order.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct PointMatrix {
    rows: Vec<PointRow>,
}

impl PointMatrix {
    pub fn rows(&self) -> &[PointRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Raw numeric matrix, rows in alternative order.
    pub fn to_matrix(&self) -> Vec<Vec<f64>> {
        self.rows
            .iter()
            .map(|row| row.points.to_array().to_vec())
            .collect()
    }
}

/// Turns alternatives into a point matrix through a [`SubcriteriaPointMapper`].
pub struct AlternativeToPointMatrixBuilder<'a> {
    mapper: &'a SubcriteriaPointMapper,
}

impl<'a> AlternativeToPointMatrixBuilder<'a> {
    pub fn new(mapper: &'a SubcriteriaPointMapper) -> Self {
        Self { mapper }
    }

    /// Builds the matrix, keeping the input order of alternatives.
    ///
    /// # Errors
    /// - `NotFound` if there are no alternatives
    /// - `InvalidInput` if any alternative uses an unknown code
    pub fn build(
        &self,
        collection_id: &CollectionId,
        alternatives: &[Alternative],
    ) -> Result<PointMatrix, AhpError> {
        if alternatives.is_empty() {
            return Err(AhpError::not_found("Alternatives for collection", collection_id));
        }

        let rows = alternatives
            .iter()
            .map(|alternative| {
                Ok(PointRow {
                    alternative_id: *alternative.id(),
                    collection_id: *alternative.collection_id(),
                    points: self.mapper.points_for(alternative.selection())?,
                })
            })
            .collect::<Result<Vec<_>, AhpError>>()?;

        Ok(PointMatrix { rows })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ahp::selection::fixtures::{best_selection, middle_selection};
    use crate::domain::ahp::SubcriteriaSelection;

    fn alternative(collection_id: CollectionId, selection: SubcriteriaSelection) -> Alternative {
        Alternative::new(AlternativeId::new(), collection_id, "Site".to_string(), selection)
            .unwrap()
    }

    #[test]
    fn builds_one_row_per_alternative_in_order() {
        let mapper = SubcriteriaPointMapper::reference();
        let collection_id = CollectionId::new();
        let alternatives = vec![
            alternative(collection_id, best_selection()),
            alternative(collection_id, middle_selection()),
        ];

        let matrix = AlternativeToPointMatrixBuilder::new(&mapper)
            .build(&collection_id, &alternatives)
            .unwrap();

        assert_eq!(matrix.len(), 2);
        assert_eq!(matrix.rows()[0].alternative_id, *alternatives[0].id());
        assert_eq!(matrix.rows()[1].alternative_id, *alternatives[1].id());
        assert_eq!(matrix.to_matrix()[0], vec![0.637; 7]);
        assert_eq!(matrix.to_matrix()[1], vec![0.258; 7]);
    }

    #[test]
    fn no_alternatives_is_not_found() {
        let mapper = SubcriteriaPointMapper::reference();
        let result = AlternativeToPointMatrixBuilder::new(&mapper).build(&CollectionId::new(), &[]);
        assert!(matches!(result, Err(AhpError::NotFound(_))));
    }

    #[test]
    fn unknown_code_is_invalid_input() {
        let mapper = SubcriteriaPointMapper::reference();
        let collection_id = CollectionId::new();
        let mut selection = best_selection();
        selection.waste_volume = "enormous".to_string();
        let alternatives = vec![
            alternative(collection_id, best_selection()),
            alternative(collection_id, selection),
        ];

        match AlternativeToPointMatrixBuilder::new(&mapper).build(&collection_id, &alternatives) {
            Err(AhpError::InvalidInput { field, .. }) => assert_eq!(field, "waste_volume"),
            other => panic!("Expected InvalidInput, got {:?}", other),
        }
    }
}
