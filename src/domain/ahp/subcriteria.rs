//! Subcriteria Point Mapper - categorical codes to point values.
//!
//! Every criterion has its own table of subcriteria codes. The reference
//! tables use the local priorities of a 1-3-5 comparison between the three
//! subcriteria of each criterion. Operators can replace them from a YAML file:
//!
//! ```yaml
//! waste_volume:
//!   high: 0.637
//!   medium: 0.258
//!   low: 0.105
//! # ...one table per criterion
//! ```

use once_cell::sync::Lazy;
use std::collections::BTreeMap;

use super::criterion::{Criterion, CriterionValues, CRITERIA_COUNT};
use super::errors::AhpError;
use super::selection::SubcriteriaSelection;

const BEST: f64 = 0.637;
const MIDDLE: f64 = 0.258;
const WORST: f64 = 0.105;

type PointTable = BTreeMap<String, f64>;

static REFERENCE_TABLES: Lazy<BTreeMap<Criterion, PointTable>> = Lazy::new(|| {
    let table = |codes: [&str; 3]| -> PointTable {
        codes
            .iter()
            .zip([BEST, MIDDLE, WORST])
            .map(|(code, points)| (code.to_string(), points))
            .collect()
    };

    BTreeMap::from([
        (Criterion::WasteVolume, table(["high", "medium", "low"])),
        (
            Criterion::DisposalSiteDistance,
            table(["near", "moderate", "far"]),
        ),
        (
            Criterion::SettlementDistance,
            table(["far", "moderate", "near"]),
        ),
        (Criterion::RiverDistance, table(["far", "moderate", "near"])),
        (
            Criterion::CommunityParticipation,
            table(["high", "medium", "low"]),
        ),
        (Criterion::HouseholdCoverage, table(["high", "medium", "low"])),
        (
            Criterion::Accessibility,
            table(["easy", "moderate", "difficult"]),
        ),
    ])
});

/// Maps subcriteria codes to points, one table per criterion.
#[derive(Debug, Clone, PartialEq)]
pub struct SubcriteriaPointMapper {
    tables: BTreeMap<Criterion, PointTable>,
}

impl SubcriteriaPointMapper {
    /// Mapper backed by the built-in reference tables.
    pub fn reference() -> Self {
        Self {
            tables: REFERENCE_TABLES.clone(),
        }
    }

    /// Creates a mapper from explicit tables.
    ///
    /// # Errors
    /// - `InvalidInput` if a criterion has no table or an empty table
    /// - `InvalidInput` if any point is negative or not finite
    pub fn from_tables(tables: BTreeMap<Criterion, PointTable>) -> Result<Self, AhpError> {
        for criterion in Criterion::ALL {
            let table = match tables.get(&criterion) {
                Some(table) if !table.is_empty() => table,
                _ => {
                    return Err(AhpError::invalid_input(
                        criterion.key(),
                        "no subcriteria codes defined",
                    ))
                }
            };

            for (code, points) in table {
                if !points.is_finite() || *points < 0.0 {
                    return Err(AhpError::invalid_input(
                        format!("{}.{}", criterion.key(), code),
                        format!("points must be a finite non-negative number, got {}", points),
                    ));
                }
            }
        }

        Ok(Self { tables })
    }

    /// Parses tables from YAML keyed by criterion, then by code.
    pub fn from_yaml(source: &str) -> Result<Self, AhpError> {
        let tables: BTreeMap<Criterion, PointTable> = serde_yaml::from_str(source)
            .map_err(|e| AhpError::invalid_input("subcriteria", e.to_string()))?;
        Self::from_tables(tables)
    }

    /// Points for one code of one criterion.
    ///
    /// # Errors
    /// - `InvalidInput` naming the criterion if the code is not in its table
    pub fn point(&self, criterion: Criterion, code: &str) -> Result<f64, AhpError> {
        self.tables
            .get(&criterion)
            .and_then(|table| table.get(code))
            .copied()
            .ok_or_else(|| {
                AhpError::invalid_input(
                    criterion.key(),
                    format!("unknown subcriteria code '{}'", code),
                )
            })
    }

    /// Maps every code of a selection, in criterion order.
    pub fn points_for(
        &self,
        selection: &SubcriteriaSelection,
    ) -> Result<CriterionValues, AhpError> {
        let mut points = [0.0; CRITERIA_COUNT];
        for criterion in Criterion::ALL {
            points[criterion.index()] = self.point(criterion, selection.code(criterion))?;
        }
        Ok(CriterionValues::from_array(points))
    }

    /// Checks a selection without keeping the mapped points.
    pub fn validate_selection(&self, selection: &SubcriteriaSelection) -> Result<(), AhpError> {
        self.points_for(selection).map(|_| ())
    }

    /// The table for one criterion.
    pub fn table(&self, criterion: Criterion) -> Option<&BTreeMap<String, f64>> {
        self.tables.get(&criterion)
    }
}

impl Default for SubcriteriaPointMapper {
    fn default() -> Self {
        Self::reference()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ahp::selection::fixtures::{best_selection, middle_selection};

    #[test]
    fn reference_tables_cover_every_criterion() {
        let mapper = SubcriteriaPointMapper::reference();
        for criterion in Criterion::ALL {
            let table = mapper.table(criterion).unwrap();
            assert_eq!(table.len(), 3);
            let total: f64 = table.values().sum();
            assert!((total - 1.0).abs() < 1e-9);
        }
    }

    #[test]
    fn maps_known_codes() {
        let mapper = SubcriteriaPointMapper::reference();
        assert_eq!(mapper.point(Criterion::WasteVolume, "high").unwrap(), 0.637);
        assert_eq!(mapper.point(Criterion::SettlementDistance, "near").unwrap(), 0.105);
        assert_eq!(mapper.point(Criterion::Accessibility, "moderate").unwrap(), 0.258);
    }

    #[test]
    fn unknown_code_is_rejected_with_criterion_field() {
        let mapper = SubcriteriaPointMapper::reference();
        match mapper.point(Criterion::RiverDistance, "adjacent") {
            Err(AhpError::InvalidInput { field, message }) => {
                assert_eq!(field, "river_distance");
                assert!(message.contains("adjacent"));
            }
            other => panic!("Expected InvalidInput, got {:?}", other),
        }
    }

    #[test]
    fn codes_match_exactly() {
        let mapper = SubcriteriaPointMapper::reference();
        assert!(mapper.point(Criterion::WasteVolume, "High").is_err());
        assert!(mapper.point(Criterion::WasteVolume, " high").is_err());
    }

    #[test]
    fn points_for_selection_follow_criterion_order() {
        let mapper = SubcriteriaPointMapper::reference();
        let best = mapper.points_for(&best_selection()).unwrap();
        assert_eq!(best.to_array(), [BEST; 7]);
        let middle = mapper.points_for(&middle_selection()).unwrap();
        assert_eq!(middle.to_array(), [MIDDLE; 7]);
    }

    #[test]
    fn selection_with_unknown_code_fails_validation() {
        let mapper = SubcriteriaPointMapper::reference();
        let mut selection = best_selection();
        selection.household_coverage = "total".to_string();
        assert!(matches!(
            mapper.validate_selection(&selection),
            Err(AhpError::InvalidInput { .. })
        ));
    }

    #[test]
    fn loads_tables_from_yaml() {
        let yaml = r#"
waste_volume: { high: 0.7, low: 0.3 }
disposal_site_distance: { near: 1.0 }
settlement_distance: { far: 1.0 }
river_distance: { far: 1.0 }
community_participation: { high: 1.0 }
household_coverage: { high: 1.0 }
accessibility: { easy: 0.9, difficult: 0.1 }
"#;
        let mapper = SubcriteriaPointMapper::from_yaml(yaml).unwrap();
        assert_eq!(mapper.point(Criterion::WasteVolume, "low").unwrap(), 0.3);
        assert!(mapper.point(Criterion::WasteVolume, "medium").is_err());
    }

    #[test]
    fn yaml_missing_a_criterion_is_rejected() {
        let yaml = "waste_volume: { high: 1.0 }\n";
        match SubcriteriaPointMapper::from_yaml(yaml) {
            Err(AhpError::InvalidInput { field, .. }) => {
                assert_eq!(field, "disposal_site_distance")
            }
            other => panic!("Expected InvalidInput, got {:?}", other),
        }
    }

    #[test]
    fn negative_points_are_rejected() {
        let mut tables = REFERENCE_TABLES.clone();
        tables
            .get_mut(&Criterion::Accessibility)
            .unwrap()
            .insert("blocked".to_string(), -1.0);
        match SubcriteriaPointMapper::from_tables(tables) {
            Err(AhpError::InvalidInput { field, .. }) => {
                assert_eq!(field, "accessibility.blocked")
            }
            other => panic!("Expected InvalidInput, got {:?}", other),
        }
    }

    #[test]
    fn unknown_criterion_in_yaml_is_rejected() {
        let yaml = "rainfall: { heavy: 1.0 }\n";
        assert!(matches!(
            SubcriteriaPointMapper::from_yaml(yaml),
            Err(AhpError::InvalidInput { .. })
        ));
    }
}
