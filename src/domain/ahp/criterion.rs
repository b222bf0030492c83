//! Criteria vocabulary and per-criterion value records.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::ValidationError;

/// Number of criteria every alternative is evaluated against.
pub const CRITERIA_COUNT: usize = 7;

/// One axis of evaluation for a candidate site.
///
/// The declaration order is the fixed criterion order used by the pairwise
/// matrix, the weight vector, and every point/score row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Criterion {
    WasteVolume,
    DisposalSiteDistance,
    SettlementDistance,
    RiverDistance,
    CommunityParticipation,
    HouseholdCoverage,
    Accessibility,
}

impl Criterion {
    /// All criteria in matrix order.
    pub const ALL: [Criterion; CRITERIA_COUNT] = [
        Criterion::WasteVolume,
        Criterion::DisposalSiteDistance,
        Criterion::SettlementDistance,
        Criterion::RiverDistance,
        Criterion::CommunityParticipation,
        Criterion::HouseholdCoverage,
        Criterion::Accessibility,
    ];

    /// Position of this criterion in the matrix order.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Machine key, also the JSON/YAML field name.
    pub fn key(&self) -> &'static str {
        match self {
            Criterion::WasteVolume => "waste_volume",
            Criterion::DisposalSiteDistance => "disposal_site_distance",
            Criterion::SettlementDistance => "settlement_distance",
            Criterion::RiverDistance => "river_distance",
            Criterion::CommunityParticipation => "community_participation",
            Criterion::HouseholdCoverage => "household_coverage",
            Criterion::Accessibility => "accessibility",
        }
    }

    /// Human readable label.
    pub fn label(&self) -> &'static str {
        match self {
            Criterion::WasteVolume => "Waste Volume",
            Criterion::DisposalSiteDistance => "Distance to Disposal Site",
            Criterion::SettlementDistance => "Distance to Settlement",
            Criterion::RiverDistance => "Distance to River",
            Criterion::CommunityParticipation => "Community Participation",
            Criterion::HouseholdCoverage => "Household Coverage",
            Criterion::Accessibility => "Accessibility",
        }
    }

    /// Criterion keys in matrix order.
    pub fn keys() -> [&'static str; CRITERIA_COUNT] {
        Criterion::ALL.map(|c| c.key())
    }
}

impl fmt::Display for Criterion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

impl FromStr for Criterion {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Criterion::ALL
            .iter()
            .copied()
            .find(|c| c.key() == s)
            .ok_or_else(|| {
                ValidationError::invalid_format("criterion", format!("unknown criterion '{}'", s))
            })
    }
}

/// One real value per criterion, named by criterion key.
///
/// Used for point rows and for the weighted values carried by a score.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct CriterionValues {
    pub waste_volume: f64,
    pub disposal_site_distance: f64,
    pub settlement_distance: f64,
    pub river_distance: f64,
    pub community_participation: f64,
    pub household_coverage: f64,
    pub accessibility: f64,
}

impl CriterionValues {
    /// Builds from an array in matrix order.
    pub fn from_array(values: [f64; CRITERIA_COUNT]) -> Self {
        let [
            waste_volume,
            disposal_site_distance,
            settlement_distance,
            river_distance,
            community_participation,
            household_coverage,
            accessibility,
        ] = values;
        Self {
            waste_volume,
            disposal_site_distance,
            settlement_distance,
            river_distance,
            community_participation,
            household_coverage,
            accessibility,
        }
    }

    /// Values in matrix order.
    pub fn to_array(&self) -> [f64; CRITERIA_COUNT] {
        [
            self.waste_volume,
            self.disposal_site_distance,
            self.settlement_distance,
            self.river_distance,
            self.community_participation,
            self.household_coverage,
            self.accessibility,
        ]
    }

    /// Value for a single criterion.
    pub fn get(&self, criterion: Criterion) -> f64 {
        self.to_array()[criterion.index()]
    }

    /// Sum over all criteria.
    pub fn sum(&self) -> f64 {
        self.to_array().iter().sum()
    }

    /// Applies `f` to every value, keeping criterion order.
    pub fn map(&self, f: impl Fn(Criterion, f64) -> f64) -> Self {
        let values = self.to_array();
        Self::from_array(Criterion::ALL.map(|c| f(c, values[c.index()])))
    }
}
