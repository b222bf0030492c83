//! Categorical subcriteria choices made for one alternative.

use serde::{Deserialize, Serialize};

use super::criterion::Criterion;
use crate::domain::foundation::ValidationError;

/// One subcriteria code per criterion, e.g. `waste_volume: "high"`.
///
/// Codes are matched exactly against the point tables; no normalization of
/// case or whitespace happens here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubcriteriaSelection {
    pub waste_volume: String,
    pub disposal_site_distance: String,
    pub settlement_distance: String,
    pub river_distance: String,
    pub community_participation: String,
    pub household_coverage: String,
    pub accessibility: String,
}

impl SubcriteriaSelection {
    /// Code chosen for a criterion.
    pub fn code(&self, criterion: Criterion) -> &str {
        match criterion {
            Criterion::WasteVolume => &self.waste_volume,
            Criterion::DisposalSiteDistance => &self.disposal_site_distance,
            Criterion::SettlementDistance => &self.settlement_distance,
            Criterion::RiverDistance => &self.river_distance,
            Criterion::CommunityParticipation => &self.community_participation,
            Criterion::HouseholdCoverage => &self.household_coverage,
            Criterion::Accessibility => &self.accessibility,
        }
    }

    /// Rejects blank codes. Whether a code is known is decided by the mapper.
    pub fn ensure_complete(&self) -> Result<(), ValidationError> {
        for criterion in Criterion::ALL {
            if self.code(criterion).trim().is_empty() {
                return Err(ValidationError::empty_field(criterion.key()));
            }
        }
        Ok(())
    }
}
