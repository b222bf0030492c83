//! Collection aggregate entity.
//!
//! A collection groups the alternatives that are scored together and tracks
//! which result sets have been computed for it.
//!
//! # Ownership
//!
//! Collections do not hold their alternatives. Alternatives reference the
//! collection by ID and are loaded through their own repository.

use crate::domain::foundation::{CollectionId, DomainError, Timestamp};
use serde::{Deserialize, Serialize};

/// Maximum length for a collection name.
pub const MAX_NAME_LENGTH: usize = 255;

/// The two result sets that can be computed for a collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreKind {
    Score,
    FinalScore,
}

/// Per-kind state of a collection.
///
/// A recompute always moves to (or stays in) `Scored`; nothing moves back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoringState {
    Unscored,
    Scored,
}

/// Partial update of the computed-state flags. `None` leaves a flag as is.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CollectionFlags {
    pub score_calculated: Option<bool>,
    pub final_score_calculated: Option<bool>,
}

impl CollectionFlags {
    /// Marks scores as calculated.
    pub fn scores() -> Self {
        Self {
            score_calculated: Some(true),
            final_score_calculated: None,
        }
    }

    /// Marks final scores as calculated.
    pub fn final_scores() -> Self {
        Self {
            score_calculated: None,
            final_score_calculated: Some(true),
        }
    }

    /// Marks both result sets as calculated.
    pub fn both() -> Self {
        Self {
            score_calculated: Some(true),
            final_score_calculated: Some(true),
        }
    }
}

/// Collection aggregate.
///
/// # Invariants
///
/// - `name` is 1-255 characters after trimming
/// - flags only change through [`Collection::apply_flags`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Collection {
    id: CollectionId,
    name: String,
    score_is_calculated: bool,
    final_score_is_calculated: bool,
    created_at: Timestamp,
    updated_at: Timestamp,
}

impl Collection {
    /// Create a new, unscored collection.
    ///
    /// # Errors
    ///
    /// - `ValidationFailed` if name is empty or too long
    pub fn new(id: CollectionId, name: String) -> Result<Self, DomainError> {
        let name = Self::validate_name(name)?;

        let now = Timestamp::now();
        Ok(Self {
            id,
            name,
            score_is_calculated: false,
            final_score_is_calculated: false,
            created_at: now,
            updated_at: now,
        })
    }

    /// Reconstitute a collection from persistence (no validation).
    pub fn reconstitute(
        id: CollectionId,
        name: String,
        score_is_calculated: bool,
        final_score_is_calculated: bool,
        created_at: Timestamp,
        updated_at: Timestamp,
    ) -> Self {
        Self {
            id,
            name,
            score_is_calculated,
            final_score_is_calculated,
            created_at,
            updated_at,
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    pub fn id(&self) -> &CollectionId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn score_is_calculated(&self) -> bool {
        self.score_is_calculated
    }

    pub fn final_score_is_calculated(&self) -> bool {
        self.final_score_is_calculated
    }

    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }

    pub fn updated_at(&self) -> &Timestamp {
        &self.updated_at
    }

    /// Returns the state of one result set.
    pub fn scoring_state(&self, kind: ScoreKind) -> ScoringState {
        let calculated = match kind {
            ScoreKind::Score => self.score_is_calculated,
            ScoreKind::FinalScore => self.final_score_is_calculated,
        };
        if calculated {
            ScoringState::Scored
        } else {
            ScoringState::Unscored
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Mutations
    // ─────────────────────────────────────────────────────────────────────────

    /// Applies a partial flag update, touching `updated_at`.
    pub fn apply_flags(&mut self, flags: CollectionFlags) {
        if let Some(value) = flags.score_calculated {
            self.score_is_calculated = value;
        }
        if let Some(value) = flags.final_score_calculated {
            self.final_score_is_calculated = value;
        }
        self.updated_at = Timestamp::now();
    }

    fn validate_name(name: String) -> Result<String, DomainError> {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(DomainError::validation("name", "Collection name cannot be empty"));
        }
        if trimmed.chars().count() > MAX_NAME_LENGTH {
            return Err(DomainError::validation(
                "name",
                format!("Collection name cannot exceed {} characters", MAX_NAME_LENGTH),
            ));
        }
        Ok(trimmed.to_string())
    }
}
