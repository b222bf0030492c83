//! Collection module - candidate sites grouped for scoring.
//!
//! A collection owns the computed-state flags; alternatives carry the
//! categorical selections the AHP pipeline turns into points.

mod aggregate;
mod alternative;

pub use aggregate::{Collection, CollectionFlags, ScoreKind, ScoringState};
pub use alternative::Alternative;
