//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (IDs, timestamps, errors)
//! - `ahp` - Analytic Hierarchy Process weights, points, and scores
//! - `collection` - Collections of candidate sites and their alternatives

pub mod ahp;
pub mod collection;
pub mod foundation;
