//! AHP Siting - Site selection with the Analytic Hierarchy Process
//!
//! This crate ranks candidate sites ("alternatives") grouped in collections
//! against seven weighted criteria. Criteria weights come from a pairwise
//! comparison matrix; per-site categorical selections are mapped to points,
//! weighted, and summed into a final score.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
