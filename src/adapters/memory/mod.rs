//! In-memory persistence adapters.
//!
//! A single [`InMemoryAhpStore`] implements every repository port so the
//! HTTP surface and the recompute pipeline can run without a database.
//! Not suitable for production multi-server deployments.

mod ahp_store;

pub use ahp_store::{FailPoint, InMemoryAhpStore};
