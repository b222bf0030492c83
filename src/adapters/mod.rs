//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `http` - axum REST API
//! - `memory` - In-memory repositories (tests, local runs)
//! - `postgres` - PostgreSQL repositories
//! - `storage` - Pairwise matrix stores (JSON file, in-memory)

pub mod http;
pub mod memory;
pub mod postgres;
pub mod storage;

pub use memory::InMemoryAhpStore;
pub use storage::{FilePairwiseMatrixStore, InMemoryPairwiseMatrixStore};
