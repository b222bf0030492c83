//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! ## Persistence Ports
//!
//! - `PairwiseMatrixStore` - The process-wide pairwise comparison matrix
//! - `AhpRepository` - Computed scores and the collection-scoped transaction
//! - `AlternativeRepository` - Candidate sites
//! - `CollectionRepository` - Collections and their computed-state flags

mod ahp_repository;
mod alternative_repository;
mod collection_repository;
mod pairwise_matrix_store;

pub use ahp_repository::{AhpRepository, CollectionTransaction};
pub use alternative_repository::AlternativeRepository;
pub use collection_repository::CollectionRepository;
pub use pairwise_matrix_store::{PairwiseMatrixStore, PairwiseStoreError};
