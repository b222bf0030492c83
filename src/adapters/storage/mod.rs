//! Storage Adapters
//!
//! Implementations of the PairwiseMatrixStore port.
//!
//! ## Available Adapters
//!
//! - **FilePairwiseMatrixStore** - Stores the matrix as a JSON file on disk
//! - **InMemoryPairwiseMatrixStore** - Stores the matrix in memory (testing/development)
//!
//! ## Usage
//!
//! ```ignore
//! use adapters::storage::{FilePairwiseMatrixStore, InMemoryPairwiseMatrixStore};
//!
//! // Production: file-based storage
//! let store = FilePairwiseMatrixStore::new("asset/pairwise.json");
//!
//! // Testing: in-memory storage
//! let store = InMemoryPairwiseMatrixStore::with_matrix(PairwiseMatrix::uniform(7));
//! ```

mod file_pairwise_store;
mod in_memory_pairwise_store;

pub use file_pairwise_store::FilePairwiseMatrixStore;
pub use in_memory_pairwise_store::InMemoryPairwiseMatrixStore;
