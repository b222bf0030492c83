//! PostgreSQL adapters - Database implementations for repository ports.
//!
//! This module provides adapters for PostgreSQL-backed persistence:
//! - `PostgresAhpRepository` - Score reads and collection-scoped transactions
//! - `PostgresAlternativeRepository` - Candidate site persistence
//! - `PostgresCollectionRepository` - Collection persistence

mod ahp_repository;
mod alternative_repository;
mod collection_repository;
mod rows;

pub use ahp_repository::{PostgresAhpRepository, PostgresCollectionTransaction};
pub use alternative_repository::PostgresAlternativeRepository;
pub use collection_repository::PostgresCollectionRepository;
