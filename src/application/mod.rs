//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! Following CQRS, it separates command handlers (write) from query handlers (read).

pub mod handlers;

pub use handlers::{
    // AHP handlers
    CollectionRecomputeOrchestrator, GetCriteriaWeightsHandler, GetCriteriaWeightsQuery,
    GetFinalScoresHandler, GetFinalScoresQuery, GetScoresHandler, GetScoresQuery,
    RecalculateFinalScoresCommand, RecalculatePointMatrixHandler, RecalculatePointMatrixQuery,
    RecalculateScoresCommand, UpdatePairwiseMatrixCommand, UpdatePairwiseMatrixHandler,
    // Alternative handlers
    CreateAlternativeCommand, CreateAlternativeHandler, DeleteAlternativeCommand,
    DeleteAlternativeHandler, GetAlternativeHandler, GetAlternativeQuery,
    ListAlternativesHandler, ListAlternativesQuery, UpdateAlternativeCommand,
    UpdateAlternativeHandler,
    // Collection handlers
    CreateCollectionCommand, CreateCollectionHandler, GetCollectionHandler, GetCollectionQuery,
};
