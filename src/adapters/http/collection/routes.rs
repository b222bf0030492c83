//! HTTP routes for collection endpoints.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{create_collection, get_collection, list_alternatives, CollectionHandlers};

/// Creates the collection router, nested under `/api/collections`.
pub fn collection_routes(handlers: CollectionHandlers) -> Router {
    Router::new()
        .route("/", post(create_collection))
        .route("/:id", get(get_collection))
        .route("/:id/alternatives", get(list_alternatives))
        .with_state(handlers)
}
