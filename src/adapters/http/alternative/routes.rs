//! HTTP routes for alternative endpoints.

use axum::{
    routing::get,
    Router,
};

use super::handlers::{
    create_alternative, delete_alternative, get_alternative, list_all_alternatives,
    update_alternative, AlternativeHandlers,
};

/// Creates the alternative router, nested under `/api/alternatives`.
pub fn alternative_routes(handlers: AlternativeHandlers) -> Router {
    Router::new()
        .route("/", get(list_all_alternatives).post(create_alternative))
        .route(
            "/:id",
            get(get_alternative)
                .put(update_alternative)
                .delete(delete_alternative),
        )
        .with_state(handlers)
}
