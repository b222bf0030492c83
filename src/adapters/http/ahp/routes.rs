//! HTTP routes for AHP endpoints.

use axum::{routing::get, Router};

use super::handlers::{
    calculate_final_scores, calculate_point_matrix, calculate_scores, get_criteria,
    get_final_scores, get_scores, update_criteria, AhpHandlers,
};

/// Creates the AHP router, nested under `/api/ahp`.
pub fn ahp_routes(handlers: AhpHandlers) -> Router {
    Router::new()
        .route("/criteria", get(get_criteria).patch(update_criteria))
        .route("/scores/:collection_id", get(get_scores))
        .route("/final_scores/:collection_id", get(get_final_scores))
        .route("/point/calculate/:collection_id", get(calculate_point_matrix))
        .route("/scores/calculate/:collection_id", get(calculate_scores))
        .route(
            "/final_scores/calculate/:collection_id",
            get(calculate_final_scores),
        )
        .with_state(handlers)
}
