//! HTTP handlers for AHP endpoints.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::error::{handle_ahp_error, invalid_id, ApiJson};
use crate::application::handlers::ahp::{
    CollectionRecomputeOrchestrator, GetCriteriaWeightsHandler, GetCriteriaWeightsQuery,
    GetFinalScoresHandler, GetFinalScoresQuery, GetScoresHandler, GetScoresQuery,
    RecalculateFinalScoresCommand, RecalculatePointMatrixHandler, RecalculatePointMatrixQuery,
    RecalculateScoresCommand, UpdatePairwiseMatrixCommand, UpdatePairwiseMatrixHandler,
};
use crate::domain::foundation::CollectionId;

use super::dto::{
    CriteriaResponse, FinalScoreResponse, PairwiseMatrixResponse, PointMatrixResponse,
    ScoreResponse, UpdatePairwiseMatrixRequest,
};

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct AhpHandlers {
    criteria_handler: Arc<GetCriteriaWeightsHandler>,
    update_matrix_handler: Arc<UpdatePairwiseMatrixHandler>,
    scores_handler: Arc<GetScoresHandler>,
    final_scores_handler: Arc<GetFinalScoresHandler>,
    point_matrix_handler: Arc<RecalculatePointMatrixHandler>,
    orchestrator: Arc<CollectionRecomputeOrchestrator>,
}

impl AhpHandlers {
    pub fn new(
        criteria_handler: Arc<GetCriteriaWeightsHandler>,
        update_matrix_handler: Arc<UpdatePairwiseMatrixHandler>,
        scores_handler: Arc<GetScoresHandler>,
        final_scores_handler: Arc<GetFinalScoresHandler>,
        point_matrix_handler: Arc<RecalculatePointMatrixHandler>,
        orchestrator: Arc<CollectionRecomputeOrchestrator>,
    ) -> Self {
        Self {
            criteria_handler,
            update_matrix_handler,
            scores_handler,
            final_scores_handler,
            point_matrix_handler,
            orchestrator,
        }
    }
}

fn parse_collection_id(raw: &str) -> Result<CollectionId, Response> {
    raw.parse::<CollectionId>()
        .map_err(|_| invalid_id("collection"))
}

// ════════════════════════════════════════════════════════════════════════════
// HTTP handlers
// ════════════════════════════════════════════════════════════════════════════

/// GET /api/ahp/criteria - Criteria weights from the stored pairwise matrix
pub async fn get_criteria(State(handlers): State<AhpHandlers>) -> Response {
    match handlers.criteria_handler.handle(GetCriteriaWeightsQuery).await {
        Ok(analysis) => {
            let response: CriteriaResponse = analysis.into();
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => handle_ahp_error(e),
    }
}

/// PATCH /api/ahp/criteria - Replace the pairwise matrix
pub async fn update_criteria(
    State(handlers): State<AhpHandlers>,
    ApiJson(req): ApiJson<UpdatePairwiseMatrixRequest>,
) -> Response {
    let cmd = UpdatePairwiseMatrixCommand {
        pairwise: req.pairwise,
    };

    match handlers.update_matrix_handler.handle(cmd).await {
        Ok(matrix) => {
            let response: PairwiseMatrixResponse = matrix.into();
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => handle_ahp_error(e),
    }
}

/// GET /api/ahp/scores/:collection_id - Stored scores
pub async fn get_scores(
    State(handlers): State<AhpHandlers>,
    Path(collection_id): Path<String>,
) -> Response {
    let collection_id = match parse_collection_id(&collection_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    match handlers
        .scores_handler
        .handle(GetScoresQuery { collection_id })
        .await
    {
        Ok(scores) => {
            let response: Vec<ScoreResponse> = scores.into_iter().map(Into::into).collect();
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => handle_ahp_error(e),
    }
}

/// GET /api/ahp/final_scores/:collection_id - Stored final scores
pub async fn get_final_scores(
    State(handlers): State<AhpHandlers>,
    Path(collection_id): Path<String>,
) -> Response {
    let collection_id = match parse_collection_id(&collection_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    match handlers
        .final_scores_handler
        .handle(GetFinalScoresQuery { collection_id })
        .await
    {
        Ok(scores) => {
            let response: Vec<FinalScoreResponse> = scores.into_iter().map(Into::into).collect();
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => handle_ahp_error(e),
    }
}

/// GET /api/ahp/point/calculate/:collection_id - Point matrix, not persisted
pub async fn calculate_point_matrix(
    State(handlers): State<AhpHandlers>,
    Path(collection_id): Path<String>,
) -> Response {
    let collection_id = match parse_collection_id(&collection_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    match handlers
        .point_matrix_handler
        .handle(RecalculatePointMatrixQuery { collection_id })
        .await
    {
        Ok(matrix) => {
            let response = PointMatrixResponse::new(collection_id.to_string(), matrix);
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => handle_ahp_error(e),
    }
}

/// GET /api/ahp/scores/calculate/:collection_id - Recompute and store scores
pub async fn calculate_scores(
    State(handlers): State<AhpHandlers>,
    Path(collection_id): Path<String>,
) -> Response {
    let collection_id = match parse_collection_id(&collection_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    match handlers
        .orchestrator
        .recalculate_scores(RecalculateScoresCommand { collection_id })
        .await
    {
        Ok(scores) => {
            let response: Vec<ScoreResponse> = scores.into_iter().map(Into::into).collect();
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => handle_ahp_error(e),
    }
}

/// GET /api/ahp/final_scores/calculate/:collection_id - Recompute and store final scores
pub async fn calculate_final_scores(
    State(handlers): State<AhpHandlers>,
    Path(collection_id): Path<String>,
) -> Response {
    let collection_id = match parse_collection_id(&collection_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    match handlers
        .orchestrator
        .recalculate_final_scores(RecalculateFinalScoresCommand { collection_id })
        .await
    {
        Ok(scores) => {
            let response: Vec<FinalScoreResponse> = scores.into_iter().map(Into::into).collect();
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => handle_ahp_error(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn malformed_collection_id_is_rejected() {
        match parse_collection_id("not-a-uuid") {
            Err(response) => assert_eq!(response.status(), StatusCode::BAD_REQUEST),
            Ok(id) => panic!("Expected rejection, parsed {}", id),
        }
    }

    #[test]
    fn well_formed_collection_id_parses() {
        let id = CollectionId::new();
        assert!(matches!(parse_collection_id(&id.to_string()), Ok(parsed) if parsed == id));
    }
}
