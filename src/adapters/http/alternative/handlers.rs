//! HTTP handlers for alternative endpoints.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::error::{handle_ahp_error, invalid_id, ApiJson};
use crate::application::handlers::alternative::{
    CreateAlternativeCommand, CreateAlternativeHandler, DeleteAlternativeCommand,
    DeleteAlternativeHandler, GetAlternativeHandler, GetAlternativeQuery,
    ListAllAlternativesHandler, ListAllAlternativesQuery, UpdateAlternativeCommand,
    UpdateAlternativeHandler,
};
use crate::domain::foundation::{AlternativeId, CollectionId};

use super::dto::{
    AlternativeCommandResponse, AlternativeResponse, CreateAlternativeRequest,
    UpdateAlternativeRequest,
};

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct AlternativeHandlers {
    create_handler: Arc<CreateAlternativeHandler>,
    update_handler: Arc<UpdateAlternativeHandler>,
    delete_handler: Arc<DeleteAlternativeHandler>,
    get_handler: Arc<GetAlternativeHandler>,
    list_all_handler: Arc<ListAllAlternativesHandler>,
}

impl AlternativeHandlers {
    pub fn new(
        create_handler: Arc<CreateAlternativeHandler>,
        update_handler: Arc<UpdateAlternativeHandler>,
        delete_handler: Arc<DeleteAlternativeHandler>,
        get_handler: Arc<GetAlternativeHandler>,
        list_all_handler: Arc<ListAllAlternativesHandler>,
    ) -> Self {
        Self {
            create_handler,
            update_handler,
            delete_handler,
            get_handler,
            list_all_handler,
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// HTTP handlers
// ════════════════════════════════════════════════════════════════════════════

/// POST /api/alternatives - Create an alternative
pub async fn create_alternative(
    State(handlers): State<AlternativeHandlers>,
    ApiJson(req): ApiJson<CreateAlternativeRequest>,
) -> Response {
    let collection_id = match req.collection_id.parse::<CollectionId>() {
        Ok(id) => id,
        Err(_) => return invalid_id("collection"),
    };

    let cmd = CreateAlternativeCommand {
        collection_id,
        name: req.name,
        selection: req.selection,
    };

    match handlers.create_handler.handle(cmd).await {
        Ok(alternative) => {
            let response: AlternativeResponse = alternative.into();
            (StatusCode::CREATED, Json(response)).into_response()
        }
        Err(e) => handle_ahp_error(e),
    }
}

/// GET /api/alternatives - List every alternative
pub async fn list_all_alternatives(State(handlers): State<AlternativeHandlers>) -> Response {
    match handlers.list_all_handler.handle(ListAllAlternativesQuery).await {
        Ok(alternatives) => {
            let response: Vec<AlternativeResponse> =
                alternatives.into_iter().map(Into::into).collect();
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => handle_ahp_error(e),
    }
}

/// GET /api/alternatives/:id - Get alternative details
pub async fn get_alternative(
    State(handlers): State<AlternativeHandlers>,
    Path(alternative_id): Path<String>,
) -> Response {
    let alternative_id = match alternative_id.parse::<AlternativeId>() {
        Ok(id) => id,
        Err(_) => return invalid_id("alternative"),
    };

    match handlers
        .get_handler
        .handle(GetAlternativeQuery { alternative_id })
        .await
    {
        Ok(alternative) => {
            let response: AlternativeResponse = alternative.into();
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => handle_ahp_error(e),
    }
}

/// PUT /api/alternatives/:id - Update name and/or selection
pub async fn update_alternative(
    State(handlers): State<AlternativeHandlers>,
    Path(alternative_id): Path<String>,
    ApiJson(req): ApiJson<UpdateAlternativeRequest>,
) -> Response {
    let alternative_id = match alternative_id.parse::<AlternativeId>() {
        Ok(id) => id,
        Err(_) => return invalid_id("alternative"),
    };

    let cmd = UpdateAlternativeCommand {
        alternative_id,
        name: req.name,
        selection: req.selection,
    };

    match handlers.update_handler.handle(cmd).await {
        Ok(alternative) => {
            let response: AlternativeResponse = alternative.into();
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => handle_ahp_error(e),
    }
}

/// DELETE /api/alternatives/:id - Delete an alternative and its scores
pub async fn delete_alternative(
    State(handlers): State<AlternativeHandlers>,
    Path(alternative_id): Path<String>,
) -> Response {
    let alternative_id = match alternative_id.parse::<AlternativeId>() {
        Ok(id) => id,
        Err(_) => return invalid_id("alternative"),
    };

    match handlers
        .delete_handler
        .handle(DeleteAlternativeCommand { alternative_id })
        .await
    {
        Ok(()) => {
            let response = AlternativeCommandResponse {
                alternative_id: alternative_id.to_string(),
                message: "Alternative deleted successfully".to_string(),
            };
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => handle_ahp_error(e),
    }
}
