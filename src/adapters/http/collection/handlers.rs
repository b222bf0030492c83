//! HTTP handlers for collection endpoints.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::alternative::AlternativeResponse;
use crate::adapters::http::error::{handle_ahp_error, invalid_id, ApiJson};
use crate::application::handlers::alternative::{ListAlternativesHandler, ListAlternativesQuery};
use crate::application::handlers::collection::{
    CreateCollectionCommand, CreateCollectionHandler, GetCollectionHandler, GetCollectionQuery,
};
use crate::domain::foundation::CollectionId;

use super::dto::{CollectionResponse, CreateCollectionRequest};

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct CollectionHandlers {
    create_handler: Arc<CreateCollectionHandler>,
    get_handler: Arc<GetCollectionHandler>,
    list_alternatives_handler: Arc<ListAlternativesHandler>,
}

impl CollectionHandlers {
    pub fn new(
        create_handler: Arc<CreateCollectionHandler>,
        get_handler: Arc<GetCollectionHandler>,
        list_alternatives_handler: Arc<ListAlternativesHandler>,
    ) -> Self {
        Self {
            create_handler,
            get_handler,
            list_alternatives_handler,
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// HTTP handlers
// ════════════════════════════════════════════════════════════════════════════

/// POST /api/collections - Create a collection
pub async fn create_collection(
    State(handlers): State<CollectionHandlers>,
    ApiJson(req): ApiJson<CreateCollectionRequest>,
) -> Response {
    match handlers
        .create_handler
        .handle(CreateCollectionCommand { name: req.name })
        .await
    {
        Ok(collection) => {
            let response: CollectionResponse = collection.into();
            (StatusCode::CREATED, Json(response)).into_response()
        }
        Err(e) => handle_ahp_error(e),
    }
}

/// GET /api/collections/:id - Get collection with its scoring flags
pub async fn get_collection(
    State(handlers): State<CollectionHandlers>,
    Path(collection_id): Path<String>,
) -> Response {
    let collection_id = match collection_id.parse::<CollectionId>() {
        Ok(id) => id,
        Err(_) => return invalid_id("collection"),
    };

    match handlers
        .get_handler
        .handle(GetCollectionQuery { collection_id })
        .await
    {
        Ok(collection) => {
            let response: CollectionResponse = collection.into();
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => handle_ahp_error(e),
    }
}

/// GET /api/collections/:id/alternatives - List the collection's alternatives
pub async fn list_alternatives(
    State(handlers): State<CollectionHandlers>,
    Path(collection_id): Path<String>,
) -> Response {
    let collection_id = match collection_id.parse::<CollectionId>() {
        Ok(id) => id,
        Err(_) => return invalid_id("collection"),
    };

    match handlers
        .list_alternatives_handler
        .handle(ListAlternativesQuery { collection_id })
        .await
    {
        Ok(alternatives) => {
            let response: Vec<AlternativeResponse> =
                alternatives.into_iter().map(Into::into).collect();
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => handle_ahp_error(e),
    }
}
