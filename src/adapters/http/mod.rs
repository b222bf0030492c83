//! HTTP adapters - REST API implementations.
//!
//! Each module exposes one area of the API; [`api_router`] nests them under
//! their prefixes.

pub mod ahp;
pub mod alternative;
pub mod collection;
pub mod error;

use std::sync::Arc;

use axum::{
    http::{HeaderValue, Method},
    routing::get,
    Json, Router,
};
use serde_json::json;
use tower_http::cors::{Any, CorsLayer};

use crate::application::handlers::{
    CollectionRecomputeOrchestrator, CreateAlternativeHandler, CreateCollectionHandler,
    DeleteAlternativeHandler, GetAlternativeHandler, GetCollectionHandler,
    GetCriteriaWeightsHandler, GetFinalScoresHandler, GetScoresHandler,
    ListAllAlternativesHandler, ListAlternativesHandler, RecalculatePointMatrixHandler,
    UpdateAlternativeHandler, UpdatePairwiseMatrixHandler,
};
use crate::domain::ahp::SubcriteriaPointMapper;
use crate::ports::{AhpRepository, AlternativeRepository, CollectionRepository, PairwiseMatrixStore};

pub use ahp::{ahp_routes, AhpHandlers};
pub use alternative::{alternative_routes, AlternativeHandlers};
pub use collection::{collection_routes, CollectionHandlers};
pub use error::{handle_ahp_error, ApiJson, ErrorResponse};

/// Full API: `/api/ahp`, `/api/alternatives`, `/api/collections`, `/health`.
pub fn api_router(
    ahp: AhpHandlers,
    alternatives: AlternativeHandlers,
    collections: CollectionHandlers,
) -> Router {
    Router::new()
        .route("/health", get(health))
        .nest("/api/ahp", ahp_routes(ahp))
        .nest("/api/alternatives", alternative_routes(alternatives))
        .nest("/api/collections", collection_routes(collections))
}

/// Port implementations the API runs on.
#[derive(Clone)]
pub struct ApiPorts {
    pub collections: Arc<dyn CollectionRepository>,
    pub alternatives: Arc<dyn AlternativeRepository>,
    pub repository: Arc<dyn AhpRepository>,
    pub matrix_store: Arc<dyn PairwiseMatrixStore>,
    pub mapper: Arc<SubcriteriaPointMapper>,
}

/// Builds every application handler over `ports` and mounts [`api_router`].
pub fn router_from_ports(ports: ApiPorts) -> Router {
    let ApiPorts {
        collections,
        alternatives,
        repository,
        matrix_store,
        mapper,
    } = ports;

    let ahp = AhpHandlers::new(
        Arc::new(GetCriteriaWeightsHandler::new(matrix_store.clone())),
        Arc::new(UpdatePairwiseMatrixHandler::new(matrix_store.clone())),
        Arc::new(GetScoresHandler::new(collections.clone(), repository.clone())),
        Arc::new(GetFinalScoresHandler::new(collections.clone(), repository.clone())),
        Arc::new(RecalculatePointMatrixHandler::new(repository.clone(), mapper.clone())),
        Arc::new(CollectionRecomputeOrchestrator::new(
            repository,
            matrix_store,
            mapper.clone(),
        )),
    );

    let alternative_handlers = AlternativeHandlers::new(
        Arc::new(CreateAlternativeHandler::new(
            collections.clone(),
            alternatives.clone(),
            mapper.clone(),
        )),
        Arc::new(UpdateAlternativeHandler::new(alternatives.clone(), mapper)),
        Arc::new(DeleteAlternativeHandler::new(alternatives.clone())),
        Arc::new(GetAlternativeHandler::new(alternatives.clone())),
        Arc::new(ListAllAlternativesHandler::new(alternatives.clone())),
    );

    let collection_handlers = CollectionHandlers::new(
        Arc::new(CreateCollectionHandler::new(collections.clone())),
        Arc::new(GetCollectionHandler::new(collections.clone())),
        Arc::new(ListAlternativesHandler::new(collections, alternatives)),
    );

    api_router(ahp, alternative_handlers, collection_handlers)
}

async fn health() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

/// CORS for the configured origins; any origin when none are configured.
pub fn cors_layer(origins: &[String]) -> CorsLayer {
    let layer = CorsLayer::new()
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
        ])
        .allow_headers(Any);

    if origins.is_empty() {
        return layer.allow_origin(Any);
    }

    let allowed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    layer.allow_origin(allowed)
}
