//! HTTP adapter for collection endpoints.

mod dto;
mod handlers;
mod routes;

pub use dto::{CollectionResponse, CreateCollectionRequest};
pub use handlers::CollectionHandlers;
pub use routes::collection_routes;
