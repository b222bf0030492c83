//! HTTP adapter for alternative endpoints.

mod dto;
mod handlers;
mod routes;

pub use dto::{
    AlternativeCommandResponse, AlternativeResponse, CreateAlternativeRequest,
    UpdateAlternativeRequest,
};
pub use handlers::AlternativeHandlers;
pub use routes::alternative_routes;
