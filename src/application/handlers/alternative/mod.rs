//! Alternative command and query handlers.

mod create_alternative;
mod delete_alternative;
mod get_alternative;
mod update_alternative;

pub use create_alternative::{CreateAlternativeCommand, CreateAlternativeHandler};
pub use delete_alternative::{DeleteAlternativeCommand, DeleteAlternativeHandler};
pub use get_alternative::{
    GetAlternativeHandler, GetAlternativeQuery, ListAllAlternativesHandler,
    ListAllAlternativesQuery, ListAlternativesHandler, ListAlternativesQuery,
};
pub use update_alternative::{UpdateAlternativeCommand, UpdateAlternativeHandler};
