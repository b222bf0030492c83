//! Collection command and query handlers.

mod create_collection;
mod get_collection;

pub use create_collection::{CreateCollectionCommand, CreateCollectionHandler};
pub use get_collection::{GetCollectionHandler, GetCollectionQuery};
