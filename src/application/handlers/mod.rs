//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod ahp;
pub mod alternative;
pub mod collection;

#[cfg(test)]
pub(crate) mod test_support;

pub use ahp::*;
pub use alternative::*;
pub use collection::*;
