//! Core type definitions for statecache.
//!
//! This crate defines the small, dependency-light types every other crate
//! in the workspace speaks:
//! - [`Snowflake`] identifiers (globally unique, time-ordered, 64-bit)
//! - [`EntityKind`] tags naming which mirrored collection an entity lives in
//!
//! Entity structs and their merge rules live in `statecache-model`.

mod ids;
mod kind;

pub use ids::{Snowflake, SERVICE_EPOCH_MS};
pub use kind::EntityKind;

/// Result type alias using the crate's error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in type operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("invalid snowflake: {0}")]
    InvalidSnowflake(String),
}
