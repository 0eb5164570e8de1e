//! Error types for the cache.

use statecache_model::Entity;
use statecache_types::{EntityKind, Snowflake};
use thiserror::Error;

/// Result type for cache operations.
pub type CacheResult<T> = Result<T, CacheError>;

/// Errors that can occur in cache operations.
///
/// `NotFound` is an expected outcome ("not cached yet"), not a fault.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CacheError {
    /// No entry for the identifier in that kind's store.
    #[error("{kind} {id} is not cached")]
    NotFound { kind: EntityKind, id: Snowflake },
}

impl CacheError {
    pub(crate) fn not_found<T: Entity>(id: Snowflake) -> Self {
        Self::NotFound { kind: T::KIND, id }
    }

    /// Returns true for a cache miss.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}
