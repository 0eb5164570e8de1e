//! Concurrent in-memory mirror of a remote real-time service's state.
//!
//! The cache keeps guilds, channels, users and the session owner's own
//! profile current so consumers can read them without a network round trip.
//! It never originates writes upstream; it reflects what the ingestion
//! pipeline tells it.
//!
//! # Components
//!
//! - **[`EntityStore`]**: one per kind, a map behind a single reader/writer
//!   lock. Reads share the lock, mutations take it exclusively.
//! - **[`EntityRef`]**: the handle every operation returns. Merges publish a
//!   new snapshot into the handle, so earlier holders see the update.
//! - **[`CurrentUserSlot`]**: the one-of-a-kind own-profile entry.
//! - **[`StateCache`]** / **[`StateCacher`]**: the facade combining them.
//! - **[`EventApplicator`]**: maps decoded [`CacheEvent`]s onto the facade.
//!
//! # Example
//!
//! ```
//! use statecache_model::Guild;
//! use statecache_store::{StateCache, StateCacher};
//! use statecache_types::Snowflake;
//!
//! let cache = StateCache::default();
//! let id = Snowflake::new(1);
//!
//! let handle = cache.add_guild(Guild {
//!     name: Some("Alpha".to_string()),
//!     ..Guild::new(id)
//! });
//! cache
//!     .update_guild(&Guild {
//!         name: Some("Beta".to_string()),
//!         ..Guild::new(id)
//!     })
//!     .unwrap();
//!
//! assert_eq!(handle.load().name.as_deref(), Some("Beta"));
//! ```

pub mod applicator;
mod cache;
mod config;
mod current_user;
mod error;
mod handle;
mod store;

pub use applicator::{Applied, CacheEvent, EventApplicator};
pub use cache::{StateCache, StateCacher};
pub use config::CacheConfig;
pub use current_user::CurrentUserSlot;
pub use error::{CacheError, CacheResult};
pub use handle::EntityRef;
pub use store::EntityStore;
