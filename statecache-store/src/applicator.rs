//! Event applicator - applies decoded change notifications to the cache.
//!
//! The ingestion pipeline decides which entity kind a notification is about
//! and decodes its payload; this module turns each resulting [`CacheEvent`]
//! into exactly one cache operation (two for `Ready`, which also seeds the
//! guild list). Events are applied in the order they are handed in.

use crate::cache::StateCacher;
use crate::config::CacheConfig;
use crate::error::CacheResult;
use statecache_model::{Channel, Guild, User};
use statecache_types::{EntityKind, Snowflake};
use tracing::debug;

/// A decoded, typed change notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CacheEvent {
    /// Session established: own profile plus the guilds it belongs to.
    Ready { user: User, guilds: Vec<Guild> },
    GuildCreate(Guild),
    GuildUpdate(Guild),
    GuildDelete(Snowflake),
    ChannelCreate(Channel),
    ChannelUpdate(Channel),
    ChannelDelete(Snowflake),
    UserCreate(User),
    UserUpdate(User),
    UserDelete(Snowflake),
    /// The session owner's profile changed.
    CurrentUserUpdate(User),
}

impl CacheEvent {
    /// The kind of entity the event concerns.
    #[must_use]
    pub fn kind(&self) -> EntityKind {
        match self {
            Self::Ready { .. } | Self::CurrentUserUpdate(_) => EntityKind::CurrentUser,
            Self::GuildCreate(_) | Self::GuildUpdate(_) | Self::GuildDelete(_) => EntityKind::Guild,
            Self::ChannelCreate(_) | Self::ChannelUpdate(_) | Self::ChannelDelete(_) => {
                EntityKind::Channel
            }
            Self::UserCreate(_) | Self::UserUpdate(_) | Self::UserDelete(_) => EntityKind::User,
        }
    }

    /// Id of the entity the event concerns.
    #[must_use]
    pub fn entity_id(&self) -> Snowflake {
        match self {
            Self::Ready { user, .. } | Self::CurrentUserUpdate(user) => user.id,
            Self::GuildCreate(g) | Self::GuildUpdate(g) => g.id,
            Self::ChannelCreate(c) | Self::ChannelUpdate(c) => c.id,
            Self::UserCreate(u) | Self::UserUpdate(u) => u.id,
            Self::GuildDelete(id) | Self::ChannelDelete(id) | Self::UserDelete(id) => *id,
        }
    }
}

/// What applying an event did to the cache.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Applied {
    /// An entry was inserted or merged.
    Stored,
    /// An entry was removed (or was already absent).
    Removed,
    /// The event concerns a kind this cache does not track.
    Skipped,
}

/// Applies [`CacheEvent`]s to a [`StateCacher`].
#[derive(Debug, Clone)]
pub struct EventApplicator {
    track_users: bool,
}

impl EventApplicator {
    /// Creates an applicator honouring the cache configuration.
    pub fn new(config: &CacheConfig) -> Self {
        Self {
            track_users: config.track_users,
        }
    }

    /// Applies a single event.
    ///
    /// An update for an entity that was never created surfaces `NotFound`;
    /// the caller decides whether to fetch and add it.
    pub fn apply(&self, cache: &dyn StateCacher, event: CacheEvent) -> CacheResult<Applied> {
        let kind = event.kind();
        let id = event.entity_id();

        if kind == EntityKind::User && !self.track_users {
            debug!(%kind, %id, "skipping untracked event");
            return Ok(Applied::Skipped);
        }

        let applied = match event {
            CacheEvent::Ready { user, guilds } => {
                cache.update_myself(&user);
                for guild in guilds {
                    cache.add_guild(guild);
                }
                Applied::Stored
            }
            CacheEvent::GuildCreate(guild) => {
                cache.add_guild(guild);
                Applied::Stored
            }
            CacheEvent::GuildUpdate(guild) => {
                cache.update_guild(&guild)?;
                Applied::Stored
            }
            CacheEvent::GuildDelete(id) => {
                cache.delete_guild_by_id(id);
                Applied::Removed
            }
            CacheEvent::ChannelCreate(channel) => {
                cache.add_channel(channel);
                Applied::Stored
            }
            CacheEvent::ChannelUpdate(channel) => {
                cache.update_channel(&channel)?;
                Applied::Stored
            }
            CacheEvent::ChannelDelete(id) => {
                cache.delete_channel_by_id(id);
                Applied::Removed
            }
            CacheEvent::UserCreate(user) => {
                cache.add_user(user);
                Applied::Stored
            }
            CacheEvent::UserUpdate(user) => {
                cache.update_user(&user)?;
                Applied::Stored
            }
            CacheEvent::UserDelete(id) => {
                cache.delete_user_by_id(id);
                Applied::Removed
            }
            CacheEvent::CurrentUserUpdate(user) => {
                cache.update_myself(&user);
                Applied::Stored
            }
        };

        debug!(%kind, %id, ?applied, "applied event");
        Ok(applied)
    }

    /// Applies events in order and returns one outcome per event.
    ///
    /// A failed event does not stop the batch: a `NotFound` for an uncached
    /// update is reported at its index and the events after it still apply.
    pub fn apply_all(
        &self,
        cache: &dyn StateCacher,
        events: impl IntoIterator<Item = CacheEvent>,
    ) -> Vec<CacheResult<Applied>> {
        events
            .into_iter()
            .map(|event| self.apply(cache, event))
            .collect()
    }
}

impl Default for EventApplicator {
    fn default() -> Self {
        Self::new(&CacheConfig::default())
    }
}
