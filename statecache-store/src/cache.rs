//! The cache facade.
//!
//! [`StateCache`] bundles one [`EntityStore`] per kind plus the
//! [`CurrentUserSlot`]. The ingestion side calls add/update/delete as
//! notifications arrive; the request side calls lookups and, on a miss,
//! fetches remotely and adds the result.

use crate::config::CacheConfig;
use crate::current_user::CurrentUserSlot;
use crate::error::CacheResult;
use crate::handle::EntityRef;
use crate::store::EntityStore;
use statecache_model::{Channel, Guild, User};
use statecache_types::Snowflake;

/// Operation surface of the state cache.
///
/// Object safe, so a session can hold an `Arc<dyn StateCacher>`.
pub trait StateCacher: Send + Sync {
    fn add_guild(&self, guild: Guild) -> EntityRef<Guild>;
    fn update_guild(&self, guild: &Guild) -> CacheResult<EntityRef<Guild>>;
    fn delete_guild(&self, guild: &Guild);
    fn delete_guild_by_id(&self, id: Snowflake);
    fn guild(&self, id: Snowflake) -> CacheResult<EntityRef<Guild>>;

    fn add_channel(&self, channel: Channel) -> EntityRef<Channel>;
    fn update_channel(&self, channel: &Channel) -> CacheResult<EntityRef<Channel>>;
    fn delete_channel(&self, channel: &Channel);
    fn delete_channel_by_id(&self, id: Snowflake);
    fn channel(&self, id: Snowflake) -> CacheResult<EntityRef<Channel>>;

    fn add_user(&self, user: User) -> EntityRef<User>;
    fn update_user(&self, user: &User) -> CacheResult<EntityRef<User>>;
    fn delete_user(&self, user: &User);
    fn delete_user_by_id(&self, id: Snowflake);
    fn user(&self, id: Snowflake) -> CacheResult<EntityRef<User>>;

    /// Merges into the session owner's profile.
    fn update_myself(&self, user: &User) -> EntityRef<User>;
    /// The session owner's profile; always present.
    fn myself(&self) -> EntityRef<User>;
}

/// In-memory mirror of one session's remote state.
#[derive(Debug)]
pub struct StateCache {
    config: CacheConfig,
    guilds: EntityStore<Guild>,
    channels: EntityStore<Channel>,
    users: EntityStore<User>,
    current_user: CurrentUserSlot,
}

impl StateCache {
    /// Creates an empty cache.
    pub fn new(config: CacheConfig) -> Self {
        Self {
            guilds: EntityStore::with_capacity(config.guild_capacity),
            channels: EntityStore::with_capacity(config.channel_capacity),
            users: EntityStore::with_capacity(config.user_capacity),
            current_user: CurrentUserSlot::new(),
            config,
        }
    }

    pub fn config(&self) -> &CacheConfig {
        &self.config
    }

    pub fn guilds(&self) -> &EntityStore<Guild> {
        &self.guilds
    }

    pub fn channels(&self) -> &EntityStore<Channel> {
        &self.channels
    }

    pub fn users(&self) -> &EntityStore<User> {
        &self.users
    }

    pub fn current_user(&self) -> &CurrentUserSlot {
        &self.current_user
    }
}

impl Default for StateCache {
    fn default() -> Self {
        Self::new(CacheConfig::default())
    }
}

impl StateCacher for StateCache {
    fn add_guild(&self, guild: Guild) -> EntityRef<Guild> {
        self.guilds.add_or_merge(guild)
    }

    fn update_guild(&self, guild: &Guild) -> CacheResult<EntityRef<Guild>> {
        self.guilds.update(guild)
    }

    fn delete_guild(&self, guild: &Guild) {
        self.guilds.delete_entity(guild);
    }

    fn delete_guild_by_id(&self, id: Snowflake) {
        self.guilds.delete(id);
    }

    fn guild(&self, id: Snowflake) -> CacheResult<EntityRef<Guild>> {
        self.guilds.get(id)
    }

    fn add_channel(&self, channel: Channel) -> EntityRef<Channel> {
        self.channels.add_or_merge(channel)
    }

    fn update_channel(&self, channel: &Channel) -> CacheResult<EntityRef<Channel>> {
        self.channels.update(channel)
    }

    fn delete_channel(&self, channel: &Channel) {
        self.channels.delete_entity(channel);
    }

    fn delete_channel_by_id(&self, id: Snowflake) {
        self.channels.delete(id);
    }

    fn channel(&self, id: Snowflake) -> CacheResult<EntityRef<Channel>> {
        self.channels.get(id)
    }

    fn add_user(&self, user: User) -> EntityRef<User> {
        self.users.add_or_merge(user)
    }

    fn update_user(&self, user: &User) -> CacheResult<EntityRef<User>> {
        self.users.update(user)
    }

    fn delete_user(&self, user: &User) {
        self.users.delete_entity(user);
    }

    fn delete_user_by_id(&self, id: Snowflake) {
        self.users.delete(id);
    }

    fn user(&self, id: Snowflake) -> CacheResult<EntityRef<User>> {
        self.users.get(id)
    }

    fn update_myself(&self, user: &User) -> EntityRef<User> {
        self.current_user.set_or_merge(user)
    }

    fn myself(&self) -> EntityRef<User> {
        self.current_user.get()
    }
}
