//! Cache configuration.

/// Configuration for a [`StateCache`](crate::StateCache).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheConfig {
    /// Initial capacity of the guild store.
    pub guild_capacity: usize,
    /// Initial capacity of the channel store.
    pub channel_capacity: usize,
    /// Initial capacity of the user store.
    pub user_capacity: usize,
    /// Whether the event applicator mirrors user notifications at all.
    pub track_users: bool,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            guild_capacity: 16,
            channel_capacity: 128,
            user_capacity: 256,
            track_users: true,
        }
    }
}
