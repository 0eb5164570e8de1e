use crate::{Channel, Entity, User};
use serde::{Deserialize, Serialize};
use statecache_types::{EntityKind, Snowflake};

/// A permission group inside a guild.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Role {
    pub id: Snowflake,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub color: u32,
    #[serde(default)]
    pub hoist: bool,
    #[serde(default)]
    pub position: i32,
    #[serde(default)]
    pub permissions: u64,
    #[serde(default)]
    pub managed: bool,
    #[serde(default)]
    pub mentionable: bool,
}

/// A custom emoji. Unicode emojis carry no id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Emoji {
    #[serde(default)]
    pub id: Option<Snowflake>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub roles: Vec<Snowflake>,
    #[serde(default)]
    pub require_colons: bool,
    #[serde(default)]
    pub managed: bool,
    #[serde(default)]
    pub animated: bool,
}

/// A user's membership in a guild.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    #[serde(default)]
    pub user: Option<User>,
    #[serde(default)]
    pub nick: Option<String>,
    #[serde(default)]
    pub roles: Vec<Snowflake>,
    #[serde(default)]
    pub joined_at: Option<String>,
    #[serde(default)]
    pub deaf: bool,
    #[serde(default)]
    pub mute: bool,
}

/// A community container ("server" in client UIs).
///
/// The nested collections can be large; `clear` drops them so a deleted
/// guild does not keep member lists reachable through stale handles.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Guild {
    pub id: Snowflake,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub splash: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner_id: Option<Snowflake>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub afk_channel_id: Option<Snowflake>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub afk_timeout: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub verification_level: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mfa_level: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub member_count: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub large: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unavailable: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub features: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub roles: Option<Vec<Role>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub emojis: Option<Vec<Emoji>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub members: Option<Vec<Member>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub channels: Option<Vec<Channel>>,
}

impl Guild {
    /// Creates an empty snapshot carrying only an id.
    #[must_use]
    pub fn new(id: Snowflake) -> Self {
        Self {
            id,
            ..Self::default()
        }
    }

    /// Looks up a role by id.
    #[must_use]
    pub fn role(&self, id: Snowflake) -> Option<&Role> {
        self.roles.as_deref()?.iter().find(|r| r.id == id)
    }

    /// Looks up a member by user id.
    #[must_use]
    pub fn member(&self, user_id: Snowflake) -> Option<&Member> {
        self.members
            .as_deref()?
            .iter()
            .find(|m| m.user.as_ref().is_some_and(|u| u.id == user_id))
    }

    /// An outage stub: the service only sent the id and the flag.
    #[must_use]
    pub fn is_unavailable(&self) -> bool {
        self.unavailable.unwrap_or(false)
    }
}

impl Entity for Guild {
    const KIND: EntityKind = EntityKind::Guild;

    fn id(&self) -> Snowflake {
        self.id
    }

    fn merge(&mut self, newer: &Self) {
        merge_fields!(self, newer;
            name,
            icon,
            splash,
            owner_id,
            region,
            afk_channel_id,
            afk_timeout,
            verification_level,
            mfa_level,
            member_count,
            large,
            unavailable,
            features,
            roles,
            emojis,
            members,
            channels,
        );
    }

    fn clear(&mut self) {
        *self = Self::new(self.id);
    }
}
