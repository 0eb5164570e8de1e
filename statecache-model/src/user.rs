use crate::Entity;
use serde::{Deserialize, Serialize};
use statecache_types::{EntityKind, Snowflake};

/// Public profile of a remote account.
///
/// The same shape backs the session owner's own profile; the private
/// fields (`email`, `verified`, `mfa_enabled`, `locale`) are only ever
/// populated for that one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: Snowflake,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discriminator: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bot: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mfa_enabled: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub verified: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl User {
    /// Creates an empty snapshot carrying only an id.
    #[must_use]
    pub fn new(id: Snowflake) -> Self {
        Self {
            id,
            ..Self::default()
        }
    }

    /// `username#discriminator`, when both are known.
    #[must_use]
    pub fn tag(&self) -> Option<String> {
        match (&self.username, &self.discriminator) {
            (Some(name), Some(disc)) => Some(format!("{name}#{disc}")),
            _ => None,
        }
    }

    /// Bots are flagged explicitly; an absent flag means a human account.
    #[must_use]
    pub fn is_bot(&self) -> bool {
        self.bot.unwrap_or(false)
    }
}

impl Entity for User {
    const KIND: EntityKind = EntityKind::User;

    fn id(&self) -> Snowflake {
        self.id
    }

    fn merge(&mut self, newer: &Self) {
        merge_fields!(self, newer;
            username,
            discriminator,
            avatar,
            bot,
            mfa_enabled,
            locale,
            verified,
            email,
        );
    }

    fn clear(&mut self) {
        *self = Self::new(self.id);
    }
}
