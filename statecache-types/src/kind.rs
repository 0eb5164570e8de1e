use serde::{Deserialize, Serialize};
use std::fmt;

/// Which mirrored collection an entity belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    /// Community container.
    Guild,
    Channel,
    User,
    /// The session owner's own account.
    CurrentUser,
}

impl EntityKind {
    /// Stable lowercase name, used in errors and log fields.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Guild => "guild",
            Self::Channel => "channel",
            Self::User => "user",
            Self::CurrentUser => "current_user",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
