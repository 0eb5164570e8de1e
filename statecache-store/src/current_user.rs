//! The session owner's own profile.

use crate::handle::EntityRef;
use parking_lot::RwLock;
use statecache_model::{Entity, User};
use statecache_types::{EntityKind, Snowflake};
use tracing::trace;

/// Single pre-allocated slot for the authenticated account.
///
/// The slot always exists, so there is no not-found case and no delete.
/// It starts with a zero id; the first observation that carries a real id
/// assigns it.
pub struct CurrentUserSlot {
    user: RwLock<EntityRef<User>>,
}

impl CurrentUserSlot {
    pub fn new() -> Self {
        Self {
            user: RwLock::new(EntityRef::new(User::new(Snowflake::ZERO))),
        }
    }

    /// Merges the observation into the slot and returns its handle.
    pub fn set_or_merge(&self, newer: &User) -> EntityRef<User> {
        let user = self.user.write();
        user.modify(|cached| {
            if cached.id.is_zero() {
                cached.id = newer.id;
            }
            cached.merge(newer);
        });
        trace!(kind = %EntityKind::CurrentUser, id = %newer.id, "merged current user");
        user.clone()
    }

    /// Returns the slot's handle.
    pub fn get(&self) -> EntityRef<User> {
        self.user.read().clone()
    }
}

impl Default for CurrentUserSlot {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for CurrentUserSlot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CurrentUserSlot")
            .field("user", &*self.user.read())
            .finish()
    }
}
