//! Shared handle to a cached entity.
//!
//! The cache hands out [`EntityRef`]s rather than copies. Each handle points
//! at a swap cell holding the current immutable snapshot; a merge publishes a
//! new snapshot into that cell, so every clone of the handle sees it on its
//! next [`EntityRef::load`]. Readers never take a lock.

use arc_swap::ArcSwap;
use statecache_model::Entity;
use statecache_types::Snowflake;
use std::fmt;
use std::sync::Arc;

/// A live reference to one cached entity.
pub struct EntityRef<T> {
    cell: Arc<ArcSwap<T>>,
}

impl<T: Entity> EntityRef<T> {
    pub(crate) fn new(entity: T) -> Self {
        Self {
            cell: Arc::new(ArcSwap::from_pointee(entity)),
        }
    }

    /// Returns the current snapshot.
    ///
    /// The snapshot itself is immutable; call `load` again to observe later
    /// merges.
    #[must_use]
    pub fn load(&self) -> Arc<T> {
        self.cell.load_full()
    }

    /// Runs `f` against the current snapshot without cloning the `Arc`.
    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        f(&self.cell.load())
    }

    /// Identity of the referenced entity.
    #[must_use]
    pub fn id(&self) -> Snowflake {
        self.cell.load().id()
    }

    /// True when both handles refer to the same cached object.
    #[must_use]
    pub fn ptr_eq(a: &Self, b: &Self) -> bool {
        Arc::ptr_eq(&a.cell, &b.cell)
    }

    /// Publishes a modified copy of the current snapshot.
    ///
    /// Callers hold their store's exclusive lock, so the compare-and-swap
    /// loop never retries in practice.
    pub(crate) fn modify(&self, mut f: impl FnMut(&mut T)) {
        self.cell.rcu(|current| {
            let mut next = (**current).clone();
            f(&mut next);
            next
        });
    }

    pub(crate) fn merge(&self, newer: &T) {
        self.modify(|cached| cached.merge(newer));
    }

    pub(crate) fn clear(&self) {
        self.modify(T::clear);
    }
}

impl<T> Clone for EntityRef<T> {
    fn clone(&self) -> Self {
        Self {
            cell: Arc::clone(&self.cell),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for EntityRef<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("EntityRef").field(&**self.cell.load()).finish()
    }
}
