//! Per-kind entity store.
//!
//! One reader/writer lock guards the whole map. Lookups share it; insert,
//! merge and remove hold it exclusively for the full check-and-mutate, so
//! two writes to the same id never interleave and a lookup never races a
//! structural change.

use crate::error::{CacheError, CacheResult};
use crate::handle::EntityRef;
use parking_lot::RwLock;
use statecache_model::Entity;
use statecache_types::Snowflake;
use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::fmt;
use tracing::trace;

/// Keyed container holding at most one entry per id.
pub struct EntityStore<T: Entity> {
    entries: RwLock<HashMap<Snowflake, EntityRef<T>>>,
}

impl<T: Entity> EntityStore<T> {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Creates an empty store with room for `capacity` entries.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: RwLock::new(HashMap::with_capacity(capacity)),
        }
    }

    /// Inserts the entity, or merges it into the existing entry.
    ///
    /// Always returns the handle stored in the cache, so a duplicate create
    /// notification yields the same handle as the first one.
    pub fn add_or_merge(&self, entity: T) -> EntityRef<T> {
        let id = entity.id();
        let mut entries = self.entries.write();
        match entries.entry(id) {
            Entry::Occupied(slot) => {
                let cached = slot.get().clone();
                cached.merge(&entity);
                trace!(kind = %T::KIND, %id, "merged into cached entity");
                cached
            }
            Entry::Vacant(slot) => {
                let cached = EntityRef::new(entity);
                slot.insert(cached.clone());
                trace!(kind = %T::KIND, %id, "inserted entity");
                cached
            }
        }
    }

    /// Merges into an existing entry.
    ///
    /// Fails with `NotFound` if the id is absent; an update never creates
    /// an entry.
    pub fn update(&self, entity: &T) -> CacheResult<EntityRef<T>> {
        let id = entity.id();
        let entries = self.entries.write();
        let cached = entries
            .get(&id)
            .ok_or_else(|| CacheError::not_found::<T>(id))?;
        cached.merge(entity);
        trace!(kind = %T::KIND, %id, "updated cached entity");
        Ok(cached.clone())
    }

    /// Clears the entry's fields, then removes it. Absent ids are a no-op.
    pub fn delete(&self, id: Snowflake) {
        let mut entries = self.entries.write();
        if let Some(cached) = entries.get(&id) {
            cached.clear();
            entries.remove(&id);
            trace!(kind = %T::KIND, %id, "removed entity");
        }
    }

    /// Deletes by the snapshot's id.
    pub fn delete_entity(&self, entity: &T) {
        self.delete(entity.id());
    }

    /// Returns the cached handle or `NotFound`.
    pub fn get(&self, id: Snowflake) -> CacheResult<EntityRef<T>> {
        self.entries
            .read()
            .get(&id)
            .cloned()
            .ok_or_else(|| CacheError::not_found::<T>(id))
    }

    /// Returns the cached handle, or fetches and caches it on a miss.
    ///
    /// No lock is held while `fetch` runs. If another caller populated the
    /// entry in the meantime, the fetched snapshot is merged into it.
    pub fn get_or_fetch<E>(
        &self,
        id: Snowflake,
        fetch: impl FnOnce(Snowflake) -> Result<T, E>,
    ) -> Result<EntityRef<T>, E> {
        if let Ok(cached) = self.get(id) {
            return Ok(cached);
        }
        let fetched = fetch(id)?;
        Ok(self.add_or_merge(fetched))
    }

    /// Returns true if the id is cached.
    pub fn contains(&self, id: Snowflake) -> bool {
        self.entries.read().contains_key(&id)
    }

    /// Number of cached entries.
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }

    /// All cached ids, oldest first.
    pub fn ids(&self) -> Vec<Snowflake> {
        let mut ids: Vec<_> = self.entries.read().keys().copied().collect();
        ids.sort_unstable();
        ids
    }
}

impl<T: Entity> Default for EntityStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Entity> fmt::Debug for EntityStore<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EntityStore")
            .field("kind", &T::KIND)
            .field("len", &self.len())
            .finish()
    }
}
