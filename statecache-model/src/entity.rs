use statecache_types::{EntityKind, Snowflake};

/// An entity the cache can mirror.
///
/// `merge` and `clear` are total: they never fail and never touch the id.
pub trait Entity: Clone + Send + Sync + 'static {
    /// Collection this entity type is stored in.
    const KIND: EntityKind;

    /// Identity of the remote object.
    fn id(&self) -> Snowflake;

    /// Overwrites every field present in `newer`; absent fields are kept.
    ///
    /// A decoded JSON `null` is indistinguishable from an absent field, so an
    /// explicit null from upstream cannot clear a cached value.
    fn merge(&mut self, newer: &Self);

    /// Resets every field except the id, dropping nested collections.
    fn clear(&mut self);
}
