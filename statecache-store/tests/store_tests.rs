use pretty_assertions::assert_eq;
use statecache_model::{Guild, Member, User};
use statecache_store::{CacheError, EntityRef, EntityStore};
use statecache_types::{EntityKind, Snowflake};

fn id(raw: u64) -> Snowflake {
    Snowflake::new(raw)
}

fn named(raw: u64, name: &str) -> Guild {
    Guild {
        name: Some(name.to_string()),
        ..Guild::new(id(raw))
    }
}

// ── Add / lookup ─────────────────────────────────────────────────

#[test]
fn add_then_lookup_returns_equal_content() {
    let store = EntityStore::new();
    let guild = Guild {
        region: Some("us-east".to_string()),
        member_count: Some(12),
        ..named(1, "Alpha")
    };

    store.add_or_merge(guild.clone());

    let cached = store.get(id(1)).unwrap();
    assert_eq!(*cached.load(), guild);
}

#[test]
fn lookup_missing_is_not_found() {
    let store = EntityStore::<Guild>::new();
    let err = store.get(id(9)).unwrap_err();
    assert_eq!(
        err,
        CacheError::NotFound {
            kind: EntityKind::Guild,
            id: id(9),
        }
    );
    assert!(err.is_not_found());
    assert_eq!(err.to_string(), "guild 9 is not cached");
}

#[test]
fn add_twice_merges_into_one_entry() {
    let store = EntityStore::new();
    let first = store.add_or_merge(Guild {
        region: Some("eu".to_string()),
        ..named(1, "Alpha")
    });
    let second = store.add_or_merge(named(1, "Beta"));

    assert_eq!(store.len(), 1);
    assert!(EntityRef::ptr_eq(&first, &second));
    let current = store.get(id(1)).unwrap().load();
    assert_eq!(current.name.as_deref(), Some("Beta"));
    assert_eq!(current.region.as_deref(), Some("eu"));
}

// ── Update ───────────────────────────────────────────────────────

#[test]
fn update_on_empty_store_is_not_found_and_creates_nothing() {
    let store = EntityStore::new();
    let err = store.update(&named(1, "Alpha")).unwrap_err();
    assert!(err.is_not_found());
    assert!(store.is_empty());
}

#[test]
fn update_is_visible_through_earlier_handles() {
    let store = EntityStore::new();
    store.add_or_merge(named(1, "Alpha"));
    let before = store.get(id(1)).unwrap();

    let after = store.update(&named(1, "Beta")).unwrap();

    assert!(EntityRef::ptr_eq(&before, &after));
    assert_eq!(before.load().name.as_deref(), Some("Beta"));
}

#[test]
fn snapshots_taken_before_update_are_stable() {
    let store = EntityStore::new();
    let handle = store.add_or_merge(named(1, "Alpha"));
    let snapshot = handle.load();

    store.update(&named(1, "Beta")).unwrap();

    assert_eq!(snapshot.name.as_deref(), Some("Alpha"));
    assert_eq!(handle.load().name.as_deref(), Some("Beta"));
}

// ── Delete ───────────────────────────────────────────────────────

#[test]
fn delete_removes_and_is_idempotent() {
    let store = EntityStore::new();
    store.add_or_merge(named(1, "Alpha"));

    store.delete(id(1));
    assert!(store.get(id(1)).unwrap_err().is_not_found());

    store.delete(id(1));
    assert!(store.is_empty());
}

#[test]
fn delete_clears_entity_seen_through_old_handles() {
    let store = EntityStore::new();
    let handle = store.add_or_merge(Guild {
        members: Some(vec![Member {
            user: Some(User::new(id(100))),
            ..Member::default()
        }]),
        ..named(1, "Alpha")
    });

    store.delete(id(1));

    let cleared = handle.load();
    assert_eq!(*cleared, Guild::new(id(1)));
    assert!(cleared.members.is_none());
}

#[test]
fn delete_entity_uses_snapshot_id() {
    let store = EntityStore::new();
    store.add_or_merge(named(1, "Alpha"));
    store.add_or_merge(named(2, "Beta"));

    store.delete_entity(&Guild::new(id(1)));

    assert_eq!(store.ids(), vec![id(2)]);
}

#[test]
fn readding_after_delete_starts_fresh() {
    let store = EntityStore::new();
    let old = store.add_or_merge(Guild {
        region: Some("eu".to_string()),
        ..named(1, "Alpha")
    });
    store.delete(id(1));

    let new = store.add_or_merge(named(1, "Again"));

    assert!(!EntityRef::ptr_eq(&old, &new));
    assert_eq!(new.load().region, None);
}

// ── Fetch fallback ───────────────────────────────────────────────

#[test]
fn get_or_fetch_hits_cache_without_fetching() {
    let store = EntityStore::new();
    store.add_or_merge(named(1, "Alpha"));

    let handle = store
        .get_or_fetch(id(1), |_| -> Result<Guild, String> {
            panic!("fetch must not run on a hit")
        })
        .unwrap();

    assert_eq!(handle.load().name.as_deref(), Some("Alpha"));
}

#[test]
fn get_or_fetch_populates_on_miss() {
    let store = EntityStore::new();

    let handle = store
        .get_or_fetch(id(5), |missing| Ok::<_, String>(named(missing.get(), "Fetched")))
        .unwrap();

    assert_eq!(handle.load().name.as_deref(), Some("Fetched"));
    assert!(store.contains(id(5)));
}

#[test]
fn get_or_fetch_propagates_fetch_error() {
    let store = EntityStore::<Guild>::new();
    let result = store.get_or_fetch(id(5), |_| Err("remote unavailable"));
    assert_eq!(result.unwrap_err(), "remote unavailable");
    assert!(store.is_empty());
}

// ── Introspection ────────────────────────────────────────────────

#[test]
fn ids_are_sorted_oldest_first() {
    let store = EntityStore::new();
    for raw in [30, 10, 20] {
        store.add_or_merge(Guild::new(id(raw)));
    }
    assert_eq!(store.ids(), vec![id(10), id(20), id(30)]);
    assert_eq!(store.len(), 3);
}

#[test]
fn debug_shows_kind_and_len() {
    let store = EntityStore::<User>::new();
    store.add_or_merge(User::new(id(1)));
    let debug = format!("{store:?}");
    assert!(debug.contains("User"));
    assert!(debug.contains("len: 1"));
}
