use statecache_types::EntityKind;

#[test]
fn display_is_lowercase_name() {
    assert_eq!(EntityKind::Guild.to_string(), "guild");
    assert_eq!(EntityKind::Channel.to_string(), "channel");
    assert_eq!(EntityKind::User.to_string(), "user");
    assert_eq!(EntityKind::CurrentUser.to_string(), "current_user");
}

#[test]
fn serde_matches_display() {
    for kind in [
        EntityKind::Guild,
        EntityKind::Channel,
        EntityKind::User,
        EntityKind::CurrentUser,
    ] {
        let json = serde_json::to_string(&kind).unwrap();
        assert_eq!(json, format!("\"{kind}\""));
        assert_eq!(serde_json::from_str::<EntityKind>(&json).unwrap(), kind);
    }
}
