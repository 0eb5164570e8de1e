//! Property tests for the merge contract shared by all entity types.

use proptest::prelude::*;
use statecache_model::{Entity, User};
use statecache_types::Snowflake;

fn opt_string() -> impl Strategy<Value = Option<String>> {
    prop::option::of("[a-zA-Z0-9 ]{0,24}")
}

fn user_strategy() -> impl Strategy<Value = User> {
    (
        opt_string(),
        opt_string(),
        opt_string(),
        prop::option::of(any::<bool>()),
        opt_string(),
    )
        .prop_map(|(username, discriminator, avatar, bot, email)| User {
            username,
            discriminator,
            avatar,
            bot,
            email,
            ..User::new(Snowflake::new(1))
        })
}

proptest! {
    /// An observation carrying nothing changes nothing.
    #[test]
    fn merge_empty_is_identity(user in user_strategy()) {
        let mut merged = user.clone();
        merged.merge(&User::new(user.id));
        prop_assert_eq!(merged, user);
    }

    /// Applying the same observation twice equals applying it once.
    #[test]
    fn merge_is_idempotent(base in user_strategy(), newer in user_strategy()) {
        let mut once = base.clone();
        once.merge(&newer);
        let mut twice = once.clone();
        twice.merge(&newer);
        prop_assert_eq!(twice, once);
    }

    /// Every field the observation carries wins.
    #[test]
    fn present_fields_win(base in user_strategy(), newer in user_strategy()) {
        let mut merged = base.clone();
        merged.merge(&newer);
        if newer.username.is_some() {
            prop_assert_eq!(&merged.username, &newer.username);
        } else {
            prop_assert_eq!(&merged.username, &base.username);
        }
        if newer.bot.is_some() {
            prop_assert_eq!(merged.bot, newer.bot);
        } else {
            prop_assert_eq!(merged.bot, base.bot);
        }
    }
}
