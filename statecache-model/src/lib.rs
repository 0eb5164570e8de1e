//! Entity model for statecache.
//!
//! Defines the mirrored entity types and the contract the cache relies on
//! to keep them current:
//! - [`Entity`]: identity, kind tag, in-place merge and clear
//! - [`Guild`]: community container, with nested [`Role`], [`Emoji`] and
//!   [`Member`] collections
//! - [`Channel`]: communication surface, with [`PermissionOverwrite`]s
//! - [`User`]: public account profile (also used for the session owner)
//!
//! Every mutable field is an `Option`. A `None` in a newer observation means
//! "not part of this notification" and leaves the cached value alone.

#[macro_use]
mod merge;

mod channel;
mod entity;
mod guild;
mod user;

pub use channel::{Channel, ChannelType, OverwriteKind, PermissionOverwrite};
pub use entity::Entity;
pub use guild::{Emoji, Guild, Member, Role};
pub use user::User;
