//! Release tag parsing and ordering.
//!
//! Upstream release tags are semantic versions with a mandatory `v` prefix
//! (`v1.2.2`, `v1.3.0-dev1`). The shorthands `v1` and `v1.2` are also valid
//! tags and order as `v1.0.0` and `v1.2.0`. Build metadata never takes part
//! in ordering.

pub use self::tag::{Tag, TagError, is_valid};

mod tag;
