//! Link relations naming the role a linked resource plays for its container

use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;

/// The relation of a link to the resource that carries it (e.g. "self", "next")
///
/// Relations are plain strings, not an enum, so applications can introduce
/// their own vocabulary without touching this crate. The IANA-registered
/// relations used by the crate itself are available as constants.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LinkRelation(Cow<'static, str>);

impl LinkRelation {
    /// The canonical "self" relation
    pub const SELF: LinkRelation = LinkRelation(Cow::Borrowed("self"));

    /// The next resource in a sequence
    pub const NEXT: LinkRelation = LinkRelation(Cow::Borrowed("next"));

    /// The previous resource in a sequence
    pub const PREV: LinkRelation = LinkRelation(Cow::Borrowed("prev"));

    /// The first resource in a sequence
    pub const FIRST: LinkRelation = LinkRelation(Cow::Borrowed("first"));

    /// The last resource in a sequence
    pub const LAST: LinkRelation = LinkRelation(Cow::Borrowed("last"));

    /// A member of a collection
    pub const ITEM: LinkRelation = LinkRelation(Cow::Borrowed("item"));

    /// The collection a resource belongs to
    pub const COLLECTION: LinkRelation = LinkRelation(Cow::Borrowed("collection"));

    /// Create a relation from an arbitrary name
    pub fn of(value: impl Into<Cow<'static, str>>) -> Self {
        Self(value.into())
    }

    /// The relation name as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LinkRelation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl PartialEq<&str> for LinkRelation {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl PartialEq<LinkRelation> for &str {
    fn eq(&self, other: &LinkRelation) -> bool {
        other.0 == *self
    }
}

impl From<&'static str> for LinkRelation {
    fn from(value: &'static str) -> Self {
        Self::of(value)
    }
}

impl From<String> for LinkRelation {
    fn from(value: String) -> Self {
        Self::of(value)
    }
}
