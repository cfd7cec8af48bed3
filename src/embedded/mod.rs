//! Embedded resource wrapping for hypermedia responses
//!
//! An [`EmbeddedWrapper`] pairs a value with relation metadata so the
//! serialization layer can include it as a named sub-resource. Wrappers are
//! produced by [`EmbeddedWrappers`], which resolves the relation either
//! explicitly or by inference from the value's shape.

pub mod wrapper;
pub mod wrappers;

pub use wrapper::{EmbeddedWrapper, TypeHint};
pub use wrappers::EmbeddedWrappers;

use crate::core::error::WrapError;
use serde::Serialize;
use serde_json::Value;
use std::fmt;

/// Input accepted by [`EmbeddedWrappers::wrap`]
///
/// A closed set of variants: either an already realized value or a deferred
/// sequence. Deferred sequences are materialized into a concrete collection
/// at wrap time; a wrapper never stores an unresolved producer.
pub enum Embeddable {
    /// An already realized value
    Value(Value),

    /// A zero-argument producer of a sequence, run once at wrap time
    Stream(Box<dyn FnOnce() -> Result<Vec<Value>, WrapError>>),
}

impl Embeddable {
    /// Realize a serializable value
    pub fn of<T: Serialize>(value: T) -> Result<Self, WrapError> {
        Ok(Embeddable::Value(serde_json::to_value(value)?))
    }

    /// Defer a sequence until wrap time
    pub fn stream<F, I, T>(producer: F) -> Self
    where
        F: FnOnce() -> I + 'static,
        I: IntoIterator<Item = T>,
        T: Serialize,
    {
        Embeddable::Stream(Box::new(move || {
            producer()
                .into_iter()
                .map(|item| serde_json::to_value(item).map_err(WrapError::from))
                .collect()
        }))
    }
}

impl From<Value> for Embeddable {
    fn from(value: Value) -> Self {
        Embeddable::Value(value)
    }
}

impl fmt::Debug for Embeddable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Embeddable::Value(value) => f.debug_tuple("Value").field(value).finish(),
            Embeddable::Stream(_) => f.write_str("Stream(..)"),
        }
    }
}
