//! The wrapper value handed to the serialization layer

use crate::core::relation::LinkRelation;
use serde_json::Value;
use std::any::TypeId;
use std::hash::{Hash, Hasher};

/// A type descriptor for the elements of a typed empty collection
///
/// Carries the [`TypeId`] for equality and the type name for downstream
/// relation naming. Two hints compare equal when they describe the same type.
#[derive(Debug, Clone, Copy)]
pub struct TypeHint {
    id: TypeId,
    name: &'static str,
}

impl TypeHint {
    /// The hint for type `T`
    pub fn of<T: 'static>() -> Self {
        Self {
            id: TypeId::of::<T>(),
            name: std::any::type_name::<T>(),
        }
    }

    /// The full type name, including the module path
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// The bare type name without the module path
    pub fn simple_name(&self) -> &'static str {
        self.name.rsplit("::").next().unwrap_or(self.name)
    }
}

impl PartialEq for TypeHint {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for TypeHint {}

impl Hash for TypeHint {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

/// A value paired with relation metadata for embedding
///
/// Invariant, enforced by [`super::EmbeddedWrappers`]: when the value is an
/// empty collection, an explicit relation or an element type hint is present.
#[derive(Debug, Clone, PartialEq)]
pub struct EmbeddedWrapper {
    value: Value,
    rel: Option<LinkRelation>,
    rel_target_type: Option<TypeHint>,
}

impl EmbeddedWrapper {
    pub(crate) fn new(
        value: Value,
        rel: Option<LinkRelation>,
        rel_target_type: Option<TypeHint>,
    ) -> Self {
        Self {
            value,
            rel,
            rel_target_type,
        }
    }

    /// The wrapped value; deferred sequences have already been materialized
    pub fn value(&self) -> &Value {
        &self.value
    }

    /// The explicit relation, if one was supplied
    ///
    /// Never performs inference; consumers derive a relation from
    /// [`rel_target_type`](Self::rel_target_type) or the value itself.
    pub fn rel(&self) -> Option<&LinkRelation> {
        self.rel.as_ref()
    }

    /// The element type of a typed empty collection, when the relation is to
    /// be inferred; `None` when the relation was explicit
    pub fn rel_target_type(&self) -> Option<TypeHint> {
        self.rel_target_type
    }

    /// Whether the wrapped value is a collection
    pub fn is_collection(&self) -> bool {
        self.value.is_array()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_hint_equality_by_type() {
        assert_eq!(TypeHint::of::<String>(), TypeHint::of::<String>());
        assert_ne!(TypeHint::of::<String>(), TypeHint::of::<i64>());
    }

    #[test]
    fn test_type_hint_simple_name() {
        assert_eq!(TypeHint::of::<String>().simple_name(), "String");
        assert!(TypeHint::of::<String>().name().contains("String"));
    }
}
