//! Factory for embedded wrappers

use crate::config::HypermediaConfig;
use crate::core::error::WrapError;
use crate::core::relation::LinkRelation;
use crate::embedded::wrapper::{EmbeddedWrapper, TypeHint};
use crate::embedded::Embeddable;
use serde_json::Value;

/// Creates [`EmbeddedWrapper`] values, resolving relations explicitly or by
/// inference from the wrapped value's shape
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedWrappers {
    prefer_collections: bool,
}

impl EmbeddedWrappers {
    /// Create a factory
    ///
    /// With `prefer_collections` set, scalar values are normalized into
    /// single-element collections at wrap time.
    pub fn new(prefer_collections: bool) -> Self {
        Self { prefer_collections }
    }

    /// Create a factory from configuration
    pub fn from_config(config: &HypermediaConfig) -> Self {
        Self::new(config.prefer_collections)
    }

    /// Wrap a value, leaving the relation to be inferred downstream
    ///
    /// Fails with [`WrapError::UnresolvableRelation`] when the value is an
    /// empty collection: nothing is left to infer a relation from, so an
    /// explicit relation ([`wrap_with_rel`](Self::wrap_with_rel)) or a typed
    /// empty collection ([`empty_collection_of`](Self::empty_collection_of))
    /// must be used instead.
    pub fn wrap(&self, source: impl Into<Embeddable>) -> Result<EmbeddedWrapper, WrapError> {
        let value = self.materialize(source.into())?;

        if Self::is_empty_collection(&value) {
            return Err(WrapError::UnresolvableRelation);
        }

        Ok(EmbeddedWrapper::new(value, None, None))
    }

    /// Wrap a value with an explicit relation
    ///
    /// Never fails on empty collections; the relation suppresses the
    /// inference path, so the wrapper's type hint is always `None`.
    pub fn wrap_with_rel(
        &self,
        source: impl Into<Embeddable>,
        rel: LinkRelation,
    ) -> Result<EmbeddedWrapper, WrapError> {
        let value = self.materialize(source.into())?;
        Ok(EmbeddedWrapper::new(value, Some(rel), None))
    }

    /// Wrap an empty collection whose elements would have type `T`
    ///
    /// The relation is absent and left to consumers that know the naming
    /// policy; the wrapper's type hint reports `T`.
    pub fn empty_collection_of<T: 'static>(&self) -> EmbeddedWrapper {
        EmbeddedWrapper::new(Value::Array(Vec::new()), None, Some(TypeHint::of::<T>()))
    }

    /// Realize the input and apply collection normalization
    fn materialize(&self, source: Embeddable) -> Result<Value, WrapError> {
        let value = match source {
            Embeddable::Value(value) => value,
            Embeddable::Stream(producer) => {
                let items = producer()?;
                tracing::debug!(items = items.len(), "materialized deferred sequence");
                Value::Array(items)
            }
        };

        if self.prefer_collections && !value.is_array() {
            return Ok(Value::Array(vec![value]));
        }
        Ok(value)
    }

    fn is_empty_collection(value: &Value) -> bool {
        matches!(value, Value::Array(items) if items.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Serialize;

    #[derive(Serialize)]
    struct Employee {
        name: &'static str,
    }

    fn wrappers() -> EmbeddedWrappers {
        EmbeddedWrappers::new(false)
    }

    #[test]
    fn test_wrap_for_empty_collection_fails() {
        let err = wrappers()
            .wrap(Embeddable::of(Vec::<Employee>::new()).unwrap())
            .unwrap_err();
        assert!(matches!(err, WrapError::UnresolvableRelation));
    }

    #[test]
    fn test_wrap_empty_collection_with_explicit_rel() {
        let wrapper = wrappers()
            .wrap_with_rel(
                Embeddable::of(Vec::<Employee>::new()).unwrap(),
                LinkRelation::of("rel"),
            )
            .unwrap();

        assert_eq!(wrapper.rel().unwrap(), &"rel");
        assert!(wrapper.rel_target_type().is_none());
        assert_eq!(wrapper.value(), &Value::Array(Vec::new()));
    }

    #[test]
    fn test_empty_collection_of_reports_element_type() {
        let wrapper = wrappers().empty_collection_of::<String>();

        assert!(wrapper.rel().is_none());
        assert_eq!(wrapper.rel_target_type(), Some(TypeHint::of::<String>()));
        assert_eq!(wrapper.value(), &Value::Array(Vec::new()));
    }

    #[test]
    fn test_wrap_resolves_deferred_sequence() {
        let wrapper = wrappers()
            .wrap(Embeddable::stream(|| vec![1, 2, 3]))
            .unwrap();

        assert_eq!(
            wrapper.value(),
            &Value::Array(vec![1.into(), 2.into(), 3.into()])
        );
    }

    #[test]
    fn test_wrap_non_empty_collection_has_no_metadata() {
        let wrapper = wrappers()
            .wrap(Embeddable::of(vec![Employee { name: "Frodo" }]).unwrap())
            .unwrap();

        assert!(wrapper.rel().is_none());
        assert!(wrapper.rel_target_type().is_none());
        assert!(wrapper.is_collection());
    }

    #[test]
    fn test_prefer_collections_normalizes_scalars() {
        let wrapper = EmbeddedWrappers::new(true)
            .wrap(Embeddable::of(Employee { name: "Frodo" }).unwrap())
            .unwrap();

        let Value::Array(items) = wrapper.value() else {
            panic!("expected single-element collection");
        };
        assert_eq!(items.len(), 1);
    }

    #[test]
    fn test_scalar_stays_scalar_by_default() {
        let wrapper = wrappers()
            .wrap(Embeddable::of(Employee { name: "Frodo" }).unwrap())
            .unwrap();
        assert!(!wrapper.is_collection());
    }
}
