//! Relation naming policy
//!
//! Derives link relations from type names: the bare type name for item
//! resources, its plural for collections. This is where
//! [`EmbeddedWrapper::rel_target_type`](crate::embedded::EmbeddedWrapper)
//! hints end up when a typed empty collection needs a relation.

pub mod english;

use crate::config::HypermediaConfig;
use crate::core::relation::LinkRelation;
use crate::embedded::TypeHint;

/// Derives link relations for item and collection resources
pub trait RelationProvider {
    /// The relation for a single resource of the named type
    fn item_relation(&self, type_name: &str) -> LinkRelation;

    /// The relation for a collection of resources of the named type
    fn collection_relation(&self, type_name: &str) -> LinkRelation;

    /// The relation for a typed empty collection
    fn relation_for_hint(&self, hint: &TypeHint) -> LinkRelation {
        self.collection_relation(hint.simple_name())
    }
}

/// Default policy: lowercased bare type name, pluralized for collections,
/// with per-type overrides from configuration
#[derive(Debug, Clone, Default)]
pub struct DefaultRelationProvider {
    config: HypermediaConfig,
}

impl DefaultRelationProvider {
    pub fn new(config: HypermediaConfig) -> Self {
        Self { config }
    }

    /// Strip module path and generic arguments, lowercase the rest
    fn base_name(type_name: &str) -> String {
        let bare = type_name.rsplit("::").next().unwrap_or(type_name);
        let bare = bare.split('<').next().unwrap_or(bare);
        bare.to_lowercase()
    }

    fn resolved_name(&self, type_name: &str) -> String {
        let name = Self::base_name(type_name);
        match self.config.relation_overrides.get(&name) {
            Some(overridden) => overridden.clone(),
            None => name,
        }
    }
}

impl RelationProvider for DefaultRelationProvider {
    fn item_relation(&self, type_name: &str) -> LinkRelation {
        LinkRelation::of(self.resolved_name(type_name))
    }

    fn collection_relation(&self, type_name: &str) -> LinkRelation {
        LinkRelation::of(english::pluralize(&self.resolved_name(type_name)))
    }
}
