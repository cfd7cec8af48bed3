//! Link builder core: persistent chains over URI components and affordances

use crate::core::affordance::Affordance;
use crate::core::error::UriError;
use crate::core::link::Link;
use crate::core::relation::LinkRelation;
use crate::core::uri::UriComponents;
use std::collections::HashMap;
use std::fmt;

/// Capability contract for link builders
///
/// Implementors hold a [`UriComponents`] value and an affordance list, and
/// provide [`rebuild`](LinkBuilder::rebuild) to produce a fresh instance of
/// their own concrete type from new state. Every combinator below goes
/// through `rebuild`, so chaining always preserves the concrete builder type
/// and whatever extra state it carries.
pub trait LinkBuilder: Sized {
    /// The URI components accumulated so far
    fn components(&self) -> &UriComponents;

    /// The affordances accumulated so far, in insertion order
    fn affordances(&self) -> &[Affordance];

    /// Create a builder of the same concrete type from new components and
    /// affordances
    fn rebuild(&self, components: UriComponents, affordances: Vec<Affordance>) -> Self;

    /// Append a path, splitting on `/` and skipping empty segments
    fn slash(&self, path: impl AsRef<str>) -> Self {
        let mut components = self.components().clone();
        for segment in path.as_ref().split('/').filter(|s| !s.is_empty()) {
            components = components.push_segment(segment);
        }
        self.rebuild(components, self.affordances().to_vec())
    }

    /// Append a query parameter, keeping earlier values for the same name
    fn query_param(&self, name: impl Into<String>, value: impl Into<String>) -> Self {
        let components = self.components().append_query(name, value);
        self.rebuild(components, self.affordances().to_vec())
    }

    /// Replace the fragment
    fn fragment(&self, fragment: impl Into<String>) -> Self {
        let components = self.components().with_fragment(fragment);
        self.rebuild(components, self.affordances().to_vec())
    }

    /// Attach one affordance
    fn with_affordance(&self, affordance: Affordance) -> Self {
        let mut affordances = self.affordances().to_vec();
        affordances.push(affordance);
        self.rebuild(self.components().clone(), affordances)
    }

    /// Attach several affordances, after any already present
    fn with_affordances(&self, additional: impl IntoIterator<Item = Affordance>) -> Self {
        let mut affordances = self.affordances().to_vec();
        affordances.extend(additional);
        self.rebuild(self.components().clone(), affordances)
    }

    /// Partially expand `{name}` placeholders; unknown names keep their
    /// placeholder
    fn expand<K, V>(&self, vars: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        let vars: HashMap<String, String> = vars
            .into_iter()
            .map(|(name, value)| (name.into(), value.into()))
            .collect();
        self.rebuild(self.components().expand(&vars), self.affordances().to_vec())
    }

    /// Render the accumulated URI
    fn to_uri_string(&self) -> String {
        self.components().to_uri_string()
    }

    /// Render a link with the given relation, carrying the accumulated
    /// affordances
    fn link_to(&self, rel: LinkRelation) -> Link {
        let href = self.to_uri_string();
        tracing::debug!(rel = %rel, href = %href, "rendering link");
        Link::new(rel, href).with_affordances(self.affordances().to_vec())
    }

    /// Render a "self" link
    fn link_to_self(&self) -> Link {
        self.link_to(LinkRelation::SELF)
    }
}

/// The plain builder: URI components plus affordances, nothing else
#[derive(Debug, Clone, PartialEq)]
pub struct BasicLinkBuilder {
    components: UriComponents,
    affordances: Vec<Affordance>,
}

impl BasicLinkBuilder {
    /// Start a builder from a base URI string
    pub fn from_base(uri: impl AsRef<str>) -> Result<Self, UriError> {
        Ok(Self::new(UriComponents::parse(uri.as_ref())?))
    }

    /// Start a builder from already parsed components
    pub fn new(components: UriComponents) -> Self {
        Self {
            components,
            affordances: Vec::new(),
        }
    }
}

impl LinkBuilder for BasicLinkBuilder {
    fn components(&self) -> &UriComponents {
        &self.components
    }

    fn affordances(&self) -> &[Affordance] {
        &self.affordances
    }

    fn rebuild(&self, components: UriComponents, affordances: Vec<Affordance>) -> Self {
        Self {
            components,
            affordances,
        }
    }
}

impl fmt::Display for BasicLinkBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_uri_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http::Method;

    #[test]
    fn test_slash_and_query_chain() {
        let builder = BasicLinkBuilder::from_base("https://api.example.com")
            .unwrap()
            .slash("orders/42")
            .slash("lines")
            .query_param("expand", "items");

        assert_eq!(
            builder.to_uri_string(),
            "https://api.example.com/orders/42/lines?expand=items"
        );
    }

    #[test]
    fn test_operations_are_persistent() {
        let base = BasicLinkBuilder::from_base("https://api.example.com").unwrap();
        let derived = base.slash("orders").query_param("page", "2");

        assert_eq!(base.to_uri_string(), "https://api.example.com");
        assert_eq!(
            derived.to_uri_string(),
            "https://api.example.com/orders?page=2"
        );
    }

    #[test]
    fn test_slash_skips_empty_segments() {
        let builder = BasicLinkBuilder::from_base("/api").unwrap().slash("//orders//");
        assert_eq!(builder.to_uri_string(), "/api/orders");
    }

    #[test]
    fn test_affordances_accumulate_in_order() {
        let builder = BasicLinkBuilder::from_base("/orders/42")
            .unwrap()
            .with_affordance(Affordance::new(Method::PUT, LinkRelation::of("update")))
            .with_affordance(Affordance::new(Method::DELETE, LinkRelation::of("cancel")));

        let targets: Vec<_> = builder
            .affordances()
            .iter()
            .map(|a| a.target().as_str().to_string())
            .collect();
        assert_eq!(targets, ["update", "cancel"]);
    }

    #[test]
    fn test_duplicate_affordances_are_kept() {
        let affordance = Affordance::new(Method::POST, LinkRelation::of("create"));
        let builder = BasicLinkBuilder::from_base("/orders")
            .unwrap()
            .with_affordance(affordance.clone())
            .with_affordance(affordance);

        assert_eq!(builder.affordances().len(), 2);
    }

    #[test]
    fn test_link_to_carries_affordances() {
        let link = BasicLinkBuilder::from_base("/orders/42")
            .unwrap()
            .with_affordance(Affordance::new(Method::PUT, LinkRelation::of("update")))
            .link_to_self();

        assert_eq!(link.rel, "self");
        assert_eq!(link.href, "/orders/42");
        assert_eq!(link.affordances().len(), 1);
    }

    #[test]
    fn test_expand_through_builder() {
        let builder = BasicLinkBuilder::from_base("/orders/{id}")
            .unwrap()
            .expand([("id", "42")]);
        assert_eq!(builder.to_uri_string(), "/orders/42");
    }

    #[test]
    fn test_fragment() {
        let builder = BasicLinkBuilder::from_base("/docs").unwrap().fragment("usage");
        assert_eq!(builder.to_uri_string(), "/docs#usage");
    }
}
