//! Affordances: state transitions reachable from a link

use crate::core::relation::LinkRelation;
use http::Method;

/// Describes one action a client may take on the resource behind a link
///
/// Affordances are kept in insertion order on the builder that collects them.
/// No deduplication is performed: attaching the same descriptor twice keeps
/// both copies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Affordance {
    method: Method,
    target: LinkRelation,
    name: Option<String>,
    input_type: Option<String>,
    output_type: Option<String>,
}

impl Affordance {
    /// Create an affordance for the given verb and target relation
    pub fn new(method: Method, target: LinkRelation) -> Self {
        Self {
            method,
            target,
            name: None,
            input_type: None,
            output_type: None,
        }
    }

    /// Name the transition (e.g. "updateOrder")
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Declare the payload type the transition accepts
    pub fn with_input(mut self, input_type: impl Into<String>) -> Self {
        self.input_type = Some(input_type.into());
        self
    }

    /// Declare the representation type the transition produces
    pub fn with_output(mut self, output_type: impl Into<String>) -> Self {
        self.output_type = Some(output_type.into());
        self
    }

    pub fn method(&self) -> &Method {
        &self.method
    }

    pub fn target(&self) -> &LinkRelation {
        &self.target
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn input_type(&self) -> Option<&str> {
        self.input_type.as_deref()
    }

    pub fn output_type(&self) -> Option<&str> {
        self.output_type.as_deref()
    }
}
