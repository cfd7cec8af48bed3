//! A link builder that keeps a set of template variables around

use crate::builder::support::LinkBuilder;
use crate::core::affordance::Affordance;
use crate::core::error::UriError;
use crate::core::link::Link;
use crate::core::relation::LinkRelation;
use crate::core::template::{TemplateVariable, TemplateVariables};
use crate::core::uri::UriComponents;
use std::fmt;

/// A builder whose derived instances all carry the same [`TemplateVariables`]
///
/// [`LinkBuilder::rebuild`] forwards the currently held variable set, so no
/// trait-level combinator can lose it; swapping the set out goes through
/// [`rebuild_with`](TemplatedLinkBuilder::rebuild_with) or
/// [`with_variables`](TemplatedLinkBuilder::with_variables).
#[derive(Debug, Clone, PartialEq)]
pub struct TemplatedLinkBuilder {
    components: UriComponents,
    affordances: Vec<Affordance>,
    variables: TemplateVariables,
}

impl TemplatedLinkBuilder {
    /// Start a builder from a base URI string, with no variables
    pub fn from_base(uri: impl AsRef<str>) -> Result<Self, UriError> {
        Ok(Self::new(
            UriComponents::parse(uri.as_ref())?,
            TemplateVariables::NONE,
        ))
    }

    /// Start a builder from components and a variable set
    pub fn new(components: UriComponents, variables: TemplateVariables) -> Self {
        Self {
            components,
            affordances: Vec::new(),
            variables,
        }
    }

    /// Full factory: new components, affordances and variable set
    pub fn rebuild_with(
        &self,
        components: UriComponents,
        affordances: Vec<Affordance>,
        variables: TemplateVariables,
    ) -> Self {
        Self {
            components,
            affordances,
            variables,
        }
    }

    /// Merge additional variables into the carried set (union, no duplicates)
    pub fn with_variables(&self, additional: impl IntoIterator<Item = TemplateVariable>) -> Self {
        self.rebuild_with(
            self.components.clone(),
            self.affordances.clone(),
            self.variables.concat(additional),
        )
    }

    /// The variable set carried by this builder
    pub fn variables(&self) -> &TemplateVariables {
        &self.variables
    }
}

impl LinkBuilder for TemplatedLinkBuilder {
    fn components(&self) -> &UriComponents {
        &self.components
    }

    fn affordances(&self) -> &[Affordance] {
        &self.affordances
    }

    fn rebuild(&self, components: UriComponents, affordances: Vec<Affordance>) -> Self {
        self.rebuild_with(components, affordances, self.variables.clone())
    }

    fn link_to(&self, rel: LinkRelation) -> Link {
        // links keep the unresolved template syntax in their href
        let href = self.to_string();
        tracing::debug!(rel = %rel, href = %href, "rendering templated link");
        Link::new(rel, href).with_affordances(self.affordances.clone())
    }
}

impl fmt::Display for TemplatedLinkBuilder {
    /// Renders the URI with the variable syntax appended
    ///
    /// With no variables the URI renders unchanged. Otherwise the variables
    /// are appended to the rendering, or, when a fragment separator is
    /// present, spliced in before the first `#` with the prefix repeated
    /// after it (`prefix{?var}#prefix`).
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered = self.to_uri_string();

        if self.variables.is_none() {
            return f.write_str(&rendered);
        }

        match rendered.split_once('#') {
            None => write!(f, "{}{}", rendered, self.variables),
            Some((prefix, _)) => write!(f, "{}{}#{}", prefix, self.variables, prefix),
        }
    }
}
