//! Hypermedia links for API responses
//!
//! A [`Link`] is the final, comparable value a builder renders to. Responses
//! include links so clients can discover available actions dynamically.

use crate::core::affordance::Affordance;
use crate::core::relation::LinkRelation;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A hypermedia link: a relation plus the URI it points to
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Link {
    /// The role this link plays for the resource carrying it
    pub rel: LinkRelation,

    /// The target URI, possibly still containing template syntax
    pub href: String,

    /// Set when the href contains unresolved template syntax
    #[serde(skip_serializing_if = "Option::is_none")]
    pub templated: Option<bool>,

    /// Human-readable title for this link
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// State transitions reachable through this link, in insertion order.
    /// Not part of the serialized representation; the media-type layer
    /// renders affordances in its own format.
    #[serde(skip)]
    affordances: Vec<Affordance>,
}

impl Link {
    /// Create a link; the templated flag is derived from the href
    pub fn new(rel: LinkRelation, href: impl Into<String>) -> Self {
        let href = href.into();
        let templated = href.contains('{').then_some(true);
        Self {
            rel,
            href,
            templated,
            title: None,
            affordances: Vec::new(),
        }
    }

    /// Add a title to this link
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Attach affordances, after any already present
    pub fn with_affordances(mut self, affordances: impl IntoIterator<Item = Affordance>) -> Self {
        self.affordances.extend(affordances);
        self
    }

    pub fn affordances(&self) -> &[Affordance] {
        &self.affordances
    }

    /// Whether the href still contains template syntax
    pub fn is_templated(&self) -> bool {
        self.templated.unwrap_or(false)
    }
}

impl fmt::Display for Link {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.href)
    }
}
