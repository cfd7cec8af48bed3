//! # Hypermedia-RS
//!
//! Hypermedia (HATEOAS) support for REST APIs in Rust.
//!
//! ## Features
//!
//! - **Immutable Link Builders**: compose URIs from path segments and query
//!   parameters; every operation returns a new builder, so chains can be
//!   forked and shared across threads
//! - **Template Awareness**: carry a set of URI template variables through an
//!   entire builder chain and render unresolved `{?page,size}` syntax
//! - **Partial Expansion**: resolve template placeholders in as many passes
//!   as values become available
//! - **Affordances**: attach descriptions of the state transitions reachable
//!   through a link
//! - **Embedded Resources**: wrap values (including typed empty collections
//!   and deferred sequences) with relation metadata for embedding
//! - **Relation Naming**: derive item and collection relations from type
//!   names, with auto-pluralization and YAML-configured overrides
//!
//! ## Quick Start
//!
//! ```rust
//! use hypermedia::prelude::*;
//!
//! let orders = TemplatedLinkBuilder::from_base("https://api.example.com")
//!     .unwrap()
//!     .slash("orders")
//!     .with_variables(vec![
//!         TemplateVariable::request_param("page"),
//!         TemplateVariable::request_param("size"),
//!     ]);
//!
//! assert_eq!(orders.to_string(), "https://api.example.com/orders{?page,size}");
//!
//! let link = orders
//!     .with_affordance(Affordance::new(Method::POST, LinkRelation::of("create")))
//!     .link_to(LinkRelation::of("orders"));
//!
//! assert!(link.is_templated());
//! ```

pub mod builder;
pub mod config;
pub mod core;
pub mod embedded;
pub mod naming;

/// Re-exports of commonly used types and traits
pub mod prelude {
    // === Core Types ===
    pub use crate::core::{
        affordance::Affordance,
        error::{ConfigError, HypermediaError, HypermediaResult, UriError, WrapError},
        link::Link,
        relation::LinkRelation,
        template::{TemplateVariable, TemplateVariables, VariableKind},
        uri::UriComponents,
    };

    // === Builders ===
    pub use crate::builder::{BasicLinkBuilder, LinkBuilder, TemplatedLinkBuilder};

    // === Embedding ===
    pub use crate::embedded::{Embeddable, EmbeddedWrapper, EmbeddedWrappers, TypeHint};

    // === Relation Naming ===
    pub use crate::naming::{DefaultRelationProvider, RelationProvider};

    // === Config ===
    pub use crate::config::HypermediaConfig;

    // === External dependencies ===
    pub use http::Method;
    pub use serde::{Deserialize, Serialize};
    pub use serde_json::Value;
}
