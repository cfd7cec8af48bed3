//! Core module containing the fundamental hypermedia value types

pub mod affordance;
pub mod error;
pub mod link;
pub mod relation;
pub mod template;
pub mod uri;

pub use affordance::Affordance;
pub use error::{ConfigError, HypermediaError, HypermediaResult, UriError, WrapError};
pub use link::Link;
pub use relation::LinkRelation;
pub use template::{TemplateVariable, TemplateVariables, VariableKind};
pub use uri::UriComponents;
