//! Immutable link builders
//!
//! Builders compose a URI out of a base, path segments and query parameters,
//! collect affordances along the way, and finally render to a string or a
//! [`crate::core::Link`] value. Every operation returns a new builder; the
//! old one stays valid, so chains can be forked and shared freely across
//! threads.

pub mod support;
pub mod templated;

pub use support::{BasicLinkBuilder, LinkBuilder};
pub use templated::TemplatedLinkBuilder;
