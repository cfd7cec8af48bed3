//! Typed error handling for the hypermedia crate
//!
//! Errors are grouped by category so clients can handle them specifically
//! rather than dealing with generic `anyhow::Error` values:
//!
//! - [`UriError`]: errors raised while parsing URIs into components
//! - [`WrapError`]: errors raised while wrapping values for embedding
//! - [`ConfigError`]: errors raised while loading configuration
//!
//! [`HypermediaError`] is the umbrella type; every category converts into it
//! via `From`, and `error_code()` exposes a stable string for programmatic
//! handling.

use thiserror::Error;

/// The main error type for the hypermedia crate
#[derive(Debug, Error)]
pub enum HypermediaError {
    /// URI parsing errors
    #[error(transparent)]
    Uri(#[from] UriError),

    /// Embedding errors
    #[error(transparent)]
    Wrap(#[from] WrapError),

    /// Configuration errors
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Internal errors (should not happen in normal operation)
    #[error("Internal error: {0}")]
    Internal(String),
}

impl HypermediaError {
    /// Get the error code for this error
    pub fn error_code(&self) -> &'static str {
        match self {
            HypermediaError::Uri(e) => e.error_code(),
            HypermediaError::Wrap(e) => e.error_code(),
            HypermediaError::Config(e) => e.error_code(),
            HypermediaError::Internal(_) => "INTERNAL_ERROR",
        }
    }
}

/// Convert from anyhow::Error for callers mixing the two styles
impl From<anyhow::Error> for HypermediaError {
    fn from(err: anyhow::Error) -> Self {
        HypermediaError::Internal(err.to_string())
    }
}

/// Errors raised while parsing a URI into components
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum UriError {
    /// The URI starts with `://`, leaving the scheme empty
    #[error("URI '{uri}' has an empty scheme")]
    MissingScheme { uri: String },
}

impl UriError {
    pub fn error_code(&self) -> &'static str {
        match self {
            UriError::MissingScheme { .. } => "URI_MISSING_SCHEME",
        }
    }
}

/// Errors raised while wrapping a value for embedding
#[derive(Debug, Error)]
pub enum WrapError {
    /// An empty collection was wrapped with no explicit relation and no
    /// element type to infer one from
    #[error("cannot wrap an empty collection without an explicit relation or element type")]
    UnresolvableRelation,

    /// The value could not be serialized for embedding
    #[error("failed to serialize value for embedding: {message}")]
    Serialization { message: String },
}

impl WrapError {
    pub fn error_code(&self) -> &'static str {
        match self {
            WrapError::UnresolvableRelation => "UNRESOLVABLE_RELATION",
            WrapError::Serialization { .. } => "WRAP_SERIALIZATION_ERROR",
        }
    }
}

impl From<serde_json::Error> for WrapError {
    fn from(err: serde_json::Error) -> Self {
        WrapError::Serialization {
            message: err.to_string(),
        }
    }
}

/// Errors raised while loading configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to parse a configuration document
    #[error("failed to parse config: {message}")]
    Parse { message: String },

    /// Configuration file not found
    #[error("configuration file not found: {path}")]
    FileNotFound { path: String },

    /// IO error while reading configuration
    #[error("IO error: {message}")]
    Io { message: String },
}

impl ConfigError {
    pub fn error_code(&self) -> &'static str {
        match self {
            ConfigError::Parse { .. } => "CONFIG_PARSE_ERROR",
            ConfigError::FileNotFound { .. } => "CONFIG_FILE_NOT_FOUND",
            ConfigError::Io { .. } => "CONFIG_IO_ERROR",
        }
    }
}

impl From<serde_yaml::Error> for ConfigError {
    fn from(err: serde_yaml::Error) -> Self {
        ConfigError::Parse {
            message: err.to_string(),
        }
    }
}

/// A specialized Result type for hypermedia operations
pub type HypermediaResult<T> = Result<T, HypermediaError>;
