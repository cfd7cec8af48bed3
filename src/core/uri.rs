//! Parsed URI components with partial template expansion
//!
//! [`UriComponents`] breaks a URI into scheme, authority, ordered path
//! segments, an ordered multi-valued query map and a fragment. All operations
//! are persistent: they return a new value and leave the receiver untouched.
//!
//! Values pass through unencoded. This is deliberate: `{name}` placeholders
//! must survive rendering so they can be expanded later, and unusual shapes
//! are accepted and rendered as-is.

use crate::core::error::UriError;
use indexmap::IndexMap;
use regex::{Captures, Regex};
use std::collections::HashMap;
use std::fmt;
use std::sync::OnceLock;

fn placeholder_regex() -> &'static Regex {
    static PLACEHOLDER: OnceLock<Regex> = OnceLock::new();
    PLACEHOLDER.get_or_init(|| Regex::new(r"\{([A-Za-z0-9_]+)\}").unwrap())
}

/// Replace `{name}` placeholders present in `vars`, leaving the rest intact
fn expand_str(input: &str, vars: &HashMap<String, String>) -> String {
    placeholder_regex()
        .replace_all(input, |caps: &Captures<'_>| match vars.get(&caps[1]) {
            Some(value) => value.clone(),
            None => caps[0].to_string(),
        })
        .into_owned()
}

/// An immutable parsed URI
///
/// Invariant: re-parsing a rendered URI yields an equal component set.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct UriComponents {
    scheme: Option<String>,
    authority: Option<String>,
    path_segments: Vec<String>,
    /// Query parameter name -> ordered value list
    query: IndexMap<String, Vec<String>>,
    fragment: Option<String>,
    /// Whether the path is rendered with a leading slash
    rooted: bool,
}

impl UriComponents {
    /// Parse a URI string into components
    ///
    /// Accepts absolute URIs (`scheme://authority/path`), rooted paths and
    /// relative references. The only rejected shape is an empty scheme
    /// (`://...`); everything else, including `{name}` placeholders, passes
    /// through untouched.
    pub fn parse(uri: &str) -> Result<Self, UriError> {
        let (rest, fragment) = match uri.split_once('#') {
            Some((before, after)) => (before, Some(after.to_string())),
            None => (uri, None),
        };

        let (rest, query_str) = match rest.split_once('?') {
            Some((before, after)) => (before, Some(after)),
            None => (rest, None),
        };

        let (scheme, authority, path) = match rest.split_once("://") {
            Some((scheme, _)) if scheme.is_empty() => {
                return Err(UriError::MissingScheme {
                    uri: uri.to_string(),
                });
            }
            Some((scheme, after)) => match after.find('/') {
                Some(index) => (
                    Some(scheme.to_string()),
                    Some(after[..index].to_string()),
                    &after[index..],
                ),
                None => (Some(scheme.to_string()), Some(after.to_string()), ""),
            },
            None => (None, None, rest),
        };

        let rooted = path.starts_with('/');
        let trimmed = path.strip_prefix('/').unwrap_or(path);
        let path_segments: Vec<String> = if trimmed.is_empty() {
            Vec::new()
        } else {
            trimmed.split('/').map(String::from).collect()
        };

        let mut query: IndexMap<String, Vec<String>> = IndexMap::new();
        if let Some(query_str) = query_str {
            for pair in query_str.split('&').filter(|p| !p.is_empty()) {
                let (name, value) = pair.split_once('=').unwrap_or((pair, ""));
                query
                    .entry(name.to_string())
                    .or_default()
                    .push(value.to_string());
            }
        }

        tracing::trace!(uri, "parsed URI components");

        Ok(Self {
            scheme,
            authority,
            path_segments,
            query,
            fragment,
            rooted,
        })
    }

    pub fn scheme(&self) -> Option<&str> {
        self.scheme.as_deref()
    }

    pub fn authority(&self) -> Option<&str> {
        self.authority.as_deref()
    }

    /// The path segments in order, without separators
    pub fn path_segments(&self) -> &[String] {
        &self.path_segments
    }

    /// The rendered path portion
    pub fn path(&self) -> String {
        if self.path_segments.is_empty() {
            return if self.rooted { "/".to_string() } else { String::new() };
        }
        let joined = self.path_segments.join("/");
        if self.rooted {
            format!("/{joined}")
        } else {
            joined
        }
    }

    /// Query parameters: name -> ordered value list
    pub fn query(&self) -> &IndexMap<String, Vec<String>> {
        &self.query
    }

    pub fn fragment(&self) -> Option<&str> {
        self.fragment.as_deref()
    }

    /// Append a single path segment
    pub fn push_segment(&self, segment: impl Into<String>) -> Self {
        let mut next = self.clone();
        if next.authority.is_some() {
            next.rooted = true;
        }
        next.path_segments.push(segment.into());
        next
    }

    /// Append a query parameter value, keeping earlier values for the name
    pub fn append_query(&self, name: impl Into<String>, value: impl Into<String>) -> Self {
        let mut next = self.clone();
        next.query.entry(name.into()).or_default().push(value.into());
        next
    }

    /// Replace the fragment
    pub fn with_fragment(&self, fragment: impl Into<String>) -> Self {
        let mut next = self.clone();
        next.fragment = Some(fragment.into());
        next
    }

    /// Append `other`'s path segments and query parameters onto this value;
    /// `other`'s fragment wins when present
    pub fn merge(&self, other: &UriComponents) -> Self {
        let mut next = self.clone();
        for segment in &other.path_segments {
            next = next.push_segment(segment.clone());
        }
        for (name, values) in &other.query {
            for value in values {
                next = next.append_query(name.clone(), value.clone());
            }
        }
        if other.fragment.is_some() {
            next.fragment = other.fragment.clone();
        }
        next
    }

    /// Partially expand `{name}` placeholders in path segments, query
    /// parameters and the fragment
    ///
    /// Names missing from `vars` keep their placeholder, so expansion can be
    /// applied in several passes.
    pub fn expand(&self, vars: &HashMap<String, String>) -> Self {
        if vars.is_empty() {
            return self.clone();
        }

        let path_segments = self
            .path_segments
            .iter()
            .map(|segment| expand_str(segment, vars))
            .collect();
        let query = self
            .query
            .iter()
            .map(|(name, values)| {
                (
                    expand_str(name, vars),
                    values.iter().map(|value| expand_str(value, vars)).collect(),
                )
            })
            .collect();
        let fragment = self
            .fragment
            .as_ref()
            .map(|fragment| expand_str(fragment, vars));

        tracing::trace!(count = vars.len(), "expanded URI template variables");

        Self {
            scheme: self.scheme.clone(),
            authority: self.authority.clone(),
            path_segments,
            query,
            fragment,
            rooted: self.rooted,
        }
    }

    /// Whether any `{name}` placeholder remains unresolved
    pub fn is_templated(&self) -> bool {
        placeholder_regex().is_match(&self.to_uri_string())
    }

    /// Render the components back into a URI string
    pub fn to_uri_string(&self) -> String {
        let mut out = String::new();

        if let Some(scheme) = &self.scheme {
            out.push_str(scheme);
            out.push_str("://");
        }
        if let Some(authority) = &self.authority {
            out.push_str(authority);
        }

        out.push_str(&self.path());

        if !self.query.is_empty() {
            out.push('?');
            let mut first = true;
            for (name, values) in &self.query {
                for value in values {
                    if !first {
                        out.push('&');
                    }
                    out.push_str(name);
                    out.push('=');
                    out.push_str(value);
                    first = false;
                }
            }
        }

        if let Some(fragment) = &self.fragment {
            out.push('#');
            out.push_str(fragment);
        }

        out
    }
}

impl fmt::Display for UriComponents {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_uri_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roundtrip(uri: &str) {
        let components = UriComponents::parse(uri).unwrap();
        let rendered = components.to_uri_string();
        let reparsed = UriComponents::parse(&rendered).unwrap();
        assert_eq!(components, reparsed, "round-trip failed for: {uri}");
    }

    #[test]
    fn test_parse_absolute_uri() {
        let components = UriComponents::parse("https://api.example.com/users/42?active=true#top")
            .unwrap();

        assert_eq!(components.scheme(), Some("https"));
        assert_eq!(components.authority(), Some("api.example.com"));
        assert_eq!(components.path_segments(), ["users", "42"]);
        assert_eq!(components.query().get("active").unwrap(), &["true"]);
        assert_eq!(components.fragment(), Some("top"));
    }

    #[test]
    fn test_roundtrip_shapes() {
        roundtrip("https://api.example.com/users/42?active=true#top");
        roundtrip("https://api.example.com");
        roundtrip("https://api.example.com/");
        roundtrip("/users/42");
        roundtrip("users");
        roundtrip("");
        roundtrip("/a//b/");
        roundtrip("https://h/p?multi=1&multi=2&other=x");
        roundtrip("/orders/{id}");
    }

    #[test]
    fn test_empty_scheme_rejected() {
        let err = UriComponents::parse("://example.com").unwrap_err();
        assert_eq!(err.error_code(), "URI_MISSING_SCHEME");
    }

    #[test]
    fn test_push_segment_is_persistent() {
        let base = UriComponents::parse("https://api.example.com").unwrap();
        let derived = base.push_segment("users");

        assert_eq!(base.to_uri_string(), "https://api.example.com");
        assert_eq!(derived.to_uri_string(), "https://api.example.com/users");
    }

    #[test]
    fn test_repeated_query_values_keep_order() {
        let components = UriComponents::parse("/items")
            .unwrap()
            .append_query("tag", "a")
            .append_query("tag", "b")
            .append_query("page", "1");

        assert_eq!(components.to_uri_string(), "/items?tag=a&tag=b&page=1");
    }

    #[test]
    fn test_valueless_query_parameter() {
        let components = UriComponents::parse("/items?flag").unwrap();
        assert_eq!(components.query().get("flag").unwrap(), &[""]);
        assert_eq!(components.to_uri_string(), "/items?flag=");
    }

    #[test]
    fn test_merge_appends_and_fragment_wins() {
        let base = UriComponents::parse("https://h/a?x=1#old").unwrap();
        let other = UriComponents::parse("b/c?y=2#new").unwrap();
        let merged = base.merge(&other);

        assert_eq!(merged.to_uri_string(), "https://h/a/b/c?x=1&y=2#new");
    }

    #[test]
    fn test_merge_keeps_fragment_when_other_has_none() {
        let base = UriComponents::parse("/a#keep").unwrap();
        let merged = base.merge(&UriComponents::parse("b").unwrap());
        assert_eq!(merged.fragment(), Some("keep"));
    }

    #[test]
    fn test_partial_expansion() {
        let components = UriComponents::parse("/orders/{id}/lines/{line}?sort={field}").unwrap();
        let vars = HashMap::from([("id".to_string(), "42".to_string())]);
        let expanded = components.expand(&vars);

        assert_eq!(expanded.to_uri_string(), "/orders/42/lines/{line}?sort={field}");
        assert!(expanded.is_templated());

        let rest = HashMap::from([
            ("line".to_string(), "7".to_string()),
            ("field".to_string(), "total".to_string()),
        ]);
        let fully = expanded.expand(&rest);
        assert_eq!(fully.to_uri_string(), "/orders/42/lines/7?sort=total");
        assert!(!fully.is_templated());
    }

    #[test]
    fn test_expand_is_idempotent_once_resolved() {
        let components = UriComponents::parse("/orders/{id}").unwrap();
        let vars = HashMap::from([("id".to_string(), "42".to_string())]);
        let once = components.expand(&vars);
        let twice = once.expand(&vars);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_malformed_template_syntax_passes_through() {
        let components = UriComponents::parse("/odd/{unclosed/and}stray").unwrap();
        assert_eq!(components.to_uri_string(), "/odd/{unclosed/and}stray");
    }

    #[test]
    fn test_trailing_slash_preserved() {
        let components = UriComponents::parse("https://h/a/").unwrap();
        assert_eq!(components.path_segments(), ["a", ""]);
        assert_eq!(components.to_uri_string(), "https://h/a/");
    }
}
