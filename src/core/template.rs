//! URI template variables awaiting substitution
//!
//! A [`TemplateVariables`] set travels with a link builder and is rendered as
//! RFC 6570-style template syntax (e.g. `{?page,size}`) wherever the link is
//! turned into text before the variables have been resolved.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Expansion style of a template variable
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VariableKind {
    /// Plain in-path segment: `{name}`
    Segment,

    /// Slash-prefixed path variable: `{/name}`
    PathVariable,

    /// Query parameter starting a query string: `{?name}`
    RequestParam,

    /// Query parameter appended to an existing query string: `{&name}`
    RequestParamContinued,

    /// Fragment: `{#name}`
    Fragment,

    /// Composite value: `{*name}`
    Composite,
}

impl VariableKind {
    /// The operator rendered before the variable names inside the braces
    pub fn prefix(&self) -> &'static str {
        match self {
            VariableKind::Segment => "",
            VariableKind::PathVariable => "/",
            VariableKind::RequestParam => "?",
            VariableKind::RequestParamContinued => "&",
            VariableKind::Fragment => "#",
            VariableKind::Composite => "*",
        }
    }

    /// Whether a variable of this kind must be supplied for the URI to resolve
    ///
    /// Path-level variables are required; query parameters and fragments are
    /// optional.
    pub fn is_required(&self) -> bool {
        matches!(self, VariableKind::Segment | VariableKind::PathVariable)
    }

    /// Whether a variable of kind `other` can join a brace group of this kind
    fn combinable_with(&self, other: VariableKind) -> bool {
        if *self == other {
            return true;
        }
        matches!(
            (*self, other),
            (VariableKind::RequestParam, VariableKind::RequestParamContinued)
                | (VariableKind::RequestParamContinued, VariableKind::RequestParam)
        )
    }
}

/// A single named template variable
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateVariable {
    /// The placeholder name
    pub name: String,

    /// How the variable expands into the URI
    pub kind: VariableKind,

    /// Optional human-readable description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl TemplateVariable {
    /// Create a variable with no description
    pub fn new(name: impl Into<String>, kind: VariableKind) -> Self {
        Self {
            name: name.into(),
            kind,
            description: None,
        }
    }

    /// Shorthand for a `{?name}` request parameter
    pub fn request_param(name: impl Into<String>) -> Self {
        Self::new(name, VariableKind::RequestParam)
    }

    /// Shorthand for a `{/name}` path variable
    pub fn path_variable(name: impl Into<String>) -> Self {
        Self::new(name, VariableKind::PathVariable)
    }

    /// Attach a description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Whether this variable must be supplied for the URI to resolve
    pub fn is_required(&self) -> bool {
        self.kind.is_required()
    }
}

/// An immutable ordered set of template variables
///
/// The empty set is the [`TemplateVariables::NONE`] sentinel: it renders as
/// nothing and marks a link that carries no unresolved template syntax.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TemplateVariables(Vec<TemplateVariable>);

impl TemplateVariables {
    /// No variables
    pub const NONE: TemplateVariables = TemplateVariables(Vec::new());

    /// Create a variable set, keeping insertion order
    pub fn new(variables: Vec<TemplateVariable>) -> Self {
        Self(variables)
    }

    /// Whether this is the empty sentinel
    pub fn is_none(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of variables in the set
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the set holds no variables
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate the variables in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &TemplateVariable> {
        self.0.iter()
    }

    /// Union merge: append `other`'s variables, skipping any whose name and
    /// kind are already present
    pub fn concat(&self, other: impl IntoIterator<Item = TemplateVariable>) -> Self {
        let mut merged = self.0.clone();
        for variable in other {
            let duplicate = merged
                .iter()
                .any(|existing| existing.name == variable.name && existing.kind == variable.kind);
            if !duplicate {
                merged.push(variable);
            }
        }
        Self(merged)
    }
}

impl From<Vec<TemplateVariable>> for TemplateVariables {
    fn from(variables: Vec<TemplateVariable>) -> Self {
        Self::new(variables)
    }
}

impl FromIterator<TemplateVariable> for TemplateVariables {
    fn from_iter<I: IntoIterator<Item = TemplateVariable>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl IntoIterator for TemplateVariables {
    type Item = TemplateVariable;
    type IntoIter = std::vec::IntoIter<TemplateVariable>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl fmt::Display for TemplateVariables {
    /// Render as brace groups, combining consecutive compatible variables:
    /// `{?page,size}{/id}`. The empty set renders nothing.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut index = 0;
        while index < self.0.len() {
            let group_kind = self.0[index].kind;
            let mut names = vec![self.0[index].name.as_str()];
            let mut next = index + 1;
            while next < self.0.len() && group_kind.combinable_with(self.0[next].kind) {
                names.push(self.0[next].name.as_str());
                next += 1;
            }
            write!(f, "{{{}{}}}", group_kind.prefix(), names.join(","))?;
            index = next;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_none_renders_nothing() {
        assert_eq!(TemplateVariables::NONE.to_string(), "");
        assert!(TemplateVariables::NONE.is_none());
    }

    #[test]
    fn test_single_request_param() {
        let variables = TemplateVariables::new(vec![TemplateVariable::request_param("page")]);
        assert_eq!(variables.to_string(), "{?page}");
    }

    #[test]
    fn test_consecutive_params_share_braces() {
        let variables = TemplateVariables::new(vec![
            TemplateVariable::request_param("page"),
            TemplateVariable::request_param("size"),
        ]);
        assert_eq!(variables.to_string(), "{?page,size}");
    }

    #[test]
    fn test_continued_param_joins_group() {
        let variables = TemplateVariables::new(vec![
            TemplateVariable::request_param("page"),
            TemplateVariable::new("sort", VariableKind::RequestParamContinued),
        ]);
        assert_eq!(variables.to_string(), "{?page,sort}");
    }

    #[test]
    fn test_mixed_kinds_render_separate_groups() {
        let variables = TemplateVariables::new(vec![
            TemplateVariable::path_variable("id"),
            TemplateVariable::request_param("projection"),
        ]);
        assert_eq!(variables.to_string(), "{/id}{?projection}");
    }

    #[test]
    fn test_concat_skips_duplicates() {
        let base = TemplateVariables::new(vec![TemplateVariable::request_param("page")]);
        let merged = base.concat(vec![
            TemplateVariable::request_param("page"),
            TemplateVariable::request_param("size"),
        ]);

        assert_eq!(merged.len(), 2);
        assert_eq!(merged.to_string(), "{?page,size}");
        // the original set is untouched
        assert_eq!(base.len(), 1);
    }

    #[test]
    fn test_concat_keeps_same_name_of_other_kind() {
        let base = TemplateVariables::new(vec![TemplateVariable::request_param("id")]);
        let merged = base.concat(vec![TemplateVariable::path_variable("id")]);
        assert_eq!(merged.len(), 2);
    }

    #[test]
    fn test_required_kinds() {
        assert!(TemplateVariable::path_variable("id").is_required());
        assert!(!TemplateVariable::request_param("page").is_required());
    }
}
