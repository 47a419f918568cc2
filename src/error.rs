//! Lookup failures shared by the routing and template layers.

use std::sync::Arc;

use thiserror::Error;

/// A lookup that could not be satisfied.
///
/// Every strict query surface in this crate returns these. Alias
/// resolution ([`crate::AliasResolver::resolve`]) is the one caller that
/// swallows them, falling back to the name it was given.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LookupError {
    /// The consulted map has no entry for the requested key.
    ///
    /// Raised for namespaces that were never registered and for template
    /// tags with no module behind them. Carries the key that missed.
    #[error("no mapping found for `{0}`")]
    MissingMapping(Arc<str>),

    /// The template path is not namespace-qualified.
    ///
    /// A qualified path starts with the tag sigil and separates the tag
    /// from the rest of the path with `/`. Carries the offending path.
    #[error("template path `{0}` is not namespace-qualified")]
    InvalidTemplatePath(Arc<str>),
}

impl LookupError {
    /// The key or path the failed lookup was asked about.
    pub fn subject(&self) -> &str {
        match self {
            LookupError::MissingMapping(key) => key,
            LookupError::InvalidTemplatePath(path) => path,
        }
    }
}
