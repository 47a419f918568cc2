//! Route alias resolution.
//!
//! Resolution composes the two maps built at startup:
//!
//! 1. The template path names a tag, and the tag names a namespace
//!    ([`TemplateNamespaceMap`]).
//! 2. The namespace names its candidate routes ([`RouteIndex`]).
//! 3. The short name is matched against candidate names with their
//!    common prefix stripped, longest strip first
//!    ([`AliasResolver::resolve`]).
//!
//! The intermediate steps are exposed as strict queries; only the final
//! `resolve` is lenient.

use std::sync::Arc;

use indexmap::IndexMap;
use smol_str::SmolStr;
use tracing::trace;

use crate::base::longest_common_prefix;
use crate::error::LookupError;
use crate::routing::{Route, RouteIndex};
use crate::template::TemplateNamespaceMap;

/// Query-time alias resolver over a route index and a namespace map.
///
/// Borrows both maps and holds no other state, so one can be built per
/// lookup or kept around, whichever suits the caller.
#[derive(Clone, Debug)]
pub struct AliasResolver<'a> {
    routes: &'a RouteIndex,
    namespaces: &'a TemplateNamespaceMap,
}

impl<'a> AliasResolver<'a> {
    /// Create a resolver over the given maps.
    pub fn new(routes: &'a RouteIndex, namespaces: &'a TemplateNamespaceMap) -> Self {
        Self { routes, namespaces }
    }

    /// Routes visible from the namespace behind `tag`.
    ///
    /// Strict: an unknown tag and an unindexed namespace both err.
    pub fn candidates_for_tag(
        &self,
        tag: &str,
    ) -> Result<&'a IndexMap<SmolStr, Arc<Route>>, LookupError> {
        let namespace = self.namespaces.namespace_for_tag(tag)?;
        self.routes.routes_at(namespace)
    }

    /// Routes visible from the namespace of the template at
    /// `template_path`.
    ///
    /// Strict: a malformed path, an unknown tag, and an unindexed
    /// namespace all err.
    pub fn candidates_for_path(
        &self,
        template_path: &str,
    ) -> Result<&'a IndexMap<SmolStr, Arc<Route>>, LookupError> {
        let tag = self.namespaces.tag_for_path(template_path)?;
        self.candidates_for_tag(tag)
    }

    /// Resolve a short route name against the template at
    /// `template_path`.
    ///
    /// Candidates are the routes visible from the template's namespace.
    /// Their longest common prefix is stripped from each candidate name,
    /// longest strip first, and the first candidate that matches
    /// `short_name` after stripping and has opted into aliasing wins.
    /// When nothing matches, or the template path leads nowhere at all,
    /// `short_name` comes back unchanged. Never fails.
    pub fn resolve(&self, short_name: &str, template_path: &str) -> SmolStr {
        let Ok(candidates) = self.candidates_for_path(template_path) else {
            trace!(short_name, template_path, "no alias candidates, keeping name");
            return short_name.into();
        };

        let prefix = longest_common_prefix(candidates.keys().map(SmolStr::as_str));

        for len in (1..=prefix.len()).rev() {
            for (name, route) in candidates {
                // A strip point inside a multibyte char cannot produce a match.
                let Some(stripped) = name.get(len..) else {
                    continue;
                };
                if stripped == short_name && route.allows_alias() {
                    trace!(short_name, alias = %name, "resolved route alias");
                    return name.clone();
                }
            }
        }

        short_name.into()
    }
}
