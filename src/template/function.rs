//! The callable surface template engines register.

use std::sync::Arc;

use smol_str::SmolStr;

use crate::resolve::AliasResolver;
use crate::routing::RouteIndex;

use super::mapper::TemplateNamespaceMap;

/// A named template function resolving route aliases.
///
/// Owns shared handles to the route index and the namespace map so it
/// can be handed to a template engine wholesale. Each call builds a
/// throwaway [`AliasResolver`]; the function itself keeps no per-call
/// state, so sharing one instance across threads is fine.
#[derive(Clone, Debug)]
pub struct AliasFunction {
    routes: Arc<RouteIndex>,
    namespaces: Arc<TemplateNamespaceMap>,
    name: SmolStr,
}

impl AliasFunction {
    /// Name the function registers under when none is configured.
    pub const DEFAULT_NAME: &'static str = "bundle_route";

    /// Create the function with the default name.
    pub fn new(routes: Arc<RouteIndex>, namespaces: Arc<TemplateNamespaceMap>) -> Self {
        Self {
            routes,
            namespaces,
            name: SmolStr::new_static(Self::DEFAULT_NAME),
        }
    }

    /// Override the name the function registers under.
    pub fn with_name(mut self, name: impl Into<SmolStr>) -> Self {
        self.name = name.into();
        self
    }

    /// The name to register the function under.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Resolve `route` against the template at `template_path`.
    ///
    /// Infallible: whatever goes wrong, `route` comes back unchanged.
    pub fn call(&self, route: &str, template_path: &str) -> SmolStr {
        AliasResolver::new(&self.routes, &self.namespaces).resolve(route, template_path)
    }

    /// Convert into a plain closure for engines that register bare `Fn`s.
    pub fn into_callable(self) -> impl Fn(&str, &str) -> SmolStr + Send + Sync + 'static {
        move |route, template_path| self.call(route, template_path)
    }
}
