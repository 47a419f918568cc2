//! Namespace-keyed route index with ancestor registration.

use std::sync::Arc;

use indexmap::IndexMap;
use rustc_hash::FxHashMap;
use smol_str::SmolStr;
use tracing::{debug, trace};

use crate::base;
use crate::error::LookupError;

use super::route::{Route, RouteRecord};

/// Routes grouped by owning namespace, with every ancestor indexed.
///
/// Registration walks the owner's ancestor chain and files the route at
/// each level. That trades memory for lookup: [`RouteIndex::routes_at`]
/// is a single hash probe at any depth, and a namespace's bucket already
/// aggregates everything owned by it or any descendant.
#[derive(Clone, Debug, Default)]
pub struct RouteIndex {
    by_namespace: FxHashMap<Arc<str>, IndexMap<SmolStr, Arc<Route>>>,
}

impl RouteIndex {
    /// Create an empty index.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build an index from a dumped route table.
    ///
    /// The owner namespace of each record is derived from its handler
    /// identifier: everything before the last separator. Records without
    /// a handler, or with a separator-less one, have no derivable owner
    /// and are skipped.
    pub fn from_route_table(records: impl IntoIterator<Item = RouteRecord>) -> Self {
        let mut index = Self::new();
        let mut indexed = 0usize;
        let mut skipped = 0usize;

        for RouteRecord {
            name,
            route,
            handler,
        } in records
        {
            let Some(handler) = handler.as_deref() else {
                trace!(route = %name, "route has no handler, skipping");
                skipped += 1;
                continue;
            };
            let Some(owner) = base::parent(handler) else {
                trace!(route = %name, handler, "handler has no namespace, skipping");
                skipped += 1;
                continue;
            };
            index.register(owner, name, route);
            indexed += 1;
        }

        debug!(indexed, skipped, "built route index");
        index
    }

    /// File `route` under `name` at `owner_namespace` and every ancestor
    /// of it.
    ///
    /// Registering the same `(namespace, name)` pair again overwrites the
    /// earlier route at each level, last write wins. An empty owner
    /// namespace registers nothing.
    pub fn register(&mut self, owner_namespace: &str, name: impl Into<SmolStr>, route: Route) {
        let name = name.into();
        let route = Arc::new(route);
        for namespace in base::ancestors(owner_namespace) {
            self.by_namespace
                .entry(Arc::from(namespace))
                .or_default()
                .insert(name.clone(), Arc::clone(&route));
        }
    }

    /// All routes visible at `namespace`: its own plus its descendants'.
    ///
    /// The returned map iterates in registration order at this level.
    /// Namespaces nothing was ever registered under err with
    /// [`LookupError::MissingMapping`].
    pub fn routes_at(
        &self,
        namespace: &str,
    ) -> Result<&IndexMap<SmolStr, Arc<Route>>, LookupError> {
        self.by_namespace
            .get(namespace)
            .ok_or_else(|| LookupError::MissingMapping(Arc::from(namespace)))
    }

    /// Whether `namespace` has anything registered at it.
    pub fn contains_namespace(&self, namespace: &str) -> bool {
        self.by_namespace.contains_key(namespace)
    }

    /// Iterate the indexed namespaces, ancestors included.
    pub fn namespaces(&self) -> impl Iterator<Item = &Arc<str>> {
        self.by_namespace.keys()
    }

    /// Number of indexed namespaces, ancestors included.
    pub fn namespace_count(&self) -> usize {
        self.by_namespace.len()
    }

    /// Check whether nothing has been registered.
    pub fn is_empty(&self) -> bool {
        self.by_namespace.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names_at(index: &RouteIndex, namespace: &str) -> Vec<SmolStr> {
        index
            .routes_at(namespace)
            .map(|routes| routes.keys().cloned().collect())
            .unwrap_or_default()
    }

    #[test]
    fn test_register_multiple_same_namespace() {
        let mut index = RouteIndex::new();
        index.register("App::Blog", "list", Route::new("/list"));
        index.register("App::Blog", "show", Route::new("/show"));

        assert_eq!(names_at(&index, "App::Blog"), ["list", "show"]);
    }

    #[test]
    fn test_register_indexes_every_ancestor() {
        let mut index = RouteIndex::new();
        index.register("App::Blog::Post", "show", Route::new("/show"));

        assert_eq!(names_at(&index, "App::Blog::Post"), ["show"]);
        assert_eq!(names_at(&index, "App::Blog"), ["show"]);
        assert_eq!(names_at(&index, "App"), ["show"]);
        assert_eq!(index.namespace_count(), 3);
    }

    #[test]
    fn test_siblings_aggregate_at_shared_ancestor() {
        let mut index = RouteIndex::new();
        index.register("One::Two::Three", "routename", Route::new("/routename"));
        index.register("One::Two::Three", "routename2", Route::new("/routename2"));
        index.register("One::Two::Free", "otherroutename", Route::new("/otherroutename"));
        index.register("One::Two::Free", "otherroutename2", Route::new("/otherroutename2"));

        assert_eq!(
            names_at(&index, "One::Two"),
            ["routename", "routename2", "otherroutename", "otherroutename2"]
        );
        assert_eq!(names_at(&index, "One::Two::Three"), ["routename", "routename2"]);
        assert_eq!(
            names_at(&index, "One::Two::Free"),
            ["otherroutename", "otherroutename2"]
        );
    }

    #[test]
    fn test_unknown_namespace_is_error() {
        let index = RouteIndex::new();

        assert_eq!(
            index.routes_at("App::Unknown"),
            Err(LookupError::MissingMapping(Arc::from("App::Unknown")))
        );
    }

    #[test]
    fn test_sibling_namespace_not_visible() {
        let mut index = RouteIndex::new();
        index.register("App::Bob", "bob", Route::new("/bob"));
        index.register("App::Tom", "tom", Route::new("/tom"));

        assert_eq!(names_at(&index, "App::Bob"), ["bob"]);
        assert_eq!(names_at(&index, "App::Tom"), ["tom"]);
        assert_eq!(names_at(&index, "App"), ["bob", "tom"]);
    }

    #[test]
    fn test_register_same_name_overwrites() {
        let mut index = RouteIndex::new();
        index.register("App::Blog", "show", Route::new("/old"));
        index.register("App::Blog", "show", Route::new("/new"));

        let routes = index.routes_at("App::Blog").unwrap();
        assert_eq!(routes.len(), 1);
        assert_eq!(routes["show"].path(), "/new");
        // The ancestor level is overwritten too.
        assert_eq!(index.routes_at("App").unwrap()["show"].path(), "/new");
    }

    #[test]
    fn test_register_empty_owner_is_noop() {
        let mut index = RouteIndex::new();
        index.register("", "bob", Route::new("/bob"));

        assert!(index.is_empty());
    }

    #[test]
    fn test_from_route_table() {
        let index = RouteIndex::from_route_table([
            RouteRecord::new("one", Route::new("/one"), "Basic::Handler::one"),
            RouteRecord::new("two", Route::new("/two"), "Basic::Handler::two"),
        ]);

        assert_eq!(names_at(&index, "Basic::Handler"), ["one", "two"]);
        assert_eq!(names_at(&index, "Basic"), ["one", "two"]);
    }

    #[test]
    fn test_from_route_table_skips_unattributable() {
        let index = RouteIndex::from_route_table([
            RouteRecord::without_handler("loose", Route::new("/loose")),
            RouteRecord::new("flat", Route::new("/flat"), "no_separator_here"),
            RouteRecord::new("kept", Route::new("/kept"), "App::Handler::kept"),
        ]);

        assert_eq!(names_at(&index, "App::Handler"), ["kept"]);
        assert_eq!(index.namespace_count(), 2);
    }
}
