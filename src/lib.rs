//! # routescope-base
//!
//! Core library for namespace-scoped route indexing and template route
//! alias resolution.
//!
//! Templates inside a module refer to the module's routes by short name;
//! the routing layer knows them by longer, prefixed names. This crate
//! bridges the two: it indexes routes by the namespace of their handlers,
//! maps template paths to those namespaces, and resolves short names to
//! full route names by stripping the candidates' common prefix.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! resolve   → Alias resolution over the two maps
//!   ↓
//! template  → Template path / tag / namespace mapping, engine surface
//!   ↓
//! routing   → Route model and the namespace route index
//!   ↓
//! base      → Primitives (namespace ancestry, common prefix)
//! ```
//!
//! ## Quick Start
//!
//! ```
//! use routescope::{AliasResolver, Route, RouteIndex, TemplateNamespaceMap};
//!
//! let mut routes = RouteIndex::new();
//! routes.register("App::Twiggy", "twiggy_bob", Route::new("/bob").aliasable());
//! routes.register("App::Twiggy", "twiggy_rob", Route::new("/rob").aliasable());
//!
//! let mut namespaces = TemplateNamespaceMap::new();
//! namespaces.add("TwiggyBundle", "App::Twiggy");
//!
//! let resolver = AliasResolver::new(&routes, &namespaces);
//! assert_eq!(resolver.resolve("bob", "@Twiggy/views/show.html"), "twiggy_bob");
//! ```

/// Foundation utilities: namespace ancestry, common prefix
pub mod base;

/// Lookup error shared by the layers above
pub mod error;

/// Route model and the namespace-keyed route index
pub mod routing;

/// Template-side mapping and the engine-facing function
pub mod template;

/// Alias resolution composing routing and template
pub mod resolve;

// Re-export the working surface
pub use error::LookupError;
pub use resolve::AliasResolver;
pub use routing::{ALIAS_OPT_IN, OptionValue, Route, RouteIndex, RouteRecord};
pub use template::{AliasFunction, ModuleRecord, TemplateNamespaceMap};
