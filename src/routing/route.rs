//! Route definitions and the records that feed the index.

use std::fmt;
use std::sync::Arc;

use indexmap::IndexMap;
use smol_str::SmolStr;

/// Reserved options key marking a route as aliasable.
///
/// Aliasing is opt-in per route: resolution only ever returns routes that
/// carry this key. Presence is what matters, the stored value is ignored.
pub const ALIAS_OPT_IN: &str = "routescope.alias_opt_in";

/// A scalar value stored in a route's options map.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OptionValue {
    String(Arc<str>),
    Integer(i64),
    Boolean(bool),
}

impl fmt::Display for OptionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionValue::String(s) => write!(f, "{s}"),
            OptionValue::Integer(i) => write!(f, "{i}"),
            OptionValue::Boolean(b) => write!(f, "{b}"),
        }
    }
}

impl From<&str> for OptionValue {
    fn from(value: &str) -> Self {
        OptionValue::String(Arc::from(value))
    }
}

impl From<i64> for OptionValue {
    fn from(value: i64) -> Self {
        OptionValue::Integer(value)
    }
}

impl From<bool> for OptionValue {
    fn from(value: bool) -> Self {
        OptionValue::Boolean(value)
    }
}

/// A route definition as the index sees it.
///
/// The path is opaque here. Matching and URL generation belong to the
/// routing framework; this crate only cares about the name a route was
/// registered under and the options that travel with it.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Route {
    path: Arc<str>,
    #[cfg_attr(feature = "serde", serde(default))]
    options: IndexMap<SmolStr, OptionValue>,
}

impl Route {
    /// Create a route with the given path and no options.
    pub fn new(path: impl Into<Arc<str>>) -> Self {
        Self {
            path: path.into(),
            options: IndexMap::new(),
        }
    }

    /// Add an option, replacing any earlier value for the key.
    pub fn with_option(mut self, key: impl Into<SmolStr>, value: impl Into<OptionValue>) -> Self {
        self.options.insert(key.into(), value.into());
        self
    }

    /// Shorthand for opting the route into alias resolution.
    pub fn aliasable(self) -> Self {
        self.with_option(ALIAS_OPT_IN, true)
    }

    /// The route's path pattern.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Look up an option value.
    pub fn option(&self, key: &str) -> Option<&OptionValue> {
        self.options.get(key)
    }

    /// Whether the key is present, whatever its value.
    pub fn has_option(&self, key: &str) -> bool {
        self.options.contains_key(key)
    }

    /// Whether the route opted into alias resolution.
    ///
    /// Key presence only. [`ALIAS_OPT_IN`] set to `false` still counts as
    /// opted in.
    pub fn allows_alias(&self) -> bool {
        self.has_option(ALIAS_OPT_IN)
    }

    /// Iterate the options in insertion order.
    pub fn options(&self) -> impl Iterator<Item = (&SmolStr, &OptionValue)> {
        self.options.iter()
    }
}

/// One row of a route table dump.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RouteRecord {
    /// The name the route was registered under.
    pub name: SmolStr,
    /// The route definition itself.
    pub route: Route,
    /// Fully qualified handler identifier, e.g.
    /// `App::Blog::PostHandler::show`. Records without one cannot be
    /// attributed to a namespace.
    #[cfg_attr(feature = "serde", serde(default))]
    pub handler: Option<Arc<str>>,
}

impl RouteRecord {
    /// Create a record with a handler attached.
    pub fn new(name: impl Into<SmolStr>, route: Route, handler: impl Into<Arc<str>>) -> Self {
        Self {
            name: name.into(),
            route,
            handler: Some(handler.into()),
        }
    }

    /// Create a record with no handler. Such records are skipped when
    /// building an index.
    pub fn without_handler(name: impl Into<SmolStr>, route: Route) -> Self {
        Self {
            name: name.into(),
            route,
            handler: None,
        }
    }
}
