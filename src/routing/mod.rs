//! Route definitions and namespace-keyed indexing.
//!
//! - [`Route`], [`OptionValue`], [`ALIAS_OPT_IN`] - the route model
//! - [`RouteRecord`] - rows of a dumped route table
//! - [`RouteIndex`] - routes grouped by owning namespace and its ancestors

mod index;
mod route;

pub use index::RouteIndex;
pub use route::{ALIAS_OPT_IN, OptionValue, Route, RouteRecord};
