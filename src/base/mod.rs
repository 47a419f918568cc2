//! Foundation utilities for route and namespace handling.
//!
//! This module provides the string-level primitives the rest of the crate
//! builds on:
//! - [`SEPARATOR`], [`parent`], [`ancestors`] - namespace ancestry
//! - [`longest_common_prefix`] - shared-prefix computation
//!
//! This module has NO dependencies on other routescope modules.

mod namespace;
mod prefix;

pub use namespace::{Ancestors, SEPARATOR, ancestors, parent};
pub use prefix::longest_common_prefix;
