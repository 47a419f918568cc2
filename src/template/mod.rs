//! Template-side surfaces: tag mapping and the exposed function.
//!
//! - [`TemplateNamespaceMap`], [`ModuleRecord`] - tag and path lookups
//! - [`AliasFunction`] - the callable handed to a template engine

mod function;
mod mapper;

pub use function::AliasFunction;
pub use mapper::{MODULE_SUFFIX, ModuleRecord, TEMPLATE_SIGIL, TemplateNamespaceMap};
