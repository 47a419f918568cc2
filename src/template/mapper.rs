//! Mapping between template tags, module names, and owning namespaces.

use std::sync::Arc;

use rustc_hash::FxHashMap;
use smol_str::{SmolStr, format_smolstr};
use tracing::debug;

use crate::error::LookupError;

/// Sigil introducing the tag of a namespace-qualified template path.
pub const TEMPLATE_SIGIL: char = '@';

/// Suffix completing a template tag into its module name.
pub const MODULE_SUFFIX: &str = "Bundle";

/// Separator between the tag and the rest of a template path.
const PATH_SEPARATOR: char = '/';

/// One row of a module registry dump.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ModuleRecord {
    /// The module's name, suffix included, e.g. `TwiggyBundle`.
    pub name: SmolStr,
    /// The namespace the module's handlers live in.
    pub namespace: Arc<str>,
}

impl ModuleRecord {
    /// Create a record.
    pub fn new(name: impl Into<SmolStr>, namespace: impl Into<Arc<str>>) -> Self {
        Self {
            name: name.into(),
            namespace: namespace.into(),
        }
    }
}

/// Module-name to namespace mapping with tag-based lookups.
///
/// Templates refer to modules by tag, handlers live in namespaces, and
/// module names bridge the two spellings: a tag plus [`MODULE_SUFFIX`] is
/// a module name, and each module name maps to one namespace.
#[derive(Clone, Debug, Default)]
pub struct TemplateNamespaceMap {
    by_module: FxHashMap<SmolStr, Arc<str>>,
}

impl TemplateNamespaceMap {
    /// Create an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a map from a module registry dump.
    pub fn from_module_registry(modules: impl IntoIterator<Item = ModuleRecord>) -> Self {
        let mut map = Self::new();
        let mut count = 0usize;
        for module in modules {
            map.add(module.name, module.namespace);
            count += 1;
        }
        debug!(modules = count, "built template namespace map");
        map
    }

    /// Map a module name to the namespace its handlers live in.
    ///
    /// The name is stored as given, suffix included. Mapping the same
    /// name again replaces the earlier namespace, last write wins.
    pub fn add(&mut self, module_name: impl Into<SmolStr>, namespace: impl Into<Arc<str>>) {
        self.by_module.insert(module_name.into(), namespace.into());
    }

    /// The namespace behind a template tag.
    ///
    /// The tag is completed with [`MODULE_SUFFIX`] before lookup, so
    /// `"Twiggy"` finds the module registered as `"TwiggyBundle"`. Tags
    /// of unregistered modules err with [`LookupError::MissingMapping`],
    /// carrying the tag as given.
    pub fn namespace_for_tag(&self, tag: &str) -> Result<&Arc<str>, LookupError> {
        let module_name = format_smolstr!("{tag}{MODULE_SUFFIX}");
        self.by_module
            .get(module_name.as_str())
            .ok_or_else(|| LookupError::MissingMapping(Arc::from(tag)))
    }

    /// The tag of a namespace-qualified template path.
    ///
    /// A qualified path starts with [`TEMPLATE_SIGIL`] and separates the
    /// tag from the rest with `/`: the tag of `"@Twiggy/Path/file.html"`
    /// is `"Twiggy"`. Paths missing the sigil or the separator err with
    /// [`LookupError::InvalidTemplatePath`].
    pub fn tag_for_path<'p>(&self, path: &'p str) -> Result<&'p str, LookupError> {
        let tagged = path
            .strip_prefix(TEMPLATE_SIGIL)
            .ok_or_else(|| LookupError::InvalidTemplatePath(Arc::from(path)))?;
        let (tag, _) = tagged
            .split_once(PATH_SEPARATOR)
            .ok_or_else(|| LookupError::InvalidTemplatePath(Arc::from(path)))?;
        Ok(tag)
    }

    /// Iterate the known module names and their namespaces.
    pub fn modules(&self) -> impl Iterator<Item = (&SmolStr, &Arc<str>)> {
        self.by_module.iter()
    }

    /// Number of known modules.
    pub fn len(&self) -> usize {
        self.by_module.len()
    }

    /// Check whether no module is known.
    pub fn is_empty(&self) -> bool {
        self.by_module.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_namespace_for_tag() {
        let mut map = TemplateNamespaceMap::new();
        map.add("TwiggyBundle", "App::Twiggy");

        let namespace = map.namespace_for_tag("Twiggy").unwrap();
        assert_eq!(namespace.as_ref(), "App::Twiggy");
    }

    #[test]
    fn test_namespace_for_unknown_tag() {
        let map = TemplateNamespaceMap::new();

        assert_eq!(
            map.namespace_for_tag("Twiggy"),
            Err(LookupError::MissingMapping(Arc::from("Twiggy")))
        );
    }

    #[test]
    fn test_empty_tag_looks_up_bare_suffix() {
        let mut map = TemplateNamespaceMap::new();
        map.add("Bundle", "App::Anonymous");

        let namespace = map.namespace_for_tag("").unwrap();
        assert_eq!(namespace.as_ref(), "App::Anonymous");
    }

    #[test]
    fn test_add_same_module_overwrites() {
        let mut map = TemplateNamespaceMap::new();
        map.add("TwiggyBundle", "App::Old");
        map.add("TwiggyBundle", "App::New");

        assert_eq!(map.len(), 1);
        assert_eq!(map.namespace_for_tag("Twiggy").unwrap().as_ref(), "App::New");
    }

    #[test]
    fn test_from_module_registry() {
        let map = TemplateNamespaceMap::from_module_registry([
            ModuleRecord::new("CoatBundle", "App::Web::Coat"),
            ModuleRecord::new("PackageBundle", "App::Bundle::Package"),
        ]);

        assert_eq!(map.len(), 2);
        assert_eq!(map.namespace_for_tag("Coat").unwrap().as_ref(), "App::Web::Coat");
        assert_eq!(
            map.namespace_for_tag("Package").unwrap().as_ref(),
            "App::Bundle::Package"
        );
    }

    #[test]
    fn test_tag_for_path() {
        let map = TemplateNamespaceMap::new();

        assert_eq!(map.tag_for_path("@Valid/Path/thing.html").unwrap(), "Valid");
        assert_eq!(map.tag_for_path("@Tag/file.html").unwrap(), "Tag");
    }

    #[test]
    fn test_tag_for_path_without_sigil() {
        let map = TemplateNamespaceMap::new();

        assert_eq!(
            map.tag_for_path("invalid/path"),
            Err(LookupError::InvalidTemplatePath(Arc::from("invalid/path")))
        );
    }

    #[test]
    fn test_tag_for_path_without_separator() {
        let map = TemplateNamespaceMap::new();

        assert_eq!(
            map.tag_for_path("@Twiggy"),
            Err(LookupError::InvalidTemplatePath(Arc::from("@Twiggy")))
        );
    }

    #[test]
    fn test_tag_for_path_with_empty_tag() {
        let map = TemplateNamespaceMap::new();

        assert_eq!(map.tag_for_path("@/views/thing.html").unwrap(), "");
    }
}
