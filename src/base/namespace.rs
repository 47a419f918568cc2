//! Hierarchical namespace ancestry.
//!
//! Namespaces and handler identifiers share one segment separator, so a
//! handler's owning namespace is simply its [`parent`].

/// Separator between segments of a hierarchical name.
pub const SEPARATOR: &str = "::";

/// Everything before the last separator of a qualified name.
///
/// ```
/// use routescope::base::parent;
///
/// assert_eq!(parent("App::Blog::PostHandler"), Some("App::Blog"));
/// assert_eq!(parent("App"), None);
/// ```
///
/// Applied to a handler identifier like `App::Blog::PostHandler::show`,
/// this yields the namespace that owns the handler.
pub fn parent(qualified: &str) -> Option<&str> {
    qualified.rfind(SEPARATOR).map(|idx| &qualified[..idx])
}

/// Iterate a qualified name and its enclosing namespaces, innermost first.
///
/// Yields the name itself, then each parent, ending at the root segment.
/// The empty string is never yielded; iterating `""` yields nothing.
pub fn ancestors(qualified: &str) -> Ancestors<'_> {
    Ancestors {
        next: (!qualified.is_empty()).then_some(qualified),
    }
}

/// Iterator returned by [`ancestors`].
#[derive(Clone, Debug)]
pub struct Ancestors<'a> {
    next: Option<&'a str>,
}

impl<'a> Iterator for Ancestors<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        let current = self.next?;
        self.next = parent(current).filter(|p| !p.is_empty());
        Some(current)
    }
}
