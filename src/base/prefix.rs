//! Longest-common-prefix computation over sets of names.

/// Compute the longest prefix shared by every string in `strings`.
///
/// Fewer than two strings means there is nothing to share: empty and
/// single-element inputs return `""`. Comparison is literal (byte-exact,
/// case-sensitive, no normalization) and shortening steps on `char`
/// boundaries. The result borrows from the first element, so no
/// allocation happens.
pub fn longest_common_prefix<'a>(strings: impl IntoIterator<Item = &'a str>) -> &'a str {
    let mut strings = strings.into_iter();
    let Some(mut prefix) = strings.next() else {
        return "";
    };

    let mut saw_second = false;
    for s in strings {
        saw_second = true;
        while !s.starts_with(prefix) {
            // Drop one char from the end; a common prefix never splits one.
            let mut shortened = prefix.chars();
            shortened.next_back();
            prefix = shortened.as_str();
            if prefix.is_empty() {
                return "";
            }
        }
    }

    if saw_second { prefix } else { "" }
}
