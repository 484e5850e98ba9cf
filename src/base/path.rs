//! Dotted path utilities for package paths and type references.

/// Separator between segments of a package path or type reference.
pub const PACKAGE_SEPARATOR: char = '.';

/// Separator used in generated artifact names.
pub const PATH_SEPARATOR: char = '/';

/// Split a dotted reference at its first separator.
///
/// Returns the first segment and everything after the separator. When the
/// reference has no separator, `rest` is `None`. A trailing separator yields
/// `Some("")`, which no lookup will ever match.
///
/// ```
/// use pipegen::base::split_first;
///
/// assert_eq!(split_first("a.b.C"), ("a", Some("b.C")));
/// assert_eq!(split_first("C"), ("C", None));
/// ```
#[inline]
pub fn split_first(reference: &str) -> (&str, Option<&str>) {
    match reference.split_once(PACKAGE_SEPARATOR) {
        Some((first, rest)) => (first, Some(rest)),
        None => (reference, None),
    }
}

/// Strip the leading dot of an absolute reference.
///
/// Returns `None` for relative references.
#[inline]
pub fn strip_absolute(reference: &str) -> Option<&str> {
    reference.strip_prefix(PACKAGE_SEPARATOR)
}

/// Iterate the segments of a package path.
///
/// Empty segments are skipped while still at the root, so `"foo.bar"` and
/// `".foo.bar"` yield the same segments. Empty segments after the first
/// real segment are kept as-is.
pub fn package_segments(package: &str) -> impl Iterator<Item = &str> {
    package
        .split(PACKAGE_SEPARATOR)
        .skip_while(|segment| segment.is_empty())
}

/// Map a package path to the directory its artifacts are written to.
///
/// Dots become path separators; an absent or empty package maps to the empty
/// directory.
pub fn package_dir(package: Option<&str>) -> String {
    let Some(package) = package else {
        return String::new();
    };
    let package = strip_absolute(package).unwrap_or(package);
    package.replace(PACKAGE_SEPARATOR, &PATH_SEPARATOR.to_string())
}

/// Append `name` to a qualified scope name, producing `scope.name`.
///
/// Qualified names use the leading-dot form: the root's name is empty and
/// its children are `.child`.
pub fn qualify(scope: &str, name: &str) -> String {
    let mut qualified = String::with_capacity(scope.len() + name.len() + 1);
    qualified.push_str(scope);
    qualified.push(PACKAGE_SEPARATOR);
    qualified.push_str(name);
    qualified
}
