//! Base reference name checks

use regex::Regex;
use std::sync::LazyLock;

/// Characters allowed in a reference passed to git as a revision argument
///
/// Revision suffixes (`~`, `^`, `@`) are allowed so that `HEAD~3` works as a
/// base. A leading `-` would be read as an option.
static REFERENCE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^-\s:?*\[\\\x00-\x1F\x7F][^\s:?*\[\\\x00-\x1F\x7F]*$")
        .expect("Invalid reference regex")
});

/// Check whether `name` can be used as the base reference
pub fn is_valid_reference(name: &str) -> bool {
    REFERENCE_REGEX.is_match(name)
        && !name.contains("..")
        && !name.ends_with('/')
        && !name.ends_with(".lock")
}
