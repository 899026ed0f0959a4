//! Name normalisation.
//!
//! Keys are built from ASCII letters and spaces only, lower-cased.  Both
//! insertion and every query go through [`clean_name`]; a key built any other
//! way would silently never match.

/// Drop every character outside `[a-zA-Z ]` and lower-case the rest.
///
/// Total: any input, including non-ASCII text, maps to some (possibly empty)
/// key.
///
/// ```
/// assert_eq!(nav_search::clean_name("O'Brien Ave."), "obrien ave");
/// ```
pub fn clean_name(s: &str) -> String {
    s.chars()
        .filter(|c| c.is_ascii_alphabetic() || *c == ' ')
        .map(|c| c.to_ascii_lowercase())
        .collect()
}
