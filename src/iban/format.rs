//! IBAN cleaning and print formatting.

use super::validate::IBAN_LEN;
use crate::core::{group_chars, is_separator, strip_chars};

/// Strip whitespace and hyphens, uppercase.
pub(super) fn clean(iban: &str) -> String {
    strip_chars(iban, is_separator).to_uppercase()
}

pub(super) fn group(cleaned: &str) -> String {
    group_chars(cleaned, 4, ' ')
}

/// Print form in space-separated groups of four.
///
/// Only a cleaned length of 26 is grouped. Anything else is returned
/// exactly as given. The checksum is not verified.
///
/// ```
/// assert_eq!(
///     dogrula::format_iban("tr330006100519786457841326"),
///     "TR33 0006 1005 1978 6457 8413 26"
/// );
/// assert_eq!(dogrula::format_iban("TR33 0006"), "TR33 0006");
/// ```
pub fn format_iban(iban: &str) -> String {
    let cleaned = clean(iban);
    if cleaned.chars().count() != IBAN_LEN {
        return iban.to_owned();
    }
    group(&cleaned)
}
