//! Dash-grouped display format for tax numbers.

use crate::core::{is_separator, strip_chars};

/// Strip whitespace and hyphens, then group ten characters as
/// `XXX-XXX-XXX-X`.
///
/// Any other length after cleaning is returned as the cleaned string. The
/// characters themselves are not checked; see [`super::validate_tax_no`].
pub fn format_tax_no(tax_no: &str) -> String {
    group(&strip_chars(tax_no, is_separator))
}

pub(super) fn group(cleaned: &str) -> String {
    let chars: Vec<char> = cleaned.chars().collect();
    if chars.len() != 10 {
        return cleaned.to_owned();
    }
    let mut out = String::with_capacity(cleaned.len() + 3);
    for (i, c) in chars.into_iter().enumerate() {
        if matches!(i, 3 | 6 | 9) {
            out.push('-');
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_ten_digits() {
        assert_eq!(format_tax_no("1234567890"), "123-456-789-0");
    }

    #[test]
    fn cleans_before_grouping() {
        assert_eq!(format_tax_no("123 456 7890"), "123-456-789-0");
        assert_eq!(format_tax_no("123-456-7890"), "123-456-789-0");
    }

    #[test]
    fn other_lengths_pass_through_cleaned() {
        assert_eq!(format_tax_no("123456789"), "123456789");
        assert_eq!(format_tax_no("12 345"), "12345");
        assert_eq!(format_tax_no(""), "");
    }

    #[test]
    fn formatting_is_idempotent() {
        let once = format_tax_no("1234567890");
        assert_eq!(format_tax_no(&once), once);
    }
}
