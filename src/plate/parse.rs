//! Left-to-right segmentation of a plate into province code, letter block,
//! and digit block.
//!
//! Each segment is matched greedily with a length cap, so a failure
//! names the first segment that could not be found.

use super::validate::PlateError;
use crate::core::{is_separator, strip_chars};

/// Raw segments, before any semantic checks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) struct Segments<'a> {
    /// Zero-padded to two digits.
    pub city_code: String,
    pub letters: &'a str,
    pub numbers: &'a str,
}

const MAX_CITY_DIGITS: usize = 2;
const MAX_RUN: usize = 10;

/// Strip whitespace and hyphens and uppercase.
pub(super) fn normalize(plate: &str) -> String {
    strip_chars(plate, is_separator).to_uppercase()
}

/// Latin capitals plus the Turkish capitals. Not all of them are allowed on
/// a plate; that is checked after parsing.
fn is_plate_letter(c: char) -> bool {
    c.is_ascii_uppercase() || matches!(c, 'Ç' | 'Ğ' | 'İ' | 'Ö' | 'Ş' | 'Ü')
}

/// Split off the longest prefix of at most `max` characters matching `pred`.
fn split_run(s: &str, max: usize, pred: impl Fn(char) -> bool) -> (&str, &str) {
    let mut end = 0;
    for (count, c) in s.chars().enumerate() {
        if count == max || !pred(c) {
            break;
        }
        end += c.len_utf8();
    }
    s.split_at(end)
}

/// Segment a normalized plate.
pub(super) fn parse_segments(normalized: &str) -> Result<Segments<'_>, PlateError> {
    let (code, rest) = split_run(normalized, MAX_CITY_DIGITS, |c| c.is_ascii_digit());
    if code.is_empty() {
        return Err(PlateError::InvalidCityCode);
    }
    let city_code = format!("{code:0>2}");

    let (letters, rest) = split_run(rest, MAX_RUN, is_plate_letter);
    if letters.is_empty() {
        return Err(PlateError::LettersNotFound);
    }

    let (numbers, trailing) = split_run(rest, MAX_RUN, |c| c.is_ascii_digit());
    if numbers.is_empty() {
        return Err(PlateError::DigitsNotFound);
    }
    if !trailing.is_empty() {
        return Err(PlateError::InvalidFormat);
    }

    Ok(Segments {
        city_code,
        letters,
        numbers,
    })
}
