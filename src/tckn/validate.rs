use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::options::TcknOptions;
use crate::core::digit_values;

const TCKN_LEN: usize = 11;

/// Why a TCKN was rejected, in the order the rules are checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Error)]
#[serde(rename_all = "camelCase")]
pub enum TcknError {
    #[error("TCKN boş olamaz")]
    Empty,
    #[error("TCKN 11 haneden uzun olamaz")]
    TooLong,
    #[error("TCKN 11 haneli olmalıdır")]
    TooShort,
    #[error("TCKN 0 ile başlayamaz")]
    FirstDigitZero,
    #[error("TCKN sadece rakamlardan oluşmalıdır")]
    NotDigits,
    /// One of the two check digits does not match.
    #[error("Geçersiz TC Kimlik No")]
    InvalidAlgorithm,
}

/// A TCKN that passed every rule, including both check digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Tckn([u8; TCKN_LEN]);

impl Tckn {
    /// The eleven digit values.
    pub fn digits(&self) -> [u8; TCKN_LEN] {
        self.0
    }
}

impl fmt::Display for Tckn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for d in self.0 {
            write!(f, "{d}")?;
        }
        Ok(())
    }
}

impl FromStr for Tckn {
    type Err = TcknError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_tckn(s)
    }
}

/// Flat validation outcome.
///
/// TCKNs are not reformatted, so there is no `formatted` field. On failure
/// `reason` discriminates the rule and `error` holds its configured message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TcknResult {
    pub is_valid: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<TcknError>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl TcknResult {
    fn failure(reason: TcknError, options: &TcknOptions) -> Self {
        Self {
            is_valid: false,
            reason: Some(reason),
            error: Some(options.message(reason).to_owned()),
        }
    }
}

/// Parse a TCKN. The input is taken as-is: no trimming or separator removal.
///
/// Rules apply in order: empty, too long, too short, leading zero,
/// non-digit, check digits. Lengths count characters, not bytes.
pub fn parse_tckn(value: &str) -> Result<Tckn, TcknError> {
    if value.is_empty() {
        return Err(TcknError::Empty);
    }
    let len = value.chars().count();
    if len > TCKN_LEN {
        return Err(TcknError::TooLong);
    }
    if len < TCKN_LEN {
        return Err(TcknError::TooShort);
    }
    if value.starts_with('0') {
        return Err(TcknError::FirstDigitZero);
    }
    let digits = digit_values(value).ok_or(TcknError::NotDigits)?;

    let (first, _) = check_digits(&digits[..9]);
    if first != digits[9] {
        return Err(TcknError::InvalidAlgorithm);
    }
    let sum_of_ten: u32 = digits[..10].iter().sum();
    if sum_of_ten % 10 != digits[10] {
        return Err(TcknError::InvalidAlgorithm);
    }

    let mut out = [0u8; TCKN_LEN];
    for (slot, d) in out.iter_mut().zip(&digits) {
        *slot = *d as u8;
    }
    Ok(Tckn(out))
}

/// Validate a TCKN with the default Turkish messages.
pub fn validate_tckn(value: &str) -> TcknResult {
    validate_tckn_with(value, &TcknOptions::default())
}

/// Validate a TCKN, reporting failures with the messages in `options`.
pub fn validate_tckn_with(value: &str, options: &TcknOptions) -> TcknResult {
    match parse_tckn(value) {
        Ok(_) => {
            log::trace!("tckn accepted");
            TcknResult {
                is_valid: true,
                reason: None,
                error: None,
            }
        }
        Err(reason) => {
            log::debug!("tckn rejected: {reason:?}");
            TcknResult::failure(reason, options)
        }
    }
}

/// Compute the two check digits for the first nine digits of a TCKN.
///
/// Returns `None` unless `first_nine` is exactly nine ASCII digits.
///
/// ```
/// assert_eq!(dogrula::tckn_check_digits("100000001"), Some((4, 6)));
/// ```
pub fn tckn_check_digits(first_nine: &str) -> Option<(u8, u8)> {
    let digits = digit_values(first_nine)?;
    if digits.len() != 9 {
        return None;
    }
    let (first, second) = check_digits(&digits);
    Some((first as u8, second as u8))
}

/// Check digits over nine digit values.
fn check_digits(nine: &[u32]) -> (u32, u32) {
    let odd_sum: i64 = nine.iter().step_by(2).map(|&d| i64::from(d)).sum();
    let even_sum: i64 = nine.iter().skip(1).step_by(2).map(|&d| i64::from(d)).sum();
    let first = (odd_sum * 7 - even_sum).rem_euclid(10) as u32;
    let second = (nine.iter().sum::<u32>() + first) % 10;
    (first, second)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_valid_numbers() {
        for n in ["10000000146", "12345678950", "98765432150"] {
            let tckn = parse_tckn(n).unwrap();
            assert_eq!(tckn.to_string(), n);
        }
    }

    #[test]
    fn negative_intermediate_normalized() {
        // odd sum 1, even sum 9*4: 7 - 36 = -29, normalized to 1
        let (first, _) = check_digits(&[1, 9, 0, 9, 0, 9, 0, 9, 0]);
        assert_eq!(first, 1);
    }

    #[test]
    fn first_check_digit_mismatch() {
        assert_eq!(parse_tckn("10000000156"), Err(TcknError::InvalidAlgorithm));
    }

    #[test]
    fn second_check_digit_mismatch() {
        assert_eq!(parse_tckn("10000000145"), Err(TcknError::InvalidAlgorithm));
    }

    #[test]
    fn leading_zero_checked_before_digits() {
        assert_eq!(parse_tckn("0abcdefghij"), Err(TcknError::FirstDigitZero));
    }

    #[test]
    fn length_counts_characters() {
        // 11 characters, more than 11 bytes
        assert_eq!(parse_tckn("1234567890ş"), Err(TcknError::NotDigits));
    }

    #[test]
    fn check_digit_helper_rejects_bad_input() {
        assert_eq!(tckn_check_digits("12345678"), None);
        assert_eq!(tckn_check_digits("1234567890"), None);
        assert_eq!(tckn_check_digits("12345678a"), None);
        assert_eq!(tckn_check_digits("123456789"), Some((5, 0)));
    }

    #[test]
    fn from_str_roundtrip() {
        let tckn: Tckn = "10000000146".parse().unwrap();
        assert_eq!(tckn.digits()[9..], [4, 6]);
    }
}
