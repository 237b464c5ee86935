use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::format::group;
use crate::core::{Checksum, digit_values, is_all_digits, is_blank, is_separator, strip_chars};

const TAX_NO_LEN: usize = 10;

/// Why a tax number was rejected, in the order the rules are checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum TaxNoError {
    #[error("Vergi numarası boş olamaz")]
    Empty,
    #[error("Vergi numarası sadece rakam içermelidir")]
    NotDigits,
    #[error("Vergi numarası 10 haneli olmalıdır")]
    TooShort,
    #[error("Vergi numarası 10 haneden uzun olamaz")]
    TooLong,
    /// Leading zero on a non-corporate number.
    #[error("Vergi numarası 0 ile başlayamaz")]
    LeadingZero,
    #[error("Geçersiz vergi numarası")]
    Checksum,
}

impl TaxNoError {
    /// Tri-state checksum outcome implied by this error: `Some(false)` when
    /// the check digit was computed and mismatched, `None` otherwise.
    pub fn checksum(&self) -> Checksum {
        match self {
            Self::Checksum => Some(false),
            _ => None,
        }
    }
}

/// Tax number validation settings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TaxNoOptions {
    /// Allow a leading zero. Some corporate and public registries issue
    /// numbers starting with `0`.
    pub is_corporate: bool,
}

impl TaxNoOptions {
    /// Options for corporate numbers (leading zero allowed).
    pub fn corporate() -> Self {
        Self { is_corporate: true }
    }
}

/// A ten-digit tax number with a matching check digit.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TaxNumber(String);

impl TaxNumber {
    /// The ten digits without separators.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Grouped display form, `XXX-XXX-XXX-X`.
    pub fn formatted(&self) -> String {
        group(&self.0)
    }
}

impl fmt::Display for TaxNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.formatted())
    }
}

impl FromStr for TaxNumber {
    type Err = TaxNoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_tax_no(s)
    }
}

/// Flat validation outcome.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaxNoResult {
    pub valid: bool,
    pub formatted: Option<String>,
    pub message: String,
    pub checksum: Checksum,
}

impl TaxNoResult {
    fn failure(err: TaxNoError) -> Self {
        Self {
            valid: false,
            formatted: None,
            message: err.to_string(),
            checksum: err.checksum(),
        }
    }
}

/// Parse a non-corporate tax number.
pub fn parse_tax_no(tax_no: &str) -> Result<TaxNumber, TaxNoError> {
    parse_tax_no_with(tax_no, TaxNoOptions::default())
}

/// Parse a tax number.
///
/// Whitespace and hyphens are stripped first. Rules apply in order: empty,
/// non-digit, too short, too long, leading zero (unless corporate),
/// check digit.
pub fn parse_tax_no_with(tax_no: &str, options: TaxNoOptions) -> Result<TaxNumber, TaxNoError> {
    if is_blank(tax_no) {
        return Err(TaxNoError::Empty);
    }

    let cleaned = strip_chars(tax_no, is_separator);
    if !is_all_digits(&cleaned) {
        return Err(TaxNoError::NotDigits);
    }
    if cleaned.len() < TAX_NO_LEN {
        return Err(TaxNoError::TooShort);
    }
    if cleaned.len() > TAX_NO_LEN {
        return Err(TaxNoError::TooLong);
    }
    if !options.is_corporate && cleaned.starts_with('0') {
        return Err(TaxNoError::LeadingZero);
    }

    let digits = digit_values(&cleaned).ok_or(TaxNoError::NotDigits)?;
    if check_digit(&digits[..9]) != digits[9] {
        return Err(TaxNoError::Checksum);
    }
    Ok(TaxNumber(cleaned))
}

/// Validate a non-corporate tax number.
pub fn validate_tax_no(tax_no: &str) -> TaxNoResult {
    validate_tax_no_with(tax_no, TaxNoOptions::default())
}

/// Validate a tax number with explicit options.
pub fn validate_tax_no_with(tax_no: &str, options: TaxNoOptions) -> TaxNoResult {
    match parse_tax_no_with(tax_no, options) {
        Ok(number) => {
            log::trace!("tax number accepted (corporate: {})", options.is_corporate);
            TaxNoResult {
                valid: true,
                formatted: Some(number.formatted()),
                message: "Geçerli vergi numarası".into(),
                checksum: Some(true),
            }
        }
        Err(err) => {
            log::debug!("tax number rejected: {err:?}");
            TaxNoResult::failure(err)
        }
    }
}

/// Compute the check digit for the first nine digits of a tax number.
///
/// Returns `None` unless `first_nine` is exactly nine ASCII digits.
///
/// ```
/// assert_eq!(dogrula::tax_check_digit("123456789"), Some(1));
/// ```
pub fn tax_check_digit(first_nine: &str) -> Option<u8> {
    let digits = digit_values(first_nine)?;
    if digits.len() != 9 {
        return None;
    }
    Some(check_digit(&digits) as u8)
}

/// Position-shifted digit sum. An intermediate value of 9 counts as 0.
fn check_digit(nine: &[u32]) -> u32 {
    let total: u32 = nine
        .iter()
        .enumerate()
        .map(|(i, &d)| match (d + (10 - i as u32)) % 10 {
            9 => 0,
            v => v,
        })
        .sum();
    (10 - total % 10) % 10
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn check_digit_known_values() {
        assert_eq!(tax_check_digit("123456789"), Some(1));
        assert_eq!(tax_check_digit("987654321"), Some(9));
        assert_eq!(tax_check_digit("000000000"), Some(5));
    }

    #[test]
    fn nine_collapses_to_zero() {
        // Position 1: (0 + 9) % 10 == 9 and counts as 0, like (1 + 9) % 10
        assert_eq!(
            check_digit(&[5, 0, 5, 5, 5, 5, 5, 5, 5]),
            check_digit(&[5, 1, 5, 5, 5, 5, 5, 5, 5])
        );
    }

    #[test]
    fn checksum_tristate_from_error() {
        assert_eq!(TaxNoError::Checksum.checksum(), Some(false));
        assert_eq!(TaxNoError::TooShort.checksum(), None);
    }

    #[test]
    fn corporate_allows_leading_zero() {
        assert_eq!(parse_tax_no("0000000005"), Err(TaxNoError::LeadingZero));
        let n = parse_tax_no_with("0000000005", TaxNoOptions::corporate()).unwrap();
        assert_eq!(n.to_string(), "000-000-000-5");
    }

    #[test]
    fn options_deserialize() {
        let opts: TaxNoOptions = serde_json::from_str(r#"{"isCorporate":true}"#).unwrap();
        assert!(opts.is_corporate);
        let opts: TaxNoOptions = serde_json::from_str("{}").unwrap();
        assert!(!opts.is_corporate);
    }
}
