//! ISO 7064 MOD 97-10 arithmetic for IBANs.
//!
//! The IBAN is rearranged (first four characters moved to the end), each
//! letter becomes its two-digit value (`A` = 10 .. `Z` = 35), and the
//! resulting decimal numeral is reduced modulo 97 one digit at a time. The
//! numeral is never materialized as an integer.

use super::validate::IbanError;

/// Remainder of the rearranged, letter-substituted IBAN modulo 97.
///
/// A correct IBAN yields `1`. Returns `None` if any character is outside
/// `0-9` / `A-Z`.
///
/// ```
/// assert_eq!(dogrula::mod97("TR330006100519786457841326"), Some(1));
/// assert_eq!(dogrula::mod97("tr33"), None);
/// ```
pub fn mod97(iban: &str) -> Option<u32> {
    remainder(iban).ok()
}

/// Mod-97 remainder, or the first character that cannot be converted.
pub(super) fn remainder(iban: &str) -> Result<u32, char> {
    if let Some(bad) = iban
        .chars()
        .find(|c| !(c.is_ascii_digit() || c.is_ascii_uppercase()))
    {
        return Err(bad);
    }

    // All ASCII from here, so byte offsets are character offsets
    let (head, tail) = iban.split_at(iban.len().min(4));
    let r = tail.bytes().chain(head.bytes()).fold(0u32, |r, b| match b {
        b'0'..=b'9' => (r * 10 + u32::from(b - b'0')) % 97,
        // Letters expand to two decimal digits
        _ => (r * 100 + u32::from(b) - 55) % 97,
    });
    Ok(r)
}

/// Expected check digits for a Turkish IBAN with the given bank code,
/// reserve digit, and account number.
///
/// Builds `TR00` + fields, reduces it modulo 97, and returns `98 - r`
/// zero-padded to two digits. Field lengths are not checked here; the
/// result only forms a valid Turkish IBAN when they are 5, 1, and 16.
///
/// ```
/// let cd = dogrula::calculate_check_digit("00061", "0", "0519786457841326").unwrap();
/// assert_eq!(cd, "33");
/// ```
pub fn calculate_check_digit(
    bank_code: &str,
    reserve_digit: &str,
    account_number: &str,
) -> Result<String, IbanError> {
    let provisional = format!("TR00{bank_code}{reserve_digit}{account_number}");
    let r = remainder(&provisional).map_err(IbanError::InvalidCharacter)?;
    Ok(format!("{:02}", 98 - r))
}
