use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::{is_all_digits, is_blank, strip_chars};

const NATIONAL_LEN: usize = 11;

/// Why a phone number was rejected, in the order the rules are checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum PhoneError {
    #[error("Telefon numarası boş olamaz")]
    Empty,
    #[error("Telefon numarası sadece rakam içermelidir")]
    NotDigits,
    #[error("Telefon numarası 11 haneli olmalıdır")]
    TooShort,
    #[error("Telefon numarası 11 haneden uzun olamaz")]
    TooLong,
    #[error("Telefon numarası 0 ile başlamalıdır")]
    MissingLeadingZero,
    /// Second digit is not `5`: fixed-line or special-service number.
    #[error("Sadece cep telefonu numaraları kabul edilir (5XX)")]
    NotMobile,
}

/// A Turkish mobile number, stored as the ten digits after the trunk `0`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PhoneNumber {
    subscriber: String,
}

impl PhoneNumber {
    /// International form, e.g. `+905321234567`.
    pub fn e164(&self) -> String {
        format!("+90{}", self.subscriber)
    }

    /// Domestic form with trunk prefix, e.g. `05321234567`.
    pub fn national(&self) -> String {
        format!("0{}", self.subscriber)
    }

    /// Three-digit operator code, e.g. `532`.
    pub fn operator_code(&self) -> &str {
        &self.subscriber[..3]
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "+90{}", self.subscriber)
    }
}

impl FromStr for PhoneNumber {
    type Err = PhoneError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_phone(s)
    }
}

/// Flat validation outcome. `formatted` is set only when `valid`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PhoneResult {
    pub valid: bool,
    pub formatted: Option<String>,
    pub message: String,
}

impl PhoneResult {
    fn failure(err: PhoneError) -> Self {
        Self {
            valid: false,
            formatted: None,
            message: err.to_string(),
        }
    }
}

/// Strip decorations, then turn a leading country code `90` into the
/// trunk `0`. The `90` rewrite runs before any leading-zero check.
fn clean(phone: &str) -> String {
    let stripped = strip_chars(phone, |c| {
        c.is_whitespace() || matches!(c, '-' | '(' | ')' | '+')
    });
    match stripped.strip_prefix("90") {
        Some(rest) => format!("0{rest}"),
        None => stripped,
    }
}

/// Parse a Turkish mobile number.
///
/// Rules apply in order: empty, non-digit, too short, too long, missing
/// trunk `0`, non-mobile prefix.
pub fn parse_phone(phone: &str) -> Result<PhoneNumber, PhoneError> {
    if is_blank(phone) {
        return Err(PhoneError::Empty);
    }

    let cleaned = clean(phone);
    if !is_all_digits(&cleaned) {
        return Err(PhoneError::NotDigits);
    }
    if cleaned.len() < NATIONAL_LEN {
        return Err(PhoneError::TooShort);
    }
    if cleaned.len() > NATIONAL_LEN {
        return Err(PhoneError::TooLong);
    }

    let bytes = cleaned.as_bytes();
    if bytes[0] != b'0' {
        return Err(PhoneError::MissingLeadingZero);
    }
    if bytes[1] != b'5' {
        return Err(PhoneError::NotMobile);
    }

    Ok(PhoneNumber {
        subscriber: cleaned[1..].to_owned(),
    })
}

/// Validate a Turkish mobile number and format it as `+90XXXXXXXXXX`.
pub fn validate_turkish_phone(phone: &str) -> PhoneResult {
    match parse_phone(phone) {
        Ok(number) => {
            log::trace!("phone accepted, operator {}", number.operator_code());
            PhoneResult {
                valid: true,
                formatted: Some(number.e164()),
                message: "Geçerli telefon numarası".into(),
            }
        }
        Err(err) => {
            log::debug!("phone rejected: {err:?}");
            PhoneResult::failure(err)
        }
    }
}
