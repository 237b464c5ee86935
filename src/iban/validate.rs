use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::banks::bank_name;
use super::checksum::mod97;
use super::format::{clean, group};
use crate::core::{Checksum, is_all_digits, is_blank};

pub(super) const IBAN_LEN: usize = 26;

/// Why an IBAN was rejected, in the order the rules are checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum IbanError {
    #[error("IBAN boş olamaz")]
    Empty,
    #[error("IBAN TR ile başlamalıdır")]
    MissingCountryCode,
    #[error("IBAN 26 karakter olmalıdır")]
    Length,
    #[error("IBAN TR sonrası sadece rakam içermelidir")]
    NonDigitBban,
    #[error("Geçersiz IBAN")]
    Checksum,
    /// Returned by [`super::calculate_check_digit`] for input that cannot be
    /// converted to a mod-97 numeral.
    #[error("IBAN geçersiz karakter içeriyor: {0}")]
    InvalidCharacter(char),
}

impl IbanError {
    /// `Some(false)` when the checksum was computed and failed.
    pub fn checksum(&self) -> Checksum {
        match self {
            Self::Checksum => Some(false),
            _ => None,
        }
    }
}

/// A Turkish IBAN in electronic form (26 characters, no spaces):
/// `TR` + 2 check digits + 5-digit bank code + reserve digit + 16-digit
/// account number.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Iban(String);

impl Iban {
    /// Electronic form, e.g. `TR330006100519786457841326`.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn check_digits(&self) -> &str {
        &self.0[2..4]
    }

    pub fn bank_code(&self) -> &str {
        &self.0[4..9]
    }

    /// The digit between bank code and account number. Part of the
    /// checksum, but of neither extracted field.
    pub fn reserve_digit(&self) -> &str {
        &self.0[9..10]
    }

    pub fn account_number(&self) -> &str {
        &self.0[10..IBAN_LEN]
    }

    pub fn bank_name(&self) -> Option<&'static str> {
        bank_name(self.bank_code())
    }

    /// Print form in groups of four, e.g. `TR33 0006 1005 1978 6457 8413 26`.
    pub fn formatted(&self) -> String {
        group(&self.0)
    }
}

impl fmt::Display for Iban {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.formatted())
    }
}

impl FromStr for Iban {
    type Err = IbanError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_iban(s)
    }
}

/// Flat validation outcome.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IbanResult {
    pub valid: bool,
    pub formatted: Option<String>,
    pub bank_code: Option<String>,
    pub bank_name: Option<String>,
    pub account_number: Option<String>,
    pub check_digits: Option<String>,
    pub checksum_valid: Checksum,
    pub message: String,
}

impl IbanResult {
    fn failure(err: IbanError) -> Self {
        Self {
            valid: false,
            formatted: None,
            bank_code: None,
            bank_name: None,
            account_number: None,
            check_digits: None,
            checksum_valid: err.checksum(),
            message: err.to_string(),
        }
    }
}

/// Parse a Turkish IBAN.
///
/// Whitespace and hyphens are stripped and letters uppercased. Rules apply
/// in order: empty, `TR` prefix, 26 characters, 24 digits after `TR`,
/// mod-97 remainder of 1.
pub fn parse_iban(iban: &str) -> Result<Iban, IbanError> {
    if is_blank(iban) {
        return Err(IbanError::Empty);
    }

    let cleaned = clean(iban);
    if !cleaned.starts_with("TR") {
        return Err(IbanError::MissingCountryCode);
    }
    if cleaned.chars().count() != IBAN_LEN {
        return Err(IbanError::Length);
    }
    if !is_all_digits(&cleaned[2..]) {
        return Err(IbanError::NonDigitBban);
    }
    if mod97(&cleaned) != Some(1) {
        return Err(IbanError::Checksum);
    }
    Ok(Iban(cleaned))
}

/// Validate a Turkish IBAN and decompose it.
pub fn validate_turkish_iban(iban: &str) -> IbanResult {
    match parse_iban(iban) {
        Ok(parsed) => {
            let bank_name = parsed.bank_name();
            if bank_name.is_none() {
                log::debug!("iban bank code {} not in registry", parsed.bank_code());
            }
            log::trace!("iban accepted");
            IbanResult {
                valid: true,
                formatted: Some(parsed.formatted()),
                bank_code: Some(parsed.bank_code().to_owned()),
                bank_name: bank_name.map(str::to_owned),
                account_number: Some(parsed.account_number().to_owned()),
                check_digits: Some(parsed.check_digits().to_owned()),
                checksum_valid: Some(true),
                message: "Geçerli IBAN".into(),
            }
        }
        Err(err) => {
            log::debug!("iban rejected: {err:?}");
            IbanResult::failure(err)
        }
    }
}
