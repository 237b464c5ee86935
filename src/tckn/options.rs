use serde::{Deserialize, Serialize};

use super::validate::TcknError;

/// Message overrides for TCKN validation.
///
/// Every field defaults to the Turkish message of the matching
/// [`TcknError`]. When deserialized, omitted keys keep their defaults, so a
/// host config only needs to list the messages it replaces:
///
/// ```
/// let options: dogrula::TcknOptions =
///     serde_json::from_str(r#"{ "notDigitsError": "digits only" }"#).unwrap();
/// assert_eq!(options.not_digits_error, "digits only");
/// assert_eq!(options.empty_error, "TCKN boş olamaz");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TcknOptions {
    pub empty_error: String,
    pub too_short_error: String,
    pub too_long_error: String,
    pub first_digit_zero_error: String,
    pub invalid_algorithm_error: String,
    pub not_digits_error: String,
}

impl Default for TcknOptions {
    fn default() -> Self {
        Self {
            empty_error: TcknError::Empty.to_string(),
            too_short_error: TcknError::TooShort.to_string(),
            too_long_error: TcknError::TooLong.to_string(),
            first_digit_zero_error: TcknError::FirstDigitZero.to_string(),
            invalid_algorithm_error: TcknError::InvalidAlgorithm.to_string(),
            not_digits_error: TcknError::NotDigits.to_string(),
        }
    }
}

impl TcknOptions {
    /// Replace the message reported for `reason`.
    pub fn with_message(mut self, reason: TcknError, message: impl Into<String>) -> Self {
        *self.slot_mut(reason) = message.into();
        self
    }

    /// The message configured for `reason`.
    pub fn message(&self, reason: TcknError) -> &str {
        match reason {
            TcknError::Empty => &self.empty_error,
            TcknError::TooShort => &self.too_short_error,
            TcknError::TooLong => &self.too_long_error,
            TcknError::FirstDigitZero => &self.first_digit_zero_error,
            TcknError::InvalidAlgorithm => &self.invalid_algorithm_error,
            TcknError::NotDigits => &self.not_digits_error,
        }
    }

    fn slot_mut(&mut self, reason: TcknError) -> &mut String {
        match reason {
            TcknError::Empty => &mut self.empty_error,
            TcknError::TooShort => &mut self.too_short_error,
            TcknError::TooLong => &mut self.too_long_error,
            TcknError::FirstDigitZero => &mut self.first_digit_zero_error,
            TcknError::InvalidAlgorithm => &mut self.invalid_algorithm_error,
            TcknError::NotDigits => &mut self.not_digits_error,
        }
    }
}
