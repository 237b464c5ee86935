//! Turkish tax number (Vergi Kimlik Numarası, VKN) validation and formatting.
//!
//! A VKN is ten digits; the last is a check digit over the first nine.
//!
//! # Example
//!
//! ```
//! use dogrula::tax::*;
//!
//! let result = validate_tax_no("123 456 7891");
//! assert!(result.valid);
//! assert_eq!(result.formatted.as_deref(), Some("123-456-789-1"));
//! assert_eq!(result.checksum, Some(true));
//!
//! // Well-formed but wrong check digit
//! assert_eq!(validate_tax_no("1234567899").checksum, Some(false));
//!
//! // Formatting never fails
//! assert_eq!(format_tax_no("1234567890"), "123-456-789-0");
//! assert_eq!(format_tax_no("123456789"), "123456789");
//! ```

mod format;
mod validate;

pub use format::format_tax_no;
pub use validate::{
    TaxNoError, TaxNoOptions, TaxNoResult, TaxNumber, parse_tax_no, parse_tax_no_with,
    tax_check_digit, validate_tax_no, validate_tax_no_with,
};
