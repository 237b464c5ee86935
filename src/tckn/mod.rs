//! Turkish national identity number (TC Kimlik No, TCKN).
//!
//! An 11-digit number that never starts with zero and carries two check
//! digits. The 10th digit is derived from the weighted odd/even position
//! sums of the first nine; the 11th is the last digit of the sum of the
//! first ten.
//!
//! # Example
//!
//! ```
//! use dogrula::tckn::*;
//!
//! assert!(validate_tckn("10000000146").is_valid);
//!
//! let result = validate_tckn("10000000147");
//! assert_eq!(result.reason, Some(TcknError::InvalidAlgorithm));
//!
//! // Override a message; the rest keep their Turkish defaults
//! let options = TcknOptions::default().with_message(TcknError::Empty, "required");
//! assert_eq!(validate_tckn_with("", &options).error.as_deref(), Some("required"));
//! ```

mod options;
mod validate;

pub use options::TcknOptions;
pub use validate::{
    Tckn, TcknError, TcknResult, parse_tckn, tckn_check_digits, validate_tckn, validate_tckn_with,
};
