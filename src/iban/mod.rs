//! Turkish IBAN validation, formatting, and check-digit calculation.
//!
//! A Turkish IBAN is 26 characters: `TR`, two check digits, a five-digit
//! bank code, one reserve digit, and a sixteen-digit account number. The
//! check digits follow ISO 7064 MOD 97-10.
//!
//! # Example
//!
//! ```
//! use dogrula::iban::*;
//!
//! let cd = calculate_check_digit("00062", "0", "0000000000000001").unwrap();
//! let iban = format!("TR{cd}000620{}", "0000000000000001");
//!
//! let result = validate_turkish_iban(&iban);
//! assert!(result.valid);
//! assert_eq!(result.bank_name.as_deref(), Some("Türkiye Garanti Bankası A.Ş."));
//! assert_eq!(result.checksum_valid, Some(true));
//! ```

mod banks;
mod checksum;
mod format;
mod validate;

pub use banks::bank_name;
pub use checksum::{calculate_check_digit, mod97};
pub use format::format_iban;
pub use validate::{Iban, IbanError, IbanResult, parse_iban, validate_turkish_iban};
