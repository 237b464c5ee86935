//! Turkish mobile phone number validation.
//!
//! Accepts domestic (`0532 123 45 67`), country-code (`+90 532 ...`,
//! `90 532 ...`) and decorated (`(0532) 123-45-67`) spellings and
//! normalizes them to `+905321234567`. Only mobile numbers (`05XX`) are
//! accepted; fixed-line and other prefixes are rejected.

mod validate;

pub use validate::{PhoneError, PhoneNumber, PhoneResult, parse_phone, validate_turkish_phone};
