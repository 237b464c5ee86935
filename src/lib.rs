//! # dogrula
//!
//! Validation and normalization of Turkish structured identifiers:
//! national ID number (TCKN), mobile phone number, tax number (VKN),
//! vehicle license plate, and IBAN.
//!
//! Every validator accepts a loosely formatted string (spaces, dashes,
//! parentheses, country-code prefixes) and comes in two layers:
//!
//! - `parse_*` returns a typed value or a `thiserror` error whose
//!   `Display` is the Turkish diagnostic message.
//! - `validate_*` returns a flat, serializable result with a validity flag,
//!   a canonical `formatted` string, decomposed fields, and the message.
//!
//! All functions are pure and synchronous. The only shared data are the
//! read-only province and bank registries.
//!
//! ## Quick Start
//!
//! ```rust
//! use dogrula::*;
//!
//! let phone = validate_turkish_phone("0532 123 45 67");
//! assert!(phone.valid);
//! assert_eq!(phone.formatted.as_deref(), Some("+905321234567"));
//!
//! let plate = validate_turkish_plate("34 abc 1234");
//! assert_eq!(plate.city_name.as_deref(), Some("İstanbul"));
//! assert_eq!(plate.plate_type, Some(PlateType::Standard));
//!
//! let iban = validate_turkish_iban("TR33 0006 1005 1978 6457 8413 26");
//! assert!(iban.valid);
//! assert_eq!(iban.bank_code.as_deref(), Some("00061"));
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `core` | Shared normalization helpers |
//! | `tckn` | National ID number (dual check digit) |
//! | `phone` | Mobile phone numbers (`+90 5XX`) |
//! | `tax` | Tax number (VKN) validation and formatting |
//! | `plate` | Vehicle plates, province registry |
//! | `iban` | IBAN mod-97 validation, bank registry |
//! | `all` | Everything (all validators are on by default) |

#[cfg(feature = "core")]
pub mod core;

#[cfg(feature = "tckn")]
pub mod tckn;

#[cfg(feature = "phone")]
pub mod phone;

#[cfg(feature = "tax")]
pub mod tax;

#[cfg(feature = "plate")]
pub mod plate;

#[cfg(feature = "iban")]
pub mod iban;

// Re-export validator APIs at crate root for convenience
#[cfg(feature = "core")]
pub use crate::core::Checksum;

#[cfg(feature = "tckn")]
pub use crate::tckn::*;

#[cfg(feature = "phone")]
pub use crate::phone::*;

#[cfg(feature = "tax")]
pub use crate::tax::*;

#[cfg(feature = "plate")]
pub use crate::plate::*;

#[cfg(feature = "iban")]
pub use crate::iban::*;
