//! Turkish vehicle license plate validation.
//!
//! A plate is a province code (01-81), a letter block, and a digit block,
//! e.g. `34 ABC 1234`. The input is segmented left to right so that a
//! malformed plate reports the first segment that is missing, then the
//! segments are checked and the plate is classified by their lengths.
//!
//! # Example
//!
//! ```
//! use dogrula::plate::*;
//!
//! let result = validate_turkish_plate("34abc12");
//! assert!(result.valid);
//! assert_eq!(result.formatted.as_deref(), Some("34 ABC 12"));
//! assert_eq!(result.plate_type, Some(PlateType::Motorcycle));
//!
//! let result = validate_turkish_plate("34 QAB 1234");
//! assert_eq!(result.message, "Plakada kullanılamayan harf: Q");
//! ```

mod parse;
mod provinces;
mod validate;

pub use provinces::province_name;
pub use validate::{
    FORBIDDEN_LETTERS, Plate, PlateError, PlateResult, PlateType, parse_plate,
    validate_turkish_plate,
};
