//! Shared building blocks for the validators.
//!
//! Input cleaning and digit handling live here so every validator
//! strips decorations and classifies characters the same way.

mod normalize;

pub(crate) use normalize::*;

/// Tri-state checksum outcome carried by tax-number and IBAN results.
///
/// - `Some(true)`: checksum computed and matched.
/// - `Some(false)`: input was well-formed, but the checksum did not match.
/// - `None`: validation stopped before the checksum was reached.
pub type Checksum = Option<bool>;
