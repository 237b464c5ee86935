use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::parse::{normalize, parse_segments};
use super::provinces::province_name;
use crate::core::is_blank;

/// Letters that never appear on Turkish plates.
pub const FORBIDDEN_LETTERS: &[char] = &['Ç', 'Ğ', 'İ', 'Ö', 'Ş', 'Ü', 'Q', 'W', 'X'];

/// Why a plate was rejected, in the order the rules are checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum PlateError {
    #[error("Plaka boş olamaz")]
    Empty,
    #[error("İl kodu 2 rakamdan oluşmalıdır")]
    InvalidCityCode,
    #[error("Plaka harf kısmı bulunamadı")]
    LettersNotFound,
    #[error("Plaka rakam kısmı bulunamadı")]
    DigitsNotFound,
    /// Characters left over after the digit block.
    #[error("Plaka formatı geçersiz")]
    InvalidFormat,
    #[error("İl kodu 01-81 arası olmalıdır")]
    CityCodeOutOfRange,
    #[error("Harf kısmı 1-3 karakter olmalıdır")]
    LetterCount,
    #[error("Plakada kullanılamayan harf: {0}")]
    ForbiddenLetter(char),
    #[error("Rakam kısmı 2-4 hane olmalıdır")]
    DigitCount,
}

/// Plate series, derived from the segment lengths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlateType {
    #[serde(rename = "Motosiklet")]
    Motorcycle,
    #[serde(rename = "Standart")]
    Standard,
    #[serde(rename = "Eski Tip")]
    OldStyle,
    #[serde(rename = "Çok Eski Tip")]
    VeryOldStyle,
    #[serde(rename = "Bilinmeyen")]
    Unknown,
}

impl PlateType {
    /// Classify by letter and digit counts. The first matching rule wins:
    /// a 2 or 3 digit block is a motorcycle whatever the letter count.
    pub fn classify(letter_count: usize, digit_count: usize) -> Self {
        match (letter_count, digit_count) {
            (_, 2 | 3) => Self::Motorcycle,
            (3, _) => Self::Standard,
            (2, _) => Self::OldStyle,
            (1, _) => Self::VeryOldStyle,
            _ => Self::Unknown,
        }
    }

    /// Turkish label, e.g. `"Standart"`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Motorcycle => "Motosiklet",
            Self::Standard => "Standart",
            Self::OldStyle => "Eski Tip",
            Self::VeryOldStyle => "Çok Eski Tip",
            Self::Unknown => "Bilinmeyen",
        }
    }
}

impl fmt::Display for PlateType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A plate that passed every structural and semantic rule.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Plate {
    province: u8,
    letters: String,
    numbers: String,
}

impl Plate {
    /// Province number, 1 through 81.
    pub fn province(&self) -> u8 {
        self.province
    }

    /// Zero-padded province code, e.g. `"06"`.
    pub fn city_code(&self) -> String {
        format!("{:02}", self.province)
    }

    pub fn city_name(&self) -> Option<&'static str> {
        province_name(&self.city_code())
    }

    pub fn letters(&self) -> &str {
        &self.letters
    }

    pub fn numbers(&self) -> &str {
        &self.numbers
    }

    pub fn plate_type(&self) -> PlateType {
        PlateType::classify(self.letters.chars().count(), self.numbers.len())
    }
}

/// Canonical form: `"CC LLL NNNN"`.
impl fmt::Display for Plate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02} {} {}", self.province, self.letters, self.numbers)
    }
}

impl FromStr for Plate {
    type Err = PlateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_plate(s)
    }
}

/// Flat validation outcome. Every field except `message` is `None` on
/// failure; `city_name` may also be `None` for an unmapped code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlateResult {
    pub valid: bool,
    pub formatted: Option<String>,
    pub city_code: Option<String>,
    pub city_name: Option<String>,
    pub letters: Option<String>,
    pub numbers: Option<String>,
    pub plate_type: Option<PlateType>,
    pub message: String,
}

impl PlateResult {
    fn failure(err: PlateError) -> Self {
        Self {
            valid: false,
            formatted: None,
            city_code: None,
            city_name: None,
            letters: None,
            numbers: None,
            plate_type: None,
            message: err.to_string(),
        }
    }
}

/// Parse a Turkish vehicle plate.
///
/// After segmentation the checks run in order: two-digit code, code in
/// 1..=81, 1-3 letters, no forbidden letter, 2-4 digits.
pub fn parse_plate(plate: &str) -> Result<Plate, PlateError> {
    if is_blank(plate) {
        return Err(PlateError::Empty);
    }

    let normalized = normalize(plate);
    let segments = parse_segments(&normalized)?;

    if segments.city_code.len() != 2 {
        return Err(PlateError::InvalidCityCode);
    }
    let province: u8 = segments
        .city_code
        .parse()
        .map_err(|_| PlateError::InvalidCityCode)?;
    if !(1..=81).contains(&province) {
        return Err(PlateError::CityCodeOutOfRange);
    }

    let letter_count = segments.letters.chars().count();
    if !(1..=3).contains(&letter_count) {
        return Err(PlateError::LetterCount);
    }
    if let Some(c) = segments
        .letters
        .chars()
        .find(|c| FORBIDDEN_LETTERS.contains(c))
    {
        return Err(PlateError::ForbiddenLetter(c));
    }
    if !(2..=4).contains(&segments.numbers.len()) {
        return Err(PlateError::DigitCount);
    }

    Ok(Plate {
        province,
        letters: segments.letters.to_owned(),
        numbers: segments.numbers.to_owned(),
    })
}

/// Validate a Turkish vehicle plate and decompose it.
pub fn validate_turkish_plate(plate: &str) -> PlateResult {
    match parse_plate(plate) {
        Ok(p) => {
            let plate_type = p.plate_type();
            log::trace!("plate accepted: province {}, {plate_type}", p.province);
            PlateResult {
                valid: true,
                formatted: Some(p.to_string()),
                city_code: Some(p.city_code()),
                city_name: p.city_name().map(str::to_owned),
                letters: Some(p.letters),
                numbers: Some(p.numbers),
                plate_type: Some(plate_type),
                message: "Geçerli plaka".into(),
            }
        }
        Err(err) => {
            log::debug!("plate rejected: {err:?}");
            PlateResult::failure(err)
        }
    }
}
