#![cfg(feature = "tax")]

use dogrula::tax::*;

// ---------------------------------------------------------------------------
// Valid numbers
// ---------------------------------------------------------------------------

#[test]
fn valid_tax_no() {
    let result = validate_tax_no("1234567891");
    assert!(result.valid);
    assert_eq!(result.formatted.as_deref(), Some("123-456-789-1"));
    assert_eq!(result.checksum, Some(true));
    assert_eq!(result.message, "Geçerli vergi numarası");
}

#[test]
fn valid_with_spaces_and_dashes() {
    for input in ["123 456 7891", "123-456-7891", " 123-456-789-1 "] {
        let result = validate_tax_no(input);
        assert!(result.valid, "{input}");
        assert_eq!(result.formatted.as_deref(), Some("123-456-789-1"));
    }
}

#[test]
fn corporate_flag_allows_leading_zero() {
    let result = validate_tax_no_with("0000000005", TaxNoOptions { is_corporate: true });
    assert!(result.valid);
    assert_eq!(result.formatted.as_deref(), Some("000-000-000-5"));
    assert_eq!(result.checksum, Some(true));
}

#[test]
fn corporate_flag_still_checks_checksum() {
    let result = validate_tax_no_with("0000000004", TaxNoOptions::corporate());
    assert!(!result.valid);
    assert_eq!(result.checksum, Some(false));
}

// ---------------------------------------------------------------------------
// Rejections and checksum tri-state
// ---------------------------------------------------------------------------

#[test]
fn checksum_mismatch_is_false_not_none() {
    let result = validate_tax_no("1234567899");
    assert!(!result.valid);
    assert_eq!(result.formatted, None);
    assert_eq!(result.message, "Geçersiz vergi numarası");
    assert_eq!(result.checksum, Some(false));
}

#[test]
fn leading_zero_rejected_by_default() {
    let result = validate_tax_no("0123456789");
    assert!(!result.valid);
    assert_eq!(result.message, "Vergi numarası 0 ile başlayamaz");
    assert_eq!(result.checksum, None);
}

#[test]
fn too_short() {
    let result = validate_tax_no("123456789");
    assert_eq!(result.message, "Vergi numarası 10 haneli olmalıdır");
    assert_eq!(result.checksum, None);
}

#[test]
fn too_long() {
    let result = validate_tax_no("12345678901");
    assert_eq!(result.message, "Vergi numarası 10 haneden uzun olamaz");
    assert_eq!(result.checksum, None);
}

#[test]
fn alphabetic() {
    let result = validate_tax_no("123456789X");
    assert_eq!(result.message, "Vergi numarası sadece rakam içermelidir");
    assert_eq!(result.checksum, None);
}

#[test]
fn empty() {
    let result = validate_tax_no("");
    assert!(!result.valid);
    assert_eq!(result.formatted, None);
    assert_eq!(result.message, "Vergi numarası boş olamaz");
    assert_eq!(result.checksum, None);
}

#[test]
fn non_digit_wins_over_short() {
    // Both too short and non-numeric: the digit rule is checked first
    let result = validate_tax_no("12a");
    assert_eq!(result.message, "Vergi numarası sadece rakam içermelidir");
}

#[test]
fn parentheses_are_not_stripped() {
    let result = validate_tax_no("(123) 456 7891");
    assert_eq!(result.message, "Vergi numarası sadece rakam içermelidir");
}

// ---------------------------------------------------------------------------
// Formatting
// ---------------------------------------------------------------------------

#[test]
fn format_ten_digits() {
    assert_eq!(format_tax_no("1234567890"), "123-456-789-0");
    assert_eq!(format_tax_no("123 456 7890"), "123-456-789-0");
    assert_eq!(format_tax_no("123-456-7890"), "123-456-789-0");
}

#[test]
fn format_passthrough_on_wrong_length() {
    assert_eq!(format_tax_no("123456789"), "123456789");
    assert_eq!(format_tax_no("12345678901"), "12345678901");
}

#[test]
fn format_does_not_validate() {
    // Invalid checksum still formats
    assert_eq!(format_tax_no("1234567899"), "123-456-789-9");
}

#[test]
fn format_strip_reformat_is_stable() {
    let formatted = format_tax_no("1234567890");
    let stripped: String = formatted.chars().filter(|c| *c != '-').collect();
    assert_eq!(format_tax_no(&stripped), formatted);
}

#[test]
fn check_digit_helper_builds_valid_number() {
    let cd = tax_check_digit("987654321").unwrap();
    let number = format!("987654321{cd}");
    let parsed: TaxNumber = number.parse().unwrap();
    assert_eq!(parsed.as_str(), "9876543219");
    assert_eq!(parsed.to_string(), "987-654-321-9");
}
