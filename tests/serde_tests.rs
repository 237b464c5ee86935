//! JSON shape of the flat results.

#![cfg(feature = "all")]

use dogrula::*;
use serde_json::json;

#[test]
fn tckn_result_shape() {
    let valid = serde_json::to_value(validate_tckn("10000000146")).unwrap();
    assert_eq!(valid, json!({ "isValid": true }));

    let invalid = serde_json::to_value(validate_tckn("")).unwrap();
    assert_eq!(
        invalid,
        json!({ "isValid": false, "reason": "empty", "error": "TCKN boş olamaz" })
    );
}

#[test]
fn phone_result_shape() {
    let value = serde_json::to_value(validate_turkish_phone("0532 123 45 67")).unwrap();
    assert_eq!(
        value,
        json!({
            "valid": true,
            "formatted": "+905321234567",
            "message": "Geçerli telefon numarası"
        })
    );

    let value = serde_json::to_value(validate_turkish_phone("")).unwrap();
    assert_eq!(value["formatted"], serde_json::Value::Null);
}

#[test]
fn tax_result_checksum_tristate() {
    let ok = serde_json::to_value(validate_tax_no("1234567891")).unwrap();
    assert_eq!(ok["checksum"], json!(true));
    let mismatch = serde_json::to_value(validate_tax_no("1234567899")).unwrap();
    assert_eq!(mismatch["checksum"], json!(false));
    let malformed = serde_json::to_value(validate_tax_no("12")).unwrap();
    assert_eq!(malformed["checksum"], serde_json::Value::Null);
}

#[test]
fn plate_result_shape() {
    let value = serde_json::to_value(validate_turkish_plate("16 A 5678")).unwrap();
    assert_eq!(
        value,
        json!({
            "valid": true,
            "formatted": "16 A 5678",
            "cityCode": "16",
            "cityName": "Bursa",
            "letters": "A",
            "numbers": "5678",
            "plateType": "Çok Eski Tip",
            "message": "Geçerli plaka"
        })
    );
}

#[test]
fn iban_result_shape() {
    let value = serde_json::to_value(validate_turkish_iban("TR330006100519786457841326")).unwrap();
    assert_eq!(value["bankCode"], json!("00061"));
    assert_eq!(value["accountNumber"], json!("0519786457841326"));
    assert_eq!(value["checkDigits"], json!("33"));
    assert_eq!(value["checksumValid"], json!(true));
}

#[test]
fn results_roundtrip_through_json() {
    let plate = validate_turkish_plate("34 ABC 12");
    let json = serde_json::to_string(&plate).unwrap();
    let back: PlateResult = serde_json::from_str(&json).unwrap();
    assert_eq!(back, plate);

    let iban = validate_turkish_iban("TR340006100519786457841326");
    let json = serde_json::to_string(&iban).unwrap();
    let back: IbanResult = serde_json::from_str(&json).unwrap();
    assert_eq!(back, iban);
}

#[test]
fn options_from_host_config() {
    let config = json!({
        "tckn": { "tooShortError": "Eksik hane" },
        "tax": { "isCorporate": true }
    });
    let tckn: TcknOptions = serde_json::from_value(config["tckn"].clone()).unwrap();
    let tax: TaxNoOptions = serde_json::from_value(config["tax"].clone()).unwrap();

    assert_eq!(
        validate_tckn_with("1", &tckn).error.as_deref(),
        Some("Eksik hane")
    );
    assert!(validate_tax_no_with("0000000005", tax).valid);
}
