#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        // Rejections are fine, panics are bugs.
        let _ = dogrula::validate_tckn(s);
        let _ = dogrula::validate_turkish_phone(s);
        let _ = dogrula::validate_tax_no(s);
        let _ = dogrula::format_tax_no(s);
        let _ = dogrula::validate_turkish_plate(s);
        let _ = dogrula::validate_turkish_iban(s);
        let _ = dogrula::format_iban(s);
    }
});
