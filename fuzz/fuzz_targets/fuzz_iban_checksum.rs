#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        let result = dogrula::validate_turkish_iban(s);
        if result.valid {
            let formatted = result.formatted.expect("valid IBAN has a formatted form");
            let compact: String = formatted.split(' ').collect();
            assert_eq!(dogrula::mod97(&compact), Some(1));
        }

        let _ = dogrula::mod97(s);
        if let Some((split, _)) = s.char_indices().nth(5) {
            let (bank, rest) = s.split_at(split);
            let _ = dogrula::calculate_check_digit(bank, "0", rest);
        }
    }
});
