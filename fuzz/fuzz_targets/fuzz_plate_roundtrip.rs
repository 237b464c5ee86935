#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        let first = dogrula::validate_turkish_plate(s);
        if let Some(formatted) = &first.formatted {
            // The canonical form must validate to the same result.
            let second = dogrula::validate_turkish_plate(formatted);
            assert_eq!(first, second);
        }
    }
});
