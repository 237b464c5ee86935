//! Walks a set of phone spellings through the validator and prints what
//! comes back.
//!
//! Run with: `cargo run --example phone_manual`

use dogrula::phone::validate_turkish_phone;

const VALID: &[(&str, &str)] = &[
    ("with spaces", "0532 123 45 67"),
    ("with dashes", "0532-123-45-67"),
    ("+90 prefix", "+905321234567"),
    ("90 prefix", "90 532 123 45 67"),
    ("with parentheses", "(0532) 123 45 67"),
    ("plain", "05321234567"),
    ("mixed separators", "+90 532-123 45-67"),
];

const INVALID: &[(&str, &str)] = &[
    ("too short", "0532 12 34"),
    ("too long", "053212345678"),
    ("0632 prefix", "0632 123 45 67"),
    ("alphabetic", "abc def ghij"),
    ("empty", ""),
    ("no leading zero", "53212345678"),
    ("landline area code", "03221234567"),
];

fn run(cases: &[(&str, &str)]) {
    for (i, (label, input)) in cases.iter().enumerate() {
        let result = validate_turkish_phone(input);
        println!("{}. {label}: {input:?}", i + 1);
        println!("   valid:     {}", result.valid);
        if let Some(formatted) = &result.formatted {
            println!("   formatted: {formatted}");
        }
        println!("   message:   {}", result.message);
        println!();
    }
}

fn main() {
    println!("=== Valid numbers ===\n");
    run(VALID);
    println!("=== Invalid numbers ===\n");
    run(INVALID);
}
