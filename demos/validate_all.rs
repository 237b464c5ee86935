//! Runs every validator over a few sample inputs and prints the results as
//! JSON.
//!
//! Run with: `RUST_LOG=dogrula=trace cargo run --example validate_all`

use dogrula::*;

fn print<T: serde::Serialize>(label: &str, input: &str, result: &T) {
    match serde_json::to_string_pretty(result) {
        Ok(json) => println!("{label} {input:?}\n{json}\n"),
        Err(e) => eprintln!("{label} {input:?}: {e}"),
    }
}

fn main() {
    env_logger::init();

    for input in ["10000000146", "10000000147", "0123"] {
        print("tckn", input, &validate_tckn(input));
    }
    for input in ["0532 123 45 67", "0212 123 45 67"] {
        print("phone", input, &validate_turkish_phone(input));
    }
    for input in ["1234567891", "0000000005"] {
        print("tax", input, &validate_tax_no(input));
    }
    print(
        "tax (corporate)",
        "0000000005",
        &validate_tax_no_with("0000000005", TaxNoOptions::corporate()),
    );
    for input in ["34 abc 1234", "06-a-12", "82 ABC 1234", "34 QAB 123"] {
        print("plate", input, &validate_turkish_plate(input));
    }
    for input in [
        "TR33 0006 1005 1978 6457 8413 26",
        "TR809999900000000000000001",
        "TR340006100519786457841326",
    ] {
        print("iban", input, &validate_turkish_iban(input));
    }

    match calculate_check_digit("00062", "0", "0000000000000006") {
        Ok(cd) => println!("check digits for 00062/0/0000000000000006: {cd}"),
        Err(e) => eprintln!("check digits: {e}"),
    }
}
