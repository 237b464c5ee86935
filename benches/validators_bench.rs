use criterion::{Criterion, black_box, criterion_group, criterion_main};

use dogrula::*;

fn batch_1000_ibans() -> Vec<String> {
    (0..1000u32)
        .map(|n| {
            let account = format!("{n:016}");
            let cd = calculate_check_digit("00062", "0", &account).unwrap();
            format!("TR{cd}000620{account}")
        })
        .collect()
}

fn bench_tckn(c: &mut Criterion) {
    c.bench_function("tckn_valid", |b| {
        b.iter(|| black_box(validate_tckn(black_box("10000000146"))));
    });
    c.bench_function("tckn_invalid_algorithm", |b| {
        b.iter(|| black_box(validate_tckn(black_box("10000000147"))));
    });
}

fn bench_phone(c: &mut Criterion) {
    c.bench_function("phone_decorated", |b| {
        b.iter(|| black_box(validate_turkish_phone(black_box("+90 (532) 123-45-67"))));
    });
}

fn bench_tax(c: &mut Criterion) {
    c.bench_function("tax_no_valid", |b| {
        b.iter(|| black_box(validate_tax_no(black_box("1234567891"))));
    });
    c.bench_function("tax_no_format", |b| {
        b.iter(|| black_box(format_tax_no(black_box("123 456 789 1"))));
    });
}

fn bench_plate(c: &mut Criterion) {
    c.bench_function("plate_standard", |b| {
        b.iter(|| black_box(validate_turkish_plate(black_box("34 abc 1234"))));
    });
    c.bench_function("plate_forbidden_letter", |b| {
        b.iter(|| black_box(validate_turkish_plate(black_box("34 ÇAB 1234"))));
    });
}

fn bench_iban(c: &mut Criterion) {
    c.bench_function("iban_valid", |b| {
        b.iter(|| black_box(validate_turkish_iban(black_box("TR33 0006 1005 1978 6457 8413 26"))));
    });
    c.bench_function("iban_mod97", |b| {
        b.iter(|| black_box(mod97(black_box("TR330006100519786457841326"))));
    });
    c.bench_function("iban_check_digit", |b| {
        b.iter(|| {
            black_box(calculate_check_digit(
                black_box("00061"),
                black_box("0"),
                black_box("0519786457841326"),
            ))
        });
    });
}

fn bench_iban_batch(c: &mut Criterion) {
    let ibans = batch_1000_ibans();
    c.bench_function("iban_validate_1000", |b| {
        b.iter(|| {
            for iban in &ibans {
                black_box(validate_turkish_iban(black_box(iban)));
            }
        });
    });
}

criterion_group!(
    benches,
    bench_tckn,
    bench_phone,
    bench_tax,
    bench_plate,
    bench_iban,
    bench_iban_batch,
);
criterion_main!(benches);
