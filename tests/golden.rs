//! Golden file integration tests.
//!
//! Reads tests/testdata/products_golden.json and checks every case against
//! the library and against `num-bigint`.

use num_bigint::BigUint;
use serde::Deserialize;

use bigchunk_core::{add, multiply, multiply_by_chunk, Magnitude, Radix};

// ---------------------------------------------------------------------------
// Golden data structures
// ---------------------------------------------------------------------------

#[derive(Deserialize)]
struct GoldenData {
    #[allow(dead_code)]
    description: String,
    cases: Vec<GoldenCase>,
}

#[derive(Deserialize)]
struct GoldenCase {
    op: String,
    a: String,
    b: String,
    base: u64,
    expected: String,
}

fn load_golden_data() -> GoldenData {
    let path = concat!(
        env!("CARGO_MANIFEST_DIR"),
        "/tests/testdata/products_golden.json"
    );
    let data = std::fs::read_to_string(path).expect("failed to read golden file");
    serde_json::from_str(&data).expect("failed to parse golden JSON")
}

fn evaluate(case: &GoldenCase, radix: Radix) -> Magnitude {
    let a = Magnitude::from_decimal_in(&case.a, radix).unwrap();
    match case.op.as_str() {
        "add" => add(&a, &Magnitude::from_decimal_in(&case.b, radix).unwrap()).unwrap(),
        "mul" => multiply(&a, &Magnitude::from_decimal_in(&case.b, radix).unwrap()).unwrap(),
        "scale" => multiply_by_chunk(&a, case.b.parse().unwrap()).unwrap(),
        other => panic!("unknown golden op: {other}"),
    }
}

// ---------------------------------------------------------------------------
// Golden: exact values
// ---------------------------------------------------------------------------

#[test]
fn golden_exact_in_recorded_base() {
    let data = load_golden_data();
    assert!(!data.cases.is_empty());
    for case in &data.cases {
        let radix = Radix::new(case.base).unwrap();
        let result = evaluate(case, radix);
        assert_eq!(
            result.to_decimal(),
            case.expected,
            "{} mismatch for {} and {} in base {}",
            case.op,
            case.a,
            case.b,
            case.base,
        );
    }
}

/// Sums and full products do not depend on the chunk base.
#[test]
fn golden_exact_across_bases() {
    let data = load_golden_data();
    let bases = [10u64, 10_000, 10_000_000, 10_000_000_000_000_000_000];
    for case in data.cases.iter().filter(|c| c.op != "scale") {
        for &base in &bases {
            let result = evaluate(case, Radix::new(base).unwrap());
            assert_eq!(
                result.to_decimal(),
                case.expected,
                "{} mismatch in base {base}",
                case.op
            );
        }
    }
}

// ---------------------------------------------------------------------------
// Golden data sanity: the file agrees with num-bigint
// ---------------------------------------------------------------------------

#[test]
fn golden_data_matches_reference() {
    let data = load_golden_data();
    for case in &data.cases {
        let a: BigUint = case.a.parse().unwrap();
        let b: BigUint = case.b.parse().unwrap();
        let expected = match case.op.as_str() {
            "add" => a + b,
            _ => a * b,
        };
        assert_eq!(expected.to_string(), case.expected);
    }
}
