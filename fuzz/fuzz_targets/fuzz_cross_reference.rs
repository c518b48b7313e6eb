#![no_main]

use libfuzzer_sys::fuzz_target;
use num_bigint::BigUint;

use bigchunk_core::{add, multiply, Magnitude, Radix};

fuzz_target!(|data: &[u8]| {
    if data.len() < 2 {
        return;
    }
    // First byte picks the base, the rest is split into two digit strings.
    let bases = [10u64, 1_000, 10_000_000, 10_000_000_000_000_000_000];
    let radix = Radix::new(bases[usize::from(data[0]) % bases.len()]).unwrap();
    let digits: String = data[1..]
        .iter()
        .take(512)
        .map(|b| char::from(b'0' + b % 10))
        .collect();
    let (a, b) = digits.split_at(digits.len() / 2);
    if a.is_empty() || b.is_empty() {
        return;
    }

    let x = Magnitude::from_decimal_in(a, radix).unwrap();
    let y = Magnitude::from_decimal_in(b, radix).unwrap();
    let ra: BigUint = a.parse().unwrap();
    let rb: BigUint = b.parse().unwrap();

    assert_eq!(add(&x, &y).unwrap().to_decimal(), (&ra + &rb).to_string());
    assert_eq!(multiply(&x, &y).unwrap().to_decimal(), (ra * rb).to_string());
});
