#![no_main]

use libfuzzer_sys::fuzz_target;

use bigchunk_core::{Magnitude, Radix};

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };
    // Should not panic; accepted text must round-trip without leading zeros.
    if let Ok(m) = Magnitude::from_decimal_in(text, Radix::DEFAULT) {
        let expected = match text.trim_start_matches('0') {
            "" => "0",
            s => s,
        };
        assert_eq!(m.to_decimal(), expected);
    }
});
