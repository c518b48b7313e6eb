//! Chunk-level arithmetic for an arbitrary base.
//!
//! Intermediates are widened to `u128`, so any `u64` base is safe: a sum of
//! two chunks plus carry stays below `2 * base`, and a chunk product plus
//! carry stays below `base * base`.

/// Add with carry in `base`: a + b + carry -> (chunk, `new_carry`).
///
/// `a` and `b` must be below `base` and `carry` at most 1. A sum equal to
/// `base` overflows the chunk and carries.
#[inline]
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn add_with_carry(a: u64, b: u64, carry: u64, base: u64) -> (u64, u64) {
    let sum = u128::from(a) + u128::from(b) + u128::from(carry);
    let base = u128::from(base);
    if sum >= base {
        ((sum - base) as u64, 1)
    } else {
        (sum as u64, 0)
    }
}

/// Multiply-accumulate in `base`: a * n + carry -> (chunk, `new_carry`).
///
/// With `a`, `n` and `carry` below `base`, the new carry is below `base` too.
#[inline]
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn mul_add(a: u64, n: u64, carry: u64, base: u64) -> (u64, u64) {
    let prod = u128::from(a) * u128::from(n) + u128::from(carry);
    let base = u128::from(base);
    ((prod % base) as u64, (prod / base) as u64)
}
