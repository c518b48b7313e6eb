//! Chunk multiplication and schoolbook multiplication.

use tracing::{debug, trace};

use crate::add::add;
use crate::arith::mul_add;
use crate::error::{MagnitudeError, Result};
use crate::magnitude::{chunk_buffer, Magnitude};

/// Product of `a` and a single chunk value `n`.
///
/// `n` must be below the base of `a`; anything else is `OutOfRange`. The
/// result has exactly the length of `a`, plus one chunk if the final carry is
/// nonzero.
pub fn multiply_by_chunk(a: &Magnitude, n: u64) -> Result<Magnitude> {
    let radix = a.radix();
    let base = radix.base();
    if n >= base {
        return Err(MagnitudeError::OutOfRange { scalar: n, base });
    }
    if n == 0 || a.is_zero() {
        return Magnitude::zero_in(radix);
    }

    let mut product = chunk_buffer(a.len())?;
    let mut carry = 0;
    for &chunk in a.chunks() {
        let (digit, next) = mul_add(chunk, n, carry, base);
        product.push(digit);
        carry = next;
    }
    if carry != 0 {
        product.try_reserve_exact(1)?;
        product.push(carry);
    }

    Ok(Magnitude::from_raw(product, radix))
}

/// Product of two magnitudes built under the same radix.
///
/// For every chunk `b[i]`, `a * b[i]` is shifted up by `i` chunks and folded
/// into a running total.
pub fn multiply(a: &Magnitude, b: &Magnitude) -> Result<Magnitude> {
    let radix = a.shared_radix(b)?;
    let mut acc = Magnitude::zero_in(radix)?;
    if a.is_zero() || b.is_zero() {
        return Ok(acc);
    }

    for (i, &digit) in b.chunks().iter().enumerate() {
        if digit == 0 {
            continue;
        }
        let term = multiply_by_chunk(a, digit)?.shifted(i)?;
        // The previous total is dropped only once the new one exists.
        acc = add(&acc, &term)?;
        trace!(index = i, chunks = acc.len(), "accumulated partial product");
    }
    acc.normalize();

    debug!(
        base = radix.base(),
        lhs_chunks = a.len(),
        rhs_chunks = b.len(),
        result_chunks = acc.len(),
        "schoolbook multiply"
    );
    Ok(acc)
}
