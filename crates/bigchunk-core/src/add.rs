//! Schoolbook addition.

use crate::arith::add_with_carry;
use crate::error::Result;
use crate::magnitude::{chunk_buffer, Magnitude};

/// Sum of two magnitudes built under the same radix.
///
/// Neither operand is modified. The result is one chunk longer than the
/// longer operand only when the final carry is set.
pub fn add(a: &Magnitude, b: &Magnitude) -> Result<Magnitude> {
    let radix = a.shared_radix(b)?;
    let base = radix.base();
    let (longer, shorter) = if a.len() >= b.len() {
        (a.chunks(), b.chunks())
    } else {
        (b.chunks(), a.chunks())
    };

    let mut sum = chunk_buffer(longer.len())?;
    let mut carry = 0;
    for (i, &chunk) in longer.iter().enumerate() {
        let other = shorter.get(i).copied().unwrap_or(0);
        let (digit, next) = add_with_carry(chunk, other, carry, base);
        sum.push(digit);
        carry = next;
    }
    if carry != 0 {
        sum.try_reserve_exact(1)?;
        sum.push(carry);
    }

    Ok(Magnitude::from_raw(sum, radix))
}
