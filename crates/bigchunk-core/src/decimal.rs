//! Decimal text codec.
//!
//! Decoding groups the digits from the right, `width` digits per chunk; the
//! leftmost group may be shorter. Encoding prints the top chunk as-is and
//! every lower chunk zero-padded to `width` digits.

use std::fmt::{self, Write};

use crate::error::{MagnitudeError, Result};
use crate::magnitude::{chunk_buffer, Magnitude};
use crate::radix::{current_radix, Radix};

/// Decode decimal text in the process radix.
pub fn from_decimal(text: &str) -> Result<Magnitude> {
    from_decimal_in(text, current_radix())
}

/// Decode decimal text in `radix`.
///
/// Accepts ASCII digits only, leading zeros allowed. Empty text or any other
/// byte is `InvalidInput`.
pub fn from_decimal_in(text: &str, radix: Radix) -> Result<Magnitude> {
    if text.is_empty() {
        return Err(MagnitudeError::InvalidInput("empty decimal string".into()));
    }
    if let Some(pos) = text.bytes().position(|b| !b.is_ascii_digit()) {
        return Err(MagnitudeError::InvalidInput(format!(
            "non-digit character at byte {pos} in {text:?}"
        )));
    }

    let digits = text.trim_start_matches('0').as_bytes();
    if digits.is_empty() {
        return Magnitude::zero_in(radix);
    }

    let width = radix.width();
    let mut chunks = chunk_buffer(digits.len().div_ceil(width))?;
    // A group is at most 19 digits, which always fits in u64.
    for group in digits.rchunks(width) {
        chunks.push(
            group
                .iter()
                .fold(0u64, |acc, &d| acc * 10 + u64::from(d - b'0')),
        );
    }
    Ok(Magnitude::from_raw(chunks, radix))
}

/// Write the decimal rendering of `value` into `out`.
pub(crate) fn write_decimal<W: Write + ?Sized>(value: &Magnitude, out: &mut W) -> fmt::Result {
    let width = value.radix().width();
    match value.chunks().split_last() {
        Some((top, rest)) => {
            write!(out, "{top}")?;
            for chunk in rest.iter().rev() {
                write!(out, "{chunk:0width$}")?;
            }
            Ok(())
        }
        None => out.write_char('0'),
    }
}

/// Render `value` as decimal text.
#[must_use]
pub fn to_decimal(value: &Magnitude) -> String {
    let mut out = String::with_capacity(rendered_len(value));
    write_decimal(value, &mut out).expect("writing to a String cannot fail");
    out
}

/// Render `value` as decimal text, reporting allocator failure as an error.
pub fn try_to_decimal(value: &Magnitude) -> Result<String> {
    let mut out = String::new();
    out.try_reserve_exact(rendered_len(value))?;
    write_decimal(value, &mut out).expect("writing to a String cannot fail");
    Ok(out)
}

/// Upper bound on the rendered length: 20 digits for the top chunk, `width`
/// for each of the others.
fn rendered_len(value: &Magnitude) -> usize {
    (value.len() - 1) * value.radix().width() + 20
}
