//! Canonical form for chunk sequences.

/// Drop most-significant zero chunks, keeping at least one chunk.
pub fn normalize(chunks: &mut Vec<u64>) {
    while chunks.len() > 1 && chunks.last() == Some(&0) {
        chunks.pop();
    }
}

/// Whether `chunks` is non-empty and has no superfluous top zero chunk.
#[must_use]
pub fn is_canonical(chunks: &[u64]) -> bool {
    match chunks {
        [] => false,
        [_] => true,
        [.., top] => *top != 0,
    }
}
