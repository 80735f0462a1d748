//! Cyclic index arithmetic over a bank of `len` questions.
//!
//! All functions return 0 when `len` is 0.

#[must_use]
pub fn normalize_index(index: usize, len: usize) -> usize {
    if len == 0 { 0 } else { index % len }
}

/// `(index + 1) mod len`
#[must_use]
pub fn next_index(index: usize, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    (normalize_index(index, len) + 1) % len
}

/// `(index - 1 + len) mod len`
#[must_use]
pub fn prev_index(index: usize, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    (normalize_index(index, len) + len - 1) % len
}
