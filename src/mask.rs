//! Word masks for partial-word bit ranges.
//!
//! Bits are numbered LSB-first inside a 64-bit word. Every helper here is
//! plain shift arithmetic so it can be checked exhaustively on its own.

use crate::bitvec::WORD_BITS;

/// A word with the `n` low bits set. `n` may be anything in `0..=64`.
#[inline]
pub const fn low(n: usize) -> u64 {
    debug_assert!(n <= WORD_BITS);
    if n >= WORD_BITS {
        !0u64
    } else {
        (1u64 << n).wrapping_sub(1)
    }
}

/// A word with bits `[lo, hi)` set.
///
/// `lo == hi` yields an empty mask.
#[inline]
pub const fn span(lo: usize, hi: usize) -> u64 {
    debug_assert!(lo <= hi && hi <= WORD_BITS);
    low(hi) & !low(lo)
}

/// The word every bit of which reads as `value`.
#[inline]
pub const fn fill(value: bool) -> u64 {
    if value {
        !0u64
    } else {
        0
    }
}

/// Ones wherever `word` stores `target`.
///
/// Equivalent to comparing against the complement of the non-target
/// pattern: `word ^ fill(!target)`.
#[inline]
pub const fn matches(word: u64, target: bool) -> u64 {
    word ^ fill(!target)
}
