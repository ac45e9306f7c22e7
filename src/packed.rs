//! Word-at-a-time search over packed booleans.
//!
//! A whole word fully inside the range contains the target iff it differs
//! from [`mask::fill`]`(!target)`. The first and last words may be cut by
//! the range, so their out-of-range bits are masked away before the test.

use crate::bitvec::{BitSlice, WORD_BITS};
use crate::mask;

#[inline]
fn first_hit(hits: u64, word: usize, start: usize) -> Option<usize> {
    (hits != 0).then(|| word * WORD_BITS + hits.trailing_zeros() as usize - start)
}

/// Index, relative to `start`, of the first bit in `[start, end)` of
/// `words` equal to `target`.
pub fn position_in(words: &[u64], start: usize, end: usize, target: bool) -> Option<usize> {
    debug_assert!(start <= end && end <= words.len() * WORD_BITS);
    if start == end {
        return None;
    }

    let first = start / WORD_BITS;
    let last = (end - 1) / WORD_BITS;
    let head = start % WORD_BITS;
    // Bits of the last word inside the range: 1..=64.
    let tail = end - last * WORD_BITS;

    if first == last {
        let hits = mask::matches(words[first], target) & mask::span(head, tail);
        return first_hit(hits, first, start);
    }

    let hits = mask::matches(words[first], target) & !mask::low(head);
    if let Some(pos) = first_hit(hits, first, start) {
        return Some(pos);
    }

    for (i, &word) in words[first + 1..last].iter().enumerate() {
        if let Some(pos) = first_hit(mask::matches(word, target), first + 1 + i, start) {
            return Some(pos);
        }
    }

    let hits = mask::matches(words[last], target) & mask::low(tail);
    first_hit(hits, last, start)
}

/// Return true if any bit in `[start, end)` of `words` equals `target`.
pub fn contains_in(words: &[u64], start: usize, end: usize, target: bool) -> bool {
    debug_assert!(start <= end && end <= words.len() * WORD_BITS);
    if start == end {
        return false;
    }

    let first = start / WORD_BITS;
    let last = (end - 1) / WORD_BITS;
    let head = start % WORD_BITS;
    let tail = end - last * WORD_BITS;

    if first == last {
        return mask::matches(words[first], target) & mask::span(head, tail) != 0;
    }

    let miss = mask::fill(!target);
    mask::matches(words[first], target) & !mask::low(head) != 0
        || words[first + 1..last].iter().any(|&w| w != miss)
        || mask::matches(words[last], target) & mask::low(tail) != 0
}

/// Index of the first bit of `bits` equal to `target`.
#[inline]
pub fn position(bits: BitSlice<'_>, target: bool) -> Option<usize> {
    position_in(bits.words(), bits.start(), bits.end(), target)
}

/// Return true if `bits` holds `target` anywhere.
#[inline]
pub fn contains(bits: BitSlice<'_>, target: bool) -> bool {
    contains_in(bits.words(), bits.start(), bits.end(), target)
}
