//! Bit-packed boolean storage.
//!
//! Logical booleans are packed 64 to a word, LSB-first: bit `i` lives in
//! word `i / 64` at position `i % 64`. A single bit has no address of its
//! own, so every view here is an explicit pair of word storage and bit
//! index rather than a reference.
//!
//! # Layout
//!
//! - [`BitVector`]: owned words plus a logical length. Bits past `len` in
//!   the last word are always zero.
//! - [`BitSlice`]: a borrowed half-open bit range `[start, end)` over
//!   `&[u64]`. Neither end has to be word aligned.
//! - [`BitCursor`]: a position inside a `BitSlice`'s storage.

use std::fmt;

use crate::error::{Error, Result};
use crate::mask;

/// Width of one storage word in bits.
pub const WORD_BITS: usize = 64;

#[inline]
fn split_index(i: usize) -> (usize, usize) {
    (i / WORD_BITS, i % WORD_BITS)
}

#[inline]
fn read_bit(words: &[u64], i: usize) -> bool {
    let (word, bit) = split_index(i);
    (words[word] >> bit) & 1 != 0
}

/// An owned, growable, bit-packed vector of booleans.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct BitVector {
    words: Vec<u64>,
    len: usize,
}

impl fmt::Debug for BitVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BitVector")
            .field("len", &self.len)
            .field("ones", &self.count_ones())
            .finish()
    }
}

impl BitVector {
    /// Create an empty vector.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a vector of `len` copies of `value`.
    pub fn repeat(value: bool, len: usize) -> Self {
        let mut words = vec![mask::fill(value); len.div_ceil(WORD_BITS)];
        let tail = len % WORD_BITS;
        if let Some(last) = words.last_mut() {
            if tail != 0 {
                *last &= mask::low(tail);
            }
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(len, value, "built repeated bit vector");

        Self { words, len }
    }

    /// Create a vector from raw words, keeping the first `len` bits.
    pub fn from_words(words: &[u64], len: usize) -> Result<Self> {
        let capacity = words.len() * WORD_BITS;
        if len > capacity {
            return Err(Error::RangeOutOfBounds {
                start: 0,
                end: len,
                len: capacity,
            });
        }

        let mut words = words[..len.div_ceil(WORD_BITS)].to_vec();
        let tail = len % WORD_BITS;
        if let Some(last) = words.last_mut() {
            if tail != 0 {
                *last &= mask::low(tail);
            }
        }
        Ok(Self { words, len })
    }

    /// Return the number of bits in the vector.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Return true if the vector holds no bits.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The backing words. Bits past `len()` read as zero.
    pub fn words(&self) -> &[u64] {
        &self.words
    }

    /// Return the number of set bits.
    pub fn count_ones(&self) -> usize {
        self.words.iter().map(|w| w.count_ones() as usize).sum()
    }

    /// Append a bit.
    pub fn push(&mut self, value: bool) {
        let (word, bit) = split_index(self.len);
        if word == self.words.len() {
            self.words.push(0);
        }
        self.words[word] |= u64::from(value) << bit;
        self.len += 1;
    }

    /// Return the bit at `i`, or `None` past the end.
    pub fn get(&self, i: usize) -> Option<bool> {
        (i < self.len).then(|| read_bit(&self.words, i))
    }

    /// Overwrite the bit at `i`.
    pub fn set(&mut self, i: usize, value: bool) -> Result<()> {
        if i >= self.len {
            return Err(Error::RangeOutOfBounds {
                start: i,
                end: i.saturating_add(1),
                len: self.len,
            });
        }
        let (word, bit) = split_index(i);
        if value {
            self.words[word] |= 1 << bit;
        } else {
            self.words[word] &= !(1 << bit);
        }
        Ok(())
    }

    /// Borrow the whole vector as a bit range.
    pub fn as_bits(&self) -> BitSlice<'_> {
        BitSlice {
            words: &self.words,
            start: 0,
            end: self.len,
        }
    }

    /// Borrow bits `[start, end)`.
    pub fn slice(&self, start: usize, end: usize) -> Result<BitSlice<'_>> {
        self.as_bits().subslice(start, end)
    }
}

impl FromIterator<bool> for BitVector {
    fn from_iter<I: IntoIterator<Item = bool>>(iter: I) -> Self {
        let mut bv = Self::new();
        bv.extend(iter);
        bv
    }
}

impl Extend<bool> for BitVector {
    fn extend<I: IntoIterator<Item = bool>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        let (lower, _) = iter.size_hint();
        self.words
            .reserve((self.len + lower).div_ceil(WORD_BITS) - self.words.len());
        for value in iter {
            self.push(value);
        }
    }
}

/// A borrowed bit range `[start, end)` over packed word storage.
#[derive(Clone, Copy)]
pub struct BitSlice<'a> {
    words: &'a [u64],
    start: usize,
    end: usize,
}

impl fmt::Debug for BitSlice<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BitSlice")
            .field("start", &self.start)
            .field("end", &self.end)
            .field("words", &self.words.len())
            .finish()
    }
}

impl<'a> BitSlice<'a> {
    /// View bits `[start, end)` of `words`.
    pub fn new(words: &'a [u64], start: usize, end: usize) -> Result<Self> {
        if start > end {
            return Err(Error::InvertedRange { start, end });
        }
        let len = words.len() * WORD_BITS;
        if end > len {
            return Err(Error::RangeOutOfBounds { start, end, len });
        }
        Ok(Self { words, start, end })
    }

    /// View every bit of `words`.
    pub fn from_words(words: &'a [u64]) -> Self {
        Self {
            words,
            start: 0,
            end: words.len() * WORD_BITS,
        }
    }

    /// Build the range delimited by two cursors over the same storage.
    pub fn between(begin: BitCursor<'a>, end: BitCursor<'a>) -> Result<Self> {
        begin.distance_to(&end)?;
        Self::new(begin.words, begin.bit, end.bit)
    }

    /// The backing words, including bits outside the range.
    pub fn words(&self) -> &'a [u64] {
        self.words
    }

    /// First bit of the range, as an index into `words()`.
    pub fn start(&self) -> usize {
        self.start
    }

    /// One past the last bit of the range, as an index into `words()`.
    pub fn end(&self) -> usize {
        self.end
    }

    /// Number of bits in the range.
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Return true if the range is empty.
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Return the `i`-th bit of the range, or `None` past the end.
    pub fn get(&self, i: usize) -> Option<bool> {
        (i < self.len()).then(|| read_bit(self.words, self.start + i))
    }

    /// Sub-range `[start, end)`, relative to this range.
    pub fn subslice(&self, start: usize, end: usize) -> Result<Self> {
        if start > end {
            return Err(Error::InvertedRange { start, end });
        }
        if end > self.len() {
            return Err(Error::RangeOutOfBounds {
                start,
                end,
                len: self.len(),
            });
        }
        Ok(Self {
            words: self.words,
            start: self.start + start,
            end: self.start + end,
        })
    }

    /// Divide the range at `mid`.
    ///
    /// # Panics
    ///
    /// Panics if `mid > len()`.
    pub fn split_at(&self, mid: usize) -> (Self, Self) {
        assert!(mid <= self.len(), "mid {mid} > len {}", self.len());
        let split = self.start + mid;
        (
            Self {
                end: split,
                ..*self
            },
            Self {
                start: split,
                ..*self
            },
        )
    }

    /// The begin and end positions of the range.
    pub fn cursors(&self) -> (BitCursor<'a>, BitCursor<'a>) {
        (
            BitCursor {
                words: self.words,
                bit: self.start,
            },
            BitCursor {
                words: self.words,
                bit: self.end,
            },
        )
    }

    /// Iterate the bits of the range in storage order.
    pub fn iter(&self) -> BitIter<'a> {
        let (front, back) = self.cursors();
        BitIter { front, back }
    }
}

impl<'a> IntoIterator for BitSlice<'a> {
    type Item = bool;
    type IntoIter = BitIter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// A position in packed word storage: the storage plus a bit index.
#[derive(Clone, Copy)]
pub struct BitCursor<'a> {
    words: &'a [u64],
    bit: usize,
}

impl fmt::Debug for BitCursor<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BitCursor").field("bit", &self.bit).finish()
    }
}

impl PartialEq for BitCursor<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.bit == other.bit && std::ptr::eq(self.words, other.words)
    }
}

impl Eq for BitCursor<'_> {}

impl<'a> BitCursor<'a> {
    /// Bit index into the storage.
    pub fn bit(&self) -> usize {
        self.bit
    }

    /// Step forward one bit.
    pub fn advance(&mut self) {
        self.bit += 1;
    }

    /// Step forward `n` bits.
    pub fn advance_by(&mut self, n: usize) {
        self.bit += n;
    }

    /// Read the bit under the cursor.
    ///
    /// Must not be called on an end position.
    pub fn get(&self) -> bool {
        debug_assert!(self.bit < self.words.len() * WORD_BITS);
        read_bit(self.words, self.bit)
    }

    /// Number of single steps from `self` to `end`.
    pub fn distance_to(&self, end: &BitCursor<'a>) -> Result<usize> {
        if !std::ptr::eq(self.words, end.words) {
            return Err(Error::ForeignCursor);
        }
        end.bit.checked_sub(self.bit).ok_or(Error::InvertedRange {
            start: self.bit,
            end: end.bit,
        })
    }
}

/// Iterator over the bits of a [`BitSlice`].
#[derive(Clone, Debug)]
pub struct BitIter<'a> {
    front: BitCursor<'a>,
    back: BitCursor<'a>,
}

impl Iterator for BitIter<'_> {
    type Item = bool;

    #[inline]
    fn next(&mut self) -> Option<bool> {
        if self.front == self.back {
            return None;
        }
        let value = self.front.get();
        self.front.advance();
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.back.bit - self.front.bit;
        (n, Some(n))
    }
}

impl ExactSizeIterator for BitIter<'_> {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bitvector_push_get() {
        let bv: BitVector = [true, false, true, true].into_iter().collect();
        assert_eq!(bv.len(), 4);
        assert_eq!(bv.get(0), Some(true));
        assert_eq!(bv.get(1), Some(false));
        assert_eq!(bv.get(4), None);
        assert_eq!(bv.count_ones(), 3);
    }

    #[test]
    fn test_bitvector_repeat_clears_tail() {
        let bv = BitVector::repeat(true, 65);
        assert_eq!(bv.words(), &[u64::MAX, 1]);
        assert_eq!(bv.count_ones(), 65);
        assert!(BitVector::repeat(true, 0).words().is_empty());
    }

    #[test]
    fn test_bitvector_set() {
        let mut bv = BitVector::repeat(false, 70);
        bv.set(66, true).unwrap();
        assert_eq!(bv.get(66), Some(true));
        bv.set(66, false).unwrap();
        assert_eq!(bv.count_ones(), 0);
        assert_eq!(
            bv.set(70, true),
            Err(Error::RangeOutOfBounds {
                start: 70,
                end: 71,
                len: 70
            })
        );
        assert_eq!(
            bv.set(usize::MAX, true),
            Err(Error::RangeOutOfBounds {
                start: usize::MAX,
                end: usize::MAX,
                len: 70
            })
        );
    }

    #[test]
    fn test_from_words_masks_tail() {
        let bv = BitVector::from_words(&[u64::MAX, u64::MAX], 3).unwrap();
        assert_eq!(bv.words(), &[0b111]);
        assert!(BitVector::from_words(&[0], 65).is_err());
    }

    #[test]
    fn test_bitslice_bounds() {
        let words = [0u64; 2];
        assert!(BitSlice::new(&words, 0, 128).is_ok());
        assert_eq!(
            BitSlice::new(&words, 0, 129).unwrap_err(),
            Error::RangeOutOfBounds {
                start: 0,
                end: 129,
                len: 128
            }
        );
        assert_eq!(
            BitSlice::new(&words, 5, 4).unwrap_err(),
            Error::InvertedRange { start: 5, end: 4 }
        );
    }

    #[test]
    fn test_bitslice_iter_unaligned() {
        let words = [0b1011u64 << 62, 0b10];
        let bits = BitSlice::new(&words, 62, 67).unwrap();
        let collected: Vec<bool> = bits.iter().collect();
        assert_eq!(collected, vec![true, true, false, true, false]);
        assert_eq!(bits.iter().len(), 5);
    }

    #[test]
    fn test_cursor_walk_and_distance() {
        let words = [0b100u64];
        let bits = BitSlice::from_words(&words);
        let (mut begin, end) = bits.cursors();
        assert_eq!(begin.distance_to(&end), Ok(64));
        begin.advance_by(2);
        assert_eq!(begin.bit(), 2);
        assert!(begin.get());
        begin.advance();
        assert!(!begin.get());
        assert_eq!(
            end.distance_to(&begin),
            Err(Error::InvertedRange { start: 64, end: 3 })
        );
    }

    #[test]
    fn test_between_rejects_foreign_cursors() {
        let a = [0u64];
        let b = [0u64];
        let (begin, _) = BitSlice::from_words(&a).cursors();
        let (_, end) = BitSlice::from_words(&b).cursors();
        assert_eq!(
            BitSlice::between(begin, end).unwrap_err(),
            Error::ForeignCursor
        );

        let (mut begin, end) = BitSlice::from_words(&a).cursors();
        begin.advance_by(10);
        let bits = BitSlice::between(begin, end).unwrap();
        assert_eq!((bits.start(), bits.len()), (10, 54));
    }

    #[test]
    fn test_split_at() {
        let bv = BitVector::repeat(true, 100);
        assert_eq!(bv.as_bits().get(99), Some(true));
        assert_eq!(bv.as_bits().get(100), None);
        let (head, tail) = bv.as_bits().split_at(30);
        assert_eq!(head.len(), 30);
        assert_eq!(tail.len(), 70);
        assert_eq!(tail.start(), 30);
        let sub = bv.slice(10, 20).unwrap();
        assert_eq!((sub.start(), sub.end()), (10, 20));
    }
}
