//! Block search over contiguous slices of trivially comparable elements.
//!
//! Whether a slice gets a fast path is decided by its element type through
//! [`Element`]. Types whose `==` is plain bit-pattern equality on fixed
//! width storage (integers, `bool`, `char`) override the slice search:
//!
//! - one-byte elements are reinterpreted as bytes and handed to `memchr`;
//! - wider elements are compared a chunk of [`CHUNK_BYTES`] at a time with
//!   no branch inside the chunk, then element-wise on the tail.
//!
//! Everything else (floats, strings, references, `Option`, tuples, arrays,
//! user types) keeps the default element-wise scan. Floats stay off the
//! fast path on purpose: `NaN != NaN` and `0.0 == -0.0` are not bitwise
//! facts.

use std::mem::size_of;

use crate::scan;

/// Bytes compared per chunk on the wide-element path. One cache line.
pub const CHUNK_BYTES: usize = 64;

/// Capability of an element type to be searched inside a slice.
///
/// Implement it with an empty body to make a type searchable through
/// [`crate::contains`]; the default methods scan one element at a time.
pub trait Element: PartialEq + Sized {
    /// True when the slice search below is a storage-level fast path.
    const FAST: bool = false;

    /// Index of the first element of `haystack` equal to `needle`.
    fn slice_position(haystack: &[Self], needle: &Self) -> Option<usize> {
        scan::position_by(haystack, needle, |x, t| *x == t)
    }

    /// Return true if `haystack` holds `needle`.
    fn slice_contains(haystack: &[Self], needle: &Self) -> bool {
        Self::slice_position(haystack, needle).is_some()
    }
}

/// Number of `T` compared per chunk.
#[inline]
pub const fn lanes<T>() -> usize {
    match size_of::<T>() {
        0 => 1,
        width if width >= CHUNK_BYTES => 1,
        width => CHUNK_BYTES / width,
    }
}

#[inline]
fn chunk_hit<T: Copy + Eq>(chunk: &[T], needle: T) -> bool {
    chunk.iter().fold(false, |hit, &x| hit | (x == needle))
}

/// Chunked search for fixed-width elements.
///
/// Slices shorter than one chunk go straight to the element-wise tail.
#[inline]
pub fn chunked_position<T: Copy + Eq>(haystack: &[T], needle: T) -> Option<usize> {
    let lanes = lanes::<T>();
    let mut chunks = haystack.chunks_exact(lanes);
    for (i, chunk) in chunks.by_ref().enumerate() {
        if chunk_hit(chunk, needle) {
            return chunk
                .iter()
                .position(|&x| x == needle)
                .map(|j| i * lanes + j);
        }
    }
    let rest = chunks.remainder();
    let base = haystack.len() - rest.len();
    rest.iter().position(|&x| x == needle).map(|j| base + j)
}

/// Chunked containment test for fixed-width elements.
#[inline]
pub fn chunked_contains<T: Copy + Eq>(haystack: &[T], needle: T) -> bool {
    let mut chunks = haystack.chunks_exact(lanes::<T>());
    chunks.by_ref().any(|chunk| chunk_hit(chunk, needle))
        || chunks.remainder().iter().any(|&x| x == needle)
}

/// Byte-pattern search. Zero is data, not a terminator.
#[inline]
pub fn byte_position(haystack: &[u8], needle: u8) -> Option<usize> {
    memchr::memchr(needle, haystack)
}

macro_rules! impl_byte_element {
    ($($t:ty),*) => {$(
        impl Element for $t {
            const FAST: bool = true;

            #[inline]
            fn slice_position(haystack: &[Self], needle: &Self) -> Option<usize> {
                byte_position(bytemuck::cast_slice(haystack), *needle as u8)
            }
        }
    )*};
}

macro_rules! impl_wide_element {
    ($($t:ty),*) => {$(
        impl Element for $t {
            const FAST: bool = true;

            #[inline]
            fn slice_position(haystack: &[Self], needle: &Self) -> Option<usize> {
                chunked_position(haystack, *needle)
            }

            #[inline]
            fn slice_contains(haystack: &[Self], needle: &Self) -> bool {
                chunked_contains(haystack, *needle)
            }
        }
    )*};
}

impl_byte_element!(u8, i8, bool);
impl_wide_element!(u16, u32, u64, u128, usize, i16, i32, i64, i128, isize, char);

impl Element for f32 {}
impl Element for f64 {}
impl Element for String {}
impl Element for () {}
impl<T: PartialEq + ?Sized> Element for &T {}
impl<T: PartialEq + ?Sized> Element for Box<T> {}
impl<T: PartialEq> Element for Option<T> {}
impl<T: PartialEq> Element for Vec<T> {}
impl<T: PartialEq, const N: usize> Element for [T; N] {}

macro_rules! impl_tuple_element {
    ($(($($name:ident),+)),*) => {$(
        impl<$($name: PartialEq),+> Element for ($($name,)+) {}
    )*};
}

impl_tuple_element!(
    (A),
    (A, B),
    (A, B, C),
    (A, B, C, D),
    (A, B, C, D, E),
    (A, B, C, D, E, F)
);

/// Index of the first element of `haystack` equal to `needle`.
#[inline]
pub fn position<T: Element>(haystack: &[T], needle: &T) -> Option<usize> {
    T::slice_position(haystack, needle)
}

/// Return true if `haystack` holds `needle`.
#[inline]
pub fn contains<T: Element>(haystack: &[T], needle: &T) -> bool {
    T::slice_contains(haystack, needle)
}
