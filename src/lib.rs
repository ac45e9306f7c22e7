//! # Containment Queries
//!
//! *One call site, three storage-shaped searches.*
//!
//! ## Intuition First
//!
//! Asking "is `x` in here?" of a linked list and of a byte buffer is the
//! same question, but not the same amount of work. The list has to be
//! walked node by node. The byte buffer can be swept a cache line at a
//! time. A packed bit vector holds 64 answers in every word, so one
//! comparison settles 64 elements.
//!
//! This crate keeps the question the same (`contains(&haystack, &x)`) and
//! lets the *type* of the haystack pick how it is answered.
//!
//! ## The Problem
//!
//! A naive generic `contains` only sees "something iterable of `T`":
//! - **Contiguous memory** is scanned one element at a time even when the
//!   hardware could compare a whole chunk at once.
//! - **Packed booleans** are unpacked bit by bit: a word load, a shift and
//!   a mask per element.
//!
//! ## Strategies
//!
//! ```text
//! Generic      any IntoIterator          one element per step, short-circuit
//! Contiguous   [T] with T: Element+FAST  memchr for 1-byte T, 64-byte chunks otherwise
//! BitPacked    BitSlice / BitVector      one 64-bit word per step, edges masked
//! ```
//!
//! The choice is a function of the static type only (see
//! [`dispatch::Haystack::STRATEGY`]); it never looks at the data. A custom
//! comparison ([`contains_by`]) always takes the generic path.
//!
//! ## Complexity Analysis
//!
//! - **Time**: $O(n)$ on every path; the fast paths divide the constant by
//!   the chunk width (bytes) or by 64 (bits).
//! - **Space**: $O(1)$. Nothing is allocated, cached or mutated.
//!
//! ## What Could Go Wrong
//!
//! 1. **Floats**: `NaN != NaN` and `0.0 == -0.0`, so float equality is not
//!    bit equality. `f32`/`f64` stay on the generic path.
//! 2. **Zero bytes**: a byte search must treat `0` as data. `memchr` takes an
//!    explicit length and never stops at a terminator.
//! 3. **Partial words**: a bit range may start and end mid-word, possibly
//!    in the same word. Bits outside the range are masked out before any
//!    word is tested (see [`mask`]).
//!
//! ## Implementation Notes
//!
//! This crate provides:
//! - **`contains` / `position` / `contains_by`**: the dispatching entry points.
//! - **`Element`**: the per-type capability that enables the slice fast path.
//! - **`BitVector` / `BitSlice` / `BitCursor`**: packed boolean storage.
//! - **`scan`, `contiguous`, `packed`**: each search, callable directly.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod bitvec;
pub mod contiguous;
pub mod dispatch;
pub mod error;
pub mod mask;
pub mod packed;
pub mod scan;

pub use bitvec::{BitCursor, BitSlice, BitVector};
pub use contiguous::Element;
pub use dispatch::{contains, contains_by, contains_iter, position, Haystack, Sequence, Strategy};
pub use error::{Error, Result};
