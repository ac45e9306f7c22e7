//! Public entry points and the storage capabilities they route on.
//!
//! Every searchable container implements [`Haystack`], whose impl fixes
//! at compile time which of the three searches runs:
//!
//! | Container | Strategy |
//! |---|---|
//! | `[T]`, `Vec<T>`, `[T; N]`, `Box<[T]>`, `VecDeque<T>` | [`Strategy::Contiguous`] if `T::FAST`, else [`Strategy::Generic`] |
//! | [`BitSlice`], [`BitVector`] | [`Strategy::BitPacked`] |
//! | `LinkedList<T>` | [`Strategy::Generic`] |
//!
//! A caller-supplied predicate always takes the generic path, since both
//! fast paths rely on bit-pattern equality. That path only needs
//! [`Sequence`], which every container implements for any element type.

use std::collections::{LinkedList, VecDeque};

use crate::bitvec::{BitSlice, BitVector};
use crate::contiguous::{self, Element};
use crate::{packed, scan};

/// Which search a container's storage admits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strategy {
    /// Fixed-width elements in consecutive memory.
    Contiguous,
    /// Booleans packed into 64-bit words.
    BitPacked,
    /// One element at a time.
    Generic,
}

/// A sequence of any element type, traversed one element at a time.
///
/// This is all [`contains_by`] needs, so it is implemented for every
/// element type, comparable or not.
pub trait Sequence {
    /// Logical element type.
    type Item;

    /// Number of logical elements.
    fn item_count(&self) -> usize;

    /// Index of the first element satisfying `pred`, one element at a time.
    fn position_where<F>(&self, pred: F) -> Option<usize>
    where
        F: FnMut(&Self::Item) -> bool;
}

/// A sequence that can answer equality queries through its storage.
pub trait Haystack: Sequence {
    /// The search [`Haystack::position_of`] runs for this container.
    const STRATEGY: Strategy;

    /// Index of the first element equal to `target`, via `STRATEGY`.
    fn position_of(&self, target: &Self::Item) -> Option<usize>;

    /// Return true if some element equals `target`, via `STRATEGY`.
    fn contains_value(&self, target: &Self::Item) -> bool {
        self.position_of(target).is_some()
    }
}

const fn slice_strategy<T: Element>() -> Strategy {
    if T::FAST {
        Strategy::Contiguous
    } else {
        Strategy::Generic
    }
}

macro_rules! slice_like {
    ($([$($generics:tt)*] $container:ty),* $(,)?) => {$(
        impl<T, $($generics)*> Sequence for $container {
            type Item = T;

            fn item_count(&self) -> usize {
                self.len()
            }

            fn position_where<F>(&self, pred: F) -> Option<usize>
            where
                F: FnMut(&T) -> bool,
            {
                self.iter().position(pred)
            }
        }

        impl<T: Element, $($generics)*> Haystack for $container {
            const STRATEGY: Strategy = slice_strategy::<T>();

            #[inline]
            fn position_of(&self, target: &T) -> Option<usize> {
                contiguous::position(&self[..], target)
            }

            #[inline]
            fn contains_value(&self, target: &T) -> bool {
                contiguous::contains(&self[..], target)
            }
        }
    )*};
}

slice_like!(
    [] [T],
    [] Vec<T>,
    [] Box<[T]>,
    [const N: usize] [T; N],
);

impl<T> Sequence for VecDeque<T> {
    type Item = T;

    fn item_count(&self) -> usize {
        self.len()
    }

    fn position_where<F>(&self, pred: F) -> Option<usize>
    where
        F: FnMut(&T) -> bool,
    {
        self.iter().position(pred)
    }
}

impl<T: Element> Haystack for VecDeque<T> {
    const STRATEGY: Strategy = slice_strategy::<T>();

    fn position_of(&self, target: &T) -> Option<usize> {
        let (front, back) = self.as_slices();
        contiguous::position(front, target)
            .or_else(|| contiguous::position(back, target).map(|i| front.len() + i))
    }

    fn contains_value(&self, target: &T) -> bool {
        let (front, back) = self.as_slices();
        contiguous::contains(front, target) || contiguous::contains(back, target)
    }
}

impl<T> Sequence for LinkedList<T> {
    type Item = T;

    fn item_count(&self) -> usize {
        self.len()
    }

    fn position_where<F>(&self, pred: F) -> Option<usize>
    where
        F: FnMut(&T) -> bool,
    {
        self.iter().position(pred)
    }
}

impl<T: PartialEq> Haystack for LinkedList<T> {
    const STRATEGY: Strategy = Strategy::Generic;

    fn position_of(&self, target: &T) -> Option<usize> {
        scan::position_by(self, target, |x, t| *x == t)
    }
}

impl Sequence for BitSlice<'_> {
    type Item = bool;

    fn item_count(&self) -> usize {
        self.len()
    }

    fn position_where<F>(&self, mut pred: F) -> Option<usize>
    where
        F: FnMut(&bool) -> bool,
    {
        self.iter().position(|bit| pred(&bit))
    }
}

impl Haystack for BitSlice<'_> {
    const STRATEGY: Strategy = Strategy::BitPacked;

    #[inline]
    fn position_of(&self, target: &bool) -> Option<usize> {
        packed::position(*self, *target)
    }

    #[inline]
    fn contains_value(&self, target: &bool) -> bool {
        packed::contains(*self, *target)
    }
}

impl Sequence for BitVector {
    type Item = bool;

    fn item_count(&self) -> usize {
        self.len()
    }

    fn position_where<F>(&self, pred: F) -> Option<usize>
    where
        F: FnMut(&bool) -> bool,
    {
        self.as_bits().position_where(pred)
    }
}

impl Haystack for BitVector {
    const STRATEGY: Strategy = Strategy::BitPacked;

    #[inline]
    fn position_of(&self, target: &bool) -> Option<usize> {
        packed::position(self.as_bits(), *target)
    }

    #[inline]
    fn contains_value(&self, target: &bool) -> bool {
        packed::contains(self.as_bits(), *target)
    }
}

/// The strategy [`contains`] would pick for `H`.
pub const fn strategy_of<H: Haystack + ?Sized>() -> Strategy {
    H::STRATEGY
}

/// Return true if `haystack` holds `target`.
///
/// Runs the fastest search the container's storage admits; the answer is
/// the same on every path.
///
/// ```
/// use scanbits::{contains, BitVector};
///
/// assert!(!contains(&vec![b'a'; 16], &b'B'));
/// assert!(!contains(&vec![1i32; 16], &2));
/// assert!(!contains(&BitVector::repeat(true, 16), &false));
/// ```
#[inline]
pub fn contains<H: Haystack + ?Sized>(haystack: &H, target: &H::Item) -> bool {
    #[cfg(feature = "tracing")]
    tracing::trace!(strategy = ?H::STRATEGY, len = haystack.item_count(), "contains");

    haystack.contains_value(target)
}

/// Index of the first element of `haystack` equal to `target`.
#[inline]
pub fn position<H: Haystack + ?Sized>(haystack: &H, target: &H::Item) -> Option<usize> {
    #[cfg(feature = "tracing")]
    tracing::trace!(strategy = ?H::STRATEGY, len = haystack.item_count(), "position");

    haystack.position_of(target)
}

/// Return true if some element `x` of `haystack` has `pred(x, target)`.
///
/// Always scans element by element.
#[inline]
pub fn contains_by<H, U, F>(haystack: &H, target: &U, mut pred: F) -> bool
where
    H: Sequence + ?Sized,
    U: ?Sized,
    F: FnMut(&H::Item, &U) -> bool,
{
    #[cfg(feature = "tracing")]
    tracing::trace!(
        strategy = ?Strategy::Generic,
        len = haystack.item_count(),
        "contains_by"
    );

    haystack.position_where(|x| pred(x, target)).is_some()
}

/// Return true if any item of an arbitrary forward sequence equals `target`.
#[inline]
pub fn contains_iter<I, U>(iter: I, target: &U) -> bool
where
    I: IntoIterator,
    I::Item: PartialEq<U>,
    U: ?Sized,
{
    scan::contains(iter, target)
}
