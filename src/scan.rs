//! Element-at-a-time scanning over any forward sequence.
//!
//! This is the path every query can fall back to. It needs nothing from
//! the sequence beyond single-step iteration and a comparison.

/// Index of the first item for which `pred(item, target)` holds.
#[inline]
pub fn position_by<I, U, F>(iter: I, target: &U, mut pred: F) -> Option<usize>
where
    I: IntoIterator,
    U: ?Sized,
    F: FnMut(&I::Item, &U) -> bool,
{
    iter.into_iter().position(|item| pred(&item, target))
}

/// Return true if some item satisfies `pred(item, target)`.
#[inline]
pub fn contains_by<I, U, F>(iter: I, target: &U, pred: F) -> bool
where
    I: IntoIterator,
    U: ?Sized,
    F: FnMut(&I::Item, &U) -> bool,
{
    position_by(iter, target, pred).is_some()
}

/// Index of the first item equal to `target`.
#[inline]
pub fn position<I, U>(iter: I, target: &U) -> Option<usize>
where
    I: IntoIterator,
    I::Item: PartialEq<U>,
    U: ?Sized,
{
    position_by(iter, target, |item, target| item == target)
}

/// Return true if some item equals `target`.
#[inline]
pub fn contains<I, U>(iter: I, target: &U) -> bool
where
    I: IntoIterator,
    I::Item: PartialEq<U>,
    U: ?Sized,
{
    position(iter, target).is_some()
}
