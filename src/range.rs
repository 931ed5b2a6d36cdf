//! Closed intervals over an ordered key domain.
//!
//! [`Range`] is the value the tree indexes. Anything that wants to be stored in a
//! [`RangeTreeNode`](crate::RangeTreeNode) or [`RangeTree`](crate::RangeTree)
//! exposes exactly one `Range` through [`RangeProvider`]; the tree never looks at
//! any other field of the item.

use std::fmt;
use std::ops::RangeInclusive;
use std::rc::Rc;
use std::sync::Arc;

use crate::error::{RangeTreeError, Result};

/// Closed interval `[from, to]` over a totally ordered key.
///
/// Ordering is lexicographic on `(from, to)`: ascending by start, then by end.
/// This is the order items are stored in inside a tree node, and every
/// early-exit in the queries relies on it.
///
/// `from <= to` is assumed but not enforced by [`Range::new`]. Use
/// [`Range::try_new`] when the endpoints come from untrusted input.
///
/// `Range::from` is the start accessor, which shadows [`From::from`] on the
/// type path. Convert from `a..=b` or `(a, b)` with `.into()` instead.
///
/// # Example
/// ```
/// use rangetree::Range;
/// let r = Range::new(3, 9);
/// assert!(r.contains(&3));
/// assert!(r.contains(&9));
/// assert!(!r.contains(&10));
/// assert!(r.intersects(&Range::new(9, 12)));
///
/// let converted: Range<i32> = (3..=9).into();
/// assert_eq!(converted, r);
/// assert_eq!(*r.from(), 3);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Range<K> {
    from: K,
    to: K,
}

impl<K> Range<K> {
    /// Creates `[from, to]` without checking that `from <= to`.
    pub const fn new(from: K, to: K) -> Self {
        Self { from, to }
    }

    /// Lower endpoint (inclusive).
    pub const fn from(&self) -> &K {
        &self.from
    }

    /// Upper endpoint (inclusive).
    pub const fn to(&self) -> &K {
        &self.to
    }

    /// Splits the range back into its endpoints.
    pub fn into_inner(self) -> (K, K) {
        (self.from, self.to)
    }
}

impl<K: Ord> Range<K> {
    /// Creates `[from, to]`, rejecting inverted endpoints.
    ///
    /// # Errors
    /// Returns [`RangeTreeError::InvertedRange`] when `from > to`.
    ///
    /// # Example
    /// ```
    /// use rangetree::Range;
    /// assert!(Range::try_new(1, 5).is_ok());
    /// assert!(Range::try_new(5, 1).is_err());
    /// ```
    pub fn try_new(from: K, to: K) -> Result<Self>
    where
        K: fmt::Debug,
    {
        if from > to {
            return Err(RangeTreeError::InvertedRange {
                from: format!("{from:?}"),
                to: format!("{to:?}"),
            });
        }
        Ok(Self { from, to })
    }

    /// True when `from <= value <= to`.
    pub fn contains(&self, value: &K) -> bool {
        self.from <= *value && *value <= self.to
    }

    /// True when the two closed intervals share at least one key.
    pub fn intersects(&self, other: &Self) -> bool {
        self.from <= other.to && self.to >= other.from
    }
}

impl<K: Clone> Range<K> {
    /// Degenerate interval `[value, value]`.
    pub fn point(value: K) -> Self {
        Self {
            from: value.clone(),
            to: value,
        }
    }
}

impl<K> From<RangeInclusive<K>> for Range<K> {
    fn from(range: RangeInclusive<K>) -> Self {
        let (from, to) = range.into_inner();
        Self { from, to }
    }
}

impl<K> From<(K, K)> for Range<K> {
    fn from((from, to): (K, K)) -> Self {
        Self { from, to }
    }
}

impl<K: fmt::Display> fmt::Display for Range<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.from, self.to)
    }
}

/// Capability of an item that can be stored in the tree: it exposes one range.
///
/// ```
/// use rangetree::{Range, RangeProvider};
///
/// struct Booking {
///     slot: Range<u32>,
///     guest: String,
/// }
///
/// impl RangeProvider<u32> for Booking {
///     fn range(&self) -> &Range<u32> {
///         &self.slot
///     }
/// }
/// ```
pub trait RangeProvider<K> {
    /// The interval this item occupies.
    fn range(&self) -> &Range<K>;
}

impl<K> RangeProvider<K> for Range<K> {
    fn range(&self) -> &Range<K> {
        self
    }
}

impl<K, T: RangeProvider<K> + ?Sized> RangeProvider<K> for &T {
    fn range(&self) -> &Range<K> {
        (**self).range()
    }
}

impl<K, T: RangeProvider<K> + ?Sized> RangeProvider<K> for Box<T> {
    fn range(&self) -> &Range<K> {
        (**self).range()
    }
}

impl<K, T: RangeProvider<K> + ?Sized> RangeProvider<K> for Rc<T> {
    fn range(&self) -> &Range<K> {
        (**self).range()
    }
}

impl<K, T: RangeProvider<K> + ?Sized> RangeProvider<K> for Arc<T> {
    fn range(&self) -> &Range<K> {
        (**self).range()
    }
}
