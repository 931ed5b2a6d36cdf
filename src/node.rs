//! Centered interval tree node.
//!
//! A node is built once from a collection of items and is immutable afterwards.
//! Build picks a center key from the endpoint median, keeps the items that
//! straddle the center, and pushes the rest into a left subtree (ending before
//! the center) or a right subtree (starting after it):
//!
//! ```text
//!                center
//!                  |
//!   [left]   |===straddling===|   [right]
//!   to < c                        from > c
//! ```
//!
//! Straddling items are kept sorted ascending by `from` (then `to`). The query
//! loops stop scanning a node as soon as an item starts past the query, so that
//! order is a hard precondition of every query.

use std::cmp::Ordering;
use std::fmt;

use log::warn;

use crate::error::{RangeTreeError, Result};
use crate::range::{Range, RangeProvider};

/// One node of a centered interval tree, owning its subtrees.
#[derive(Clone, Debug)]
pub struct RangeTreeNode<K, T> {
    /// Split key: every stored item satisfies `from <= center <= to`.
    center: K,
    /// Items straddling `center`, ascending by `from` then `to`.
    items: Vec<T>,
    /// Items with `to < center`.
    left: Option<Box<RangeTreeNode<K, T>>>,
    /// Items with `from > center`.
    right: Option<Box<RangeTreeNode<K, T>>>,
}

impl<K, T> RangeTreeNode<K, T>
where
    K: Ord + Clone,
    T: RangeProvider<K>,
{
    /// Builds a tree over `items`, storing them in natural [`Range`] order.
    ///
    /// Returns `None` for an empty collection: there is no center to split on,
    /// and callers treat the missing tree as one that matches nothing.
    ///
    /// # Performance
    /// O(n log n). An item only goes to a child when both its endpoints lie
    /// on one side of the center, and at most half the endpoints do, so each
    /// child holds at most half the items and depth is at most `log2(n) + 1`.
    ///
    /// # Example
    /// ```
    /// use rangetree::{Range, RangeTreeNode};
    /// let node = RangeTreeNode::new(vec![Range::new(1, 5), Range::new(4, 8)]).unwrap();
    /// assert_eq!(node.len(), 2);
    /// assert!(RangeTreeNode::<i32, Range<i32>>::new(Vec::new()).is_none());
    /// ```
    pub fn new(items: Vec<T>) -> Option<Self> {
        Self::build(items, &mut |a: &T, b: &T| a.range().cmp(b.range()))
    }

    /// Builds a tree storing each node's items in the order given by `comparer`.
    ///
    /// The comparer must sort ascending by range start; ties may be broken any
    /// way. The result is checked after the build, because an out-of-order
    /// node silently drops matches from the query scans.
    ///
    /// # Errors
    /// Returns [`RangeTreeError::UnorderedComparer`] if any node ends up with an
    /// item whose start is smaller than the start of the item before it.
    ///
    /// # Example
    /// ```
    /// use rangetree::{Range, RangeTreeNode};
    /// // Ascending start, descending end inside equal starts: accepted.
    /// let items = vec![Range::new(1, 5), Range::new(1, 9), Range::new(3, 4)];
    /// let ok = RangeTreeNode::with_comparer(items.clone(), |a: &Range<i32>, b: &Range<i32>| {
    ///     a.from().cmp(b.from()).then(b.to().cmp(a.to()))
    /// });
    /// assert!(ok.is_ok());
    ///
    /// // Descending start: rejected.
    /// let bad = RangeTreeNode::with_comparer(items, |a: &Range<i32>, b: &Range<i32>| b.cmp(a));
    /// assert!(bad.is_err());
    /// ```
    pub fn with_comparer<F>(items: Vec<T>, mut comparer: F) -> Result<Option<Self>>
    where
        F: FnMut(&T, &T) -> Ordering,
        K: fmt::Debug,
    {
        let node = Self::build(items, &mut comparer);
        if let Some(node) = &node {
            node.check_order()?;
        }
        Ok(node)
    }

    fn build<F>(items: Vec<T>, comparer: &mut F) -> Option<Self>
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        if items.is_empty() {
            return None;
        }

        // The center is the endpoint at index n of the 2n sorted endpoints.
        // Selecting it yields the same key as a full sort.
        let center = {
            let mut endpoints: Vec<&K> = Vec::with_capacity(items.len() * 2);
            for item in &items {
                let range = item.range();
                endpoints.push(range.from());
                endpoints.push(range.to());
            }
            let mid = items.len();
            let (_, median, _) = endpoints.select_nth_unstable(mid);
            (*median).clone()
        };

        let mut left = Vec::new();
        let mut right = Vec::new();
        let mut straddling = Vec::new();
        for item in items {
            let range = item.range();
            if *range.to() < center {
                left.push(item);
            } else if *range.from() > center {
                right.push(item);
            } else {
                straddling.push(item);
            }
        }

        // The item that contributed the center always straddles it, so both
        // child collections are strictly smaller than the input.
        straddling.sort_by(|a, b| comparer(a, b));

        Some(Self {
            center,
            items: straddling,
            left: Self::build(left, comparer).map(Box::new),
            right: Self::build(right, comparer).map(Box::new),
        })
    }

    fn check_order(&self) -> Result<()>
    where
        K: fmt::Debug,
    {
        for pair in self.items.windows(2) {
            let (earlier, later) = (pair[0].range().from(), pair[1].range().from());
            if later < earlier {
                warn!("rejecting comparer: start {later:?} sorted after {earlier:?}");
                return Err(RangeTreeError::UnorderedComparer {
                    earlier: format!("{earlier:?}"),
                    later: format!("{later:?}"),
                });
            }
        }
        if let Some(left) = &self.left {
            left.check_order()?;
        }
        if let Some(right) = &self.right {
            right.check_order()?;
        }
        Ok(())
    }

    /// Finds every item whose range contains `value` (stab query).
    ///
    /// Matches are appended to `results`; their order is unspecified.
    ///
    /// # Example
    /// ```
    /// use rangetree::{Range, RangeTreeNode};
    /// let node = RangeTreeNode::new(vec![Range::new(0, 4), Range::new(3, 7), Range::new(8, 9)]).unwrap();
    /// let mut results = Vec::new();
    /// node.query_point(&3, &mut results);
    /// assert_eq!(results.len(), 2);
    /// ```
    pub fn query_point<'a>(&'a self, value: &K, results: &mut Vec<&'a T>) {
        self.push_containing(value, results);

        // Matches at the center are all stored here, so only strictly smaller
        // or larger values need a subtree.
        match value.cmp(&self.center) {
            Ordering::Less => {
                if let Some(left) = &self.left {
                    left.query_point(value, results);
                }
            }
            Ordering::Greater => {
                if let Some(right) = &self.right {
                    right.query_point(value, results);
                }
            }
            Ordering::Equal => {}
        }
    }

    /// Finds every item whose range intersects `range`.
    ///
    /// Matches are appended to `results`; their order is unspecified.
    ///
    /// # Example
    /// ```
    /// use rangetree::{Range, RangeTreeNode};
    /// let node = RangeTreeNode::new(vec![Range::new(0, 4), Range::new(3, 7), Range::new(8, 9)]).unwrap();
    /// let mut results = Vec::new();
    /// node.query_intersecting(&Range::new(5, 8), &mut results);
    /// assert_eq!(results.len(), 2);
    /// ```
    pub fn query_intersecting<'a>(&'a self, range: &Range<K>, results: &mut Vec<&'a T>) {
        for item in &self.items {
            let item_range = item.range();
            if item_range.from() > range.to() {
                break;
            }
            if item_range.intersects(range) {
                results.push(item);
            }
        }

        // A query range can straddle the center and need both sides.
        if *range.from() < self.center
            && let Some(left) = &self.left
        {
            left.query_intersecting(range, results);
        }
        if *range.to() > self.center
            && let Some(right) = &self.right
        {
            right.query_intersecting(range, results);
        }
    }

    /// Finds the items nearest to `value` from the left.
    ///
    /// If some item contains `value`, every containing item is returned, just
    /// like [`query_point`](Self::query_point). Otherwise the result is every
    /// item ending before `value` whose `to` is the largest among them, ties
    /// included. Nothing is returned when no item ends before `value`.
    ///
    /// ```text
    ///                     value
    ///   |====#1====|        |
    ///     |==#2==|          |      -> #1 and #3
    ///  |=====#3===|         |
    /// ```
    ///
    /// Matches are appended to `results`.
    pub fn query_nearest_left<'a>(&'a self, value: &K, results: &mut Vec<&'a T>) {
        results.extend(self.nearest_left(value));
    }

    /// Finds the items nearest to `value` from the right.
    ///
    /// If some item contains `value`, every containing item is returned, just
    /// like [`query_point`](Self::query_point). Otherwise the result is every
    /// item starting after `value` whose `from` is the smallest among them,
    /// ties included. Nothing is returned when no item starts after `value`.
    ///
    /// Matches are appended to `results`.
    pub fn query_nearest_right<'a>(&'a self, value: &K, results: &mut Vec<&'a T>) {
        results.extend(self.nearest_right(value));
    }

    fn nearest_left<'a>(&'a self, value: &K) -> Vec<&'a T> {
        let mut found = Vec::new();
        self.push_containing(value, &mut found);
        if !found.is_empty() {
            if let Some(child) = self.child_towards(value) {
                child.query_point(value, &mut found);
            }
            return found;
        }

        let mut candidates = self
            .child_towards(value)
            .map(|child| child.nearest_left(value))
            .unwrap_or_default();

        // A subtree either returns containing items or fallback candidates,
        // never a mix, so the first one decides.
        if candidates.first().copied().is_some_and(|c| c.range().contains(value)) {
            return candidates;
        }

        // Nothing here contains `value`, so every local item starting at or
        // before it ends before it.
        for item in &self.items {
            if item.range().from() > value {
                break;
            }
            candidates.push(item);
        }

        let Some(rightmost) = candidates.iter().copied().map(|c| c.range().to()).max() else {
            return candidates;
        };
        candidates.retain(|&c| c.range().to() == rightmost);
        candidates
    }

    fn nearest_right<'a>(&'a self, value: &K) -> Vec<&'a T> {
        let mut found = Vec::new();
        self.push_containing(value, &mut found);
        if !found.is_empty() {
            if let Some(child) = self.child_towards(value) {
                child.query_point(value, &mut found);
            }
            return found;
        }

        let mut candidates = self
            .child_towards(value)
            .map(|child| child.nearest_right(value))
            .unwrap_or_default();

        if candidates.first().copied().is_some_and(|c| c.range().contains(value)) {
            return candidates;
        }

        // Stops at the first item starting before `value`, so only a prefix of
        // the ascending list is seen. Below the center every straddling item
        // ends past `value`, so one starting before it would have matched
        // above; above the center no straddling item starts after `value`.
        for item in &self.items {
            if item.range().from() < value {
                break;
            }
            candidates.push(item);
        }

        let Some(leftmost) = candidates.iter().copied().map(|c| c.range().from()).min() else {
            return candidates;
        };
        candidates.retain(|&c| c.range().from() == leftmost);
        candidates
    }

    /// Appends local items containing `value`, stopping at the first item
    /// that starts after it.
    fn push_containing<'a>(&'a self, value: &K, results: &mut Vec<&'a T>) {
        for item in &self.items {
            let range = item.range();
            if range.from() > value {
                break;
            }
            if range.contains(value) {
                results.push(item);
            }
        }
    }

    /// Subtree on the `value` side of the center, if `value` is off-center.
    fn child_towards(&self, value: &K) -> Option<&Self> {
        match value.cmp(&self.center) {
            Ordering::Less => self.left.as_deref(),
            Ordering::Greater => self.right.as_deref(),
            Ordering::Equal => None,
        }
    }
}

impl<K, T> RangeTreeNode<K, T> {
    /// Split key of this node.
    pub fn center(&self) -> &K {
        &self.center
    }

    /// Items straddling the center, in stored order.
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Subtree holding items that end before the center.
    pub fn left(&self) -> Option<&Self> {
        self.left.as_deref()
    }

    /// Subtree holding items that start after the center.
    pub fn right(&self) -> Option<&Self> {
        self.right.as_deref()
    }

    /// Number of items in this subtree.
    pub fn len(&self) -> usize {
        self.items.len()
            + self.left.as_ref().map_or(0, |l| l.len())
            + self.right.as_ref().map_or(0, |r| r.len())
    }

    /// Always false for a built node; present for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of nodes in this subtree, including this one.
    pub fn node_count(&self) -> usize {
        1 + self.left.as_ref().map_or(0, |l| l.node_count())
            + self.right.as_ref().map_or(0, |r| r.node_count())
    }

    /// Height of this subtree; a node without children has depth 1.
    pub fn depth(&self) -> usize {
        let left = self.left.as_ref().map_or(0, |l| l.depth());
        let right = self.right.as_ref().map_or(0, |r| r.depth());
        1 + left.max(right)
    }
}
