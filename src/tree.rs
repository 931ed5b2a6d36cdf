//! Mutable collection of ranged items with a rebuilt-on-change interval index.
//!
//! [`RangeTree`] owns the items and keeps an immutable [`RangeTreeNode`] built
//! from them. The node tree has no incremental insert or delete: every change
//! of membership rebuilds it from scratch and swaps the new tree in.

use std::sync::Arc;
use std::time::Instant;

use log::{debug, trace};

use crate::node::RangeTreeNode;
use crate::range::{Range, RangeProvider};

/// Interval index over a collection of items exposing a [`Range`].
///
/// Items are added and removed on the collection. With auto-rebuild enabled
/// (the default) the index is rebuilt after every change. With it disabled,
/// queries keep answering from the last built index until
/// [`rebuild`](Self::rebuild) is called.
///
/// The built index is an immutable snapshot behind an [`Arc`]. A rebuild
/// replaces the snapshot and never touches the old one, so readers holding
/// [`snapshot`](Self::snapshot) keep a consistent view.
///
/// Each rebuild clones every item into the new snapshot, so the collection
/// and the index each hold a copy. For large or expensive items store
/// `Arc<T>` (or `Rc<T>`): both forward [`RangeProvider`] and a rebuild then
/// only bumps reference counts.
///
/// # Example
/// ```
/// use rangetree::prelude::*;
///
/// let mut tree = RangeTree::new();
/// tree.add(Range::new(1, 11));
/// tree.add(Range::new(3, 9));
/// tree.add(Range::new(24, 34));
///
/// let mut results = Vec::new();
/// tree.query_point(&5, &mut results);
/// assert_eq!(results.len(), 2);
///
/// tree.query_nearest_right(&20, &mut results);
/// assert_eq!(results, vec![&Range::new(24, 34)]);
/// ```
#[derive(Clone, Debug)]
pub struct RangeTree<K, T> {
    /// Backing collection, in insertion order.
    items: Vec<T>,
    /// Last built index; `None` when it was built from no items.
    root: Option<Arc<RangeTreeNode<K, T>>>,
    /// False when `items` changed after the last build.
    in_sync: bool,
    /// Rebuild right after each mutation.
    auto_rebuild: bool,
}

impl<K, T> RangeTree<K, T>
where
    K: Ord + Clone,
    T: RangeProvider<K> + Clone,
{
    /// Creates an empty tree with auto-rebuild enabled.
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Creates an empty tree with room for `capacity` items.
    ///
    /// # Example
    /// ```
    /// use rangetree::{Range, RangeTree};
    /// let tree: RangeTree<u64, Range<u64>> = RangeTree::with_capacity(100);
    /// assert!(tree.is_empty());
    /// ```
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: Vec::with_capacity(capacity),
            root: None,
            in_sync: true,
            auto_rebuild: true,
        }
    }

    /// Creates a tree over `items` and builds the index once.
    pub fn from_items<I: IntoIterator<Item = T>>(items: I) -> Self {
        let mut tree = Self::new();
        tree.items.extend(items);
        tree.in_sync = false;
        tree.rebuild();
        tree
    }

    /// Sets whether mutations rebuild the index immediately.
    ///
    /// Enabling auto-rebuild on a stale tree rebuilds it right away.
    #[must_use]
    pub fn with_auto_rebuild(mut self, auto_rebuild: bool) -> Self {
        self.set_auto_rebuild(auto_rebuild);
        self
    }

    /// Whether mutations rebuild the index immediately.
    pub fn auto_rebuild(&self) -> bool {
        self.auto_rebuild
    }

    /// See [`with_auto_rebuild`](Self::with_auto_rebuild).
    pub fn set_auto_rebuild(&mut self, auto_rebuild: bool) {
        self.auto_rebuild = auto_rebuild;
        self.changed();
    }

    /// Adds one item.
    pub fn add(&mut self, item: T) {
        self.items.push(item);
        self.in_sync = false;
        self.changed();
    }

    /// Adds every item of `items`, rebuilding at most once.
    pub fn add_all<I: IntoIterator<Item = T>>(&mut self, items: I) {
        let before = self.items.len();
        self.items.extend(items);
        if self.items.len() != before {
            self.in_sync = false;
            self.changed();
        }
    }

    /// Removes the first item equal to `item`. Returns whether one was found.
    pub fn remove(&mut self, item: &T) -> bool
    where
        T: PartialEq,
    {
        let Some(pos) = self.items.iter().position(|x| x == item) else {
            return false;
        };
        drop(self.items.remove(pos));
        self.in_sync = false;
        self.changed();
        true
    }

    /// Keeps only the items for which `keep` returns true.
    pub fn retain<F: FnMut(&T) -> bool>(&mut self, keep: F) {
        let before = self.items.len();
        self.items.retain(keep);
        if self.items.len() != before {
            self.in_sync = false;
            self.changed();
        }
    }

    /// Removes every item.
    pub fn clear(&mut self) {
        if self.items.is_empty() {
            return;
        }
        self.items.clear();
        self.in_sync = false;
        self.changed();
    }

    /// Rebuilds the index from the current items if it is out of date.
    ///
    /// Clones every item into the new index; see the type docs for sharing
    /// items through `Arc`.
    pub fn rebuild(&mut self) {
        if self.in_sync {
            return;
        }

        let start = Instant::now();
        self.root = RangeTreeNode::new(self.items.clone()).map(Arc::new);
        self.in_sync = true;

        match &self.root {
            Some(root) => debug!(
                "rebuilt range tree: {} items, {} nodes, depth {} in {:?}",
                self.items.len(),
                root.node_count(),
                root.depth(),
                start.elapsed()
            ),
            None => debug!("rebuilt empty range tree"),
        }
    }

    /// True when the index reflects the current items.
    pub fn is_in_sync(&self) -> bool {
        self.in_sync
    }

    /// Handle to the current index, valid across later rebuilds.
    ///
    /// `None` when the index was built from no items.
    ///
    /// # Example
    /// ```
    /// use rangetree::{Range, RangeTree};
    /// let mut tree = RangeTree::from_items([Range::new(0, 10)]);
    /// let before = tree.snapshot().unwrap();
    /// tree.add(Range::new(5, 6));
    ///
    /// let mut results = Vec::new();
    /// before.query_point(&5, &mut results);
    /// assert_eq!(results.len(), 1);
    /// tree.query_point(&5, &mut results);
    /// assert_eq!(results.len(), 2);
    /// ```
    pub fn snapshot(&self) -> Option<Arc<RangeTreeNode<K, T>>> {
        self.root.clone()
    }

    /// Finds every item containing `value`.
    ///
    /// `results` is cleared first. Order of the matches is unspecified.
    pub fn query_point<'a>(&'a self, value: &K, results: &mut Vec<&'a T>) {
        results.clear();
        if let Some(root) = &self.root {
            root.query_point(value, results);
        }
    }

    /// Finds every item intersecting `range`.
    ///
    /// `results` is cleared first. Order of the matches is unspecified.
    ///
    /// # Example
    /// ```
    /// use rangetree::{Range, RangeTree};
    /// let tree = RangeTree::from_items([Range::new(0, 4), Range::new(6, 9), Range::new(20, 30)]);
    /// let mut results = Vec::new();
    /// tree.query_intersecting(&Range::new(3, 7), &mut results);
    /// assert_eq!(results.len(), 2);
    /// ```
    pub fn query_intersecting<'a>(&'a self, range: &Range<K>, results: &mut Vec<&'a T>) {
        results.clear();
        if let Some(root) = &self.root {
            root.query_intersecting(range, results);
        }
    }

    /// Finds the items containing `value` or, failing that, the items ending
    /// closest before it. See [`RangeTreeNode::query_nearest_left`].
    ///
    /// `results` is cleared first.
    pub fn query_nearest_left<'a>(&'a self, value: &K, results: &mut Vec<&'a T>) {
        results.clear();
        if let Some(root) = &self.root {
            root.query_nearest_left(value, results);
        }
    }

    /// Finds the items containing `value` or, failing that, the items starting
    /// closest after it. See [`RangeTreeNode::query_nearest_right`].
    ///
    /// `results` is cleared first.
    pub fn query_nearest_right<'a>(&'a self, value: &K, results: &mut Vec<&'a T>) {
        results.clear();
        if let Some(root) = &self.root {
            root.query_nearest_right(value, results);
        }
    }

    /// Smallest range covering every item, `None` when there are none.
    pub fn span(&self) -> Option<Range<K>> {
        let from = self.items.iter().map(|item| item.range().from()).min()?;
        let to = self.items.iter().map(|item| item.range().to()).max()?;
        Some(Range::new(from.clone(), to.clone()))
    }

    fn changed(&mut self) {
        if self.in_sync {
            return;
        }
        if self.auto_rebuild {
            self.rebuild();
        } else {
            trace!("range tree out of sync with {} items", self.items.len());
        }
    }
}

impl<K, T> RangeTree<K, T> {
    /// Number of items in the collection.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the collection has no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Items in insertion order.
    pub fn items(&self) -> &[T] {
        &self.items
    }
}

impl<K, T> Default for RangeTree<K, T>
where
    K: Ord + Clone,
    T: RangeProvider<K> + Clone,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K, T> FromIterator<T> for RangeTree<K, T>
where
    K: Ord + Clone,
    T: RangeProvider<K> + Clone,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_items(iter)
    }
}

impl<K, T> Extend<T> for RangeTree<K, T>
where
    K: Ord + Clone,
    T: RangeProvider<K> + Clone,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.add_all(iter);
    }
}
