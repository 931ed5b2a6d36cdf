//! # rangetree - Centered Interval Tree
//!
//! An in-memory index over closed intervals ("ranges") of an ordered key,
//! answering four kinds of queries:
//!
//! - **Stab**: every range containing a point
//! - **Intersecting**: every range overlapping a query range
//! - **Nearest left**: the ranges ending closest before a point
//! - **Nearest right**: the ranges starting closest after a point
//!
//! The nearest queries return the containing ranges instead when the point is
//! covered. Ties are kept: every range sharing the nearest edge is returned.
//!
//! ## Quick Start
//!
//! ```rust
//! use rangetree::prelude::*;
//!
//! let mut tree = RangeTree::new();
//! tree.add(Range::new(1, 11));   // 0
//! tree.add(Range::new(24, 34));  // 1
//! tree.add(Range::new(3, 9));    // 2
//! tree.add(Range::new(0, 11));   // 3
//!
//! let mut results = Vec::new();
//! tree.query_point(&5, &mut results);
//! assert_eq!(results.len(), 3);
//!
//! // Nothing covers 20; both ranges ending at 11 are nearest from the left.
//! tree.query_nearest_left(&20, &mut results);
//! results.sort();
//! assert_eq!(results, vec![&Range::new(0, 11), &Range::new(1, 11)]);
//!
//! // The results vector is reused: each query clears it first.
//! tree.query_intersecting(&Range::new(10, 25), &mut results);
//! assert_eq!(results.len(), 3);
//! ```
//!
//! ## Storing your own items
//!
//! Any type implementing [`RangeProvider`] can be indexed. Queries hand back
//! references to the stored items.
//!
//! ```rust
//! use rangetree::prelude::*;
//!
//! #[derive(Clone, Debug, PartialEq)]
//! struct Shift {
//!     hours: Range<u32>,
//!     worker: &'static str,
//! }
//!
//! impl RangeProvider<u32> for Shift {
//!     fn range(&self) -> &Range<u32> {
//!         &self.hours
//!     }
//! }
//!
//! let tree: RangeTree<u32, Shift> = [
//!     Shift { hours: Range::new(6, 14), worker: "ana" },
//!     Shift { hours: Range::new(14, 22), worker: "ben" },
//! ]
//! .into_iter()
//! .collect();
//!
//! let mut on_duty = Vec::new();
//! tree.query_point(&14, &mut on_duty);
//! assert_eq!(on_duty.len(), 2);
//! ```
//!
//! ## How It Works
//!
//! Each node picks the median of its items' endpoints as a center key. Items
//! crossing the center stay in the node, sorted by start; items entirely before
//! or after it go to the left or right subtree. Queries scan a node's items
//! until the first one starting past the query, then descend only into the
//! subtrees that can still match.
//!
//! The tree is static: [`RangeTree`] rebuilds it whenever its items change and
//! publishes each build as an immutable snapshot.

pub mod error;
pub mod node;
pub mod prelude;
pub mod range;
pub mod tree;

#[cfg(test)]
mod test_support;

pub use error::{RangeTreeError, Result};
pub use node::RangeTreeNode;
pub use range::{Range, RangeProvider};
pub use tree::RangeTree;
