//! Prelude module for convenient imports
//!
//! This module re-exports the most commonly used types from the crate.
//! Users can import everything they need with:
//!
//! ```
//! use rangetree::prelude::*;
//! ```

pub use crate::{Range, RangeProvider, RangeTree, RangeTreeError, RangeTreeNode};
