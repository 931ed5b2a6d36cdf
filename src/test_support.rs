//! Shared fixtures for the in-crate tests.

use crate::{Range, RangeProvider, RangeTreeNode};

/// Named range so that equal intervals stay distinguishable in assertions.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub(crate) struct RangeItem {
    pub(crate) range: Range<i32>,
    pub(crate) name: String,
}

impl RangeProvider<i32> for RangeItem {
    fn range(&self) -> &Range<i32> {
        &self.range
    }
}

pub(crate) fn item(from: i32, to: i32, name: &str) -> RangeItem {
    RangeItem {
        range: Range::new(from, to),
        name: name.to_string(),
    }
}

/// Clones and sorts query output so it can be compared as a set.
pub(crate) fn sorted(results: &[&RangeItem]) -> Vec<RangeItem> {
    let mut owned: Vec<RangeItem> = results.iter().map(|&r| r.clone()).collect();
    owned.sort();
    owned
}

pub(crate) fn brute_point(items: &[RangeItem], value: i32) -> Vec<RangeItem> {
    let mut out: Vec<RangeItem> = items
        .iter()
        .filter(|i| i.range.contains(&value))
        .cloned()
        .collect();
    out.sort();
    out
}

pub(crate) fn brute_intersecting(items: &[RangeItem], query: &Range<i32>) -> Vec<RangeItem> {
    let mut out: Vec<RangeItem> = items
        .iter()
        .filter(|i| i.range.intersects(query))
        .cloned()
        .collect();
    out.sort();
    out
}

/// Containing items if any, else the items ending before `value` with the
/// largest end.
pub(crate) fn brute_nearest_left(items: &[RangeItem], value: i32) -> Vec<RangeItem> {
    let containing = brute_point(items, value);
    if !containing.is_empty() {
        return containing;
    }
    let Some(best) = items
        .iter()
        .filter(|i| *i.range.to() < value)
        .map(|i| *i.range.to())
        .max()
    else {
        return Vec::new();
    };
    let mut out: Vec<RangeItem> = items
        .iter()
        .filter(|i| *i.range.to() == best)
        .cloned()
        .collect();
    out.sort();
    out
}

/// Containing items if any, else the items starting after `value` with the
/// smallest start.
pub(crate) fn brute_nearest_right(items: &[RangeItem], value: i32) -> Vec<RangeItem> {
    let containing = brute_point(items, value);
    if !containing.is_empty() {
        return containing;
    }
    let Some(best) = items
        .iter()
        .filter(|i| *i.range.from() > value)
        .map(|i| *i.range.from())
        .min()
    else {
        return Vec::new();
    };
    let mut out: Vec<RangeItem> = items
        .iter()
        .filter(|i| *i.range.from() == best)
        .cloned()
        .collect();
    out.sort();
    out
}

/// Walks the tree checking the placement and ordering invariants of every node.
pub(crate) fn assert_invariants(node: &RangeTreeNode<i32, RangeItem>) {
    let center = *node.center();
    for it in node.items() {
        assert!(
            it.range.contains(&center),
            "{:?} stored at center {} does not straddle it",
            it.range,
            center
        );
    }
    for pair in node.items().windows(2) {
        assert!(pair[0].range <= pair[1].range, "node items out of order at center {center}");
    }
    if let Some(left) = node.left() {
        assert!(
            collect(left).iter().all(|it| *it.range.to() < center),
            "left subtree of {center} holds an item ending at or after it"
        );
        assert_invariants(left);
    }
    if let Some(right) = node.right() {
        assert!(
            collect(right).iter().all(|it| *it.range.from() > center),
            "right subtree of {center} holds an item starting at or before it"
        );
        assert_invariants(right);
    }
}

fn collect(node: &RangeTreeNode<i32, RangeItem>) -> Vec<&RangeItem> {
    let mut out: Vec<&RangeItem> = node.items().iter().collect();
    if let Some(left) = node.left() {
        out.extend(collect(left));
    }
    if let Some(right) = node.right() {
        out.extend(collect(right));
    }
    out
}
