//! Find ranges overlapping a query range.
use rangetree::prelude::*;

fn main() {
    let mut tree = RangeTree::with_capacity(4);
    tree.add(Range::new(0, 20));
    tree.add(Range::new(10, 30));
    tree.add(Range::new(50, 60));
    tree.add(Range::new(58, 70));

    let mut results = Vec::new();
    tree.query_intersecting(&Range::new(25, 55), &mut results);
    println!("Overlaps [25, 55]: {:?}", results);
}
