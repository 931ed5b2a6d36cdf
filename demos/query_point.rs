//! Find ranges that contain a point.
use rangetree::prelude::*;

fn main() {
    let tree = RangeTree::from_items([Range::new(0, 20), Range::new(10, 30), Range::new(50, 60)]);

    let mut results = Vec::new();
    tree.query_point(&15, &mut results);
    println!("Contains 15: {:?}", results);
}
