//! Batch updates with auto-rebuild off, while a reader keeps an older snapshot.
use rangetree::prelude::*;
use std::thread;

fn main() {
    env_logger::init();

    let mut tree = RangeTree::from_items((0..1000u64).map(|i| Range::new(i * 10, i * 10 + 4)))
        .with_auto_rebuild(false);

    let Some(snapshot) = tree.snapshot() else {
        return;
    };
    let reader = thread::spawn(move || {
        let mut results = Vec::new();
        snapshot.query_point(&10_002, &mut results);
        results.len()
    });

    tree.add_all((0..1000u64).map(|i| Range::new(10_000 + i, 10_000 + i)));
    println!("in sync after batch: {}", tree.is_in_sync());
    tree.rebuild();

    let mut results = Vec::new();
    tree.query_point(&10_002, &mut results);
    println!("new index hits at 10002: {}", results.len());
    println!("old snapshot hits at 10002: {}", reader.join().unwrap_or_default());
}
