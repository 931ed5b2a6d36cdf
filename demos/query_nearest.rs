//! Find the ranges closest to a point that falls in a gap.
use rangetree::prelude::*;

#[derive(Clone, Debug)]
struct Meeting {
    slot: Range<u32>,
    title: &'static str,
}

impl RangeProvider<u32> for Meeting {
    fn range(&self) -> &Range<u32> {
        &self.slot
    }
}

fn main() {
    env_logger::init();

    let tree = RangeTree::from_items([
        Meeting { slot: Range::new(900, 1000), title: "standup" },
        Meeting { slot: Range::new(930, 1000), title: "design review" },
        Meeting { slot: Range::new(1300, 1400), title: "planning" },
        Meeting { slot: Range::new(1300, 1330), title: "1:1" },
    ]);

    let now = 1130;
    let mut results = Vec::new();

    tree.query_nearest_left(&now, &mut results);
    for m in &results {
        println!("Last before {now}: {} {}", m.title, m.slot);
    }

    tree.query_nearest_right(&now, &mut results);
    for m in &results {
        println!("Next after {now}: {} {}", m.title, m.slot);
    }
}
