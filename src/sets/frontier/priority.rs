use std::{cmp::Reverse, collections::BinaryHeap};

use crate::sets::frontier::{Frontier, FrontierEntry};

/// Cheapest-first frontier.
///
/// Extraction follows the [`FrontierEntry`] ordering: lowest accumulated cost,
/// ties broken by the lexicographically smaller path.
#[derive(Debug, Default)]
pub struct PriorityFrontier {
    heap: BinaryHeap<Reverse<FrontierEntry>>,
}

impl PriorityFrontier {
    pub fn new() -> Self {
        PriorityFrontier {
            heap: BinaryHeap::new(),
        }
    }
}

impl Frontier for PriorityFrontier {
    fn push(&mut self, entry: FrontierEntry) {
        self.heap.push(Reverse(entry));
    }

    fn pop(&mut self) -> Option<FrontierEntry> {
        self.heap.pop().map(|Reverse(entry)| entry)
    }

    fn len(&self) -> usize {
        self.heap.len()
    }
}
