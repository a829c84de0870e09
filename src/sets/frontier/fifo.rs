use std::collections::VecDeque;

use crate::sets::frontier::{Frontier, FrontierEntry};

/// First-in-first-out frontier, expanding paths in level order.
#[derive(Debug, Default)]
pub struct FifoFrontier {
    queue: VecDeque<FrontierEntry>,
}

impl FifoFrontier {
    pub fn new() -> Self {
        FifoFrontier {
            queue: VecDeque::new(),
        }
    }
}

impl Frontier for FifoFrontier {
    fn push(&mut self, entry: FrontierEntry) {
        self.queue.push_back(entry);
    }

    fn pop(&mut self) -> Option<FrontierEntry> {
        self.queue.pop_front()
    }

    fn len(&self) -> usize {
        self.queue.len()
    }
}
