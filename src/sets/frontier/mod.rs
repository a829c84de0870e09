//! Frontiers: the collections of partial paths a search is about to expand.
//!
//! Each uninformed search differs only by the frontier discipline it uses:
//! first-in-first-out for breadth-first search, last-in-first-out for
//! depth-first search and cheapest-first for uniform-cost search.

mod fifo;
mod frontier_entry;
mod lifo;
mod ordered_float;
mod priority;

pub use fifo::*;
pub use frontier_entry::*;
pub use lifo::*;
pub use ordered_float::*;
pub use priority::*;

/// A collection of partial paths with a removal discipline.
pub trait Frontier {
    fn push(&mut self, entry: FrontierEntry);

    fn pop(&mut self) -> Option<FrontierEntry>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Pushes the extensions of one expanded path.
    ///
    /// `children` arrive sorted by their tip's identifier. Implementations
    /// make sure that, among siblings the discipline does not otherwise
    /// order, the smallest identifier is removed first.
    fn push_children(&mut self, children: Vec<FrontierEntry>) {
        for child in children {
            self.push(child);
        }
    }
}
