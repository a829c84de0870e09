//! Visited-location tracking for graph searches.

mod visited_set;

pub use visited_set::*;
