use crate::{
    graph::CampusGraph,
    search::{
        SearchResult,
        engine::{Limit, explore},
    },
    sets::frontier::FifoFrontier,
};

/// Breadth-first search from `start` to `goal`.
///
/// Paths are expanded in level order with neighbors taken in identifier
/// order, so the returned path has the fewest possible edges and, among those,
/// is the first one in that order. Edge weights play no part in the choice;
/// the reported cost is simply the weight of the path found.
#[tracing::instrument(level = "debug", skip(graph))]
pub fn breadth_first_search(graph: &CampusGraph, start: &str, goal: &str) -> SearchResult {
    explore(graph, start, goal, FifoFrontier::new(), Limit::Unbounded)
}
