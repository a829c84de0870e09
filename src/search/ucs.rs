use crate::{
    graph::{CampusGraph, Weight},
    search::{
        SearchResult,
        engine::{Limit, explore},
    },
    sets::frontier::PriorityFrontier,
};

/// Uniform-cost search from `start` to `goal`, optionally bounded in cost.
///
/// Paths leave the frontier in non-decreasing order of accumulated cost, ties
/// broken by the lexicographically smaller path. Since every weight in a
/// [`CampusGraph`] is non-negative, the first path to reach `goal` is the
/// cheapest one whose cost does not exceed `max_cost`.
///
/// A NaN `max_cost` is treated as no bound.
#[tracing::instrument(level = "debug", skip(graph))]
pub fn uniform_cost_search(
    graph: &CampusGraph,
    start: &str,
    goal: &str,
    max_cost: Option<Weight>,
) -> SearchResult {
    let limit = match max_cost {
        Some(max) if !max.is_nan() => Limit::MaxCost(max),
        _ => Limit::Unbounded,
    };
    explore(graph, start, goal, PriorityFrontier::new(), limit)
}
