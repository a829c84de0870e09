use std::time::Instant;

use tracing::{debug, trace};

use crate::{
    graph::{CampusGraph, Weight},
    search::SearchResult,
    sets::{
        frontier::{Frontier, FrontierEntry},
        visited::VisitedSet,
    },
};

/// Constraint on the partial paths a search may keep.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum Limit {
    Unbounded,
    MaxEdges(usize),
    MaxCost(Weight),
}

impl Limit {
    fn exceeded_by(self, entry: &FrontierEntry) -> bool {
        match self {
            Limit::Unbounded => false,
            Limit::MaxEdges(max) => entry.edges() > max,
            Limit::MaxCost(max) => entry.cost() > max,
        }
    }
}

/// Generic uninformed graph search; the frontier decides the strategy.
///
/// Each popped path is first checked against `limit` (over-limit paths are
/// dropped without side effects), then tested for the goal, and only then
/// expanded if its tip has not been visited yet. Extensions towards visited
/// locations are never created, and over-limit extensions are never
/// inserted: costs and edge counts only grow, so they could never come back
/// under the limit.
///
/// Missing endpoints produce an empty "no path" result.
pub(crate) fn explore<F: Frontier>(
    graph: &CampusGraph,
    start: &str,
    goal: &str,
    mut frontier: F,
    limit: Limit,
) -> SearchResult {
    let started = Instant::now();

    if !graph.contains(start) || !graph.contains(goal) {
        debug!(start, goal, "endpoint not in graph");
        return SearchResult::no_path(Vec::new(), started.elapsed());
    }

    let mut visited = VisitedSet::new();
    frontier.push(FrontierEntry::root(start.into()));

    while let Some(entry) = frontier.pop() {
        if limit.exceeded_by(&entry) {
            continue;
        }

        if entry.node().as_str() == goal {
            let nodes_visited = visited.len();
            let cost = entry.cost();
            debug!(nodes_visited, cost, edges = entry.edges(), "goal reached");
            return SearchResult {
                path: Some(entry.into_path()),
                visited_order: visited.into_order(),
                nodes_visited,
                cost,
                elapsed: started.elapsed(),
            };
        }

        if !visited.insert(entry.node()) {
            continue;
        }
        trace!(node = %entry.node(), cost = entry.cost(), frontier = frontier.len(), "expanding");

        let children = graph
            .sorted_neighbors(entry.node().as_str())
            .into_iter()
            .filter(|(neighbor, _)| !visited.contains(neighbor.as_str()))
            .map(|(neighbor, weight)| entry.extend(neighbor, weight))
            .filter(|child| !limit.exceeded_by(child))
            .collect();
        frontier.push_children(children);
    }

    debug!(nodes_visited = visited.len(), "frontier exhausted");
    SearchResult::no_path(visited.into_order(), started.elapsed())
}
