//! Fixtures and brute-force oracles shared by the search tests.

use crate::graph::{CampusGraph, Location, Weight};

/// Builds a graph from its connections, adding endpoints as needed.
pub(crate) fn campus(connections: &[(&str, &str, Weight)]) -> CampusGraph {
    let mut graph = CampusGraph::new();
    for &(from, to, weight) in connections {
        graph.add_location(from);
        graph.add_location(to);
        graph.add_connection(from, to, weight).unwrap();
    }
    graph
}

/// `A-B(13), A-C(4), B-D(2), B-E(5), C-F(1), D-G(3), E-G(1), F-G(2)`.
pub(crate) fn weighted_campus() -> CampusGraph {
    campus(&[
        ("A", "B", 13.0),
        ("A", "C", 4.0),
        ("B", "D", 2.0),
        ("B", "E", 5.0),
        ("C", "F", 1.0),
        ("D", "G", 3.0),
        ("E", "G", 1.0),
        ("F", "G", 2.0),
    ])
}

/// `A-B, A-C, B-D, B-E, C-F, C-G`, all of weight 1.
pub(crate) fn tree_campus() -> CampusGraph {
    campus(&[
        ("A", "B", 1.0),
        ("A", "C", 1.0),
        ("B", "D", 1.0),
        ("B", "E", 1.0),
        ("C", "F", 1.0),
        ("C", "G", 1.0),
    ])
}

pub(crate) fn names(path: &[Location]) -> Vec<&str> {
    path.iter().map(Location::as_str).collect()
}

/// Every simple path from `start` to `goal`, with its cost accumulated hop by hop.
pub(crate) fn simple_paths(graph: &CampusGraph, start: &str, goal: &str) -> Vec<(Vec<Location>, Weight)> {
    fn walk(
        graph: &CampusGraph,
        goal: &str,
        path: &mut Vec<Location>,
        cost: Weight,
        out: &mut Vec<(Vec<Location>, Weight)>,
    ) {
        let tip = path[path.len() - 1].clone();
        if tip.as_str() == goal {
            out.push((path.clone(), cost));
            return;
        }
        for (next, weight) in graph.sorted_neighbors(tip.as_str()) {
            if path.contains(next) {
                continue;
            }
            path.push(next.clone());
            walk(graph, goal, path, cost + weight, out);
            path.pop();
        }
    }

    let mut out = Vec::new();
    if graph.contains(start) && graph.contains(goal) {
        walk(graph, goal, &mut vec![Location::from(start)], 0.0, &mut out);
    }
    out
}

/// Cheapest simple path cost not exceeding `bound`.
pub(crate) fn brute_force_min_cost(
    graph: &CampusGraph,
    start: &str,
    goal: &str,
    bound: Option<Weight>,
) -> Option<Weight> {
    simple_paths(graph, start, goal)
        .into_iter()
        .map(|(_, cost)| cost)
        .filter(|&cost| bound.is_none_or(|max| cost <= max))
        .min_by(|a, b| a.total_cmp(b))
}

/// Fewest edges on any path.
pub(crate) fn brute_force_min_edges(graph: &CampusGraph, start: &str, goal: &str) -> Option<usize> {
    simple_paths(graph, start, goal)
        .into_iter()
        .map(|(path, _)| path.len() - 1)
        .min()
}

/// Checks that consecutive locations of `path` are connected.
pub(crate) fn is_walk(graph: &CampusGraph, path: &[Location]) -> bool {
    graph.path_cost(path).is_some()
}
