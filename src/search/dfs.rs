use crate::{
    graph::CampusGraph,
    search::{
        SearchResult,
        engine::{Limit, explore},
    },
    sets::frontier::LifoFrontier,
};

/// Depth-first search from `start` to `goal`, optionally bounded in depth.
///
/// `max_depth` is a number of edges: a path longer than `max_depth` edges is
/// discarded without marking anything visited. With a depth of zero only the
/// trivial `start == goal` search can succeed.
///
/// The smallest-identifier neighbor is explored first. The result is *a*
/// path, not necessarily the shortest or the cheapest, and a location is never
/// expanded twice even when a shallower route to it shows up later.
#[tracing::instrument(level = "debug", skip(graph))]
pub fn depth_first_search(
    graph: &CampusGraph,
    start: &str,
    goal: &str,
    max_depth: Option<usize>,
) -> SearchResult {
    let limit = max_depth.map_or(Limit::Unbounded, Limit::MaxEdges);
    explore(graph, start, goal, LifoFrontier::new(), limit)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        graph::random_campus,
        search::test_support::{
            brute_force_min_edges, is_walk, names, tree_campus, weighted_campus,
        },
    };
    use rand::{SeedableRng, rngs::StdRng};

    #[test]
    fn explores_smallest_neighbor_first() {
        let graph = weighted_campus();
        let result = depth_first_search(&graph, "A", "G", None);

        assert_eq!(names(result.path.as_deref().unwrap()), vec!["A", "B", "D", "G"]);
        assert_eq!(names(&result.visited_order), vec!["A", "B", "D"]);
        assert_eq!(result.nodes_visited, 3);
        assert_eq!(result.cost, 18.0);
    }

    #[test]
    fn depth_bound_counts_edges() {
        let graph = weighted_campus();

        let too_shallow = depth_first_search(&graph, "A", "G", Some(2));
        assert!(too_shallow.path.is_none());
        assert_eq!(
            names(&too_shallow.visited_order),
            vec!["A", "B", "D", "E", "C", "F"]
        );

        let exact = depth_first_search(&graph, "A", "G", Some(3));
        assert_eq!(names(exact.path.as_deref().unwrap()), vec!["A", "B", "D", "G"]);
    }

    #[test]
    fn zero_depth_forbids_any_edge() {
        let graph = tree_campus();
        let result = depth_first_search(&graph, "A", "B", Some(0));
        assert!(result.path.is_none());
        assert_eq!(result.cost, f64::INFINITY);

        let trivial = depth_first_search(&graph, "A", "A", Some(0));
        assert_eq!(names(trivial.path.as_deref().unwrap()), vec!["A"]);
    }

    #[test]
    fn start_equals_goal() {
        let graph = weighted_campus();
        let result = depth_first_search(&graph, "C", "C", None);

        assert_eq!(names(result.path.as_deref().unwrap()), vec!["C"]);
        assert_eq!(result.cost, 0.0);
        assert_eq!(result.nodes_visited, 0);
    }

    #[test]
    fn missing_endpoints() {
        let graph = weighted_campus();
        let result = depth_first_search(&graph, "A", "Nowhere", Some(4));
        assert!(result.path.is_none());
        assert!(result.visited_order.is_empty());
        assert_eq!(result.nodes_visited, 0);
    }

    #[test]
    fn test_randomized_completeness() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..150 {
            let graph = random_campus(&mut rng, 7, 0.3, 20);
            let result = depth_first_search(&graph, "L00", "L05", None);
            let reachable = brute_force_min_edges(&graph, "L00", "L05").is_some();

            assert_eq!(result.found(), reachable);
            if let Some(path) = &result.path {
                assert!(is_walk(&graph, path));
                assert_eq!(path.first().unwrap().as_str(), "L00");
                assert_eq!(path.last().unwrap().as_str(), "L05");
                assert_eq!(graph.path_cost(path), Some(result.cost));
            }
        }
    }

    #[test]
    fn test_randomized_depth_bound_respected() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..150 {
            let graph = random_campus(&mut rng, 7, 0.4, 20);
            for depth in 0..4 {
                let result = depth_first_search(&graph, "L00", "L06", Some(depth));
                if let Some(edges) = result.edge_count() {
                    assert!(edges <= depth);
                }
            }
        }
    }
}
