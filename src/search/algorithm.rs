use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{
    error::ParseAlgorithmError,
    graph::CampusGraph,
    search::{
        SearchRequest, SearchResult, breadth_first_search, depth_first_search,
        uniform_cost_search,
    },
};

/// The three uninformed search strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Algorithm {
    Bfs,
    Dfs,
    Ucs,
}

impl Algorithm {
    /// Every algorithm, in the order comparisons run them.
    pub const ALL: [Algorithm; 3] = [Algorithm::Bfs, Algorithm::Dfs, Algorithm::Ucs];

    pub fn name(self) -> &'static str {
        match self {
            Algorithm::Bfs => "BFS",
            Algorithm::Dfs => "DFS",
            Algorithm::Ucs => "UCS",
        }
    }

    /// Whether [`SearchRequest::bound`] has any effect on this algorithm.
    pub fn uses_bound(self) -> bool {
        !matches!(self, Algorithm::Bfs)
    }

    /// Runs this algorithm on `graph`.
    ///
    /// For depth-first search the bound is a number of edges: it is rounded
    /// down, and negative bounds count as zero.
    pub fn search(self, graph: &CampusGraph, request: &SearchRequest) -> SearchResult {
        let start = request.start.as_str();
        let goal = request.goal.as_str();
        match self {
            Algorithm::Bfs => breadth_first_search(graph, start, goal),
            Algorithm::Dfs => depth_first_search(graph, start, goal, request.bound.map(depth_from_bound)),
            Algorithm::Ucs => uniform_cost_search(graph, start, goal, request.bound),
        }
    }
}

fn depth_from_bound(bound: f64) -> usize {
    if bound.is_nan() || bound <= 0.0 {
        0
    } else {
        // saturates for huge bounds
        bound.floor() as usize
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = ParseAlgorithmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "bfs" => Ok(Algorithm::Bfs),
            "dfs" => Ok(Algorithm::Dfs),
            "ucs" => Ok(Algorithm::Ucs),
            _ => Err(ParseAlgorithmError(s.to_owned())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::test_support::{names, weighted_campus};

    #[test]
    fn parses_names_case_insensitively() {
        assert_eq!("bfs".parse(), Ok(Algorithm::Bfs));
        assert_eq!(" DFS ".parse(), Ok(Algorithm::Dfs));
        assert_eq!("Ucs".parse(), Ok(Algorithm::Ucs));
        assert_eq!(
            "astar".parse::<Algorithm>(),
            Err(ParseAlgorithmError("astar".into()))
        );
    }

    #[test]
    fn display_round_trips_through_parse() {
        for algorithm in Algorithm::ALL {
            assert_eq!(algorithm.to_string().parse(), Ok(algorithm));
        }
    }

    #[test]
    fn dispatch_matches_direct_calls() {
        let graph = weighted_campus();
        let request = SearchRequest::new("A", "G").with_bound(Some(3.0));

        let bfs = Algorithm::Bfs.search(&graph, &request);
        let dfs = Algorithm::Dfs.search(&graph, &request);
        let ucs = Algorithm::Ucs.search(&graph, &request);

        assert_eq!(names(bfs.path.as_deref().unwrap()), vec!["A", "B", "D", "G"]);
        assert_eq!(names(dfs.path.as_deref().unwrap()), vec!["A", "B", "D", "G"]);
        assert!(ucs.path.is_none());
    }

    #[test]
    fn fractional_and_negative_depth_bounds() {
        assert_eq!(depth_from_bound(2.9), 2);
        assert_eq!(depth_from_bound(0.0), 0);
        assert_eq!(depth_from_bound(-3.0), 0);
        assert_eq!(depth_from_bound(f64::NAN), 0);

        let graph = weighted_campus();
        let request = SearchRequest::new("A", "G").with_bound(Some(2.5));
        assert!(Algorithm::Dfs.search(&graph, &request).path.is_none());
    }

    #[test]
    fn trivial_and_missing_requests_agree_across_algorithms() {
        let graph = weighted_campus();
        for algorithm in Algorithm::ALL {
            let same = algorithm.search(&graph, &SearchRequest::new("D", "D"));
            assert_eq!(names(same.path.as_deref().unwrap()), vec!["D"]);
            assert_eq!(same.cost, 0.0);
            assert_eq!(same.nodes_visited, 0);

            let missing = algorithm.search(&graph, &SearchRequest::new("D", "Q"));
            assert!(missing.path.is_none());
            assert!(missing.visited_order.is_empty());
            assert_eq!(missing.nodes_visited, 0);
        }
    }

    #[test]
    fn only_bfs_ignores_the_bound() {
        assert!(!Algorithm::Bfs.uses_bound());
        assert!(Algorithm::Dfs.uses_bound());
        assert!(Algorithm::Ucs.uses_bound());
    }
}
