use serde::{Deserialize, Serialize};

use crate::{
    graph::{CampusGraph, Weight},
    search::{Algorithm, SearchRequest, SearchResult},
};

/// One algorithm invocation: what was asked and what came back.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunRecord {
    pub algorithm: Algorithm,
    pub request: SearchRequest,
    pub result: SearchResult,
}

impl RunRecord {
    pub fn run(algorithm: Algorithm, graph: &CampusGraph, request: SearchRequest) -> Self {
        let result = algorithm.search(graph, &request);
        RunRecord {
            algorithm,
            request,
            result,
        }
    }

    /// Algorithm name with the bound it ran under, e.g. `DFS (depth: 3)`.
    pub fn label(&self) -> String {
        let bound = self
            .request
            .bound
            .map_or_else(|| "none".to_string(), |b| b.to_string());
        match self.algorithm {
            Algorithm::Bfs => self.algorithm.name().to_string(),
            Algorithm::Dfs => format!("DFS (depth: {bound})"),
            Algorithm::Ucs => format!("UCS (cost limit: {bound})"),
        }
    }
}

/// Runs BFS, DFS and UCS, in that order, between the same two locations.
#[tracing::instrument(level = "debug", skip(graph))]
pub fn run_all(
    graph: &CampusGraph,
    start: &str,
    goal: &str,
    dfs_depth: Option<usize>,
    ucs_cost_limit: Option<Weight>,
) -> Vec<RunRecord> {
    Algorithm::ALL
        .into_iter()
        .map(|algorithm| {
            let bound = match algorithm {
                Algorithm::Bfs => None,
                Algorithm::Dfs => dfs_depth.map(|depth| depth as f64),
                Algorithm::Ucs => ucs_cost_limit,
            };
            RunRecord::run(algorithm, graph, SearchRequest::new(start, goal).with_bound(bound))
        })
        .collect()
}
