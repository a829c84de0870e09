use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::graph::{Location, Weight};

/// Outcome of one search, identical in shape for every algorithm.
///
/// A missing `path` is the normal "no path" answer: the goal is unreachable
/// within the bound, or an endpoint is not part of the graph. `cost` is the
/// sum of edge weights along `path`, and `f64::INFINITY` when there is none.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    pub path: Option<Vec<Location>>,
    /// Locations in the order they were first expanded.
    pub visited_order: Vec<Location>,
    pub nodes_visited: usize,
    #[serde(with = "infinite_as_null")]
    pub cost: Weight,
    pub elapsed: Duration,
}

impl SearchResult {
    pub(crate) fn no_path(visited_order: Vec<Location>, elapsed: Duration) -> Self {
        SearchResult {
            path: None,
            nodes_visited: visited_order.len(),
            visited_order,
            cost: f64::INFINITY,
            elapsed,
        }
    }

    pub fn found(&self) -> bool {
        self.path.is_some()
    }

    /// Number of edges on the path, if one was found.
    pub fn edge_count(&self) -> Option<usize> {
        self.path.as_ref().map(|path| path.len().saturating_sub(1))
    }
}

/// JSON has no infinity: an infinite cost is written as `null` and read back
/// as infinity.
pub(crate) mod infinite_as_null {
    use serde::{Deserialize, Deserializer, Serializer};

    use crate::graph::Weight;

    pub fn serialize<S: Serializer>(cost: &Weight, serializer: S) -> Result<S::Ok, S::Error> {
        if cost.is_finite() {
            serializer.serialize_some(cost)
        } else {
            serializer.serialize_none()
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Weight, D::Error> {
        Ok(Option::<Weight>::deserialize(deserializer)?.unwrap_or(f64::INFINITY))
    }
}
