use serde::{Deserialize, Serialize};

use crate::graph::Location;

/// What to search for: a start, a goal and an optional bound.
///
/// `bound` is the maximum number of edges for depth-first search and the
/// maximum cumulative cost for uniform-cost search. Breadth-first search
/// ignores it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchRequest {
    pub start: Location,
    pub goal: Location,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bound: Option<f64>,
}

impl SearchRequest {
    pub fn new(start: impl Into<Location>, goal: impl Into<Location>) -> Self {
        SearchRequest {
            start: start.into(),
            goal: goal.into(),
            bound: None,
        }
    }

    pub fn with_bound(mut self, bound: Option<f64>) -> Self {
        self.bound = bound;
        self
    }
}
