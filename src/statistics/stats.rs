use std::time::Duration;

use serde::Serialize;

use crate::search::SearchResult;

/// Totals accumulated over many search calls, e.g. repeated timing runs.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Stats {
    searches: usize,
    nodes_visited: usize,
    paths_found: usize,
    elapsed: Duration,
}

impl Stats {
    pub fn new() -> Self {
        Stats {
            searches: 0,
            nodes_visited: 0,
            paths_found: 0,
            elapsed: Duration::ZERO,
        }
    }

    /// Record into the statistics object that a new search call has been performed
    pub fn bump_searches(&mut self) {
        self.searches += 1
    }

    /// Record into the statistics object that a bunch of locations were expanded
    pub fn bump_nodes_visited(&mut self, node_amount: usize) {
        self.nodes_visited += node_amount
    }

    /// Folds one search outcome into the totals.
    pub fn record(&mut self, result: &SearchResult) {
        self.bump_searches();
        self.bump_nodes_visited(result.nodes_visited);
        if result.found() {
            self.paths_found += 1;
        }
        self.elapsed += result.elapsed;
    }

    pub fn merge(&self, other: &Stats) -> Stats {
        Stats {
            searches: self.searches + other.searches,
            nodes_visited: self.nodes_visited + other.nodes_visited,
            paths_found: self.paths_found + other.paths_found,
            elapsed: self.elapsed + other.elapsed,
        }
    }

    pub fn get_searches(&self) -> usize {
        self.searches
    }

    pub fn get_nodes_visited(&self) -> usize {
        self.nodes_visited
    }

    pub fn get_paths_found(&self) -> usize {
        self.paths_found
    }

    pub fn get_elapsed(&self) -> Duration {
        self.elapsed
    }

    pub fn average_nodes_visited(&self) -> f64 {
        if self.searches == 0 {
            0.0
        } else {
            self.nodes_visited as f64 / self.searches as f64
        }
    }

    pub fn average_elapsed(&self) -> Duration {
        match u32::try_from(self.searches) {
            Ok(0) => Duration::ZERO,
            Ok(n) => self.elapsed / n,
            Err(_) => Duration::from_secs_f64(self.elapsed.as_secs_f64() / self.searches as f64),
        }
    }
}
