use std::time::Duration;

use serde::Serialize;

use crate::{
    graph::Weight,
    search::{SearchResult, infinite_as_null},
    statistics::RunRecord,
};

/// One algorithm's line in a comparison table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonRow {
    pub algorithm: String,
    pub elapsed: Duration,
    pub nodes_visited: usize,
    pub path_found: bool,
    /// Weight of the path found; infinite without a path.
    #[serde(serialize_with = "infinite_as_null::serialize")]
    pub cost: Weight,
    pub path_edges: Option<usize>,
}

impl ComparisonRow {
    pub fn new(algorithm: impl Into<String>, result: &SearchResult) -> Self {
        ComparisonRow {
            algorithm: algorithm.into(),
            elapsed: result.elapsed,
            nodes_visited: result.nodes_visited,
            path_found: result.found(),
            cost: result.cost,
            path_edges: result.edge_count(),
        }
    }
}

/// Side-by-side view of several runs between the same endpoints.
///
/// Every algorithm carries the real weight of the path it found, so
/// `cheapest` compares like with like even for BFS and DFS. The picks are
/// indices into `rows`; on ties the earliest row wins.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonReport {
    pub rows: Vec<ComparisonRow>,
    /// Row with the smallest elapsed time.
    pub fastest: Option<usize>,
    /// Row with the smallest cost among rows that found a path.
    pub cheapest: Option<usize>,
    /// Row that expanded the fewest locations.
    pub fewest_visited: Option<usize>,
}

impl ComparisonReport {
    pub fn from_rows(rows: Vec<ComparisonRow>) -> Self {
        let fastest = first_min_by(rows.iter().enumerate(), |a, b| a.elapsed.cmp(&b.elapsed));
        let cheapest = first_min_by(
            rows.iter().enumerate().filter(|(_, row)| row.path_found),
            |a, b| a.cost.total_cmp(&b.cost),
        );
        let fewest_visited =
            first_min_by(rows.iter().enumerate(), |a, b| a.nodes_visited.cmp(&b.nodes_visited));

        ComparisonReport {
            rows,
            fastest,
            cheapest,
            fewest_visited,
        }
    }

    /// Builds a report from `(algorithm name, result)` pairs.
    pub fn from_runs<S: AsRef<str>>(runs: &[(S, SearchResult)]) -> Self {
        Self::from_rows(
            runs.iter()
                .map(|(name, result)| ComparisonRow::new(name.as_ref(), result))
                .collect(),
        )
    }

    pub fn from_records(records: &[RunRecord]) -> Self {
        Self::from_rows(
            records
                .iter()
                .map(|record| ComparisonRow::new(record.algorithm.name(), &record.result))
                .collect(),
        )
    }

    pub fn fastest_row(&self) -> Option<&ComparisonRow> {
        self.fastest.map(|i| &self.rows[i])
    }

    pub fn cheapest_row(&self) -> Option<&ComparisonRow> {
        self.cheapest.map(|i| &self.rows[i])
    }

    pub fn fewest_visited_row(&self) -> Option<&ComparisonRow> {
        self.fewest_visited.map(|i| &self.rows[i])
    }
}

// `Iterator::min_by` already keeps the first of equal elements
fn first_min_by<'a, I, F>(rows: I, mut compare: F) -> Option<usize>
where
    I: Iterator<Item = (usize, &'a ComparisonRow)>,
    F: FnMut(&ComparisonRow, &ComparisonRow) -> std::cmp::Ordering,
{
    rows.min_by(|x, y| compare(x.1, y.1)).map(|(i, _)| i)
}
