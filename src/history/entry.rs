use std::fmt;

use chrono::{DateTime, Local, Utc};
use serde::{Deserialize, Serialize};

use crate::{graph::Location, statistics::RunRecord};

const RULE: &str = "================================================================================";

/// A run record stamped with who asked for it and when.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub user: String,
    pub timestamp: DateTime<Utc>,
    pub record: RunRecord,
}

impl HistoryEntry {
    pub fn new(user: impl Into<String>, record: RunRecord) -> Self {
        HistoryEntry {
            user: user.into(),
            timestamp: Utc::now(),
            record,
        }
    }

    pub fn with_timestamp(mut self, timestamp: DateTime<Utc>) -> Self {
        self.timestamp = timestamp;
        self
    }
}

fn join(locations: &[Location]) -> String {
    locations
        .iter()
        .map(Location::as_str)
        .collect::<Vec<_>>()
        .join(" -> ")
}

/// The human-readable block appended to the text history log.
impl fmt::Display for HistoryEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let record = &self.record;
        let result = &record.result;

        writeln!(f, "{RULE}")?;
        writeln!(
            f,
            "Date/Time: {}",
            self.timestamp.with_timezone(&Local).format("%Y-%m-%d %H:%M:%S")
        )?;
        writeln!(f, "User: {}", self.user)?;
        writeln!(f, "Algorithm: {}", record.label())?;
        writeln!(f, "Route: {} -> {}", record.request.start, record.request.goal)?;
        writeln!(f, "Nodes Visited: {}", result.nodes_visited)?;
        if result.visited_order.is_empty() {
            writeln!(f, "Traversal Order: N/A")?;
        } else {
            writeln!(f, "Traversal Order: {}", join(&result.visited_order))?;
        }
        match &result.path {
            Some(path) => {
                writeln!(f, "Path Found: {}", join(path))?;
                writeln!(f, "Total Cost: {}", result.cost)?;
            }
            None => writeln!(f, "No Path Found")?,
        }
        writeln!(
            f,
            "Execution Time: {:.6} seconds",
            result.elapsed.as_secs_f64()
        )?;
        writeln!(f, "{RULE}")
    }
}
