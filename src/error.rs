//! Error types shared by the graph, the history sinks and the file loaders.
//!
//! Search never fails: an unreachable or missing endpoint is reported as a
//! normal [`SearchResult`](crate::search::SearchResult) without a path. The
//! errors below only come out of graph mutation and the I/O edges of the crate.

use std::path::PathBuf;

use thiserror::Error;

use crate::graph::Location;

/// Failure of a [`CampusGraph`](crate::graph::CampusGraph) mutation or lookup.
///
/// These are recoverable: a caller is expected to display them and carry on.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GraphError {
    #[error("location '{0}' does not exist")]
    LocationNotFound(Location),

    #[error("no connection between '{from}' and '{to}'")]
    ConnectionNotFound { from: Location, to: Location },

    #[error("invalid weight {weight} between '{from}' and '{to}': weights must be finite and non-negative")]
    InvalidWeight {
        from: Location,
        to: Location,
        weight: f64,
    },
}

impl GraphError {
    /// True for both kinds of "not found": a missing location or a missing connection.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            GraphError::LocationNotFound(_) | GraphError::ConnectionNotFound { .. }
        )
    }
}

/// Failure to persist or read back search history.
#[derive(Debug, Error)]
pub enum HistoryError {
    #[error("history file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Failure to load a campus map from disk.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("cannot read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed campus map {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error(transparent)]
    Graph(#[from] GraphError),
}

/// Rejected run configuration.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("repeat count must be at least 1")]
    ZeroRepeat,

    #[error("{name} must be non-negative, got {value}")]
    NegativeLimit { name: &'static str, value: f64 },
}

/// Unknown algorithm name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown algorithm '{0}', expected one of: bfs, dfs, ucs")]
pub struct ParseAlgorithmError(pub String);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_covers_locations_and_connections() {
        assert!(GraphError::LocationNotFound("A".into()).is_not_found());
        assert!(
            GraphError::ConnectionNotFound {
                from: "A".into(),
                to: "B".into()
            }
            .is_not_found()
        );
        assert!(
            !GraphError::InvalidWeight {
                from: "A".into(),
                to: "B".into(),
                weight: -1.0
            }
            .is_not_found()
        );
    }

    #[test]
    fn messages_name_the_locations() {
        let err = GraphError::ConnectionNotFound {
            from: "Gate".into(),
            to: "Library".into(),
        };
        assert_eq!(
            err.to_string(),
            "no connection between 'Gate' and 'Library'"
        );
        assert_eq!(
            ParseAlgorithmError("astar".into()).to_string(),
            "unknown algorithm 'astar', expected one of: bfs, dfs, ucs"
        );
    }
}
