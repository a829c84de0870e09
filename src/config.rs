//! Run configuration shared by the CLI commands.

use std::path::PathBuf;

use crate::{error::ConfigError, graph::Weight};

/// History log used when none is configured.
pub const DEFAULT_HISTORY_FILE: &str = "traversal_history.txt";

/// User name recorded in the history when none is given.
pub const DEFAULT_USER: &str = "anonymous";

#[derive(Debug, Clone, PartialEq)]
pub struct RunConfig {
    pub user: String,
    /// Where finished runs are appended. `None` disables the history log.
    pub history_path: Option<PathBuf>,
    /// Maximum number of edges for depth-first search.
    pub dfs_depth: Option<usize>,
    /// Maximum cumulative cost for uniform-cost search.
    pub ucs_cost_limit: Option<Weight>,
    /// How many times each search is repeated when timing it.
    pub repeat: usize,
    pub json: bool,
}

impl Default for RunConfig {
    fn default() -> Self {
        RunConfig {
            user: DEFAULT_USER.to_string(),
            history_path: Some(PathBuf::from(DEFAULT_HISTORY_FILE)),
            dfs_depth: None,
            ucs_cost_limit: None,
            repeat: 1,
            json: false,
        }
    }
}

impl RunConfig {
    /// Rejects settings no search could honour.
    pub fn validate(self) -> Result<Self, ConfigError> {
        if self.repeat == 0 {
            return Err(ConfigError::ZeroRepeat);
        }
        check_limit("ucs cost limit", self.ucs_cost_limit)?;
        Ok(self)
    }
}

/// Rejects a negative or NaN search bound; `None` means unbounded.
pub fn check_limit(name: &'static str, limit: Option<f64>) -> Result<(), ConfigError> {
    match limit {
        Some(value) if value.is_nan() || value < 0.0 => {
            Err(ConfigError::NegativeLimit { name, value })
        }
        _ => Ok(()),
    }
}
