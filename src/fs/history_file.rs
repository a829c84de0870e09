use std::{
    fs::{self, OpenOptions},
    io::{ErrorKind, Write},
    path::{Path, PathBuf},
};

use tracing::debug;

use crate::{
    error::HistoryError,
    history::{HistoryEntry, HistorySink},
};

/// Append-only, human-readable history log on disk.
///
/// The file is opened for each entry and closed right after, so nothing is
/// held between runs.
#[derive(Debug, Clone)]
pub struct TextHistoryFile {
    path: PathBuf,
}

impl TextHistoryFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        TextHistoryFile { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The whole log, or `None` if nothing was ever written.
    pub fn read_all(&self) -> Result<Option<String>, HistoryError> {
        match fs::read_to_string(&self.path) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(source) => Err(self.io_error(source)),
        }
    }

    fn io_error(&self, source: std::io::Error) -> HistoryError {
        HistoryError::Io {
            path: self.path.clone(),
            source,
        }
    }
}

impl HistorySink for TextHistoryFile {
    fn record(&mut self, entry: &HistoryEntry) -> Result<(), HistoryError> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| self.io_error(e))?;
        write!(file, "\n{entry}").map_err(|e| self.io_error(e))?;
        debug!(path = %self.path.display(), label = %entry.record.label(), "history entry written");
        Ok(())
    }
}
