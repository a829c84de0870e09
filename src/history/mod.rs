//! Search history: where finished runs are reported to.
//!
//! The search core never touches files. Callers hand each [`HistoryEntry`] to
//! a [`HistorySink`] of their choosing: an in-memory [`MemoryHistory`], the
//! append-only text log in [`crate::fs::TextHistoryFile`], or their own.

mod entry;
mod memory;

pub use entry::*;
pub use memory::*;

use crate::error::HistoryError;

/// Destination for finished search runs.
pub trait HistorySink {
    fn record(&mut self, entry: &HistoryEntry) -> Result<(), HistoryError>;

    fn record_all(&mut self, entries: &[HistoryEntry]) -> Result<(), HistoryError> {
        for entry in entries {
            self.record(entry)?;
        }
        Ok(())
    }
}
