use crate::{
    error::HistoryError,
    history::{HistoryEntry, HistorySink},
};

/// Keeps every entry in memory, oldest first.
#[derive(Debug, Default, Clone)]
pub struct MemoryHistory {
    entries: Vec<HistoryEntry>,
}

impl MemoryHistory {
    pub fn new() -> Self {
        MemoryHistory {
            entries: Vec::new(),
        }
    }

    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl HistorySink for MemoryHistory {
    fn record(&mut self, entry: &HistoryEntry) -> Result<(), HistoryError> {
        self.entries.push(entry.clone());
        Ok(())
    }
}
