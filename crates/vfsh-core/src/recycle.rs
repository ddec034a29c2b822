//! Bounded recycle bin for removed nodes.

use std::collections::VecDeque;

use chrono::{DateTime, Local};

use crate::config::DEFAULT_BIN_CAPACITY;
use crate::node::{NodeId, TIME_FORMAT};

/// A removed node waiting for recovery or eviction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BinEntry {
    /// Root of the detached subtree.
    pub node: NodeId,
    /// Absolute path the node occupied when it was removed.
    pub path: String,
    /// When the node was removed.
    pub removed_at: DateTime<Local>,
}

impl BinEntry {
    /// Create a new bin entry stamped with the current time.
    pub fn new(node: NodeId, path: impl Into<String>) -> Self {
        Self {
            node,
            path: path.into(),
            removed_at: Local::now(),
        }
    }

    /// Path of the folder the node should be restored into.
    pub fn parent_path(&self) -> &str {
        match self.path.rfind('/') {
            Some(0) | None => "/",
            Some(idx) => &self.path[..idx],
        }
    }

    /// Removal time rendered for display.
    pub fn removed_display(&self) -> String {
        self.removed_at.format(TIME_FORMAT).to_string()
    }
}

/// FIFO of removed nodes with a fixed capacity.
///
/// Pushing into a full bin evicts the oldest entry and hands it back to the
/// caller, who is responsible for destroying the subtree it names.
#[derive(Debug)]
pub struct RecycleBin {
    entries: VecDeque<BinEntry>,
    capacity: usize,
}

impl Default for RecycleBin {
    fn default() -> Self {
        Self::new(DEFAULT_BIN_CAPACITY)
    }
}

impl RecycleBin {
    /// Create a new bin with the given capacity (at least one slot).
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            entries: VecDeque::with_capacity(capacity.min(1000)),
            capacity,
        }
    }

    /// Add an entry, returning the evicted oldest entry if the bin was full.
    pub fn push(&mut self, entry: BinEntry) -> Option<BinEntry> {
        let evicted = if self.entries.len() >= self.capacity {
            self.entries.pop_front()
        } else {
            None
        };
        self.entries.push_back(entry);
        evicted
    }

    /// Remove and return the oldest entry.
    pub fn pop_oldest(&mut self) -> Option<BinEntry> {
        self.entries.pop_front()
    }

    /// Remove every entry, oldest first.
    pub fn drain(&mut self) -> Vec<BinEntry> {
        self.entries.drain(..).collect()
    }

    /// Get an iterator over all entries (oldest first).
    pub fn iter(&self) -> impl Iterator<Item = &BinEntry> {
        self.entries.iter()
    }

    /// Get the number of entries in the bin.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the bin is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Maximum number of entries.
    pub fn capacity(&self) -> usize {
        self.capacity
    }
}
