//! Recycle bin inspection, recovery and purge.

use tracing::{debug, warn};

use super::{BinItem, Engine, Recovery};
use crate::error::{Result, VfsError};

impl Engine {
    /// Restore the oldest bin entry to its original folder.
    ///
    /// The parent is looked up by path at recovery time. If it no longer
    /// resolves to a folder the entry is destroyed rather than re-queued,
    /// and [`Recovery::Discarded`] says why.
    pub fn recover(&mut self) -> Result<Recovery> {
        let entry = self.bin.pop_oldest().ok_or(VfsError::BinEmpty)?;
        let parent_path = entry.parent_path();

        let attached = self.tree.resolve(parent_path).and_then(|parent| {
            self.tree.attach(parent, entry.node)?;
            Ok(parent)
        });

        match attached {
            Ok(parent) => {
                self.tree.recompute_from(parent);
                debug!(target: "vfsh", path = %entry.path, "recovered from bin");
                Ok(Recovery::Restored { path: entry.path })
            }
            Err(reason) => {
                let freed = self.tree.destroy(entry.node);
                warn!(
                    target: "vfsh",
                    path = %entry.path,
                    freed,
                    error = %reason,
                    "original location gone, entry discarded"
                );
                Ok(Recovery::Discarded {
                    path: entry.path,
                    reason,
                })
            }
        }
    }

    /// Bin contents, oldest first. The bin is left as it was.
    pub fn showbin(&self) -> Vec<BinItem> {
        self.bin
            .iter()
            .filter_map(|entry| {
                let node = self.tree.get(entry.node)?;
                Some(BinItem {
                    path: entry.path.clone(),
                    removed_at: entry.removed_display(),
                    kind: node.kind,
                    size: node.size,
                })
            })
            .collect()
    }

    /// Destroy everything in the bin, returning the number of entries purged.
    pub fn emptybin(&mut self) -> usize {
        let entries = self.bin.drain();
        let freed: usize = entries.iter().map(|e| self.tree.destroy(e.node)).sum();
        debug!(target: "vfsh", entries = entries.len(), freed, "emptied bin");
        entries.len()
    }
}
