//! Structural changes: create, remove and move.

use tracing::{debug, warn};

use super::{Engine, Eviction, Removal};
use crate::error::{Result, VfsError};
use crate::node::{NodeId, NodeKind, check_file_name};
use crate::recycle::BinEntry;

impl Engine {
    /// Create a folder under the working directory.
    ///
    /// Duplicate names are accepted; lookups resolve to the first one.
    /// The name must be non-empty and must not contain `/`.
    pub fn mkdir(&mut self, name: &str) -> Result<NodeId> {
        let current = self.current_folder()?;
        if name.is_empty() {
            return Err(VfsError::invalid_char(name, '\0'));
        }
        if name.contains('/') {
            return Err(VfsError::invalid_char(name, '/'));
        }

        let id = self
            .tree
            .create(NodeKind::Folder, name, self.config.folder_size);
        self.tree.attach(current, id)?;
        self.tree.recompute_from(current);

        debug!(target: "vfsh", node = name, parent = %self.pwd(), "created folder");
        Ok(id)
    }

    /// Create a file under the working directory.
    ///
    /// The name may only contain ASCII letters, digits and `.`. A missing
    /// size falls back to the configured default.
    pub fn touch(&mut self, name: &str, size: Option<u64>) -> Result<NodeId> {
        let current = self.current_folder()?;
        check_file_name(name).map_err(|bad| VfsError::invalid_char(name, bad))?;

        let size = size.unwrap_or(self.config.default_file_size);
        let id = self.tree.create(NodeKind::File, name, size);
        self.tree.attach(current, id)?;
        self.tree.recompute_from(current);

        debug!(target: "vfsh", node = name, size, parent = %self.pwd(), "created file");
        Ok(id)
    }

    /// Move a direct child of the working directory into the recycle bin.
    ///
    /// When the bin is full its oldest entry is destroyed to make room and
    /// reported in the returned [`Removal`].
    pub fn rm(&mut self, name: &str) -> Result<Removal> {
        let current = self.current_folder()?;
        let target = self
            .tree
            .child_by_name(current, name)
            .ok_or_else(|| VfsError::not_found(name))?;

        let path = self.tree.path_of(target);
        self.tree.detach(target);
        self.redirect_detached(target, current);
        self.tree.recompute_from(current);

        let evicted = self
            .bin
            .push(BinEntry::new(target, path.as_str()))
            .map(|old| {
                let freed = self.tree.destroy(old.node);
                warn!(target: "vfsh", path = %old.path, freed, "bin full, evicted oldest entry");
                Eviction {
                    path: old.path,
                    freed,
                }
            });

        debug!(target: "vfsh", path = %path, "moved to bin");
        Ok(Removal { path, evicted })
    }

    /// Move the direct child `source` into the sibling folder `target`.
    ///
    /// Returns the node's new path.
    pub fn mv(&mut self, source: &str, target: &str) -> Result<String> {
        let current = self.current_folder()?;
        let moving = self.tree.child_by_name(current, source);
        let dest = self.tree.child_by_name(current, target);
        let (Some(moving), Some(dest)) = (moving, dest) else {
            let missing = if moving.is_none() { source } else { target };
            return Err(VfsError::not_found(missing));
        };

        if !self.tree.get(dest).is_some_and(|n| n.is_folder()) {
            return Err(VfsError::not_a_folder(target));
        }
        if moving == dest {
            return Err(VfsError::InvalidMove {
                name: source.to_string(),
            });
        }

        self.tree.attach(dest, moving)?;
        self.tree.recompute_from(current);
        self.tree.recompute_from(dest);

        let path = self.tree.path_of(moving);
        debug!(target: "vfsh", from = source, to = %path, "moved node");
        Ok(path)
    }
}
