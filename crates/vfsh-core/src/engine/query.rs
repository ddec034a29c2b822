//! Read-only queries over the namespace.

use super::{Engine, SizeReport};
use crate::error::{Result, VfsError};
use crate::node::Node;

impl Engine {
    /// Direct children of the working directory in insertion order.
    pub fn ls(&self) -> Result<Vec<&Node>> {
        let current = self.current_folder()?;
        Ok(self.tree.children(current).collect())
    }

    /// Deep size of a folder or own size of a file.
    ///
    /// A path without a leading `/` is taken relative to the root, so
    /// `docs` and `/docs` are the same query.
    pub fn size(&self, path: &str) -> Result<SizeReport> {
        let absolute = if path.starts_with('/') {
            path.to_string()
        } else {
            format!("/{path}")
        };
        let id = self.tree.resolve(&absolute)?;
        let node = self
            .tree
            .get(id)
            .ok_or_else(|| VfsError::not_found(path))?;

        Ok(SizeReport {
            name: node.name.to_string(),
            kind: node.kind,
            size: self.tree.deep_size(id),
        })
    }

    /// Absolute paths of every node with the given name.
    pub fn find(&self, name: &str) -> Vec<String> {
        self.tree.find(name)
    }

    /// Whole namespace as `(depth, node)` pairs, depth-first pre-order.
    pub fn listing(&self) -> Vec<(usize, &Node)> {
        self.tree.descendants(self.tree.root())
    }

    /// Pretty-printed JSON snapshot of the live tree.
    pub fn export_json(&self) -> serde_json::Result<String> {
        let snapshot = self.tree.snapshot(self.tree.root());
        serde_json::to_string_pretty(&snapshot)
    }
}
