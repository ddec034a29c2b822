//! Namespace engine: current location, tree mutations and the recycle bin.

mod mutation;
mod navigation;
mod query;
mod recovery;

use serde::Serialize;

use crate::config::EngineConfig;
use crate::error::{Result, VfsError};
use crate::node::{NodeId, NodeKind};
use crate::recycle::RecycleBin;
use crate::tree::NodeTree;

/// In-memory namespace with a working directory and a recycle bin.
///
/// All operations run to completion on `&mut self`; a failed operation
/// leaves the engine untouched.
#[derive(Debug)]
pub struct Engine {
    tree: NodeTree,
    current: NodeId,
    previous: Option<NodeId>,
    bin: RecycleBin,
    config: EngineConfig,
}

/// Result of a `cd` request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Navigation {
    /// The working directory changed to the given path.
    Changed { path: String },
    /// `cd ..` at the root; nothing changed.
    AlreadyAtRoot,
    /// `cd -` with no previous directory; nothing changed.
    NoPrevious,
}

/// Result of a successful `rm`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Removal {
    /// Path the removed node occupied.
    pub path: String,
    /// Entry pushed out of a full bin to make room.
    pub evicted: Option<Eviction>,
}

/// A bin entry destroyed to make room for a newer one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Eviction {
    /// Original path of the destroyed node.
    pub path: String,
    /// Number of nodes freed with it.
    pub freed: usize,
}

/// Result of a `recover` request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Recovery {
    /// The node is back at its original path.
    Restored { path: String },
    /// The original parent is gone; the node was destroyed.
    Discarded { path: String, reason: VfsError },
}

/// One line of `showbin` output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BinItem {
    pub path: String,
    pub removed_at: String,
    pub kind: NodeKind,
    pub size: u64,
}

/// Answer to a `size` query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SizeReport {
    pub name: String,
    pub kind: NodeKind,
    /// Deep size for folders, own size for files.
    pub size: u64,
}

impl Default for Engine {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}

impl Engine {
    /// Create an engine with an empty root folder as the working directory.
    pub fn new(config: EngineConfig) -> Self {
        let tree = NodeTree::new(config.root_name.as_str());
        let current = tree.root();
        Self {
            tree,
            current,
            previous: None,
            bin: RecycleBin::new(config.bin_capacity),
            config,
        }
    }

    /// Read access to the node tree.
    pub fn tree(&self) -> &NodeTree {
        &self.tree
    }

    /// Read access to the recycle bin.
    pub fn bin(&self) -> &RecycleBin {
        &self.bin
    }

    /// Configuration this engine was built with.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Current working directory.
    pub fn current(&self) -> NodeId {
        self.current
    }

    /// Directory `cd -` would return to.
    pub fn previous(&self) -> Option<NodeId> {
        self.previous
    }

    /// Current working directory, checked to still be a live folder.
    fn current_folder(&self) -> Result<NodeId> {
        match self.tree.get(self.current) {
            Some(node) if node.is_folder() => Ok(self.current),
            _ => Err(VfsError::NoCurrentLocation),
        }
    }

    /// Point `current`/`previous` away from a subtree that just left the tree.
    fn redirect_detached(&mut self, detached: NodeId, fallback: NodeId) {
        if self.tree.is_within(self.current, detached) {
            self.current = fallback;
        }
        if self.previous.is_some_and(|prev| self.tree.is_within(prev, detached)) {
            self.previous = Some(fallback);
        }
    }
}
