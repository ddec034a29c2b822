//! File and folder node types.

use chrono::{DateTime, Local};
use compact_str::CompactString;
use serde::Serialize;

/// Format used when rendering creation and removal times.
pub const TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Unique identifier for a node within a tree.
///
/// Identifiers are handed out in increasing order and never reused, so an id
/// that outlived its node simply fails to look up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct NodeId(pub u64);

impl NodeId {
    /// Create a new NodeId from a u64.
    pub fn new(id: u64) -> Self {
        Self(id)
    }
}

/// Type of namespace node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum NodeKind {
    /// Leaf node with an authoritative size.
    File,
    /// Container node whose size is a rollup of its children.
    Folder,
}

impl NodeKind {
    /// Check if this is a folder.
    pub fn is_folder(&self) -> bool {
        matches!(self, NodeKind::Folder)
    }

    /// Check if this is a file.
    pub fn is_file(&self) -> bool {
        matches!(self, NodeKind::File)
    }

    /// Short label used in listings.
    pub fn label(&self) -> &'static str {
        match self {
            NodeKind::File => "file",
            NodeKind::Folder => "dir",
        }
    }
}

/// A single file or folder in the tree.
#[derive(Debug, Clone, Serialize)]
pub struct Node {
    /// Unique identifier for this node.
    pub id: NodeId,

    /// Node name (not full path).
    pub name: CompactString,

    /// File or folder. Fixed at creation.
    pub kind: NodeKind,

    /// Size in bytes. For folders this is the sum of the direct children.
    pub size: u64,

    /// When the node was created.
    pub created_at: DateTime<Local>,

    /// Owning folder, `None` for the root and for detached subtrees.
    pub parent: Option<NodeId>,

    /// Children in insertion order (folders only).
    pub children: Vec<NodeId>,
}

impl Node {
    /// Create a new file node.
    pub fn new_file(id: NodeId, name: impl Into<CompactString>, size: u64) -> Self {
        Self::new(id, name, NodeKind::File, size)
    }

    /// Create a new folder node.
    pub fn new_folder(id: NodeId, name: impl Into<CompactString>, size: u64) -> Self {
        Self::new(id, name, NodeKind::Folder, size)
    }

    fn new(id: NodeId, name: impl Into<CompactString>, kind: NodeKind, size: u64) -> Self {
        Self {
            id,
            name: name.into(),
            kind,
            size,
            created_at: Local::now(),
            parent: None,
            children: Vec::new(),
        }
    }

    /// Check if this node is a folder.
    pub fn is_folder(&self) -> bool {
        self.kind.is_folder()
    }

    /// Check if this node is a file.
    pub fn is_file(&self) -> bool {
        self.kind.is_file()
    }

    /// Creation time rendered with [`TIME_FORMAT`].
    pub fn created_display(&self) -> String {
        self.created_at.format(TIME_FORMAT).to_string()
    }
}

/// Check that a file name only uses ASCII letters, digits and `.`.
///
/// Returns the first offending character on failure. An empty name is
/// reported as a NUL character.
pub fn check_file_name(name: &str) -> Result<(), char> {
    if name.is_empty() {
        return Err('\0');
    }
    match name.chars().find(|c| !c.is_ascii_alphanumeric() && *c != '.') {
        Some(c) => Err(c),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_node_id() {
        let id = NodeId::new(42);
        assert_eq!(id.0, 42);
    }

    #[test]
    fn test_file_node_creation() {
        let node = Node::new_file(NodeId::new(1), "notes.txt", 1024);
        assert!(node.is_file());
        assert!(!node.is_folder());
        assert_eq!(node.size, 1024);
        assert!(node.children.is_empty());
        assert!(node.parent.is_none());
    }

    #[test]
    fn test_folder_node_creation() {
        let node = Node::new_folder(NodeId::new(1), "docs", 10);
        assert!(node.is_folder());
        assert_eq!(node.kind.label(), "dir");
        assert_eq!(node.size, 10);
    }

    #[test]
    fn test_created_display_format() {
        let node = Node::new_file(NodeId::new(1), "a", 0);
        let shown = node.created_display();
        // YYYY-MM-DD HH:MM:SS
        assert_eq!(shown.len(), 19);
        assert_eq!(&shown[4..5], "-");
        assert_eq!(&shown[10..11], " ");
    }

    #[test]
    fn test_check_file_name() {
        assert!(check_file_name("a.txt").is_ok());
        assert!(check_file_name("README").is_ok());
        assert!(check_file_name("v1.2.3").is_ok());
        assert_eq!(check_file_name("my file"), Err(' '));
        assert_eq!(check_file_name("a/b"), Err('/'));
        assert_eq!(check_file_name("under_score"), Err('_'));
        assert_eq!(check_file_name(""), Err('\0'));
    }
}
