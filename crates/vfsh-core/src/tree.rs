//! Arena-backed node tree.

use std::collections::HashMap;

use compact_str::CompactString;
use itertools::Itertools;
use serde::Serialize;

use crate::error::{Result, VfsError};
use crate::node::{Node, NodeId, NodeKind};

/// Owns every node, attached or detached, keyed by id.
///
/// Folders own their children through the id list in [`Node::children`];
/// parent links are plain ids. Detached subtrees (held by the recycle bin)
/// stay in the arena with `parent == None` until they are re-attached or
/// destroyed.
#[derive(Debug, Clone)]
pub struct NodeTree {
    nodes: HashMap<NodeId, Node>,
    root: NodeId,
    next_id: u64,
}

impl NodeTree {
    /// Create a tree holding only an empty root folder.
    pub fn new(root_name: impl Into<CompactString>) -> Self {
        let root = NodeId::new(0);
        let mut nodes = HashMap::new();
        nodes.insert(root, Node::new_folder(root, root_name, 0));
        Self {
            nodes,
            root,
            next_id: 1,
        }
    }

    /// Id of the root folder.
    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Look up a live node.
    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(&id)
    }

    /// Check whether an id still refers to a live node.
    pub fn contains(&self, id: NodeId) -> bool {
        self.nodes.contains_key(&id)
    }

    /// Number of live nodes, detached subtrees included.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Always false; the root cannot be destroyed.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Allocate a new detached node.
    pub fn create(&mut self, kind: NodeKind, name: impl Into<CompactString>, size: u64) -> NodeId {
        let id = NodeId::new(self.next_id);
        self.next_id += 1;
        let node = match kind {
            NodeKind::File => Node::new_file(id, name, size),
            NodeKind::Folder => Node::new_folder(id, name, size),
        };
        self.nodes.insert(id, node);
        id
    }

    /// Append a detached node to a folder's children.
    ///
    /// Files never accept children. Attaching a node below itself is
    /// rejected so the structure stays acyclic.
    pub fn attach(&mut self, parent: NodeId, child: NodeId) -> Result<()> {
        let parent_node = self
            .nodes
            .get(&parent)
            .ok_or_else(|| VfsError::not_found(format!("#{}", parent.0)))?;
        if !parent_node.is_folder() {
            return Err(VfsError::not_a_folder(parent_node.name.as_str()));
        }
        let child_name = match self.nodes.get(&child) {
            Some(node) => node.name.clone(),
            None => return Err(VfsError::not_found(format!("#{}", child.0))),
        };
        if child == self.root || self.is_within(parent, child) {
            return Err(VfsError::InvalidMove {
                name: child_name.to_string(),
            });
        }

        self.detach(child);
        if let Some(node) = self.nodes.get_mut(&child) {
            node.parent = Some(parent);
        }
        if let Some(node) = self.nodes.get_mut(&parent) {
            node.children.push(child);
        }
        Ok(())
    }

    /// Unlink a node from its parent, returning the former parent.
    ///
    /// The subtree stays alive in the arena.
    pub fn detach(&mut self, id: NodeId) -> Option<NodeId> {
        let parent = self.nodes.get_mut(&id)?.parent.take()?;
        if let Some(parent_node) = self.nodes.get_mut(&parent) {
            parent_node.children.retain(|c| *c != id);
        }
        Some(parent)
    }

    /// Drop a node and all of its descendants, returning how many were freed.
    ///
    /// The root is never destroyed.
    pub fn destroy(&mut self, id: NodeId) -> usize {
        if id == self.root {
            return 0;
        }
        self.detach(id);

        let mut freed = 0;
        let mut stack = vec![id];
        while let Some(next) = stack.pop() {
            if let Some(node) = self.nodes.remove(&next) {
                stack.extend(node.children);
                freed += 1;
            }
        }
        freed
    }

    /// Iterate a node's children in insertion order.
    pub fn children(&self, id: NodeId) -> impl Iterator<Item = &Node> + '_ {
        self.nodes
            .get(&id)
            .map(|n| n.children.as_slice())
            .unwrap_or_default()
            .iter()
            .filter_map(|c| self.nodes.get(c))
    }

    /// First direct child with the given name.
    pub fn child_by_name(&self, parent: NodeId, name: &str) -> Option<NodeId> {
        self.children(parent)
            .find(|child| child.name == name)
            .map(|child| child.id)
    }

    /// Resolve an absolute path to a node.
    ///
    /// Empty segments are ignored, so `//a/` names the same node as `/a`.
    /// `.` and `..` are ordinary names here.
    pub fn resolve(&self, path: &str) -> Result<NodeId> {
        if path == "/" {
            return Ok(self.root);
        }
        if !path.starts_with('/') {
            return Err(VfsError::InvalidPath {
                path: path.to_string(),
            });
        }

        let mut current = self.root;
        for segment in path.split('/').filter(|s| !s.is_empty()) {
            current = self
                .child_by_name(current, segment)
                .ok_or_else(|| VfsError::not_found(segment))?;
        }
        Ok(current)
    }

    /// Absolute path of an attached node; `/` for the root.
    pub fn path_of(&self, id: NodeId) -> String {
        let mut names = Vec::new();
        let mut cursor = Some(id);
        while let Some(current) = cursor {
            if current == self.root {
                break;
            }
            let Some(node) = self.nodes.get(&current) else {
                break;
            };
            names.push(node.name.as_str());
            cursor = node.parent;
        }
        format!("/{}", names.iter().rev().join("/"))
    }

    /// Check whether `id` is `ancestor` or lies somewhere below it.
    pub fn is_within(&self, id: NodeId, ancestor: NodeId) -> bool {
        let mut cursor = Some(id);
        while let Some(current) = cursor {
            if current == ancestor {
                return true;
            }
            cursor = self.nodes.get(&current).and_then(|n| n.parent);
        }
        false
    }

    /// Recompute folder sizes from `id` up to its topmost ancestor.
    ///
    /// Each folder on the way becomes the sum of its direct children, clamped
    /// at `u64::MAX`. Files on the path are skipped so their size stays
    /// authoritative.
    pub fn recompute_from(&mut self, id: NodeId) {
        let mut cursor = Some(id);
        while let Some(current) = cursor {
            let total = self
                .children(current)
                .map(|c| c.size)
                .fold(0, u64::saturating_add);
            let Some(node) = self.nodes.get_mut(&current) else {
                break;
            };
            if node.is_folder() {
                node.size = total;
            }
            cursor = node.parent;
        }
    }

    /// Sum of `size` over every descendant of a folder; a file's own size.
    pub fn deep_size(&self, id: NodeId) -> u64 {
        let Some(node) = self.nodes.get(&id) else {
            return 0;
        };
        if node.is_file() {
            return node.size;
        }
        let mut total: u64 = 0;
        let mut stack: Vec<NodeId> = node.children.clone();
        while let Some(next) = stack.pop() {
            if let Some(child) = self.nodes.get(&next) {
                total = total.saturating_add(child.size);
                stack.extend(child.children.iter().copied());
            }
        }
        total
    }

    /// Absolute paths of every node named `name`, depth-first pre-order.
    pub fn find(&self, name: &str) -> Vec<String> {
        let mut found = Vec::new();
        self.find_from(self.root, "", name, &mut found);
        found
    }

    fn find_from(&self, id: NodeId, prefix: &str, name: &str, found: &mut Vec<String>) {
        for child in self.children(id) {
            let path = format!("{prefix}/{}", child.name);
            if child.name == name {
                found.push(path.clone());
            }
            self.find_from(child.id, &path, name, found);
        }
    }

    /// Every node below `id` paired with its depth, depth-first pre-order.
    pub fn descendants(&self, id: NodeId) -> Vec<(usize, &Node)> {
        let mut out = Vec::new();
        let mut stack: Vec<(usize, NodeId)> = self
            .nodes
            .get(&id)
            .map(|n| n.children.iter().rev().map(|c| (1, *c)).collect())
            .unwrap_or_default();
        while let Some((depth, next)) = stack.pop() {
            if let Some(node) = self.nodes.get(&next) {
                out.push((depth, node));
                stack.extend(node.children.iter().rev().map(|c| (depth + 1, *c)));
            }
        }
        out
    }

    /// Serializable copy of the subtree rooted at `id`.
    pub fn snapshot(&self, id: NodeId) -> Option<NodeSnapshot> {
        let node = self.nodes.get(&id)?;
        Some(NodeSnapshot {
            name: node.name.clone(),
            kind: node.kind,
            size: node.size,
            created_at: node.created_display(),
            children: node
                .children
                .iter()
                .filter_map(|c| self.snapshot(*c))
                .collect(),
        })
    }
}

/// Nested, owned view of a subtree used for JSON export.
#[derive(Debug, Clone, Serialize)]
pub struct NodeSnapshot {
    pub name: CompactString,
    pub kind: NodeKind,
    pub size: u64,
    pub created_at: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<NodeSnapshot>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> (NodeTree, NodeId, NodeId) {
        let mut tree = NodeTree::new("Root");
        let docs = tree.create(NodeKind::Folder, "docs", 10);
        tree.attach(tree.root(), docs).unwrap();
        let file = tree.create(NodeKind::File, "a.txt", 5);
        tree.attach(docs, file).unwrap();
        tree.recompute_from(docs);
        (tree, docs, file)
    }

    #[test]
    fn test_new_tree_has_root() {
        let tree = NodeTree::new("Root");
        assert_eq!(tree.len(), 1);
        assert!(tree.get(tree.root()).unwrap().is_folder());
        assert_eq!(tree.path_of(tree.root()), "/");
    }

    #[test]
    fn test_resolve() {
        let (tree, docs, file) = sample();
        assert_eq!(tree.resolve("/").unwrap(), tree.root());
        assert_eq!(tree.resolve("/docs").unwrap(), docs);
        assert_eq!(tree.resolve("//docs//a.txt/").unwrap(), file);
        assert_eq!(
            tree.resolve("docs"),
            Err(VfsError::InvalidPath {
                path: "docs".into()
            })
        );
        assert_eq!(tree.resolve("/docs/b"), Err(VfsError::not_found("b")));
        assert!(tree.resolve("/docs/..").is_err());
    }

    #[test]
    fn test_attach_to_file_rejected() {
        let (mut tree, _, file) = sample();
        let extra = tree.create(NodeKind::File, "b", 1);
        assert!(matches!(
            tree.attach(file, extra),
            Err(VfsError::NotAFolder { .. })
        ));
        assert!(tree.get(file).unwrap().children.is_empty());
    }

    #[test]
    fn test_attach_into_own_subtree_rejected() {
        let (mut tree, docs, _) = sample();
        let inner = tree.create(NodeKind::Folder, "inner", 10);
        tree.attach(docs, inner).unwrap();
        assert!(matches!(
            tree.attach(inner, docs),
            Err(VfsError::InvalidMove { .. })
        ));
        assert_eq!(tree.get(docs).unwrap().parent, Some(tree.root()));
    }

    #[test]
    fn test_path_of() {
        let (tree, docs, file) = sample();
        assert_eq!(tree.path_of(docs), "/docs");
        assert_eq!(tree.path_of(file), "/docs/a.txt");
    }

    #[test]
    fn test_first_match_wins() {
        let mut tree = NodeTree::new("Root");
        let first = tree.create(NodeKind::File, "dup", 1);
        let second = tree.create(NodeKind::File, "dup", 2);
        tree.attach(tree.root(), first).unwrap();
        tree.attach(tree.root(), second).unwrap();
        assert_eq!(tree.child_by_name(tree.root(), "dup"), Some(first));
        assert_eq!(tree.resolve("/dup").unwrap(), first);
    }

    #[test]
    fn test_recompute_rolls_up() {
        let (tree, docs, _) = sample();
        assert_eq!(tree.get(docs).unwrap().size, 5);
        assert_eq!(tree.get(tree.root()).unwrap().size, 5);
    }

    #[test]
    fn test_detach_keeps_subtree_alive() {
        let (mut tree, docs, file) = sample();
        assert_eq!(tree.detach(docs), Some(tree.root()));
        assert!(tree.get(tree.root()).unwrap().children.is_empty());
        assert!(tree.contains(docs));
        assert!(tree.contains(file));
        assert_eq!(tree.detach(docs), None);
    }

    #[test]
    fn test_destroy_subtree() {
        let (mut tree, docs, file) = sample();
        assert_eq!(tree.destroy(docs), 2);
        assert!(!tree.contains(docs));
        assert!(!tree.contains(file));
        assert_eq!(tree.len(), 1);
        assert_eq!(tree.destroy(tree.root()), 0);
    }

    #[test]
    fn test_deep_size_counts_all_descendants() {
        let (mut tree, docs, _) = sample();
        let sub = tree.create(NodeKind::Folder, "sub", 10);
        tree.attach(docs, sub).unwrap();
        let leaf = tree.create(NodeKind::File, "leaf", 7);
        tree.attach(sub, leaf).unwrap();
        tree.recompute_from(sub);

        // docs: a.txt(5) + sub(7) + leaf(7)
        assert_eq!(tree.deep_size(docs), 19);
        assert_eq!(tree.get(docs).unwrap().size, 12);
    }

    #[test]
    fn test_sizes_saturate_at_max() {
        let mut tree = NodeTree::new("Root");
        let docs = tree.create(NodeKind::Folder, "docs", 10);
        tree.attach(tree.root(), docs).unwrap();
        let big = tree.create(NodeKind::File, "big", u64::MAX);
        tree.attach(docs, big).unwrap();
        let small = tree.create(NodeKind::File, "small", 1);
        tree.attach(tree.root(), small).unwrap();
        tree.recompute_from(docs);

        assert_eq!(tree.get(docs).unwrap().size, u64::MAX);
        assert_eq!(tree.get(tree.root()).unwrap().size, u64::MAX);
        assert_eq!(tree.deep_size(tree.root()), u64::MAX);
    }

    #[test]
    fn test_emptied_folder_drops_to_zero() {
        let mut tree = NodeTree::new("Root");
        let docs = tree.create(NodeKind::Folder, "docs", 10);
        tree.attach(tree.root(), docs).unwrap();
        assert_eq!(tree.get(docs).unwrap().size, 10);

        let file = tree.create(NodeKind::File, "a.txt", 5);
        tree.attach(docs, file).unwrap();
        tree.recompute_from(docs);
        assert_eq!(tree.get(docs).unwrap().size, 5);

        tree.detach(file);
        tree.recompute_from(docs);
        assert_eq!(tree.get(docs).unwrap().size, 0);
        assert_eq!(tree.get(tree.root()).unwrap().size, 0);
    }

    #[test]
    fn test_find_preorder() {
        let (mut tree, docs, _) = sample();
        let other = tree.create(NodeKind::File, "a.txt", 1);
        tree.attach(tree.root(), other).unwrap();
        let nested = tree.create(NodeKind::Folder, "a.txt", 10);
        tree.attach(docs, nested).unwrap();

        assert_eq!(
            tree.find("a.txt"),
            vec!["/docs/a.txt", "/docs/a.txt", "/a.txt"]
        );
        assert!(tree.find("Root").is_empty());
    }

    #[test]
    fn test_descendants_depths() {
        let (tree, _, _) = sample();
        let listed: Vec<(usize, &str)> = tree
            .descendants(tree.root())
            .into_iter()
            .map(|(d, n)| (d, n.name.as_str()))
            .collect();
        assert_eq!(listed, vec![(1, "docs"), (2, "a.txt")]);
    }

    #[test]
    fn test_snapshot_nests_children() {
        let (tree, _, _) = sample();
        let snap = tree.snapshot(tree.root()).unwrap();
        assert_eq!(snap.children.len(), 1);
        assert_eq!(snap.children[0].children[0].name, "a.txt");
    }
}
