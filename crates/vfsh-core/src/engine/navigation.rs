//! Working-directory navigation.

use tracing::debug;

use super::{Engine, Navigation};
use crate::error::{Result, VfsError};
use crate::node::NodeId;

impl Engine {
    /// Absolute path of the working directory.
    pub fn pwd(&self) -> String {
        self.tree.path_of(self.current)
    }

    /// Change the working directory.
    ///
    /// Accepts `/` or an empty string (root, forgets the previous
    /// directory), `..`, `-`, an absolute path, or the name of a direct
    /// child folder. Files are never valid targets.
    pub fn cd(&mut self, target: &str) -> Result<Navigation> {
        let current = self.current_folder()?;
        let root = self.tree.root();

        match target {
            "" | "/" => {
                self.current = root;
                self.previous = None;
            }
            ".." => {
                if current == root {
                    return Ok(Navigation::AlreadyAtRoot);
                }
                let parent = self
                    .tree
                    .get(current)
                    .and_then(|n| n.parent)
                    .ok_or(VfsError::NoCurrentLocation)?;
                self.move_to(parent);
            }
            "-" => match self.previous {
                Some(prev) if self.tree.contains(prev) => {
                    self.previous = Some(current);
                    self.current = prev;
                }
                _ => return Ok(Navigation::NoPrevious),
            },
            path if path.starts_with('/') => {
                let found = self.tree.resolve(path)?;
                self.require_folder(found, path)?;
                self.move_to(found);
            }
            name => {
                let found = self
                    .tree
                    .child_by_name(current, name)
                    .ok_or_else(|| VfsError::not_found(name))?;
                self.require_folder(found, name)?;
                self.move_to(found);
            }
        }

        let path = self.pwd();
        debug!(target: "vfsh", path = %path, "changed directory");
        Ok(Navigation::Changed { path })
    }

    fn move_to(&mut self, target: NodeId) {
        self.previous = Some(self.current);
        self.current = target;
    }

    fn require_folder(&self, id: NodeId, shown: &str) -> Result<()> {
        match self.tree.get(id) {
            Some(node) if node.is_folder() => Ok(()),
            _ => Err(VfsError::not_a_folder(shown)),
        }
    }
}
