//! Error types for namespace operations.

use thiserror::Error;

/// Result alias used throughout the engine.
pub type Result<T, E = VfsError> = std::result::Result<T, E>;

/// Errors that can occur while operating on the namespace.
///
/// Every operation that returns one of these leaves the tree and the
/// recycle bin exactly as they were.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VfsError {
    /// Path does not start with `/`.
    #[error("Invalid path '{path}': path must start with '/'")]
    InvalidPath { path: String },

    /// A path segment or child name does not exist.
    #[error("Not found: {name}")]
    NotFound { name: String },

    /// Operation requires a folder but got a file.
    #[error("Not a folder: {name}")]
    NotAFolder { name: String },

    /// Name contains a character outside `[A-Za-z0-9.]`.
    #[error("Invalid name '{name}': {reason}")]
    InvalidName { name: String, reason: String },

    /// The current location is gone.
    #[error("No current directory selected")]
    NoCurrentLocation,

    /// Recovery was requested but the bin holds nothing.
    #[error("Bin is empty")]
    BinEmpty,

    /// Move would place a node inside itself.
    #[error("Cannot move '{name}' into itself")]
    InvalidMove { name: String },
}

impl VfsError {
    /// Create a not-found error for a name or path segment.
    pub fn not_found(name: impl Into<String>) -> Self {
        Self::NotFound { name: name.into() }
    }

    /// Create a not-a-folder error.
    pub fn not_a_folder(name: impl Into<String>) -> Self {
        Self::NotAFolder { name: name.into() }
    }

    /// Create a name validation error for the offending character.
    pub fn invalid_char(name: impl Into<String>, bad: char) -> Self {
        let reason = match bad {
            '\0' => "name cannot be empty".to_string(),
            '/' => "'/' separates path components".to_string(),
            _ => format!("'{bad}' is not allowed, use letters, digits and '.' only"),
        };
        Self::InvalidName {
            name: name.into(),
            reason,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_char_message() {
        let err = VfsError::invalid_char("my file", ' ');
        assert!(matches!(err, VfsError::InvalidName { .. }));
        assert!(err.to_string().contains("' ' is not allowed"));
    }

    #[test]
    fn test_separator_message() {
        let err = VfsError::invalid_char("a/b", '/');
        assert!(err.to_string().contains("separates path components"));
    }

    #[test]
    fn test_empty_name_message() {
        let err = VfsError::invalid_char("", '\0');
        assert!(err.to_string().contains("cannot be empty"));
    }
}
