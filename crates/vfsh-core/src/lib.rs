//! Core types for vfsh.
//!
//! This crate provides the in-memory namespace: file and folder nodes, the
//! arena that owns them, the bounded recycle bin, and the engine that ties
//! them together behind a shell-like set of operations.

mod config;
mod engine;
mod error;
mod node;
mod recycle;
mod tree;

pub use config::{
    DEFAULT_BIN_CAPACITY, DEFAULT_FILE_SIZE, DEFAULT_FOLDER_SIZE, EngineConfig, EngineConfigBuilder,
};
pub use engine::{BinItem, Engine, Eviction, Navigation, Recovery, Removal, SizeReport};
pub use error::{Result, VfsError};
pub use node::{Node, NodeId, NodeKind, TIME_FORMAT, check_file_name};
pub use recycle::{BinEntry, RecycleBin};
pub use tree::{NodeSnapshot, NodeTree};
