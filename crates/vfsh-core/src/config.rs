//! Engine configuration types.

use derive_builder::Builder;
use serde::{Deserialize, Serialize};

/// Number of entries the recycle bin holds before evicting.
pub const DEFAULT_BIN_CAPACITY: usize = 10;

/// Size given to a folder when it is created.
pub const DEFAULT_FOLDER_SIZE: u64 = 10;

/// Size given to a file when `touch` is called without one.
pub const DEFAULT_FILE_SIZE: u64 = 10;

/// Configuration for a namespace engine.
#[derive(Debug, Clone, Builder, Serialize, Deserialize)]
#[builder(setter(into), build_fn(validate = "Self::validate"))]
pub struct EngineConfig {
    /// Maximum number of entries in the recycle bin.
    #[builder(default = "DEFAULT_BIN_CAPACITY")]
    #[serde(default = "default_bin_capacity")]
    pub bin_capacity: usize,

    /// Initial size of a new folder.
    #[builder(default = "DEFAULT_FOLDER_SIZE")]
    #[serde(default = "default_folder_size")]
    pub folder_size: u64,

    /// Size used by `touch` when none is given.
    #[builder(default = "DEFAULT_FILE_SIZE")]
    #[serde(default = "default_file_size")]
    pub default_file_size: u64,

    /// Name of the root folder. Never part of a path.
    #[builder(default = "\"Root\".to_string()")]
    #[serde(default = "default_root_name")]
    pub root_name: String,
}

fn default_bin_capacity() -> usize {
    DEFAULT_BIN_CAPACITY
}

fn default_folder_size() -> u64 {
    DEFAULT_FOLDER_SIZE
}

fn default_file_size() -> u64 {
    DEFAULT_FILE_SIZE
}

fn default_root_name() -> String {
    "Root".to_string()
}

impl EngineConfigBuilder {
    fn validate(&self) -> Result<(), String> {
        if self.bin_capacity == Some(0) {
            return Err("Bin capacity must be at least 1".to_string());
        }
        if let Some(ref name) = self.root_name {
            if name.is_empty() {
                return Err("Root name cannot be empty".to_string());
            }
        }
        Ok(())
    }
}

impl EngineConfig {
    /// Create a new engine config builder.
    pub fn builder() -> EngineConfigBuilder {
        EngineConfigBuilder::default()
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            bin_capacity: DEFAULT_BIN_CAPACITY,
            folder_size: DEFAULT_FOLDER_SIZE,
            default_file_size: DEFAULT_FILE_SIZE,
            root_name: default_root_name(),
        }
    }
}
