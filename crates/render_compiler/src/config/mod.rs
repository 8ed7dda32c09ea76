//! Configuration for the command compiler

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

use crate::tasks::{SchedulerError, WorkerPool};

/// Compiler configuration
///
/// Loaded once at startup; the interesting knob is the worker thread
/// count, which defaults to one worker per core.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CompilerConfig {
    /// Number of worker threads for pass compilation, or `None` for one
    /// per available core
    pub worker_threads: Option<usize>,
}

impl CompilerConfig {
    /// Load configuration from a TOML file
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(ConfigError::Io)?;
        toml::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Save configuration to a TOML file
    pub fn save_to_file(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let contents =
            toml::to_string_pretty(self).map_err(|e| ConfigError::Serialize(e.to_string()))?;
        std::fs::write(path, contents).map_err(ConfigError::Io)
    }

    /// Build the worker pool this configuration describes
    pub fn build_worker_pool(&self) -> Result<WorkerPool, SchedulerError> {
        WorkerPool::from_num_threads(self.worker_threads)
    }
}

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Parse error
    #[error("Parse error: {0}")]
    Parse(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialize(String),
}
