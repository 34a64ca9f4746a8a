use std::{
    fs,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::strategy::{ScanContext, ScanParams, Strategy, DEFAULT_CHUNK_SIZE};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Defaults for a comparison run, read from a JSON file.
///
/// Missing keys take their default values:
///
/// ```json
/// { "strategy": "round-robin", "chunk_size": 25, "pace_ms": 0 }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ComparisonConfig {
    pub strategy: Strategy,
    /// Round Robin chunk length in characters
    pub chunk_size: usize,
    /// Delay per scan unit in milliseconds, 0 disables pacing
    pub pace_ms: u64,
}

impl Default for ComparisonConfig {
    fn default() -> Self {
        Self {
            strategy: Strategy::default(),
            chunk_size: DEFAULT_CHUNK_SIZE,
            pace_ms: 0,
        }
    }
}

impl ComparisonConfig {
    pub fn from_json_str(s: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(s)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_json_str(&raw)?;
        tracing::debug!(path = %path.display(), ?config, "loaded config");
        Ok(config)
    }

    pub fn scan_params(&self) -> ScanParams {
        ScanParams::with_chunk_size(self.chunk_size)
    }

    pub fn scan_context(&self) -> ScanContext {
        ScanContext::new().with_pace_millis(self.pace_ms)
    }
}
