//! Turning document files into plain text.

use std::{
    fs,
    path::{Path, PathBuf},
};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("unsupported file format '{extension}' for {}", path.display())]
    UnsupportedFormat { path: PathBuf, extension: String },

    #[error("malformed document {}: {reason}", path.display())]
    Malformed { path: PathBuf, reason: String },
}

/// Source of document text.
pub trait DocumentLoader {
    /// Extract the plain text of the document at `path`.
    fn load(&self, path: &Path) -> Result<String, LoadError>;

    fn supports(&self, path: &Path) -> bool;
}

/// Text-like formats read as-is.
const RAW_EXTENSIONS: &[&str] = &["txt", "md", "markdown", "tex", "csv", "html", "htm", "xml", "yaml", "yml"];

/// Loader for text-based formats.
///
/// Markup is not stripped; tags and punctuation become tokens like any other
/// text. JSON is parsed and re-emitted pretty-printed so that formatting
/// differences between two files do not affect the comparison.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainTextLoader;

impl PlainTextLoader {
    pub fn new() -> Self {
        PlainTextLoader
    }

    fn read(path: &Path) -> Result<String, LoadError> {
        fs::read_to_string(path).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })
    }
}

fn extension_of(path: &Path) -> String {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase)
        .unwrap_or_default()
}

impl DocumentLoader for PlainTextLoader {
    fn load(&self, path: &Path) -> Result<String, LoadError> {
        let extension = extension_of(path);
        let text = match extension.as_str() {
            "json" => {
                let raw = Self::read(path)?;
                let value: serde_json::Value = serde_json::from_str(&raw).map_err(|e| LoadError::Malformed {
                    path: path.to_path_buf(),
                    reason: e.to_string(),
                })?;
                serde_json::to_string_pretty(&value).map_err(|e| LoadError::Malformed {
                    path: path.to_path_buf(),
                    reason: e.to_string(),
                })?
            }
            ext if RAW_EXTENSIONS.contains(&ext) => Self::read(path)?,
            _ => {
                return Err(LoadError::UnsupportedFormat {
                    path: path.to_path_buf(),
                    extension,
                })
            }
        };
        tracing::debug!(path = %path.display(), bytes = text.len(), "loaded document");
        Ok(text)
    }

    fn supports(&self, path: &Path) -> bool {
        let extension = extension_of(path);
        extension == "json" || RAW_EXTENSIONS.contains(&extension.as_str())
    }
}
