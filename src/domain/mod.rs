//! Core domain types
//!
//! Defines the file record produced by discovery and the per-file error
//! taxonomy used by the renderer.

use std::path::{Path, PathBuf};
use thiserror::Error;

/// A file selected for inclusion in the output document.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct TargetFile {
    /// Path relative to the scan root, always forward-slash separated.
    /// Listed first so the derived ordering sorts by relative path.
    pub relative_path: String,

    /// Absolute path to the file
    pub path: PathBuf,
}

impl TargetFile {
    pub fn new(path: PathBuf, root: &Path) -> Self {
        let relative_path = relative_path_string(&path, root);
        Self { relative_path, path }
    }

    /// File extension with its leading dot (e.g. `.py`), or `None` for
    /// extension-less files.
    pub fn extension(&self) -> Option<String> {
        self.path.extension().and_then(|e| e.to_str()).map(|e| format!(".{e}"))
    }

    pub fn is_notebook(&self) -> bool {
        self.extension().as_deref() == Some(".ipynb")
    }
}

/// Forward-slash relative path of `path` under `root`. Falls back to the
/// full path when `path` is not below `root`.
pub fn relative_path_string(path: &Path, root: &Path) -> String {
    let relative = path.strip_prefix(root).unwrap_or(path);
    relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}

/// Errors local to one file's section. These never abort the run; the
/// assembler renders them as a visible note in the section body.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("file is not valid UTF-8 text")]
    Decode(#[from] std::string::FromUtf8Error),

    #[error("malformed notebook JSON: {0}")]
    NotebookParse(#[from] serde_json::Error),

    #[error("failed to read file: {0}")]
    Io(#[from] std::io::Error),
}
