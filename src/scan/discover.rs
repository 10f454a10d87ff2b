//! Recursive file discovery with ignore pruning.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};
use walkdir::WalkDir;

use crate::domain::{relative_path_string, TargetFile};
use crate::scan::rules::{IgnoreRuleSet, DEFAULT_IGNORE_NAMES};

/// Walks a root directory and produces the sorted list of files that survive
/// ignore-rule and extension filtering.
pub struct FileDiscoverer {
    root: PathBuf,
    default_names: Vec<String>,
    ignored_extensions: HashSet<String>,
}

impl FileDiscoverer {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            default_names: DEFAULT_IGNORE_NAMES.iter().map(ToString::to_string).collect(),
            ignored_extensions: HashSet::new(),
        }
    }

    /// Extensions (with leading dot, case-sensitive) to exclude. An empty
    /// set disables extension filtering.
    pub fn ignored_extensions(mut self, extensions: HashSet<String>) -> Self {
        self.ignored_extensions = extensions;
        self
    }

    /// Replace the built-in always-ignored names.
    pub fn default_names(mut self, names: &[&str]) -> Self {
        self.default_names = names.iter().map(ToString::to_string).collect();
        self
    }

    /// Walk the tree once. Ignored directories are pruned before descent, so
    /// nothing inside them is ever visited. Unreadable entries are skipped
    /// with a warning rather than failing the scan.
    pub fn discover(&self) -> Vec<TargetFile> {
        let rules = IgnoreRuleSet::build(&self.root, &self.default_names);

        let walker = WalkDir::new(&self.root).into_iter().filter_entry(|entry| {
            if entry.depth() == 0 {
                return true;
            }
            let relative = relative_path_string(entry.path(), &self.root);
            let keep = !rules.is_ignored(&relative, entry.file_type().is_dir());
            if !keep {
                debug!(path = %relative, "ignored");
            }
            keep
        });

        let mut files = Vec::new();
        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) => {
                    warn!(%err, "skipping unreadable entry");
                    continue;
                }
            };
            if !entry.file_type().is_file() {
                continue;
            }
            let file = TargetFile::new(entry.into_path(), &self.root);
            if let Some(ext) = file.extension() {
                if self.ignored_extensions.contains(&ext) {
                    debug!(path = %file.relative_path, %ext, "skipped by extension filter");
                    continue;
                }
            }
            files.push(file);
        }

        files.sort();
        files
    }
}

/// Convenience wrapper used by the assembler and the library API.
pub fn find_target_files(root: &Path, ignored_extensions: &HashSet<String>) -> Vec<TargetFile> {
    FileDiscoverer::new(root).ignored_extensions(ignored_extensions.clone()).discover()
}
