//! Gitignore-subset pattern matching and the default ignore set.
//!
//! Supports the practical subset of gitignore syntax this tool needs:
//! a trailing `/` restricts a rule to directories, a leading `/` anchors it
//! at the scan root, and `*` matches within a single path segment. Negation
//! and `**` globs are not supported.

use globset::{GlobBuilder, GlobMatcher};
use std::fs;
use std::io::ErrorKind;
use std::path::Path;
use tracing::{debug, warn};

/// Names excluded from every scan regardless of `.gitignore` contents:
/// VCS metadata, dependency caches, build output, and `.gitignore` itself.
pub const DEFAULT_IGNORE_NAMES: &[&str] = &[
    ".git",
    ".gitignore",
    ".hg",
    ".svn",
    "node_modules",
    "__pycache__",
    ".venv",
    "venv",
    ".mypy_cache",
    ".pytest_cache",
    ".ipynb_checkpoints",
    ".idea",
    ".vscode",
    "target",
    "dist",
    "build",
];

/// One parsed `.gitignore` line.
#[derive(Debug)]
struct IgnoreRule {
    matcher: GlobMatcher,
    anchored: bool,
    dir_only: bool,
}

impl IgnoreRule {
    fn parse(line: &str) -> Option<Self> {
        let mut pattern = line.trim();
        if pattern.is_empty() || pattern.starts_with('#') {
            return None;
        }
        let dir_only = pattern.ends_with('/');
        pattern = pattern.trim_end_matches('/');
        let anchored = pattern.starts_with('/');
        pattern = pattern.trim_start_matches('/');
        if pattern.is_empty() {
            return None;
        }
        // literal_separator keeps `*` inside one path segment.
        match GlobBuilder::new(pattern).literal_separator(true).build() {
            Ok(glob) => Some(Self { matcher: glob.compile_matcher(), anchored, dir_only }),
            Err(err) => {
                warn!(pattern, %err, "skipping unparseable ignore pattern");
                None
            }
        }
    }

    /// Match one ancestor prefix of a scanned path. `prefix` is the
    /// forward-slash path from the scan root, `name` its last segment.
    fn matches(&self, prefix: &str, name: &str, is_dir: bool) -> bool {
        if self.dir_only && !is_dir {
            return false;
        }
        if self.anchored {
            self.matcher.is_match(prefix)
        } else {
            self.matcher.is_match(name) || self.matcher.is_match(prefix)
        }
    }
}

/// The ignore rules active for one scan: `.gitignore` patterns plus a fixed
/// list of always-excluded names. Matchers are compiled once at build time.
#[derive(Debug)]
pub struct IgnoreRuleSet {
    rules: Vec<IgnoreRule>,
    default_names: Vec<String>,
}

impl IgnoreRuleSet {
    /// Load `root/.gitignore` if present. Absence and unreadability both
    /// yield an empty pattern list rather than an error.
    pub fn build(root: &Path, default_names: &[String]) -> Self {
        let gitignore = root.join(".gitignore");
        let rules = match fs::read_to_string(&gitignore) {
            Ok(text) => text.lines().filter_map(IgnoreRule::parse).collect(),
            Err(err) if err.kind() == ErrorKind::NotFound => Vec::new(),
            Err(err) => {
                warn!(path = %gitignore.display(), %err, "could not read .gitignore; scanning without patterns");
                Vec::new()
            }
        };
        debug!(patterns = rules.len(), "loaded ignore rules");
        Self { rules, default_names: default_names.to_vec() }
    }

    /// Whether `relative_path` (forward-slash separated) is excluded. A path
    /// is ignored when any segment name is in the default set, or when any
    /// rule matches the path itself or one of its ancestor prefixes.
    pub fn is_ignored(&self, relative_path: &str, is_dir: bool) -> bool {
        if relative_path.is_empty() {
            return false;
        }
        let segments: Vec<&str> = relative_path.split('/').collect();
        if segments.iter().any(|s| self.default_names.iter().any(|n| n == s)) {
            return true;
        }

        let mut prefix = String::with_capacity(relative_path.len());
        for (i, segment) in segments.iter().enumerate() {
            if !prefix.is_empty() {
                prefix.push('/');
            }
            prefix.push_str(segment);
            let prefix_is_dir = i + 1 < segments.len() || is_dir;
            if self.rules.iter().any(|r| r.matches(&prefix, segment, prefix_is_dir)) {
                return true;
            }
        }
        false
    }
}
