//! File discovery and ignore filtering

pub mod discover;
pub mod rules;

pub use discover::{find_target_files, FileDiscoverer};
pub use rules::{IgnoreRuleSet, DEFAULT_IGNORE_NAMES};
