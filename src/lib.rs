//! code2md: Collect a directory's code files into a single Markdown document
//!
//! This library provides the file-discovery, ignore-filtering, and Markdown
//! rendering machinery behind the `code2md` binary.

pub mod assemble;
pub mod cli;
pub mod domain;
pub mod render;
pub mod scan;
