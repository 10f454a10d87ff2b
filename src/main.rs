//! code2md: Collect a directory's code files into a single Markdown document
//!
//! Walks a directory tree, filters files through gitignore-style rules and
//! extension ignores, and concatenates what remains into one Markdown file.

use anyhow::Result;

fn main() -> Result<()> {
    code2md::cli::run()
}
