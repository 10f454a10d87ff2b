//! Command-line interface for code2md

use std::collections::HashSet;
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing::Level;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::assemble::generate_markdown;

/// Collect a directory's code files into a single Markdown document
#[derive(Debug, Parser)]
#[command(name = "code2md")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Directory to scan for code files
    root_path: PathBuf,

    /// Destination Markdown file (e.g. output/summary.md)
    output_path: PathBuf,

    /// File extensions to ignore, space-separated (e.g. -i .log .tmp)
    #[arg(short, long, num_args = 1.., value_name = "EXT")]
    ignore: Vec<String>,

    /// Enable verbose logging (sets log level to DEBUG)
    #[arg(short, long)]
    verbose: bool,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    // Wire verbose flag to the tracing log level.
    // RUST_LOG in the environment always takes precedence; --verbose falls back to DEBUG.
    let filter = if cli.verbose {
        EnvFilter::from_default_env().add_directive(Level::DEBUG.into())
    } else {
        EnvFilter::from_default_env().add_directive(Level::WARN.into())
    };
    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .try_init();

    let ignored_extensions: HashSet<String> = cli.ignore.iter().cloned().collect();
    let written = generate_markdown(&cli.root_path, &cli.output_path, &ignored_extensions)?;
    println!("Markdown written to {}", written.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::Cli;
    use clap::Parser;

    #[test]
    fn ignore_option_collects_multiple_extensions() {
        let cli = Cli::parse_from(["code2md", "repo", "out.md", "--ignore", ".py", ".md"]);
        assert_eq!(cli.ignore, vec![".py", ".md"]);
    }

    #[test]
    fn ignore_defaults_to_empty() {
        let cli = Cli::parse_from(["code2md", "repo", "out.md"]);
        assert!(cli.ignore.is_empty());
    }

    #[test]
    fn missing_positionals_are_a_usage_error() {
        let err = Cli::try_parse_from(["code2md"]).expect_err("must fail");
        assert_eq!(err.kind(), clap::error::ErrorKind::MissingRequiredArgument);
    }
}
