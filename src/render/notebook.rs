//! Jupyter notebook to Markdown conversion.
//!
//! Only textual cell content survives: markdown cells are emitted as prose
//! with every header demoted two levels so they never outrank the `##`
//! per-file section header, and code cells become fenced blocks tagged with
//! the notebook's host language. Raw cells and outputs are dropped.

use serde::Deserialize;
use serde_json::Value;

use crate::domain::RenderError;
use crate::render::fenced_block;

/// Fixed demotion applied to markdown-cell headers (`#` → `###`). Uncapped:
/// deep headers simply overflow past `######`.
const HEADER_SHIFT: usize = 2;

#[derive(Debug, Deserialize)]
struct RawNotebook {
    #[serde(default)]
    cells: Vec<RawCell>,
    #[serde(default)]
    metadata: Value,
}

#[derive(Debug, Deserialize)]
struct RawCell {
    cell_type: String,
    #[serde(default)]
    source: SourceText,
}

/// nbformat stores cell source either as one string or a list of lines
/// (each keeping its trailing newline).
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum SourceText {
    Text(String),
    Lines(Vec<String>),
}

impl Default for SourceText {
    fn default() -> Self {
        SourceText::Text(String::new())
    }
}

impl SourceText {
    fn joined(self) -> String {
        match self {
            SourceText::Text(text) => text,
            SourceText::Lines(lines) => lines.concat(),
        }
    }
}

/// One cell after tag dispatch. The `cell_type` string is inspected exactly
/// once; the renderer branches on this enum.
enum Cell {
    Markdown(String),
    Code(String),
    Other,
}

impl From<RawCell> for Cell {
    fn from(raw: RawCell) -> Self {
        match raw.cell_type.as_str() {
            "markdown" => Cell::Markdown(raw.source.joined()),
            "code" => Cell::Code(raw.source.joined()),
            _ => Cell::Other,
        }
    }
}

/// Convert raw notebook JSON into a Markdown body, cells in document order.
pub fn render_notebook(bytes: &[u8]) -> Result<String, RenderError> {
    let raw: RawNotebook = serde_json::from_slice(bytes)?;
    let language = host_language(&raw.metadata);

    let mut body = String::new();
    for cell in raw.cells.into_iter().map(Cell::from) {
        match cell {
            Cell::Markdown(source) => {
                for line in source.lines() {
                    body.push_str(&shift_header(line));
                    body.push('\n');
                }
                body.push('\n');
            }
            Cell::Code(source) => {
                body.push_str(&fenced_block(&source, language.as_deref()));
                body.push('\n');
            }
            Cell::Other => {}
        }
    }

    let trimmed = body.trim_end();
    if trimmed.is_empty() {
        Ok(String::new())
    } else {
        Ok(format!("{trimmed}\n"))
    }
}

fn shift_header(line: &str) -> String {
    if line.starts_with('#') {
        format!("{}{line}", "#".repeat(HEADER_SHIFT))
    } else {
        line.to_string()
    }
}

/// Host language from `metadata.language_info.name`, falling back to
/// `metadata.kernelspec.language`.
fn host_language(metadata: &Value) -> Option<String> {
    metadata
        .pointer("/language_info/name")
        .or_else(|| metadata.pointer("/kernelspec/language"))
        .and_then(Value::as_str)
        .map(ToString::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn notebook(cells: Value, metadata: Value) -> Vec<u8> {
        json!({
            "cells": cells,
            "metadata": metadata,
            "nbformat": 4,
            "nbformat_minor": 4,
        })
        .to_string()
        .into_bytes()
    }

    #[test]
    fn markdown_headers_are_demoted_two_levels() {
        let bytes = notebook(
            json!([{
                "cell_type": "markdown",
                "metadata": {},
                "source": ["# Analysis Header\n", "\n", "Some prose.\n", "## Sub\n"],
            }]),
            json!({}),
        );
        let body = render_notebook(&bytes).expect("render");
        assert!(body.contains("### Analysis Header"));
        assert!(body.contains("#### Sub"));
        assert!(body.contains("Some prose."));
        assert!(!body.contains("\n# Analysis Header"));
    }

    #[test]
    fn deep_headers_are_not_capped() {
        let bytes = notebook(
            json!([{"cell_type": "markdown", "metadata": {}, "source": ["##### Deep\n"]}]),
            json!({}),
        );
        let body = render_notebook(&bytes).expect("render");
        assert!(body.contains("####### Deep"));
    }

    #[test]
    fn code_cells_use_host_language_fence() {
        let bytes = notebook(
            json!([{
                "cell_type": "code",
                "execution_count": null,
                "metadata": {},
                "outputs": [],
                "source": ["import pandas as pd"],
            }]),
            json!({"language_info": {"name": "python"}}),
        );
        let body = render_notebook(&bytes).expect("render");
        assert!(body.contains("```python\nimport pandas as pd\n```"));
    }

    #[test]
    fn unknown_host_language_uses_bare_fence() {
        let bytes = notebook(
            json!([{"cell_type": "code", "metadata": {}, "outputs": [], "source": ["1 + 1"]}]),
            json!({}),
        );
        let body = render_notebook(&bytes).expect("render");
        assert!(body.starts_with("```\n1 + 1\n```"));
    }

    #[test]
    fn kernelspec_language_is_a_fallback() {
        let bytes = notebook(
            json!([{"cell_type": "code", "metadata": {}, "outputs": [], "source": ["x <- 1"]}]),
            json!({"kernelspec": {"language": "r", "name": "ir"}}),
        );
        let body = render_notebook(&bytes).expect("render");
        assert!(body.starts_with("```r\n"));
    }

    #[test]
    fn raw_cells_are_dropped() {
        let bytes = notebook(
            json!([
                {"cell_type": "raw", "metadata": {}, "source": ["raw payload\n"]},
                {"cell_type": "markdown", "metadata": {}, "source": ["kept\n"]},
            ]),
            json!({}),
        );
        let body = render_notebook(&bytes).expect("render");
        assert!(!body.contains("raw payload"));
        assert!(body.contains("kept"));
    }

    #[test]
    fn cells_render_in_document_order() {
        let bytes = notebook(
            json!([
                {"cell_type": "markdown", "metadata": {}, "source": ["first\n"]},
                {"cell_type": "code", "metadata": {}, "outputs": [], "source": ["second()"]},
                {"cell_type": "markdown", "metadata": {}, "source": ["third\n"]},
            ]),
            json!({}),
        );
        let body = render_notebook(&bytes).expect("render");
        let first = body.find("first").expect("first");
        let second = body.find("second()").expect("second");
        let third = body.find("third").expect("third");
        assert!(first < second && second < third);
    }

    #[test]
    fn string_source_is_accepted() {
        let bytes = notebook(
            json!([{"cell_type": "markdown", "metadata": {}, "source": "# One\nTwo\n"}]),
            json!({}),
        );
        let body = render_notebook(&bytes).expect("render");
        assert!(body.contains("### One"));
        assert!(body.contains("Two"));
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let err = render_notebook(b"{not json").expect_err("must fail");
        assert!(matches!(err, RenderError::NotebookParse(_)));
    }

    #[test]
    fn empty_notebook_renders_empty_body() {
        let bytes = notebook(json!([]), json!({}));
        assert_eq!(render_notebook(&bytes).expect("render"), "");
    }
}
