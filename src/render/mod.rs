//! Per-file Markdown rendering
//!
//! Plain text files become fenced code blocks tagged by extension; notebooks
//! are converted cell-by-cell (see [`notebook`]).

pub mod notebook;

use std::collections::HashMap;
use std::fs;

use once_cell::sync::Lazy;

use crate::domain::{RenderError, TargetFile};

/// Fence language tags by extension. Unmapped extensions get a bare fence.
static FENCE_LANGUAGES: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        (".py", "python"),
        (".rs", "rust"),
        (".js", "javascript"),
        (".jsx", "jsx"),
        (".ts", "typescript"),
        (".tsx", "tsx"),
        (".java", "java"),
        (".kt", "kotlin"),
        (".c", "c"),
        (".h", "c"),
        (".cpp", "cpp"),
        (".hpp", "cpp"),
        (".cs", "csharp"),
        (".go", "go"),
        (".rb", "ruby"),
        (".php", "php"),
        (".swift", "swift"),
        (".sh", "bash"),
        (".md", "markdown"),
        (".html", "html"),
        (".css", "css"),
        (".scss", "scss"),
        (".json", "json"),
        (".yaml", "yaml"),
        (".yml", "yaml"),
        (".toml", "toml"),
        (".sql", "sql"),
        (".xml", "xml"),
    ])
});

/// Render one file's content as a Markdown section body.
///
/// Notebooks are parsed and converted; everything else is embedded verbatim
/// in a fenced code block. The returned body always ends with a newline.
pub fn render(file: &TargetFile) -> Result<String, RenderError> {
    let bytes = fs::read(&file.path)?;
    if file.is_notebook() {
        return notebook::render_notebook(&bytes);
    }
    let text = String::from_utf8(bytes)?;
    Ok(fenced_block(&text, fence_language(file.extension().as_deref())))
}

pub(crate) fn fence_language(extension: Option<&str>) -> Option<&'static str> {
    extension.and_then(|ext| FENCE_LANGUAGES.get(ext).copied())
}

/// Wrap `content` in a fenced code block, ensuring the closing fence sits on
/// its own line even when the content lacks a trailing newline.
pub(crate) fn fenced_block(content: &str, language: Option<&str>) -> String {
    let mut block = String::with_capacity(content.len() + 16);
    block.push_str("```");
    if let Some(lang) = language {
        block.push_str(lang);
    }
    block.push('\n');
    block.push_str(content);
    if !content.ends_with('\n') {
        block.push('\n');
    }
    block.push_str("```\n");
    block
}
