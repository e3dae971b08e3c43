//! Markdown to HTML conversion.
//!
//! `convert_file` is the entry point used by the open workflow: it reads a
//! markdown source file, renders a complete HTML5 document and writes it as
//! an artifact named after the source stem. The artifact stays on disk after
//! the window has navigated to it; a later conversion of a file with the
//! same stem overwrites it.

use std::fs;
use std::path::{Path, PathBuf};

use pulldown_cmark::{Options, Parser, html};
use thiserror::Error;

/// Stylesheet embedded into every generated artifact.
const STYLE: &str = "\
body { max-width: 48em; margin: 2em auto; padding: 0 1em; \
font-family: -apple-system, 'Segoe UI', 'Helvetica Neue', sans-serif; \
line-height: 1.6; color: #1f2328; }
pre { background: #f6f8fa; padding: 1em; overflow-x: auto; border-radius: 6px; }
code { font-family: ui-monospace, 'SF Mono', Consolas, monospace; font-size: 0.9em; }
table { border-collapse: collapse; }
th, td { border: 1px solid #d1d9e0; padding: 0.3em 0.8em; }
blockquote { border-left: 4px solid #d1d9e0; margin-left: 0; padding-left: 1em; color: #59636e; }
";

/// Errors produced while converting a markdown file to an HTML artifact.
#[derive(Debug, Error)]
pub enum HtmlError {
    /// The markdown source could not be read.
    #[error("failed to read {path}: {source}")]
    Read {
        /// Path of the source file.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// The HTML artifact could not be written.
    #[error("failed to write {path}: {source}")]
    Write {
        /// Path of the artifact file.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },
}

/// Render markdown text into a standalone HTML document.
///
/// Tables, strikethrough and task lists are enabled on top of CommonMark.
pub fn render_html(title: &str, markdown: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TASKLISTS);

    let parser = Parser::new_ext(markdown, options);
    let mut body = String::with_capacity(markdown.len() * 3 / 2);
    html::push_html(&mut body, parser);

    format!(
        "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n\
         <title>{}</title>\n<style>\n{STYLE}</style>\n</head>\n<body>\n\
         {body}</body>\n</html>\n",
        escape_text(title),
    )
}

/// Convert a markdown file into an HTML artifact in the OS temp directory.
///
/// Returns the artifact path on success. An existing artifact for the same
/// source stem is overwritten.
pub fn convert_file(input: &Path) -> Result<PathBuf, HtmlError> {
    convert_file_into(input, &std::env::temp_dir())
}

/// Convert a markdown file into an HTML artifact in `out_dir`.
pub fn convert_file_into(input: &Path, out_dir: &Path) -> Result<PathBuf, HtmlError> {
    let markdown = fs::read_to_string(input).map_err(|source| HtmlError::Read {
        path: input.to_path_buf(),
        source,
    })?;

    let title = input
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| "document".to_owned());

    let document = render_html(&title, &markdown);
    let output = out_dir.join(format!("{title}.html"));

    fs::write(&output, document).map_err(|source| HtmlError::Write {
        path: output.clone(),
        source,
    })?;

    tracing::debug!(
        source = %input.display(),
        artifact = %output.display(),
        "converted markdown to HTML"
    );
    Ok(output)
}

/// Minimal escaping for text interpolated into the document head.
fn escape_text(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_headings_and_paragraphs() {
        let doc = render_html("notes", "# Title\n\nSome *emphasis*.");
        assert!(doc.contains("<h1>Title</h1>"));
        assert!(doc.contains("<em>emphasis</em>"));
        assert!(doc.contains("<title>notes</title>"));
    }

    #[test]
    fn renders_tables() {
        let doc = render_html("t", "| A | B |\n|---|---|\n| 1 | 2 |");
        assert!(doc.contains("<table>"));
        assert!(doc.contains("<td>1</td>"));
    }

    #[test]
    fn renders_task_lists() {
        let doc = render_html("t", "- [x] done\n- [ ] open");
        assert!(doc.contains("type=\"checkbox\""));
    }

    #[test]
    fn escapes_title_markup() {
        let doc = render_html("a<b>&c", "text");
        assert!(doc.contains("<title>a&lt;b&gt;&amp;c</title>"));
    }

    #[test]
    fn converts_file_to_artifact_named_after_stem() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("notes.md");
        fs::write(&source, "# Hello").unwrap();

        let artifact = convert_file_into(&source, dir.path()).unwrap();

        assert_eq!(artifact, dir.path().join("notes.html"));
        let contents = fs::read_to_string(&artifact).unwrap();
        assert!(contents.contains("<h1>Hello</h1>"));
    }

    #[test]
    fn overwrites_previous_artifact() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("doc.md");
        fs::write(&source, "first").unwrap();
        let artifact = convert_file_into(&source, dir.path()).unwrap();

        fs::write(&source, "second").unwrap();
        let again = convert_file_into(&source, dir.path()).unwrap();

        assert_eq!(artifact, again);
        assert!(fs::read_to_string(&again).unwrap().contains("second"));
    }

    #[test]
    fn missing_source_is_a_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("absent.md");

        let err = convert_file_into(&missing, dir.path()).unwrap_err();
        assert!(matches!(err, HtmlError::Read { .. }));
    }
}
