//! PDF rendering of window content.
//!
//! The viewer window hands over its current text content as one string; we
//! compile it through Typst into a paginated A4 document and return the PDF
//! bytes. Fonts come embedded with the compiler kit, so rendering works on a
//! machine with no fonts installed.

use thiserror::Error;
use typst_as_lib::TypstEngine;
use typst_as_lib::typst_kit_options::TypstKitFontOptions;
use typst_pdf::PdfOptions;

/// Page background used when background graphics are requested.
const PAGE_FILL: &str = "#f6f8fa";

/// Options recognized by the PDF renderer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PdfRenderOptions {
    /// Include background graphics in the output.
    pub print_background: bool,
}

/// Errors produced while rendering a document to PDF.
#[derive(Debug, Error)]
pub enum PdfError {
    /// Typst failed to compile the generated markup.
    #[error("document compilation failed: {0}")]
    Compile(String),

    /// The compiled document could not be encoded as PDF.
    #[error("PDF encoding failed: {0}")]
    Encode(String),
}

/// Render text content into PDF bytes.
pub fn render_document(content: &str, options: &PdfRenderOptions) -> Result<Vec<u8>, PdfError> {
    let source = typst_source(content, options);

    let font_options = TypstKitFontOptions::new()
        .include_embedded_fonts(true)
        .include_system_fonts(false);

    let engine = TypstEngine::builder()
        .main_file(source)
        .search_fonts_with(font_options)
        .build();

    let document = engine
        .compile()
        .output
        .map_err(|diagnostics| PdfError::Compile(format!("{diagnostics:?}")))?;

    typst_pdf::pdf(&document, &PdfOptions::default())
        .map_err(|diagnostics| PdfError::Encode(format!("{diagnostics:?}")))
}

/// Build the Typst markup for a page of monospaced content.
fn typst_source(content: &str, options: &PdfRenderOptions) -> String {
    let page_setup = if options.print_background {
        format!("#set page(paper: \"a4\", margin: 2cm, fill: rgb(\"{PAGE_FILL}\"))\n")
    } else {
        "#set page(paper: \"a4\", margin: 2cm)\n".to_owned()
    };

    format!(
        "{page_setup}#set text(size: 10pt)\n#raw(\"{}\", block: true)\n",
        escape_string(content),
    )
}

/// Escape text for inclusion in a Typst string literal.
fn escape_string(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\t' => out.push_str("\\t"),
            '\r' => {}
            _ => out.push(ch),
        }
    }
    out
}
