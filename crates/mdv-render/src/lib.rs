//! Rendering backends for the Markview desktop viewer.
//!
//! Two independent concerns live here:
//!
//! - [`html`] turns a markdown source file into an HTML artifact on disk.
//!   The viewer window navigates to the artifact after conversion.
//! - [`pdf`] compiles a window's current text content into a PDF byte
//!   buffer via Typst, using the fonts embedded in the compiler kit so no
//!   font assets are required at runtime.

pub mod html;
pub mod pdf;

pub use html::{HtmlError, convert_file, render_html};
pub use pdf::{PdfError, PdfRenderOptions, render_document};
