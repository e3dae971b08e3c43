//! The viewer window and its host capabilities.
//!
//! Pipelines never talk to the window type directly; they go through the
//! [`ContentHost`] trait so tests can substitute a scripted host. The real
//! [`ViewerWindow`] keeps its displayed content behind a lock: two pipeline
//! invocations racing on the same window resolve as last-writer-wins, which
//! is the accepted semantics for this surface.

use std::future::Future;
use std::path::Path;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};

use thiserror::Error;

use mdv_render::{PdfError, PdfRenderOptions};

/// Text shown before any document has been opened.
const WELCOME: &str = "Welcome to Markview.\n\nUse File > Open to load a markdown file.\nUse File > Export PDF to save the current view as a PDF.";

/// Options for rendering a window's content to PDF.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PdfPrintOptions {
    /// Include background graphics in the rendered pages.
    pub print_background: bool,
}

/// Errors surfaced by the window's PDF rendering service.
#[derive(Debug, Error)]
pub enum RenderError {
    /// The renderer itself failed.
    #[error(transparent)]
    Renderer(#[from] PdfError),

    /// The rendering task was cancelled before producing output.
    #[error("rendering task was cancelled")]
    Cancelled,
}

/// Host capabilities a pipeline needs from its target window.
pub trait ContentHost: Send + Sync {
    /// Replace the displayed content with the document at `url`.
    ///
    /// Synchronous from the caller's perspective; no return value is
    /// observed. A failed load becomes a failure page inside the window.
    fn load_url(&self, url: &str);

    /// Render the current content into a PDF byte buffer.
    fn print_to_pdf(
        &self,
        options: PdfPrintOptions,
    ) -> impl Future<Output = Result<Vec<u8>, RenderError>> + Send;
}

/// Format a filesystem path as the `file://` URL the window navigates to.
pub fn file_url(path: &Path) -> String {
    format!("file://{}", path.display())
}

/// What the window is currently displaying.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WindowContent {
    /// Initial state, before any document was opened.
    Welcome,
    /// A loaded document artifact.
    Document {
        /// The `file://` URL the window was navigated to.
        root: String,
        /// Text of the artifact, read once at navigation time.
        body: String,
    },
    /// Navigation was requested but the artifact could not be read.
    LoadFailed {
        /// The `file://` URL the window was navigated to.
        root: String,
        /// Why the load failed.
        reason: String,
    },
}

impl WindowContent {
    /// The text a rendering of this content is based on.
    pub fn display_text(&self) -> String {
        match self {
            Self::Welcome => WELCOME.to_owned(),
            Self::Document { body, .. } => body.clone(),
            Self::LoadFailed { root, reason } => {
                format!("Failed to load {root}\n\n{reason}")
            }
        }
    }
}

/// The main viewer window.
pub struct ViewerWindow {
    content: Mutex<WindowContent>,
    devtools_open: AtomicBool,
}

impl ViewerWindow {
    /// Create a window showing the welcome content.
    pub fn new() -> Self {
        Self {
            content: Mutex::new(WindowContent::Welcome),
            devtools_open: AtomicBool::new(false),
        }
    }

    /// Snapshot of the current content.
    pub fn content(&self) -> WindowContent {
        self.lock_content().clone()
    }

    /// The URL of the currently loaded document, if any.
    pub fn content_root(&self) -> Option<String> {
        match &*self.lock_content() {
            WindowContent::Welcome => None,
            WindowContent::Document { root, .. } | WindowContent::LoadFailed { root, .. } => {
                Some(root.clone())
            }
        }
    }

    /// Re-read the current document from disk.
    pub fn reload(&self) {
        let Some(root) = self.content_root() else {
            return;
        };
        tracing::debug!(%root, "reloading window content");
        self.load_url(&root);
    }

    /// Toggle the developer tools pane.
    pub fn toggle_devtools(&self) {
        self.devtools_open.fetch_xor(true, Ordering::Relaxed);
    }

    /// Whether the developer tools pane is open.
    pub fn devtools_open(&self) -> bool {
        self.devtools_open.load(Ordering::Relaxed)
    }

    fn lock_content(&self) -> std::sync::MutexGuard<'_, WindowContent> {
        self.content.lock().expect("window content lock poisoned")
    }
}

impl Default for ViewerWindow {
    fn default() -> Self {
        Self::new()
    }
}

impl ContentHost for ViewerWindow {
    fn load_url(&self, url: &str) {
        let path = url.strip_prefix("file://").unwrap_or(url);
        let next = match std::fs::read_to_string(path) {
            Ok(body) => WindowContent::Document {
                root: url.to_owned(),
                body,
            },
            Err(err) => {
                tracing::warn!(%url, error = %err, "failed to read document artifact");
                WindowContent::LoadFailed {
                    root: url.to_owned(),
                    reason: err.to_string(),
                }
            }
        };
        *self.lock_content() = next;
    }

    async fn print_to_pdf(&self, options: PdfPrintOptions) -> Result<Vec<u8>, RenderError> {
        let text = self.content().display_text();
        let render_options = PdfRenderOptions {
            print_background: options.print_background,
        };

        tokio::task::spawn_blocking(move || mdv_render::render_document(&text, &render_options))
            .await
            .map_err(|_| RenderError::Cancelled)?
            .map_err(RenderError::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn starts_on_welcome_content() {
        let window = ViewerWindow::new();
        assert_eq!(window.content(), WindowContent::Welcome);
        assert_eq!(window.content_root(), None);
    }

    #[test]
    fn load_url_replaces_content() {
        let dir = tempfile::tempdir().unwrap();
        let artifact = dir.path().join("doc.html");
        fs::write(&artifact, "<h1>hi</h1>").unwrap();

        let window = ViewerWindow::new();
        let url = file_url(&artifact);
        window.load_url(&url);

        assert_eq!(window.content_root(), Some(url.clone()));
        match window.content() {
            WindowContent::Document { root, body } => {
                assert_eq!(root, url);
                assert_eq!(body, "<h1>hi</h1>");
            }
            other => panic!("unexpected content: {other:?}"),
        }
    }

    #[test]
    fn unreadable_url_becomes_failure_page() {
        let window = ViewerWindow::new();
        window.load_url("file:///definitely/not/here.html");

        assert!(matches!(
            window.content(),
            WindowContent::LoadFailed { .. }
        ));
        assert!(window.content_root().is_some());
    }

    #[test]
    fn reload_picks_up_changes_on_disk() {
        let dir = tempfile::tempdir().unwrap();
        let artifact = dir.path().join("doc.html");
        fs::write(&artifact, "before").unwrap();

        let window = ViewerWindow::new();
        window.load_url(&file_url(&artifact));

        fs::write(&artifact, "after").unwrap();
        window.reload();

        match window.content() {
            WindowContent::Document { body, .. } => assert_eq!(body, "after"),
            other => panic!("unexpected content: {other:?}"),
        }
    }

    #[test]
    fn devtools_flag_toggles() {
        let window = ViewerWindow::new();
        assert!(!window.devtools_open());
        window.toggle_devtools();
        assert!(window.devtools_open());
        window.toggle_devtools();
        assert!(!window.devtools_open());
    }

    #[tokio::test]
    async fn prints_current_content_to_pdf() {
        let window = ViewerWindow::new();
        let bytes = window
            .print_to_pdf(PdfPrintOptions {
                print_background: true,
            })
            .await
            .unwrap();
        assert!(bytes.starts_with(b"%PDF-"));
    }

    #[test]
    fn file_url_is_prefixed_path() {
        assert_eq!(
            file_url(Path::new("/tmp/notes.html")),
            "file:///tmp/notes.html"
        );
    }
}
