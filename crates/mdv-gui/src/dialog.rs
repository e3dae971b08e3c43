//! Native file and message dialogs.
//!
//! The [`DialogGateway`] trait is the seam the pipelines use; the production
//! implementation wraps `rfd`'s async dialogs. Cancelling a picker yields
//! `None`, which downstream code treats as a normal terminal state rather
//! than an error.

use std::future::Future;
use std::path::PathBuf;

/// Abstraction over the native open/save pickers and the error box.
pub trait DialogGateway: Send + Sync {
    /// Ask the user for a markdown file to open.
    fn pick_open_path(&self) -> impl Future<Output = Option<PathBuf>> + Send;

    /// Ask the user for a PDF destination path.
    fn pick_save_path(&self) -> impl Future<Output = Option<PathBuf>> + Send;

    /// Show a blocking, dismissible error box.
    fn show_error(&self, title: &str, message: &str) -> impl Future<Output = ()> + Send;
}

/// Dialog gateway backed by the platform's native dialogs.
#[derive(Debug, Clone, Copy, Default)]
pub struct NativeDialogs;

impl DialogGateway for NativeDialogs {
    async fn pick_open_path(&self) -> Option<PathBuf> {
        rfd::AsyncFileDialog::new()
            .set_title("Open Markdown File")
            .add_filter("Markdown", &["md", "markdown"])
            .add_filter("All Files", &["*"])
            .pick_file()
            .await
            .map(|handle| handle.path().to_path_buf())
    }

    async fn pick_save_path(&self) -> Option<PathBuf> {
        rfd::AsyncFileDialog::new()
            .set_title("Export PDF")
            .add_filter("PDF", &["pdf"])
            .add_filter("All Files", &["*"])
            .save_file()
            .await
            .map(|handle| handle.path().to_path_buf())
    }

    async fn show_error(&self, title: &str, message: &str) {
        let _ = rfd::AsyncMessageDialog::new()
            .set_level(rfd::MessageLevel::Error)
            .set_title(title)
            .set_description(message)
            .set_buttons(rfd::MessageButtons::Ok)
            .show()
            .await;
    }
}
