//! The export workflow: pick a destination, render the window, write a PDF.
//!
//! Rendering must complete before the write is attempted; a rendering
//! failure aborts the workflow before any byte reaches disk. A write
//! failure is reported to the user through the blocking error box and is
//! not retried.

use std::path::PathBuf;
use std::sync::Arc;

use crate::dialog::DialogGateway;
use crate::window::{ContentHost, PdfPrintOptions};

/// Terminal states of one export invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportOutcome {
    /// No window was focused; the workflow did not run.
    NoWindow,
    /// The user cancelled the save picker.
    Cancelled,
    /// The rendered buffer was written to the destination.
    Saved {
        /// Destination path.
        path: PathBuf,
        /// Size of the written buffer.
        bytes: usize,
    },
    /// The window could not produce a PDF buffer; nothing was written.
    RenderFailed {
        /// Description of what went wrong.
        reason: String,
    },
    /// The write failed; the user has already seen the error box.
    WriteFailed {
        /// Destination path.
        path: PathBuf,
        /// Description of what went wrong.
        reason: String,
    },
}

/// Run the export workflow against the given collaborators.
pub async fn export_pdf<D, W>(
    dialogs: D,
    window: Option<Arc<W>>,
    options: PdfPrintOptions,
) -> ExportOutcome
where
    D: DialogGateway,
    W: ContentHost,
{
    let Some(window) = window else {
        tracing::debug!("export requested without a focused window");
        return ExportOutcome::NoWindow;
    };

    let Some(dest) = dialogs.pick_save_path().await else {
        tracing::debug!("export cancelled at the save picker");
        return ExportOutcome::Cancelled;
    };

    let data = match window.print_to_pdf(options).await {
        Ok(data) => data,
        Err(err) => {
            tracing::error!(error = %err, "PDF rendering failed");
            return ExportOutcome::RenderFailed {
                reason: err.to_string(),
            };
        }
    };

    match tokio::fs::write(&dest, &data).await {
        Ok(()) => {
            tracing::info!(path = %dest.display(), bytes = data.len(), "PDF saved");
            ExportOutcome::Saved {
                path: dest,
                bytes: data.len(),
            }
        }
        Err(err) => {
            tracing::error!(path = %dest.display(), error = %err, "PDF write failed");
            dialogs.show_error("Save Error", &err.to_string()).await;
            ExportOutcome::WriteFailed {
                path: dest,
                reason: err.to_string(),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::service::doubles::{ScriptedDialogs, ScriptedHost};
    use std::fs;

    fn options() -> PdfPrintOptions {
        PdfPrintOptions {
            print_background: true,
        }
    }

    #[tokio::test]
    async fn no_focused_window_is_a_noop() {
        let dialogs = ScriptedDialogs::default();
        let outcome = export_pdf(&dialogs, None::<Arc<ScriptedHost>>, options()).await;
        assert_eq!(outcome, ExportOutcome::NoWindow);
    }

    #[tokio::test]
    async fn cancelling_the_picker_renders_nothing() {
        let dialogs = ScriptedDialogs::default();
        let host = Arc::new(ScriptedHost::rendering(b"%PDF-".to_vec()));

        let outcome = export_pdf(&dialogs, Some(Arc::clone(&host)), options()).await;

        assert_eq!(outcome, ExportOutcome::Cancelled);
        assert_eq!(host.render_count(), 0);
    }

    #[tokio::test]
    async fn writes_the_rendered_buffer_byte_for_byte() {
        let dir = tempfile::tempdir().unwrap();
        let dest = dir.path().join("out.pdf");
        let buffer = b"%PDF-1.7 fake body".to_vec();

        let dialogs = ScriptedDialogs {
            save_path: Some(dest.clone()),
            ..ScriptedDialogs::default()
        };
        let host = Arc::new(ScriptedHost::rendering(buffer.clone()));

        let outcome = export_pdf(&dialogs, Some(Arc::clone(&host)), options()).await;

        assert_eq!(
            outcome,
            ExportOutcome::Saved {
                path: dest.clone(),
                bytes: buffer.len()
            }
        );
        assert_eq!(fs::read(&dest).unwrap(), buffer);
        assert!(dialogs.reported_errors().is_empty());
    }

    #[tokio::test]
    async fn overwrites_an_existing_destination_entirely() {
        let dir = tempfile::tempdir().unwrap();
        let dest = dir.path().join("out.pdf");
        fs::write(&dest, "a much longer pre-existing file body to be replaced").unwrap();

        let buffer = b"short".to_vec();
        let dialogs = ScriptedDialogs {
            save_path: Some(dest.clone()),
            ..ScriptedDialogs::default()
        };
        let host = Arc::new(ScriptedHost::rendering(buffer.clone()));

        export_pdf(&dialogs, Some(Arc::clone(&host)), options()).await;

        assert_eq!(fs::read(&dest).unwrap(), buffer);
    }

    #[tokio::test]
    async fn render_failure_aborts_before_any_write() {
        let dir = tempfile::tempdir().unwrap();
        let dest = dir.path().join("out.pdf");

        let dialogs = ScriptedDialogs {
            save_path: Some(dest.clone()),
            ..ScriptedDialogs::default()
        };
        let host = Arc::new(ScriptedHost::render_failing("no renderable surface"));

        let outcome = export_pdf(&dialogs, Some(Arc::clone(&host)), options()).await;

        match outcome {
            ExportOutcome::RenderFailed { reason } => {
                assert!(reason.contains("no renderable surface"));
            }
            other => panic!("unexpected outcome: {other:?}"),
        }
        assert!(!dest.exists());
        // Rendering failures are propagated to the caller, not dialogued.
        assert!(dialogs.reported_errors().is_empty());
    }

    #[tokio::test]
    async fn write_failure_shows_the_error_box() {
        let dir = tempfile::tempdir().unwrap();
        // Parent directory does not exist, so the write must fail.
        let dest = dir.path().join("missing").join("out.pdf");

        let dialogs = ScriptedDialogs {
            save_path: Some(dest.clone()),
            ..ScriptedDialogs::default()
        };
        let host = Arc::new(ScriptedHost::rendering(b"%PDF-".to_vec()));

        let outcome = export_pdf(&dialogs, Some(Arc::clone(&host)), options()).await;

        let reported = dialogs.reported_errors();
        assert_eq!(reported.len(), 1);
        assert_eq!(reported[0].0, "Save Error");

        match outcome {
            ExportOutcome::WriteFailed { path, reason } => {
                assert_eq!(path, dest);
                assert_eq!(reason, reported[0].1);
            }
            other => panic!("unexpected outcome: {other:?}"),
        }
        assert!(!dest.exists());
    }

    #[tokio::test]
    async fn passes_the_background_option_through() {
        let dir = tempfile::tempdir().unwrap();
        let dialogs = ScriptedDialogs {
            save_path: Some(dir.path().join("out.pdf")),
            ..ScriptedDialogs::default()
        };
        let host = Arc::new(ScriptedHost::rendering(b"%PDF-".to_vec()));

        export_pdf(
            &dialogs,
            Some(Arc::clone(&host)),
            PdfPrintOptions {
                print_background: false,
            },
        )
        .await;

        let seen = host.last_options.lock().unwrap().unwrap();
        assert!(!seen.print_background);
    }
}
