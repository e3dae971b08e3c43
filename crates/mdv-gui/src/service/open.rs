//! The open workflow: pick a markdown file, convert it, navigate the window.
//!
//! Steps run strictly in sequence within one invocation; nothing serializes
//! two concurrent invocations against each other. A conversion failure is a
//! reported outcome the caller surfaces to the user - it never aborts the
//! process.

use std::sync::Arc;

use crate::dialog::DialogGateway;
use crate::window::{ContentHost, file_url};

use super::DocumentConverter;

/// Terminal states of one open invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OpenOutcome {
    /// No window was focused; the workflow did not run.
    NoWindow,
    /// The user cancelled the file picker.
    Cancelled,
    /// The window now displays the converted artifact.
    Loaded {
        /// URL the window was navigated to.
        url: String,
    },
    /// Conversion failed; nothing was loaded.
    Failed {
        /// Description of what went wrong.
        reason: String,
    },
}

/// Run the open workflow against the given collaborators.
pub async fn open_document<D, C, W>(
    dialogs: D,
    converter: C,
    window: Option<Arc<W>>,
) -> OpenOutcome
where
    D: DialogGateway,
    C: DocumentConverter,
    W: ContentHost,
{
    let Some(window) = window else {
        tracing::debug!("open requested without a focused window");
        return OpenOutcome::NoWindow;
    };

    let Some(input) = dialogs.pick_open_path().await else {
        tracing::debug!("open cancelled at the file picker");
        return OpenOutcome::Cancelled;
    };

    match converter.to_html_file(&input).await {
        Ok(artifact) => {
            let url = file_url(&artifact);
            window.load_url(&url);
            tracing::info!(
                source = %input.display(),
                %url,
                "document opened"
            );
            OpenOutcome::Loaded { url }
        }
        Err(err) => {
            tracing::error!(
                source = %input.display(),
                error = %err,
                "markdown conversion failed"
            );
            OpenOutcome::Failed {
                reason: err.to_string(),
            }
        }
    }
}
