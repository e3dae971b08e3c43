//! Services for the asynchronous file workflows.
//!
//! These are async functions for use with Iced's `Task::perform` pattern.
//! Each workflow is generic over its collaborators ([`DialogGateway`],
//! [`DocumentConverter`], [`ContentHost`]) so tests can drive it with
//! scripted doubles.

pub mod export;
pub mod open;

pub use export::{ExportOutcome, export_pdf};
pub use open::{OpenOutcome, open_document};

use std::future::Future;
use std::path::{Path, PathBuf};

use thiserror::Error;

use mdv_render::HtmlError;

/// Errors produced while converting a document for display.
#[derive(Debug, Error)]
pub enum ConvertError {
    /// The converter itself failed.
    #[error(transparent)]
    Converter(#[from] HtmlError),

    /// The conversion task was cancelled before producing output.
    #[error("conversion task was cancelled")]
    Cancelled,
}

/// The markdown-to-HTML conversion collaborator.
pub trait DocumentConverter: Send + Sync {
    /// Convert the file at `input` to an HTML artifact on disk and return
    /// the artifact path.
    fn to_html_file(
        &self,
        input: &Path,
    ) -> impl Future<Output = Result<PathBuf, ConvertError>> + Send;
}

/// Production converter delegating to the rendering crate.
///
/// Conversion is synchronous CPU and disk work, so it runs on the blocking
/// thread pool.
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlConverter;

impl DocumentConverter for HtmlConverter {
    async fn to_html_file(&self, input: &Path) -> Result<PathBuf, ConvertError> {
        let input = input.to_path_buf();
        tokio::task::spawn_blocking(move || mdv_render::convert_file(&input))
            .await
            .map_err(|_| ConvertError::Cancelled)?
            .map_err(ConvertError::from)
    }
}
