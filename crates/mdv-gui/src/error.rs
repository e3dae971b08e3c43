//! GUI-facing error type.
//!
//! Failures from the file workflows end up here when they are reported
//! through the in-app error banner instead of a native dialog.

use thiserror::Error;

/// Errors shown in the application's error banner.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GuiError {
    /// Opening a markdown document failed.
    #[error("Failed to open document: {reason}")]
    Open {
        /// Description of what went wrong.
        reason: String,
    },

    /// Exporting the window content to PDF failed.
    #[error("Failed to export PDF: {reason}")]
    Export {
        /// Description of what went wrong.
        reason: String,
    },
}

impl GuiError {
    /// Create an open error from any error source.
    pub fn open(err: impl std::fmt::Display) -> Self {
        Self::Open {
            reason: err.to_string(),
        }
    }

    /// Create an export error from any error source.
    pub fn export(err: impl std::fmt::Display) -> Self {
        Self::Export {
            reason: err.to_string(),
        }
    }

    /// A user-facing hint for resolving the error.
    pub fn suggestion(&self) -> &'static str {
        match self {
            Self::Open { .. } => "Check that the file exists and is readable, then try again.",
            Self::Export { .. } => "Check the destination and try the export again.",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn factory_methods_capture_reason() {
        let err = GuiError::open("no such file");
        assert_eq!(
            err.to_string(),
            "Failed to open document: no such file"
        );

        let err = GuiError::export("renderer crashed");
        assert_eq!(err.to_string(), "Failed to export PDF: renderer crashed");
    }
}
