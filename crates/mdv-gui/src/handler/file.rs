//! File workflow result handler.
//!
//! Surfaces finished workflows to the user: successes as a status line,
//! conversion and rendering failures as the in-app error banner. Write
//! failures were already shown as a native error box by the workflow
//! itself, so they are only logged here.

use iced::Task;

use crate::error::GuiError;
use crate::handler::MessageHandler;
use crate::message::{FileMessage, Message};
use crate::service::{ExportOutcome, OpenOutcome};
use crate::state::AppState;

/// Handler for workflow completion messages.
pub struct FileHandler;

impl MessageHandler<FileMessage> for FileHandler {
    fn handle(&self, state: &mut AppState, msg: FileMessage) -> Task<Message> {
        match msg {
            FileMessage::OpenFinished(outcome) => handle_open_finished(state, outcome),
            FileMessage::ExportFinished(outcome) => handle_export_finished(state, outcome),
        }
        Task::none()
    }
}

fn handle_open_finished(state: &mut AppState, outcome: OpenOutcome) {
    match outcome {
        OpenOutcome::Loaded { url } => {
            state.error = None;
            state.status = Some(format!("Opened {url}"));
        }
        OpenOutcome::Failed { reason } => {
            state.error = Some(GuiError::open(reason));
        }
        OpenOutcome::Cancelled | OpenOutcome::NoWindow => {}
    }
}

fn handle_export_finished(state: &mut AppState, outcome: ExportOutcome) {
    match outcome {
        ExportOutcome::Saved { path, bytes } => {
            state.error = None;
            state.status = Some(format!("Saved PDF ({bytes} bytes) to {}", path.display()));
        }
        ExportOutcome::RenderFailed { reason } => {
            state.error = Some(GuiError::export(reason));
        }
        ExportOutcome::WriteFailed { path, .. } => {
            // The workflow already raised the native error box.
            tracing::warn!(path = %path.display(), "export left no file behind");
        }
        ExportOutcome::Cancelled | ExportOutcome::NoWindow => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::Settings;
    use std::path::PathBuf;

    fn state() -> AppState {
        AppState::new(Settings::default())
    }

    #[test]
    fn loaded_outcome_sets_status_and_clears_errors() {
        let mut state = state();
        state.error = Some(GuiError::open("stale"));

        let _ = FileHandler.handle(
            &mut state,
            FileMessage::OpenFinished(OpenOutcome::Loaded {
                url: "file:///tmp/notes.html".to_owned(),
            }),
        );

        assert!(state.error.is_none());
        assert_eq!(
            state.status.as_deref(),
            Some("Opened file:///tmp/notes.html")
        );
    }

    #[test]
    fn conversion_failure_raises_the_banner() {
        let mut state = state();

        let _ = FileHandler.handle(
            &mut state,
            FileMessage::OpenFinished(OpenOutcome::Failed {
                reason: "bad input".to_owned(),
            }),
        );

        assert_eq!(state.error, Some(GuiError::open("bad input")));
    }

    #[test]
    fn cancellation_changes_nothing() {
        let mut state = state();

        let _ = FileHandler.handle(&mut state, FileMessage::OpenFinished(OpenOutcome::Cancelled));
        let _ = FileHandler.handle(
            &mut state,
            FileMessage::ExportFinished(ExportOutcome::Cancelled),
        );

        assert!(state.error.is_none());
        assert!(state.status.is_none());
    }

    #[test]
    fn render_failure_raises_the_banner() {
        let mut state = state();

        let _ = FileHandler.handle(
            &mut state,
            FileMessage::ExportFinished(ExportOutcome::RenderFailed {
                reason: "no surface".to_owned(),
            }),
        );

        assert_eq!(state.error, Some(GuiError::export("no surface")));
    }

    #[test]
    fn write_failure_is_not_reported_twice() {
        let mut state = state();

        let _ = FileHandler.handle(
            &mut state,
            FileMessage::ExportFinished(ExportOutcome::WriteFailed {
                path: PathBuf::from("/readonly/out.pdf"),
                reason: "permission denied".to_owned(),
            }),
        );

        // The native error box already reported it.
        assert!(state.error.is_none());
    }
}
