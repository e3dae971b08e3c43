//! Message hierarchy for the Elm-style architecture.
//!
//! All user interactions and background task results flow through these
//! types. The `update` function dispatches them to the handlers.

use iced::keyboard;

use crate::service::export::ExportOutcome;
use crate::service::open::OpenOutcome;

/// Root message enum for the application.
#[derive(Debug, Clone)]
pub enum Message {
    /// A menu command was invoked (native menu, in-app bar or accelerator).
    Menu(MenuMessage),

    /// A file workflow finished.
    File(FileMessage),

    /// A key press observed by the global keyboard subscription.
    KeyPressed(keyboard::Key, keyboard::Modifiers),

    /// One-time native menu installation after the event loop has started.
    InitNativeMenu,

    /// Dismiss the in-app error banner.
    DismissError,

    /// No-op placeholder for events we ignore.
    Noop,
}

/// Actionable menu entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuMessage {
    /// File > Open: pick a markdown file, convert it, navigate the window.
    OpenFile,
    /// File > Export PDF: render the window content and write it to disk.
    ExportPdf,
    /// View > Reload the current document.
    Reload,
    /// View > Toggle full screen.
    ToggleFullScreen,
    /// View > Toggle the developer tools pane.
    ToggleDevTools,
    /// Window > Minimize.
    Minimize,
    /// Window > Close.
    CloseWindow,
    /// Quit the application.
    Quit,
    /// Help > Learn More: open the project page externally.
    LearnMore,

    /// Toggle an in-app menu dropdown (desktop platforms only).
    #[cfg(not(target_os = "macos"))]
    ToggleDropdown(usize),
}

/// Results of the asynchronous file workflows.
#[derive(Debug, Clone)]
pub enum FileMessage {
    /// The open workflow finished.
    OpenFinished(OpenOutcome),
    /// The export workflow finished.
    ExportFinished(ExportOutcome),
}
