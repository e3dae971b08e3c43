//! Menu action message handler.
//!
//! Wires each actionable menu entry to a file workflow or a direct host
//! command (reload, full screen, developer tools, minimize, close, quit,
//! external link).

use iced::Task;
use iced::window;

use crate::dialog::NativeDialogs;
use crate::handler::MessageHandler;
use crate::message::{FileMessage, MenuMessage, Message};
use crate::service::{self, HtmlConverter};
use crate::state::AppState;
use crate::window::PdfPrintOptions;

/// Project page opened by Help > Learn More.
const PROJECT_URL: &str = "https://github.com/markview-app/markview";

/// Handler for menu action messages.
pub struct MenuActionHandler;

impl MessageHandler<MenuMessage> for MenuActionHandler {
    fn handle(&self, state: &mut AppState, msg: MenuMessage) -> Task<Message> {
        // Close the in-app menu dropdown when any action is performed
        // (desktop only).
        #[cfg(not(target_os = "macos"))]
        if !matches!(msg, MenuMessage::ToggleDropdown(_)) {
            state.menu_dropdown.close();
        }

        match msg {
            // File menu
            MenuMessage::OpenFile => {
                let window = state.target_window();
                Task::perform(
                    service::open_document(NativeDialogs, HtmlConverter, window),
                    |outcome| Message::File(FileMessage::OpenFinished(outcome)),
                )
            }

            MenuMessage::ExportPdf => {
                let window = state.target_window();
                let options = PdfPrintOptions {
                    print_background: state.settings.export.print_background,
                };
                Task::perform(
                    service::export_pdf(NativeDialogs, window, options),
                    |outcome| Message::File(FileMessage::ExportFinished(outcome)),
                )
            }

            // View menu
            MenuMessage::Reload => {
                if let Some(window) = state.target_window() {
                    window.reload();
                }
                Task::none()
            }

            MenuMessage::ToggleFullScreen => {
                if state.target_window().is_none() {
                    return Task::none();
                }
                state.fullscreen = !state.fullscreen;
                let mode = if state.fullscreen {
                    window::Mode::Fullscreen
                } else {
                    window::Mode::Windowed
                };
                window::latest().and_then(move |id| window::set_mode(id, mode))
            }

            MenuMessage::ToggleDevTools => {
                if let Some(window) = state.target_window() {
                    window.toggle_devtools();
                }
                Task::none()
            }

            // Window menu
            MenuMessage::Minimize => {
                window::latest().and_then(|id| window::minimize(id, true))
            }

            MenuMessage::CloseWindow => {
                state.window = None;
                window::latest().and_then(|id| window::close(id))
            }

            MenuMessage::Quit => iced::exit(),

            // Help menu
            MenuMessage::LearnMore => {
                let _ = open::that(PROJECT_URL);
                Task::none()
            }

            #[cfg(not(target_os = "macos"))]
            MenuMessage::ToggleDropdown(index) => {
                state.menu_dropdown.toggle(index);
                Task::none()
            }
        }
    }
}
