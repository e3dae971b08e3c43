//! Main application wiring.
//!
//! Implements the Iced 0.14.0 application using the builder pattern. The
//! architecture follows the Elm pattern: State, Message, Update, View. All
//! state changes happen in `update()`; views are pure functions.

use iced::{Element, Subscription, Task, keyboard};

use crate::handler::{FileHandler, MenuActionHandler, MessageHandler};
use crate::menu;
use crate::message::Message;
use crate::settings::Settings;
use crate::state::AppState;
use crate::view;

/// Main application struct.
pub struct App {
    /// All application state.
    pub state: AppState,
}

impl App {
    /// Create a new application instance.
    ///
    /// Called once at startup. The menu template is built here, before the
    /// main window is shown; native installation happens via a startup task
    /// once the event loop is running.
    pub fn new() -> (Self, Task<Message>) {
        let settings = Settings::load();
        let app = Self {
            state: AppState::new(settings),
        };

        let init_menu = Task::perform(async {}, |_| Message::InitNativeMenu);
        (app, init_menu)
    }

    /// Window title, reflecting the loaded document.
    pub fn title(&self) -> String {
        let document = self
            .state
            .window
            .as_ref()
            .and_then(|window| window.content_root())
            .and_then(|root| root.rsplit('/').next().map(str::to_owned));

        match document {
            Some(name) if !name.is_empty() => format!("{name} - Markview"),
            _ => "Markview".to_owned(),
        }
    }

    /// Update application state in response to a message.
    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Menu(msg) => MenuActionHandler.handle(&mut self.state, msg),

            Message::File(msg) => FileHandler.handle(&mut self.state, msg),

            Message::KeyPressed(key, modifiers) => self.handle_key_press(&key, modifiers),

            Message::InitNativeMenu => {
                // Native menu installation must happen after the event loop
                // has started, hence the startup task instead of `new()`.
                #[cfg(target_os = "macos")]
                {
                    self.state.native_menu = Some(menu::native::install(&self.state.menu));
                    tracing::info!("installed native menu bar");
                }
                Task::none()
            }

            Message::DismissError => {
                self.state.error = None;
                Task::none()
            }

            Message::Noop => Task::none(),
        }
    }

    /// Render the main window.
    pub fn view(&self) -> Element<'_, Message> {
        view::view(&self.state)
    }

    /// All application subscriptions.
    pub fn subscription(&self) -> Subscription<Message> {
        Subscription::batch([keyboard_subscription(), menu_subscription()])
    }

    /// Resolve a key press against the menu's accelerators.
    fn handle_key_press(
        &mut self,
        key: &keyboard::Key,
        modifiers: keyboard::Modifiers,
    ) -> Task<Message> {
        match menu::shortcut_message(&self.state.menu, key, modifiers) {
            Some(msg) => MenuActionHandler.handle(&mut self.state, msg),
            None => Task::none(),
        }
    }
}

/// Keyboard event subscription for menu accelerators.
fn keyboard_subscription() -> Subscription<Message> {
    keyboard::listen().map(|event| match event {
        keyboard::Event::KeyPressed { key, modifiers, .. } => Message::KeyPressed(key, modifiers),
        _ => Message::Noop,
    })
}

/// Native menu event subscription (macOS only).
///
/// Polls muda's event channel; on other platforms the in-app menu bar sends
/// messages directly and no subscription is needed.
fn menu_subscription() -> Subscription<Message> {
    #[cfg(target_os = "macos")]
    {
        menu::native::menu_subscription().map(|event| match event {
            Some(msg) => Message::Menu(msg),
            None => Message::Noop,
        })
    }

    #[cfg(not(target_os = "macos"))]
    {
        Subscription::none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn title_tracks_the_loaded_document() {
        let (mut app, _) = App::new();
        assert_eq!(app.title(), "Markview");

        // Navigating to a missing artifact still sets the content root.
        if let Some(window) = app.state.target_window() {
            use crate::window::ContentHost;
            window.load_url("file:///tmp/notes.html");
        }
        assert_eq!(app.title(), "notes.html - Markview");

        app.state.window = None;
        assert_eq!(app.title(), "Markview");
    }

    #[test]
    fn dismissing_clears_the_error_banner() {
        let (mut app, _) = App::new();
        app.state.error = Some(crate::error::GuiError::open("boom"));

        let _ = app.update(Message::DismissError);

        assert!(app.state.error.is_none());
    }
}
