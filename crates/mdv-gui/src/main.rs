//! Markview - desktop markdown viewer.
//!
//! Opens markdown files, converts them to HTML artifacts and displays them;
//! the current view can be exported to PDF from the File menu.

use iced::window;
use iced::{Size, Theme};

use mdv_gui::app::App;

/// Application entry point.
pub fn main() -> iced::Result {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    tracing::info!("Starting Markview");

    // Run the Iced application using the builder pattern
    iced::application(App::new, App::update, App::view)
        .title(App::title)
        .theme(|_app: &App| Theme::Light)
        .subscription(App::subscription)
        .window(window::Settings {
            size: Size::new(1100.0, 780.0),
            min_size: Some(Size::new(640.0, 480.0)),
            ..Default::default()
        })
        .run()
}
