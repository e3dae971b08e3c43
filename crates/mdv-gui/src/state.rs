//! Application state.

use std::sync::Arc;

use crate::error::GuiError;
use crate::menu::{MenuTemplate, Platform};
use crate::settings::Settings;
use crate::window::ViewerWindow;

/// All application state.
pub struct AppState {
    /// Persisted user preferences.
    pub settings: Settings,

    /// The menu hierarchy, built once at startup and never rebuilt.
    pub menu: MenuTemplate,

    /// The main viewer window; `None` once it has been closed.
    ///
    /// Held behind `Arc` so in-flight workflows keep a usable handle while
    /// the state moves on - last writer wins on the content.
    pub window: Option<Arc<ViewerWindow>>,

    /// Whether the window is currently full screen.
    pub fullscreen: bool,

    /// Error shown in the in-app banner.
    pub error: Option<GuiError>,

    /// Status line after a completed workflow.
    pub status: Option<String>,

    /// In-app menu dropdown state (desktop platforms only).
    #[cfg(not(target_os = "macos"))]
    pub menu_dropdown: crate::menu::MenuDropdownState,

    /// Keeps the native menu alive for the lifetime of the app.
    #[cfg(target_os = "macos")]
    pub native_menu: Option<muda::Menu>,
}

impl AppState {
    /// Create the initial state.
    pub fn new(settings: Settings) -> Self {
        Self {
            settings,
            menu: MenuTemplate::for_platform(Platform::current()),
            window: Some(Arc::new(ViewerWindow::new())),
            fullscreen: false,
            error: None,
            status: None,
            #[cfg(not(target_os = "macos"))]
            menu_dropdown: crate::menu::MenuDropdownState::default(),
            #[cfg(target_os = "macos")]
            native_menu: None,
        }
    }

    /// The window that menu commands target, if one is focused.
    pub fn target_window(&self) -> Option<Arc<ViewerWindow>> {
        self.window.clone()
    }
}
