//! Application menu.
//!
//! The structure is declared once as a [`MenuTemplate`] (a pure value keyed
//! on the platform) and then materialized by the host-specific layer:
//!
//! - **macOS**: native menu bar via the `muda` crate
//! - **Windows/Linux**: in-app menu bar rendered with Iced
//!
//! Both layers convert their events into the same [`MenuMessage`] variants,
//! and the global keyboard subscription dispatches the template's shortcuts
//! on platforms without native accelerators.

#[cfg(not(target_os = "macos"))]
pub mod in_app;
#[cfg(target_os = "macos")]
pub mod native;
pub mod template;

#[cfg(not(target_os = "macos"))]
pub use in_app::MenuDropdownState;
pub use template::{MenuTemplate, Platform};

use iced::keyboard;

use crate::message::MenuMessage;
use template::{HostRole, MenuEntry};

/// Menu command identifiers.
pub mod ids {
    // File menu
    pub const OPEN_FILE: &str = "open_file";
    pub const EXPORT_PDF: &str = "export_pdf";

    // View menu
    pub const RELOAD: &str = "reload";
    pub const TOGGLE_FULL_SCREEN: &str = "toggle_full_screen";
    pub const TOGGLE_DEVTOOLS: &str = "toggle_devtools";

    // Help menu
    pub const LEARN_MORE: &str = "learn_more";
}

/// Convert a menu command id to a message.
///
/// Returns `None` for ids that don't map to application actions (like
/// predefined system events).
pub fn menu_event_to_message(event_id: &str) -> Option<MenuMessage> {
    match event_id {
        ids::OPEN_FILE => Some(MenuMessage::OpenFile),
        ids::EXPORT_PDF => Some(MenuMessage::ExportPdf),
        ids::RELOAD => Some(MenuMessage::Reload),
        ids::TOGGLE_FULL_SCREEN => Some(MenuMessage::ToggleFullScreen),
        ids::TOGGLE_DEVTOOLS => Some(MenuMessage::ToggleDevTools),
        ids::LEARN_MORE => Some(MenuMessage::LearnMore),
        _ => None,
    }
}

/// Message for a host role on platforms that handle roles in-app.
///
/// Roles the host shell owns natively (About, Hide, ...) map to `None`.
pub fn role_message(role: HostRole) -> Option<MenuMessage> {
    match role {
        HostRole::Minimize => Some(MenuMessage::Minimize),
        HostRole::CloseWindow => Some(MenuMessage::CloseWindow),
        HostRole::Quit => Some(MenuMessage::Quit),
        _ => None,
    }
}

/// Resolve a key press against the template's shortcuts.
pub fn shortcut_message(
    template: &MenuTemplate,
    key: &keyboard::Key,
    modifiers: keyboard::Modifiers,
) -> Option<MenuMessage> {
    template.entries().find_map(|entry| match entry {
        MenuEntry::Command {
            id,
            shortcut: Some(shortcut),
            ..
        } if shortcut.matches(key, modifiers) => menu_event_to_message(id),
        MenuEntry::Role {
            role,
            shortcut: Some(shortcut),
        } if shortcut.matches(key, modifiers) => role_message(*role),
        _ => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_event_to_message() {
        assert!(matches!(
            menu_event_to_message(ids::OPEN_FILE),
            Some(MenuMessage::OpenFile)
        ));
        assert!(matches!(
            menu_event_to_message(ids::EXPORT_PDF),
            Some(MenuMessage::ExportPdf)
        ));
        assert!(matches!(
            menu_event_to_message(ids::TOGGLE_DEVTOOLS),
            Some(MenuMessage::ToggleDevTools)
        ));
        assert!(menu_event_to_message("unknown_id").is_none());
    }

    #[test]
    fn native_only_roles_have_no_message() {
        assert!(role_message(HostRole::About).is_none());
        assert!(role_message(HostRole::Services).is_none());
        assert!(matches!(
            role_message(HostRole::Minimize),
            Some(MenuMessage::Minimize)
        ));
    }

    // Modifier resolution depends on the host platform, so these run where
    // the command modifier is the Control key.
    #[cfg(not(target_os = "macos"))]
    mod desktop_shortcuts {
        use super::*;

        fn template() -> MenuTemplate {
            MenuTemplate::for_platform(Platform::Other)
        }

        #[test]
        fn ctrl_o_opens_a_file() {
            let msg = shortcut_message(
                &template(),
                &keyboard::Key::Character("o".into()),
                keyboard::Modifiers::CTRL,
            );
            assert!(matches!(msg, Some(MenuMessage::OpenFile)));
        }

        #[test]
        fn ctrl_shift_o_exports_a_pdf() {
            let msg = shortcut_message(
                &template(),
                &keyboard::Key::Character("O".into()),
                keyboard::Modifiers::CTRL | keyboard::Modifiers::SHIFT,
            );
            assert!(matches!(msg, Some(MenuMessage::ExportPdf)));
        }

        #[test]
        fn f11_toggles_full_screen() {
            let msg = shortcut_message(
                &template(),
                &keyboard::Key::Named(keyboard::key::Named::F11),
                keyboard::Modifiers::empty(),
            );
            assert!(matches!(msg, Some(MenuMessage::ToggleFullScreen)));
        }

        #[test]
        fn ctrl_w_maps_to_the_close_role() {
            let msg = shortcut_message(
                &template(),
                &keyboard::Key::Character("w".into()),
                keyboard::Modifiers::CTRL,
            );
            assert!(matches!(msg, Some(MenuMessage::CloseWindow)));
        }

        #[test]
        fn unmodified_letters_match_nothing() {
            let msg = shortcut_message(
                &template(),
                &keyboard::Key::Character("o".into()),
                keyboard::Modifiers::empty(),
            );
            assert!(msg.is_none());
        }
    }
}
