//! Native menu bar materialization for macOS using the `muda` crate.
//!
//! The declarative template is walked once and installed for NSApp. This
//! must happen after the application event loop has started, so the caller
//! triggers it from a startup task. Menu events arrive on muda's global
//! receiver and are polled by an Iced subscription.

use std::time::Duration;

use iced::Subscription;
use muda::accelerator::{Accelerator, Code, Modifiers};
use muda::{Menu, MenuEvent, MenuItem, PredefinedMenuItem, Submenu};

use super::template::{GroupRole, HostRole, MenuEntry, MenuTemplate, Shortcut, ShortcutKey};
use crate::message::MenuMessage;

/// Materialize the template and install it as the NSApp menu bar.
///
/// Returns the menu; keep it alive for the lifetime of the application.
pub fn install(template: &MenuTemplate) -> Menu {
    let menu = Menu::new();

    for group in &template.groups {
        let submenu = Submenu::new(&group.label, true);

        for entry in &group.entries {
            match entry {
                MenuEntry::Command {
                    id,
                    label,
                    shortcut,
                } => {
                    let item =
                        MenuItem::with_id(*id, *label, true, shortcut.as_ref().map(accelerator));
                    submenu.append(&item).expect("Failed to add menu item");
                }
                MenuEntry::Role { role, .. } => {
                    submenu
                        .append(&predefined(*role))
                        .expect("Failed to add predefined menu item");
                }
                MenuEntry::Separator => {
                    submenu
                        .append(&PredefinedMenuItem::separator())
                        .expect("Failed to add separator");
                }
            }
        }

        menu.append(&submenu).expect("Failed to add submenu");

        match group.role {
            Some(GroupRole::Window) => submenu.set_as_windows_menu_for_nsapp(),
            Some(GroupRole::Help) => submenu.set_as_help_menu_for_nsapp(),
            None => {}
        }
    }

    menu.init_for_nsapp();
    menu
}

fn predefined(role: HostRole) -> PredefinedMenuItem {
    match role {
        HostRole::About => PredefinedMenuItem::about(None, None),
        HostRole::Services => PredefinedMenuItem::services(None),
        HostRole::Hide => PredefinedMenuItem::hide(None),
        HostRole::HideOthers => PredefinedMenuItem::hide_others(None),
        HostRole::ShowAll => PredefinedMenuItem::show_all(None),
        HostRole::Quit => PredefinedMenuItem::quit(None),
        HostRole::Minimize => PredefinedMenuItem::minimize(None),
        HostRole::CloseWindow => PredefinedMenuItem::close_window(None),
        HostRole::BringAllToFront => PredefinedMenuItem::bring_all_to_front(None),
    }
}

fn accelerator(shortcut: &Shortcut) -> Accelerator {
    let mut modifiers = Modifiers::empty();
    if shortcut.command {
        modifiers |= Modifiers::META;
    }
    if shortcut.control {
        modifiers |= Modifiers::CONTROL;
    }
    if shortcut.shift {
        modifiers |= Modifiers::SHIFT;
    }
    if shortcut.alt {
        modifiers |= Modifiers::ALT;
    }

    let code = match shortcut.key {
        ShortcutKey::Char(c) => format!("Key{}", c.to_ascii_uppercase())
            .parse()
            .unwrap_or(Code::Space),
        ShortcutKey::F11 => Code::F11,
    };

    let modifiers = (!modifiers.is_empty()).then_some(modifiers);
    Accelerator::new(modifiers, code)
}

/// Create an Iced subscription that polls for native menu events.
///
/// The poll is a non-blocking `try_recv` on muda's global channel; 20 polls
/// per second keeps latency well under human reaction time.
pub fn menu_subscription() -> Subscription<Option<MenuMessage>> {
    iced::time::every(Duration::from_millis(50)).map(|_| poll_menu_event())
}

fn poll_menu_event() -> Option<MenuMessage> {
    MenuEvent::receiver()
        .try_recv()
        .ok()
        .and_then(|event| super::menu_event_to_message(event.id().0.as_str()))
}
