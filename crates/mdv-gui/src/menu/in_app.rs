//! In-app menu bar for Windows and Linux.
//!
//! Renders the same declarative template the macOS native menu is built
//! from. Entries dispatch the shared [`MenuMessage`] variants; roles that
//! only exist natively are shown disabled.

use iced::widget::{Space, button, column, container, row, text};
use iced::{Alignment, Border, Element, Length, Padding, Theme};

use super::template::{MenuEntry, MenuTemplate};
use super::{menu_event_to_message, role_message};
use crate::message::{MenuMessage, Message};
use crate::theme::{MENU_TEXT_SIZE, SPACING_SM, SPACING_XS};

/// State for the in-app menu bar dropdowns.
#[derive(Debug, Clone, Copy, Default)]
pub struct MenuDropdownState {
    /// Index of the currently open group, if any.
    pub open: Option<usize>,
}

impl MenuDropdownState {
    /// Toggle a dropdown open/closed.
    pub fn toggle(&mut self, index: usize) {
        if self.open == Some(index) {
            self.open = None;
        } else {
            self.open = Some(index);
        }
    }

    /// Close all dropdowns.
    pub fn close(&mut self) {
        self.open = None;
    }

    /// Check if a specific dropdown is open.
    pub fn is_open(&self, index: usize) -> bool {
        self.open == Some(index)
    }
}

/// Render the in-app menu bar.
pub fn view_menu_bar<'a>(
    template: &'a MenuTemplate,
    state: &MenuDropdownState,
) -> Element<'a, Message> {
    let mut bar = row![].spacing(SPACING_XS).align_y(Alignment::Center);
    for (index, group) in template.groups.iter().enumerate() {
        bar = bar.push(view_group_button(&group.label, index, state.is_open(index)));
    }
    bar = bar.push(Space::new().width(Length::Fill));

    let bar_container = container(bar.padding(Padding::from([SPACING_XS, SPACING_SM])))
        .width(Length::Fill)
        .style(|theme: &Theme| {
            let palette = theme.extended_palette();
            container::Style {
                background: Some(palette.background.weak.color.into()),
                ..Default::default()
            }
        });

    match state.open {
        Some(index) => {
            iced::widget::stack![bar_container, view_dropdown(template, index)].into()
        }
        None => bar_container.into(),
    }
}

/// Render one top-level group button.
fn view_group_button(label: &str, index: usize, is_active: bool) -> Element<'_, Message> {
    let style = move |theme: &Theme, _status: button::Status| {
        let palette = theme.extended_palette();
        button::Style {
            background: is_active.then(|| palette.background.strong.color.into()),
            text_color: palette.background.base.text,
            border: Border::default(),
            ..Default::default()
        }
    };

    button(text(label).size(MENU_TEXT_SIZE))
        .on_press(Message::Menu(MenuMessage::ToggleDropdown(index)))
        .padding([SPACING_XS, SPACING_SM])
        .style(style)
        .into()
}

/// Render the dropdown for the open group.
fn view_dropdown(template: &MenuTemplate, index: usize) -> Element<'_, Message> {
    let Some(group) = template.groups.get(index) else {
        return Space::new().into();
    };

    let mut items = column![].width(200);
    for entry in &group.entries {
        items = items.push(view_entry(template, entry));
    }

    let dropdown = container(items)
        .padding(SPACING_XS)
        .style(|theme: &Theme| {
            let palette = theme.extended_palette();
            container::Style {
                background: Some(palette.background.base.color.into()),
                border: Border {
                    color: palette.background.strong.color,
                    width: 1.0,
                    radius: 4.0.into(),
                },
                shadow: iced::Shadow {
                    color: iced::Color::BLACK.scale_alpha(0.2),
                    offset: iced::Vector::new(0.0, 4.0),
                    blur_radius: 8.0,
                },
                ..Default::default()
            }
        });

    // Rough horizontal alignment under the group button.
    let left = SPACING_SM + index as f32 * 64.0;
    container(dropdown)
        .padding(Padding {
            top: 30.0,
            left,
            ..Padding::default()
        })
        .into()
}

fn view_entry<'a>(template: &'a MenuTemplate, entry: &'a MenuEntry) -> Element<'a, Message> {
    match entry {
        MenuEntry::Command {
            id,
            label,
            shortcut,
        } => view_item(
            label,
            shortcut.as_ref().map(|s| s.label(template.platform)),
            menu_event_to_message(id).map(Message::Menu),
        ),
        MenuEntry::Role { role, shortcut } => view_item(
            role.label(),
            shortcut.as_ref().map(|s| s.label(template.platform)),
            role_message(*role).map(Message::Menu),
        ),
        MenuEntry::Separator => view_separator(),
    }
}

/// Render a menu item with an optional shortcut hint.
fn view_item<'a>(
    label: &'a str,
    shortcut: Option<String>,
    on_press: Option<Message>,
) -> Element<'a, Message> {
    let is_enabled = on_press.is_some();

    let mut content = row![
        text(label).size(MENU_TEXT_SIZE),
        Space::new().width(Length::Fill),
    ]
    .align_y(Alignment::Center);

    if let Some(shortcut) = shortcut {
        content = content.push(text(shortcut).size(11));
    }

    let item = button(content)
        .padding([SPACING_XS, SPACING_SM])
        .width(Length::Fill)
        .style(move |theme: &Theme, status: button::Status| {
            let palette = theme.extended_palette();
            let background = (is_enabled && status == button::Status::Hovered)
                .then(|| palette.background.weak.color.into());
            button::Style {
                background,
                text_color: if is_enabled {
                    palette.background.base.text
                } else {
                    palette.background.strong.color
                },
                border: Border {
                    radius: 4.0.into(),
                    ..Default::default()
                },
                ..Default::default()
            }
        });

    match on_press {
        Some(message) => item.on_press(message).into(),
        None => item.into(),
    }
}

/// Render a separator line.
fn view_separator<'a>() -> Element<'a, Message> {
    container(Space::new().width(Length::Fill).height(1))
        .style(|theme: &Theme| {
            let palette = theme.extended_palette();
            container::Style {
                background: Some(palette.background.strong.color.into()),
                ..Default::default()
            }
        })
        .padding(Padding::from([SPACING_XS, 0.0]))
        .into()
}
