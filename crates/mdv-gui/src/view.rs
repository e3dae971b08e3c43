//! Main window view.
//!
//! Pure functions from state to widgets. The document area shows whatever
//! the viewer window currently holds; the optional panes (error banner,
//! developer tools, status line) come and go with state.

use iced::widget::{Space, button, column, container, row, scrollable, text};
use iced::{Alignment, Element, Font, Length, Theme};

use crate::error::GuiError;
use crate::message::Message;
use crate::state::AppState;
use crate::theme::{BODY_TEXT_SIZE, SPACING_SM, SPACING_XS};
use crate::window::WindowContent;

/// Render the main window.
pub fn view(state: &AppState) -> Element<'_, Message> {
    let mut root = column![];

    #[cfg(not(target_os = "macos"))]
    {
        root = root.push(crate::menu::in_app::view_menu_bar(
            &state.menu,
            &state.menu_dropdown,
        ));
    }

    if let Some(error) = &state.error {
        root = root.push(view_error_banner(error));
    }

    root = root.push(view_document_area(state));

    if let Some(window) = &state.window
        && window.devtools_open()
    {
        root = root.push(view_devtools_pane(state));
    }

    if let Some(status) = &state.status {
        root = root.push(
            container(text(status.clone()).size(12))
                .width(Length::Fill)
                .padding([SPACING_XS, SPACING_SM]),
        );
    }

    root.into()
}

/// The document display area.
fn view_document_area(state: &AppState) -> Element<'_, Message> {
    let Some(window) = &state.window else {
        return container(text("No open window."))
            .center_x(Length::Fill)
            .center_y(Length::Fill)
            .into();
    };

    match window.content() {
        WindowContent::Welcome => container(
            column![
                text("Markview").size(28),
                text(WindowContent::Welcome.display_text()).size(BODY_TEXT_SIZE),
            ]
            .spacing(SPACING_SM)
            .align_x(Alignment::Center),
        )
        .center_x(Length::Fill)
        .center_y(Length::Fill)
        .into(),

        WindowContent::Document { root, body } => column![
            view_location_bar(root),
            scrollable(
                container(text(body).font(Font::MONOSPACE).size(BODY_TEXT_SIZE))
                    .width(Length::Fill)
                    .padding(SPACING_SM),
            )
            .height(Length::Fill),
        ]
        .into(),

        WindowContent::LoadFailed { root, reason } => container(
            column![
                text(format!("Failed to load {root}")).size(BODY_TEXT_SIZE),
                text(reason).size(12),
            ]
            .spacing(SPACING_XS),
        )
        .center_x(Length::Fill)
        .center_y(Length::Fill)
        .into(),
    }
}

/// Bar showing the content root of the loaded document.
fn view_location_bar<'a>(root: String) -> Element<'a, Message> {
    container(text(root).size(12))
        .width(Length::Fill)
        .padding([SPACING_XS, SPACING_SM])
        .style(|theme: &Theme| {
            let palette = theme.extended_palette();
            container::Style {
                background: Some(palette.background.weak.color.into()),
                ..Default::default()
            }
        })
        .into()
}

/// Dismissible banner for reported workflow failures.
fn view_error_banner(error: &GuiError) -> Element<'_, Message> {
    container(
        row![
            column![
                text(error.to_string()).size(BODY_TEXT_SIZE),
                text(error.suggestion()).size(12),
            ]
            .spacing(SPACING_XS),
            Space::new().width(Length::Fill),
            button(text("Dismiss").size(12)).on_press(Message::DismissError),
        ]
        .align_y(Alignment::Center),
    )
    .width(Length::Fill)
    .padding(SPACING_SM)
    .style(|theme: &Theme| {
        let palette = theme.extended_palette();
        container::Style {
            background: Some(palette.danger.weak.color.into()),
            text_color: Some(palette.danger.weak.text),
            ..Default::default()
        }
    })
    .into()
}

/// The developer tools pane: a small inspector over the window state.
fn view_devtools_pane(state: &AppState) -> Element<'_, Message> {
    let (root, body_len) = state
        .window
        .as_ref()
        .map(|window| {
            let content = window.content();
            let body_len = content.display_text().len();
            (
                window.content_root().unwrap_or_else(|| "about:welcome".to_owned()),
                body_len,
            )
        })
        .unwrap_or_else(|| ("-".to_owned(), 0));

    container(
        column![
            text("Developer Tools").size(12),
            text(format!("content root: {root}")).size(12).font(Font::MONOSPACE),
            text(format!("content bytes: {body_len}")).size(12).font(Font::MONOSPACE),
            text(format!("full screen: {}", state.fullscreen))
                .size(12)
                .font(Font::MONOSPACE),
        ]
        .spacing(SPACING_XS),
    )
    .width(Length::Fill)
    .padding(SPACING_SM)
    .style(|theme: &Theme| {
        let palette = theme.extended_palette();
        container::Style {
            background: Some(palette.background.weak.color.into()),
            ..Default::default()
        }
    })
    .into()
}
