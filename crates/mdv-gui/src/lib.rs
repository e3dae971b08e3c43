//! Markview - desktop markdown viewer.
//!
//! Built with Iced 0.14.0 using the Elm architecture (State, Message,
//! Update, View). The application exposes two file workflows from its menu:
//! opening a markdown file (converted to an HTML artifact the window then
//! loads) and exporting the current window content to PDF.

pub mod app;
pub mod dialog;
pub mod error;
pub mod handler;
pub mod menu;
pub mod message;
pub mod service;
pub mod settings;
pub mod state;
pub mod theme;
pub mod view;
pub mod window;
