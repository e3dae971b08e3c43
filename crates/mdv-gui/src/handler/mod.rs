//! Message handler architecture.
//!
//! Each handler implements [`MessageHandler`] for one message family; the
//! main `App::update()` dispatches to the appropriate handler. This keeps
//! the update logic grouped by feature and testable in isolation.

mod file;
mod menu;

use iced::Task;

use crate::message::Message;
use crate::state::AppState;

pub use file::FileHandler;
pub use menu::MenuActionHandler;

/// Trait for handling messages in the Elm architecture.
pub trait MessageHandler<M> {
    /// Handle a message, potentially mutating state and returning a
    /// follow-up task.
    fn handle(&self, state: &mut AppState, msg: M) -> Task<Message>;
}
