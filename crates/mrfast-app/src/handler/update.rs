//! Main update function - handles state transitions (TEA pattern)

use mrfast_core::PageKey;

use crate::message::Message;
use crate::state::AppState;

use super::{contact, navigation, UpdateResult};

/// Process a message and update state
/// Returns optional follow-up message and/or action
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        Message::Mounted => navigation::handle_mounted(state),

        Message::Navigate(page) => navigation::handle_navigate(state, page),

        Message::LogoClicked => UpdateResult::message(Message::Navigate(PageKey::Home)),

        Message::ContactFieldChanged { field, value } => {
            contact::handle_field_changed(state, field, value)
        }

        Message::ContactSubmitted => contact::handle_submitted(state),
    }
}
