//! Handler module - TEA update function and event handlers
//!
//! Organized into submodules:
//! - `update`: Main update() function and message dispatch
//! - `navigation`: Page switching
//! - `contact`: Contact form edits and submission

pub(crate) mod contact;
pub(crate) mod navigation;
pub(crate) mod update;


use mrfast_core::ContactSubmission;

use crate::message::Message;
use crate::state::AppState;

// Re-export main entry point
pub use update::update;

/// Actions that the shell should perform after update
#[derive(Debug, Clone, PartialEq)]
pub enum UpdateAction {
    /// Scroll the viewport back to the top (fire-and-forget)
    ScrollToTop { smooth: bool },

    /// Send a submitted contact form to the configured endpoint
    DeliverContact {
        endpoint: String,
        submission: ContactSubmission,
    },
}

/// Result of processing a message
#[derive(Debug, Default)]
pub struct UpdateResult {
    /// Optional follow-up message to process
    pub message: Option<Message>,
    /// Optional action for the shell to perform
    pub action: Option<UpdateAction>,
}

impl UpdateResult {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn message(msg: Message) -> Self {
        Self {
            message: Some(msg),
            action: None,
        }
    }

    pub fn action(action: UpdateAction) -> Self {
        Self {
            message: None,
            action: Some(action),
        }
    }
}

/// Run a message and all of its follow-ups through [`update`]
///
/// Every action produced along the way is handed to `on_action` in order.
pub fn process_message(
    state: &mut AppState,
    message: Message,
    mut on_action: impl FnMut(UpdateAction),
) {
    let mut msg = Some(message);
    while let Some(m) = msg {
        let result = update(state, m);
        if let Some(action) = result.action {
            on_action(action);
        }
        msg = result.message;
    }
}
