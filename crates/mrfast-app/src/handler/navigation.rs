//! Navigation message handlers

use mrfast_core::PageKey;
use tracing::debug;

use crate::state::AppState;

use super::{UpdateAction, UpdateResult};

/// The first page is shown from the top, like every later page change
pub fn handle_mounted(state: &AppState) -> UpdateResult {
    debug!(page = %state.current_page(), "mounted");
    UpdateResult::action(scroll_to_top(state))
}

/// Handle a click on any navigation affordance
///
/// Only an actual page change scrolls back to the top.
pub fn handle_navigate(state: &mut AppState, page: PageKey) -> UpdateResult {
    let from = state.current_page();
    if !state.show_page(page) {
        return UpdateResult::none();
    }

    debug!(%from, to = %page, "navigated");
    UpdateResult::action(scroll_to_top(state))
}

fn scroll_to_top(state: &AppState) -> UpdateAction {
    UpdateAction::ScrollToTop {
        smooth: state.settings.behavior.smooth_scroll,
    }
}
