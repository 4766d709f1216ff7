//! Contact form message handlers

use mrfast_core::ContactField;
use tracing::{info, warn};

use crate::state::AppState;

use super::{UpdateAction, UpdateResult};

pub fn handle_field_changed(
    state: &mut AppState,
    field: ContactField,
    value: String,
) -> UpdateResult {
    let Some(form) = state.contact_form_mut() else {
        warn!(field = field.label(), "field change with no contact form mounted");
        return UpdateResult::none();
    };

    if let Err(e) = form.set_field(field, value) {
        warn!("Ignoring {} edit: {}", field.label(), e);
    }
    UpdateResult::none()
}

/// Handle form submission
///
/// Rejected submissions leave the form editable. Accepted ones are terminal
/// and, when an endpoint is configured, produce a delivery action.
pub fn handle_submitted(state: &mut AppState) -> UpdateResult {
    let endpoint = state
        .settings
        .contact
        .delivery_endpoint()
        .map(str::to_string);

    let Some(form) = state.contact_form_mut() else {
        warn!("submit with no contact form mounted");
        return UpdateResult::none();
    };

    let submission = match form.submit() {
        Ok(submission) => submission,
        Err(e) => {
            warn!("Contact form not submitted: {}", e);
            return UpdateResult::none();
        }
    };

    match endpoint {
        Some(endpoint) => {
            info!(%endpoint, "contact form submitted, delivering");
            UpdateResult::action(UpdateAction::DeliverContact {
                endpoint,
                submission,
            })
        }
        None => {
            info!(from = %submission.email, "contact form submitted (local delivery)");
            UpdateResult::none()
        }
    }
}
