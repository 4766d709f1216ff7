//! Message types for the application (TEA pattern)

use mrfast_core::{ContactField, PageKey};

/// All possible messages/actions in the application
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    // ─────────────────────────────────────────────────────────
    // Navigation Messages
    // ─────────────────────────────────────────────────────────
    /// The site finished mounting in the browser
    Mounted,
    /// A navigation bar, footer or call-to-action button was clicked
    Navigate(PageKey),
    /// The logo was clicked (always goes Home)
    LogoClicked,

    // ─────────────────────────────────────────────────────────
    // Contact Form Messages
    // ─────────────────────────────────────────────────────────
    /// One contact form input changed
    ContactFieldChanged { field: ContactField, value: String },
    /// The contact form was submitted (browser `required` checks already passed)
    ContactSubmitted,
}
