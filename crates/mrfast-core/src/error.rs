//! Site error types with rich context

use thiserror::Error;

use crate::contact::ContactField;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Site error types organized by layer/domain
#[derive(Debug, Error)]
pub enum Error {
    // ─────────────────────────────────────────────────────────────
    // Common/Infrastructure Errors
    // ─────────────────────────────────────────────────────────────
    #[error("JSON encoding error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    // ─────────────────────────────────────────────────────────────
    // Navigation Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Unknown page: {label:?}")]
    UnknownPage { label: String },

    // ─────────────────────────────────────────────────────────────
    // Contact Form Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Contact form is missing required fields: {}", join_fields(.missing))]
    FormIncomplete { missing: Vec<ContactField> },

    #[error("Not a valid email address: {value:?}")]
    InvalidEmail { value: String },

    #[error("Contact form was already submitted")]
    FormAlreadySubmitted,

    #[error("Contact delivery failed: {message}")]
    Delivery { message: String },

    // ─────────────────────────────────────────────────────────────
    // Configuration Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Invalid configuration: {message}")]
    ConfigInvalid { message: String },
}

fn join_fields(fields: &[ContactField]) -> String {
    fields
        .iter()
        .map(|f| f.label())
        .collect::<Vec<_>>()
        .join(", ")
}

// ─────────────────────────────────────────────────────────────────
// Convenience Constructors
// ─────────────────────────────────────────────────────────────────

impl Error {
    pub fn unknown_page(label: impl Into<String>) -> Self {
        Self::UnknownPage {
            label: label.into(),
        }
    }

    pub fn invalid_email(value: impl Into<String>) -> Self {
        Self::InvalidEmail {
            value: value.into(),
        }
    }

    pub fn delivery(message: impl Into<String>) -> Self {
        Self::Delivery {
            message: message.into(),
        }
    }

    pub fn config_invalid(message: impl Into<String>) -> Self {
        Self::ConfigInvalid {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_messages() {
        let err = Error::unknown_page("Blog");
        assert_eq!(err.to_string(), "Unknown page: \"Blog\"");

        let err = Error::FormAlreadySubmitted;
        assert!(err.to_string().contains("already submitted"));
    }

    #[test]
    fn test_form_incomplete_lists_fields_in_order() {
        let err = Error::FormIncomplete {
            missing: vec![ContactField::Email, ContactField::Message],
        };
        assert_eq!(
            err.to_string(),
            "Contact form is missing required fields: Email, Message"
        );
    }

    #[test]
    fn test_error_from_json() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: Error = json_err.into();
        assert!(matches!(err, Error::Json(_)));
    }

    #[test]
    fn test_error_from_toml() {
        let toml_err = toml::from_str::<toml::Table>("not = [valid").unwrap_err();
        let err: Error = toml_err.into();
        assert!(matches!(err, Error::Toml(_)));
    }

    #[test]
    fn test_config_invalid_message() {
        let err = Error::config_invalid("business.email must not be empty");
        assert_eq!(
            err.to_string(),
            "Invalid configuration: business.email must not be empty"
        );
    }

    #[test]
    fn test_delivery_message() {
        let err = Error::delivery("endpoint answered HTTP 503");
        assert_eq!(
            err.to_string(),
            "Contact delivery failed: endpoint answered HTTP 503"
        );
    }
}
