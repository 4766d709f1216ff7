//! Contact form state machine
//!
//! The form starts in [`FormPhase::Editing`] with three empty fields. Edits
//! replace one field at a time. A successful [`ContactFormState::submit`]
//! moves the form to [`FormPhase::Submitted`], which is terminal for the life
//! of the form: later edits and submits are rejected without touching state.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// One `@` between a non-empty local part and a non-empty domain
///
/// Accepts everything a browser's `type=email` check accepts, IDN domains and
/// dotless hosts included.
static EMAIL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^@\s]+@[^@\s]+$").expect("Invalid email regex"));

/// Check that an address has the `local@domain` shape
pub fn is_valid_email(value: &str) -> bool {
    EMAIL_REGEX.is_match(value.trim())
}

/// One of the three contact form inputs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ContactField {
    Name,
    Email,
    Message,
}

impl ContactField {
    pub const ALL: [ContactField; 3] =
        [ContactField::Name, ContactField::Email, ContactField::Message];

    pub fn label(&self) -> &'static str {
        match self {
            ContactField::Name => "Name",
            ContactField::Email => "Email",
            ContactField::Message => "Message",
        }
    }

    pub fn placeholder(&self) -> &'static str {
        match self {
            ContactField::Name => "Your name",
            ContactField::Email => "your@email.com",
            ContactField::Message => "Tell me about your project...",
        }
    }
}

/// Lifecycle phase of a mounted contact form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormPhase {
    #[default]
    Editing,
    Submitted,
}

/// Field values plus phase for one mounted contact form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactFormState {
    pub name: String,
    pub email: String,
    pub message: String,
    phase: FormPhase,
}

impl ContactFormState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> FormPhase {
        self.phase
    }

    pub fn is_submitted(&self) -> bool {
        self.phase == FormPhase::Submitted
    }

    pub fn value(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Message => &self.message,
        }
    }

    /// Replace exactly one field, leaving the others untouched
    pub fn set_field(&mut self, field: ContactField, value: impl Into<String>) -> Result<()> {
        if self.is_submitted() {
            return Err(Error::FormAlreadySubmitted);
        }
        let slot = match field {
            ContactField::Name => &mut self.name,
            ContactField::Email => &mut self.email,
            ContactField::Message => &mut self.message,
        };
        *slot = value.into();
        Ok(())
    }

    /// Fields that would block submission, in form order
    ///
    /// Mirrors `required`: only an empty value is missing, whitespace counts.
    pub fn missing_fields(&self) -> Vec<ContactField> {
        ContactField::ALL
            .into_iter()
            .filter(|f| self.value(*f).is_empty())
            .collect()
    }

    /// Attempt the Editing → Submitted transition
    ///
    /// On failure the form stays in `Editing` with its values intact.
    pub fn submit(&mut self) -> Result<ContactSubmission> {
        if self.is_submitted() {
            return Err(Error::FormAlreadySubmitted);
        }

        let missing = self.missing_fields();
        if !missing.is_empty() {
            return Err(Error::FormIncomplete { missing });
        }

        if !is_valid_email(&self.email) {
            return Err(Error::invalid_email(self.email.clone()));
        }

        self.phase = FormPhase::Submitted;
        Ok(ContactSubmission {
            name: self.name.clone(),
            email: self.email.trim().to_string(),
            message: self.message.clone(),
        })
    }
}

/// Snapshot of a submitted form, ready for delivery
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactSubmission {
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled(name: &str, email: &str, message: &str) -> ContactFormState {
        let mut form = ContactFormState::new();
        form.set_field(ContactField::Name, name).unwrap();
        form.set_field(ContactField::Email, email).unwrap();
        form.set_field(ContactField::Message, message).unwrap();
        form
    }

    #[test]
    fn test_new_form_is_empty_and_editing() {
        let form = ContactFormState::new();
        assert_eq!(form.phase(), FormPhase::Editing);
        assert!(form.name.is_empty());
        assert!(form.email.is_empty());
        assert!(form.message.is_empty());
        assert_eq!(form.missing_fields(), ContactField::ALL.to_vec());
    }

    #[test]
    fn test_set_field_leaves_other_fields_unchanged() {
        let mut form = filled("Jane", "jane@x.com", "Hi");

        form.set_field(ContactField::Email, "jane@y.org").unwrap();

        assert_eq!(form.name, "Jane");
        assert_eq!(form.email, "jane@y.org");
        assert_eq!(form.message, "Hi");
    }

    #[test]
    fn test_submit_complete_form_transitions_to_submitted() {
        let mut form = filled("Jane", "jane@x.com", "Hi");

        let submission = form.submit().unwrap();

        assert!(form.is_submitted());
        assert_eq!(
            submission,
            ContactSubmission {
                name: "Jane".to_string(),
                email: "jane@x.com".to_string(),
                message: "Hi".to_string(),
            }
        );
    }

    #[test]
    fn test_submit_with_empty_message_stays_editing() {
        let mut form = filled("Jane", "jane@x.com", "");

        let err = form.submit().unwrap_err();

        assert!(
            matches!(err, Error::FormIncomplete { ref missing } if missing == &[ContactField::Message])
        );
        assert_eq!(form.phase(), FormPhase::Editing);
        assert_eq!(form.name, "Jane");
    }

    #[test]
    fn test_whitespace_only_fields_are_not_missing() {
        let mut form = filled("   ", "jane@x.com", "\n");
        assert!(form.missing_fields().is_empty());

        let submission = form.submit().unwrap();

        assert!(form.is_submitted());
        assert_eq!(submission.name, "   ");
        assert_eq!(submission.message, "\n");
    }

    #[test]
    fn test_submit_accepts_idn_domain() {
        let mut form = filled("Jane", "jane@bücher.de", "Hi");
        let submission = form.submit().unwrap();
        assert_eq!(submission.email, "jane@bücher.de");
    }

    #[test]
    fn test_submit_rejects_malformed_email() {
        let mut form = filled("Jane", "jane at x dot com", "Hi");

        let err = form.submit().unwrap_err();

        assert!(matches!(err, Error::InvalidEmail { .. }));
        assert!(!form.is_submitted());
    }

    #[test]
    fn test_submitted_is_terminal() {
        let mut form = filled("Jane", "jane@x.com", "Hi");
        form.submit().unwrap();

        let edit = form.set_field(ContactField::Name, "Bob");
        let again = form.submit();

        assert!(matches!(edit, Err(Error::FormAlreadySubmitted)));
        assert!(matches!(again, Err(Error::FormAlreadySubmitted)));
        assert_eq!(form.name, "Jane");
        assert!(form.is_submitted());
    }

    #[test]
    fn test_submission_trims_email() {
        let mut form = filled("Jane", "  jane@x.com ", "Hi");
        let submission = form.submit().unwrap();
        assert_eq!(submission.email, "jane@x.com");
    }

    #[test]
    fn test_email_grammar() {
        assert!(is_valid_email("jason@mrfastmarketing.com"));
        assert!(is_valid_email("a.b+tag@sub.example.co"));
        assert!(is_valid_email("user@localhost"));
        assert!(is_valid_email("jane@bücher.de"));
        assert!(is_valid_email("o'brien@example.ie"));
        assert!(!is_valid_email("no-at-sign"));
        assert!(!is_valid_email("two@@x.com"));
        assert!(!is_valid_email("spaced name@x.com"));
        assert!(!is_valid_email("@x.com"));
    }

    #[test]
    fn test_submission_json_shape() {
        let submission = ContactSubmission {
            name: "Jane".to_string(),
            email: "jane@x.com".to_string(),
            message: "Hi".to_string(),
        };
        let value: serde_json::Value =
            serde_json::from_str(&submission.to_json().unwrap()).unwrap();
        assert_eq!(value["name"], "Jane");
        assert_eq!(value["email"], "jane@x.com");
        assert_eq!(value["message"], "Hi");
    }
}
