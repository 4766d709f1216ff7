//! # mrfast-core - Core Domain Types
//!
//! Foundation crate for the Mr Fast Digital Marketing website. Provides the
//! page identifiers, static content tables, the contact form state machine,
//! the navigation scroll tracker, and error handling.
//!
//! This crate has **zero internal dependencies** and nothing browser-specific,
//! so everything here builds and tests natively.
//!
//! ## Public API
//!
//! ### Pages (`page`)
//! - [`PageKey`] - Which content view is active (Home, Projects, About, Contact)
//!
//! ### Content (`content`)
//! - [`ServiceEntry`], [`ValueProp`] - Home page tables
//! - [`ProjectEntry`], [`ProjectStatus`] - Portfolio listings
//! - [`ExperienceEntry`], [`SkillTag`] - About page tables
//!
//! ### Contact Form (`contact`)
//! - [`ContactFormState`] - Editing/Submitted state machine
//! - [`ContactField`] - Name, Email, Message
//! - [`ContactSubmission`] - Snapshot handed to delivery
//!
//! ### Scroll Style (`scroll`)
//! - [`ScrollTracker`] - Navigation bar style flag with a strict 20 px threshold
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Error enum grouped by page, contact form and configuration
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//!
//! ## Prelude
//!
//! Import commonly used types with:
//! ```rust
//! use mrfast_core::prelude::*;
//! ```

pub mod contact;
pub mod content;
pub mod error;
pub mod page;
pub mod scroll;

/// Prelude for common imports used throughout the site crates
pub mod prelude {
    pub use super::error::{Error, Result};
    pub use tracing::{debug, error, info, trace, warn};
}

// Re-export commonly used types at crate root for convenience
pub use contact::{is_valid_email, ContactField, ContactFormState, ContactSubmission, FormPhase};
pub use content::{
    certifications, experience, projects, services, skills, timeline_is_left, value_props,
    ExperienceEntry, ProjectEntry, ProjectStatus, ServiceEntry, SkillTag, ValueProp,
    CERTIFICATION_ISSUER,
};
pub use error::{Error, Result};
pub use page::PageKey;
pub use scroll::{ScrollTracker, DEFAULT_SCROLL_THRESHOLD_PX};
