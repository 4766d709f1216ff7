//! mrfast-app - View routing state and site settings
//!
//! This crate implements the TEA (The Elm Architecture) pattern for the page
//! switch and contact form, plus loading of the embedded site settings. It has
//! no browser dependencies; the Leptos front end feeds it messages and runs the
//! actions it returns.

pub mod config;
pub mod handler;
pub mod message;
pub mod state;

// Re-export primary types
pub use config::{load_settings, parse_settings, SiteSettings};
pub use handler::{process_message, update, UpdateAction, UpdateResult};
pub use message::Message;
pub use state::AppState;
