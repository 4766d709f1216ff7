//! Site configuration
//!
//! Supports:
//! - `site.toml` - Business details, behavior, contact delivery, logging

pub mod settings;
pub mod types;

pub use settings::{load_settings, parse_settings};
pub use types::*;
