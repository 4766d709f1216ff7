//! Configuration types for the site
//!
//! Defines:
//! - `SiteSettings` - Everything read from `site.toml`
//! - Related sub-tables and enums

use serde::{Deserialize, Serialize};

use mrfast_core::DEFAULT_SCROLL_THRESHOLD_PX;

/// Site settings (site.toml)
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct SiteSettings {
    #[serde(default)]
    pub business: BusinessSettings,

    #[serde(default)]
    pub behavior: BehaviorSettings,

    #[serde(default)]
    pub contact: ContactSettings,

    #[serde(default)]
    pub logging: LoggingSettings,
}

/// Contact details and branding shown in the header, footer and Contact page
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct BusinessSettings {
    #[serde(default = "default_business_name")]
    pub name: String,

    #[serde(default = "default_email")]
    pub email: String,

    #[serde(default = "default_phone")]
    pub phone: String,

    #[serde(default = "default_location")]
    pub location: String,

    #[serde(default = "default_copyright")]
    pub copyright: String,
}

impl Default for BusinessSettings {
    fn default() -> Self {
        Self {
            name: default_business_name(),
            email: default_email(),
            phone: default_phone(),
            location: default_location(),
            copyright: default_copyright(),
        }
    }
}

impl BusinessSettings {
    pub fn mailto_href(&self) -> String {
        format!("mailto:{}", self.email)
    }

    pub fn tel_href(&self) -> String {
        format!("tel:{}", self.phone)
    }
}

fn default_business_name() -> String {
    "Mr Fast Digital Marketing".to_string()
}

fn default_email() -> String {
    "jason@mrfastmarketing.com".to_string()
}

fn default_phone() -> String {
    "904-818-8228".to_string()
}

fn default_location() -> String {
    "Ponte Vedra, FL \u{2022} Northeast Florida".to_string()
}

fn default_copyright() -> String {
    "\u{00A9} 2025 Mr Fast Digital Marketing".to_string()
}

/// Page behavior
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct BehaviorSettings {
    /// Offset in pixels past which the navigation bar turns solid
    #[serde(default = "default_scroll_threshold")]
    pub scroll_threshold_px: f64,

    /// Animate the scroll back to the top on page change
    #[serde(default = "default_true")]
    pub smooth_scroll: bool,
}

impl Default for BehaviorSettings {
    fn default() -> Self {
        Self {
            scroll_threshold_px: default_scroll_threshold(),
            smooth_scroll: true,
        }
    }
}

fn default_scroll_threshold() -> f64 {
    DEFAULT_SCROLL_THRESHOLD_PX
}

fn default_true() -> bool {
    true
}

/// Where contact form submissions go
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DeliveryMode {
    /// Keep the submission in the page (logged only)
    #[default]
    Local,
    /// POST the submission as JSON to `contact.endpoint`
    Endpoint,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct ContactSettings {
    #[serde(default)]
    pub delivery: DeliveryMode,

    /// Form backend URL, required when `delivery = "endpoint"`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<String>,
}

impl ContactSettings {
    /// Endpoint to POST to, if submissions leave the page
    pub fn delivery_endpoint(&self) -> Option<&str> {
        match self.delivery {
            DeliveryMode::Local => None,
            DeliveryMode::Endpoint => self.endpoint.as_deref(),
        }
    }
}

/// Console log verbosity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    #[default]
    Debug,
    Trace,
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LogLevel::Error => write!(f, "error"),
            LogLevel::Warn => write!(f, "warn"),
            LogLevel::Info => write!(f, "info"),
            LogLevel::Debug => write!(f, "debug"),
            LogLevel::Trace => write!(f, "trace"),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct LoggingSettings {
    #[serde(default)]
    pub level: LogLevel,
}
