//! Settings parsing and validation
//!
//! The website embeds its `site.toml` at compile time, so settings arrive as a
//! string rather than a path.

use mrfast_core::prelude::*;
use url::Url;

use super::types::{DeliveryMode, SiteSettings};

// ─────────────────────────────────────────────────────────────────────────────
// Settings Loading
// ─────────────────────────────────────────────────────────────────────────────

/// Parse and validate settings, surfacing any problem
pub fn parse_settings(content: &str) -> Result<SiteSettings> {
    let settings: SiteSettings = toml::from_str(content)?;
    settings.validate()?;
    Ok(settings)
}

/// Load settings from TOML content
///
/// Falls back to default settings if the content can't be parsed or fails
/// validation, handing back the reason. Settings are loaded before the
/// logger exists, so reporting the error is left to the caller.
pub fn load_settings(content: &str) -> (SiteSettings, Option<Error>) {
    match parse_settings(content) {
        Ok(settings) => (settings, None),
        Err(e) => (SiteSettings::default(), Some(e)),
    }
}

impl SiteSettings {
    /// Check cross-field constraints that serde can't express
    pub fn validate(&self) -> Result<()> {
        let threshold = self.behavior.scroll_threshold_px;
        if !threshold.is_finite() || threshold < 0.0 {
            return Err(Error::config_invalid(format!(
                "behavior.scroll_threshold_px must be a non-negative number, got {}",
                threshold
            )));
        }

        if self.business.email.trim().is_empty() {
            return Err(Error::config_invalid("business.email must not be empty"));
        }

        match (self.contact.delivery, self.contact.endpoint.as_deref()) {
            (DeliveryMode::Endpoint, None) => Err(Error::config_invalid(
                "contact.delivery = \"endpoint\" requires contact.endpoint",
            )),
            (_, Some(endpoint)) => validate_endpoint(endpoint),
            (DeliveryMode::Local, None) => Ok(()),
        }
    }
}

fn validate_endpoint(endpoint: &str) -> Result<()> {
    let url = Url::parse(endpoint)
        .map_err(|e| Error::config_invalid(format!("contact.endpoint {:?}: {}", endpoint, e)))?;

    match url.scheme() {
        "http" | "https" => Ok(()),
        other => Err(Error::config_invalid(format!(
            "contact.endpoint must use http or https, got {:?}",
            other
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::types::LogLevel;

    const FULL: &str = r#"
[business]
name = "Mr Fast Digital Marketing"
email = "jason@mrfastmarketing.com"
phone = "904-818-8228"
location = "Ponte Vedra, FL"
copyright = "(c) 2025 Mr Fast"

[behavior]
scroll_threshold_px = 32.0
smooth_scroll = false

[contact]
delivery = "endpoint"
endpoint = "https://forms.example.com/f/abc"

[logging]
level = "warn"
"#;

    #[test]
    fn test_parse_full_settings() {
        let settings = parse_settings(FULL).unwrap();

        assert_eq!(settings.business.location, "Ponte Vedra, FL");
        assert_eq!(settings.behavior.scroll_threshold_px, 32.0);
        assert!(!settings.behavior.smooth_scroll);
        assert_eq!(settings.contact.delivery, DeliveryMode::Endpoint);
        assert_eq!(
            settings.contact.delivery_endpoint(),
            Some("https://forms.example.com/f/abc")
        );
        assert_eq!(settings.logging.level, LogLevel::Warn);
    }

    #[test]
    fn test_empty_content_gives_defaults() {
        let settings = parse_settings("").unwrap();
        assert_eq!(settings, SiteSettings::default());
        assert_eq!(settings.business.email, "jason@mrfastmarketing.com");
        assert_eq!(settings.business.phone, "904-818-8228");
        assert_eq!(settings.behavior.scroll_threshold_px, 20.0);
        assert!(settings.behavior.smooth_scroll);
        assert_eq!(settings.contact.delivery, DeliveryMode::Local);
        assert_eq!(settings.logging.level, LogLevel::Debug);
    }

    #[test]
    fn test_partial_table_keeps_other_defaults() {
        let settings = parse_settings("[business]\nphone = \"555-0100\"\n").unwrap();
        assert_eq!(settings.business.phone, "555-0100");
        assert_eq!(settings.business.email, "jason@mrfastmarketing.com");
    }

    #[test]
    fn test_endpoint_delivery_requires_endpoint() {
        let err = parse_settings("[contact]\ndelivery = \"endpoint\"\n").unwrap_err();
        assert!(matches!(err, Error::ConfigInvalid { .. }));
    }

    #[test]
    fn test_endpoint_must_be_http() {
        let err = parse_settings(
            "[contact]\ndelivery = \"endpoint\"\nendpoint = \"ftp://forms.example.com\"\n",
        )
        .unwrap_err();
        assert!(err.to_string().contains("http or https"));

        let err = parse_settings("[contact]\nendpoint = \"not a url\"\n").unwrap_err();
        assert!(matches!(err, Error::ConfigInvalid { .. }));
    }

    #[test]
    fn test_local_delivery_ignores_endpoint() {
        let settings =
            parse_settings("[contact]\nendpoint = \"https://forms.example.com\"\n").unwrap();
        assert_eq!(settings.contact.delivery_endpoint(), None);
    }

    #[test]
    fn test_negative_threshold_rejected() {
        let err = parse_settings("[behavior]\nscroll_threshold_px = -1.0\n").unwrap_err();
        assert!(matches!(err, Error::ConfigInvalid { .. }));
    }

    #[test]
    fn test_unknown_log_level_is_parse_error() {
        let err = parse_settings("[logging]\nlevel = \"loud\"\n").unwrap_err();
        assert!(matches!(err, Error::Toml(_)));
    }

    #[test]
    fn test_load_settings_falls_back_to_defaults() {
        let (settings, err) = load_settings("this is = = not toml");
        assert_eq!(settings, SiteSettings::default());
        assert!(matches!(err, Some(Error::Toml(_))));

        let (settings, err) = load_settings("[contact]\ndelivery = \"endpoint\"\n");
        assert_eq!(settings.contact.delivery, DeliveryMode::Local);
        assert!(matches!(err, Some(Error::ConfigInvalid { .. })));
    }

    #[test]
    fn test_load_settings_keeps_valid_content() {
        let (settings, err) = load_settings(FULL);
        assert!(err.is_none());
        assert_eq!(settings.behavior.scroll_threshold_px, 32.0);
    }

    #[test]
    fn test_business_hrefs() {
        let settings = SiteSettings::default();
        assert_eq!(
            settings.business.mailto_href(),
            "mailto:jason@mrfastmarketing.com"
        );
        assert_eq!(settings.business.tel_href(), "tel:904-818-8228");
    }

    #[test]
    fn test_default_settings_round_trip_through_toml() {
        let content = toml::to_string(&SiteSettings::default()).unwrap();
        let settings = parse_settings(&content).unwrap();
        assert_eq!(settings, SiteSettings::default());
    }
}
