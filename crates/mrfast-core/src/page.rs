//! Page identifiers for the client-side view switch

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Which content view is currently active
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PageKey {
    #[default]
    Home,
    Projects,
    About,
    Contact,
}

impl PageKey {
    /// Every page, in navigation order
    pub const ALL: [PageKey; 4] = [
        PageKey::Home,
        PageKey::Projects,
        PageKey::About,
        PageKey::Contact,
    ];

    /// Text shown on navigation and footer buttons
    pub fn label(&self) -> &'static str {
        match self {
            PageKey::Home => "Home",
            PageKey::Projects => "Projects",
            PageKey::About => "About",
            PageKey::Contact => "Contact",
        }
    }

    /// Parse a navigation label, falling back to Home for anything unknown
    pub fn from_label_or_home(label: &str) -> Self {
        label.parse().unwrap_or_else(|e| {
            tracing::debug!("{}; falling back to Home", e);
            PageKey::Home
        })
    }
}

impl FromStr for PageKey {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        PageKey::ALL
            .into_iter()
            .find(|page| page.label().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| Error::unknown_page(s))
    }
}

impl std::fmt::Display for PageKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_home() {
        assert_eq!(PageKey::default(), PageKey::Home);
    }

    #[test]
    fn test_all_is_navigation_order() {
        let labels: Vec<_> = PageKey::ALL.iter().map(|p| p.label()).collect();
        assert_eq!(labels, vec!["Home", "Projects", "About", "Contact"]);
    }

    #[test]
    fn test_parse_round_trips_every_label() {
        for page in PageKey::ALL {
            assert_eq!(page.label().parse::<PageKey>().unwrap(), page);
        }
    }

    #[test]
    fn test_parse_is_case_insensitive_and_trims() {
        assert_eq!(" contact ".parse::<PageKey>().unwrap(), PageKey::Contact);
        assert_eq!("PROJECTS".parse::<PageKey>().unwrap(), PageKey::Projects);
    }

    #[test]
    fn test_parse_unknown_label_fails() {
        let err = "Blog".parse::<PageKey>().unwrap_err();
        assert!(matches!(err, Error::UnknownPage { ref label } if label == "Blog"));
    }

    #[test]
    fn test_unknown_label_falls_back_to_home() {
        assert_eq!(PageKey::from_label_or_home("Pricing"), PageKey::Home);
        assert_eq!(PageKey::from_label_or_home(""), PageKey::Home);
        assert_eq!(PageKey::from_label_or_home("About"), PageKey::About);
    }

    #[test]
    fn test_serde_uses_lowercase_names() {
        let json = serde_json::to_string(&PageKey::Projects).unwrap();
        assert_eq!(json, "\"projects\"");
        let page: PageKey = serde_json::from_str("\"about\"").unwrap();
        assert_eq!(page, PageKey::About);
    }
}
