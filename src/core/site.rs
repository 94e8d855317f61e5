//! Site-wide configuration handed to the component tree.
//!
//! One `SiteConfig` is built at startup and passed down; nothing mutates it
//! afterwards.

use serde::Serialize;

use super::error::{SiteError, SiteResult};
use super::skin::Skin;

pub const DEFAULT_PUBLIC_URL: &str = "https://bloodchain.ng";

/// Color mode exposed to the page. This build never switches modes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        }
    }
}

/// Static page metadata plus the skin served at `/`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SiteConfig {
    pub brand: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub public_url: String,
    pub default_skin: Skin,
    pub theme: ThemeMode,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            brand: "BloodChain",
            title: "BloodChain",
            description: "Connecting Lives With Every Drop",
            public_url: DEFAULT_PUBLIC_URL.to_string(),
            default_skin: Skin::default(),
            theme: ThemeMode::default(),
        }
    }
}

impl SiteConfig {
    /// Build from a public URL and the skin to serve at `/`.
    ///
    /// The URL must be absolute http(s); a trailing slash is dropped.
    pub fn new(public_url: &str, default_skin: Skin) -> SiteResult<Self> {
        let trimmed = public_url.trim().trim_end_matches('/');
        let host = trimmed
            .strip_prefix("https://")
            .or_else(|| trimmed.strip_prefix("http://"));
        match host {
            Some(host) if !host.is_empty() && !host.contains(char::is_whitespace) => Ok(Self {
                public_url: trimmed.to_string(),
                default_skin,
                ..Self::default()
            }),
            _ => Err(SiteError::InvalidPublicUrl(public_url.to_string())),
        }
    }

    /// Absolute URL for a site path.
    pub fn canonical_url(&self, path: &str) -> String {
        if path.is_empty() || path == "/" {
            format!("{}/", self.public_url)
        } else if path.starts_with('/') {
            format!("{}{}", self.public_url, path)
        } else {
            format!("{}/{}", self.public_url, path)
        }
    }

    /// JSON-LD `Organization` record for the document head.
    pub fn structured_data(&self) -> String {
        let record = StructuredData {
            context: "https://schema.org",
            kind: "Organization",
            name: self.brand,
            description: self.description,
            url: self.canonical_url("/"),
            logo: self.canonical_url(self.default_skin.content().images.logo),
        };
        serde_json::to_string(&record).unwrap_or_default()
    }
}

#[derive(Serialize)]
struct StructuredData {
    #[serde(rename = "@context")]
    context: &'static str,
    #[serde(rename = "@type")]
    kind: &'static str,
    name: &'static str,
    description: &'static str,
    url: String,
    logo: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_metadata() {
        let config = SiteConfig::default();
        assert_eq!(config.title, "BloodChain");
        assert_eq!(config.description, "Connecting Lives With Every Drop");
        assert_eq!(config.theme, ThemeMode::Light);
        assert_eq!(config.default_skin, Skin::Crimson);
    }

    #[test]
    fn test_new_trims_trailing_slash() {
        let config = SiteConfig::new("https://example.org/", Skin::Ember).unwrap();
        assert_eq!(config.public_url, "https://example.org");
        assert_eq!(config.default_skin, Skin::Ember);
    }

    #[test]
    fn test_new_rejects_relative_and_empty() {
        for bad in ["", "example.org", "ftp://example.org", "https://", "https://a b"] {
            assert!(
                matches!(SiteConfig::new(bad, Skin::Crimson), Err(SiteError::InvalidPublicUrl(_))),
                "accepted {:?}",
                bad
            );
        }
    }

    #[test]
    fn test_canonical_url() {
        let config = SiteConfig::new("http://localhost:3000", Skin::Crimson).unwrap();
        assert_eq!(config.canonical_url("/"), "http://localhost:3000/");
        assert_eq!(config.canonical_url(""), "http://localhost:3000/");
        assert_eq!(config.canonical_url("/ember"), "http://localhost:3000/ember");
        assert_eq!(config.canonical_url("ember"), "http://localhost:3000/ember");
    }

    #[test]
    fn test_structured_data_is_valid_json() {
        let config = SiteConfig::default();
        let value: serde_json::Value = serde_json::from_str(&config.structured_data()).unwrap();
        assert_eq!(value["@context"], "https://schema.org");
        assert_eq!(value["@type"], "Organization");
        assert_eq!(value["name"], "BloodChain");
        assert_eq!(value["url"], "https://bloodchain.ng/");
    }

    #[test]
    fn test_theme_mode_str() {
        assert_eq!(ThemeMode::Light.as_str(), "light");
        assert_eq!(ThemeMode::Dark.as_str(), "dark");
    }
}
