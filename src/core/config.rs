//! Server configuration from environment variables.
//!
//! Load configuration using `Config::from_env()` after calling `dotenvy::dotenv()`.

use super::error::SiteResult;
use super::site::{DEFAULT_PUBLIC_URL, SiteConfig};
use super::skin::Skin;

/// Server configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Skin rendered at `/`
    /// Example: crimson
    pub default_skin: Option<String>,

    /// Absolute URL the site is published under, used for canonical links
    /// Example: https://bloodchain.ng
    pub public_url: Option<String>,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Call `dotenvy::dotenv()` before this to load from `.env` file.
    pub fn from_env() -> Self {
        Self {
            default_skin: std::env::var("DEFAULT_SKIN").ok(),
            public_url: std::env::var("PUBLIC_URL").ok(),
        }
    }

    /// Check if a default skin was configured
    pub fn has_default_skin(&self) -> bool {
        self.default_skin.is_some()
    }

    /// Check if a public URL was configured
    pub fn has_public_url(&self) -> bool {
        self.public_url.is_some()
    }

    /// Resolve into the site configuration handed to the page.
    pub fn site(&self) -> SiteResult<SiteConfig> {
        let skin = match self.default_skin.as_deref() {
            Some(name) => name.parse::<Skin>()?,
            None => Skin::default(),
        };
        SiteConfig::new(
            self.public_url.as_deref().unwrap_or(DEFAULT_PUBLIC_URL),
            skin,
        )
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
