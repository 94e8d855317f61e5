//! Site and theme context
//!
//! Provides:
//! - `SiteConfig` to every component below `App`
//! - `ThemeContext` exposing the (fixed) color mode read-only
//! - Recovery of the server's `SiteConfig` from the document during hydration

use leptos::prelude::*;

use crate::core::{SiteConfig, ThemeMode};

/// Attribute on `<html>` carrying the skin served at `/`.
pub const DEFAULT_SKIN_ATTR: &str = "data-default-skin";
/// Attribute on `<html>` carrying the public URL.
pub const PUBLIC_URL_ATTR: &str = "data-public-url";

/// Read-only theme state
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ThemeContext {
    pub mode: ThemeMode,
}

impl ThemeContext {
    pub fn is_dark(&self) -> bool {
        self.mode == ThemeMode::Dark
    }

    /// Mirror the mode onto the document element's class list
    pub fn apply_theme_class(&self) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(html) = web_sys::window()
                .and_then(|w| w.document())
                .and_then(|d| d.document_element())
            {
                let class_list = html.class_list();
                let _ = class_list.remove_2(ThemeMode::Light.as_str(), ThemeMode::Dark.as_str());
                let _ = class_list.add_1(self.mode.as_str());
            }
        }
    }
}

/// Provide site and theme context to the application
pub fn provide_site_context(config: SiteConfig) -> ThemeContext {
    let theme = ThemeContext { mode: config.theme };

    provide_context(config);
    provide_context(theme);

    #[cfg(feature = "hydrate")]
    {
        Effect::new(move |_| theme.apply_theme_class());
    }

    theme
}

/// Site configuration from anywhere in the component tree
pub fn use_site_config() -> SiteConfig {
    use_context::<SiteConfig>().unwrap_or_default()
}

/// Theme context from anywhere in the component tree
pub fn use_theme_context() -> ThemeContext {
    use_context::<ThemeContext>().unwrap_or(ThemeContext {
        mode: ThemeMode::default(),
    })
}

/// Rebuild the server's site configuration from `<html>` data attributes.
///
/// Falls back to defaults for anything missing or malformed.
#[cfg(feature = "hydrate")]
pub fn site_config_from_document() -> SiteConfig {
    use crate::core::{Skin, site::DEFAULT_PUBLIC_URL};

    let Some(html) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
    else {
        return SiteConfig::default();
    };

    let skin = html
        .get_attribute(DEFAULT_SKIN_ATTR)
        .and_then(|name| name.parse::<Skin>().ok())
        .unwrap_or_default();
    let public_url = html
        .get_attribute(PUBLIC_URL_ATTR)
        .unwrap_or_else(|| DEFAULT_PUBLIC_URL.to_string());

    SiteConfig::new(&public_url, skin).unwrap_or_else(|err| {
        leptos::logging::warn!("Falling back to default site config: {}", err);
        SiteConfig {
            default_skin: skin,
            ..SiteConfig::default()
        }
    })
}
