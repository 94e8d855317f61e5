//! Page skins
//!
//! The landing page ships in two skins that share layout and behavior and
//! differ only in palette, copy and image assets.

use std::str::FromStr;

use super::content::{CRIMSON_CONTENT, EMBER_CONTENT, PageContent};
use super::error::SiteError;

/// Available page skins.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, derive_more::Display)]
pub enum Skin {
    #[default]
    #[display("crimson")]
    Crimson,
    #[display("ember")]
    Ember,
}

impl Skin {
    pub const ALL: [Skin; 2] = [Skin::Crimson, Skin::Ember];

    /// Route path serving this skin explicitly.
    pub fn path(self) -> &'static str {
        match self {
            Skin::Crimson => "/classic",
            Skin::Ember => "/ember",
        }
    }

    pub fn palette(self) -> Palette {
        match self {
            Skin::Crimson => Palette {
                primary: "#D7263D",
                ink: "#1F2933",
                surface: "#FFFFFF",
                sand: "#F7F1E8",
                gold: "#F2A541",
                tech: "#2F80ED",
                mint: "#27AE60",
            },
            Skin::Ember => Palette {
                primary: "#E4572E",
                ink: "#29274C",
                surface: "#FFFCF9",
                sand: "#FBEAE0",
                gold: "#F3A712",
                tech: "#3C6E71",
                mint: "#4CB944",
            },
        }
    }

    pub fn content(self) -> &'static PageContent {
        match self {
            Skin::Crimson => &CRIMSON_CONTENT,
            Skin::Ember => &EMBER_CONTENT,
        }
    }
}

impl FromStr for Skin {
    type Err = SiteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "crimson" | "classic" => Ok(Skin::Crimson),
            "ember" => Ok(Skin::Ember),
            other => Err(SiteError::UnknownSkin(other.to_string())),
        }
    }
}

/// Brand palette of a skin, exposed to the stylesheet as CSS variables.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Palette {
    pub primary: &'static str,
    pub ink: &'static str,
    pub surface: &'static str,
    pub sand: &'static str,
    pub gold: &'static str,
    pub tech: &'static str,
    pub mint: &'static str,
}

impl Palette {
    /// Inline custom properties for the page root.
    pub fn css_vars(&self) -> String {
        format!(
            "--brand-primary: {}; --brand-ink: {}; --brand-surface: {}; --brand-sand: {}; \
             --brand-gold: {}; --brand-tech: {}; --brand-mint: {};",
            self.primary, self.ink, self.surface, self.sand, self.gold, self.tech, self.mint
        )
    }
}
