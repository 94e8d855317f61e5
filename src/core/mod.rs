//! Page state machines, scroll math and static content

mod classes;
#[cfg(feature = "ssr")]
pub mod config;
pub mod content;
pub mod email;
pub mod error;
pub mod menu;
pub mod motion;
pub mod reveal;
pub mod site;
pub mod skin;
#[cfg(test)]
mod tests;

pub use classes::{class_names, when};
pub use email::{EmailDraft, SubmitOutcome};
pub use error::{SiteError, SiteResult};
pub use menu::{MenuEvent, MenuState};
pub use motion::{Entrance, Hover, ScrollProgress, Spin, header_opacity, hero_offset};
pub use reveal::{RevealState, RevealTracker, RevealTrigger};
pub use site::{SiteConfig, ThemeMode};
pub use skin::{Palette, Skin};
