pub mod icon;
pub mod image;
pub mod pages;
pub mod reveal;
pub mod scroll;
pub mod theme;

pub use icon::Icon;
pub use image::SiteImage;
pub use reveal::Reveal;
pub use scroll::use_scroll_progress;
pub use theme::{ThemeContext, provide_site_context, use_site_config, use_theme_context};
