//! Application pages module
//!
//! - Landing page, rendered in either skin
//! - Not found page

mod landing;
mod not_found;

pub use landing::{HomePage, LandingPage};
pub use not_found::NotFoundPage;
