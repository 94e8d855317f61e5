//! Site error types

/// Errors raised while configuring or starting the site.
#[derive(Debug, thiserror::Error)]
pub enum SiteError {
    /// Skin name not recognized
    #[error("Unknown skin: {0}")]
    UnknownSkin(String),

    /// Public URL must be absolute http(s)
    #[error("Invalid public URL: {0}")]
    InvalidPublicUrl(String),

    /// Leptos configuration could not be loaded
    #[error("Leptos configuration error: {0}")]
    Configuration(String),

    /// Socket bind or serve failure
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type SiteResult<T> = Result<T, SiteError>;
