//! Error types for the brand showcase plugin.
//!
//! This module defines the centralized error type [`ShowcaseError`] and a type alias
//! [`Result`] used throughout the crate. Every variant is recoverable: the showcase
//! turns each of them into a rendered message, a per-card fallback, or a silent
//! no-op, and none of them is allowed to escape the plugin's event loop.

use thiserror::Error;

/// The main error type for showcase operations.
///
/// # Examples
///
/// ```
/// use brand_showcase::domain::ShowcaseError;
///
/// fn fetch() -> Result<(), ShowcaseError> {
///     Err(ShowcaseError::Fetch("HTTP 404".to_string()))
/// }
///
/// assert!(fetch().unwrap_err().to_string().contains("404"));
/// ```
#[derive(Debug, Error)]
pub enum ShowcaseError {
    /// The vendor catalog could not be retrieved.
    ///
    /// Covers transport errors, non-success HTTP statuses and bodies that are
    /// not JSON at all. Rendered as a static apology message; never retried.
    #[error("Fetch error: {0}")]
    Fetch(String),

    /// The catalog parsed as JSON but is not a non-empty array.
    ///
    /// Rendered as the "no brands available" placeholder.
    #[error("Malformed payload: {0}")]
    MalformedPayload(String),

    /// A single vendor logo failed to load.
    ///
    /// Recovered by swapping the logo for a text badge on that card only.
    #[error("Image for card {card} failed to load")]
    ImageLoad {
        /// Card whose image failed.
        card: usize,
    },

    /// A pane section required by an operation is not mounted.
    ///
    /// Treated as a caller configuration error: the operation is skipped.
    #[error("Section not mounted: {0}")]
    MissingContainer(&'static str),

    /// Filesystem or I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Theme parsing or loading failed.
    #[error("Theme error: {0}")]
    Theme(String),

    /// Configuration is invalid.
    #[error("Configuration error: {0}")]
    Config(String),
}

/// A specialized `Result` type for showcase operations.
pub type Result<T> = std::result::Result<T, ShowcaseError>;
