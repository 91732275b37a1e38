//! Errors raised when validating pager settings at the boundary.
//!
//! Navigation itself never fails; out-of-range pages are clamped. These
//! errors only come from [`crate::config::Config`], where a host hands in
//! untrusted size parameters.

/// Errors that can occur while building a pager from external settings.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Items per page must be at least one.
    #[error("items per page must be positive, got {0}")]
    InvalidPerPage(i64),

    /// The item count cannot be negative.
    #[error("total items must not be negative, got {0}")]
    InvalidTotalItems(i64),

    /// The settings document could not be parsed.
    #[error("invalid pager config: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Result type for pager configuration.
pub type Result<T> = std::result::Result<T, Error>;
