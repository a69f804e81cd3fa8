//! Error types for fallible construction and checked insertion.
//!
//! The index operations themselves (`insert`, `query`) never fail; these errors
//! come from validating caller input before it reaches the tree.

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, QuadaxisError>;

#[derive(Debug, thiserror::Error)]
pub enum QuadaxisError {
    /// Non-finite coordinates or negative half extents.
    #[error("Invalid geometry: {0}")]
    InvalidGeometry(String),

    #[error("Invalid max depth {0}: must be at least 1")]
    InvalidDepth(u32),

    /// Element does not lie inside the indexed area.
    #[error("Element out of bounds: {0}")]
    OutOfBounds(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[cfg(feature = "toml")]
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),
}
