//! Error types for directory enumeration.
//!
//! Exact and prefix lookups report absence through `Option`; only
//! [`read_dir`](crate::PathIndex::read_dir) distinguishes why a listing is
//! unavailable.

/// Errors returned when enumerating an index path.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// No entry, stored or synthesized, exists at the path.
    #[error("no entry at {path}")]
    NotFound { path: String },

    /// The entry exists but has no children.
    #[error("not a directory: {path}")]
    NotADirectory { path: String },
}

/// Result type alias for index operations.
pub type Result<T> = std::result::Result<T, Error>;
