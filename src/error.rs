//! Error types for TomeRater
//!
//! Every diagnostic the catalog can produce is a variant here, so callers can
//! branch on the kind instead of parsing text. None of them are fatal: the
//! operation that produced one had no effect.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for catalog operations
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Main error type for catalog operations
#[derive(Error, Debug)]
pub enum CatalogError {
    /// Contact identifier failed format validation
    #[error("invalid contact '{value}' (must contain '@' and end in .com, .edu, or .org)")]
    InvalidContact { value: String },

    /// A reader with this contact is already registered
    #[error("a reader with contact '{value}' already exists")]
    DuplicateContact { value: String },

    /// No reader is registered under this contact
    #[error("no reader with contact '{contact}'")]
    UnknownReader { contact: String },

    /// The work handle does not belong to this registry
    #[error("work #{id} is not part of this catalog")]
    UnknownWork { id: usize },

    /// Catalog identifier collides with an existing work
    #[error("catalog id '{catalog_id}' is a duplicate of {existing}; work has not been created")]
    DuplicateCatalogId { catalog_id: String, existing: String },

    /// Numeric rating outside the accepted range
    #[error("invalid rating {value} (must be between 0 and 4)")]
    InvalidRating { value: f64 },

    /// Top-N request with a non-positive size
    #[error("invalid ranking size {n} (must be a positive integer)")]
    InvalidRankSize { n: i64 },

    /// Ranking requested over an empty collection
    #[error("no {what} in catalog, nothing to rank")]
    NothingToRank { what: &'static str },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Catalog script could not be parsed
    #[error("invalid catalog script {file}: {message}")]
    Script { file: PathBuf, message: String },

    /// Config file could not be parsed
    #[error("invalid config {file}: {message}")]
    Config { file: PathBuf, message: String },
}
