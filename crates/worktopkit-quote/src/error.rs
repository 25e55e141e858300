//! Error types for the quote crate.
//!
//! Only document persistence can fail; the aggregator and export records are
//! infallible.

use std::io;
use thiserror::Error;

/// Errors that can occur while loading or saving a quotation document.
#[derive(Error, Debug)]
pub enum QuoteError {
    /// The document file could not be read or written.
    #[error("I/O error: {0}")]
    IoError(#[from] io::Error),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// The file extension is not a supported document format.
    #[error("Unsupported document format: {0}")]
    UnsupportedFormat(String),

    /// The document was written by a newer version.
    #[error("Document version {found} is newer than supported version {supported}")]
    FutureVersion { found: u32, supported: u32 },

    /// The document's panel ids leave no room for new ones.
    #[error("Panel id counter exhausted: highest id {highest} exceeds {limit}")]
    IdCounterExhausted { highest: u64, limit: u64 },
}

/// Result type alias for quote operations.
pub type QuoteResult<T> = Result<T, QuoteError>;
