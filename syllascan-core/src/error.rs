//! Error types for the syllascan ecosystem.

use thiserror::Error;

/// Errors that can occur in syllascan operations.
///
/// Note that a line, date, or time that fails to parse is *not* an error:
/// the scanners and normalizers report those as `None`/empty results and
/// move on. Only boundary-contract violations (caller bugs) and the
/// CLI-side file/JSON helpers surface here.
#[derive(Error, Debug)]
pub enum SyllascanError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Invalid date '{0}'. Expected YYYY-MM-DD")]
    InvalidDate(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type alias for syllascan operations.
pub type SyllascanResult<T> = Result<T, SyllascanError>;
