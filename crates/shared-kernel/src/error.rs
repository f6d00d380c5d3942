// crates/shared-kernel/src/error.rs
use thiserror::Error;

/// Errors raised while building domain values from raw input.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DomainError {
    /// The archive name carries no `YYYY-MM` token right before `.pgn.bz2`.
    #[error("Invalid archive file name '{name}': expected '<prefix>YYYY-MM.pgn.bz2'")]
    InvalidFileName { name: String },

    #[error("Invalid month '{value}': expected YYYY-MM")]
    InvalidYearMonth { value: String },

    #[error("Invalid variant '{name}': {reason}")]
    InvalidVariant { name: String, reason: String },
}

pub type DomainResult<T> = std::result::Result<T, DomainError>;
