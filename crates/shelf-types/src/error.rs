use thiserror::Error;

/// Errors produced by type operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeError {
    #[error("unknown book status: {0:?} (expected in-stock, on-loan or returned)")]
    UnknownStatus(String),

    #[error("invalid book id: {0:?}")]
    InvalidBookId(String),
}
