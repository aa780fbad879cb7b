use thiserror::Error;

use shelf_store::StoreError;
use shelf_types::{BookId, TypeError};

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("missing required field: {0}")]
    MissingField(String),

    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("book not found: {0}")]
    NotFound(BookId),

    #[error("invalid action: {0:?}")]
    InvalidAction(String),

    #[error("network failure: {0}")]
    Network(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("another action is still pending")]
    Pending,

    #[error("internal error: {0}")]
    Internal(String),
}

impl ClientError {
    /// Returns `true` for transport failures and unexpected HTTP statuses.
    pub fn is_network_failure(&self) -> bool {
        matches!(self, Self::Network(_) | Self::Http(_))
    }

    /// Returns `true` when the input was rejected before or by the server.
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Self::MissingField(_) | Self::InvalidInput(_))
    }
}

impl From<TypeError> for ClientError {
    fn from(err: TypeError) -> Self {
        Self::InvalidInput(err.to_string())
    }
}

impl From<StoreError> for ClientError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::InvalidInput(msg) => Self::InvalidInput(msg),
            StoreError::NotFound(id) => Self::NotFound(id),
            StoreError::LockPoisoned(msg) => Self::Internal(msg),
        }
    }
}

pub type ClientResult<T> = Result<T, ClientError>;
