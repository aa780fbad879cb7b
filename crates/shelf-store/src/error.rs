use shelf_types::BookId;

/// Errors from book store operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    /// A required field was empty.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// No record carries the requested id.
    #[error("book not found: {0}")]
    NotFound(BookId),

    /// A writer panicked while holding the collection lock.
    #[error("store lock poisoned: {0}")]
    LockPoisoned(String),
}

/// Result alias for store operations.
pub type StoreResult<T> = Result<T, StoreError>;
