use async_trait::async_trait;

use shelf_types::{Book, BookId, BookStatus};

use crate::error::ClientResult;

/// Access to a book service.
///
/// Action handlers only talk to the service through this trait, so they run
/// unchanged against the HTTP API or an in-process store.
#[async_trait]
pub trait BookApi: Send + Sync {
    /// Every book, or those whose name contains `keyword`.
    async fn list_books(&self, keyword: Option<&str>) -> ClientResult<Vec<Book>>;

    /// Add a book; the service assigns its id and initial status.
    async fn create_book(&self, name: &str) -> ClientResult<Book>;

    /// Change the status of an existing book.
    async fn update_status(&self, id: BookId, status: BookStatus) -> ClientResult<Book>;
}
