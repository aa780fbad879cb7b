//! In-process [`BookApi`] over a shared [`BookStore`].
//!
//! Suitable for tests and for embedding the tracker without a server.

use std::sync::Arc;

use async_trait::async_trait;

use shelf_store::BookStore;
use shelf_types::{Book, BookId, BookStatus};

use crate::api::BookApi;
use crate::error::ClientResult;

#[derive(Clone, Debug, Default)]
pub struct LocalBookApi {
    store: Arc<BookStore>,
}

impl LocalBookApi {
    pub fn new(store: Arc<BookStore>) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &Arc<BookStore> {
        &self.store
    }
}

#[async_trait]
impl BookApi for LocalBookApi {
    async fn list_books(&self, keyword: Option<&str>) -> ClientResult<Vec<Book>> {
        Ok(self.store.list(keyword)?)
    }

    async fn create_book(&self, name: &str) -> ClientResult<Book> {
        Ok(self.store.create(name)?)
    }

    async fn update_status(&self, id: BookId, status: BookStatus) -> ClientResult<Book> {
        Ok(self.store.update_status(id, status)?)
    }
}
