use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use shelf_types::{Book, BookId, BookStatus};

use crate::error::{StoreError, StoreResult};

/// In-memory, `Vec`-backed book store.
///
/// Records live behind a single `RwLock` and are cloned on the way out.
/// Data is lost when the store is dropped.
pub struct BookStore {
    books: RwLock<Vec<Book>>,
}

impl BookStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self {
            books: RwLock::new(Vec::new()),
        }
    }

    /// Create a store pre-populated with the given records.
    ///
    /// Ids are taken as given; callers seeding by hand are expected to keep
    /// them equal to their 1-based position so later ids stay unique.
    pub fn with_books(books: impl IntoIterator<Item = Book>) -> Self {
        Self {
            books: RwLock::new(books.into_iter().collect()),
        }
    }

    /// The demo catalogue served by a fresh `shelf serve`.
    pub fn with_seed_data() -> Self {
        Self::with_books([
            Book::new(1, "React intro", BookStatus::InStock),
            Book::new(2, "TypeScript intro", BookStatus::OnLoan),
            Book::new(3, "Next.js intro", BookStatus::Returned),
        ])
    }

    fn read_guard(&self) -> StoreResult<RwLockReadGuard<'_, Vec<Book>>> {
        self.books
            .read()
            .map_err(|e| StoreError::LockPoisoned(e.to_string()))
    }

    fn write_guard(&self) -> StoreResult<RwLockWriteGuard<'_, Vec<Book>>> {
        self.books
            .write()
            .map_err(|e| StoreError::LockPoisoned(e.to_string()))
    }

    /// Books whose name contains `keyword`, in insertion order.
    ///
    /// `None` or an empty keyword returns every book.
    pub fn list(&self, keyword: Option<&str>) -> StoreResult<Vec<Book>> {
        let books = self.read_guard()?;
        let result = match keyword.filter(|k| !k.is_empty()) {
            Some(keyword) => books.iter().filter(|b| b.matches(keyword)).cloned().collect(),
            None => books.clone(),
        };
        Ok(result)
    }

    /// Look up a single book.
    pub fn get(&self, id: BookId) -> StoreResult<Option<Book>> {
        let books = self.read_guard()?;
        Ok(books.iter().find(|b| b.id == id).cloned())
    }

    /// Shelve a new book and return the stored record.
    ///
    /// The name must not be empty or whitespace-only. Duplicate names are
    /// allowed.
    pub fn create(&self, name: &str) -> StoreResult<Book> {
        if name.trim().is_empty() {
            return Err(StoreError::InvalidInput("book name is required".into()));
        }
        let mut books = self.write_guard()?;
        let book = Book::in_stock(books.len() as BookId + 1, name);
        books.push(book.clone());
        tracing::debug!(id = book.id, name = %book.name, "book created");
        Ok(book)
    }

    /// Set the status of an existing book and return the updated record.
    pub fn update_status(&self, id: BookId, status: BookStatus) -> StoreResult<Book> {
        let mut books = self.write_guard()?;
        let book = books
            .iter_mut()
            .find(|b| b.id == id)
            .ok_or(StoreError::NotFound(id))?;
        book.status = status;
        tracing::debug!(id, %status, "book status updated");
        Ok(book.clone())
    }

    /// Number of books currently stored.
    pub fn len(&self) -> StoreResult<usize> {
        Ok(self.read_guard()?.len())
    }

    /// Returns `true` if the store holds no books.
    pub fn is_empty(&self) -> StoreResult<bool> {
        Ok(self.read_guard()?.is_empty())
    }
}

impl Default for BookStore {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for BookStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let count = self.books.read().map(|b| b.len()).ok();
        f.debug_struct("BookStore")
            .field("book_count", &count)
            .finish()
    }
}
