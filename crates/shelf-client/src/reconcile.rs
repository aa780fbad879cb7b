//! State reconciliation: the reducer that folds action results into a new
//! [`BookState`], and the rule that picks which list is visible.

use shelf_types::Book;

use crate::state::BookState;

/// What a successful action learned from the book service.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ActionOutcome {
    /// A book was created.
    Added(Book),
    /// A search ran for `keyword` and returned `books`.
    Searched { keyword: String, books: Vec<Book> },
    /// A book's status changed; carries the server's updated record.
    Updated(Book),
}

/// `filtered_books` when a search is active, otherwise `all_books`.
pub fn visible_books(state: &BookState) -> &[Book] {
    state.filtered_books.as_deref().unwrap_or(&state.all_books)
}

/// Produce the next snapshot from the previous one and an action's outcome.
///
/// Pure: `state` is left untouched.
pub fn reduce(state: &BookState, outcome: ActionOutcome) -> BookState {
    match outcome {
        ActionOutcome::Added(book) => BookState {
            all_books: appended(&state.all_books, &book),
            filtered_books: state
                .filtered_books
                .as_ref()
                .map(|filtered| appended(filtered, &book)),
            keyword: state.keyword.clone(),
        },
        ActionOutcome::Searched { keyword, books } => BookState {
            all_books: state.all_books.clone(),
            filtered_books: Some(books),
            keyword,
        },
        ActionOutcome::Updated(book) => BookState {
            all_books: replaced(&state.all_books, &book),
            filtered_books: state
                .filtered_books
                .as_ref()
                .map(|filtered| replaced(filtered, &book)),
            keyword: state.keyword.clone(),
        },
    }
}

fn appended(books: &[Book], book: &Book) -> Vec<Book> {
    let mut next = books.to_vec();
    next.push(book.clone());
    next
}

fn replaced(books: &[Book], updated: &Book) -> Vec<Book> {
    books
        .iter()
        .map(|b| if b.id == updated.id { updated.clone() } else { b.clone() })
        .collect()
}
