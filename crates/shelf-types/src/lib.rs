//! Foundation types for Shelf, a small book-lending tracker.
//!
//! Every other Shelf crate depends on `shelf-types`.
//!
//! # Key Types
//!
//! - [`Book`] — a stored record: id, name and lending status
//! - [`BookStatus`] — the closed set `in-stock` / `on-loan` / `returned`
//! - [`CreateBookRequest`], [`UpdateStatusRequest`], [`ErrorBody`] — HTTP bodies

pub mod book;
pub mod error;
pub mod wire;

pub use book::{parse_book_id, Book, BookId, BookStatus};
pub use error::TypeError;
pub use wire::{endpoints, CreateBookRequest, ErrorBody, ListQuery, UpdateStatusRequest};
