//! Client side of Shelf.
//!
//! The client keeps an immutable [`BookState`] snapshot and advances it one
//! action at a time:
//!
//! 1. A form is dispatched through a [`Session`], which refuses new work
//!    while an earlier action is still pending.
//! 2. The matching handler in [`actions`] validates the form and calls the
//!    book service through the [`BookApi`] seam.
//! 3. The service's answer becomes an [`ActionOutcome`], and
//!    [`reconcile::reduce`] folds it into the next snapshot.
//! 4. [`reconcile::visible_books`] picks the list to render: the search
//!    result when one is active, otherwise every book.
//!
//! [`HttpBookApi`] talks to a running `shelf-server`; [`LocalBookApi`] wraps
//! an in-process store.

pub mod actions;
pub mod api;
pub mod config;
pub mod error;
pub mod http;
pub mod local;
pub mod reconcile;
pub mod session;
pub mod state;

pub use actions::{dispatch, Action};
pub use api::BookApi;
pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use http::HttpBookApi;
pub use local::LocalBookApi;
pub use reconcile::{reduce, visible_books, ActionOutcome};
pub use session::Session;
pub use state::{BookState, FormInput};
