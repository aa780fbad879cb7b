//! HTTP server for Shelf.
//!
//! Exposes the in-memory [`shelf_store::BookStore`] as a small REST API:
//!
//! | Method | Path         | Success              | Failure               |
//! |--------|--------------|----------------------|-----------------------|
//! | GET    | `/books`     | 200, array of books  |                       |
//! | POST   | `/books`     | 201, created book    | 400 `{ "error": .. }` |
//! | PUT    | `/books/:id` | 200, updated book    | 400 / 404 `{ "error": .. }` |
//! | GET    | `/`          | 200, greeting        |                       |

pub mod config;
pub mod error;
pub mod handler;
pub mod router;
pub mod server;

pub use config::ServerConfig;
pub use error::{ServerError, ServerResult};
pub use handler::AppState;
pub use server::ShelfServer;
