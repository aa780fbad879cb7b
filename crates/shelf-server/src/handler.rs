use std::sync::Arc;

use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::Json;

use shelf_store::BookStore;
use shelf_types::{
    parse_book_id, Book, BookStatus, CreateBookRequest, ListQuery, UpdateStatusRequest,
};

use crate::error::{ServerError, ServerResult};

/// State shared by every handler.
#[derive(Clone, Debug)]
pub struct AppState {
    pub store: Arc<BookStore>,
}

impl AppState {
    pub fn new(store: Arc<BookStore>) -> Self {
        Self { store }
    }
}

/// Liveness greeting.
pub async fn root_handler() -> &'static str {
    "Hello Shelf!"
}

/// `GET /books[?keyword=]`
pub async fn list_books(
    State(state): State<AppState>,
    query: Result<Query<ListQuery>, QueryRejection>,
) -> ServerResult<Json<Vec<Book>>> {
    let Query(query) = query.map_err(|e| ServerError::InvalidInput(e.body_text()))?;
    let books = state.store.list(query.keyword.as_deref())?;
    tracing::debug!(keyword = ?query.keyword, count = books.len(), "listed books");
    Ok(Json(books))
}

/// `POST /books`
pub async fn create_book(
    State(state): State<AppState>,
    payload: Result<Json<CreateBookRequest>, JsonRejection>,
) -> ServerResult<(StatusCode, Json<Book>)> {
    let Json(request) = payload.map_err(|e| ServerError::InvalidInput(e.body_text()))?;
    let book = state.store.create(&request.name)?;
    tracing::info!(id = book.id, name = %book.name, "book added");
    Ok((StatusCode::CREATED, Json(book)))
}

/// `PUT /books/:id`
pub async fn update_book(
    State(state): State<AppState>,
    raw_id: Result<Path<String>, PathRejection>,
    payload: Result<Json<UpdateStatusRequest>, JsonRejection>,
) -> ServerResult<Json<Book>> {
    let Path(raw_id) = raw_id.map_err(|e| ServerError::InvalidInput(e.body_text()))?;
    let id = parse_book_id(&raw_id)?;
    let Json(request) = payload.map_err(|e| ServerError::InvalidInput(e.body_text()))?;
    let status: BookStatus = request.status.parse()?;
    let book = state.store.update_status(id, status)?;
    tracing::info!(id, %status, "book status changed");
    Ok(Json(book))
}
