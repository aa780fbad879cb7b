//! Request and response bodies exchanged over the HTTP surface.

use serde::{Deserialize, Serialize};

use crate::book::BookId;

/// HTTP endpoint paths for the book service.
pub mod endpoints {
    use super::BookId;

    pub const ROOT: &str = "/";
    pub const BOOKS: &str = "/books";
    /// Route pattern for a single book, in axum path syntax.
    pub const BOOK: &str = "/books/:id";

    /// Concrete path of a single book.
    pub fn book(id: BookId) -> String {
        format!("{BOOKS}/{id}")
    }
}

/// Query string accepted by `GET /books`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListQuery {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keyword: Option<String>,
}

/// Body of `POST /books`.
///
/// A missing `name` decodes as empty so it is rejected like an empty one.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateBookRequest {
    #[serde(default)]
    pub name: String,
}

/// Body of `PUT /books/:id`.
///
/// The status travels as a plain string and is checked against the closed
/// set by the receiver, so a bad value yields an error body rather than a
/// decode rejection.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateStatusRequest {
    #[serde(default)]
    pub status: String,
}

/// Error payload returned with every non-success status.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

impl ErrorBody {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_paths() {
        assert_eq!(endpoints::BOOKS, "/books");
        assert_eq!(endpoints::book(7), "/books/7");
    }

    #[test]
    fn create_request_missing_name_is_empty() {
        let req: CreateBookRequest = serde_json::from_str("{}").unwrap();
        assert!(req.name.is_empty());
    }

    #[test]
    fn list_query_omits_absent_keyword() {
        let q = ListQuery::default();
        assert_eq!(serde_json::to_string(&q).unwrap(), "{}");
    }

    #[test]
    fn error_body_shape() {
        let body = ErrorBody::new("book not found: 99");
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            serde_json::json!({ "error": "book not found: 99" })
        );
    }
}
