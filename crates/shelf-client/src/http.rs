//! reqwest-backed [`BookApi`] for a remote Shelf server.

use async_trait::async_trait;
use reqwest::{Response, StatusCode};

use shelf_types::{
    endpoints, Book, BookId, BookStatus, CreateBookRequest, ErrorBody, ListQuery,
    UpdateStatusRequest,
};

use crate::api::BookApi;
use crate::config::ClientConfig;
use crate::error::{ClientError, ClientResult};

/// HTTP client for the Shelf REST API.
#[derive(Clone, Debug)]
pub struct HttpBookApi {
    http_client: reqwest::Client,
    base_url: String,
}

impl HttpBookApi {
    /// Create a client for the server at `base_url` (e.g. `http://localhost:8080`).
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            http_client: reqwest::Client::new(),
            base_url,
        }
    }

    pub fn from_config(config: &ClientConfig) -> Self {
        Self::new(config.base_url.clone())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Pass successful responses through; turn the rest into typed errors.
    ///
    /// `id` names the book a 404 refers to.
    async fn check(response: Response, id: Option<BookId>) -> ClientResult<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let text = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<ErrorBody>(&text)
            .map(|body| body.error)
            .unwrap_or_else(|_| status.to_string());
        tracing::warn!(status = status.as_u16(), %message, "book service error");

        Err(match (status, id) {
            (StatusCode::NOT_FOUND, Some(id)) => ClientError::NotFound(id),
            (StatusCode::BAD_REQUEST, _) => ClientError::InvalidInput(message),
            _ => ClientError::Network(format!("{status}: {message}")),
        })
    }
}

#[async_trait]
impl BookApi for HttpBookApi {
    async fn list_books(&self, keyword: Option<&str>) -> ClientResult<Vec<Book>> {
        let query = ListQuery {
            keyword: keyword.map(str::to_string),
        };
        tracing::debug!(keyword = ?query.keyword, "fetching books");
        let response = self
            .http_client
            .get(self.url(endpoints::BOOKS))
            .query(&query)
            .send()
            .await?;
        let books = Self::check(response, None).await?.json().await?;
        Ok(books)
    }

    async fn create_book(&self, name: &str) -> ClientResult<Book> {
        let request = CreateBookRequest {
            name: name.to_string(),
        };
        let response = self
            .http_client
            .post(self.url(endpoints::BOOKS))
            .json(&request)
            .send()
            .await?;
        let book = Self::check(response, None).await?.json().await?;
        Ok(book)
    }

    async fn update_status(&self, id: BookId, status: BookStatus) -> ClientResult<Book> {
        let request = UpdateStatusRequest {
            status: status.to_string(),
        };
        let response = self
            .http_client
            .put(self.url(&endpoints::book(id)))
            .json(&request)
            .send()
            .await?;
        let book = Self::check(response, Some(id)).await?.json().await?;
        Ok(book)
    }
}
