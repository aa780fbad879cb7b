use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TypeError;

/// Store-assigned book identifier.
pub type BookId = u64;

/// Parse a book id from its textual form (path segment or form field).
pub fn parse_book_id(raw: &str) -> Result<BookId, TypeError> {
    raw.trim()
        .parse::<BookId>()
        .map_err(|_| TypeError::InvalidBookId(raw.to_string()))
}

/// Lending status of a book.
///
/// Serialized as the kebab-case strings `in-stock`, `on-loan` and `returned`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BookStatus {
    /// On the shelf and available to lend.
    #[default]
    InStock,
    /// Currently lent out.
    OnLoan,
    /// Brought back after a loan.
    Returned,
}

impl BookStatus {
    /// Every recognized status, in display order.
    pub const ALL: [BookStatus; 3] = [Self::InStock, Self::OnLoan, Self::Returned];

    /// The wire name of this status.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::InStock => "in-stock",
            Self::OnLoan => "on-loan",
            Self::Returned => "returned",
        }
    }
}

impl fmt::Display for BookStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BookStatus {
    type Err = TypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == s.trim())
            .ok_or_else(|| TypeError::UnknownStatus(s.to_string()))
    }
}

/// A single book record as held by the store and sent over the wire.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Book {
    pub id: BookId,
    pub name: String,
    pub status: BookStatus,
}

impl Book {
    /// Create a record with an explicit status.
    pub fn new(id: BookId, name: impl Into<String>, status: BookStatus) -> Self {
        Self {
            id,
            name: name.into(),
            status,
        }
    }

    /// Create a freshly shelved record (`in-stock`).
    pub fn in_stock(id: BookId, name: impl Into<String>) -> Self {
        Self::new(id, name, BookStatus::InStock)
    }

    /// Returns `true` if the name contains `keyword` (case-sensitive).
    ///
    /// An empty keyword matches every book.
    pub fn matches(&self, keyword: &str) -> bool {
        self.name.contains(keyword)
    }

    /// Copy of this record with a different status.
    pub fn with_status(&self, status: BookStatus) -> Self {
        Self {
            status,
            ..self.clone()
        }
    }
}

impl fmt::Display for Book {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{} {} [{}]", self.id, self.name, self.status)
    }
}
