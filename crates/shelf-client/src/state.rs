use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use shelf_types::Book;

use crate::error::{ClientError, ClientResult};
use crate::reconcile;

/// Immutable snapshot of what the client knows about the catalogue.
///
/// A new snapshot replaces the old one after every successful action; a
/// snapshot itself is never edited in place.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookState {
    /// Every book, in server order.
    pub all_books: Vec<Book>,
    /// Result of the last search, or `None` if no search has run.
    pub filtered_books: Option<Vec<Book>>,
    /// Keyword of the last search.
    pub keyword: String,
}

impl BookState {
    /// Snapshot seeded from an initial fetch, with no search active.
    pub fn new(all_books: Vec<Book>) -> Self {
        Self {
            all_books,
            ..Default::default()
        }
    }

    /// The list a UI should render.
    pub fn visible_books(&self) -> &[Book] {
        reconcile::visible_books(self)
    }

    pub fn is_filtered(&self) -> bool {
        self.filtered_books.is_some()
    }
}

/// Submitted form fields, keyed by input name.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormInput {
    fields: BTreeMap<String, String>,
}

impl FormInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.fields.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields.get(key).map(String::as_str)
    }

    /// A field that must be present and not blank.
    pub fn required(&self, key: &str) -> ClientResult<&str> {
        match self.get(key) {
            Some(value) if !value.trim().is_empty() => Ok(value),
            _ => Err(ClientError::MissingField(key.to_string())),
        }
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for FormInput {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut form = Self::new();
        for (key, value) in iter {
            form.insert(key, value);
        }
        form
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_state_is_unfiltered() {
        let state = BookState::new(vec![Book::in_stock(1, "React intro")]);
        assert!(!state.is_filtered());
        assert!(state.keyword.is_empty());
        assert_eq!(state.visible_books().len(), 1);
    }

    #[test]
    fn state_json_uses_camel_case() {
        let state = BookState::new(vec![]);
        let value = serde_json::to_value(&state).unwrap();
        assert_eq!(
            value,
            serde_json::json!({ "allBooks": [], "filteredBooks": null, "keyword": "" })
        );
    }

    #[test]
    fn required_field_rules() {
        let form: FormInput = [("bookName", "Go intro"), ("keyword", "  ")]
            .into_iter()
            .collect();
        assert_eq!(form.required("bookName").unwrap(), "Go intro");
        assert!(matches!(
            form.required("keyword"),
            Err(ClientError::MissingField(k)) if k == "keyword"
        ));
        assert!(matches!(
            form.required("id"),
            Err(ClientError::MissingField(_))
        ));
    }

    #[test]
    fn builder_overwrites() {
        let form = FormInput::new().with("id", "1").with("id", "2");
        assert_eq!(form.get("id"), Some("2"));
    }
}
