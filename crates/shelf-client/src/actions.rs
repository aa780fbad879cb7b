//! Action handlers: turn a submitted form into a book-service call and a new
//! [`BookState`].
//!
//! Every handler takes the previous snapshot by reference and either returns
//! a fresh snapshot or an error. On error the caller keeps the previous one.

use std::fmt;
use std::str::FromStr;

use shelf_types::{parse_book_id, BookStatus};

use crate::api::BookApi;
use crate::error::{ClientError, ClientResult};
use crate::reconcile::{reduce, ActionOutcome};
use crate::state::{BookState, FormInput};

/// Form field carrying the name of a book to add.
pub const BOOK_NAME_FIELD: &str = "bookName";
/// Form field carrying the search keyword.
pub const KEYWORD_FIELD: &str = "keyword";
/// Form field carrying the id of the book to update.
pub const ID_FIELD: &str = "id";
/// Form field carrying the new status.
pub const STATUS_FIELD: &str = "status";

/// The actions a client can dispatch.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Action {
    Add,
    Search,
    Update,
}

impl Action {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Add => "add",
            Self::Search => "search",
            Self::Update => "update",
        }
    }

    /// Run this action's handler.
    pub async fn run(
        self,
        api: &dyn BookApi,
        prev: &BookState,
        form: &FormInput,
    ) -> ClientResult<BookState> {
        match self {
            Self::Add => handle_add_book(api, prev, form).await,
            Self::Search => handle_search_books(api, prev, form).await,
            Self::Update => handle_update_book(api, prev, form).await,
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Action {
    type Err = ClientError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "add" => Ok(Self::Add),
            "search" => Ok(Self::Search),
            "update" => Ok(Self::Update),
            other => Err(ClientError::InvalidAction(other.to_string())),
        }
    }
}

/// Resolve `action` and run its handler.
pub async fn dispatch(
    api: &dyn BookApi,
    prev: &BookState,
    action: &str,
    form: &FormInput,
) -> ClientResult<BookState> {
    action.parse::<Action>()?.run(api, prev, form).await
}

/// Add the book named in `bookName`.
pub async fn handle_add_book(
    api: &dyn BookApi,
    prev: &BookState,
    form: &FormInput,
) -> ClientResult<BookState> {
    let name = form.required(BOOK_NAME_FIELD)?;
    let book = api.create_book(name).await?;
    tracing::debug!(id = book.id, "add action completed");
    Ok(reduce(prev, ActionOutcome::Added(book)))
}

/// Search for books whose name contains `keyword`.
pub async fn handle_search_books(
    api: &dyn BookApi,
    prev: &BookState,
    form: &FormInput,
) -> ClientResult<BookState> {
    let keyword = form.required(KEYWORD_FIELD)?;
    let books = api.list_books(Some(keyword)).await?;
    tracing::debug!(keyword, hits = books.len(), "search action completed");
    Ok(reduce(
        prev,
        ActionOutcome::Searched {
            keyword: keyword.to_string(),
            books,
        },
    ))
}

/// Set the status of the book named by `id`.
pub async fn handle_update_book(
    api: &dyn BookApi,
    prev: &BookState,
    form: &FormInput,
) -> ClientResult<BookState> {
    let id = parse_book_id(form.required(ID_FIELD)?)?;
    let status: BookStatus = form.required(STATUS_FIELD)?.parse()?;
    let book = api.update_status(id, status).await?;
    tracing::debug!(id, %status, "update action completed");
    Ok(reduce(prev, ActionOutcome::Updated(book)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use shelf_store::BookStore;
    use shelf_types::Book;

    use crate::local::LocalBookApi;

    fn api_with(books: Vec<Book>) -> LocalBookApi {
        LocalBookApi::new(Arc::new(BookStore::with_books(books)))
    }

    fn react() -> Book {
        Book::in_stock(1, "React intro")
    }

    #[test]
    fn action_names() {
        assert_eq!("add".parse::<Action>().unwrap(), Action::Add);
        assert_eq!("search".parse::<Action>().unwrap(), Action::Search);
        assert_eq!(Action::Update.to_string(), "update");
        assert!(matches!(
            "delete".parse::<Action>(),
            Err(ClientError::InvalidAction(a)) if a == "delete"
        ));
    }

    #[tokio::test]
    async fn add_creates_and_appends() {
        let api = api_with(vec![react()]);
        let prev = BookState::new(vec![react()]);
        let form = FormInput::new().with(BOOK_NAME_FIELD, "Go intro");

        let next = handle_add_book(&api, &prev, &form).await.unwrap();
        assert_eq!(next.all_books, vec![react(), Book::in_stock(2, "Go intro")]);
        assert!(next.filtered_books.is_none());
        assert_eq!(api.store().len().unwrap(), 2);
    }

    #[tokio::test]
    async fn add_requires_name() {
        let api = api_with(vec![react()]);
        let prev = BookState::new(vec![react()]);

        let err = handle_add_book(&api, &prev, &FormInput::new()).await.unwrap_err();
        assert!(matches!(err, ClientError::MissingField(f) if f == BOOK_NAME_FIELD));
        assert_eq!(api.store().len().unwrap(), 1);
    }

    #[tokio::test]
    async fn search_sets_filter_and_keyword() {
        let api = LocalBookApi::new(Arc::new(BookStore::with_seed_data()));
        let prev = BookState::new(api.store().list(None).unwrap());

        let hit = handle_search_books(&api, &prev, &FormInput::new().with(KEYWORD_FIELD, "React"))
            .await
            .unwrap();
        assert_eq!(hit.filtered_books, Some(vec![react()]));
        assert_eq!(hit.keyword, "React");
        assert_eq!(hit.all_books, prev.all_books);

        let miss = handle_search_books(&api, &hit, &FormInput::new().with(KEYWORD_FIELD, "zzz"))
            .await
            .unwrap();
        assert_eq!(miss.filtered_books, Some(vec![]));
        assert!(miss.visible_books().is_empty());
    }

    #[tokio::test]
    async fn search_requires_keyword() {
        let api = api_with(vec![react()]);
        let prev = BookState::new(vec![react()]);
        let form = FormInput::new().with(KEYWORD_FIELD, "");
        assert!(matches!(
            handle_search_books(&api, &prev, &form).await,
            Err(ClientError::MissingField(_))
        ));
    }

    #[tokio::test]
    async fn update_reflects_in_both_lists() {
        let api = api_with(vec![react()]);
        let prev = BookState {
            filtered_books: Some(vec![react()]),
            keyword: "React".into(),
            ..BookState::new(vec![react()])
        };
        let form = FormInput::new()
            .with(ID_FIELD, "1")
            .with(STATUS_FIELD, "on-loan");

        let next = handle_update_book(&api, &prev, &form).await.unwrap();
        let lent = react().with_status(BookStatus::OnLoan);
        assert_eq!(next.all_books, vec![lent.clone()]);
        assert_eq!(next.filtered_books, Some(vec![lent.clone()]));
        assert_eq!(api.store().get(1).unwrap(), Some(lent));
    }

    #[tokio::test]
    async fn update_unknown_id_is_not_found() {
        let api = api_with(vec![react()]);
        let prev = BookState::new(vec![react()]);
        let form = FormInput::new()
            .with(ID_FIELD, "99")
            .with(STATUS_FIELD, "on-loan");

        let err = handle_update_book(&api, &prev, &form).await.unwrap_err();
        assert!(matches!(err, ClientError::NotFound(99)));
        assert_eq!(api.store().list(None).unwrap(), vec![react()]);
    }

    #[tokio::test]
    async fn update_validates_fields_before_calling_service() {
        let api = api_with(vec![react()]);
        let prev = BookState::new(vec![react()]);

        let missing_id = FormInput::new().with(STATUS_FIELD, "on-loan");
        assert!(matches!(
            handle_update_book(&api, &prev, &missing_id).await,
            Err(ClientError::MissingField(f)) if f == ID_FIELD
        ));

        let bad_id = FormInput::new()
            .with(ID_FIELD, "one")
            .with(STATUS_FIELD, "on-loan");
        assert!(matches!(
            handle_update_book(&api, &prev, &bad_id).await,
            Err(ClientError::InvalidInput(_))
        ));

        let bad_status = FormInput::new().with(ID_FIELD, "1").with(STATUS_FIELD, "lost");
        assert!(matches!(
            handle_update_book(&api, &prev, &bad_status).await,
            Err(ClientError::InvalidInput(_))
        ));
        assert_eq!(api.store().get(1).unwrap(), Some(react()));
    }

    #[tokio::test]
    async fn dispatch_rejects_unknown_action() {
        let api = api_with(vec![react()]);
        let prev = BookState::new(vec![react()]);
        let err = dispatch(&api, &prev, "remove", &FormInput::new())
            .await
            .unwrap_err();
        assert!(matches!(err, ClientError::InvalidAction(_)));
    }

    #[tokio::test]
    async fn dispatch_routes_by_name() {
        let api = api_with(vec![react()]);
        let prev = BookState::new(vec![react()]);
        let next = dispatch(
            &api,
            &prev,
            "add",
            &FormInput::new().with(BOOK_NAME_FIELD, "Go intro"),
        )
        .await
        .unwrap();
        assert_eq!(next.all_books.len(), 2);
    }
}
