use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError};

use shelf_types::Book;

use crate::actions;
use crate::api::BookApi;
use crate::error::{ClientError, ClientResult};
use crate::state::{BookState, FormInput};

/// One client session: the current snapshot plus the pending gate.
///
/// Only one action may be in flight at a time. A dispatch that arrives while
/// another is outstanding fails with [`ClientError::Pending`]. A failed
/// action never replaces the snapshot; its message is kept in
/// [`Session::last_error`] for display.
pub struct Session<A> {
    api: A,
    state: Mutex<BookState>,
    pending: AtomicBool,
    last_error: Mutex<Option<String>>,
}

/// Clears the pending flag when the in-flight action finishes or is dropped.
struct PendingGuard<'a>(&'a AtomicBool);

impl Drop for PendingGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

// Snapshots are replaced whole, so a poisoned lock still holds a consistent value.
fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

impl<A: BookApi> Session<A> {
    /// Start a session from an existing snapshot.
    pub fn new(api: A, initial: BookState) -> Self {
        Self {
            api,
            state: Mutex::new(initial),
            pending: AtomicBool::new(false),
            last_error: Mutex::new(None),
        }
    }

    /// Start a session seeded from the service's full book list.
    pub async fn load(api: A) -> ClientResult<Self> {
        let books = api.list_books(None).await?;
        tracing::info!(count = books.len(), "session loaded");
        Ok(Self::new(api, BookState::new(books)))
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    /// A copy of the current snapshot.
    pub fn state(&self) -> BookState {
        lock(&self.state).clone()
    }

    /// The list a UI should render right now.
    pub fn visible_books(&self) -> Vec<Book> {
        lock(&self.state).visible_books().to_vec()
    }

    pub fn is_pending(&self) -> bool {
        self.pending.load(Ordering::Acquire)
    }

    /// Message of the most recent failed action, cleared by the next success.
    pub fn last_error(&self) -> Option<String> {
        lock(&self.last_error).clone()
    }

    /// Run `action` against the current snapshot and commit the result.
    pub async fn dispatch(&self, action: &str, form: &FormInput) -> ClientResult<BookState> {
        if self
            .pending
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            tracing::debug!(action, "dispatch rejected while another action is pending");
            return Err(ClientError::Pending);
        }
        let _guard = PendingGuard(&self.pending);

        let prev = self.state();
        match actions::dispatch(&self.api, &prev, action, form).await {
            Ok(next) => {
                *lock(&self.state) = next.clone();
                *lock(&self.last_error) = None;
                Ok(next)
            }
            Err(e) => {
                tracing::warn!(action, error = %e, "action failed; keeping previous state");
                *lock(&self.last_error) = Some(e.to_string());
                Err(e)
            }
        }
    }
}

impl<A> std::fmt::Debug for Session<A> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("state", &*lock(&self.state))
            .field("pending", &self.pending.load(Ordering::Acquire))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::time::Duration;

    use async_trait::async_trait;
    use shelf_store::BookStore;
    use shelf_types::{BookId, BookStatus};

    use crate::local::LocalBookApi;

    /// Delays every call so a second dispatch can overlap the first.
    struct SlowApi(LocalBookApi);

    #[async_trait]
    impl BookApi for SlowApi {
        async fn list_books(&self, keyword: Option<&str>) -> ClientResult<Vec<Book>> {
            tokio::time::sleep(Duration::from_millis(50)).await;
            self.0.list_books(keyword).await
        }

        async fn create_book(&self, name: &str) -> ClientResult<Book> {
            tokio::time::sleep(Duration::from_millis(50)).await;
            self.0.create_book(name).await
        }

        async fn update_status(&self, id: BookId, status: BookStatus) -> ClientResult<Book> {
            tokio::time::sleep(Duration::from_millis(50)).await;
            self.0.update_status(id, status).await
        }
    }

    fn seeded_api() -> LocalBookApi {
        LocalBookApi::new(Arc::new(BookStore::with_books([Book::in_stock(
            1,
            "React intro",
        )])))
    }

    #[tokio::test]
    async fn load_seeds_all_books() {
        let session = Session::load(LocalBookApi::new(Arc::new(BookStore::with_seed_data())))
            .await
            .unwrap();
        let state = session.state();
        assert_eq!(state.all_books.len(), 3);
        assert!(state.filtered_books.is_none());
        assert_eq!(session.visible_books(), state.all_books);
    }

    #[tokio::test]
    async fn successful_dispatch_commits_snapshot() {
        let session = Session::load(seeded_api()).await.unwrap();
        let returned = session
            .dispatch("add", &FormInput::new().with("bookName", "Go intro"))
            .await
            .unwrap();
        assert_eq!(session.state(), returned);
        assert_eq!(
            session.state().all_books[1],
            Book::new(2, "Go intro", BookStatus::InStock)
        );
        assert!(!session.is_pending());
        assert!(session.last_error().is_none());
    }

    #[tokio::test]
    async fn failed_dispatch_keeps_previous_snapshot() {
        let session = Session::load(seeded_api()).await.unwrap();
        let before = session.state();

        let err = session
            .dispatch(
                "update",
                &FormInput::new().with("id", "99").with("status", "on-loan"),
            )
            .await
            .unwrap_err();
        assert!(matches!(err, ClientError::NotFound(99)));
        assert_eq!(session.state(), before);
        assert_eq!(session.last_error().as_deref(), Some("book not found: 99"));
        assert!(!session.is_pending());

        // The next success clears the error.
        session
            .dispatch("search", &FormInput::new().with("keyword", "React"))
            .await
            .unwrap();
        assert!(session.last_error().is_none());
    }

    #[tokio::test]
    async fn unknown_action_is_surfaced_and_state_kept() {
        let session = Session::load(seeded_api()).await.unwrap();
        let before = session.state();
        let err = session.dispatch("delete", &FormInput::new()).await.unwrap_err();
        assert!(matches!(err, ClientError::InvalidAction(_)));
        assert_eq!(session.state(), before);
    }

    #[tokio::test]
    async fn second_dispatch_rejected_while_pending() {
        let session = Session::new(SlowApi(seeded_api()), BookState::default());
        let first_form = FormInput::new().with("bookName", "Go intro");
        let second_form = FormInput::new().with("bookName", "Rust intro");

        let (first, second) = tokio::join!(
            session.dispatch("add", &first_form),
            session.dispatch("add", &second_form),
        );
        assert!(first.is_ok());
        assert!(matches!(second, Err(ClientError::Pending)));
        assert_eq!(session.state().all_books.len(), 1);
        assert!(!session.is_pending());

        // The gate reopens once the first action completes.
        session.dispatch("add", &second_form).await.unwrap();
        assert_eq!(session.state().all_books.len(), 2);
    }
}
