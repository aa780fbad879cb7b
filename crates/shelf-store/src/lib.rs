//! In-memory book storage for Shelf.
//!
//! [`BookStore`] is the single owner of the book collection. All access goes
//! through its operations, which share one `RwLock`: `create` and
//! `update_status` take it exclusively, `list` and `get` take it shared, so a
//! reader never observes a record mid-mutation.
//!
//! # Design Rules
//!
//! 1. Ids are assigned as `len + 1`. Records are never removed, so ids are
//!    unique and never reused.
//! 2. Listing preserves insertion order.
//! 3. Lock poisoning is reported as [`StoreError::LockPoisoned`], never a panic.

pub mod error;
pub mod memory;

pub use error::{StoreError, StoreResult};
pub use memory::BookStore;
