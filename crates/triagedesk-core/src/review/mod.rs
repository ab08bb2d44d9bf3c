//! Review list bookkeeping.
//!
//! This module provides:
//! - **Filter**: category and review-only criteria, composed with AND
//! - **Book**: the fetched list, with merge-by-identifier of updated records
//! - **Draft**: the editor's working copy of one record's mutable fields
//!
//! # Example
//!
//! ```ignore
//! use triagedesk_core::review::{EmailBook, ReviewDraft, ReviewFilter};
//!
//! let mut book = EmailBook::new();
//! book.replace_all(client.list().await?);
//!
//! let draft = ReviewDraft::from_email(&book.all()[0]).unwrap();
//! let updated = client.update(draft.email_id, &draft.to_update()).await?;
//! book.merge(updated);
//! ```

mod book;
mod draft;
mod filter;

pub use book::EmailBook;
pub use draft::ReviewDraft;
pub use filter::{CategoryChoice, ReviewFilter};
