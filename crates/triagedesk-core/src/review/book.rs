//! In-memory copy of the fetched email list.

use tracing::debug;

use super::ReviewFilter;
use crate::email::{ClassifiedEmail, EmailId};

/// Transient, client-side copy of the emails fetched from the service.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EmailBook {
    emails: Vec<ClassifiedEmail>,
}

impl EmailBook {
    /// Creates an empty book.
    #[must_use]
    pub const fn new() -> Self {
        Self { emails: Vec::new() }
    }

    /// Replaces the whole list with a fresh fetch result.
    pub fn replace_all(&mut self, emails: Vec<ClassifiedEmail>) {
        debug!("Email book replaced with {} records", emails.len());
        self.emails = emails;
    }

    /// All emails in fetch order.
    #[must_use]
    pub fn all(&self) -> &[ClassifiedEmail] {
        &self.emails
    }

    /// Number of emails held.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.emails.len()
    }

    /// Whether the book holds no email.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.emails.is_empty()
    }

    /// Emails passing `filter`, in fetch order.
    #[must_use]
    pub fn filtered(&self, filter: &ReviewFilter) -> Vec<&ClassifiedEmail> {
        filter.apply(&self.emails)
    }

    /// Looks up an email by identifier.
    #[must_use]
    pub fn get(&self, id: EmailId) -> Option<&ClassifiedEmail> {
        self.emails.iter().find(|e| e.id == Some(id))
    }

    /// Replaces the record with the same identifier as `updated`.
    ///
    /// Every other record is left untouched. Returns `false`, changing
    /// nothing, when `updated` has no identifier or is not in the book.
    pub fn merge(&mut self, updated: ClassifiedEmail) -> bool {
        let Some(id) = updated.id else {
            return false;
        };

        match self.emails.iter_mut().find(|e| e.id == Some(id)) {
            Some(slot) => {
                *slot = updated;
                true
            }
            None => {
                debug!("Merge ignored, email {} not in book", id);
                false
            }
        }
    }
}
