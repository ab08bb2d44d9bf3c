//! Editable copy of one email's mutable fields.

use crate::email::{ClassifiedEmail, EmailCategory, EmailId, EmailUpdate};

/// Pending corrections for one email, seeded from the stored record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewDraft {
    /// Email being edited.
    pub email_id: EmailId,
    /// Corrected category.
    pub category: EmailCategory,
    /// Corrected draft reply.
    pub draft_reply: String,
    /// Corrected review flag.
    pub requires_human_review: bool,
}

impl ReviewDraft {
    /// Seeds a draft from `email`. Returns `None` when the record has no identifier.
    #[must_use]
    pub fn from_email(email: &ClassifiedEmail) -> Option<Self> {
        Some(Self {
            email_id: email.id?,
            category: email.category,
            draft_reply: email.draft_reply.clone(),
            requires_human_review: email.requires_human_review,
        })
    }

    /// Update payload carrying all three edited fields.
    #[must_use]
    pub fn to_update(&self) -> EmailUpdate {
        EmailUpdate {
            category: Some(self.category),
            draft_reply: Some(self.draft_reply.clone()),
            requires_human_review: Some(self.requires_human_review),
        }
    }

    /// Whether the draft differs from `email`.
    #[must_use]
    pub fn is_dirty(&self, email: &ClassifiedEmail) -> bool {
        self.category != email.category
            || self.draft_reply != email.draft_reply
            || self.requires_human_review != email.requires_human_review
    }
}
