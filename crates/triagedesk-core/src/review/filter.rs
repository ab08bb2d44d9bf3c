//! Client-side filtering of the fetched email list.

use crate::email::{ClassifiedEmail, EmailCategory};

/// Filter controls of the review list.
///
/// Both criteria compose with logical AND. Filtering never goes to the
/// server; it is a pure predicate over the already-fetched list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ReviewFilter {
    /// Only show emails in this category.
    pub category: Option<EmailCategory>,
    /// Only show emails flagged for human review.
    pub only_review: bool,
}

impl ReviewFilter {
    /// Creates a filter that lets everything through.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            category: None,
            only_review: false,
        }
    }

    /// Whether `email` passes every active criterion.
    #[must_use]
    pub fn matches(&self, email: &ClassifiedEmail) -> bool {
        if let Some(category) = self.category
            && email.category != category
        {
            return false;
        }
        if self.only_review && !email.requires_human_review {
            return false;
        }
        true
    }

    /// Returns the matching emails in their original order.
    #[must_use]
    pub fn apply<'a>(&self, emails: &'a [ClassifiedEmail]) -> Vec<&'a ClassifiedEmail> {
        emails.iter().filter(|email| self.matches(email)).collect()
    }

    /// Whether any criterion is set.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.category.is_some() || self.only_review
    }

    /// Category criterion as a picker choice.
    #[must_use]
    pub const fn category_choice(&self) -> CategoryChoice {
        match self.category {
            Some(category) => CategoryChoice::Only(category),
            None => CategoryChoice::All,
        }
    }

    /// Sets the category criterion from a picker choice.
    pub fn set_category_choice(&mut self, choice: CategoryChoice) {
        self.category = match choice {
            CategoryChoice::All => None,
            CategoryChoice::Only(category) => Some(category),
        };
    }
}

/// Option of the category filter picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryChoice {
    /// No category restriction.
    #[default]
    All,
    /// Restrict to one category.
    Only(EmailCategory),
}

impl CategoryChoice {
    /// Every picker option, "all" first.
    pub const ALL: [Self; 7] = [
        Self::All,
        Self::Only(EmailCategory::NegativeFeedback),
        Self::Only(EmailCategory::PositiveFeedback),
        Self::Only(EmailCategory::Warranty),
        Self::Only(EmailCategory::Refund),
        Self::Only(EmailCategory::GeneralQuestion),
        Self::Only(EmailCategory::Inconclusive),
    ];
}

impl std::fmt::Display for CategoryChoice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::All => f.write_str("Todas"),
            Self::Only(category) => f.write_str(category.label()),
        }
    }
}
