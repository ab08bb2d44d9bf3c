//! Classified email domain model.
//!
//! Records are produced by the remote classification service on submission
//! and only ever mutated through its update endpoint (category, draft reply,
//! review flag). Nothing here deletes a record.

mod category;
mod model;

pub use category::{CategoryTone, EmailCategory};
pub use model::{ClassifiedEmail, EmailId, EmailUpdate, HealthStatus, NewEmail, format_timestamp};
