//! # triagedesk-core
//!
//! Core logic for the `TriageDesk` email review dashboard.
//!
//! This crate provides:
//! - Domain models for classified emails and the fixed category set
//! - A REST client for the remote classification service
//! - **Review bookkeeping** - client-side filtering, merge-by-identifier of
//!   updated records, and the editor's working draft
//!
//! The remote service owns every record; this crate only holds transient copies.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![forbid(unsafe_code)]

pub mod email;
mod error;
pub mod review;
pub mod service;

pub use email::{
    CategoryTone, ClassifiedEmail, EmailCategory, EmailId, EmailUpdate, HealthStatus, NewEmail,
};
pub use error::{Error, Result};
pub use review::{CategoryChoice, EmailBook, ReviewDraft, ReviewFilter};
pub use service::{ApiClient, DEFAULT_API_URL};
