//! Service layer bridging the GUI with the remote classification API.

mod client;

pub use client::{ApiClient, DEFAULT_API_URL};
