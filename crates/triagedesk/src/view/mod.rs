//! View components for the application.

mod classify;
mod editor;
mod email_table;
mod header;
mod notice;
mod settings;

pub use classify::view_classify;
pub use editor::{modal, view_editor};
pub use email_table::view_email_table;
pub use header::view_header;
pub use notice::view_notice;
pub use settings::view_settings;
