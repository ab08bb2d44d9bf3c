//! Screen state for the dashboard.

mod classify;
mod health;
pub mod notice;
mod review;
mod settings;

pub use classify::ClassifyState;
pub use health::ApiHealth;
pub use notice::{Notice, NoticeKind, NoticeSlot};
pub use review::{EditorState, ReviewState};
pub use settings::{API_URL_ENV, AppSettings, SettingsSection, SettingsState};
