//! Message types for application events.
//!
//! In the Elm architecture, Messages are events that trigger state changes.

use iced::widget::text_editor;
use triagedesk_core::{CategoryChoice, ClassifiedEmail, EmailCategory, EmailId, HealthStatus};

use crate::model::{AppSettings, SettingsSection};

/// Application messages (events).
#[derive(Debug, Clone)]
pub enum Message {
    // Navigation
    /// Navigate to a different view.
    NavigateTo(View),

    // Screens
    /// Classification form messages.
    Classify(ClassifyMessage),
    /// Review list and editor messages.
    Review(ReviewMessage),
    /// Settings screen messages.
    Settings(SettingsMessage),

    // Remote results
    /// Classification finished.
    EmailClassified(Result<ClassifiedEmail, String>),
    /// Email list fetched.
    EmailsLoaded(Result<Vec<ClassifiedEmail>, String>),
    /// Update of the given email finished.
    EmailSaved(EmailId, Result<ClassifiedEmail, String>),
    /// Health check finished.
    HealthChecked(Result<HealthStatus, String>),

    // Settings persistence
    /// Settings loaded.
    SettingsLoaded(AppSettings),
    /// Settings saved.
    SettingsSaved(Result<(), String>),

    // Notices
    /// Hide the notice with the given id.
    DismissNotice(u64),

    // Keyboard Events
    /// Keyboard shortcut pressed.
    KeyPressed(KeyboardAction),
    /// Event with no binding.
    Ignored,
}

/// Keyboard actions that can be triggered by shortcuts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyboardAction {
    /// Show the classification form (Ctrl+1).
    ShowClassify,
    /// Show the review list (Ctrl+2).
    ShowReview,
    /// Open settings (Ctrl+,).
    Settings,
    /// Submit the form or save the open editor (Ctrl+Enter).
    Submit,
    /// Fetch the list again (F5).
    Refresh,
    /// Close the editor or leave settings (Escape).
    Cancel,
}

/// Messages for the classification form.
#[derive(Debug, Clone)]
pub enum ClassifyMessage {
    /// Sender changed.
    FromChanged(String),
    /// Subject changed.
    SubjectChanged(String),
    /// Body editor action.
    BodyEdited(text_editor::Action),
    /// Send the form.
    Submit,
}

/// Messages for the review list and its editor.
#[derive(Debug, Clone)]
pub enum ReviewMessage {
    /// Category filter changed.
    CategoryFilterChanged(CategoryChoice),
    /// Review-only filter toggled.
    OnlyReviewToggled(bool),
    /// Fetch the list again.
    Refresh,
    /// Open the editor for an email.
    OpenEditor(EmailId),
    /// Close the editor without saving.
    CloseEditor,
    /// Corrected category picked.
    EditorCategoryChanged(EmailCategory),
    /// Review flag toggled in the editor.
    EditorReviewToggled(bool),
    /// Draft reply editor action.
    EditorDraftEdited(text_editor::Action),
    /// Save the editor.
    Save,
}

/// Messages for settings screen.
#[derive(Debug, Clone)]
pub enum SettingsMessage {
    /// Select a settings section.
    SelectSection(SettingsSection),
    /// Toggle between light and dark theme.
    ToggleTheme,
    /// API address input changed.
    ApiUrlChanged(String),
    /// Validate, store and use the typed API address.
    ApplyApiUrl,
    /// Ping the service.
    CheckHealth,
}

/// Application views/screens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    /// Classification form.
    #[default]
    Classify,
    /// Classified emails.
    Review,
    /// Settings screen.
    Settings,
}
