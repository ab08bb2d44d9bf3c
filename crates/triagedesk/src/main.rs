//! `TriageDesk` - desktop dashboard for reviewing classified customer emails
//!
//! Built with Rust and the iced GUI framework on top of `triagedesk-core`.

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![forbid(unsafe_code)]

mod message;
mod model;
mod style;
mod view;

use anyhow::Context as _;
use iced::keyboard::{self, Key, Modifiers};
use iced::widget::{column, stack};
use iced::{Element, Length, Subscription, Task};
use tracing::{debug, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use triagedesk_core::{ApiClient, ClassifiedEmail, EmailId, EmailUpdate, HealthStatus, NewEmail};

use message::{ClassifyMessage, KeyboardAction, Message, ReviewMessage, SettingsMessage, View};
use model::{
    API_URL_ENV, ApiHealth, AppSettings, ClassifyState, NoticeKind, NoticeSlot, ReviewState,
    SettingsState, notice,
};
use style::widgets::palette::ThemeMode;

fn main() -> iced::Result {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "triagedesk=debug,triagedesk_core=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting TriageDesk");

    iced::application(TriageDesk::new, TriageDesk::update, TriageDesk::view)
        .title("Email Assistant - Dashboard")
        .subscription(TriageDesk::subscription)
        .run()
}

/// Main application state.
struct TriageDesk {
    /// Current view/screen.
    current_view: View,
    /// Persisted settings in effect.
    settings: AppSettings,
    /// Client for the configured service; `None` if the address is invalid.
    client: Option<ApiClient>,
    /// Result of the last ping.
    api_health: ApiHealth,
    /// Classification form.
    classify: ClassifyState,
    /// Review list and editor.
    review: ReviewState,
    /// Settings screen.
    settings_state: SettingsState,
    /// Toast notification.
    notices: NoticeSlot,
}

impl Default for TriageDesk {
    fn default() -> Self {
        let settings = AppSettings::default();
        Self {
            current_view: View::Classify,
            client: settings.client().ok(),
            settings_state: SettingsState::new(&settings),
            settings,
            api_health: ApiHealth::Unknown,
            classify: ClassifyState::new(),
            review: ReviewState::new(),
            notices: NoticeSlot::default(),
        }
    }
}

impl TriageDesk {
    /// Applies the current theme mode to the global palette.
    fn apply_theme(&self) {
        style::widgets::palette::set_theme(self.settings.theme_mode);
    }

    /// Shows a toast and schedules its dismissal.
    fn notify(&mut self, kind: NoticeKind, text: &str) -> Task<Message> {
        let id = self.notices.show(kind, text);
        Task::perform(
            async { tokio::time::sleep(notice::NOTICE_TIMEOUT).await },
            move |()| Message::DismissNotice(id),
        )
    }

    /// Rebuilds the client after the address changed.
    fn rebuild_client(&mut self) {
        self.client = match self.settings.client() {
            Ok(client) => Some(client),
            Err(e) => {
                warn!("Unusable API address {:?}: {e}", self.settings.api_base_url);
                None
            }
        };
    }

    /// Pings the service.
    fn check_health(&mut self) -> Task<Message> {
        let Some(client) = self.client.clone() else {
            self.api_health = ApiHealth::Offline;
            return Task::none();
        };
        self.api_health = ApiHealth::Unknown;
        Task::perform(ping(client), Message::HealthChecked)
    }

    /// Fetches the email list once.
    fn load_emails(&mut self) -> Task<Message> {
        let Some(client) = self.client.clone() else {
            self.review.loaded_once = true;
            return self.notify(NoticeKind::Error, notice::LOAD_FAILED);
        };
        if !self.review.begin_load() {
            return Task::none();
        }
        Task::perform(load_emails(client), Message::EmailsLoaded)
    }

    /// Sends the classification form.
    fn submit_classify(&mut self) -> Task<Message> {
        let Some(request) = self.classify.begin_submit() else {
            return Task::none();
        };
        match self.client.clone() {
            Some(client) => Task::perform(classify_email(client, request), Message::EmailClassified),
            None => {
                self.classify.finish_submit(Err(notice::CLASSIFY_FAILED));
                Task::none()
            }
        }
    }

    /// Saves the open editor.
    fn save_editor(&mut self) -> Task<Message> {
        let Some(editor) = self.review.editor.as_mut() else {
            return Task::none();
        };
        if editor.is_saving {
            return Task::none();
        }
        let Some(client) = self.client.clone() else {
            return self.notify(NoticeKind::Error, notice::SAVE_FAILED);
        };

        editor.is_saving = true;
        let id = editor.draft.email_id;
        let update = editor.draft.to_update();
        Task::perform(save_email(client, id, update), move |result| {
            Message::EmailSaved(id, result)
        })
    }
}

impl TriageDesk {
    /// Create new application instance.
    fn new() -> (Self, Task<Message>) {
        let app = Self::default();
        app.apply_theme();
        (app, Task::perform(load_settings(), Message::SettingsLoaded))
    }

    /// Update state based on message.
    #[allow(clippy::needless_pass_by_value)]
    #[allow(clippy::too_many_lines)] // Large match is idiomatic for Elm architecture
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::NavigateTo(view) => {
                self.current_view = view;
                match view {
                    View::Review if !self.review.loaded_once => return self.load_emails(),
                    View::Settings => {
                        self.settings_state = SettingsState {
                            selected_section: self.settings_state.selected_section,
                            ..SettingsState::new(&self.settings)
                        };
                    }
                    _ => {}
                }
            }
            Message::Classify(msg) => return self.handle_classify(msg),
            Message::Review(msg) => return self.handle_review(msg),
            Message::Settings(msg) => return self.handle_settings(msg),
            Message::EmailClassified(result) => match result {
                Ok(email) => {
                    info!(
                        "Classified as {} ({})",
                        email.category.as_str(),
                        email.confidence_label()
                    );
                    self.classify.finish_submit(Ok(email));
                }
                Err(e) => {
                    warn!("Classification failed: {e}");
                    self.classify.finish_submit(Err(notice::CLASSIFY_FAILED));
                }
            },
            Message::EmailsLoaded(result) => {
                self.review.is_loading = false;
                match result {
                    Ok(emails) => {
                        info!("Loaded {} classified emails", emails.len());
                        self.review.book.replace_all(emails);
                    }
                    Err(e) => {
                        warn!("Failed to load emails: {e}");
                        return self.notify(NoticeKind::Error, notice::LOAD_FAILED);
                    }
                }
            }
            Message::EmailSaved(id, result) => match result {
                Ok(updated) => {
                    debug!("Saved email {id}");
                    self.review.apply_saved(id, updated);
                    return self.notify(NoticeKind::Success, notice::SAVE_SUCCEEDED);
                }
                Err(e) => {
                    warn!("Failed to save email {id}: {e}");
                    self.review.save_failed(id);
                    return self.notify(NoticeKind::Error, notice::SAVE_FAILED);
                }
            },
            Message::HealthChecked(result) => {
                self.api_health = match result {
                    Ok(status) if status.is_ok() => ApiHealth::Online,
                    Ok(status) => {
                        warn!("Service reported status {:?}", status.status);
                        ApiHealth::Offline
                    }
                    Err(e) => {
                        debug!("Health check failed: {e}");
                        ApiHealth::Offline
                    }
                };
            }
            Message::SettingsLoaded(settings) => {
                info!("Using classification service at {}", settings.api_base_url);
                let previous = std::mem::replace(&mut self.settings, settings);
                self.apply_theme();
                self.settings_state = SettingsState::new(&self.settings);
                self.rebuild_client();

                let health = self.check_health();
                if previous.api_base_url == self.settings.api_base_url {
                    return health;
                }
                // Anything fetched so far came from the startup default address.
                self.review.loaded_once = false;
                if self.current_view == View::Review {
                    return Task::batch([health, self.load_emails()]);
                }
                return health;
            }
            Message::SettingsSaved(result) => {
                if let Err(e) = result {
                    warn!("Failed to save settings: {e}");
                }
            }
            Message::DismissNotice(id) => self.notices.dismiss(id),
            Message::KeyPressed(action) => return self.handle_keyboard(action),
            Message::Ignored => {}
        }
        Task::none()
    }

    fn handle_classify(&mut self, msg: ClassifyMessage) -> Task<Message> {
        match msg {
            ClassifyMessage::FromChanged(value) => self.classify.form.from_email = value,
            ClassifyMessage::SubjectChanged(value) => self.classify.form.subject = value,
            ClassifyMessage::BodyEdited(action) => self.classify.edit_body(action),
            ClassifyMessage::Submit => return self.submit_classify(),
        }
        Task::none()
    }

    fn handle_review(&mut self, msg: ReviewMessage) -> Task<Message> {
        match msg {
            ReviewMessage::CategoryFilterChanged(choice) => {
                self.review.filter.set_category_choice(choice);
            }
            ReviewMessage::OnlyReviewToggled(on) => self.review.filter.only_review = on,
            ReviewMessage::Refresh => return self.load_emails(),
            ReviewMessage::OpenEditor(id) => {
                if !self.review.open_editor(id) {
                    debug!("Email {id} is no longer in the list");
                }
            }
            ReviewMessage::CloseEditor => self.review.close_editor(),
            ReviewMessage::EditorCategoryChanged(category) => {
                if let Some(editor) = self.review.editor.as_mut() {
                    editor.set_category(category);
                }
            }
            ReviewMessage::EditorReviewToggled(on) => {
                if let Some(editor) = self.review.editor.as_mut() {
                    editor.set_requires_review(on);
                }
            }
            ReviewMessage::EditorDraftEdited(action) => {
                if let Some(editor) = self.review.editor.as_mut() {
                    editor.edit_reply(action);
                }
            }
            ReviewMessage::Save => return self.save_editor(),
        }
        Task::none()
    }

    fn handle_settings(&mut self, msg: SettingsMessage) -> Task<Message> {
        match msg {
            SettingsMessage::SelectSection(section) => {
                self.settings_state.selected_section = section;
            }
            SettingsMessage::ToggleTheme => {
                self.settings.theme_mode = match self.settings.theme_mode {
                    ThemeMode::Light => ThemeMode::Dark,
                    ThemeMode::Dark => ThemeMode::Light,
                };
                self.apply_theme();
                return Task::perform(save_settings(self.settings.clone()), Message::SettingsSaved);
            }
            SettingsMessage::ApiUrlChanged(value) => {
                self.settings_state.api_url_input = value;
                self.settings_state.api_url_error = None;
            }
            SettingsMessage::ApplyApiUrl => {
                let candidate = self.settings_state.api_url_input.trim().to_string();
                if let Err(e) = ApiClient::new(&candidate) {
                    debug!("Rejected API address {candidate:?}: {e}");
                    self.settings_state.api_url_error =
                        Some("Endereço inválido. Use uma URL http:// ou https://.".to_string());
                    return Task::none();
                }

                info!("API address changed to {candidate}");
                self.settings.api_base_url = candidate;
                self.settings_state.api_url_error = None;
                self.rebuild_client();
                // The list belongs to the previous service; fetch again on next visit.
                self.review.loaded_once = false;

                let save = Task::perform(save_settings(self.settings.clone()), Message::SettingsSaved);
                return Task::batch([save, self.check_health()]);
            }
            SettingsMessage::CheckHealth => return self.check_health(),
        }
        Task::none()
    }

    fn handle_keyboard(&mut self, action: KeyboardAction) -> Task<Message> {
        match action {
            KeyboardAction::ShowClassify => self.update(Message::NavigateTo(View::Classify)),
            KeyboardAction::ShowReview => self.update(Message::NavigateTo(View::Review)),
            KeyboardAction::Settings => self.update(Message::NavigateTo(View::Settings)),
            KeyboardAction::Submit => match self.current_view {
                View::Classify => self.submit_classify(),
                View::Review => self.save_editor(),
                View::Settings => Task::none(),
            },
            KeyboardAction::Refresh if self.current_view == View::Review => self.load_emails(),
            KeyboardAction::Refresh => Task::none(),
            KeyboardAction::Cancel => {
                if self.review.editor.is_some() {
                    self.review.close_editor();
                } else if self.current_view == View::Settings {
                    self.current_view = View::Classify;
                }
                Task::none()
            }
        }
    }

    /// Render the current view.
    fn view(&self) -> Element<'_, Message> {
        let header = view::view_header(self.current_view, self.api_health);

        let screen = match self.current_view {
            View::Classify => view::view_classify(&self.classify),
            View::Review => view::view_email_table(&self.review),
            View::Settings => view::view_settings(
                &self.settings_state,
                &self.settings.api_base_url,
                self.api_health,
                self.settings.theme_mode,
            ),
        };

        let mut page: Element<'_, Message> = column![header, screen]
            .width(Length::Fill)
            .height(Length::Fill)
            .into();

        if self.current_view == View::Review
            && let Some(editor) = &self.review.editor
        {
            page = view::modal(
                page,
                view::view_editor(editor),
                Message::Review(ReviewMessage::CloseEditor),
            );
        }

        if let Some(current) = self.notices.current() {
            page = stack![page, view::view_notice(current)].into();
        }

        page
    }

    /// Subscribe to keyboard events.
    fn subscription(&self) -> Subscription<Message> {
        keyboard::listen().map(|event| {
            if let keyboard::Event::KeyPressed { key, modifiers, .. } = event {
                handle_key_press(key, modifiers).unwrap_or(Message::Ignored)
            } else {
                Message::Ignored
            }
        })
    }
}

/// Handle keyboard shortcuts and return appropriate message.
fn handle_key_press(key: Key, modifiers: Modifiers) -> Option<Message> {
    let ctrl = modifiers.command(); // Ctrl on Linux/Windows, Cmd on macOS

    let action = match key {
        Key::Character(c) if ctrl && c.as_str() == "1" => KeyboardAction::ShowClassify,
        Key::Character(c) if ctrl && c.as_str() == "2" => KeyboardAction::ShowReview,
        Key::Character(c) if ctrl && c.as_str() == "," => KeyboardAction::Settings,
        Key::Named(keyboard::key::Named::Enter) if ctrl => KeyboardAction::Submit,
        Key::Named(keyboard::key::Named::F5) => KeyboardAction::Refresh,
        Key::Named(keyboard::key::Named::Escape) => KeyboardAction::Cancel,
        _ => return None,
    };
    Some(Message::KeyPressed(action))
}

/// Load application settings from file, then apply the environment override.
async fn load_settings() -> AppSettings {
    let path = AppSettings::path();

    let settings = match tokio::fs::read_to_string(&path).await {
        Ok(contents) => AppSettings::from_json(&contents),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => AppSettings::default(),
        Err(e) => {
            info!("Could not read {}: {e}", path.display());
            AppSettings::default()
        }
    };

    settings.with_api_override(std::env::var(API_URL_ENV).ok().as_deref())
}

/// Save application settings to file.
async fn save_settings(settings: AppSettings) -> Result<(), String> {
    write_settings(&settings).await.map_err(|e| format!("{e:#}"))
}

async fn write_settings(settings: &AppSettings) -> anyhow::Result<()> {
    let path = AppSettings::path();

    if let Some(dir) = path.parent() {
        tokio::fs::create_dir_all(dir)
            .await
            .with_context(|| format!("creating {}", dir.display()))?;
    }

    let contents = serde_json::to_string_pretty(settings).context("encoding settings")?;
    tokio::fs::write(&path, contents)
        .await
        .with_context(|| format!("writing {}", path.display()))?;

    info!("Settings saved to {}", path.display());
    Ok(())
}

async fn classify_email(client: ApiClient, request: NewEmail) -> Result<ClassifiedEmail, String> {
    client.classify(&request).await.map_err(|e| e.to_string())
}

async fn load_emails(client: ApiClient) -> Result<Vec<ClassifiedEmail>, String> {
    client.list().await.map_err(|e| e.to_string())
}

async fn save_email(
    client: ApiClient,
    id: EmailId,
    update: EmailUpdate,
) -> Result<ClassifiedEmail, String> {
    client.update(id, &update).await.map_err(|e| e.to_string())
}

async fn ping(client: ApiClient) -> Result<HealthStatus, String> {
    client.ping().await.map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctrl() -> Modifiers {
        Modifiers::COMMAND
    }

    fn action(message: Option<Message>) -> Option<KeyboardAction> {
        match message {
            Some(Message::KeyPressed(action)) => Some(action),
            _ => None,
        }
    }

    #[test]
    fn test_shortcuts() {
        assert_eq!(
            action(handle_key_press(Key::Character("1".into()), ctrl())),
            Some(KeyboardAction::ShowClassify)
        );
        assert_eq!(
            action(handle_key_press(Key::Character("2".into()), ctrl())),
            Some(KeyboardAction::ShowReview)
        );
        assert_eq!(
            action(handle_key_press(
                Key::Named(keyboard::key::Named::F5),
                Modifiers::empty()
            )),
            Some(KeyboardAction::Refresh)
        );
        assert_eq!(
            action(handle_key_press(
                Key::Named(keyboard::key::Named::Enter),
                ctrl()
            )),
            Some(KeyboardAction::Submit)
        );
    }

    #[test]
    fn test_plain_keys_are_not_shortcuts() {
        assert!(handle_key_press(Key::Character("1".into()), Modifiers::empty()).is_none());
        assert!(
            handle_key_press(Key::Named(keyboard::key::Named::Enter), Modifiers::empty())
                .is_none()
        );
    }

    #[test]
    fn test_unknown_email_does_not_open_editor() {
        let mut app = TriageDesk::default();
        let _ = app.update(Message::Review(ReviewMessage::OpenEditor(EmailId::new(7))));
        assert!(app.review.editor.is_none());
    }

    #[test]
    fn test_failed_save_keeps_list_and_shows_error() {
        let mut app = TriageDesk::default();
        app.review.book.replace_all(vec![sample(1), sample(2)]);
        let before = app.review.book.clone();
        let _ = app.update(Message::Review(ReviewMessage::OpenEditor(EmailId::new(2))));
        let _ = app.update(Message::Review(ReviewMessage::EditorReviewToggled(true)));

        let _ = app.update(Message::Review(ReviewMessage::Save));
        assert!(app.review.editor.as_ref().unwrap().is_saving);
        let _ = app.update(Message::EmailSaved(EmailId::new(2), Err("boom".to_string())));

        assert_eq!(app.review.book, before);
        let editor = app.review.editor.as_ref().unwrap();
        assert!(editor.draft.requires_human_review);
        assert!(!editor.is_saving);
        let shown = app.notices.current().unwrap();
        assert_eq!(shown.kind, NoticeKind::Error);
        assert_eq!(shown.text, notice::SAVE_FAILED);
    }

    #[test]
    fn test_successful_save_merges_into_list_and_editor() {
        let mut app = TriageDesk::default();
        app.review.book.replace_all(vec![sample(1), sample(2)]);
        let _ = app.update(Message::Review(ReviewMessage::OpenEditor(EmailId::new(2))));
        let _ = app.update(Message::Review(ReviewMessage::EditorCategoryChanged(
            triagedesk_core::EmailCategory::Warranty,
        )));
        let _ = app.update(Message::Review(ReviewMessage::Save));

        let mut updated = sample(2);
        updated.category = triagedesk_core::EmailCategory::Warranty;
        let _ = app.update(Message::EmailSaved(EmailId::new(2), Ok(updated.clone())));

        assert_eq!(app.review.book.get(EmailId::new(2)), Some(&updated));
        assert_eq!(app.review.book.get(EmailId::new(1)), Some(&sample(1)));
        let editor = app.review.editor.as_ref().unwrap();
        assert_eq!(editor.email, updated);
        assert!(!editor.is_saving);
        assert!(!editor.is_dirty());
        assert_eq!(
            app.notices.current().map(|n| n.text.as_str()),
            Some(notice::SAVE_SUCCEEDED)
        );
    }

    #[test]
    fn test_loaded_address_invalidates_early_fetch() {
        let mut app = TriageDesk::default();
        let _ = app.update(Message::NavigateTo(View::Review));
        let _ = app.update(Message::EmailsLoaded(Ok(vec![sample(1)])));
        let _ = app.update(Message::NavigateTo(View::Classify));
        assert!(app.review.loaded_once);

        let stored = AppSettings {
            api_base_url: "http://10.0.0.5:8000".to_string(),
            ..AppSettings::default()
        };
        let _ = app.update(Message::SettingsLoaded(stored));
        assert!(!app.review.loaded_once);

        let _ = app.update(Message::NavigateTo(View::Review));
        assert!(app.review.is_loading);
    }

    #[test]
    fn test_loaded_address_refetches_open_list() {
        let mut app = TriageDesk::default();
        let _ = app.update(Message::NavigateTo(View::Review));
        let _ = app.update(Message::EmailsLoaded(Ok(vec![sample(1)])));

        let stored = AppSettings {
            api_base_url: "http://10.0.0.5:8000".to_string(),
            ..AppSettings::default()
        };
        let _ = app.update(Message::SettingsLoaded(stored));
        assert!(app.review.is_loading);
        assert!(app.review.loaded_once);
    }

    #[test]
    fn test_same_address_keeps_fetched_list() {
        let mut app = TriageDesk::default();
        let _ = app.update(Message::NavigateTo(View::Review));
        let _ = app.update(Message::EmailsLoaded(Ok(vec![sample(1)])));

        let _ = app.update(Message::SettingsLoaded(AppSettings::default()));
        assert!(app.review.loaded_once);
        assert!(!app.review.is_loading);
    }

    #[test]
    fn test_classify_failure_shows_generic_message() {
        let mut app = TriageDesk::default();
        app.classify.form.subject = "Oi".to_string();
        app.classify.form.body = "Tudo bem?".to_string();
        let _ = app.update(Message::Classify(ClassifyMessage::Submit));
        assert!(app.classify.is_loading);

        let _ = app.update(Message::EmailClassified(Err("connection refused".to_string())));
        assert!(!app.classify.is_loading);
        assert_eq!(app.classify.error.as_deref(), Some(notice::CLASSIFY_FAILED));
        assert!(app.classify.result.is_none());
    }

    #[test]
    fn test_escape_closes_editor() {
        let mut app = TriageDesk::default();
        app.current_view = View::Review;
        app.review.book.replace_all(vec![sample(1)]);
        let _ = app.update(Message::Review(ReviewMessage::OpenEditor(EmailId::new(1))));
        assert!(app.review.editor.is_some());

        let _ = app.update(Message::KeyPressed(KeyboardAction::Cancel));
        assert!(app.review.editor.is_none());
        assert_eq!(app.current_view, View::Review);
    }

    fn sample(id: i64) -> ClassifiedEmail {
        ClassifiedEmail {
            id: Some(EmailId::new(id)),
            from_email: format!("cliente{id}@example.com"),
            subject: "Pedido".to_string(),
            body: "Quero trocar.".to_string(),
            category: triagedesk_core::EmailCategory::Refund,
            confidence: 0.8,
            draft_reply: "Olá!".to_string(),
            requires_human_review: false,
            created_at: None,
            updated_at: None,
        }
    }
}
