//! Review list and detail editor state.

use iced::widget::text_editor;
use triagedesk_core::{ClassifiedEmail, EmailBook, EmailCategory, EmailId, ReviewDraft, ReviewFilter};

/// State of the review list screen.
#[derive(Default)]
pub struct ReviewState {
    /// Fetched emails.
    pub book: EmailBook,
    /// Active filter controls.
    pub filter: ReviewFilter,
    /// Whether the list is being fetched.
    pub is_loading: bool,
    /// Whether a fetch has been attempted since startup.
    pub loaded_once: bool,
    /// Open detail editor, if any.
    pub editor: Option<EditorState>,
}

impl ReviewState {
    /// Creates an empty review state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks a fetch as started. Returns `false` if one is already running.
    pub const fn begin_load(&mut self) -> bool {
        if self.is_loading {
            return false;
        }
        self.is_loading = true;
        self.loaded_once = true;
        true
    }

    /// Opens the editor for `id`. Returns `false` if the email is unknown.
    pub fn open_editor(&mut self, id: EmailId) -> bool {
        self.editor = self.book.get(id).and_then(EditorState::open);
        self.editor.is_some()
    }

    /// Closes the editor, discarding unsaved edits.
    pub fn close_editor(&mut self) {
        self.editor = None;
    }

    /// Merges the record saved for `id` into the list.
    ///
    /// The editor open on `id` takes it as its seed record but keeps the
    /// corrections typed while the request was in flight.
    pub fn apply_saved(&mut self, id: EmailId, updated: ClassifiedEmail) {
        self.book.merge(updated.clone());
        if let Some(editor) = self.editor_for(id) {
            editor.is_saving = false;
            editor.email = updated;
        }
    }

    /// Clears the saving flag of the editor open on `id`; list and edits stay as they were.
    pub fn save_failed(&mut self, id: EmailId) {
        if let Some(editor) = self.editor_for(id) {
            editor.is_saving = false;
        }
    }

    fn editor_for(&mut self, id: EmailId) -> Option<&mut EditorState> {
        self.editor
            .as_mut()
            .filter(|editor| editor.draft.email_id == id)
    }
}

/// Modal editor seeded from one email.
pub struct EditorState {
    /// Record the editor was opened with, replaced by the last saved version.
    pub email: ClassifiedEmail,
    /// Pending corrections.
    pub draft: ReviewDraft,
    /// Editor backing the draft reply; `draft.draft_reply` mirrors its text.
    pub reply_editor: text_editor::Content,
    /// Whether an update request is in flight.
    pub is_saving: bool,
}

impl EditorState {
    /// Seeds an editor from `email`. Returns `None` if the record has no identifier.
    #[must_use]
    pub fn open(email: &ClassifiedEmail) -> Option<Self> {
        let draft = ReviewDraft::from_email(email)?;
        Some(Self {
            reply_editor: text_editor::Content::with_text(&draft.draft_reply),
            draft,
            email: email.clone(),
            is_saving: false,
        })
    }

    /// Sets the corrected category.
    pub const fn set_category(&mut self, category: EmailCategory) {
        self.draft.category = category;
    }

    /// Sets the corrected review flag.
    pub const fn set_requires_review(&mut self, requires_review: bool) {
        self.draft.requires_human_review = requires_review;
    }

    /// Applies an editor action to the draft reply.
    pub fn edit_reply(&mut self, action: text_editor::Action) {
        let is_edit = action.is_edit();
        self.reply_editor.perform(action);
        if is_edit {
            self.draft.draft_reply = self.reply_editor.text();
        }
    }

    /// Whether there are unsaved corrections.
    #[must_use]
    pub fn is_dirty(&self) -> bool {
        self.draft.is_dirty(&self.email)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn email(id: Option<i64>, category: EmailCategory) -> ClassifiedEmail {
        ClassifiedEmail {
            id: id.map(EmailId::new),
            from_email: "cliente@example.com".to_string(),
            subject: "Assunto".to_string(),
            body: "Corpo".to_string(),
            category,
            confidence: 0.5,
            draft_reply: "Resposta".to_string(),
            requires_human_review: true,
            created_at: None,
            updated_at: None,
        }
    }

    #[test]
    fn test_begin_load_runs_once_at_a_time() {
        let mut state = ReviewState::new();
        assert!(!state.loaded_once);
        assert!(state.begin_load());
        assert!(state.loaded_once);
        assert!(!state.begin_load());
    }

    #[test]
    fn test_editor_is_seeded_from_clicked_record() {
        let mut state = ReviewState::new();
        state.book.replace_all(vec![
            email(Some(1), EmailCategory::Refund),
            email(Some(2), EmailCategory::Warranty),
        ]);

        assert!(state.open_editor(EmailId::new(2)));
        let editor = state.editor.as_ref().unwrap();
        assert_eq!(editor.draft.email_id, EmailId::new(2));
        assert_eq!(editor.draft.category, EmailCategory::Warranty);
        assert!(!editor.is_dirty());

        assert!(!state.open_editor(EmailId::new(9)));
        assert!(state.editor.is_none());
    }

    #[test]
    fn test_editor_edits_mark_draft_dirty() {
        let record = email(Some(3), EmailCategory::Inconclusive);
        let mut editor = EditorState::open(&record).unwrap();
        editor.set_category(EmailCategory::GeneralQuestion);
        editor.set_requires_review(false);
        assert!(editor.is_dirty());

        let update = editor.draft.to_update();
        assert_eq!(update.category, Some(EmailCategory::GeneralQuestion));
        assert_eq!(update.requires_human_review, Some(false));
        assert_eq!(update.draft_reply.as_deref(), Some("Resposta"));
    }

    #[test]
    fn test_record_without_id_cannot_be_edited() {
        assert!(EditorState::open(&email(None, EmailCategory::Refund)).is_none());
    }

    #[test]
    fn test_apply_saved_ignores_other_editor() {
        let mut state = ReviewState::new();
        state.book.replace_all(vec![
            email(Some(1), EmailCategory::Refund),
            email(Some(2), EmailCategory::Warranty),
        ]);
        state.open_editor(EmailId::new(2));
        state.editor.as_mut().unwrap().is_saving = true;

        let mut saved = email(Some(1), EmailCategory::PositiveFeedback);
        saved.requires_human_review = false;
        state.apply_saved(EmailId::new(1), saved.clone());

        assert_eq!(state.book.get(EmailId::new(1)), Some(&saved));
        let editor = state.editor.as_ref().unwrap();
        assert_eq!(editor.draft.email_id, EmailId::new(2));
        assert!(editor.is_saving);
    }

    #[test]
    fn test_edits_made_while_saving_survive_the_response() {
        let mut state = ReviewState::new();
        let record = email(Some(4), EmailCategory::Refund);
        state.book.replace_all(vec![record.clone()]);
        state.open_editor(EmailId::new(4));

        let editor = state.editor.as_mut().unwrap();
        editor.is_saving = true;
        editor.set_category(EmailCategory::Warranty);
        editor.set_requires_review(false);

        state.apply_saved(EmailId::new(4), record.clone());

        let editor = state.editor.as_ref().unwrap();
        assert!(!editor.is_saving);
        assert_eq!(editor.email, record);
        assert_eq!(editor.draft.category, EmailCategory::Warranty);
        assert!(!editor.draft.requires_human_review);
        assert!(editor.is_dirty());
        assert_eq!(state.book.get(EmailId::new(4)), Some(&record));
    }

    #[test]
    fn test_save_failure_only_touches_its_own_editor() {
        let mut state = ReviewState::new();
        state.book.replace_all(vec![
            email(Some(1), EmailCategory::Refund),
            email(Some(2), EmailCategory::Warranty),
        ]);
        state.open_editor(EmailId::new(2));
        state.editor.as_mut().unwrap().is_saving = true;

        state.save_failed(EmailId::new(1));
        assert!(state.editor.as_ref().unwrap().is_saving);

        state.save_failed(EmailId::new(2));
        assert!(!state.editor.as_ref().unwrap().is_saving);
    }
}
