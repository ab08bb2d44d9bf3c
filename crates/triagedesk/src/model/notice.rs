//! Transient toast notifications.

use std::time::Duration;

/// How long a notice stays on screen.
pub const NOTICE_TIMEOUT: Duration = Duration::from_secs(3);

/// Shown when an update succeeds.
pub const SAVE_SUCCEEDED: &str = "Alterações salvas com sucesso.";
/// Shown when an update fails.
pub const SAVE_FAILED: &str = "Erro ao salvar alterações. Tente novamente.";
/// Shown when the list cannot be fetched.
pub const LOAD_FAILED: &str = "Erro ao carregar e-mails. Verifique se a API está acessível.";
/// Shown when classification fails.
pub const CLASSIFY_FAILED: &str = "Erro ao classificar o e-mail. Verifique se a API está acessível.";

/// Notice severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    /// Operation succeeded.
    Success,
    /// Operation failed.
    Error,
}

/// A toast message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    /// Sequence number used to ignore stale dismissals.
    pub id: u64,
    /// Severity.
    pub kind: NoticeKind,
    /// Localized text.
    pub text: String,
}

/// Holds at most one visible notice.
#[derive(Debug, Default)]
pub struct NoticeSlot {
    current: Option<Notice>,
    next_id: u64,
}

impl NoticeSlot {
    /// Shows a notice, replacing any visible one. Returns its id.
    pub fn show(&mut self, kind: NoticeKind, text: impl Into<String>) -> u64 {
        self.next_id += 1;
        self.current = Some(Notice {
            id: self.next_id,
            kind,
            text: text.into(),
        });
        self.next_id
    }

    /// Dismisses the notice with `id`; ignored if a newer one replaced it.
    pub fn dismiss(&mut self, id: u64) {
        if self.current.as_ref().is_some_and(|notice| notice.id == id) {
            self.current = None;
        }
    }

    /// Visible notice, if any.
    #[must_use]
    pub const fn current(&self) -> Option<&Notice> {
        self.current.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_show_replaces_previous_notice() {
        let mut slot = NoticeSlot::default();
        let first = slot.show(NoticeKind::Error, SAVE_FAILED);
        let second = slot.show(NoticeKind::Success, SAVE_SUCCEEDED);
        assert!(second > first);

        let notice = slot.current().unwrap();
        assert_eq!(notice.kind, NoticeKind::Success);
        assert_eq!(notice.text, "Alterações salvas com sucesso.");
    }

    #[test]
    fn test_stale_dismissal_is_ignored() {
        let mut slot = NoticeSlot::default();
        let first = slot.show(NoticeKind::Error, SAVE_FAILED);
        let second = slot.show(NoticeKind::Success, SAVE_SUCCEEDED);

        slot.dismiss(first);
        assert_eq!(slot.current().map(|n| n.id), Some(second));

        slot.dismiss(second);
        assert!(slot.current().is_none());
    }
}
