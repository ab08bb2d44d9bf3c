//! Classification form model.

use iced::widget::text_editor;
use triagedesk_core::{ClassifiedEmail, NewEmail};

/// Sender prefilled in a fresh form.
const DEFAULT_SENDER: &str = "cliente@example.com";

/// Field values of the classification form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassifyForm {
    /// Sender address.
    pub from_email: String,
    /// Subject line.
    pub subject: String,
    /// Email body.
    pub body: String,
}

impl Default for ClassifyForm {
    fn default() -> Self {
        Self {
            from_email: DEFAULT_SENDER.to_string(),
            subject: String::new(),
            body: String::new(),
        }
    }
}

impl ClassifyForm {
    /// Returns a message for the first required field that is missing or malformed.
    ///
    /// Only presence and a single `@` in the sender are checked.
    #[must_use]
    pub fn missing_field(&self) -> Option<&'static str> {
        let sender = self.from_email.trim();
        if sender.is_empty() {
            return Some("Informe o remetente.");
        }
        if !is_plausible_address(sender) {
            return Some("Informe um e-mail de remetente válido.");
        }
        if self.subject.trim().is_empty() {
            return Some("Informe o assunto.");
        }
        if self.body.trim().is_empty() {
            return Some("Informe o corpo do e-mail.");
        }
        None
    }

    /// Request carrying the form values exactly as typed.
    #[must_use]
    pub fn to_request(&self) -> NewEmail {
        NewEmail::new(&self.from_email, &self.subject, &self.body)
    }
}

/// `local@domain` with no whitespace and a non-empty part on each side.
fn is_plausible_address(address: &str) -> bool {
    match address.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.is_empty()
                && !domain.contains('@')
                && !address.chars().any(char::is_whitespace)
        }
        None => false,
    }
}

/// State of the classification screen.
pub struct ClassifyState {
    /// Form values.
    pub form: ClassifyForm,
    /// Editor backing the body field; `form.body` mirrors its text.
    pub body_editor: text_editor::Content,
    /// Whether a classification request is in flight.
    pub is_loading: bool,
    /// Last successful result.
    pub result: Option<ClassifiedEmail>,
    /// Error or validation message to display.
    pub error: Option<String>,
}

impl Default for ClassifyState {
    fn default() -> Self {
        Self {
            form: ClassifyForm::default(),
            body_editor: text_editor::Content::new(),
            is_loading: false,
            result: None,
            error: None,
        }
    }
}

impl ClassifyState {
    /// Creates a fresh form.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Applies an editor action to the body field.
    pub fn edit_body(&mut self, action: text_editor::Action) {
        let is_edit = action.is_edit();
        self.body_editor.perform(action);
        if is_edit {
            self.form.body = self.body_editor.text();
        }
    }

    /// Validates the form and, if valid, marks a request as started.
    ///
    /// Returns the request to send, or `None` when a request is already in
    /// flight or validation failed (the message is left in `error`).
    pub fn begin_submit(&mut self) -> Option<NewEmail> {
        if self.is_loading {
            return None;
        }
        if let Some(problem) = self.form.missing_field() {
            self.error = Some(problem.to_string());
            return None;
        }

        self.is_loading = true;
        self.error = None;
        self.result = None;
        Some(self.form.to_request())
    }

    /// Records the outcome of a classification request.
    pub fn finish_submit(&mut self, outcome: Result<ClassifiedEmail, &str>) {
        self.is_loading = false;
        match outcome {
            Ok(email) => self.result = Some(email),
            Err(message) => self.error = Some(message.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ClassifyForm {
        ClassifyForm {
            from_email: "cliente@example.com".to_string(),
            subject: "Produto com defeito".to_string(),
            body: "Parou de ligar.".to_string(),
        }
    }

    #[test]
    fn test_default_form_prefills_sender() {
        let form = ClassifyForm::default();
        assert_eq!(form.from_email, "cliente@example.com");
        assert_eq!(form.missing_field(), Some("Informe o assunto."));
    }

    #[test]
    fn test_filled_form_is_valid_and_sent_verbatim() {
        let mut form = filled();
        form.body = "  Parou de ligar.\n".to_string();
        assert_eq!(form.missing_field(), None);

        let request = form.to_request();
        assert_eq!(request.from_email, "cliente@example.com");
        assert_eq!(request.subject, "Produto com defeito");
        assert_eq!(request.body, "  Parou de ligar.\n");
    }

    #[test]
    fn test_missing_fields_are_reported_in_order() {
        let mut form = filled();
        form.from_email = " ".to_string();
        assert_eq!(form.missing_field(), Some("Informe o remetente."));

        let mut form = filled();
        form.from_email = "cliente.example.com".to_string();
        assert_eq!(
            form.missing_field(),
            Some("Informe um e-mail de remetente válido.")
        );

        let mut form = filled();
        form.body = "\n\n".to_string();
        assert_eq!(form.missing_field(), Some("Informe o corpo do e-mail."));
    }

    #[test]
    fn test_address_plausibility() {
        assert!(is_plausible_address("a@b"));
        assert!(!is_plausible_address("@b"));
        assert!(!is_plausible_address("a@"));
        assert!(!is_plausible_address("a@b@c"));
        assert!(!is_plausible_address("a b@c"));
    }
}
