//! Classified email records and request payloads.

use chrono::{DateTime, Local, NaiveDateTime};
use serde::{Deserialize, Serialize};

use super::EmailCategory;

/// Display format for timestamps (`dd/mm/yyyy HH:MM:SS`).
const TIMESTAMP_FORMAT: &str = "%d/%m/%Y %H:%M:%S";

/// Server-assigned identifier of a classified email.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EmailId(pub i64);

impl EmailId {
    /// Creates a new email ID.
    #[must_use]
    pub const fn new(id: i64) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for EmailId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// An email as stored by the classification service.
///
/// The client only ever holds a transient copy; the service owns the record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassifiedEmail {
    /// Identifier. The classify endpoint may return a record without one.
    #[serde(default)]
    pub id: Option<EmailId>,
    /// Sender address.
    pub from_email: String,
    /// Subject line.
    pub subject: String,
    /// Plain-text body.
    pub body: String,
    /// Assigned category.
    #[serde(default)]
    pub category: EmailCategory,
    /// Classifier confidence in `[0, 1]`.
    #[serde(default)]
    pub confidence: f64,
    /// Generated draft reply.
    #[serde(default)]
    pub draft_reply: String,
    /// Whether a human must check the result before the draft is used.
    #[serde(default)]
    pub requires_human_review: bool,
    /// Creation timestamp as sent by the server.
    #[serde(default)]
    pub created_at: Option<String>,
    /// Last update timestamp as sent by the server.
    #[serde(default)]
    pub updated_at: Option<String>,
}

impl ClassifiedEmail {
    /// Confidence as a whole percentage, clamped to `0..=100`.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn confidence_percent(&self) -> u8 {
        if self.confidence.is_nan() {
            return 0;
        }
        (self.confidence * 100.0).round().clamp(0.0, 100.0) as u8
    }

    /// Confidence formatted for display, e.g. `"87%"`.
    #[must_use]
    pub fn confidence_label(&self) -> String {
        format!("{}%", self.confidence_percent())
    }

    /// Creation time formatted in local time, or `"—"` when unknown.
    #[must_use]
    pub fn created_display(&self) -> String {
        self.created_at
            .as_deref()
            .map_or_else(|| "\u{2014}".to_string(), format_timestamp)
    }

    /// "Sim"/"Não" rendering of the review flag.
    #[must_use]
    pub const fn review_label(&self) -> &'static str {
        if self.requires_human_review {
            "Sim"
        } else {
            "Não"
        }
    }
}

/// Formats a server timestamp in local time.
///
/// Accepts RFC 3339 (`2026-01-15T19:31:43Z`) and naive ISO 8601
/// (`2026-01-15T19:31:43.123456`, assumed UTC). Anything else is returned as-is.
#[must_use]
pub fn format_timestamp(raw: &str) -> String {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return dt.with_timezone(&Local).format(TIMESTAMP_FORMAT).to_string();
    }

    for pattern in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, pattern) {
            return naive
                .and_utc()
                .with_timezone(&Local)
                .format(TIMESTAMP_FORMAT)
                .to_string();
        }
    }

    raw.to_string()
}

/// Body of a classification request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewEmail {
    /// Sender address.
    pub from_email: String,
    /// Subject line.
    pub subject: String,
    /// Plain-text body.
    pub body: String,
}

impl NewEmail {
    /// Creates a classification request.
    #[must_use]
    pub fn new(
        from_email: impl Into<String>,
        subject: impl Into<String>,
        body: impl Into<String>,
    ) -> Self {
        Self {
            from_email: from_email.into(),
            subject: subject.into(),
            body: body.into(),
        }
    }
}

/// Partial update of the mutable fields of a classified email.
///
/// Fields left as `None` are not sent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmailUpdate {
    /// New category.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<EmailCategory>,
    /// New draft reply.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub draft_reply: Option<String>,
    /// New review flag.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub requires_human_review: Option<bool>,
}

impl EmailUpdate {
    /// Whether the update carries no field at all.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.category.is_none() && self.draft_reply.is_none() && self.requires_human_review.is_none()
    }
}

/// Response of the service health endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthStatus {
    /// Echo value (`"pong"`).
    #[serde(default)]
    pub ping: String,
    /// Service status (`"ok"` when healthy).
    #[serde(default)]
    pub status: String,
}

impl HealthStatus {
    /// Whether the service reports itself healthy.
    #[must_use]
    pub fn is_ok(&self) -> bool {
        self.status.eq_ignore_ascii_case("ok")
    }
}
