//! The fixed set of business categories an email can be classified into.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Category assigned to an email by the classification service.
///
/// The wire representation is a fixed upper-case string shared with the
/// server. Any value the client does not recognize is read as
/// [`EmailCategory::Inconclusive`], so a new server-side category never
/// breaks decoding of the list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum EmailCategory {
    /// Complaint or negative experience.
    NegativeFeedback,
    /// Praise or positive experience.
    PositiveFeedback,
    /// Warranty claim.
    Warranty,
    /// Buyer's remorse / refund request.
    Refund,
    /// General question.
    GeneralQuestion,
    /// The classifier could not decide.
    #[default]
    Inconclusive,
}

/// Display hint for a category, mapped to a palette color by the GUI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryTone {
    /// Red.
    Danger,
    /// Green.
    Success,
    /// Yellow/orange.
    Warning,
    /// Light blue.
    Info,
    /// Brand color.
    Primary,
    /// Gray.
    Neutral,
}

impl EmailCategory {
    /// Every category, in the order shown in pickers.
    pub const ALL: [Self; 6] = [
        Self::NegativeFeedback,
        Self::PositiveFeedback,
        Self::Warranty,
        Self::Refund,
        Self::GeneralQuestion,
        Self::Inconclusive,
    ];

    /// Parse from the wire representation. Unknown values map to `Inconclusive`.
    #[must_use]
    pub fn parse(s: &str) -> Self {
        match s.trim().to_uppercase().as_str() {
            "FEEDBACK_NEGATIVO" => Self::NegativeFeedback,
            "FEEDBACK_POSITIVO" => Self::PositiveFeedback,
            "GARANTIA" => Self::Warranty,
            "ARREPENDIMENTO_REEMBOLSO" => Self::Refund,
            "DUVIDAS_GERAIS" => Self::GeneralQuestion,
            _ => Self::Inconclusive,
        }
    }

    /// Convert to the wire representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::NegativeFeedback => "FEEDBACK_NEGATIVO",
            Self::PositiveFeedback => "FEEDBACK_POSITIVO",
            Self::Warranty => "GARANTIA",
            Self::Refund => "ARREPENDIMENTO_REEMBOLSO",
            Self::GeneralQuestion => "DUVIDAS_GERAIS",
            Self::Inconclusive => "INCONCLUSIVO",
        }
    }

    /// Human-readable label.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::NegativeFeedback => "Feedback negativo",
            Self::PositiveFeedback => "Feedback positivo",
            Self::Warranty => "Garantia",
            Self::Refund => "Arrependimento/Reembolso",
            Self::GeneralQuestion => "Dúvidas gerais",
            Self::Inconclusive => "Inconclusivo",
        }
    }

    /// Color hint for chips and badges.
    #[must_use]
    pub const fn tone(&self) -> CategoryTone {
        match self {
            Self::NegativeFeedback => CategoryTone::Danger,
            Self::PositiveFeedback => CategoryTone::Success,
            Self::Warranty => CategoryTone::Warning,
            Self::Refund => CategoryTone::Info,
            Self::GeneralQuestion => CategoryTone::Primary,
            Self::Inconclusive => CategoryTone::Neutral,
        }
    }
}

impl std::fmt::Display for EmailCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl std::str::FromStr for EmailCategory {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

impl Serialize for EmailCategory {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for EmailCategory {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        // Null or non-string values are treated like unknown strings.
        let value = serde_json::Value::deserialize(deserializer)?;
        Ok(value.as_str().map_or(Self::Inconclusive, Self::parse))
    }
}
