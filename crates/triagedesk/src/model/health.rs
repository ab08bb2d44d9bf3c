//! Reachability of the classification service.

/// Result of the last health check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ApiHealth {
    /// Not checked yet, or a check is running.
    #[default]
    Unknown,
    /// The service answered the ping.
    Online,
    /// The service could not be reached or answered with an error.
    Offline,
}

impl ApiHealth {
    /// Badge text.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Unknown => "API: verificando",
            Self::Online => "API: online",
            Self::Offline => "API: offline",
        }
    }
}
