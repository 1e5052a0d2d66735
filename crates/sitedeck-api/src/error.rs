use thiserror::Error;

/// Top-level error type for the `sitedeck-api` crate.
///
/// Covers every failure mode of talking to the platform API: transport,
/// URL construction, HTTP-level rejections, and body deserialization.
/// `sitedeck-core` maps these into store state and user-facing alerts.
#[derive(Debug, Error)]
pub enum Error {
    // ── Transport ───────────────────────────────────────────────────
    /// HTTP transport error (connection refused, DNS failure, etc.)
    #[error("HTTP transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// URL parsing error.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    // ── API ─────────────────────────────────────────────────────────
    /// Non-2xx response from the platform API.
    ///
    /// `message` is extracted from a JSON `{"message": ...}` body when
    /// present, else the raw response text, else the status line.
    #[error("API error (HTTP {status}): {message}")]
    Http { status: u16, message: String },

    // ── Data ────────────────────────────────────────────────────────
    /// JSON deserialization failed, with the raw body for debugging.
    #[error("Deserialization error: {message}")]
    Deserialization { message: String, body: String },
}

impl Error {
    /// The HTTP status code, if this error came from an HTTP rejection.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Http { status, .. } => Some(*status),
            Self::Transport(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Returns `true` if this is a "not found" error.
    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }

    /// Returns `true` if the session is no longer valid and the user
    /// needs to re-authenticate.
    pub fn is_unauthorized(&self) -> bool {
        self.status() == Some(401)
    }

    /// The short, user-facing message: the server-provided message for
    /// HTTP rejections, the full display form otherwise.
    pub fn user_message(&self) -> String {
        match self {
            Self::Http { message, .. } => message.clone(),
            other => other.to_string(),
        }
    }
}
