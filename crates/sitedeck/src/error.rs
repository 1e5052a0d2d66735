//! CLI error types with miette diagnostics.
//!
//! Maps store-layer and API errors into user-facing errors with
//! actionable help text.

use miette::Diagnostic;
use thiserror::Error;

use sitedeck_core::CoreError;

/// Exit codes.
pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const GENERAL: i32 = 1;
    pub const USAGE: i32 = 2;
    pub const AUTH: i32 = 3;
    pub const NOT_FOUND: i32 = 4;
    pub const CONNECTION: i32 = 7;
}

#[derive(Debug, Error, Diagnostic)]
pub enum CliError {
    // ── Connection ───────────────────────────────────────────────────

    #[error("Could not reach the platform API")]
    #[diagnostic(
        code(sitedeck::connection_failed),
        help("Check the host in your profile and your network connection.")
    )]
    ConnectionFailed {
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    // ── Authentication ───────────────────────────────────────────────

    #[error("Authentication failed")]
    #[diagnostic(
        code(sitedeck::auth_failed),
        help(
            "Your session token is missing or expired.\n\
             Run: sitedeck config set-token --profile {profile}\n\
             Or set the SITEDECK_SESSION_TOKEN environment variable."
        )
    )]
    AuthFailed { profile: String },

    #[error("No session token configured for profile '{profile}'")]
    #[diagnostic(
        code(sitedeck::no_session_token),
        help(
            "Store one with: sitedeck config set-token\n\
             Or set the SITEDECK_SESSION_TOKEN environment variable."
        )
    )]
    NoSessionToken { profile: String },

    // ── Resources ────────────────────────────────────────────────────

    #[error("{resource_type} '{identifier}' not found")]
    #[diagnostic(
        code(sitedeck::not_found),
        help("Run: sitedeck {list_command} to see available {resource_type}s")
    )]
    NotFound {
        resource_type: String,
        identifier: String,
        list_command: String,
    },

    // ── API ──────────────────────────────────────────────────────────

    #[error("API error: {message}")]
    #[diagnostic(code(sitedeck::api_error))]
    Api { message: String },

    // ── Validation ───────────────────────────────────────────────────

    #[error("Invalid value for {field}: {reason}")]
    #[diagnostic(code(sitedeck::validation))]
    Validation { field: String, reason: String },

    // ── Configuration ────────────────────────────────────────────────

    #[error("Profile '{name}' not found in configuration")]
    #[diagnostic(
        code(sitedeck::profile_not_found),
        help(
            "Available profiles: {available}\n\
             Create one with: sitedeck config init"
        )
    )]
    ProfileNotFound { name: String, available: String },

    #[error("Configuration file not found")]
    #[diagnostic(
        code(sitedeck::no_config),
        help(
            "Create one with: sitedeck config init\n\
             Expected at: {path}"
        )
    )]
    NoConfig { path: String },

    #[error(transparent)]
    #[diagnostic(code(sitedeck::config))]
    Config(#[from] sitedeck_config::ConfigError),

    // ── Interactive ──────────────────────────────────────────────────

    #[error("Destructive operation '{action}' requires confirmation")]
    #[diagnostic(
        code(sitedeck::confirmation_required),
        help("Use --yes (-y) to skip confirmation in non-interactive contexts.")
    )]
    NonInteractiveRequiresYes { action: String },

    // ── IO / Serialization ───────────────────────────────────────────

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("Invalid JSON payload: {0}")]
    #[diagnostic(code(sitedeck::json), help("Check the JSON contents and try again."))]
    Json(#[from] serde_json::Error),
}

impl CliError {
    /// Map this error to an exit code for process termination.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::ConnectionFailed { .. } => exit_code::CONNECTION,
            Self::AuthFailed { .. } | Self::NoSessionToken { .. } => exit_code::AUTH,
            Self::NotFound { .. } | Self::ProfileNotFound { .. } => exit_code::NOT_FOUND,
            Self::Validation { .. } | Self::NonInteractiveRequiresYes { .. } => exit_code::USAGE,
            _ => exit_code::GENERAL,
        }
    }
}

// ── CoreError → CliError mapping ─────────────────────────────────────

impl From<CoreError> for CliError {
    fn from(err: CoreError) -> Self {
        let CoreError::Api(api) = err;
        Self::from(api)
    }
}

impl From<sitedeck_api::Error> for CliError {
    fn from(err: sitedeck_api::Error) -> Self {
        match &err {
            sitedeck_api::Error::Transport(source) if source.is_connect() => {
                CliError::ConnectionFailed { source: err.into() }
            }
            _ if err.is_unauthorized() => CliError::AuthFailed {
                profile: "current".into(),
            },
            _ => CliError::Api {
                message: err.user_message(),
            },
        }
    }
}
