//! CLI configuration — thin wrapper around `sitedeck_config` shared types.
//!
//! Re-exports the shared types and adds CLI-specific resolution that
//! respects `GlobalOpts` flag overrides (--host, --session-token, ...).

use std::time::Duration;

use secrecy::{ExposeSecret, SecretString};
use sitedeck_api::ApiClient;

use crate::cli::GlobalOpts;
use crate::error::CliError;

// ── Re-exports from shared crate ────────────────────────────────────

pub use sitedeck_config::{
    Config, Defaults, Profile, config_path, load_config_or_default, save_config,
};

// ── CLI-specific helpers ────────────────────────────────────────────

/// Resolve the active profile name from CLI flags and config.
pub fn active_profile_name(global: &GlobalOpts, config: &Config) -> String {
    global
        .profile
        .clone()
        .or_else(|| config.default_profile.clone())
        .unwrap_or_else(|| "default".into())
}

/// Build an authenticated [`ApiClient`] from config + flag overrides.
///
/// The session token (flag > env > keyring > plaintext config) is sent
/// as the platform session cookie; the CSRF token is picked up from
/// response headers afterwards.
pub fn build_api_client(global: &GlobalOpts) -> Result<ApiClient, CliError> {
    let config = load_config_or_default();
    let profile_name = active_profile_name(global, &config);
    let profile = config.profiles.get(&profile_name);

    let host = global
        .host
        .as_deref()
        .or(profile.map(|p| p.host.as_str()))
        .ok_or_else(|| CliError::NoConfig {
            path: config_path().display().to_string(),
        })?;

    let token = resolve_session_token_with_flag(profile, &profile_name, global)?;

    let timeout = profile
        .and_then(|p| p.timeout)
        .unwrap_or(global.timeout);

    let mut headers = reqwest::header::HeaderMap::new();
    let cookie = format!("sitedeck.sid={}", token.expose_secret());
    let mut value = reqwest::header::HeaderValue::from_str(&cookie).map_err(|_| {
        CliError::Validation {
            field: "session-token".into(),
            reason: "token contains characters not allowed in a cookie".into(),
        }
    })?;
    value.set_sensitive(true);
    headers.insert(reqwest::header::COOKIE, value);

    let http = reqwest::Client::builder()
        .default_headers(headers)
        .timeout(Duration::from_secs(timeout))
        .build()
        .map_err(|e| CliError::ConnectionFailed { source: e.into() })?;

    Ok(ApiClient::from_reqwest(host, http)?)
}

/// Resolve the session token with CLI flag override, then fall through
/// to the shared resolution chain.
fn resolve_session_token_with_flag(
    profile: Option<&Profile>,
    profile_name: &str,
    global: &GlobalOpts,
) -> Result<SecretString, CliError> {
    if let Some(ref token) = global.session_token {
        return Ok(SecretString::from(token.clone()));
    }
    let Some(profile) = profile else {
        return Err(CliError::NoSessionToken {
            profile: profile_name.into(),
        });
    };
    Ok(sitedeck_config::resolve_session_token(
        profile,
        profile_name,
    )?)
}
