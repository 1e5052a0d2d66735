//! Shared configuration for the sitedeck CLI.
//!
//! TOML profiles, feature flags, and session-token resolution
//! (env + keyring + plaintext). The CLI adds flag-aware wrappers on top.

use std::collections::HashMap;
use std::path::PathBuf;

use directories::ProjectDirs;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use secrecy::SecretString;
use serde::{Deserialize, Serialize};
use thiserror::Error;

// ── Error ───────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid {field}: {reason}")]
    Validation { field: String, reason: String },

    #[error("no session token configured for profile '{profile}'")]
    NoSessionToken { profile: String },

    #[error("unknown profile '{profile}'")]
    UnknownProfile { profile: String },

    #[error("failed to serialize config: {0}")]
    Serialization(#[from] toml::ser::Error),

    #[error("config loading failed: {0}")]
    Figment(Box<figment::Error>),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<figment::Error> for ConfigError {
    fn from(err: figment::Error) -> Self {
        Self::Figment(Box::new(err))
    }
}

// ── TOML config structs ─────────────────────────────────────────────

/// Top-level TOML configuration.
#[derive(Debug, Deserialize, Serialize)]
pub struct Config {
    /// Default profile name.
    pub default_profile: Option<String>,

    /// Global defaults.
    #[serde(default)]
    pub defaults: Defaults,

    /// Named platform profiles (e.g. production / staging).
    #[serde(default)]
    pub profiles: HashMap<String, Profile>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_profile: Some("default".into()),
            defaults: Defaults::default(),
            profiles: HashMap::new(),
        }
    }
}

#[derive(Debug, Deserialize, Serialize)]
pub struct Defaults {
    #[serde(default = "default_output")]
    pub output: String,

    #[serde(default = "default_color")]
    pub color: String,

    #[serde(default = "default_timeout")]
    pub timeout: u64,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            output: default_output(),
            color: default_color(),
            timeout: default_timeout(),
        }
    }
}

fn default_output() -> String {
    "table".into()
}
fn default_color() -> String {
    "auto".into()
}
fn default_timeout() -> u64 {
    30
}

/// A named platform profile.
#[derive(Debug, Deserialize, Serialize)]
pub struct Profile {
    /// Platform API host (e.g. "https://pages.example.gov").
    pub host: String,

    /// Domain previews and demo sites are served under.
    pub proxy_domain: Option<String>,

    /// Product variant label shown in output ("pages" unless branded).
    #[serde(default = "default_product")]
    pub product: String,

    /// Session token (plaintext — prefer keyring or env var).
    pub session_token: Option<String>,

    /// Environment variable name containing the session token.
    pub session_token_env: Option<String>,

    /// Override timeout.
    pub timeout: Option<u64>,

    /// Feature flags (the platform's FEATURE_* switches).
    #[serde(default)]
    pub features: HashMap<String, bool>,
}

fn default_product() -> String {
    "pages".into()
}

impl Profile {
    /// Whether a feature flag is enabled. Unknown flags read as off.
    pub fn feature(&self, name: &str) -> bool {
        self.features.get(name).copied().unwrap_or(false)
    }
}

// ── Config file path ────────────────────────────────────────────────

/// Resolve the config file path via XDG / platform conventions.
pub fn config_path() -> PathBuf {
    ProjectDirs::from("com", "sitedeck", "sitedeck").map_or_else(
        || {
            let mut p = dirs_fallback();
            p.push("config.toml");
            p
        },
        |dirs| dirs.config_dir().join("config.toml"),
    )
}

fn dirs_fallback() -> PathBuf {
    let mut p = PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".into()));
    p.push(".config");
    p.push("sitedeck");
    p
}

// ── Config loading ──────────────────────────────────────────────────

/// Load the full Config from file + environment.
pub fn load_config() -> Result<Config, ConfigError> {
    load_config_from(&config_path())
}

/// Load from an explicit path, merging `SITEDECK_*` env overrides.
pub fn load_config_from(path: &std::path::Path) -> Result<Config, ConfigError> {
    let figment = Figment::new()
        .merge(Serialized::defaults(Config::default()))
        .merge(Toml::file(path))
        .merge(Env::prefixed("SITEDECK_").split("_"));

    let config: Config = figment.extract()?;
    Ok(config)
}

/// Load config, returning a default if the file doesn't exist.
pub fn load_config_or_default() -> Config {
    load_config().unwrap_or_default()
}

/// The profile to use: an explicit name, or the configured default.
pub fn select_profile<'a>(
    config: &'a Config,
    name: Option<&'a str>,
) -> Result<(&'a str, &'a Profile), ConfigError> {
    let name = name
        .or(config.default_profile.as_deref())
        .unwrap_or("default");
    config
        .profiles
        .get(name)
        .map(|profile| (name, profile))
        .ok_or_else(|| ConfigError::UnknownProfile {
            profile: name.into(),
        })
}

// ── Config saving ───────────────────────────────────────────────────

/// Serialize config to TOML and write to the canonical config path.
pub fn save_config(cfg: &Config) -> Result<(), ConfigError> {
    let path = config_path();
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let toml_str = toml::to_string_pretty(cfg)?;
    std::fs::write(&path, toml_str)?;
    Ok(())
}

// ── Session-token resolution ────────────────────────────────────────

/// Resolve the session token for a profile.
///
/// Chain: the profile's `session_token_env` indirection, then the OS
/// keyring, then plaintext in the config file.
pub fn resolve_session_token(
    profile: &Profile,
    profile_name: &str,
) -> Result<SecretString, ConfigError> {
    if let Some(ref env_name) = profile.session_token_env {
        if let Ok(val) = std::env::var(env_name) {
            return Ok(SecretString::from(val));
        }
    }

    if let Ok(entry) = keyring::Entry::new("sitedeck", &format!("{profile_name}/session")) {
        if let Ok(secret) = entry.get_password() {
            return Ok(SecretString::from(secret));
        }
    }

    if let Some(ref token) = profile.session_token {
        return Ok(SecretString::from(token.clone()));
    }

    Err(ConfigError::NoSessionToken {
        profile: profile_name.into(),
    })
}

/// Validate and parse a profile's host URL.
pub fn profile_host(profile: &Profile) -> Result<url::Url, ConfigError> {
    profile.host.parse().map_err(|_| ConfigError::Validation {
        field: "host".into(),
        reason: format!("invalid URL: {}", profile.host),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::ExposeSecret;

    fn profile(host: &str) -> Profile {
        Profile {
            host: host.into(),
            proxy_domain: None,
            product: default_product(),
            session_token: None,
            session_token_env: None,
            timeout: None,
            features: HashMap::new(),
        }
    }

    #[test]
    fn toml_file_round_trips_through_figment() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            r#"
default_profile = "prod"

[profiles.prod]
host = "https://pages.example.gov"
proxy_domain = "sites.example.gov"

[profiles.prod.features]
build_tasks = true
"#,
        )
        .expect("write config");

        let config = load_config_from(&path).expect("load");
        let (name, profile) = select_profile(&config, None).expect("profile");
        assert_eq!(name, "prod");
        assert_eq!(profile.host, "https://pages.example.gov");
        assert!(profile.feature("build_tasks"));
        assert!(!profile.feature("unknown_flag"));
    }

    #[test]
    fn unknown_profile_is_an_error() {
        let config = Config::default();
        let err = select_profile(&config, Some("nope"));
        assert!(matches!(err, Err(ConfigError::UnknownProfile { .. })));
    }

    #[test]
    fn plaintext_token_is_last_resort() {
        let mut p = profile("https://pages.example.gov");
        p.session_token = Some("tok-123".into());
        let token = resolve_session_token(&p, "test-profile-without-keyring")
            .expect("plaintext token resolves");
        assert_eq!(token.expose_secret(), "tok-123");
    }

    #[test]
    fn missing_token_reports_the_profile() {
        let p = profile("https://pages.example.gov");
        let err = resolve_session_token(&p, "empty-profile");
        assert!(matches!(err, Err(ConfigError::NoSessionToken { .. })));
    }

    #[test]
    fn invalid_host_fails_validation() {
        let p = profile("not a url");
        assert!(matches!(
            profile_host(&p),
            Err(ConfigError::Validation { .. })
        ));
    }
}
