//! Config subcommand handlers.
//!
//! These run before any API client exists, so the handler is synchronous
//! and dispatched ahead of the store setup in `main`.

use std::collections::HashMap;

use dialoguer::{Input, Select};

use crate::cli::{ConfigArgs, ConfigCommand, GlobalOpts};
use crate::config::{self, Config, Profile};
use crate::error::CliError;
use crate::output;

use super::util;

// ── Helpers ─────────────────────────────────────────────────────────

/// Map a dialoguer / interactive I/O failure into CliError.
fn prompt_err(e: impl std::fmt::Display) -> CliError {
    CliError::Validation {
        field: "interactive".into(),
        reason: format!("prompt failed: {e}"),
    }
}

fn keyring_err(e: impl std::fmt::Display) -> CliError {
    CliError::Validation {
        field: "keyring".into(),
        reason: format!("failed to access keyring: {e}"),
    }
}

fn store_token_in_keyring(profile_name: &str, token: &str) -> Result<(), CliError> {
    let entry = keyring::Entry::new("sitedeck", &format!("{profile_name}/session"))
        .map_err(keyring_err)?;
    entry.set_password(token).map_err(keyring_err)?;
    Ok(())
}

fn unknown_profile(name: String, cfg: &Config) -> CliError {
    let available: Vec<_> = cfg.profiles.keys().cloned().collect();
    CliError::ProfileNotFound {
        name,
        available: if available.is_empty() {
            "(none)".into()
        } else {
            available.join(", ")
        },
    }
}

// ── Handler ─────────────────────────────────────────────────────────

pub fn handle(args: ConfigArgs, global: &GlobalOpts) -> Result<(), CliError> {
    match args.command {
        // ── Init: interactive wizard ────────────────────────────────
        ConfigCommand::Init => {
            let config_path = config::config_path();
            eprintln!("sitedeck — configuration wizard");
            eprintln!("   Config path: {}\n", config_path.display());

            // 1. Profile name
            let profile_name: String = Input::new()
                .with_prompt("Profile name")
                .default("default".into())
                .interact_text()
                .map_err(prompt_err)?;

            // 2. Platform host
            let host: String = Input::new()
                .with_prompt("Platform API host")
                .default("https://pages.example.gov".into())
                .interact_text()
                .map_err(prompt_err)?;

            // 3. Preview/demo proxy domain (optional)
            let proxy: String = Input::new()
                .with_prompt("Proxy domain for previews (blank to skip)")
                .allow_empty(true)
                .interact_text()
                .map_err(prompt_err)?;
            let proxy_domain = if proxy.is_empty() { None } else { Some(proxy) };

            // 4. Session token
            let token = util::prompt_password("Session token")?;
            if token.is_empty() {
                return Err(CliError::Validation {
                    field: "session_token".into(),
                    reason: "session token cannot be empty".into(),
                });
            }

            let store_choices = &[
                "Store in system keyring (recommended)",
                "Save to config file (plaintext)",
            ];
            let store_selection = Select::new()
                .with_prompt("Where to store the session token?")
                .items(store_choices)
                .default(0)
                .interact()
                .map_err(prompt_err)?;

            let session_token = if store_selection == 0 {
                store_token_in_keyring(&profile_name, &token)?;
                eprintln!("   Session token stored in system keyring");
                None // Don't write to config file
            } else {
                Some(token)
            };

            // 5. Build profile and config
            let profile = Profile {
                host,
                proxy_domain,
                product: "pages".into(),
                session_token,
                session_token_env: None,
                timeout: None,
                features: HashMap::new(),
            };

            let mut profiles = HashMap::new();
            profiles.insert(profile_name.clone(), profile);

            let cfg = Config {
                default_profile: Some(profile_name.clone()),
                defaults: Default::default(),
                profiles,
            };

            // 6. Write config
            config::save_config(&cfg)?;

            eprintln!("\nConfiguration written to {}", config_path.display());
            eprintln!("  Active profile: {profile_name}");
            eprintln!("\n  Test it: sitedeck sites list");

            Ok(())
        }

        // ── Show ────────────────────────────────────────────────────
        ConfigCommand::Show => {
            let cfg = config::load_config_or_default();
            let toml_str = toml::to_string_pretty(&cfg)
                .map_err(sitedeck_config::ConfigError::from)?;
            let out = output::render_single(
                &global.output,
                &cfg,
                |_| toml_str.trim_end().into(),
                |c| c.default_profile.clone().unwrap_or_default(),
            );
            output::print_output(&out, global.quiet);
            Ok(())
        }

        // ── Profiles ────────────────────────────────────────────────
        ConfigCommand::Profiles => {
            let cfg = config::load_config_or_default();
            let default = cfg.default_profile.as_deref().unwrap_or("default");
            if cfg.profiles.is_empty() {
                eprintln!("No profiles configured. Run: sitedeck config init");
            } else {
                let mut names: Vec<_> = cfg.profiles.keys().collect();
                names.sort();
                for name in names {
                    let marker = if name == default { " *" } else { "" };
                    println!("{name}{marker}");
                }
            }
            Ok(())
        }

        // ── Use <name> ─────────────────────────────────────────────
        ConfigCommand::Use { name } => {
            let mut cfg = config::load_config_or_default();

            if !cfg.profiles.contains_key(&name) {
                return Err(unknown_profile(name, &cfg));
            }

            cfg.default_profile = Some(name.clone());
            config::save_config(&cfg)?;
            eprintln!("Default profile set to '{name}'");
            Ok(())
        }

        // ── SetToken ────────────────────────────────────────────────
        ConfigCommand::SetToken { profile } => {
            let cfg = config::load_config_or_default();
            let profile_name =
                profile.unwrap_or_else(|| config::active_profile_name(global, &cfg));

            if !cfg.profiles.contains_key(&profile_name) {
                return Err(unknown_profile(profile_name, &cfg));
            }

            let token = util::prompt_password("Session token")?;
            if token.is_empty() {
                return Err(CliError::Validation {
                    field: "session_token".into(),
                    reason: "session token cannot be empty".into(),
                });
            }

            store_token_in_keyring(&profile_name, &token)?;
            eprintln!("Session token stored in system keyring for profile '{profile_name}'");
            Ok(())
        }
    }
}
