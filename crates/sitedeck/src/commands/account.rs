//! Account command handlers.

use sitedeck_core::SyncService;

use crate::cli::{AccountArgs, AccountCommand, GlobalOpts};
use crate::error::CliError;
use crate::output;

use super::util;

pub async fn handle(
    sync: &SyncService,
    args: AccountArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    match args.command {
        AccountCommand::Show => {
            sync.fetch_user().await?;
            let state = sync.store().state();
            let Some(user) = state.user.data.as_ref() else {
                return Err(CliError::AuthFailed {
                    profile: "current".into(),
                });
            };
            let out = output::render_single(
                &global.output,
                user,
                |u| {
                    let mut lines = vec![format!("User:    {} (id {})", u.username, u.id)];
                    if let Some(ref email) = u.email {
                        lines.push(format!("Email:   {email}"));
                    }
                    lines.push(format!(
                        "GitHub:  {}",
                        if u.has_github_auth { "connected" } else { "not connected" }
                    ));
                    lines.join("\n")
                },
                |u| u.username.clone(),
            );
            output::print_output(&out, global.quiet);
            Ok(())
        }

        AccountCommand::Notify { site, setting } => {
            if !matches!(setting.as_str(), "none" | "builds" | "site") {
                return Err(CliError::Validation {
                    field: "setting".into(),
                    reason: format!("expected 'none', 'builds', or 'site', got '{setting}'"),
                });
            }

            // Settings are replaced wholesale, so start from the
            // current ones.
            sync.fetch_user().await?;
            let state = sync.store().state();
            let mut settings = state
                .user
                .data
                .as_ref()
                .map(|u| u.settings.clone())
                .unwrap_or_default();
            settings
                .build_notification_settings
                .insert(site.to_string(), setting);

            sync.update_user_settings(&settings).await?;
            if !global.quiet {
                eprintln!("Notification preference saved");
            }
            Ok(())
        }

        AccountCommand::ResetGithubToken => {
            if !util::confirm(
                "Revoke the stored GitHub token? Deploys stop until you reconnect.",
                global.yes,
            )? {
                return Ok(());
            }
            sync.reset_github_token().await?;
            if !global.quiet {
                eprintln!("GitHub token revoked");
            }
            Ok(())
        }
    }
}
