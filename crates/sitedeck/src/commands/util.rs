//! Shared helpers for command handlers.

use std::io::IsTerminal;

use crate::error::CliError;

/// Prompt for confirmation, auto-approving if `--yes` was passed.
///
/// Without a terminal on stdin there is nobody to ask, so the prompt
/// is refused rather than left hanging in a pipe.
pub fn confirm(message: &str, yes_flag: bool) -> Result<bool, CliError> {
    confirm_with(message, yes_flag, std::io::stdin().is_terminal())
}

fn confirm_with(message: &str, yes_flag: bool, interactive: bool) -> Result<bool, CliError> {
    if yes_flag {
        return Ok(true);
    }
    if !interactive {
        return Err(CliError::NonInteractiveRequiresYes {
            action: message.to_owned(),
        });
    }
    let confirmed = dialoguer::Confirm::new()
        .with_prompt(message)
        .default(false)
        .interact()
        .map_err(|e| CliError::Io(std::io::Error::other(e)))?;
    Ok(confirmed)
}

/// Prompt for a password without echo.
pub fn prompt_password(prompt: &str) -> Result<String, CliError> {
    dialoguer::Password::new()
        .with_prompt(prompt)
        .interact()
        .map_err(|e| CliError::Io(std::io::Error::other(e)))
}

/// Render an optional timestamp as a short human date.
pub fn short_date(ts: Option<chrono::DateTime<chrono::Utc>>) -> String {
    ts.map(|t| t.format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_default()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn yes_flag_skips_the_prompt() {
        assert!(confirm_with("delete site octocat/blog", true, false).unwrap());
        assert!(confirm_with("delete site octocat/blog", true, true).unwrap());
    }

    #[test]
    fn non_interactive_without_yes_is_refused() {
        let err = confirm_with("delete site octocat/blog", false, false).unwrap_err();
        assert!(matches!(
            err,
            CliError::NonInteractiveRequiresYes { ref action } if action == "delete site octocat/blog"
        ));
        assert_eq!(err.exit_code(), crate::error::exit_code::USAGE);
    }
}
