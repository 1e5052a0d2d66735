//! Environment-variable command handlers.

use tabled::Tabled;

use sitedeck_api::{AddUserEnvironmentVariableRequest, UserEnvironmentVariable};
use sitedeck_core::SyncService;

use crate::cli::{EnvArgs, EnvCommand, GlobalOpts};
use crate::error::CliError;
use crate::output;

use super::util;

#[derive(Tabled)]
struct EnvRow {
    #[tabled(rename = "ID")]
    id: i64,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Value")]
    hint: String,
}

impl From<&UserEnvironmentVariable> for EnvRow {
    fn from(v: &UserEnvironmentVariable) -> Self {
        Self {
            id: v.id,
            name: v.name.clone(),
            // The API never returns the value, only a trailing hint.
            hint: v
                .hint
                .as_deref()
                .map(|h| format!("****{h}"))
                .unwrap_or_default(),
        }
    }
}

pub async fn handle(sync: &SyncService, args: EnvArgs, global: &GlobalOpts) -> Result<(), CliError> {
    match args.command {
        EnvCommand::List { site } => {
            sync.fetch_user_environment_variables(site).await?;
            let state = sync.store().state();
            let variables = state
                .user_environment_variables
                .get(&site)
                .map(|entry| entry.data.clone())
                .unwrap_or_default();
            let out = output::render_list(&global.output, &variables, |v| EnvRow::from(v), |v| {
                v.id.to_string()
            });
            output::print_output(&out, global.quiet);
            Ok(())
        }

        EnvCommand::Add { site, name, value } => {
            sync.add_user_environment_variable(
                site,
                &AddUserEnvironmentVariableRequest { name, value },
            )
            .await?;
            if !global.quiet {
                eprintln!("Environment variable created");
            }
            Ok(())
        }

        EnvCommand::Delete { site, variable } => {
            if !util::confirm(&format!("Delete environment variable {variable}?"), global.yes)? {
                return Ok(());
            }
            sync.delete_user_environment_variable(site, variable).await?;
            if !global.quiet {
                eprintln!("Environment variable deleted");
            }
            Ok(())
        }
    }
}
