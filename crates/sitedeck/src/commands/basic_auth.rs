//! Preview basic-auth command handlers.

use sitedeck_api::BasicAuthCredentials;
use sitedeck_core::SyncService;

use crate::cli::{BasicAuthArgs, BasicAuthCommand, GlobalOpts};
use crate::error::CliError;

use super::util;

pub async fn handle(
    sync: &SyncService,
    args: BasicAuthArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    match args.command {
        BasicAuthCommand::Show { site } => {
            sync.fetch_basic_auth(site).await?;
            let state = sync.store().state();
            let configured = state
                .basic_auth
                .get(&site)
                .and_then(|entry| entry.data.as_ref());
            if global.quiet {
                return Ok(());
            }
            match configured {
                Some(creds) => {
                    println!("Preview protection is active (username: {})", creds.username);
                }
                None => println!("Preview protection is not configured"),
            }
            Ok(())
        }

        BasicAuthCommand::Set {
            site,
            username,
            password,
        } => {
            let password = match password {
                Some(p) => p,
                None => util::prompt_password("Password")?,
            };
            sync.save_basic_auth(site, &BasicAuthCredentials { username, password })
                .await?;
            if !global.quiet {
                eprintln!("Preview credentials saved");
            }
            Ok(())
        }

        BasicAuthCommand::Remove { site } => {
            if !util::confirm("Remove preview protection?", global.yes)? {
                return Ok(());
            }
            sync.remove_basic_auth(site).await?;
            if !global.quiet {
                eprintln!("Preview protection removed");
            }
            Ok(())
        }
    }
}
