//! Command dispatch: bridges CLI args -> sync thunks -> output formatting.

pub mod account;
pub mod basic_auth;
pub mod builds;
pub mod config_cmd;
pub mod domains;
pub mod env_vars;
pub mod organizations;
pub mod sites;
pub mod util;

use sitedeck_core::SyncService;

use crate::cli::{Command, GlobalOpts};
use crate::error::CliError;

/// Dispatch an API-bound command to the appropriate handler.
pub async fn dispatch(cmd: Command, sync: &SyncService, global: &GlobalOpts) -> Result<(), CliError> {
    match cmd {
        Command::Sites(args) => sites::handle(sync, args, global).await,
        Command::Builds(args) => builds::handle(sync, args, global).await,
        Command::Orgs(args) => organizations::handle(sync, args, global).await,
        Command::Domains(args) => domains::handle(sync, args, global).await,
        Command::Env(args) => env_vars::handle(sync, args, global).await,
        Command::BasicAuth(args) => basic_auth::handle(sync, args, global).await,
        Command::Account(args) => account::handle(sync, args, global).await,
        // Config and Completions are handled before dispatch
        Command::Config(_) | Command::Completions(_) => unreachable!(),
    }
}
