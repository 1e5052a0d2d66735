//! Custom-domain command handlers.

use tabled::Tabled;

use sitedeck_api::{AddDomainRequest, Domain};
use sitedeck_core::SyncService;

use crate::cli::{DomainsArgs, DomainsCommand, GlobalOpts};
use crate::error::CliError;
use crate::output;

use super::util;

#[derive(Tabled)]
struct DomainRow {
    #[tabled(rename = "ID")]
    id: i64,
    #[tabled(rename = "Names")]
    names: String,
    #[tabled(rename = "Context")]
    context: String,
    #[tabled(rename = "State")]
    state: String,
}

impl From<&Domain> for DomainRow {
    fn from(d: &Domain) -> Self {
        Self {
            id: d.id,
            names: d.names.clone(),
            context: format!("{:?}", d.context).to_lowercase(),
            state: format!("{:?}", d.state).to_lowercase(),
        }
    }
}

pub async fn handle(
    sync: &SyncService,
    args: DomainsArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    match args.command {
        DomainsCommand::List { site } => {
            sync.fetch_domains(site).await?;
            let state = sync.store().state();
            let domains = state
                .domains
                .get(&site)
                .map(|entry| entry.data.clone())
                .unwrap_or_default();
            let out = output::render_list(&global.output, &domains, |d| DomainRow::from(d), |d| {
                d.id.to_string()
            });
            output::print_output(&out, global.quiet);
            Ok(())
        }

        DomainsCommand::Add { site, names, context } => {
            sync.add_domain(
                site,
                &AddDomainRequest {
                    names,
                    context: context.into(),
                },
            )
            .await?;
            if !global.quiet {
                eprintln!("Domain registered; provisioning runs in the background");
            }
            Ok(())
        }

        DomainsCommand::Delete { site, domain } => {
            if !util::confirm(&format!("Delete domain {domain}?"), global.yes)? {
                return Ok(());
            }
            sync.delete_domain(site, domain).await?;
            if !global.quiet {
                eprintln!("Domain deleted");
            }
            Ok(())
        }
    }
}
