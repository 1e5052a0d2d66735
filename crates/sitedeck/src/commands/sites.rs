//! Site command handlers.

use tabled::Tabled;

use sitedeck_api::{AddSiteRequest, BranchConfigRequest, Site, UpdateSiteRequest};
use sitedeck_core::SyncService;
use sitedeck_core::store::selectors::{self, OrgFilter};

use crate::cli::{
    BranchConfigArgs, BranchConfigCommand, DeployContext, GlobalOpts, SitesArgs, SitesCommand,
};
use crate::error::CliError;
use crate::output;

use super::util;

impl From<DeployContext> for sitedeck_api::BranchContext {
    fn from(ctx: DeployContext) -> Self {
        match ctx {
            DeployContext::Site => Self::Site,
            DeployContext::Demo => Self::Demo,
            DeployContext::Preview => Self::Preview,
        }
    }
}

// ── Table rows ──────────────────────────────────────────────────────

#[derive(Tabled)]
struct SiteRow {
    #[tabled(rename = "ID")]
    id: i64,
    #[tabled(rename = "Repository")]
    repository: String,
    #[tabled(rename = "Engine")]
    engine: String,
    #[tabled(rename = "Branch")]
    branch: String,
    #[tabled(rename = "Org")]
    org: String,
}

impl From<&Site> for SiteRow {
    fn from(s: &Site) -> Self {
        Self {
            id: s.id,
            repository: format!("{}/{}", s.owner, s.repository),
            engine: s.engine.clone(),
            branch: s.default_branch.clone(),
            org: s.organization_id.map(|id| id.to_string()).unwrap_or_default(),
        }
    }
}

fn site_detail(s: &Site) -> String {
    let mut lines = vec![
        format!("Site:       {}/{} (id {})", s.owner, s.repository, s.id),
        format!("Engine:     {}", s.engine),
        format!("Branch:     {}", s.default_branch),
    ];
    if let Some(ref demo) = s.demo_branch {
        lines.push(format!("Demo:       {demo}"));
    }
    if let Some(ref domain) = s.domain {
        lines.push(format!("Domain:     {domain}"));
    }
    if let Some(org) = s.organization_id {
        lines.push(format!("Org:        {org}"));
    }
    lines.push(format!("Created:    {}", s.created_at.format("%Y-%m-%d")));
    lines.join("\n")
}

// ── Handler ─────────────────────────────────────────────────────────

pub async fn handle(
    sync: &SyncService,
    args: SitesArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    match args.command {
        SitesCommand::List { org } => {
            let filter: OrgFilter = org.parse().map_err(|_| CliError::Validation {
                field: "org".into(),
                reason: format!("expected 'all-options', 'unassociated', or an id, got '{org}'"),
            })?;

            sync.fetch_sites().await?;
            let state = sync.store().state();
            let filtered: Vec<Site> = selectors::group_sites_by_org(&state.sites, filter)
                .into_iter()
                .cloned()
                .collect();

            let out = output::render_list(
                &global.output,
                &filtered,
                |s| SiteRow::from(s),
                |s| s.id.to_string(),
            );
            output::print_output(&out, global.quiet);
            Ok(())
        }

        SitesCommand::Get { site } => {
            sync.fetch_sites().await?;
            let state = sync.store().state();
            let found =
                selectors::current_site(&state.sites, &site).ok_or_else(|| CliError::NotFound {
                    resource_type: "site".into(),
                    identifier: site.clone(),
                    list_command: "sites list".into(),
                })?;
            let out = output::render_single(&global.output, found, site_detail, |s| {
                s.id.to_string()
            });
            output::print_output(&out, global.quiet);
            Ok(())
        }

        SitesCommand::Add {
            owner,
            repository,
            engine,
            org,
            template,
        } => {
            let site = sync
                .add_site(&AddSiteRequest {
                    owner,
                    repository,
                    engine,
                    organization_id: org,
                    template,
                })
                .await?;
            if !global.quiet {
                eprintln!("Site {} added (id {})", site.repository, site.id);
            }
            Ok(())
        }

        SitesCommand::Update {
            site,
            engine,
            default_branch,
            demo_branch,
        } => {
            sync.update_site(
                site,
                &UpdateSiteRequest {
                    engine,
                    default_branch,
                    demo_branch,
                    ..UpdateSiteRequest::default()
                },
            )
            .await?;
            if !global.quiet {
                eprintln!("Site updated");
            }
            Ok(())
        }

        SitesCommand::Delete { site } => {
            if !util::confirm(
                &format!("Delete site {site}? Builds and settings are removed."),
                global.yes,
            )? {
                return Ok(());
            }
            sync.delete_site(site).await?;
            if !global.quiet {
                eprintln!("Site deleted");
            }
            Ok(())
        }

        SitesCommand::BranchConfig(args) => handle_branch_config(sync, args, global).await,
    }
}

async fn handle_branch_config(
    sync: &SyncService,
    args: BranchConfigArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    match args.command {
        BranchConfigCommand::List { site } => {
            sync.fetch_branch_configs(site).await?;
            let state = sync.store().state();
            let configs = state
                .branch_configs
                .get(&site)
                .map(|entry| entry.data.clone())
                .unwrap_or_default();

            let out = output::render_list(
                &global.output,
                &configs,
                |c| BranchConfigRow {
                    id: c.id,
                    branch: c.branch.clone(),
                    context: format!("{:?}", c.context).to_lowercase(),
                },
                |c| c.id.to_string(),
            );
            output::print_output(&out, global.quiet);
            Ok(())
        }

        BranchConfigCommand::Set {
            site,
            branch,
            context,
            config,
        } => {
            let config = match config {
                Some(raw) => serde_json::from_str(&raw)?,
                None => serde_json::Value::Null,
            };
            sync.update_branch_config(
                site,
                &BranchConfigRequest {
                    branch,
                    context: context.into(),
                    config,
                },
            )
            .await?;
            if !global.quiet {
                eprintln!("Branch configuration saved");
            }
            Ok(())
        }
    }
}

#[derive(Tabled)]
struct BranchConfigRow {
    #[tabled(rename = "ID")]
    id: i64,
    #[tabled(rename = "Branch")]
    branch: String,
    #[tabled(rename = "Context")]
    context: String,
}
