//! Organization and membership command handlers.

use tabled::Tabled;

use sitedeck_api::{InviteRequest, Organization, OrganizationMember, OrganizationRole};
use sitedeck_core::SyncService;
use sitedeck_core::store::selectors;

use crate::cli::{GlobalOpts, OrgsArgs, OrgsCommand};
use crate::error::CliError;
use crate::output;

use super::util;

// ── Table rows ──────────────────────────────────────────────────────

#[derive(Tabled)]
struct OrgRow {
    #[tabled(rename = "ID")]
    id: i64,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Sandbox")]
    sandbox: String,
    #[tabled(rename = "Active")]
    active: String,
}

impl From<&Organization> for OrgRow {
    fn from(o: &Organization) -> Self {
        Self {
            id: o.id,
            name: o.name.clone(),
            sandbox: if o.is_sandbox { "yes".into() } else { String::new() },
            active: if o.is_active { "yes".into() } else { "no".into() },
        }
    }
}

#[derive(Tabled)]
struct MemberRow {
    #[tabled(rename = "User ID")]
    user_id: i64,
    #[tabled(rename = "Username")]
    username: String,
    #[tabled(rename = "Role")]
    role: String,
}

impl From<&OrganizationMember> for MemberRow {
    fn from(m: &OrganizationMember) -> Self {
        Self {
            user_id: m.user.id,
            username: m.user.username.clone(),
            role: m.role.name.clone(),
        }
    }
}

#[derive(Tabled)]
struct RoleRow {
    #[tabled(rename = "ID")]
    id: i64,
    #[tabled(rename = "Name")]
    name: String,
}

impl From<&OrganizationRole> for RoleRow {
    fn from(r: &OrganizationRole) -> Self {
        Self {
            id: r.id,
            name: r.name.clone(),
        }
    }
}

// ── Handler ─────────────────────────────────────────────────────────

pub async fn handle(
    sync: &SyncService,
    args: OrgsArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    match args.command {
        OrgsCommand::List => {
            sync.fetch_organizations().await?;
            let state = sync.store().state();
            let out = output::render_list(
                &global.output,
                &state.organizations.data,
                |o| OrgRow::from(o),
                |o| o.id.to_string(),
            );
            output::print_output(&out, global.quiet);
            Ok(())
        }

        OrgsCommand::Get { org } => {
            sync.refresh_organization(org).await?;
            let state = sync.store().state();
            let found = selectors::organization_by_id(&state.organizations, org).ok_or_else(
                || CliError::NotFound {
                    resource_type: "organization".into(),
                    identifier: org.to_string(),
                    list_command: "orgs list".into(),
                },
            )?;
            let out = output::render_single(
                &global.output,
                found,
                |o| format!("Organization: {} (id {})", o.name, o.id),
                |o| o.id.to_string(),
            );
            output::print_output(&out, global.quiet);
            Ok(())
        }

        OrgsCommand::Members { org } => {
            sync.fetch_members(org).await?;
            let state = sync.store().state();
            let members = state
                .members
                .get(&org)
                .map(|entry| entry.data.clone())
                .unwrap_or_default();
            let out = output::render_list(&global.output, &members, |m| MemberRow::from(m), |m| {
                m.user.id.to_string()
            });
            output::print_output(&out, global.quiet);
            Ok(())
        }

        OrgsCommand::Invite { org, email, role } => {
            let result = sync
                .invite_to_organization(
                    org,
                    &InviteRequest {
                        email: email.clone(),
                        role_id: role,
                    },
                )
                .await?;
            if global.quiet {
                return Ok(());
            }
            if let Some(member) = result.member {
                eprintln!("{} is now a member", member.user.username);
            } else if let Some(invite) = result.invite {
                match invite.link {
                    Some(link) => eprintln!("Invite sent to {email}: {link}"),
                    None => eprintln!("Invite sent to {email}"),
                }
            }
            Ok(())
        }

        OrgsCommand::SetRole { org, user, role } => {
            sync.update_member_role(org, user, role).await?;
            if !global.quiet {
                eprintln!("Role updated");
            }
            Ok(())
        }

        OrgsCommand::Remove { org, user } => {
            if !util::confirm(
                &format!("Remove user {user} from organization {org}?"),
                global.yes,
            )? {
                return Ok(());
            }
            sync.remove_member(org, user).await?;
            if !global.quiet {
                eprintln!("Member removed");
            }
            Ok(())
        }

        OrgsCommand::Roles => {
            sync.fetch_organization_roles().await?;
            let state = sync.store().state();
            let out = output::render_list(
                &global.output,
                &state.organization_roles.data,
                |r| RoleRow::from(r),
                |r| r.id.to_string(),
            );
            output::print_output(&out, global.quiet);
            Ok(())
        }
    }
}
