//! Synchronization thunks: the async seam between the API client and
//! the store.
//!
//! Every operation follows the same shape: dispatch the fetch-started
//! action, await the API call, then dispatch the received/delta action
//! on success or route the failure through [`SyncService::fail`]. A
//! failure dispatches `HttpError` (settling the loading flag) and, for
//! alert-reported operations, an error alert; inline-reported
//! operations skip the alert and surface the message through the
//! returned error instead, for form-local rendering.

use std::sync::Arc;

use sitedeck_api::{
    AddDomainRequest, AddSiteRequest, AddUserEnvironmentVariableRequest, ApiClient,
    BasicAuthCredentials, BranchConfigRequest, InviteRequest, InviteResult, Site,
    UpdateSiteRequest, UserSettings,
};
use tracing::warn;

use crate::error::CoreError;
use crate::store::state::AlertStatus;
use crate::store::{Action, Store};

/// Where an operation's failure message goes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorReporting {
    /// Raise the global error alert banner.
    Alert,
    /// No banner; the caller renders the returned error next to its form.
    Inline,
}

/// One instance per authenticated session, shared across views.
pub struct SyncService {
    api: ApiClient,
    store: Arc<Store>,
}

impl SyncService {
    pub fn new(api: ApiClient, store: Arc<Store>) -> Self {
        Self { api, store }
    }

    pub fn store(&self) -> &Arc<Store> {
        &self.store
    }

    pub fn api(&self) -> &ApiClient {
        &self.api
    }

    /// Record a failure in the store and convert it for the caller.
    fn fail(
        &self,
        err: sitedeck_api::Error,
        key: Option<i64>,
        reporting: ErrorReporting,
    ) -> CoreError {
        let message = err.user_message();
        warn!(%message, ?key, "request failed");
        self.store.dispatch(Action::HttpError {
            message: message.clone(),
            key,
        });
        if reporting == ErrorReporting::Alert {
            self.store.dispatch(Action::AlertShown {
                message,
                status: AlertStatus::Error,
            });
        }
        CoreError::Api(err)
    }

    // ── Sites ────────────────────────────────────────────────────────

    pub async fn fetch_sites(&self) -> Result<(), CoreError> {
        self.store.dispatch(Action::SitesFetchStarted);
        match self.api.fetch_sites().await {
            Ok(sites) => {
                self.store.dispatch(Action::SitesReceived(sites));
                Ok(())
            }
            Err(err) => Err(self.fail(err, None, ErrorReporting::Alert)),
        }
    }

    /// Create a site. Errors report inline (the add-site form shows
    /// them next to the repository field).
    pub async fn add_site(&self, body: &AddSiteRequest) -> Result<Site, CoreError> {
        match self.api.add_site(body).await {
            Ok(site) => {
                self.store.dispatch(Action::SiteAdded(site.clone()));
                Ok(site)
            }
            Err(err) => Err(self.fail(err, None, ErrorReporting::Inline)),
        }
    }

    pub async fn update_site(
        &self,
        site_id: i64,
        body: &UpdateSiteRequest,
    ) -> Result<(), CoreError> {
        match self.api.update_site(site_id, body).await {
            Ok(site) => {
                self.store.dispatch(Action::SiteUpdated(site));
                Ok(())
            }
            Err(err) => Err(self.fail(err, None, ErrorReporting::Alert)),
        }
    }

    pub async fn delete_site(&self, site_id: i64) -> Result<(), CoreError> {
        match self.api.delete_site(site_id).await {
            Ok(()) => {
                self.store.dispatch(Action::SiteDeleted(site_id));
                Ok(())
            }
            Err(err) => Err(self.fail(err, None, ErrorReporting::Alert)),
        }
    }

    // ── Branch configurations ────────────────────────────────────────

    pub async fn fetch_branch_configs(&self, site_id: i64) -> Result<(), CoreError> {
        self.store
            .dispatch(Action::BranchConfigsFetchStarted { site_id });
        match self.api.fetch_branch_configs(site_id).await {
            Ok(configs) => {
                self.store
                    .dispatch(Action::BranchConfigsReceived { site_id, configs });
                Ok(())
            }
            Err(err) => Err(self.fail(err, Some(site_id), ErrorReporting::Alert)),
        }
    }

    pub async fn update_branch_config(
        &self,
        site_id: i64,
        body: &BranchConfigRequest,
    ) -> Result<(), CoreError> {
        match self.api.update_site_branch_config(site_id, body).await {
            Ok(config) => {
                self.store
                    .dispatch(Action::BranchConfigUpdated { site_id, config });
                Ok(())
            }
            Err(err) => Err(self.fail(err, Some(site_id), ErrorReporting::Alert)),
        }
    }

    // ── Builds ───────────────────────────────────────────────────────

    pub async fn fetch_builds(&self, site_id: i64) -> Result<(), CoreError> {
        self.store.dispatch(Action::BuildsFetchStarted);
        match self.api.fetch_builds(site_id).await {
            Ok(builds) => {
                self.store.dispatch(Action::BuildsReceived(builds));
                Ok(())
            }
            Err(err) => Err(self.fail(err, None, ErrorReporting::Alert)),
        }
    }

    /// Refresh one build in place. Used when polling builds that have
    /// not reached a terminal state.
    pub async fn refresh_build(&self, build_id: i64) -> Result<(), CoreError> {
        match self.api.fetch_build(build_id).await {
            Ok(build) => {
                self.store.dispatch(Action::BuildReceived(build));
                Ok(())
            }
            Err(err) => Err(self.fail(err, None, ErrorReporting::Alert)),
        }
    }

    pub async fn restart_build(&self, build_id: i64, site_id: i64) -> Result<(), CoreError> {
        match self.api.restart_build(build_id, site_id).await {
            Ok(build) => {
                self.store.dispatch(Action::BuildRestarted(build));
                Ok(())
            }
            Err(err) => Err(self.fail(err, None, ErrorReporting::Alert)),
        }
    }

    /// Fetch the next log chunk, continuing from the offset the store
    /// has accumulated so far for this build.
    pub async fn fetch_build_log(&self, build_id: i64) -> Result<(), CoreError> {
        let offset = self
            .store
            .state()
            .build_logs
            .get(&build_id)
            .map_or(0, |entry| entry.data.offset);
        self.store
            .dispatch(Action::BuildLogsFetchStarted { build_id });
        match self.api.fetch_build_log(build_id, offset).await {
            Ok(chunk) => {
                self.store
                    .dispatch(Action::BuildLogsReceived { build_id, chunk });
                Ok(())
            }
            Err(err) => Err(self.fail(err, Some(build_id), ErrorReporting::Alert)),
        }
    }

    pub async fn fetch_build_tasks(&self, build_id: i64) -> Result<(), CoreError> {
        self.store
            .dispatch(Action::BuildTasksFetchStarted { build_id });
        match self.api.fetch_build_tasks(build_id).await {
            Ok(tasks) => {
                self.store
                    .dispatch(Action::BuildTasksReceived { build_id, tasks });
                Ok(())
            }
            Err(err) => Err(self.fail(err, Some(build_id), ErrorReporting::Alert)),
        }
    }

    // ── Organizations & membership ───────────────────────────────────

    pub async fn fetch_organizations(&self) -> Result<(), CoreError> {
        self.store.dispatch(Action::OrganizationsFetchStarted);
        match self.api.fetch_organizations().await {
            Ok(orgs) => {
                self.store.dispatch(Action::OrganizationsReceived(orgs));
                Ok(())
            }
            Err(err) => Err(self.fail(err, None, ErrorReporting::Alert)),
        }
    }

    pub async fn refresh_organization(&self, org_id: i64) -> Result<(), CoreError> {
        match self.api.fetch_organization(org_id).await {
            Ok(org) => {
                self.store.dispatch(Action::OrganizationReceived(org));
                Ok(())
            }
            Err(err) => Err(self.fail(err, None, ErrorReporting::Alert)),
        }
    }

    pub async fn fetch_organization_roles(&self) -> Result<(), CoreError> {
        self.store.dispatch(Action::OrganizationRolesFetchStarted);
        match self.api.fetch_organization_roles().await {
            Ok(roles) => {
                self.store.dispatch(Action::OrganizationRolesReceived(roles));
                Ok(())
            }
            Err(err) => Err(self.fail(err, None, ErrorReporting::Alert)),
        }
    }

    pub async fn fetch_members(&self, org_id: i64) -> Result<(), CoreError> {
        self.store.dispatch(Action::MembersFetchStarted { org_id });
        match self.api.fetch_organization_members(org_id).await {
            Ok(members) => {
                self.store
                    .dispatch(Action::MembersReceived { org_id, members });
                Ok(())
            }
            Err(err) => Err(self.fail(err, Some(org_id), ErrorReporting::Alert)),
        }
    }

    /// Invite a user by email. An existing platform user lands in the
    /// membership slice immediately; a pending invite is returned to
    /// the caller so the form can show the acceptance link. Errors
    /// report inline.
    pub async fn invite_to_organization(
        &self,
        org_id: i64,
        body: &InviteRequest,
    ) -> Result<InviteResult, CoreError> {
        match self.api.invite_to_organization(org_id, body).await {
            Ok(result) => {
                if let Some(member) = &result.member {
                    self.store.dispatch(Action::MemberAdded {
                        org_id,
                        member: member.clone(),
                    });
                }
                Ok(result)
            }
            Err(err) => Err(self.fail(err, Some(org_id), ErrorReporting::Inline)),
        }
    }

    pub async fn update_member_role(
        &self,
        org_id: i64,
        user_id: i64,
        role_id: i64,
    ) -> Result<(), CoreError> {
        match self
            .api
            .update_organization_role(org_id, user_id, role_id)
            .await
        {
            Ok(member) => {
                self.store.dispatch(Action::MemberUpdated { org_id, member });
                Ok(())
            }
            Err(err) => Err(self.fail(err, Some(org_id), ErrorReporting::Alert)),
        }
    }

    pub async fn remove_member(&self, org_id: i64, user_id: i64) -> Result<(), CoreError> {
        match self.api.remove_organization_member(org_id, user_id).await {
            Ok(()) => {
                self.store.dispatch(Action::MemberRemoved { org_id, user_id });
                Ok(())
            }
            Err(err) => Err(self.fail(err, Some(org_id), ErrorReporting::Alert)),
        }
    }

    // ── Custom domains ───────────────────────────────────────────────

    pub async fn fetch_domains(&self, site_id: i64) -> Result<(), CoreError> {
        self.store.dispatch(Action::DomainsFetchStarted { site_id });
        match self.api.fetch_site_domains(site_id).await {
            Ok(domains) => {
                self.store
                    .dispatch(Action::DomainsReceived { site_id, domains });
                Ok(())
            }
            Err(err) => Err(self.fail(err, Some(site_id), ErrorReporting::Alert)),
        }
    }

    pub async fn add_domain(
        &self,
        site_id: i64,
        body: &AddDomainRequest,
    ) -> Result<(), CoreError> {
        match self.api.add_site_domain(site_id, body).await {
            Ok(domain) => {
                self.store.dispatch(Action::DomainAdded { site_id, domain });
                Ok(())
            }
            Err(err) => Err(self.fail(err, Some(site_id), ErrorReporting::Inline)),
        }
    }

    pub async fn delete_domain(&self, site_id: i64, domain_id: i64) -> Result<(), CoreError> {
        match self.api.delete_site_domain(site_id, domain_id).await {
            Ok(()) => {
                self.store
                    .dispatch(Action::DomainDeleted { site_id, domain_id });
                Ok(())
            }
            Err(err) => Err(self.fail(err, Some(site_id), ErrorReporting::Alert)),
        }
    }

    // ── Environment variables ────────────────────────────────────────

    pub async fn fetch_user_environment_variables(&self, site_id: i64) -> Result<(), CoreError> {
        self.store
            .dispatch(Action::UserEnvironmentVariablesFetchStarted { site_id });
        match self.api.fetch_user_environment_variables(site_id).await {
            Ok(variables) => {
                self.store
                    .dispatch(Action::UserEnvironmentVariablesReceived { site_id, variables });
                Ok(())
            }
            Err(err) => Err(self.fail(err, Some(site_id), ErrorReporting::Alert)),
        }
    }

    pub async fn add_user_environment_variable(
        &self,
        site_id: i64,
        body: &AddUserEnvironmentVariableRequest,
    ) -> Result<(), CoreError> {
        match self.api.add_user_environment_variable(site_id, body).await {
            Ok(variable) => {
                self.store
                    .dispatch(Action::UserEnvironmentVariableAdded { site_id, variable });
                Ok(())
            }
            Err(err) => Err(self.fail(err, Some(site_id), ErrorReporting::Inline)),
        }
    }

    pub async fn delete_user_environment_variable(
        &self,
        site_id: i64,
        variable_id: i64,
    ) -> Result<(), CoreError> {
        match self
            .api
            .delete_user_environment_variable(site_id, variable_id)
            .await
        {
            Ok(()) => {
                self.store
                    .dispatch(Action::UserEnvironmentVariableDeleted { site_id, variable_id });
                Ok(())
            }
            Err(err) => Err(self.fail(err, Some(site_id), ErrorReporting::Alert)),
        }
    }

    // ── Preview basic auth ───────────────────────────────────────────

    /// Fetch basic-auth credentials. A 404 means none are configured
    /// and settles the slice as `None` rather than erroring.
    pub async fn fetch_basic_auth(&self, site_id: i64) -> Result<(), CoreError> {
        self.store.dispatch(Action::BasicAuthFetchStarted { site_id });
        match self.api.fetch_basic_auth(site_id).await {
            Ok(credentials) => {
                self.store.dispatch(Action::BasicAuthReceived {
                    site_id,
                    credentials: Some(credentials),
                });
                Ok(())
            }
            Err(err) if err.is_not_found() => {
                self.store.dispatch(Action::BasicAuthReceived {
                    site_id,
                    credentials: None,
                });
                Ok(())
            }
            Err(err) => Err(self.fail(err, Some(site_id), ErrorReporting::Alert)),
        }
    }

    pub async fn save_basic_auth(
        &self,
        site_id: i64,
        creds: &BasicAuthCredentials,
    ) -> Result<(), CoreError> {
        match self.api.save_basic_auth(site_id, creds).await {
            Ok(credentials) => {
                self.store
                    .dispatch(Action::BasicAuthSaved { site_id, credentials });
                Ok(())
            }
            Err(err) => Err(self.fail(err, Some(site_id), ErrorReporting::Inline)),
        }
    }

    pub async fn remove_basic_auth(&self, site_id: i64) -> Result<(), CoreError> {
        match self.api.remove_basic_auth(site_id).await {
            Ok(()) => {
                self.store.dispatch(Action::BasicAuthRemoved { site_id });
                Ok(())
            }
            Err(err) => Err(self.fail(err, Some(site_id), ErrorReporting::Alert)),
        }
    }

    // ── Current user ─────────────────────────────────────────────────

    pub async fn fetch_user(&self) -> Result<(), CoreError> {
        self.store.dispatch(Action::UserFetchStarted);
        match self.api.fetch_me().await {
            Ok(user) => {
                self.store.dispatch(Action::UserReceived(user));
                Ok(())
            }
            Err(err) => Err(self.fail(err, None, ErrorReporting::Alert)),
        }
    }

    pub async fn update_user_settings(&self, settings: &UserSettings) -> Result<(), CoreError> {
        match self.api.update_me_settings(settings).await {
            Ok(user) => {
                self.store
                    .dispatch(Action::UserSettingsUpdated(user.settings));
                Ok(())
            }
            Err(err) => Err(self.fail(err, None, ErrorReporting::Alert)),
        }
    }

    pub async fn reset_github_token(&self) -> Result<(), CoreError> {
        match self.api.reset_github_token().await {
            Ok(()) => {
                self.store.dispatch(Action::GithubTokenReset);
                Ok(())
            }
            Err(err) => Err(self.fail(err, None, ErrorReporting::Alert)),
        }
    }

    // ── Alerts & navigation ──────────────────────────────────────────

    pub fn show_success_alert(&self, message: &str) {
        self.store.dispatch(Action::AlertShown {
            message: message.into(),
            status: AlertStatus::Success,
        });
    }

    pub fn dismiss_alert(&self) {
        self.store.dispatch(Action::AlertDismissed);
    }

    /// Call on every navigation; drives the alert staleness policy.
    pub fn route_changed(&self) {
        self.store.dispatch(Action::RouteChanged);
    }

    pub fn clear_notifications(&self) {
        self.store.dispatch(Action::NotificationsCleared);
    }
}
