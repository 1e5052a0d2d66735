// ── Action sum type ──
//
// Every state transition is one of these variants. Reducers match
// exhaustively on the variants they own and pass everything else
// through untouched. `ActionKind` (the strum discriminant) is the
// lookup key for the notifier's side-effect table.

use sitedeck_api::{
    BasicAuthCredentials, BranchConfig, Build, BuildLogChunk, BuildTask, Domain, Organization,
    OrganizationMember, OrganizationRole, Site, User, UserEnvironmentVariable, UserSettings,
};
use strum::EnumDiscriminants;

use super::state::{AlertStatus, Notification};

#[derive(Debug, Clone, EnumDiscriminants)]
#[strum_discriminants(name(ActionKind), derive(Hash))]
pub enum Action {
    // ── Sites ────────────────────────────────────────────────────────
    SitesFetchStarted,
    SitesReceived(Vec<Site>),
    SiteAdded(Site),
    SiteUpdated(Site),
    SiteDeleted(i64),

    // ── Branch configurations (keyed by site) ────────────────────────
    BranchConfigsFetchStarted { site_id: i64 },
    BranchConfigsReceived { site_id: i64, configs: Vec<BranchConfig> },
    BranchConfigUpdated { site_id: i64, config: BranchConfig },

    // ── Builds ───────────────────────────────────────────────────────
    BuildsFetchStarted,
    BuildsReceived(Vec<Build>),
    /// Single-build refresh (polling a non-terminal build).
    BuildReceived(Build),
    BuildRestarted(Build),
    BuildLogsFetchStarted { build_id: i64 },
    BuildLogsReceived { build_id: i64, chunk: BuildLogChunk },
    BuildTasksFetchStarted { build_id: i64 },
    BuildTasksReceived { build_id: i64, tasks: Vec<BuildTask> },

    // ── Organizations ────────────────────────────────────────────────
    OrganizationsFetchStarted,
    OrganizationsReceived(Vec<Organization>),
    OrganizationReceived(Organization),
    OrganizationRolesFetchStarted,
    OrganizationRolesReceived(Vec<OrganizationRole>),
    MembersFetchStarted { org_id: i64 },
    MembersReceived { org_id: i64, members: Vec<OrganizationMember> },
    MemberAdded { org_id: i64, member: OrganizationMember },
    MemberUpdated { org_id: i64, member: OrganizationMember },
    MemberRemoved { org_id: i64, user_id: i64 },

    // ── Custom domains (keyed by site) ───────────────────────────────
    DomainsFetchStarted { site_id: i64 },
    DomainsReceived { site_id: i64, domains: Vec<Domain> },
    DomainAdded { site_id: i64, domain: Domain },
    DomainDeleted { site_id: i64, domain_id: i64 },

    // ── Environment variables (keyed by site) ────────────────────────
    UserEnvironmentVariablesFetchStarted { site_id: i64 },
    UserEnvironmentVariablesReceived { site_id: i64, variables: Vec<UserEnvironmentVariable> },
    UserEnvironmentVariableAdded { site_id: i64, variable: UserEnvironmentVariable },
    UserEnvironmentVariableDeleted { site_id: i64, variable_id: i64 },

    // ── Basic auth (keyed by site) ───────────────────────────────────
    BasicAuthFetchStarted { site_id: i64 },
    /// `None` when the server reports no credentials configured (404).
    BasicAuthReceived { site_id: i64, credentials: Option<BasicAuthCredentials> },
    BasicAuthSaved { site_id: i64, credentials: BasicAuthCredentials },
    BasicAuthRemoved { site_id: i64 },

    // ── Current user ─────────────────────────────────────────────────
    UserFetchStarted,
    UserReceived(User),
    UserSettingsUpdated(UserSettings),
    GithubTokenReset,

    // ── Errors & alerts ──────────────────────────────────────────────
    /// Generic failure marker: settles `is_loading` without touching
    /// data. `key` is the parent id of the failing keyed fetch, when
    /// there is one; keyed slices only settle entries that already
    /// exist for that key.
    HttpError { message: String, key: Option<i64> },
    AlertShown { message: String, status: AlertStatus },
    AlertDismissed,
    /// Navigation event: marks a fresh alert stale, clears a stale one.
    RouteChanged,

    // ── Notifications (emitted by the notifier middleware) ───────────
    NotificationShown(Notification),
    NotificationsCleared,
}
