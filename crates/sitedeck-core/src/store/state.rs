// ── Store state shape ──
//
// Every slice is a `SliceState<T>`; per-parent collections are keyed
// maps of slices. The whole tree is cheap to clone — dispatch clones,
// reduces, and swaps the snapshot.

use std::collections::HashMap;

use sitedeck_api::{
    BasicAuthCredentials, BranchConfig, Build, BuildState, BuildTask, Domain, Organization,
    OrganizationMember, OrganizationRole, Site, User, UserEnvironmentVariable,
};

/// Uniform slice shape: `is_loading` is true only between a fetch-started
/// action and the matching received/error action. `data` may hold stale
/// values from the previous load while a refresh is in flight.
#[derive(Debug, Clone, PartialEq)]
pub struct SliceState<T> {
    pub is_loading: bool,
    pub data: T,
}

impl<T: Default> Default for SliceState<T> {
    fn default() -> Self {
        Self {
            is_loading: false,
            data: T::default(),
        }
    }
}

impl<T> SliceState<T> {
    /// A slice mid-fetch, keeping whatever data it already held.
    pub fn loading(data: T) -> Self {
        Self {
            is_loading: true,
            data,
        }
    }

    /// A settled slice holding fresh data.
    pub fn loaded(data: T) -> Self {
        Self {
            is_loading: false,
            data,
        }
    }
}

/// Per-parent slices (environment variables by site, members by org, ...).
/// Missing keys mean "never fetched" and read as the default slice.
pub type KeyedSlice<T> = HashMap<i64, SliceState<T>>;

// ── Ephemeral UI entities ───────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertStatus {
    Info,
    Success,
    Error,
}

/// The single global alert banner. `stale` drives the route-change
/// policy: a fresh alert survives one navigation (marked stale), a
/// stale one is cleared by the next.
#[derive(Debug, Clone, PartialEq)]
pub struct Alert {
    pub message: String,
    pub status: AlertStatus,
    pub stale: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Info,
    Success,
    Warning,
    Error,
}

/// Transient toast emitted by the notifier middleware.
#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub title: String,
    pub message: String,
}

/// Accumulated build log output for one build, grown chunk by chunk.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BuildLog {
    /// Line offset to request next.
    pub offset: u64,
    pub lines: Vec<String>,
    /// Build state as of the last fetched chunk.
    pub state: Option<BuildState>,
}

// ── The full tree ───────────────────────────────────────────────────

/// Client-side mirror of server state plus ephemeral UI slices.
///
/// All mutation routes through [`Store::dispatch`](super::Store::dispatch);
/// no consumer writes a slice directly.
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub sites: SliceState<Vec<Site>>,
    pub builds: SliceState<Vec<Build>>,
    /// Keyed by build id.
    pub build_logs: KeyedSlice<BuildLog>,
    /// Keyed by build id.
    pub build_tasks: KeyedSlice<Vec<BuildTask>>,
    pub organizations: SliceState<Vec<Organization>>,
    pub organization_roles: SliceState<Vec<OrganizationRole>>,
    /// Keyed by organization id.
    pub members: KeyedSlice<Vec<OrganizationMember>>,
    /// Keyed by site id.
    pub domains: KeyedSlice<Vec<Domain>>,
    /// Keyed by site id.
    pub branch_configs: KeyedSlice<Vec<BranchConfig>>,
    /// Keyed by site id.
    pub user_environment_variables: KeyedSlice<Vec<UserEnvironmentVariable>>,
    /// Keyed by site id.
    pub basic_auth: KeyedSlice<Option<BasicAuthCredentials>>,
    pub user: SliceState<Option<User>>,
    pub alert: Option<Alert>,
    pub notifications: Vec<Notification>,
}
