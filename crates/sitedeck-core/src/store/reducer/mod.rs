// ── Reducers ──
//
// Pure functions `(slice, &action) -> slice`, one module per slice.
// Non-matching actions move the input slice back out untouched —
// store composition relies on that identity.

pub mod alerts;
pub mod basic_auth;
pub mod branch_configs;
pub mod build_logs;
pub mod build_tasks;
pub mod builds;
pub mod domains;
pub mod members;
pub mod notifications;
pub mod organizations;
pub mod sites;
pub mod user;
pub mod user_env;

use super::action::Action;
use super::state::{AppState, KeyedSlice, SliceState};

/// Fold one action into every slice. Each slice reducer sees the same
/// action and ignores what it doesn't own.
pub fn apply(state: AppState, action: &Action) -> AppState {
    AppState {
        sites: sites::reduce(state.sites, action),
        builds: builds::reduce(state.builds, action),
        build_logs: build_logs::reduce(state.build_logs, action),
        build_tasks: build_tasks::reduce(state.build_tasks, action),
        organizations: organizations::reduce(state.organizations, action),
        organization_roles: organizations::reduce_roles(state.organization_roles, action),
        members: members::reduce(state.members, action),
        domains: domains::reduce(state.domains, action),
        branch_configs: branch_configs::reduce(state.branch_configs, action),
        user_environment_variables: user_env::reduce(state.user_environment_variables, action),
        basic_auth: basic_auth::reduce(state.basic_auth, action),
        user: user::reduce(state.user, action),
        alert: alerts::reduce(state.alert, action),
        notifications: notifications::reduce(state.notifications, action),
    }
}

/// Look up (or create with the default slice) the entry for a parent
/// id and transform it in place.
pub(crate) fn with_entry<T: Default>(
    mut map: KeyedSlice<T>,
    key: i64,
    f: impl FnOnce(SliceState<T>) -> SliceState<T>,
) -> KeyedSlice<T> {
    let entry = map.remove(&key).unwrap_or_default();
    map.insert(key, f(entry));
    map
}

/// Settle `is_loading` for an errored keyed fetch. Only entries that
/// already exist are touched — an error never creates a slice.
pub(crate) fn settle_existing<T>(mut map: KeyedSlice<T>, key: Option<i64>) -> KeyedSlice<T> {
    if let Some(key) = key {
        if let Some(entry) = map.get_mut(&key) {
            entry.is_loading = false;
        }
    }
    map
}
