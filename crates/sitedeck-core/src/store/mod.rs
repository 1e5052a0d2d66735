//! Client-side state store.
//!
//! A single [`AppState`] tree, mutated only through [`Store::dispatch`]:
//! each action is folded through the pure reducers, an optional
//! notification follow-up from the [`Notifier`] is folded into the same
//! transition, and the resulting snapshot is published to subscribers.

use std::sync::Arc;

use tokio::sync::watch;
use tracing::trace;

pub mod action;
pub mod notifier;
pub mod reducer;
pub mod selectors;
pub mod state;

pub use action::{Action, ActionKind};
pub use notifier::Notifier;
pub use state::{
    Alert, AlertStatus, AppState, BuildLog, KeyedSlice, Notification, NotificationKind, SliceState,
};

/// Dispatch entry point and snapshot source.
///
/// The watch channel serializes mutations: `send_modify` runs the
/// reducer fold under the channel's internal lock, so concurrent
/// dispatches from different tasks apply one at a time and every
/// subscriber observes a consistent snapshot.
#[derive(Debug)]
pub struct Store {
    state: watch::Sender<Arc<AppState>>,
    notifier: Notifier,
}

impl Store {
    pub fn new() -> Self {
        Self::with_notifier(Notifier::default())
    }

    pub fn with_notifier(notifier: Notifier) -> Self {
        let (state, _) = watch::channel(Arc::new(AppState::default()));
        Self { state, notifier }
    }

    /// Apply one action (plus its notification follow-up, if the
    /// notifier has one registered) as a single state transition.
    pub fn dispatch(&self, action: Action) {
        trace!(kind = ?ActionKind::from(&action), "dispatch");
        let follow_up = self.notifier.follow_up(&action);
        self.state.send_modify(|snapshot| {
            let mut next = reducer::apply((**snapshot).clone(), &action);
            if let Some(follow_up) = &follow_up {
                next = reducer::apply(next, follow_up);
            }
            *snapshot = Arc::new(next);
        });
    }

    /// Current snapshot. Cheap: clones an `Arc`, not the tree.
    pub fn state(&self) -> Arc<AppState> {
        self.state.borrow().clone()
    }

    /// Watch receiver that yields every published snapshot.
    pub fn subscribe(&self) -> watch::Receiver<Arc<AppState>> {
        self.state.subscribe()
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
pub(crate) mod fixtures {
    use chrono::{TimeZone, Utc};
    use sitedeck_api::{
        Build, BuildState, Domain, DomainState, Organization, OrganizationMember,
        OrganizationRole, Site, SiteUser, User, UserEnvironmentVariable,
    };
    use sitedeck_api::BranchContext;

    pub fn site(id: i64, organization_id: Option<i64>) -> Site {
        Site {
            id,
            owner: "octocat".into(),
            repository: format!("site-{id}"),
            engine: "hugo".into(),
            default_branch: "main".into(),
            demo_branch: None,
            domain: None,
            demo_domain: None,
            organization_id,
            users: Vec::new(),
            is_active: true,
            created_at: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
            updated_at: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
        }
    }

    pub fn build(id: i64, site: i64, state: BuildState) -> Build {
        Build {
            id,
            site,
            branch: "main".into(),
            state,
            requested_commit_sha: None,
            username: None,
            error: None,
            created_at: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
            started_at: None,
            completed_at: None,
        }
    }

    pub fn org(id: i64, name: &str) -> Organization {
        Organization {
            id,
            name: name.into(),
            is_sandbox: false,
            is_active: true,
        }
    }

    pub fn member(user_id: i64, username: &str, role_name: &str) -> OrganizationMember {
        OrganizationMember {
            user: SiteUser {
                id: user_id,
                username: username.into(),
                email: None,
            },
            role: OrganizationRole {
                id: 1,
                name: role_name.into(),
            },
        }
    }

    pub fn domain(id: i64, site_id: i64) -> Domain {
        Domain {
            id,
            site_id,
            names: format!("example-{id}.org"),
            context: BranchContext::Site,
            state: DomainState::Created,
        }
    }

    pub fn uev(id: i64, name: &str) -> UserEnvironmentVariable {
        UserEnvironmentVariable {
            id,
            name: name.into(),
            hint: None,
        }
    }

    pub fn user(id: i64, username: &str) -> User {
        User {
            id,
            username: username.into(),
            email: None,
            has_github_auth: false,
            settings: sitedeck_api::UserSettings::default(),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::store::fixtures::site;

    #[test]
    fn dispatch_publishes_a_new_snapshot() {
        let store = Store::new();
        let before = store.state();

        store.dispatch(Action::SitesReceived(vec![site(1, None)]));

        let after = store.state();
        assert!(!Arc::ptr_eq(&before, &after));
        assert_eq!(after.sites.data.len(), 1);
    }

    #[test]
    fn notifier_follow_up_lands_in_the_same_snapshot() {
        let store = Store::new();
        let mut rx = store.subscribe();
        rx.borrow_and_update();

        store.dispatch(Action::SiteDeleted(1));

        // One transition only: the toast is folded in before publish.
        let snapshot = rx.borrow_and_update();
        assert_eq!(snapshot.notifications.len(), 1);
        drop(snapshot);
        assert!(!rx.has_changed().unwrap());
    }
}
