//! Notification side-effect table.
//!
//! Maps action kinds to toast templates. The store consults the table
//! on every dispatch and folds the resulting `NotificationShown` into
//! the same state transition, so success toasts can never observe a
//! half-applied action.

use std::collections::HashMap;

use super::action::{Action, ActionKind};
use super::state::{Notification, NotificationKind};

/// Toast template registered for one action kind.
#[derive(Debug, Clone)]
pub struct NotificationSetting {
    pub kind: NotificationKind,
    pub title: String,
    pub message: String,
}

impl NotificationSetting {
    pub fn success(title: &str, message: &str) -> Self {
        Self {
            kind: NotificationKind::Success,
            title: title.into(),
            message: message.into(),
        }
    }

    pub fn info(title: &str, message: &str) -> Self {
        Self {
            kind: NotificationKind::Info,
            title: title.into(),
            message: message.into(),
        }
    }
}

#[derive(Debug)]
pub struct Notifier {
    settings: HashMap<ActionKind, NotificationSetting>,
}

impl Notifier {
    pub fn new(settings: HashMap<ActionKind, NotificationSetting>) -> Self {
        Self { settings }
    }

    /// The toast templates the console ships with. Callers can replace
    /// the table wholesale via [`Notifier::new`].
    pub fn default_settings() -> HashMap<ActionKind, NotificationSetting> {
        let mut settings = HashMap::new();
        settings.insert(
            ActionKind::SiteDeleted,
            NotificationSetting::success("Site deleted", "The site and its builds were removed."),
        );
        settings.insert(
            ActionKind::BuildRestarted,
            NotificationSetting::info("Build queued", "A new build was added to the queue."),
        );
        settings.insert(
            ActionKind::MemberAdded,
            NotificationSetting::success("Member added", "The user now has access."),
        );
        settings.insert(
            ActionKind::MemberRemoved,
            NotificationSetting::success("Member removed", "The user no longer has access."),
        );
        settings.insert(
            ActionKind::BasicAuthSaved,
            NotificationSetting::success("Credentials saved", "Preview protection is active."),
        );
        settings.insert(
            ActionKind::GithubTokenReset,
            NotificationSetting::info("Token cleared", "Reconnect GitHub to keep deploying."),
        );
        settings
    }

    /// The follow-up action for `action`, if its kind is registered.
    pub fn follow_up(&self, action: &Action) -> Option<Action> {
        // NotificationShown itself is never in the table, so the
        // follow-up cannot recurse.
        let setting = self.settings.get(&ActionKind::from(action))?;
        Some(Action::NotificationShown(Notification {
            kind: setting.kind,
            title: setting.title.clone(),
            message: setting.message.clone(),
        }))
    }
}

impl Default for Notifier {
    fn default() -> Self {
        Self::new(Self::default_settings())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registered_kind_yields_one_toast() {
        let notifier = Notifier::default();
        let follow_up = notifier.follow_up(&Action::SiteDeleted(3));
        match follow_up {
            Some(Action::NotificationShown(toast)) => {
                assert_eq!(toast.title, "Site deleted");
            }
            other => panic!("expected a toast, got {other:?}"),
        }
    }

    #[test]
    fn unregistered_kind_yields_nothing() {
        let notifier = Notifier::default();
        assert!(notifier.follow_up(&Action::SitesFetchStarted).is_none());
    }

    #[test]
    fn empty_table_silences_everything() {
        let notifier = Notifier::new(HashMap::new());
        assert!(notifier.follow_up(&Action::SiteDeleted(3)).is_none());
    }
}
