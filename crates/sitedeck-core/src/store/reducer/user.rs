use sitedeck_api::User;

use crate::store::action::Action;
use crate::store::state::SliceState;

pub fn reduce(state: SliceState<Option<User>>, action: &Action) -> SliceState<Option<User>> {
    match action {
        Action::UserFetchStarted => SliceState::loading(state.data),
        Action::UserReceived(user) => SliceState::loaded(Some(user.clone())),
        Action::UserSettingsUpdated(settings) => {
            let data = state.data.map(|mut user| {
                user.settings = settings.clone();
                user
            });
            SliceState::loaded(data)
        }
        Action::GithubTokenReset => {
            let data = state.data.map(|mut user| {
                user.has_github_auth = false;
                user
            });
            SliceState::loaded(data)
        }
        Action::HttpError { .. } => SliceState::loaded(state.data),
        _ => state,
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::store::fixtures::user;
    use sitedeck_api::UserSettings;
    use std::collections::HashMap;

    #[test]
    fn settings_update_preserves_the_rest_of_the_profile() {
        let state = SliceState::loaded(Some(user(1, "jdoe")));
        let mut prefs = HashMap::new();
        prefs.insert("buildFailed".to_string(), "email".to_string());
        let next = reduce(
            state,
            &Action::UserSettingsUpdated(UserSettings {
                build_notification_settings: prefs.clone(),
            }),
        );
        let user = next.data.unwrap();
        assert_eq!(user.username, "jdoe");
        assert_eq!(user.settings.build_notification_settings, prefs);
    }

    #[test]
    fn github_token_reset_flips_the_auth_flag() {
        let mut u = user(1, "jdoe");
        u.has_github_auth = true;
        let next = reduce(SliceState::loaded(Some(u)), &Action::GithubTokenReset);
        assert!(!next.data.unwrap().has_github_auth);
    }

    #[test]
    fn settings_update_before_profile_load_is_a_no_op() {
        let next = reduce(
            SliceState::default(),
            &Action::UserSettingsUpdated(UserSettings::default()),
        );
        assert_eq!(next.data, None);
    }
}
