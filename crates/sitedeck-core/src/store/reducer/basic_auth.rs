use sitedeck_api::BasicAuthCredentials;

use crate::store::action::Action;
use crate::store::reducer::{settle_existing, with_entry};
use crate::store::state::{KeyedSlice, SliceState};

pub fn reduce(
    state: KeyedSlice<Option<BasicAuthCredentials>>,
    action: &Action,
) -> KeyedSlice<Option<BasicAuthCredentials>> {
    match action {
        Action::BasicAuthFetchStarted { site_id } => with_entry(state, *site_id, |entry| {
            SliceState::loading(entry.data)
        }),
        // The server answers 404 when no credentials are set; the sync
        // layer maps that to `credentials: None` before dispatching.
        Action::BasicAuthReceived { site_id, credentials } => {
            with_entry(state, *site_id, |_| SliceState::loaded(credentials.clone()))
        }
        Action::BasicAuthSaved { site_id, credentials } => with_entry(state, *site_id, |_| {
            SliceState::loaded(Some(credentials.clone()))
        }),
        Action::BasicAuthRemoved { site_id } => {
            with_entry(state, *site_id, |_| SliceState::loaded(None))
        }
        Action::HttpError { key, .. } => settle_existing(state, *key),
        _ => state,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn creds() -> BasicAuthCredentials {
        BasicAuthCredentials {
            username: "u".into(),
            password: "p".into(),
        }
    }

    #[test]
    fn fetch_then_receive_settles_with_credentials() {
        let state = reduce(
            KeyedSlice::default(),
            &Action::BasicAuthFetchStarted { site_id: 1 },
        );
        assert!(state[&1].is_loading);

        let state = reduce(
            state,
            &Action::BasicAuthReceived {
                site_id: 1,
                credentials: Some(creds()),
            },
        );
        let entry = &state[&1];
        assert!(!entry.is_loading);
        assert_eq!(entry.data, Some(creds()));
    }

    #[test]
    fn remove_clears_credentials() {
        let state = reduce(
            KeyedSlice::default(),
            &Action::BasicAuthSaved {
                site_id: 1,
                credentials: creds(),
            },
        );
        let state = reduce(state, &Action::BasicAuthRemoved { site_id: 1 });
        assert_eq!(state[&1].data, None);
    }

    #[test]
    fn error_does_not_create_an_entry() {
        let state = reduce(
            KeyedSlice::default(),
            &Action::HttpError {
                message: "boom".into(),
                key: Some(7),
            },
        );
        assert!(state.is_empty());
    }
}
