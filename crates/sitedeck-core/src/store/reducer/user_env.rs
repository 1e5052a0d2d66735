use sitedeck_api::UserEnvironmentVariable;

use crate::store::action::Action;
use crate::store::reducer::{settle_existing, with_entry};
use crate::store::state::{KeyedSlice, SliceState};

pub fn reduce(
    state: KeyedSlice<Vec<UserEnvironmentVariable>>,
    action: &Action,
) -> KeyedSlice<Vec<UserEnvironmentVariable>> {
    match action {
        Action::UserEnvironmentVariablesFetchStarted { site_id } => {
            with_entry(state, *site_id, |entry| SliceState::loading(entry.data))
        }
        Action::UserEnvironmentVariablesReceived { site_id, variables } => {
            with_entry(state, *site_id, |_| SliceState::loaded(variables.clone()))
        }
        Action::UserEnvironmentVariableAdded { site_id, variable } => {
            with_entry(state, *site_id, |entry| {
                let mut data = entry.data;
                data.push(variable.clone());
                SliceState::loaded(data)
            })
        }
        Action::UserEnvironmentVariableDeleted { site_id, variable_id } => {
            with_entry(state, *site_id, |entry| {
                let mut data = entry.data;
                data.retain(|v| v.id != *variable_id);
                SliceState::loaded(data)
            })
        }
        Action::HttpError { key, .. } => settle_existing(state, *key),
        _ => state,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::fixtures::uev;

    #[test]
    fn delete_removes_only_matching_variable() {
        let state = reduce(
            KeyedSlice::default(),
            &Action::UserEnvironmentVariablesReceived {
                site_id: 1,
                variables: vec![uev(2, "A"), uev(3, "B")],
            },
        );

        let state = reduce(
            state,
            &Action::UserEnvironmentVariableDeleted {
                site_id: 1,
                variable_id: 2,
            },
        );

        let entry = &state[&1];
        assert!(!entry.is_loading);
        assert_eq!(entry.data.len(), 1);
        assert_eq!(entry.data[0].id, 3);
    }

    #[test]
    fn failed_create_leaves_slice_unchanged() {
        let state = reduce(
            KeyedSlice::default(),
            &Action::UserEnvironmentVariablesReceived {
                site_id: 1,
                variables: vec![uev(2, "A")],
            },
        );
        let before = state.clone();

        let state = reduce(
            state,
            &Action::HttpError {
                message: "name already used".into(),
                key: Some(1),
            },
        );

        assert_eq!(state[&1].data, before[&1].data);
        assert!(!state[&1].is_loading);
    }

    #[test]
    fn fetch_defaults_missing_entry() {
        let state = reduce(
            KeyedSlice::default(),
            &Action::UserEnvironmentVariablesFetchStarted { site_id: 8 },
        );
        assert!(state[&8].is_loading);
        assert!(state[&8].data.is_empty());
    }
}
