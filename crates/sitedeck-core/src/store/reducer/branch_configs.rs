use sitedeck_api::BranchConfig;

use crate::store::action::Action;
use crate::store::reducer::{settle_existing, with_entry};
use crate::store::state::{KeyedSlice, SliceState};

pub fn reduce(
    state: KeyedSlice<Vec<BranchConfig>>,
    action: &Action,
) -> KeyedSlice<Vec<BranchConfig>> {
    match action {
        Action::BranchConfigsFetchStarted { site_id } => with_entry(state, *site_id, |entry| {
            SliceState::loading(entry.data)
        }),
        Action::BranchConfigsReceived { site_id, configs } => {
            with_entry(state, *site_id, |_| SliceState::loaded(configs.clone()))
        }
        // The API upserts one config per deploy context.
        Action::BranchConfigUpdated { site_id, config } => with_entry(state, *site_id, |entry| {
            let mut data = entry.data;
            match data.iter_mut().find(|c| c.context == config.context) {
                Some(slot) => *slot = config.clone(),
                None => data.push(config.clone()),
            }
            SliceState::loaded(data)
        }),
        Action::HttpError { key, .. } => settle_existing(state, *key),
        _ => state,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sitedeck_api::BranchContext;

    fn config(id: i64, branch: &str, context: BranchContext) -> BranchConfig {
        BranchConfig {
            id,
            branch: branch.into(),
            context,
            config: serde_json::Value::Null,
        }
    }

    #[test]
    fn update_replaces_config_for_same_context() {
        let state = reduce(
            KeyedSlice::default(),
            &Action::BranchConfigsReceived {
                site_id: 1,
                configs: vec![config(1, "main", BranchContext::Site)],
            },
        );
        let state = reduce(
            state,
            &Action::BranchConfigUpdated {
                site_id: 1,
                config: config(2, "release", BranchContext::Site),
            },
        );
        assert_eq!(state[&1].data.len(), 1);
        assert_eq!(state[&1].data[0].branch, "release");
    }

    #[test]
    fn update_appends_config_for_new_context() {
        let state = reduce(
            KeyedSlice::default(),
            &Action::BranchConfigUpdated {
                site_id: 1,
                config: config(3, "demo", BranchContext::Demo),
            },
        );
        assert_eq!(state[&1].data.len(), 1);
    }
}
