use sitedeck_api::BuildTask;

use crate::store::action::Action;
use crate::store::reducer::{settle_existing, with_entry};
use crate::store::state::{KeyedSlice, SliceState};

pub fn reduce(state: KeyedSlice<Vec<BuildTask>>, action: &Action) -> KeyedSlice<Vec<BuildTask>> {
    match action {
        Action::BuildTasksFetchStarted { build_id } => with_entry(state, *build_id, |entry| {
            SliceState::loading(entry.data)
        }),
        Action::BuildTasksReceived { build_id, tasks } => {
            with_entry(state, *build_id, |_| SliceState::loaded(tasks.clone()))
        }
        Action::HttpError { key, .. } => settle_existing(state, *key),
        _ => state,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fetch_creates_default_entry() {
        let state = reduce(KeyedSlice::default(), &Action::BuildTasksFetchStarted { build_id: 3 });
        let entry = &state[&3];
        assert!(entry.is_loading);
        assert!(entry.data.is_empty());
    }

    #[test]
    fn unknown_action_is_identity() {
        let state = reduce(KeyedSlice::default(), &Action::RouteChanged);
        assert!(state.is_empty());
    }
}
