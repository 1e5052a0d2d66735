use sitedeck_api::Build;

use crate::store::action::Action;
use crate::store::state::SliceState;

pub fn reduce(state: SliceState<Vec<Build>>, action: &Action) -> SliceState<Vec<Build>> {
    match action {
        Action::BuildsFetchStarted => SliceState::loading(state.data),
        Action::BuildsReceived(builds) => SliceState::loaded(builds.clone()),
        Action::BuildReceived(build) => {
            // Replace-or-prepend: a polled refresh of a known build
            // updates it in place, an unknown one lands at the front.
            let mut data = state.data;
            if let Some(slot) = data.iter_mut().find(|b| b.id == build.id) {
                *slot = build.clone();
            } else {
                data.insert(0, build.clone());
            }
            SliceState {
                is_loading: state.is_loading,
                data,
            }
        }
        Action::BuildRestarted(build) => {
            let mut data = state.data;
            data.insert(0, build.clone());
            SliceState::loaded(data)
        }
        Action::HttpError { .. } => SliceState::loaded(state.data),
        _ => state,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::fixtures::build;
    use sitedeck_api::BuildState;

    #[test]
    fn unknown_action_is_identity() {
        let state = SliceState::loaded(vec![build(10, 1, BuildState::Success)]);
        let ptr = state.data.as_ptr();
        let next = reduce(state, &Action::SitesFetchStarted);
        assert_eq!(next.data.as_ptr(), ptr);
    }

    #[test]
    fn restarted_build_lands_at_front() {
        let state = SliceState::loaded(vec![build(10, 1, BuildState::Success)]);
        let next = reduce(state, &Action::BuildRestarted(build(11, 1, BuildState::Queued)));
        assert_eq!(next.data.iter().map(|b| b.id).collect::<Vec<_>>(), [11, 10]);
    }

    #[test]
    fn polled_build_updates_in_place() {
        let state = SliceState::loaded(vec![
            build(10, 1, BuildState::Processing),
            build(11, 1, BuildState::Queued),
        ]);
        let next = reduce(state, &Action::BuildReceived(build(10, 1, BuildState::Success)));
        assert_eq!(next.data.len(), 2);
        assert_eq!(next.data[0].state, BuildState::Success);
    }

    #[test]
    fn fetch_cycle_toggles_loading() {
        let state = reduce(SliceState::default(), &Action::BuildsFetchStarted);
        assert!(state.is_loading);
        let state = reduce(state, &Action::BuildsReceived(vec![]));
        assert!(!state.is_loading);
    }
}
