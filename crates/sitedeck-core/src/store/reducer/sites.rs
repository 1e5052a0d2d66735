use sitedeck_api::Site;

use crate::store::action::Action;
use crate::store::state::SliceState;

pub fn reduce(state: SliceState<Vec<Site>>, action: &Action) -> SliceState<Vec<Site>> {
    match action {
        Action::SitesFetchStarted => SliceState::loading(state.data),
        Action::SitesReceived(sites) => SliceState::loaded(sites.clone()),
        Action::SiteAdded(site) => {
            let mut data = state.data;
            data.push(site.clone());
            SliceState::loaded(data)
        }
        Action::SiteUpdated(site) => {
            let data = state
                .data
                .into_iter()
                .map(|s| if s.id == site.id { site.clone() } else { s })
                .collect();
            SliceState::loaded(data)
        }
        Action::SiteDeleted(site_id) => {
            let mut data = state.data;
            data.retain(|s| s.id != *site_id);
            SliceState::loaded(data)
        }
        Action::HttpError { .. } => SliceState::loaded(state.data),
        _ => state,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::fixtures::site;

    #[test]
    fn unknown_action_is_identity() {
        let state = SliceState::loaded(vec![site(1, None)]);
        let ptr = state.data.as_ptr();

        let next = reduce(state, &Action::UserFetchStarted);

        // Moved through untouched: same heap buffer.
        assert_eq!(next.data.as_ptr(), ptr);
        assert!(!next.is_loading);
    }

    #[test]
    fn fetch_started_keeps_stale_data() {
        let state = SliceState::loaded(vec![site(1, None)]);
        let next = reduce(state, &Action::SitesFetchStarted);
        assert!(next.is_loading);
        assert_eq!(next.data.len(), 1);
    }

    #[test]
    fn received_replaces_collection() {
        let state = SliceState::loading(vec![site(1, None)]);
        let next = reduce(state, &Action::SitesReceived(vec![site(2, None), site(3, None)]));
        assert!(!next.is_loading);
        assert_eq!(next.data.iter().map(|s| s.id).collect::<Vec<_>>(), [2, 3]);
    }

    #[test]
    fn updated_replaces_single_entry() {
        let state = SliceState::loaded(vec![site(1, None), site(2, None)]);
        let mut patched = site(2, Some(9));
        patched.engine = "jekyll".into();

        let next = reduce(state, &Action::SiteUpdated(patched));

        assert_eq!(next.data[0].engine, "hugo");
        assert_eq!(next.data[1].engine, "jekyll");
        assert_eq!(next.data[1].organization_id, Some(9));
    }

    #[test]
    fn deleted_removes_entry() {
        let state = SliceState::loaded(vec![site(1, None), site(2, None)]);
        let next = reduce(state, &Action::SiteDeleted(1));
        assert_eq!(next.data.len(), 1);
        assert_eq!(next.data[0].id, 2);
    }

    #[test]
    fn http_error_settles_loading_and_preserves_data() {
        let state = SliceState::loading(vec![site(1, None)]);
        let next = reduce(
            state,
            &Action::HttpError {
                message: "boom".into(),
                key: None,
            },
        );
        assert!(!next.is_loading);
        assert_eq!(next.data.len(), 1);
    }
}
