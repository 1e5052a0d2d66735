use sitedeck_api::{Organization, OrganizationRole};

use crate::store::action::Action;
use crate::store::state::SliceState;

pub fn reduce(
    state: SliceState<Vec<Organization>>,
    action: &Action,
) -> SliceState<Vec<Organization>> {
    match action {
        Action::OrganizationsFetchStarted => SliceState::loading(state.data),
        Action::OrganizationsReceived(orgs) => SliceState::loaded(orgs.clone()),
        Action::OrganizationReceived(org) => {
            let mut data = state.data;
            if let Some(slot) = data.iter_mut().find(|o| o.id == org.id) {
                *slot = org.clone();
            } else {
                data.push(org.clone());
            }
            SliceState::loaded(data)
        }
        Action::HttpError { .. } => SliceState::loaded(state.data),
        _ => state,
    }
}

pub fn reduce_roles(
    state: SliceState<Vec<OrganizationRole>>,
    action: &Action,
) -> SliceState<Vec<OrganizationRole>> {
    match action {
        Action::OrganizationRolesFetchStarted => SliceState::loading(state.data),
        Action::OrganizationRolesReceived(roles) => SliceState::loaded(roles.clone()),
        Action::HttpError { .. } => SliceState::loaded(state.data),
        _ => state,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::fixtures::org;

    #[test]
    fn single_org_refresh_updates_in_place() {
        let state = SliceState::loaded(vec![org(1, "alpha"), org(2, "beta")]);
        let next = reduce(state, &Action::OrganizationReceived(org(2, "beta-renamed")));
        assert_eq!(next.data.len(), 2);
        assert_eq!(next.data[1].name, "beta-renamed");
    }

    #[test]
    fn unknown_org_is_appended() {
        let state = SliceState::loaded(vec![org(1, "alpha")]);
        let next = reduce(state, &Action::OrganizationReceived(org(3, "gamma")));
        assert_eq!(next.data.len(), 2);
    }

    #[test]
    fn roles_identity_on_unrelated_action() {
        let state = SliceState::default();
        let next = reduce_roles(state.clone(), &Action::SitesFetchStarted);
        assert_eq!(next, state);
    }
}
