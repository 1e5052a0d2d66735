use sitedeck_api::OrganizationMember;

use crate::store::action::Action;
use crate::store::reducer::{settle_existing, with_entry};
use crate::store::state::{KeyedSlice, SliceState};

pub fn reduce(
    state: KeyedSlice<Vec<OrganizationMember>>,
    action: &Action,
) -> KeyedSlice<Vec<OrganizationMember>> {
    match action {
        Action::MembersFetchStarted { org_id } => with_entry(state, *org_id, |entry| {
            SliceState::loading(entry.data)
        }),
        Action::MembersReceived { org_id, members } => {
            with_entry(state, *org_id, |_| SliceState::loaded(members.clone()))
        }
        // Invite/role/removal calls adjust the local array optimistically
        // on success instead of re-fetching the membership list.
        Action::MemberAdded { org_id, member } => with_entry(state, *org_id, |entry| {
            let mut data = entry.data;
            data.push(member.clone());
            SliceState::loaded(data)
        }),
        Action::MemberUpdated { org_id, member } => with_entry(state, *org_id, |entry| {
            let data = entry
                .data
                .into_iter()
                .map(|m| {
                    if m.user.id == member.user.id {
                        member.clone()
                    } else {
                        m
                    }
                })
                .collect();
            SliceState::loaded(data)
        }),
        Action::MemberRemoved { org_id, user_id } => with_entry(state, *org_id, |entry| {
            let mut data = entry.data;
            data.retain(|m| m.user.id != *user_id);
            SliceState::loaded(data)
        }),
        Action::HttpError { key, .. } => settle_existing(state, *key),
        _ => state,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::fixtures::member;

    #[test]
    fn added_member_appends_to_org_entry() {
        let state = reduce(
            KeyedSlice::default(),
            &Action::MembersReceived {
                org_id: 4,
                members: vec![member(9, "jdoe", "manager")],
            },
        );
        let state = reduce(
            state,
            &Action::MemberAdded {
                org_id: 4,
                member: member(10, "asmith", "user"),
            },
        );
        assert_eq!(state[&4].data.len(), 2);
    }

    #[test]
    fn role_update_replaces_matching_user() {
        let state = reduce(
            KeyedSlice::default(),
            &Action::MembersReceived {
                org_id: 4,
                members: vec![member(9, "jdoe", "user"), member(10, "asmith", "user")],
            },
        );
        let state = reduce(
            state,
            &Action::MemberUpdated {
                org_id: 4,
                member: member(10, "asmith", "manager"),
            },
        );
        assert_eq!(state[&4].data[0].role.name, "user");
        assert_eq!(state[&4].data[1].role.name, "manager");
    }

    #[test]
    fn removal_drops_only_the_target_user() {
        let state = reduce(
            KeyedSlice::default(),
            &Action::MembersReceived {
                org_id: 4,
                members: vec![member(9, "jdoe", "user"), member(10, "asmith", "user")],
            },
        );
        let state = reduce(state, &Action::MemberRemoved { org_id: 4, user_id: 9 });
        assert_eq!(state[&4].data.len(), 1);
        assert_eq!(state[&4].data[0].user.username, "asmith");
    }
}
