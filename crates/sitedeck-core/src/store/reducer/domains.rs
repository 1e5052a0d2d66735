use sitedeck_api::Domain;

use crate::store::action::Action;
use crate::store::reducer::{settle_existing, with_entry};
use crate::store::state::{KeyedSlice, SliceState};

pub fn reduce(state: KeyedSlice<Vec<Domain>>, action: &Action) -> KeyedSlice<Vec<Domain>> {
    match action {
        Action::DomainsFetchStarted { site_id } => with_entry(state, *site_id, |entry| {
            SliceState::loading(entry.data)
        }),
        Action::DomainsReceived { site_id, domains } => {
            with_entry(state, *site_id, |_| SliceState::loaded(domains.clone()))
        }
        Action::DomainAdded { site_id, domain } => with_entry(state, *site_id, |entry| {
            let mut data = entry.data;
            data.push(domain.clone());
            SliceState::loaded(data)
        }),
        Action::DomainDeleted { site_id, domain_id } => with_entry(state, *site_id, |entry| {
            let mut data = entry.data;
            data.retain(|d| d.id != *domain_id);
            SliceState::loaded(data)
        }),
        Action::HttpError { key, .. } => settle_existing(state, *key),
        _ => state,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::fixtures::domain;

    #[test]
    fn delete_removes_by_domain_id() {
        let state = reduce(
            KeyedSlice::default(),
            &Action::DomainsReceived {
                site_id: 1,
                domains: vec![domain(5, 1), domain(6, 1)],
            },
        );
        let state = reduce(state, &Action::DomainDeleted { site_id: 1, domain_id: 5 });
        assert_eq!(state[&1].data.len(), 1);
        assert_eq!(state[&1].data[0].id, 6);
    }
}
