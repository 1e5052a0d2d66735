//! Pure projections over individual slices.
//!
//! Selectors never take the whole tree when a slice will do, never
//! allocate copies of stored entities (they hand out references into
//! the snapshot), and report absence as `None`/`false`/empty instead
//! of erroring.

use std::str::FromStr;

use sitedeck_api::{Organization, OrganizationMember, Site};

use super::state::{KeyedSlice, SliceState};

/// Site-list filter by owning organization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrgFilter {
    /// No filtering.
    All,
    /// Sites with no owning organization.
    Unassociated,
    Org(i64),
}

impl FromStr for OrgFilter {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all-options" => Ok(Self::All),
            "unassociated" => Ok(Self::Unassociated),
            other => other.parse().map(Self::Org),
        }
    }
}

/// One entry of the organization filter dropdown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterOption {
    pub value: OrgFilter,
    pub label: String,
}

/// Look up a site by its route parameter. Route params arrive as
/// strings; an unparsable or unknown id is `None`, a hit is a
/// reference to the stored entity itself.
pub fn current_site<'a>(sites: &'a SliceState<Vec<Site>>, id_param: &str) -> Option<&'a Site> {
    let id: i64 = id_param.parse().ok()?;
    sites.data.iter().find(|site| site.id == id)
}

/// The site list narrowed to one organization bucket.
pub fn group_sites_by_org<'a>(
    sites: &'a SliceState<Vec<Site>>,
    filter: OrgFilter,
) -> Vec<&'a Site> {
    sites
        .data
        .iter()
        .filter(|site| match filter {
            OrgFilter::All => true,
            OrgFilter::Unassociated => site.organization_id.is_none(),
            OrgFilter::Org(id) => site.organization_id == Some(id),
        })
        .collect()
}

pub fn has_orgs(organizations: &SliceState<Vec<Organization>>) -> bool {
    !organizations.data.is_empty()
}

/// Dropdown options for the org filter, or `None` when the user has no
/// organizations and the dropdown should not render at all.
pub fn org_filter_options(
    organizations: &SliceState<Vec<Organization>>,
) -> Option<Vec<FilterOption>> {
    if organizations.data.is_empty() {
        return None;
    }
    let mut options = vec![
        FilterOption {
            value: OrgFilter::All,
            label: "All".into(),
        },
        FilterOption {
            value: OrgFilter::Unassociated,
            label: "Unassociated".into(),
        },
    ];
    options.extend(organizations.data.iter().map(|org| FilterOption {
        value: OrgFilter::Org(org.id),
        label: org.name.clone(),
    }));
    Some(options)
}

pub fn organization_by_id(
    organizations: &SliceState<Vec<Organization>>,
    id: i64,
) -> Option<&Organization> {
    organizations.data.iter().find(|org| org.id == id)
}

/// Whether `user_id` holds the manager role in the given org's
/// membership slice. Unfetched membership reads as not-a-manager.
pub fn is_org_manager(
    members: &KeyedSlice<Vec<OrganizationMember>>,
    org_id: i64,
    user_id: i64,
) -> bool {
    members
        .get(&org_id)
        .is_some_and(|entry| {
            entry
                .data
                .iter()
                .any(|m| m.user.id == user_id && m.role.name == "manager")
        })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::store::fixtures::{member, org, site};
    use crate::store::reducer::with_entry;

    #[test]
    fn current_site_coerces_route_params() {
        let sites = SliceState::loaded(vec![site(1, None), site(2, None)]);
        let found = current_site(&sites, "2").unwrap();
        assert!(std::ptr::eq(found, &sites.data[1]));

        assert!(current_site(&sites, "99").is_none());
        assert!(current_site(&sites, "not-a-number").is_none());
    }

    #[test]
    fn group_sites_partitions_by_org() {
        let sites = SliceState::loaded(vec![site(1, None), site(2, Some(7)), site(3, Some(8))]);

        assert_eq!(group_sites_by_org(&sites, OrgFilter::All).len(), 3);

        let unassociated = group_sites_by_org(&sites, OrgFilter::Unassociated);
        assert_eq!(unassociated.len(), 1);
        assert_eq!(unassociated[0].id, 1);

        let org7 = group_sites_by_org(&sites, OrgFilter::Org(7));
        assert_eq!(org7.len(), 1);
        assert_eq!(org7[0].id, 2);
    }

    #[test]
    fn filter_parses_reserved_strings_and_ids() {
        assert_eq!("all-options".parse(), Ok(OrgFilter::All));
        assert_eq!("unassociated".parse(), Ok(OrgFilter::Unassociated));
        assert_eq!("42".parse(), Ok(OrgFilter::Org(42)));
        assert!("bogus".parse::<OrgFilter>().is_err());
    }

    #[test]
    fn filter_options_absent_without_orgs() {
        assert_eq!(org_filter_options(&SliceState::default()), None);

        let orgs = SliceState::loaded(vec![org(7, "acme")]);
        let options = org_filter_options(&orgs).unwrap();
        assert_eq!(options.len(), 3);
        assert_eq!(options[2].label, "acme");
    }

    #[test]
    fn manager_check_reads_unfetched_membership_as_false() {
        let members = KeyedSlice::default();
        assert!(!is_org_manager(&members, 4, 9));

        let members = with_entry(members, 4, |entry| {
            SliceState::loaded({
                let mut data = entry.data;
                data.push(member(9, "jdoe", "manager"));
                data.push(member(10, "asmith", "user"));
                data
            })
        });
        assert!(is_org_manager(&members, 4, 9));
        assert!(!is_org_manager(&members, 4, 10));
    }
}
