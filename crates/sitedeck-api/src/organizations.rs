// Organization endpoints
//
// Organization listing and membership management (invite / role
// update / removal).

use crate::client::ApiClient;
use crate::error::Error;
use crate::types::{
    InviteRequest, InviteResult, Organization, OrganizationMember, OrganizationRole,
    UpdateMemberRequest,
};

impl ApiClient {
    /// Fetch all organizations the current user belongs to.
    pub async fn fetch_organizations(&self) -> Result<Vec<Organization>, Error> {
        self.get("organization").await
    }

    pub async fn fetch_organization(&self, org_id: i64) -> Result<Organization, Error> {
        self.get(&format!("organization/{org_id}")).await
    }

    pub async fn fetch_organization_members(
        &self,
        org_id: i64,
    ) -> Result<Vec<OrganizationMember>, Error> {
        self.get(&format!("organization/{org_id}/members")).await
    }

    /// Invite a user by email. An existing platform user becomes a
    /// member immediately; otherwise a pending invite link is returned.
    pub async fn invite_to_organization(
        &self,
        org_id: i64,
        body: &InviteRequest,
    ) -> Result<InviteResult, Error> {
        self.post(&format!("organization/{org_id}/invite"), body)
            .await
    }

    /// Change a member's role.
    pub async fn update_organization_role(
        &self,
        org_id: i64,
        user_id: i64,
        role_id: i64,
    ) -> Result<OrganizationMember, Error> {
        self.put(
            &format!("organization/{org_id}/member/{user_id}"),
            &UpdateMemberRequest { role_id },
        )
        .await
    }

    pub async fn remove_organization_member(
        &self,
        org_id: i64,
        user_id: i64,
    ) -> Result<(), Error> {
        self.delete(&format!("organization/{org_id}/member/{user_id}"))
            .await
    }

    /// Fetch the fixed set of assignable roles (manager / user).
    pub async fn fetch_organization_roles(&self) -> Result<Vec<OrganizationRole>, Error> {
        self.get("organization-role").await
    }
}
