// Site endpoints
//
// List/create/update/delete for sites, plus branch configurations.

use crate::client::ApiClient;
use crate::error::Error;
use crate::types::{
    AddSiteRequest, BranchConfig, BranchConfigRequest, Site, UpdateSiteRequest,
};

impl ApiClient {
    /// Fetch all sites visible to the current user.
    pub async fn fetch_sites(&self) -> Result<Vec<Site>, Error> {
        self.get("site").await
    }

    /// Create a site from an existing repository or a starter template.
    pub async fn add_site(&self, body: &AddSiteRequest) -> Result<Site, Error> {
        self.post("site", body).await
    }

    /// Update site settings. Returns the full updated site.
    pub async fn update_site(
        &self,
        site_id: i64,
        body: &UpdateSiteRequest,
    ) -> Result<Site, Error> {
        self.put(&format!("site/{site_id}"), body).await
    }

    /// Remove a site from the platform (the repository is untouched).
    pub async fn delete_site(&self, site_id: i64) -> Result<(), Error> {
        self.delete(&format!("site/{site_id}")).await
    }

    // ── Branch configurations ────────────────────────────────────────

    pub async fn fetch_branch_configs(&self, site_id: i64) -> Result<Vec<BranchConfig>, Error> {
        self.get(&format!("site/{site_id}/branch-config")).await
    }

    /// Create or replace the branch configuration for a deploy context.
    pub async fn update_site_branch_config(
        &self,
        site_id: i64,
        body: &BranchConfigRequest,
    ) -> Result<BranchConfig, Error> {
        self.post(&format!("site/{site_id}/branch-config"), body)
            .await
    }
}
