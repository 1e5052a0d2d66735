// Site-scoped settings endpoints
//
// Custom domains, user environment variables, and preview basic-auth.
// All three are keyed by site id on both the API and in the store.

use crate::client::ApiClient;
use crate::error::Error;
use crate::types::{
    AddDomainRequest, AddUserEnvironmentVariableRequest, BasicAuthCredentials, Domain,
    UserEnvironmentVariable,
};

impl ApiClient {
    // ── Custom domains ───────────────────────────────────────────────

    pub async fn fetch_site_domains(&self, site_id: i64) -> Result<Vec<Domain>, Error> {
        self.get(&format!("site/{site_id}/domains")).await
    }

    /// Register a custom domain for a deploy context. Provisioning is
    /// asynchronous; the returned record starts in `pending`.
    pub async fn add_site_domain(
        &self,
        site_id: i64,
        body: &AddDomainRequest,
    ) -> Result<Domain, Error> {
        self.post(&format!("site/{site_id}/domain"), body).await
    }

    pub async fn delete_site_domain(&self, site_id: i64, domain_id: i64) -> Result<(), Error> {
        self.delete(&format!("site/{site_id}/domain/{domain_id}"))
            .await
    }

    // ── User environment variables ───────────────────────────────────

    pub async fn fetch_user_environment_variables(
        &self,
        site_id: i64,
    ) -> Result<Vec<UserEnvironmentVariable>, Error> {
        self.get(&format!("site/{site_id}/user-environment-variable"))
            .await
    }

    /// Create an environment variable. The response echoes a hint, not
    /// the value.
    pub async fn add_user_environment_variable(
        &self,
        site_id: i64,
        body: &AddUserEnvironmentVariableRequest,
    ) -> Result<UserEnvironmentVariable, Error> {
        self.post(&format!("site/{site_id}/user-environment-variable"), body)
            .await
    }

    pub async fn delete_user_environment_variable(
        &self,
        site_id: i64,
        uev_id: i64,
    ) -> Result<(), Error> {
        self.delete(&format!(
            "site/{site_id}/user-environment-variable/{uev_id}"
        ))
        .await
    }

    // ── Preview basic auth ───────────────────────────────────────────

    pub async fn fetch_basic_auth(&self, site_id: i64) -> Result<BasicAuthCredentials, Error> {
        self.get(&format!("site/{site_id}/basic-auth")).await
    }

    /// Set (or replace) the basic-auth credentials for site previews.
    pub async fn save_basic_auth(
        &self,
        site_id: i64,
        creds: &BasicAuthCredentials,
    ) -> Result<BasicAuthCredentials, Error> {
        self.post(&format!("site/{site_id}/basic-auth"), creds).await
    }

    pub async fn remove_basic_auth(&self, site_id: i64) -> Result<(), Error> {
        self.delete(&format!("site/{site_id}/basic-auth")).await
    }
}
