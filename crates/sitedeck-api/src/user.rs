// Current-user endpoints

use crate::client::ApiClient;
use crate::error::Error;
use crate::types::{User, UserSettings};

impl ApiClient {
    /// Fetch the authenticated user.
    pub async fn fetch_me(&self) -> Result<User, Error> {
        self.get("me").await
    }

    /// Update notification settings. Returns the full updated user.
    pub async fn update_me_settings(&self, settings: &UserSettings) -> Result<User, Error> {
        self.put("me/settings", settings).await
    }

    /// Revoke the stored GitHub OAuth token.
    pub async fn reset_github_token(&self) -> Result<(), Error> {
        self.delete("me/githubtoken").await
    }
}
