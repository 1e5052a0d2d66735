// Build endpoints
//
// Build history, restarts, offset-chunked logs, and post-build tasks.

use crate::client::ApiClient;
use crate::error::Error;
use crate::types::{Build, BuildLogChunk, BuildTask, RestartBuildRequest};

impl ApiClient {
    /// Fetch the build history for a site.
    pub async fn fetch_builds(&self, site_id: i64) -> Result<Vec<Build>, Error> {
        self.get(&format!("site/{site_id}/build")).await
    }

    /// Fetch a single build (used when polling a non-terminal state).
    pub async fn fetch_build(&self, build_id: i64) -> Result<Build, Error> {
        self.get(&format!("build/{build_id}")).await
    }

    /// Queue a new build of the same branch/commit as an existing one.
    pub async fn restart_build(&self, build_id: i64, site_id: i64) -> Result<Build, Error> {
        self.post("build", &RestartBuildRequest { build_id, site_id })
            .await
    }

    /// Fetch build log lines starting at the given line offset.
    pub async fn fetch_build_log(
        &self,
        build_id: i64,
        offset: u64,
    ) -> Result<BuildLogChunk, Error> {
        self.get(&format!("build/{build_id}/log/offset/{offset}"))
            .await
    }

    /// Fetch post-build tasks (scans/reports) for a build.
    pub async fn fetch_build_tasks(&self, build_id: i64) -> Result<Vec<BuildTask>, Error> {
        self.get(&format!("build/{build_id}/tasks")).await
    }
}
