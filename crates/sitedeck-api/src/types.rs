// ── Wire types for the platform REST API ──
//
// These are client-side mirrors of server resources, deserialized
// as-is. The store layer in `sitedeck-core` caches them without a
// separate domain-model translation step.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ── Sites ───────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Site {
    pub id: i64,
    /// Repository owner (user or GitHub organization).
    pub owner: String,
    pub repository: String,
    /// Build engine (e.g. "hugo", "jekyll", "node.js", "static").
    pub engine: String,
    pub default_branch: String,
    #[serde(default)]
    pub demo_branch: Option<String>,
    /// Live-site domain, when a custom domain is provisioned.
    #[serde(default)]
    pub domain: Option<String>,
    #[serde(default)]
    pub demo_domain: Option<String>,
    /// Owning organization, absent for legacy user-owned sites.
    #[serde(default)]
    pub organization_id: Option<i64>,
    #[serde(default)]
    pub users: Vec<SiteUser>,
    #[serde(default)]
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteUser {
    pub id: i64,
    pub username: String,
    #[serde(default)]
    pub email: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddSiteRequest {
    pub owner: String,
    pub repository: String,
    pub engine: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub organization_id: Option<i64>,
    /// Name of a starter template to clone instead of an existing repo.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub template: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateSiteRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub engine: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_branch: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub demo_branch: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub demo_domain: Option<String>,
}

// ── Branch configuration ────────────────────────────────────────────

/// Deploy context a branch configuration (or domain) applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BranchContext {
    Site,
    Demo,
    Preview,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BranchConfig {
    pub id: i64,
    pub branch: String,
    pub context: BranchContext,
    /// Site-engine configuration overlay (free-form YAML-as-JSON).
    #[serde(default)]
    pub config: serde_json::Value,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BranchConfigRequest {
    pub branch: String,
    pub context: BranchContext,
    #[serde(default)]
    pub config: serde_json::Value,
}

// ── Builds ──────────────────────────────────────────────────────────

/// Build lifecycle state as reported by the build pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BuildState {
    Queued,
    Created,
    Processing,
    Success,
    Error,
    Skipped,
    /// Build finished but post-build tasks (scans) are still running.
    Tasked,
}

impl BuildState {
    /// Terminal states will not change on re-fetch.
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Success | Self::Error | Self::Skipped)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Build {
    pub id: i64,
    pub site: i64,
    pub branch: String,
    pub state: BuildState,
    #[serde(default)]
    pub requested_commit_sha: Option<String>,
    /// Username of the user who triggered the build, when user-triggered.
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub started_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub completed_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RestartBuildRequest {
    pub build_id: i64,
    pub site_id: i64,
}

/// One chunk of build log output, fetched by line offset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildLogChunk {
    pub state: BuildState,
    /// Offset of the first line in `output` within the full log.
    pub offset: u64,
    #[serde(default)]
    pub output: Vec<String>,
}

// ── Build tasks (scans / reports) ───────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BuildTaskStatus {
    Created,
    Queued,
    Processing,
    Success,
    Error,
    Cancelled,
}

/// Read-only post-build task: an accessibility or security scan whose
/// report is published as a build artifact.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildTask {
    pub id: i64,
    pub build_id: i64,
    #[serde(rename = "type")]
    pub kind: String,
    pub status: BuildTaskStatus,
    /// Number of findings in the produced report, once available.
    #[serde(default)]
    pub count: Option<i64>,
    #[serde(default)]
    pub artifact_url: Option<String>,
}

// ── Organizations ───────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Organization {
    pub id: i64,
    pub name: String,
    /// Sandbox organizations have site/build limits and expiring sites.
    #[serde(default)]
    pub is_sandbox: bool,
    #[serde(default)]
    pub is_active: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrganizationRole {
    pub id: i64,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrganizationMember {
    pub user: SiteUser,
    pub role: OrganizationRole,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InviteRequest {
    pub email: String,
    pub role_id: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Invite {
    pub email: String,
    /// Acceptance link, present when the invitee has no platform account yet.
    #[serde(default)]
    pub link: Option<String>,
}

/// Result of an invite call: an existing user becomes a member
/// immediately, an unknown email produces a pending invite.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InviteResult {
    #[serde(default)]
    pub member: Option<OrganizationMember>,
    #[serde(default)]
    pub invite: Option<Invite>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateMemberRequest {
    pub role_id: i64,
}

// ── Custom domains ──────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DomainState {
    Pending,
    Provisioning,
    Created,
    Failed,
    Deprovisioning,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Domain {
    pub id: i64,
    pub site_id: i64,
    /// Comma-separated domain names served by this record.
    pub names: String,
    pub context: BranchContext,
    pub state: DomainState,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddDomainRequest {
    pub names: String,
    pub context: BranchContext,
}

// ── Environment variables & basic auth ──────────────────────────────

/// A site-scoped environment variable. The value is write-only; reads
/// return a short hint (last characters) instead of the secret.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserEnvironmentVariable {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub hint: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddUserEnvironmentVariableRequest {
    pub name: String,
    pub value: String,
}

/// Basic-auth credentials protecting site previews.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BasicAuthCredentials {
    pub username: String,
    pub password: String,
}

// ── Current user ────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserSettings {
    /// Per-site build notification preference, keyed by site id
    /// (stringly keyed on the wire): "none", "builds", or "site".
    #[serde(default)]
    pub build_notification_settings: HashMap<String, String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: i64,
    pub username: String,
    #[serde(default)]
    pub email: Option<String>,
    /// Whether a GitHub OAuth token is on file for repo access.
    #[serde(default)]
    pub has_github_auth: bool,
    #[serde(default)]
    pub settings: UserSettings,
}
