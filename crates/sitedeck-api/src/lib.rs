//! Async Rust client for the sitedeck static-site publishing platform
//! REST API.
//!
//! The API lives under `/v0/` and uses a cookie session plus an
//! `x-csrf-token` header on mutating requests. [`ApiClient`] owns the
//! transport mechanics (URL construction, JSON bodies, uniform
//! HTTP-error translation); resource operations are inherent methods
//! grouped by endpoint module:
//!
//! - [`sites`](ApiClient::fetch_sites) — sites and branch configs
//! - [`builds`](ApiClient::fetch_builds) — build history, restarts,
//!   logs, post-build tasks
//! - [`organizations`](ApiClient::fetch_organizations) — orgs and
//!   membership
//! - site settings — custom domains, environment variables, basic auth
//! - user — the authenticated user and notification settings
//!
//! Every operation is a thin composition of a fixed path template with
//! an HTTP verb: no retries, no caching, no batching. Errors are never
//! swallowed — every failure rejects with an [`Error`].

mod builds;
mod client;
mod error;
mod organizations;
mod site_settings;
mod sites;
mod types;
mod user;

pub use client::ApiClient;
pub use error::Error;
pub use types::*;
