// Hand-crafted async HTTP client for the sitedeck platform API.
//
// Base path: /v0/
// Auth: cookie session + x-csrf-token header on mutating requests

use std::sync::RwLock;
use std::time::Duration;

use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, trace};
use url::Url;

use crate::Error;

// ── Error response shape from the platform API ───────────────────────

#[derive(serde::Deserialize)]
struct ErrorResponse {
    #[serde(default)]
    message: Option<String>,
}

// ── Client ───────────────────────────────────────────────────────────

/// Async client for the sitedeck platform REST API.
///
/// Communicates via JSON REST endpoints under `/v0/`, carrying the
/// session cookie automatically and attaching the stored CSRF token to
/// every mutating request. Resource operations live in the sibling
/// endpoint modules (`sites`, `builds`, `organizations`, ...) as
/// inherent methods; this module owns transport mechanics only.
pub struct ApiClient {
    http: reqwest::Client,
    base_url: Url,
    /// CSRF token required on POST/PUT/DELETE. Set explicitly by the
    /// caller and rotated from `x-csrf-token` response headers when the
    /// server sends a replacement.
    csrf_token: RwLock<Option<String>>,
}

impl ApiClient {
    // ── Constructors ─────────────────────────────────────────────────

    /// Build a client for the given platform host.
    ///
    /// The host is normalized so the base URL always ends with `/v0/`,
    /// making relative joins uniform. A cookie store is enabled so the
    /// session cookie set at login persists across requests.
    pub fn new(host: &str, timeout: Duration) -> Result<Self, Error> {
        let http = reqwest::Client::builder()
            .cookie_store(true)
            .timeout(timeout)
            .build()?;
        Self::from_reqwest(host, http)
    }

    /// Wrap an existing `reqwest::Client` (caller manages cookies).
    pub fn from_reqwest(host: &str, http: reqwest::Client) -> Result<Self, Error> {
        let base_url = Self::normalize_base_url(host)?;
        Ok(Self {
            http,
            base_url,
            csrf_token: RwLock::new(None),
        })
    }

    /// Build the base URL with the `/v0/` API prefix.
    fn normalize_base_url(raw: &str) -> Result<Url, Error> {
        let mut url = Url::parse(raw)?;
        let path = url.path().trim_end_matches('/').to_owned();

        if path.ends_with("/v0") {
            url.set_path(&format!("{path}/"));
        } else {
            url.set_path(&format!("{path}/v0/"));
        }

        Ok(url)
    }

    /// The API base URL (always ends with `/v0/`).
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    // ── CSRF token management ────────────────────────────────────────

    /// Store the CSRF token used on all mutating requests.
    pub fn set_csrf_token(&self, token: String) {
        debug!("storing CSRF token");
        *self.csrf_token.write().expect("CSRF lock poisoned") = Some(token);
    }

    /// Builder-style variant of [`set_csrf_token`](Self::set_csrf_token).
    pub fn with_csrf_token(self, token: String) -> Self {
        self.set_csrf_token(token);
        self
    }

    /// Update the stored token if the response carries a rotated value.
    fn update_csrf_from_response(&self, headers: &reqwest::header::HeaderMap) {
        let new_token = headers
            .get("x-csrf-token")
            .and_then(|v| v.to_str().ok())
            .map(String::from);

        if let Some(token) = new_token {
            trace!("CSRF token rotated");
            *self.csrf_token.write().expect("CSRF lock poisoned") = Some(token);
        }
    }

    /// Apply the stored CSRF token to a request builder.
    fn apply_csrf(&self, builder: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        let guard = self.csrf_token.read().expect("CSRF lock poisoned");
        match guard.as_deref() {
            Some(token) => builder.header("x-csrf-token", token),
            None => builder,
        }
    }

    // ── URL builder ──────────────────────────────────────────────────

    /// Join a relative path (e.g. `"site/3/domains"`) onto the base URL.
    fn url(&self, path: &str) -> Url {
        // base_url always ends with `/v0/`, so joining `site/...` works.
        self.base_url
            .join(path)
            .expect("path should be valid relative URL")
    }

    // ── HTTP verbs ───────────────────────────────────────────────────

    pub(crate) async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, Error> {
        let url = self.url(path);
        debug!("GET {url}");

        let resp = self.http.get(url).send().await?;
        self.handle_response(resp).await
    }

    pub(crate) async fn post<T: DeserializeOwned, B: Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, Error> {
        let url = self.url(path);
        debug!("POST {url}");

        let builder = self.apply_csrf(self.http.post(url).json(body));
        let resp = builder.send().await?;
        self.handle_response(resp).await
    }

    pub(crate) async fn put<T: DeserializeOwned, B: Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, Error> {
        let url = self.url(path);
        debug!("PUT {url}");

        let builder = self.apply_csrf(self.http.put(url).json(body));
        let resp = builder.send().await?;
        self.handle_response(resp).await
    }

    pub(crate) async fn delete(&self, path: &str) -> Result<(), Error> {
        let url = self.url(path);
        debug!("DELETE {url}");

        let builder = self.apply_csrf(self.http.delete(url));
        let resp = builder.send().await?;
        self.handle_empty(resp).await
    }

    // ── Response handling ────────────────────────────────────────────

    async fn handle_response<T: DeserializeOwned>(
        &self,
        resp: reqwest::Response,
    ) -> Result<T, Error> {
        let status = resp.status();
        self.update_csrf_from_response(resp.headers());

        if status.is_success() {
            let body = resp.text().await?;
            serde_json::from_str(&body).map_err(|e| {
                let preview = &body[..body.len().min(200)];
                Error::Deserialization {
                    message: format!("{e} (body preview: {preview:?})"),
                    body,
                }
            })
        } else {
            Err(Self::parse_error(status, resp).await)
        }
    }

    async fn handle_empty(&self, resp: reqwest::Response) -> Result<(), Error> {
        let status = resp.status();
        self.update_csrf_from_response(resp.headers());

        if status.is_success() {
            Ok(())
        } else {
            Err(Self::parse_error(status, resp).await)
        }
    }

    /// Translate a non-2xx response into [`Error::Http`].
    ///
    /// Message priority: JSON `{"message": ...}` body, then raw text,
    /// then the status line.
    async fn parse_error(status: reqwest::StatusCode, resp: reqwest::Response) -> Error {
        let raw = resp.text().await.unwrap_or_default();

        let message = serde_json::from_str::<ErrorResponse>(&raw)
            .ok()
            .and_then(|e| e.message)
            .unwrap_or_else(|| {
                if raw.is_empty() {
                    status.to_string()
                } else {
                    raw
                }
            });

        Error::Http {
            status: status.as_u16(),
            message,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_gets_v0_suffix() {
        let client = ApiClient::new("https://pages.example.gov", Duration::from_secs(5))
            .expect("client should build");
        assert_eq!(client.base_url().as_str(), "https://pages.example.gov/v0/");
    }

    #[test]
    fn base_url_keeps_existing_v0() {
        let client = ApiClient::new("https://pages.example.gov/v0", Duration::from_secs(5))
            .expect("client should build");
        assert_eq!(client.base_url().as_str(), "https://pages.example.gov/v0/");
    }

    #[test]
    fn invalid_host_is_rejected() {
        let err = ApiClient::new("not a url", Duration::from_secs(5));
        assert!(matches!(err, Err(Error::InvalidUrl(_))));
    }
}
