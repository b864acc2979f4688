// # Porkbun DNS Provider
//
// This crate provides the DNS provider client for the reconciler, backed by
// the Porkbun v3 JSON API (https://porkbun.com/api/json/v3/documentation).
//
// ## Contract
//
// - One authenticated POST per operation; credentials travel in the JSON
//   body (`secretapikey`, `apikey`), never in headers or query strings.
// - Retrieve: `dns/retrieveByNameType/{domain}/A/`. The response must carry
//   `status: "SUCCESS"` and exactly one A record. Zero or several records is
//   ambiguous state and fails the pass with a validation error.
// - Edit: `dns/editByNameType/{domain}/A/`. Porkbun expects the TTL as a
//   decimal string on the wire even though it is an integer everywhere else;
//   the response body is not parsed, HTTP success status alone confirms the
//   write.
// - Full error propagation to the reconciler; no retry, no backoff, no
//   caching here.
//
// ## Security
//
// Credentials never appear in logs. The Debug implementation redacts them.

use pbddns_core::config::Credentials;
use pbddns_core::traits::{ARecord, DnsProvider};
use pbddns_core::{Error, Result};

use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Porkbun API v3 base URL
pub const PORKBUN_API_BASE: &str = "https://porkbun.com/api/json/v3";

/// Status literal Porkbun uses to mark a successful API response
const STATUS_SUCCESS: &str = "SUCCESS";

/// DNS provider client for the Porkbun API
pub struct PorkbunProvider {
    /// API base URL (overridable for tests and alternate deployments)
    base_url: String,

    /// API credentials sent in every request body
    credentials: Credentials,

    /// HTTP client, carries the per-request timeout
    client: reqwest::Client,
}

// Credentials are redacted; only the base URL is useful in diagnostics.
impl std::fmt::Debug for PorkbunProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PorkbunProvider")
            .field("base_url", &self.base_url)
            .field("credentials", &self.credentials)
            .finish()
    }
}

/// Request body for record retrieval (authentication only)
#[derive(Serialize)]
struct AuthRequest<'a> {
    secretapikey: &'a str,
    apikey: &'a str,
}

/// Request body for record edits
///
/// `ttl` is serialized as a decimal string to match Porkbun's wire format.
#[derive(Serialize)]
struct EditRequest<'a> {
    secretapikey: &'a str,
    apikey: &'a str,
    content: &'a str,
    ttl: String,
}

/// Response body from a record retrieval
#[derive(Debug, Deserialize)]
struct RetrieveResponse {
    status: String,
    records: Vec<RecordEntry>,
}

/// One DNS record item as Porkbun reports it
#[derive(Debug, Clone, Deserialize)]
struct RecordEntry {
    name: String,
    #[serde(rename = "type")]
    record_type: String,
    content: String,
    ttl: String,
}

impl PorkbunProvider {
    /// Create a provider against the public Porkbun API
    ///
    /// # Parameters
    ///
    /// - `credentials`: API key and secret
    /// - `timeout`: Per-request timeout enforced by the HTTP layer
    pub fn new(credentials: Credentials, timeout: Duration) -> Result<Self> {
        Self::with_base_url(credentials, PORKBUN_API_BASE, timeout)
    }

    /// Create a provider against a custom base URL
    ///
    /// # Parameters
    ///
    /// - `credentials`: API key and secret
    /// - `base_url`: Base URL serving the Porkbun v3 contract, no trailing
    ///   slash
    /// - `timeout`: Per-request timeout enforced by the HTTP layer
    pub fn with_base_url(
        credentials: Credentials,
        base_url: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| Error::transport(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self {
            base_url: base_url.into(),
            credentials,
            client,
        })
    }

    fn retrieve_url(&self, domain: &str) -> String {
        format!("{}/dns/retrieveByNameType/{}/A/", self.base_url, domain)
    }

    fn edit_url(&self, domain: &str) -> String {
        format!("{}/dns/editByNameType/{}/A/", self.base_url, domain)
    }

    /// Issue one POST and hand back the response once its status is checked
    async fn post_checked(
        &self,
        url: &str,
        body: &impl Serialize,
    ) -> Result<reqwest::Response> {
        let response = self
            .client
            .post(url)
            .json(body)
            .send()
            .await
            .map_err(|e| Error::transport(format!("POST {} failed: {}", url, e)))?;

        let status = response.status();
        debug!("Request URL: {}, status code: {}", url, status);

        if !status.is_success() {
            return Err(Error::http(status.as_u16(), url));
        }

        Ok(response)
    }
}

/// Convert a retrieval response into the single A record it must contain
///
/// Enforces the one-record invariant: an empty or multi-entry records list
/// is rejected with a validation error rather than picking an entry.
fn record_from_response(response: RetrieveResponse) -> Result<ARecord> {
    if response.status != STATUS_SUCCESS {
        return Err(Error::schema(format!(
            "expected status \"{}\", got \"{}\"",
            STATUS_SUCCESS, response.status
        )));
    }

    if response.records.len() != 1 {
        return Err(Error::validation(format!(
            "records list must contain exactly one item, got {}",
            response.records.len()
        )));
    }

    let entry = &response.records[0];

    if entry.record_type != "A" {
        return Err(Error::schema(format!(
            "record {} has type \"{}\", expected \"A\"",
            entry.name, entry.record_type
        )));
    }

    let ttl = entry.ttl.parse::<u32>().map_err(|_| {
        Error::schema(format!(
            "record {} has non-numeric ttl \"{}\"",
            entry.name, entry.ttl
        ))
    })?;

    Ok(ARecord::new(entry.content.clone(), ttl))
}

#[async_trait]
impl DnsProvider for PorkbunProvider {
    async fn a_record(&self, domain: &str) -> Result<ARecord> {
        let url = self.retrieve_url(domain);
        let body = AuthRequest {
            secretapikey: &self.credentials.api_secret,
            apikey: &self.credentials.api_key,
        };

        let response = self.post_checked(&url, &body).await?;

        let parsed: RetrieveResponse = response
            .json()
            .await
            .map_err(|e| Error::schema(format!("unexpected retrieve response body: {}", e)))?;

        record_from_response(parsed)
    }

    async fn update_a_record(&self, domain: &str, ip: &str, ttl: u32) -> Result<()> {
        let url = self.edit_url(domain);
        let body = EditRequest {
            secretapikey: &self.credentials.api_secret,
            apikey: &self.credentials.api_key,
            content: ip,
            ttl: ttl.to_string(),
        };

        // Success status alone confirms the edit; the body is not parsed.
        self.post_checked(&url, &body).await?;

        Ok(())
    }

    fn provider_name(&self) -> &'static str {
        "porkbun"
    }
}


#[cfg(test)]
mod integration_tests {
    use super::*;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn provider_for(mock_server: &MockServer) -> PorkbunProvider {
        PorkbunProvider::with_base_url(
            Credentials::new("pk1_key", "sk1_secret"),
            mock_server.uri(),
            Duration::from_secs(10),
        )
        .unwrap()
    }

    #[tokio::test]
    async fn a_record_posts_credentials_and_parses_record() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/dns/retrieveByNameType/example.com/A/"))
            .and(body_json(serde_json::json!({
                "secretapikey": "sk1_secret",
                "apikey": "pk1_key"
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "status": "SUCCESS",
                "records": [
                    {"name": "example.com", "type": "A", "content": "1.2.3.4", "ttl": "600"}
                ]
            })))
            .mount(&mock_server)
            .await;

        let provider = provider_for(&mock_server);
        let record = provider.a_record("example.com").await.unwrap();

        assert_eq!(record, ARecord::new("1.2.3.4", 600));
    }

    #[tokio::test]
    async fn ambiguous_record_state_fails_the_read() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/dns/retrieveByNameType/example.com/A/"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "status": "SUCCESS",
                "records": [
                    {"name": "example.com", "type": "A", "content": "1.2.3.4", "ttl": "600"},
                    {"name": "example.com", "type": "A", "content": "5.6.7.8", "ttl": "600"}
                ]
            })))
            .mount(&mock_server)
            .await;

        let provider = provider_for(&mock_server);
        let result = provider.a_record("example.com").await;

        assert!(matches!(result, Err(Error::Validation(_))));
    }

    #[tokio::test]
    async fn error_status_fails_the_read() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/dns/retrieveByNameType/example.com/A/"))
            .respond_with(ResponseTemplate::new(403))
            .mount(&mock_server)
            .await;

        let provider = provider_for(&mock_server);
        let result = provider.a_record("example.com").await;

        assert!(matches!(result, Err(Error::Http { status: 403, .. })));
    }

    #[tokio::test]
    async fn update_sends_content_and_string_ttl() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/dns/editByNameType/example.com/A/"))
            .and(body_json(serde_json::json!({
                "secretapikey": "sk1_secret",
                "apikey": "pk1_key",
                "content": "5.6.7.8",
                "ttl": "600"
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "status": "SUCCESS"
            })))
            .mount(&mock_server)
            .await;

        let provider = provider_for(&mock_server);
        let result = provider.update_a_record("example.com", "5.6.7.8", 600).await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn update_ignores_the_response_body() {
        // Success status alone confirms the write; an unparseable body must
        // not fail the edit.
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/dns/editByNameType/example.com/A/"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&mock_server)
            .await;

        let provider = provider_for(&mock_server);
        let result = provider.update_a_record("example.com", "5.6.7.8", 600).await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn update_error_status_fails_the_write() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/dns/editByNameType/example.com/A/"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&mock_server)
            .await;

        let provider = provider_for(&mock_server);
        let result = provider.update_a_record("example.com", "5.6.7.8", 600).await;

        assert!(matches!(result, Err(Error::Http { status: 500, .. })));
    }
}
