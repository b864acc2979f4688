// # ipify IP Source
//
// This crate provides the public-IP lookup client for the reconciler,
// backed by the ipify REST API (https://www.ipify.org).
//
// ## Contract
//
// One GET request per lookup, asking for a JSON body of the form
// `{"ip": "<string>"}`. The address string is handed to the core verbatim;
// no parsing or normalization happens here, so whatever ipify reports is
// exactly what the reconciler compares against the DNS record.

use pbddns_core::traits::{IpSource, PublicIp};
use pbddns_core::{Error, Result};

use std::time::Duration;

use serde::Deserialize;
use tracing::debug;

/// ipify endpoint returning a JSON body
pub const IPIFY_ENDPOINT: &str = "https://api.ipify.org/?format=json";

/// Public-IP lookup client backed by ipify
pub struct IpifySource {
    /// Endpoint queried for the current address
    endpoint: String,

    /// HTTP client, carries the per-request timeout
    client: reqwest::Client,
}

/// Response body from ipify
#[derive(Debug, Deserialize)]
struct IpifyResponse {
    ip: String,
}

impl IpifySource {
    /// Create a source against the public ipify endpoint
    ///
    /// # Parameters
    ///
    /// - `timeout`: Per-request timeout enforced by the HTTP layer
    pub fn new(timeout: Duration) -> Result<Self> {
        Self::with_endpoint(IPIFY_ENDPOINT, timeout)
    }

    /// Create a source against a custom endpoint
    ///
    /// The endpoint must serve the same `{"ip": "<string>"}` contract.
    ///
    /// # Parameters
    ///
    /// - `endpoint`: Full URL to query
    /// - `timeout`: Per-request timeout enforced by the HTTP layer
    pub fn with_endpoint(endpoint: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| Error::transport(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self {
            endpoint: endpoint.into(),
            client,
        })
    }
}

#[async_trait::async_trait]
impl IpSource for IpifySource {
    async fn current_ip(&self) -> Result<PublicIp> {
        let response = self
            .client
            .get(&self.endpoint)
            .send()
            .await
            .map_err(|e| Error::transport(format!("GET {} failed: {}", self.endpoint, e)))?;

        let status = response.status();
        debug!("Request URL: {}, status code: {}", self.endpoint, status);

        if !status.is_success() {
            return Err(Error::http(status.as_u16(), &self.endpoint));
        }

        let parsed: IpifyResponse = response
            .json()
            .await
            .map_err(|e| Error::schema(format!("unexpected ipify response body: {}", e)))?;

        Ok(PublicIp::new(parsed.ip))
    }

    fn source_name(&self) -> &'static str {
        "ipify"
    }
}
