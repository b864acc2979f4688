//! Configuration for one reconciliation pass.
//!
//! Constructed once at startup (normally from CLI arguments) and read-only
//! thereafter. Both service clients share the same credentials and timeout.

use serde::{Deserialize, Serialize};

/// Porkbun API credentials
///
/// The Debug implementation redacts both values; credentials must never
/// appear in logs or error messages.
#[derive(Clone, Serialize, Deserialize)]
pub struct Credentials {
    /// API key
    pub api_key: String,
    /// API secret
    pub api_secret: String,
}

impl Credentials {
    /// Create new credentials
    pub fn new(api_key: impl Into<String>, api_secret: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            api_secret: api_secret.into(),
        }
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("api_key", &"<REDACTED>")
            .field("api_secret", &"<REDACTED>")
            .finish()
    }
}

/// Configuration for one reconciliation pass
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReconcileConfig {
    /// Domain whose A record is reconciled
    pub domain: String,

    /// Provider credentials shared by both authenticated calls
    pub credentials: Credentials,

    /// TTL (seconds) written on update; always overrides the published TTL
    #[serde(default = "default_ttl_secs")]
    pub ttl: u32,

    /// Per-request timeout in seconds, enforced by the HTTP layer
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl ReconcileConfig {
    /// Create a configuration with default TTL and timeout
    pub fn new(domain: impl Into<String>, credentials: Credentials) -> Self {
        Self {
            domain: domain.into(),
            credentials,
            ttl: default_ttl_secs(),
            timeout_secs: default_timeout_secs(),
        }
    }

    /// Set the TTL written on update
    pub fn with_ttl(mut self, ttl: u32) -> Self {
        self.ttl = ttl;
        self
    }

    /// Set the per-request timeout
    pub fn with_timeout_secs(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = timeout_secs;
        self
    }

    /// Validate the configuration
    ///
    /// Rejects empty credentials, a zero timeout, and malformed domain
    /// names, so every misconfiguration is caught before any network I/O.
    pub fn validate(&self) -> Result<(), crate::Error> {
        validate_domain_name(&self.domain)?;

        if self.credentials.api_key.is_empty() {
            return Err(crate::Error::config("API key cannot be empty"));
        }
        if self.credentials.api_secret.is_empty() {
            return Err(crate::Error::config("API secret cannot be empty"));
        }
        if self.timeout_secs == 0 {
            return Err(crate::Error::config("request timeout must be at least 1 second"));
        }

        Ok(())
    }
}

fn default_ttl_secs() -> u32 {
    600
}

fn default_timeout_secs() -> u64 {
    10
}

/// Validate that a string is a plausible DNS domain name
///
/// Basic RFC 1035 checks: non-empty, total length <= 253, labels 1..=63
/// chars of alphanumerics and hyphens with no leading/trailing hyphen.
fn validate_domain_name(domain: &str) -> Result<(), crate::Error> {
    if domain.is_empty() {
        return Err(crate::Error::config("domain name cannot be empty"));
    }

    if domain.len() > 253 {
        return Err(crate::Error::config(format!(
            "domain name too long: {} chars (max 253)",
            domain.len()
        )));
    }

    for label in domain.split('.') {
        if label.is_empty() {
            return Err(crate::Error::config(format!(
                "domain name has empty label: '{}'",
                domain
            )));
        }

        if label.len() > 63 {
            return Err(crate::Error::config(format!(
                "domain label too long: {} chars (max 63): '{}'",
                label.len(),
                label
            )));
        }

        if !label.chars().all(|c| c.is_ascii_alphanumeric() || c == '-') {
            return Err(crate::Error::config(format!(
                "domain label contains invalid characters: '{}'",
                label
            )));
        }

        if label.starts_with('-') || label.ends_with('-') {
            return Err(crate::Error::config(format!(
                "domain label cannot start or end with hyphen: '{}'",
                label
            )));
        }
    }

    Ok(())
}
