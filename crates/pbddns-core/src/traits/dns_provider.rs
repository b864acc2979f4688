// # DNS Provider Trait
//
// Defines the interface for reading and writing one domain's A record via a
// provider API.
//
// ## Implementations
//
// - Porkbun: `pbddns-provider-porkbun` crate
// - Future: other providers exposing read/write access to a single A record
//
// ## Usage
//
// ```rust,ignore
// use pbddns_core::DnsProvider;
//
// #[tokio::main]
// async fn main() -> anyhow::Result<()> {
//     let provider = /* DnsProvider implementation */;
//
//     let record = provider.a_record("example.com").await?;
//     println!("published: {} (ttl {})", record.ip, record.ttl);
//
//     provider.update_a_record("example.com", "203.0.113.7", 600).await?;
//     Ok(())
// }
// ```

use async_trait::async_trait;

/// One domain's published A record.
///
/// `ip` is the record content string verbatim; `ttl` is the record's
/// time-to-live in seconds, converted from the provider's string wire
/// encoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ARecord {
    /// Record content (the IPv4 address string) exactly as published
    pub ip: String,
    /// Time-to-live in seconds
    pub ttl: u32,
}

impl ARecord {
    /// Create a new A record value
    pub fn new(ip: impl Into<String>, ttl: u32) -> Self {
        Self { ip: ip.into(), ttl }
    }
}

/// Trait for DNS provider implementations
///
/// Each operation is a single authenticated API call. Implementations must
/// be thread-safe; the reconciler issues the record read concurrently with
/// the public-IP lookup.
///
/// Providers are isolated, stateless, and single-shot: no retry, no backoff,
/// no caching, and no decision-making about whether an update is needed.
/// They execute one API call per invocation and report the outcome.
#[async_trait]
pub trait DnsProvider: Send + Sync {
    /// Get the domain's A record
    ///
    /// The provider must hold exactly one A record for the domain. A lookup
    /// that yields zero or more than one record is ambiguous state and fails
    /// with a validation error rather than silently picking one.
    ///
    /// # Parameters
    ///
    /// - `domain`: The domain name (e.g., "example.com")
    ///
    /// # Returns
    ///
    /// - `Ok(ARecord)`: The single published record
    /// - `Err(Error)`: Transport/HTTP/schema failure, or a validation error
    ///   when the record count is not exactly one
    async fn a_record(&self, domain: &str) -> Result<ARecord, crate::Error>;

    /// Replace the domain's A record content and TTL
    ///
    /// The `ip` string is written verbatim; implementations do not
    /// re-validate its syntax. HTTP success status alone confirms the write.
    ///
    /// # Parameters
    ///
    /// - `domain`: The domain name
    /// - `ip`: New record content
    /// - `ttl`: New time-to-live in seconds
    async fn update_a_record(
        &self,
        domain: &str,
        ip: &str,
        ttl: u32,
    ) -> Result<(), crate::Error>;

    /// Get the provider name (for logging/debugging)
    fn provider_name(&self) -> &'static str;
}
