// # IP Source Trait
//
// Defines the interface for looking up the machine's current public IP
// address.
//
// ## Implementations
//
// - ipify REST API: `pbddns-ip-ipify` crate
// - Future: other lookup services with the same one-field JSON contract
//
// ## Usage
//
// ```rust,ignore
// use pbddns_core::IpSource;
//
// #[tokio::main]
// async fn main() -> anyhow::Result<()> {
//     let source = /* IpSource implementation */;
//     let current = source.current_ip().await?;
//     println!("public IP: {}", current.ip);
//     Ok(())
// }
// ```

use async_trait::async_trait;

/// The machine's public IP address as reported by a lookup service.
///
/// The `ip` field carries the service's string verbatim. The reconciler
/// compares it textually against the DNS record content, so implementations
/// must not parse, canonicalize, or otherwise rewrite the value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublicIp {
    /// Address string exactly as returned by the upstream service
    pub ip: String,
}

impl PublicIp {
    /// Create a new public IP value
    pub fn new(ip: impl Into<String>) -> Self {
        Self { ip: ip.into() }
    }
}

/// Trait for public-IP lookup implementations
///
/// A lookup is a single read-only network call. Implementations must be
/// thread-safe and usable across async tasks; the reconciler issues the
/// lookup concurrently with the DNS record read.
///
/// Implementations must not retry, cache across passes, or decide whether a
/// DNS update is needed. They report the current IP or fail.
#[async_trait]
pub trait IpSource: Send + Sync {
    /// Look up the current public IP address
    ///
    /// # Returns
    ///
    /// - `Ok(PublicIp)`: The address string as reported by the service
    /// - `Err(Error)`: Transport, HTTP, or schema failure
    async fn current_ip(&self) -> Result<PublicIp, crate::Error>;

    /// Get the source name (for logging/debugging)
    fn source_name(&self) -> &'static str;
}
