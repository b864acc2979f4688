//! Service-client traits used by the reconciler.
//!
//! Both external collaborators (the public-IP lookup service and the DNS
//! provider API) are reached through these narrow seams so the reconciler
//! can be exercised against test doubles.

pub mod dns_provider;
pub mod ip_source;

pub use dns_provider::{ARecord, DnsProvider};
pub use ip_source::{IpSource, PublicIp};
