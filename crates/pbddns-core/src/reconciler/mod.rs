//! One-shot reconciliation pass.
//!
//! The Reconciler is responsible for:
//! - Reading the domain's published A record via DnsProvider
//! - Looking up the machine's current public IP via IpSource
//! - Comparing the two strings and correcting drift via DnsProvider
//!
//! ## Control Flow
//!
//! ```text
//! ┌─────────────┐     ┌──────────────┐
//! │  IpSource   │     │ DnsProvider  │
//! │ current_ip  │     │   a_record   │
//! └──────┬──────┘     └──────┬───────┘
//!        │    (concurrent)   │
//!        └───────┬───────────┘
//!                ▼  join
//!        ┌──────────────┐
//!        │  Reconciler  │── ip strings equal? ──▶ InSync
//!        └──────┬───────┘
//!               ▼  drift
//!        ┌──────────────┐
//!        │ DnsProvider  │
//!        │update_a_record│──▶ Updated
//!        └──────────────┘
//! ```
//!
//! Both reads are issued together and joined before the comparison; neither
//! is cancelled when the other fails, but a failure on either side aborts
//! the pass before any update is attempted.

use crate::config::ReconcileConfig;
use crate::error::Result;
use crate::traits::{DnsProvider, IpSource};
use tracing::debug;

/// Result of one reconciliation pass
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReconcileOutcome {
    /// Published record already matches the current public IP (no-op)
    InSync {
        /// The address both services agree on
        ip: String,
    },

    /// Record content differed and was replaced
    Updated {
        /// The address the record held before the write
        previous_ip: String,
        /// The address written to the record
        new_ip: String,
    },
}

/// Drives one read-compare-update pass over the two service clients.
///
/// The reconciler owns no state beyond its configuration; every pass reads
/// both sides fresh. Comparison is exact string equality over the two
/// service-reported addresses, with no normalization of either value.
pub struct Reconciler {
    /// Public-IP lookup client
    ip_source: Box<dyn IpSource>,

    /// DNS provider client
    provider: Box<dyn DnsProvider>,

    /// Domain whose A record is reconciled
    domain: String,

    /// TTL written on update
    ttl: u32,
}

impl Reconciler {
    /// Create a new reconciler
    ///
    /// # Parameters
    ///
    /// - `ip_source`: Public-IP lookup implementation
    /// - `provider`: DNS provider implementation
    /// - `config`: Pass configuration (validated here)
    pub fn new(
        ip_source: Box<dyn IpSource>,
        provider: Box<dyn DnsProvider>,
        config: &ReconcileConfig,
    ) -> Result<Self> {
        config.validate()?;

        Ok(Self {
            ip_source,
            provider,
            domain: config.domain.clone(),
            ttl: config.ttl,
        })
    }

    /// Run one reconciliation pass
    ///
    /// Issues the record read and the IP lookup concurrently, joins both,
    /// compares, and writes only on drift. Any failure aborts the pass; an
    /// update is never attempted without both reads confirmed.
    ///
    /// # Returns
    ///
    /// - `Ok(ReconcileOutcome)`: Whether the record was already in sync or
    ///   has been updated
    /// - `Err(Error)`: The first failure encountered (record read reported
    ///   ahead of IP lookup when both fail)
    pub async fn run(&self) -> Result<ReconcileOutcome> {
        debug!(
            "Reconciling {} via {} and {}",
            self.domain,
            self.provider.provider_name(),
            self.ip_source.source_name()
        );

        // Two independent read-only calls; join waits for both outcomes so
        // neither request is cancelled mid-flight by the other's failure.
        let (record, current) = tokio::join!(
            self.provider.a_record(&self.domain),
            self.ip_source.current_ip(),
        );
        let record = record?;
        let current = current?;

        debug!("Domain: {}, A record IP: {}", self.domain, record.ip);
        debug!("Current machine IP: {}", current.ip);

        if current.ip == record.ip {
            debug!("No update required");
            return Ok(ReconcileOutcome::InSync { ip: current.ip });
        }

        debug!("Updating {} A record to {}", self.domain, current.ip);
        self.provider
            .update_a_record(&self.domain, &current.ip, self.ttl)
            .await?;

        Ok(ReconcileOutcome::Updated {
            previous_ip: record.ip,
            new_ip: current.ip,
        })
    }

    /// Domain this reconciler manages
    pub fn domain(&self) -> &str {
        &self.domain
    }
}
