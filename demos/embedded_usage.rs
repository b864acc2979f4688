//! Minimal embedding example for pbddns-core
//!
//! This example demonstrates using pbddns-core as a library in a custom
//! application: both service clients are swapped for in-process
//! implementations and the reconciler drives two passes against them.

use std::sync::Mutex;

use pbddns_core::traits::{ARecord, DnsProvider, IpSource, PublicIp};
use pbddns_core::{Credentials, ReconcileConfig, ReconcileOutcome, Reconciler, Result};

/// IP source that always reports the same address
struct FixedIpSource {
    ip: String,
}

#[async_trait::async_trait]
impl IpSource for FixedIpSource {
    async fn current_ip(&self) -> Result<PublicIp> {
        Ok(PublicIp::new(self.ip.clone()))
    }

    fn source_name(&self) -> &'static str {
        "fixed"
    }
}

/// DNS provider holding its single record in memory
struct InMemoryProvider {
    record: Mutex<ARecord>,
}

#[async_trait::async_trait]
impl DnsProvider for InMemoryProvider {
    async fn a_record(&self, _domain: &str) -> Result<ARecord> {
        Ok(self.record.lock().unwrap().clone())
    }

    async fn update_a_record(&self, domain: &str, ip: &str, ttl: u32) -> Result<()> {
        println!("[InMemory] Updating {} -> {} (ttl {})", domain, ip, ttl);
        *self.record.lock().unwrap() = ARecord::new(ip, ttl);
        Ok(())
    }

    fn provider_name(&self) -> &'static str {
        "in-memory"
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    println!("=== Embedded pbddns-core Example ===\n");

    let config = ReconcileConfig::new(
        "example.com",
        Credentials::new("pk1_example", "sk1_example"),
    );

    let make_reconciler = |published: &str| {
        Reconciler::new(
            Box::new(FixedIpSource {
                ip: "203.0.113.7".to_string(),
            }),
            Box::new(InMemoryProvider {
                record: Mutex::new(ARecord::new(published, 600)),
            }),
            &config,
        )
    };

    // First pass: the published record is stale, so the pass writes.
    let reconciler = make_reconciler("198.51.100.1")?;
    match reconciler.run().await? {
        ReconcileOutcome::Updated {
            previous_ip,
            new_ip,
        } => println!("1. Drift corrected: {} -> {}", previous_ip, new_ip),
        ReconcileOutcome::InSync { ip } => println!("1. Unexpectedly in sync at {}", ip),
    }

    // Second pass: the record already matches, so nothing is written.
    let reconciler = make_reconciler("203.0.113.7")?;
    match reconciler.run().await? {
        ReconcileOutcome::InSync { ip } => println!("2. In sync at {}; no update issued", ip),
        ReconcileOutcome::Updated { .. } => println!("2. Unexpected update"),
    }

    println!("\n=== Embedding Successful ===");

    Ok(())
}
