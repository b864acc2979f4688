//! Test doubles and common utilities for reconciler contract tests
//!
//! These doubles script the two service clients and count every call so
//! tests can assert exactly which network operations a pass would issue.

use pbddns_core::config::{Credentials, ReconcileConfig};
use pbddns_core::error::Result;
use pbddns_core::traits::{ARecord, DnsProvider, IpSource, PublicIp};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

/// An IpSource scripted to report a fixed address or fail every call
pub struct ScriptedIpSource {
    /// Address to report; `None` makes every lookup fail
    ip: Option<String>,
    /// Call counter for current_ip()
    lookup_call_count: Arc<AtomicUsize>,
}

impl ScriptedIpSource {
    /// Source that reports `ip` on every lookup
    pub fn reporting(ip: &str) -> Self {
        Self {
            ip: Some(ip.to_string()),
            lookup_call_count: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Source whose every lookup fails with a transport error
    pub fn failing() -> Self {
        Self {
            ip: None,
            lookup_call_count: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Get the number of times current_ip() was called
    pub fn lookup_call_count(&self) -> usize {
        self.lookup_call_count.load(Ordering::SeqCst)
    }

    /// Create a twin that shares call counters with an existing source
    pub fn sharing_counters_with(other: &Self) -> Self {
        Self {
            ip: other.ip.clone(),
            lookup_call_count: Arc::clone(&other.lookup_call_count),
        }
    }
}

#[async_trait::async_trait]
impl IpSource for ScriptedIpSource {
    async fn current_ip(&self) -> Result<PublicIp> {
        self.lookup_call_count.fetch_add(1, Ordering::SeqCst);

        match &self.ip {
            Some(ip) => Ok(PublicIp::new(ip.clone())),
            None => Err(pbddns_core::Error::transport(
                "lookup service unreachable",
            )),
        }
    }

    fn source_name(&self) -> &'static str {
        "scripted"
    }
}

/// A DnsProvider scripted with a fixed record and update behavior
pub struct ScriptedProvider {
    /// Record returned by a_record(); `None` makes the read fail
    record: Option<ARecord>,
    /// Whether update_a_record() succeeds
    update_succeeds: bool,
    /// Call counter for a_record()
    read_call_count: Arc<AtomicUsize>,
    /// Recorded (domain, ip, ttl) arguments from update calls
    update_calls: Arc<std::sync::Mutex<Vec<(String, String, u32)>>>,
}

impl ScriptedProvider {
    /// Provider publishing `record` whose updates succeed
    pub fn publishing(record: ARecord) -> Self {
        Self {
            record: Some(record),
            update_succeeds: true,
            read_call_count: Arc::new(AtomicUsize::new(0)),
            update_calls: Arc::new(std::sync::Mutex::new(Vec::new())),
        }
    }

    /// Provider whose every record read fails with an HTTP error
    pub fn failing_read() -> Self {
        Self {
            record: None,
            update_succeeds: true,
            read_call_count: Arc::new(AtomicUsize::new(0)),
            update_calls: Arc::new(std::sync::Mutex::new(Vec::new())),
        }
    }

    /// Make update_a_record() fail
    pub fn with_failing_update(mut self) -> Self {
        self.update_succeeds = false;
        self
    }

    /// Get the number of times a_record() was called
    pub fn read_call_count(&self) -> usize {
        self.read_call_count.load(Ordering::SeqCst)
    }

    /// Get the recorded (domain, ip, ttl) arguments from update calls
    pub fn update_calls(&self) -> Vec<(String, String, u32)> {
        self.update_calls.lock().unwrap().clone()
    }

    /// Create a twin that shares counters with an existing provider
    pub fn sharing_counters_with(other: &Self) -> Self {
        Self {
            record: other.record.clone(),
            update_succeeds: other.update_succeeds,
            read_call_count: Arc::clone(&other.read_call_count),
            update_calls: Arc::clone(&other.update_calls),
        }
    }
}

#[async_trait::async_trait]
impl DnsProvider for ScriptedProvider {
    async fn a_record(&self, domain: &str) -> Result<ARecord> {
        self.read_call_count.fetch_add(1, Ordering::SeqCst);

        match &self.record {
            Some(record) => Ok(record.clone()),
            None => Err(pbddns_core::Error::http(
                500,
                format!("https://provider.invalid/retrieve/{}", domain),
            )),
        }
    }

    async fn update_a_record(&self, domain: &str, ip: &str, ttl: u32) -> Result<()> {
        self.update_calls
            .lock()
            .unwrap()
            .push((domain.to_string(), ip.to_string(), ttl));

        if self.update_succeeds {
            Ok(())
        } else {
            Err(pbddns_core::Error::http(
                502,
                format!("https://provider.invalid/edit/{}", domain),
            ))
        }
    }

    fn provider_name(&self) -> &'static str {
        "scripted"
    }
}

/// Helper to create a minimal ReconcileConfig for testing
pub fn test_config(domain: &str) -> ReconcileConfig {
    ReconcileConfig::new(domain, Credentials::new("pk1_test", "sk1_test"))
}
