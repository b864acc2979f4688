// # pbddns - one-shot DNS reconciler CLI
//
// Thin integration layer only:
// 1. Parse command-line arguments
// 2. Initialize logging
// 3. Wire the ipify and Porkbun clients into a Reconciler
// 4. Run one pass and map the result to an exit code
//
// All reconciliation logic lives in pbddns-core. Repeated execution (e.g.
// from cron or a systemd timer) is the caller's business; this process runs
// one pass and exits.
//
// ## Example
//
// ```bash
// pbddns example.com pk1_xxxx sk1_xxxx --ttl 600 --timeout 10 -v
// ```

use std::process::ExitCode;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use pbddns_core::{Credentials, ReconcileConfig, ReconcileOutcome, Reconciler};
use pbddns_ip_ipify::IpifySource;
use pbddns_provider_porkbun::PorkbunProvider;
use tracing::{Level, error, info};
use tracing_subscriber::FmtSubscriber;

/// Check a domain's A record against this machine's public IP and update
/// the record if they differ.
#[derive(Debug, Parser)]
#[command(name = "pbddns")]
#[command(version, about, long_about = None)]
struct Cli {
    /// The domain to check and update
    domain: String,

    /// Porkbun API key
    api_key: String,

    /// Porkbun API secret
    api_secret: String,

    /// DNS TTL written on update, in seconds
    #[arg(long, default_value_t = 600)]
    ttl: u32,

    /// Per-request timeout in seconds
    #[arg(long, default_value_t = 10)]
    timeout: u64,

    /// Raise log verbosity to debug
    #[arg(short, long)]
    verbose: bool,
}

/// Exit codes for the three ways a pass can end
///
/// - 0: Pass completed (whether or not an update was needed)
/// - 1: Configuration or startup error, nothing was sent on the network
/// - 2: The pass itself failed (network/HTTP/schema/validation)
#[derive(Debug, Clone, Copy)]
enum PassExitCode {
    /// Pass completed
    Success = 0,
    /// Configuration error or startup failure
    ConfigError = 1,
    /// Reconciliation failure
    ReconcileError = 2,
}

impl From<PassExitCode> for ExitCode {
    fn from(code: PassExitCode) -> Self {
        ExitCode::from(code as u8)
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = ReconcileConfig::new(
        cli.domain,
        Credentials::new(cli.api_key, cli.api_secret),
    )
    .with_ttl(cli.ttl)
    .with_timeout_secs(cli.timeout);

    if let Err(e) = config.validate() {
        eprintln!("Configuration error: {}", e);
        return PassExitCode::ConfigError.into();
    }

    let level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };

    let subscriber = FmtSubscriber::builder().with_max_level(level).finish();
    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Failed to set tracing subscriber: {}", e);
        return PassExitCode::ConfigError.into();
    }

    let rt = match tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
    {
        Ok(runtime) => runtime,
        Err(e) => {
            error!("Failed to create tokio runtime: {}", e);
            return PassExitCode::ReconcileError.into();
        }
    };

    rt.block_on(async {
        match run_pass(config).await {
            Ok(_) => PassExitCode::Success,
            Err(e) => {
                error!("Reconciliation failed: {:#}", e);
                PassExitCode::ReconcileError
            }
        }
    })
    .into()
}

/// Wire the clients and run one reconciliation pass
async fn run_pass(config: ReconcileConfig) -> Result<ReconcileOutcome> {
    let timeout = Duration::from_secs(config.timeout_secs);

    let ip_source =
        IpifySource::new(timeout).context("failed to build the IP lookup client")?;
    let provider = PorkbunProvider::new(config.credentials.clone(), timeout)
        .context("failed to build the Porkbun client")?;

    let reconciler = Reconciler::new(Box::new(ip_source), Box::new(provider), &config)?;
    let outcome = reconciler.run().await?;

    match &outcome {
        ReconcileOutcome::InSync { ip } => {
            info!("{} already resolves to {}; no update required", config.domain, ip);
        }
        ReconcileOutcome::Updated { previous_ip, new_ip } => {
            info!(
                "Updated {} A record: {} -> {} (ttl {})",
                config.domain, previous_ip, new_ip, config.ttl
            );
        }
    }

    Ok(outcome)
}
