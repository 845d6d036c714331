//! # Subnet Resolver
//!
//! Resolves a subnet selector against an inventory, caching repeated lookups.

mod bootstrap;
mod di;
mod output;

use anyhow::Context;
use clap::Parser;
use subnet_resolver_application::ports::LookupContext;
use subnet_resolver_domain::{CliOverrides, SubnetSelector};
use subnet_resolver_jobs::{CacheSweepJob, JobRunner};
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

use bootstrap::{init_logging, load_config};
use di::Services;
use output::OutputFormat;

#[derive(Parser)]
#[command(name = "subnet-resolver")]
#[command(version)]
#[command(about = "Resolve subnet selectors to concrete subnets")]
struct Cli {
    /// Path to the TOML configuration file
    #[arg(short = 'c', long)]
    config: Option<String>,

    /// Path to the JSON subnet inventory
    #[arg(short = 'i', long)]
    inventory: Option<String>,

    /// Selector entry as key=value; repeat for several entries
    #[arg(short = 's', long = "selector", value_name = "KEY=VALUE")]
    selectors: Vec<String>,

    /// Resolve the selector this many times
    #[arg(short = 'n', long, default_value_t = 1)]
    repeat: u32,

    /// Output format
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,

    /// Cache TTL in seconds
    #[arg(long)]
    cache_ttl_secs: Option<u64>,

    /// Per-lookup timeout in seconds
    #[arg(long)]
    timeout_secs: Option<u64>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let overrides = CliOverrides {
        inventory_path: cli.inventory.clone(),
        log_level: cli.log_level.clone(),
        cache_ttl_secs: cli.cache_ttl_secs,
        lookup_timeout_secs: cli.timeout_secs,
    };
    let config = load_config(cli.config.as_deref(), overrides)?;
    init_logging(&config);

    let selector = if cli.selectors.is_empty() {
        config
            .selector
            .clone()
            .filter(|selector| !selector.is_empty())
            .context("no selector given; pass --selector key=value or set [selector]")?
    } else {
        cli.selectors
            .iter()
            .map(|raw| SubnetSelector::parse_pair(raw))
            .collect::<Result<SubnetSelector, _>>()?
    };

    let services = Services::build(&config).await?;

    let shutdown = CancellationToken::new();
    let jobs = JobRunner::new()
        .with_cache_sweep(
            CacheSweepJob::new(services.cache.clone())
                .with_interval(config.resolver.cleanup_interval())
                .with_cancellation(shutdown.clone()),
        )
        .start()
        .await;

    let ctx = LookupContext::new().with_cancellation(shutdown.clone());

    let mut resolved = None;
    for attempt in 1..=cli.repeat.max(1) {
        let subnets = services
            .resolve_subnets
            .execute(&ctx, &selector)
            .await
            .with_context(|| format!("resolving {selector}"))?;
        info!(attempt, count = subnets.len(), "Resolve completed");
        resolved = Some(subnets);
    }

    shutdown.cancel();
    for handle in jobs {
        if let Err(e) = handle.await {
            warn!(error = %e, "Background job ended abnormally");
        }
    }

    if let Some(subnets) = resolved {
        let report = output::render(
            cli.format,
            &subnets,
            services.resolver.cache_stats(),
            services.lookup.call_count(),
        )?;
        print!("{report}");
    }

    Ok(())
}
