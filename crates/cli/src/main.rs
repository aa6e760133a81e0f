//! # dnsweep
//!
//! Sweeps the DNS records of a domain over TCP, against the system resolver
//! or one given on the command line.

mod bootstrap;
mod reporter;

use bootstrap::{init_logging, load_config};
use clap::Parser;
use colored::Colorize;
use dnsweep_application::ports::{NoopReporter, SweepReporter};
use dnsweep_application::use_cases::{LookupDomainUseCase, RunSweepUseCase, SelectEndpointUseCase};
use dnsweep_domain::{CliOverrides, Config};
use dnsweep_infrastructure::dns::TcpDnsExchange;
use dnsweep_infrastructure::system::ResolvConfReader;
use reporter::TerminalReporter;
use std::process::ExitCode;
use std::sync::Arc;
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use tracing::info;

#[derive(Parser)]
#[command(name = "dnsweep")]
#[command(version)]
#[command(about = "Sweep the DNS records of a domain over TCP")]
struct Cli {
    /// Domain to sweep
    domain: String,

    /// Resolver host to ask instead of the system default (no port)
    server: Option<String>,

    /// Path to configuration file
    #[arg(short = 'c', long)]
    config: Option<String>,

    /// Resolver port
    #[arg(short = 'p', long)]
    port: Option<u16>,

    /// Per-query timeout in milliseconds
    #[arg(short = 't', long)]
    timeout: Option<u64>,

    /// Resolver configuration file
    #[arg(long)]
    resolv_conf: Option<String>,

    /// Print the result as JSON
    #[arg(long)]
    json: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", format!("Error: {:#}", e).red());
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let overrides = CliOverrides {
        resolv_conf: cli.resolv_conf,
        port: cli.port,
        query_timeout: cli.timeout,
        log_level: cli.log_level,
    };

    let config = load_config(cli.config.as_deref(), overrides)?;
    init_logging(&config);

    info!(
        config_file = cli.config.as_deref().unwrap_or("default"),
        resolv_conf = %config.dns.resolv_conf,
        "Configuration loaded"
    );

    let lookup = build_lookup(&config, cli.json, shutdown_on_ctrl_c())?;
    let result = lookup.execute(&cli.domain, cli.server.as_deref()).await?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else if result.is_empty() {
        println!("No DNS Records found.");
    }

    Ok(())
}

fn build_lookup(
    config: &Config,
    json: bool,
    shutdown: CancellationToken,
) -> anyhow::Result<LookupDomainUseCase> {
    let catalog = config.sweep.catalog().map_err(anyhow::Error::msg)?;

    let reporter: Arc<dyn SweepReporter> = if json {
        Arc::new(NoopReporter)
    } else {
        Arc::new(TerminalReporter::new())
    };

    let provider = Arc::new(ResolvConfReader::with_path(config.dns.resolv_conf.clone()));
    let selector = SelectEndpointUseCase::new(provider).with_port(config.dns.port);

    let sweep = RunSweepUseCase::new(Arc::new(TcpDnsExchange::new()))
        .with_reporter(reporter)
        .with_catalog(catalog)
        .with_cancellation(shutdown);

    Ok(LookupDomainUseCase::new(selector, sweep)
        .with_query_timeout(config.dns.query_timeout.map(Duration::from_millis)))
}

fn shutdown_on_ctrl_c() -> CancellationToken {
    let token = CancellationToken::new();
    let trigger = token.clone();

    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            info!("Interrupted, cancelling sweep");
            trigger.cancel();
        }
    });

    token
}
