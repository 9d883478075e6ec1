// src/main.rs

use std::time::Duration;

use clap::{Parser, ValueEnum};
use color_eyre::eyre::Result;
use futures::future::join_all;
use tracing::info;

use posture_rs_scanner::config::{self, ScanConfig};
use posture_rs_scanner::core::scanner::run_full_scan;
use posture_rs_scanner::core::target::Target;
use posture_rs_scanner::{logging, report};

/// Probes a host's open ports, HTTPS/HSTS and security headers and scores the result.
#[derive(Debug, Parser)]
#[command(name = "posture-scan", version, about, long_about = None)]
struct Cli {
    /// Hosts to scan. A scheme or path is stripped (https://example.com/x -> example.com).
    #[arg(required = true)]
    targets: Vec<String>,

    /// Output format.
    #[arg(short, long, value_enum, default_value = "json")]
    format: OutputFormat,

    /// Comma-separated TCP ports to probe.
    #[arg(short, long, value_delimiter = ',', default_values_t = config::SCAN_PORTS)]
    ports: Vec<u16>,

    /// Per-port connect timeout in milliseconds.
    #[arg(long = "port-timeout-ms", default_value_t = config::PORT_TIMEOUT.as_millis() as u64)]
    port_timeout_ms: u64,

    /// HTTP/HTTPS fetch timeout in milliseconds.
    #[arg(long = "fetch-timeout-ms", default_value_t = config::FETCH_TIMEOUT.as_millis() as u64)]
    fetch_timeout_ms: u64,

    /// Maximum redirects followed per fetch.
    #[arg(long, default_value_t = config::MAX_REDIRECTS)]
    max_redirects: usize,

    /// Port for the secure root fetch.
    #[arg(long, default_value_t = config::HTTPS_PORT)]
    https_port: u16,

    /// Port for the insecure fallback fetch.
    #[arg(long, default_value_t = config::HTTP_PORT)]
    http_port: u16,

    /// Mirror logs to stderr.
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum, PartialEq)]
enum OutputFormat {
    Json,
    Text,
}

impl Cli {
    fn scan_config(&self) -> ScanConfig {
        ScanConfig {
            ports: self.ports.clone(),
            port_timeout: Duration::from_millis(self.port_timeout_ms),
            fetch_timeout: Duration::from_millis(self.fetch_timeout_ms),
            max_redirects: self.max_redirects,
            https_port: self.https_port,
            http_port: self.http_port,
            ..ScanConfig::default()
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();
    let log_path = logging::initialize_logging(cli.verbose)?;
    info!(log = %log_path.display(), "Logging initialized.");

    // Reject bad input before any probe runs.
    let targets = cli
        .targets
        .iter()
        .map(|raw| Target::parse(raw))
        .collect::<Result<Vec<_>, _>>()?;
    let config = cli.scan_config();

    // Each scan owns its own probes and clients; nothing is shared between them.
    let results = join_all(targets.iter().map(|t| run_full_scan(t.as_str(), &config))).await;

    match cli.format {
        OutputFormat::Json => {
            let json = match results.as_slice() {
                [single] => serde_json::to_string_pretty(single)?,
                many => serde_json::to_string_pretty(many)?,
            };
            println!("{json}");
        }
        OutputFormat::Text => {
            for result in &results {
                println!("{}", report::render_text(result));
            }
        }
    }

    Ok(())
}
