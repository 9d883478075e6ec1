// src/core/scanner/mod.rs

// This file acts as the public interface for the `scanner` module.
// It declares and makes all sub-scanner modules public.
pub mod headers_scanner;
pub mod http_client;
pub mod https_scanner;
pub mod port_scanner;

use std::future::Future;

use chrono::Utc;
use tracing::info;

use crate::config::ScanConfig;
use crate::core::models::{HeadersReport, HttpsReport, PortScanReport, ScanResult};
use crate::core::scoring::score;
use self::headers_scanner::probe_headers;
use self::https_scanner::probe_https;
use self::port_scanner::scan_ports;

/// Executes all probes concurrently against one host and scores the outcome.
///
/// `tokio::join!` waits for every probe before scoring, so the score is never
/// computed on partial results. Probes are independent: a timeout in one never
/// cancels another, and none of them can fail the scan.
///
/// # Arguments
///
/// * `target` - An already-normalized host (e.g., "example.com"), no scheme or path.
/// * `config` - Ports, timeouts and redirect limit for this scan.
pub async fn run_full_scan(target: &str, config: &ScanConfig) -> ScanResult {
    info!(target, "Starting full scan.");
    join_probes(
        target,
        scan_ports(target, &config.ports, config.port_timeout),
        probe_https(target, config),
        probe_headers(target, config),
    )
    .await
}

async fn join_probes(
    target: &str,
    ports: impl Future<Output = PortScanReport>,
    https: impl Future<Output = HttpsReport>,
    headers: impl Future<Output = HeadersReport>,
) -> ScanResult {
    let (ports, https, headers) = tokio::join!(ports, https, headers);

    let timestamp = Utc::now();
    let score = score(&https, &headers, &ports);
    info!(
        target,
        raw = score.raw,
        out_of = score.out_of,
        percent = score.percent,
        "Full scan finished."
    );

    ScanResult {
        domain: target.to_string(),
        timestamp,
        https,
        headers,
        ports,
        score,
    }
}
