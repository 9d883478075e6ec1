// src/core/scanner/https_scanner.rs

use reqwest::Client;
use reqwest::header::STRICT_TRANSPORT_SECURITY;
use tracing::{info, warn};

use crate::config::ScanConfig;
use crate::core::models::HttpsReport;
use crate::core::scanner::http_client::{Scheme, build_client, fetch_root, root_url};

/// Checks whether the target answers over HTTPS and whether it sends HSTS.
///
/// Any HTTP status counts as a successful secure transport; only transport and
/// TLS failures (refused, DNS, handshake, timeout, redirect limit) mark the
/// target as not serving HTTPS.
pub async fn probe_https(target: &str, config: &ScanConfig) -> HttpsReport {
    info!(target, "Starting HTTPS scan.");

    let report = match build_client(config) {
        Ok(client) => {
            let url = root_url(Scheme::Https, target, Scheme::Https.port(config));
            probe_url(&client, &url).await
        }
        Err(e) => HttpsReport::unreachable(e.to_string()),
    };

    info!(https = report.https, hsts = report.hsts, "HTTPS scan finished.");
    report
}

pub(crate) async fn probe_url(client: &Client, url: &str) -> HttpsReport {
    match fetch_root(client, url).await {
        Ok(response) => {
            let status = response.status().as_u16();
            let hsts = response.headers().contains_key(STRICT_TRANSPORT_SECURITY);
            info!(status, hsts, "Received response over secure transport.");
            HttpsReport::reachable(status, hsts)
        }
        Err(e) => {
            warn!(url, error = %e, "Secure fetch failed.");
            HttpsReport::unreachable(e.to_string())
        }
    }
}
