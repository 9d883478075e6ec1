// src/core/scanner/headers_scanner.rs

use reqwest::header::{HeaderMap, SERVER};
use strum::IntoEnumIterator;
use tracing::{debug, info, warn};

use crate::config::ScanConfig;
use crate::core::models::{HEADERS_UNREACHABLE_NOTE, HeaderCheck, HeadersReport, SecurityHeader};
use crate::core::scanner::http_client::{Scheme, build_client, fetch_root, root_url};

/// Reads a header value, joining repeated occurrences with `", "`.
///
/// Lookup is case-insensitive (`HeaderMap` stores lowercase names). Non-UTF-8
/// bytes are decoded lossily so a present header always yields a value.
fn header_value(headers: &HeaderMap, name: &str) -> Option<String> {
    let values: Vec<String> = headers
        .get_all(name)
        .iter()
        .map(|v| String::from_utf8_lossy(v.as_bytes()).into_owned())
        .collect();
    if values.is_empty() {
        debug!(header_name = name, "Header not found.");
        None
    } else {
        debug!(header_name = name, "Header found.");
        Some(values.join(", "))
    }
}

/// Builds the report for the canonical security headers plus the server banner.
pub fn inspect_headers(headers: &HeaderMap) -> HeadersReport {
    HeadersReport {
        checked_headers: SecurityHeader::iter()
            .map(|header| HeaderCheck::new(header, header_value(headers, header.name())))
            .collect(),
        server_header: header_value(headers, SERVER.as_str()),
        note: None,
    }
}

/// Runs a scan for the canonical security headers.
///
/// The secure root is tried first and the insecure root only if that produced
/// no response. Attempts are sequential and stop at the first response. If
/// neither answers, every header is reported absent with a note.
pub async fn probe_headers(target: &str, config: &ScanConfig) -> HeadersReport {
    info!(target, "Starting headers scan.");

    let client = match build_client(config) {
        Ok(c) => c,
        Err(e) => {
            let mut report = HeadersReport::unreachable(HEADERS_UNREACHABLE_NOTE);
            report.note = Some(format!("{HEADERS_UNREACHABLE_NOTE}: {e}"));
            return report;
        }
    };

    for scheme in [Scheme::Https, Scheme::Http] {
        let url = root_url(scheme, target, scheme.port(config));
        match fetch_root(&client, &url).await {
            Ok(response) => {
                info!(url = %url, status = %response.status(), "Received HTTP response for headers scan.");
                let report = inspect_headers(response.headers());
                info!(present = report.present_count(), "Headers scan finished.");
                return report;
            }
            Err(e) => {
                warn!(url = %url, error = %e, "HTTP request failed for headers scan.");
            }
        }
    }

    warn!(target, "No transport produced a response, reporting all headers absent.");
    HeadersReport::unreachable(HEADERS_UNREACHABLE_NOTE)
}
