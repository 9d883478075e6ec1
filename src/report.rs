// src/report.rs

use std::fmt::Write;

use crate::core::models::ScanResult;

/// Renders a plain-text summary of one scan.
pub fn render_text(result: &ScanResult) -> String {
    let mut out = String::new();
    let score = &result.score;

    let _ = writeln!(out, "{} ({})", result.domain, result.timestamp.to_rfc3339());
    let _ = writeln!(
        out,
        "  Score: {}/100 ({}) [{} of {} checks]",
        score.percent,
        score.rating(),
        score.raw,
        score.out_of
    );

    let https = &result.https;
    match (&https.status_code, &https.https_error) {
        (Some(status), _) => {
            let _ = writeln!(
                out,
                "  HTTPS: yes (status {}), HSTS: {}",
                status,
                if https.hsts { "yes" } else { "no" }
            );
        }
        (None, error) => {
            let _ = writeln!(out, "  HTTPS: no ({})", error.as_deref().unwrap_or("unknown error"));
        }
    }

    let headers = &result.headers;
    let _ = writeln!(
        out,
        "  Security headers: {}/{}",
        headers.present_count(),
        headers.checked_headers.len()
    );
    if let Some(note) = &headers.note {
        let _ = writeln!(out, "    note: {note}");
    }
    for header in &headers.checked_headers {
        let mark = if header.present { "+" } else { "-" };
        match &header.value {
            Some(value) => {
                let _ = writeln!(out, "    {mark} {}: {value}", header.name);
            }
            None => {
                let _ = writeln!(out, "    {mark} {}", header.name);
            }
        }
    }
    if let Some(server) = &headers.server_header {
        let _ = writeln!(out, "  Server: {server}");
    }

    let ports = &result.ports;
    let _ = writeln!(
        out,
        "  Ports: {} open of {} ({} ms)",
        ports.open_count(),
        ports.checked_ports.len(),
        ports.duration_ms
    );
    for port in &ports.checked_ports {
        match &port.error {
            Some(error) if error != "timeout" => {
                let _ = writeln!(out, "    {:>5} {} ({error})", port.port, port.state());
            }
            _ => {
                let _ = writeln!(out, "    {:>5} {}", port.port, port.state());
            }
        }
    }

    out
}
