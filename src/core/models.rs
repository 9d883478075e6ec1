// src/core/models.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, IntoEnumIterator, IntoStaticStr};

/// Note attached to a headers report when neither transport produced a response.
pub const HEADERS_UNREACHABLE_NOTE: &str = "Could not fetch headers";

// --- Port Scanner Models ---

/// Outcome of a single TCP connect attempt.
///
/// Either `open` is true and `error` is `None`, or `open` is false and `error`
/// carries the cause (`"timeout"` or the socket error text).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PortCheckResult {
    pub port: u16,
    pub open: bool,
    pub error: Option<String>,
}

impl PortCheckResult {
    pub fn open(port: u16) -> Self {
        Self { port, open: true, error: None }
    }

    pub fn closed(port: u16, error: Option<String>) -> Self {
        Self { port, open: false, error }
    }

    /// Classifies the raw `open`/`error` pair for display.
    pub fn state(&self) -> PortState {
        match (self.open, self.error.as_deref()) {
            (true, _) => PortState::Open,
            (false, None) => PortState::Closed,
            (false, Some("timeout")) => PortState::Timeout,
            (false, Some(_)) => PortState::Error,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "lowercase")]
pub enum PortState {
    Open,
    Closed,
    Timeout,
    Error,
}

/// Results of a port fan-out, in the same order as the requested ports.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PortScanReport {
    pub checked_ports: Vec<PortCheckResult>,
    pub duration_ms: u64,
}

impl PortScanReport {
    pub fn open_count(&self) -> usize {
        self.checked_ports.iter().filter(|p| p.open).count()
    }
}

// --- HTTPS Scanner Models ---

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct HttpsReport {
    pub https: bool,
    pub https_error: Option<String>,
    pub status_code: Option<u16>,
    pub hsts: bool,
    /// True whenever the secure transport completed. No chain inspection is done.
    pub certificate_valid: Option<bool>,
}

impl HttpsReport {
    /// A secure fetch that produced a response, whatever its status.
    pub fn reachable(status_code: u16, hsts: bool) -> Self {
        Self {
            https: true,
            https_error: None,
            status_code: Some(status_code),
            hsts,
            certificate_valid: Some(true),
        }
    }

    /// A secure fetch that failed at the transport or TLS layer.
    pub fn unreachable(error: impl Into<String>) -> Self {
        Self {
            https: false,
            https_error: Some(error.into()),
            status_code: None,
            hsts: false,
            certificate_valid: Some(false),
        }
    }
}

// --- HTTP Header Scanner Models ---

/// The security headers inspected on every scan, in report order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, IntoStaticStr)]
pub enum SecurityHeader {
    #[strum(serialize = "content-security-policy")]
    ContentSecurityPolicy,
    #[strum(serialize = "x-content-type-options")]
    XContentTypeOptions,
    #[strum(serialize = "x-frame-options")]
    XFrameOptions,
    #[strum(serialize = "referrer-policy")]
    ReferrerPolicy,
    #[strum(serialize = "permissions-policy")]
    PermissionsPolicy,
}

impl SecurityHeader {
    /// Lowercase canonical header name.
    pub fn name(self) -> &'static str {
        self.into()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct HeaderCheck {
    pub name: String,
    pub present: bool,
    pub value: Option<String>,
}

impl HeaderCheck {
    pub fn new(header: SecurityHeader, value: Option<String>) -> Self {
        Self {
            name: header.name().to_string(),
            present: value.is_some(),
            value,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct HeadersReport {
    pub checked_headers: Vec<HeaderCheck>,
    pub server_header: Option<String>,
    pub note: Option<String>,
}

impl HeadersReport {
    /// Every canonical header marked absent, with a note explaining why.
    pub fn unreachable(note: impl Into<String>) -> Self {
        Self {
            checked_headers: SecurityHeader::iter()
                .map(|header| HeaderCheck::new(header, None))
                .collect(),
            server_header: None,
            note: Some(note.into()),
        }
    }

    pub fn present_count(&self) -> usize {
        self.checked_headers.iter().filter(|h| h.present).count()
    }
}

// --- Score & Main Report ---

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ScoreSummary {
    pub raw: u32,
    pub out_of: u32,
    pub percent: u8,
}

/// The aggregated outcome of one scan of one host.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ScanResult {
    pub domain: String,
    pub timestamp: DateTime<Utc>,
    pub https: HttpsReport,
    pub headers: HeadersReport,
    pub ports: PortScanReport,
    pub score: ScoreSummary,
}
