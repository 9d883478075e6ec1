// src/core/target.rs

use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;
use url::Host;

static RE_SCHEME: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)^https?://").unwrap());

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TargetError {
    #[error("domain is required")]
    Empty,
    #[error("invalid host {input:?}: {reason}")]
    InvalidHost { input: String, reason: String },
}

/// A scheme-free, path-free host ready to be scanned.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Target(String);

impl Target {
    /// Normalizes user input into a bare host.
    ///
    /// Trims whitespace, drops a leading `http://` or `https://` and anything
    /// from the first `/`. Domains are lowercased and converted to punycode;
    /// IPv6 literals are stored without brackets. A `host:port` form is
    /// rejected.
    pub fn parse(input: &str) -> Result<Self, TargetError> {
        let trimmed = input.trim();
        let without_scheme = RE_SCHEME.replace(trimmed, "");
        let host = without_scheme.split('/').next().unwrap_or_default();
        if host.is_empty() {
            return Err(TargetError::Empty);
        }

        let invalid = |reason: String| TargetError::InvalidHost {
            input: input.to_string(),
            reason,
        };
        let parsed = Host::parse(host).map_err(|e| invalid(e.to_string()))?;
        let normalized = match parsed {
            Host::Domain(domain) => domain,
            Host::Ipv4(addr) => addr.to_string(),
            Host::Ipv6(addr) => addr.to_string(),
        };
        Ok(Self(normalized))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
